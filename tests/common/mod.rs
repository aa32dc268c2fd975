//! Shared testing utilities for stackgen CLI tests.

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const WEB_SERVER_USERDATA: &str = "user-data/web_server-userdata.txt";
pub const SOCIALWORKER_USERDATA: &str = "user-data/socialworker-userdata.txt";
pub const TEMPLATE: &str = "templates/web_stack_autoscale.tmpl.erb";
pub const OUTPUT: &str = "json/web_stack_autoscale.tmpl.json";
pub const OUTPUT_DISPLAY: &str = "./json/web_stack_autoscale.tmpl.json";

pub const STACK_TEMPLATE: &str = r#"{
  "WebServerLaunchConfig": { "UserData": "<%= web_server_bootstrap_script %>" },
  "SocialWorkerLaunchConfig": { "UserData": "<%= socialworker_bootstrap_script %>" }
}
"#;

/// Testing harness providing an isolated build directory for CLI exercises.
#[allow(dead_code)]
pub struct TestContext {
    root: TempDir,
    work_dir: PathBuf,
}

#[allow(dead_code)]
impl TestContext {
    /// Create a new isolated environment with an empty build directory.
    pub fn new() -> Self {
        let root = TempDir::new().expect("Failed to create temp directory for tests");
        let work_dir = root.path().join("work");
        fs::create_dir_all(&work_dir).expect("Failed to create test work directory");
        Self { root, work_dir }
    }

    /// Create an environment laid out like the web stack build directory.
    pub fn with_stack_layout(web: &str, worker: &str) -> Self {
        let ctx = Self::new();
        ctx.write(WEB_SERVER_USERDATA, web);
        ctx.write(SOCIALWORKER_USERDATA, worker);
        ctx.write(TEMPLATE, STACK_TEMPLATE);
        ctx.create_dir("json");
        ctx
    }

    /// Path to the directory used for CLI invocations.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Build a command for invoking the compiled `stackgen` binary.
    pub fn cli(&self) -> Command {
        self.cli_in(self.work_dir())
    }

    /// Build a command for invoking the compiled `stackgen` binary within a custom directory.
    pub fn cli_in<P: AsRef<Path>>(&self, dir: P) -> Command {
        let mut cmd = Command::cargo_bin("stackgen").expect("Failed to locate stackgen binary");
        cmd.current_dir(dir.as_ref()).env_remove("RUST_LOG");
        cmd
    }

    /// Write a file relative to the work directory, creating parents.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.work_dir.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(path, content).expect("Failed to write test file");
    }

    pub fn create_dir(&self, relative: &str) {
        fs::create_dir_all(self.work_dir.join(relative)).expect("Failed to create directory");
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.work_dir.join(relative)).expect("Failed to read test file")
    }

    pub fn exists(&self, relative: &str) -> bool {
        self.work_dir.join(relative).exists()
    }

    pub fn remove(&self, relative: &str) {
        fs::remove_file(self.work_dir.join(relative)).expect("Failed to remove test file");
    }

    /// Names of the entries in a directory relative to the work directory.
    pub fn list(&self, relative: &str) -> Vec<String> {
        let mut names: Vec<String> = fs::read_dir(self.work_dir.join(relative))
            .expect("Failed to list directory")
            .map(|entry| {
                entry.expect("Failed to read entry").file_name().to_string_lossy().into_owned()
            })
            .collect();
        names.sort();
        names
    }
}
