pub mod filesystem;
pub mod template;

pub use filesystem::LocalFilesystem;
pub use template::MinijinjaTemplateRenderer;
