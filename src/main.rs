fn main() {
    stackgen::app::cli::run();
}
