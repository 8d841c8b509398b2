fn main() {
    trigctl::app::cli::run();
}
