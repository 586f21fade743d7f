fn main() {
    addonctl::app::cli::run();
}
