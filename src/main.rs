fn main() {
    ezcat::app::cli::run();
}
