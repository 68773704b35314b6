fn main() {
    n8n_deploy::app::cli::run();
}
