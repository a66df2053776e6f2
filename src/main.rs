fn main() {
    virtual_ui::app::cli::run();
}
