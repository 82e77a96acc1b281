use dirmap::ui::output;

fn main() {
    if let Err(err) = dirmap::cli::run() {
        output::error(format!("{err:#}"));
        std::process::exit(1);
    }
}
