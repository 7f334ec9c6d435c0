fn main() {
    if let Err(err) = endoscope_cli::run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
