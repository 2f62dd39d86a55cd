//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

fn main() {
    if let Err(err) = folio_cli::run() {
        eprintln!("folio: {err}");
        std::process::exit(1);
    }
}
