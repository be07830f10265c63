// src/main.rs

use runat::{cli, logging};

fn main() {
    let args = cli::parse();

    if let Err(err) = logging::init_logging(args.verbose) {
        eprintln!("runat error: {err}");
        std::process::exit(1);
    }

    // On Unix `run` only ever comes back with an error: the success path
    // replaces this process image outright. The Ok arm carries the child's
    // exit status on platforms where replacement is emulated by spawning.
    match runat::run(args) {
        Ok(status) => std::process::exit(status),
        Err(err) => {
            eprintln!("runat error: {err}");
            std::process::exit(1);
        }
    }
}
