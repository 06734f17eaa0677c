//! mediseg - Media Tree Segregator
//!
//! Entry point for the mediseg CLI application.

use clap::Parser;
use mediseg::cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = mediseg::run_app(cli) {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}
