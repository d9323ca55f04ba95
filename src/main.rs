//! # MIEP
//!
//! Run a MIEP program file.
//!

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "miep", version, about = "MIEP interpreter")]
struct Cli {
    /// Program file to run
    file: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let file = match cli.file {
        Some(file) => file,
        None => {
            println!("Usage: miep file");
            return;
        }
    };
    match miep::term::load(&file) {
        Ok(text) => miep::term::main(text),
        Err(e) => {
            eprintln!("Error loading file: {e}");
            std::process::exit(1);
        }
    }
}
