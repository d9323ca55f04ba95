extern crate ansi_term;
use crate::mach::{Event, Runtime};
use crate::{error, lang::Error};
use ansi_term::Style;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Run `text` to completion on the process stdin and stdout.
/// `*QU` exits the process from in here.
pub fn main(text: Vec<u8>) {
    let mut runtime = Runtime::default();
    runtime.load(text);
    runtime.start();
    if let Err(error) = main_loop(&mut runtime) {
        eprintln!("{}", error);
    }
}

fn main_loop(runtime: &mut Runtime) -> std::io::Result<()> {
    let stdout = std::io::stdout();
    loop {
        match runtime.execute(5000) {
            Event::Stopped => break,
            Event::Running => {}
            Event::Print(s) => {
                let mut out = stdout.lock();
                out.write_all(s.as_bytes())?;
                out.flush()?;
            }
            Event::Errors(errors) => {
                let mut out = stdout.lock();
                for error in errors.iter() {
                    out.write_fmt(format_args!(
                        "\n{}\n",
                        Style::new().bold().paint(format!("?{}", error))
                    ))?;
                }
                out.flush()?;
            }
            // A file that can't be read leaves the current program in place.
            Event::Load(s) => {
                if let Ok(text) = load(&s) {
                    runtime.load(text);
                }
            }
            Event::Quit => {
                stdout.lock().flush()?;
                std::process::exit(0);
            }
        }
    }
    Ok(())
}

/// Read a program file, mapping failures into interpreter errors.
pub fn load<P: AsRef<Path>>(filename: P) -> Result<Vec<u8>, Error> {
    match std::fs::read(filename.as_ref()) {
        Ok(text) => Ok(text),
        Err(error) => {
            let msg = error.to_string();
            match error.kind() {
                ErrorKind::NotFound => Err(error!(FileNotFound; msg.as_str())),
                _ => Err(error!(DiskIoError; msg.as_str())),
            }
        }
    }
}
