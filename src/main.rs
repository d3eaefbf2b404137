use std::{fs, io::Read};

use calcscript::evaluate_script;
use clap::Parser;

/// calcscript evaluates a line-oriented assignment script and prints the
/// final variable snapshot.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Treat the input as a file path instead of script text.
    #[arg(short, long)]
    file: bool,

    /// Script text (or a path with --file). Reads stdin when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let script = match args.contents {
        Some(contents) if args.file => fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!(
                "Failed to read the input file '{contents}'. Perhaps this file does not exist?"
            );
            std::process::exit(1);
        }),
        Some(contents) => contents,
        None => {
            let mut buffer = String::new();
            if std::io::stdin().read_to_string(&mut buffer).is_err() {
                eprintln!("Failed to read the script from stdin.");
                std::process::exit(1);
            }
            buffer
        }
    };

    match evaluate_script(&script) {
        Ok(snapshot) => println!("{snapshot}"),
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
