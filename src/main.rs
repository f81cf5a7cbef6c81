use clap::Parser;
use log::debug;
use serde_json::json;

use passgen::{CharacterClasses, GenerationRequest, Generator};

/// Generate a random password from selected character classes.
#[derive(Parser, Debug)]
#[command(name = "passgen", version, about)]
struct Cli {
    /// Password length (1-128)
    #[arg(short, long, default_value_t = 12)]
    length: i64,

    /// Exclude uppercase letters
    #[arg(long)]
    no_uppercase: bool,

    /// Exclude lowercase letters
    #[arg(long)]
    no_lowercase: bool,

    /// Exclude digits
    #[arg(long)]
    no_digits: bool,

    /// Include symbols
    #[arg(short, long)]
    symbols: bool,

    /// Print the result as a JSON record instead of a bare line
    #[arg(long)]
    json: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let request = GenerationRequest {
        length: cli.length,
        classes: CharacterClasses {
            uppercase: !cli.no_uppercase,
            lowercase: !cli.no_lowercase,
            digits: !cli.no_digits,
            symbols: cli.symbols,
        },
    };
    debug!("generation request: {request:?}");

    match Generator::new().generate(&request) {
        Ok(password) => {
            if cli.json {
                println!(
                    "{}",
                    json!({
                        "password": password,
                        "length": password.len(),
                        "classes": request.classes,
                    })
                );
            } else {
                println!("{password}");
            }
        }
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(2);
        }
    }
}
