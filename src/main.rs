use std::fs;
use std::io::{self, IsTerminal, Read};
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use articulo::{Config, Corrector, Error, Result};

fn main() {
    let config = Config::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("articulo={}", config.log_level())));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    if let Err(e) = run(&config) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run(config: &Config) -> Result<()> {
    let corrector = Corrector::new(config)?;

    // Obtener texto a revisar
    let text = if let Some(ref input_file) = config.input_file {
        fs::read_to_string(input_file).map_err(|source| Error::Read {
            path: input_file.clone(),
            source,
        })?
    } else if let Some(ref text) = config.text {
        text.clone()
    } else if !io::stdin().is_terminal() {
        let mut buffer = String::new();
        io::stdin().read_to_string(&mut buffer)?;
        buffer
    } else {
        return Err(Error::MissingInput);
    };

    let result = corrector.render(&text)?;

    // Escribir resultado
    if let Some(ref output_file) = config.output_file {
        fs::write(output_file, &result).map_err(|source| Error::Write {
            path: output_file.clone(),
            source,
        })?;
    } else {
        println!("{}", result);
    }

    Ok(())
}
