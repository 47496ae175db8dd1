//! Configuración y argumentos CLI

use std::path::PathBuf;
use std::str::FromStr;

use clap::{ArgAction, Parser, ValueEnum};

/// Formato de salida
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Texto original con la corrección tras cada artículo: "a [an] hour"
    #[default]
    Text,
    /// Lista de diagnósticos en JSON
    Json,
}

/// Par de marcadores que rodean la corrección sugerida
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Separator {
    pub open: String,
    pub close: String,
}

impl Default for Separator {
    fn default() -> Self {
        Self {
            open: "[".to_string(),
            close: "]".to_string(),
        }
    }
}

impl FromStr for Separator {
    type Err = String;

    /// "[]" → ("[", "]"), "<<>>" → ("<<", ">>")
    fn from_str(sep: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = sep.chars().collect();
        if chars.len() < 2 {
            return Err("el separador debe tener al menos 2 caracteres".to_string());
        }
        let mid = chars.len() / 2;
        Ok(Self {
            open: chars[..mid].iter().collect(),
            close: chars[mid..].iter().collect(),
        })
    }
}

#[derive(Debug, Clone, Parser)]
#[command(
    name = "articulo",
    version,
    about = "Revisa el uso de los artículos indefinidos \"a\"/\"an\" en textos en inglés",
    after_help = concat!(
        "EJEMPLOS:\n",
        "    articulo \"It took a hour\"\n",
        "    articulo --input texto.txt --format json\n",
        "    cat texto.txt | articulo"
    )
)]
pub struct Config {
    /// Texto a revisar
    #[arg(value_name = "TEXTO")]
    pub text: Option<String>,

    /// Archivo de entrada
    #[arg(short = 'i', long = "input", value_name = "ARCHIVO")]
    pub input_file: Option<PathBuf>,

    /// Archivo de salida
    #[arg(short = 'o', long = "output", value_name = "ARCHIVO")]
    pub output_file: Option<PathBuf>,

    /// Formato de salida
    #[arg(short = 'f', long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Separador de correcciones (se parte por la mitad)
    #[arg(short = 'g', long = "grammar-separator", value_name = "SEP", default_value = "[]")]
    pub grammar_separator: Separator,

    /// Desactiva una regla por su identificador (repetible)
    #[arg(long = "disable-rule", value_name = "ID")]
    pub disabled_rules: Vec<String>,

    /// Aumenta el detalle del log (-v, -vv, -vvv)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            text: None,
            input_file: None,
            output_file: None,
            format: OutputFormat::Text,
            grammar_separator: Separator::default(),
            disabled_rules: Vec::new(),
            verbose: 0,
        }
    }
}

impl Config {
    /// Interpreta un vector de argumentos (el primero es el nombre del programa)
    pub fn from_args(args: Vec<String>) -> Result<Self, clap::Error> {
        Self::try_parse_from(args)
    }

    /// Nivel de log según el número de `-v`
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
