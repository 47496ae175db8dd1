//! Articulo - Corrector de artículos indefinidos en inglés
//!
//! Marca "a"/"an" cuando no concuerdan con la pronunciación de la palabra
//! siguiente ("a hour" → "an hour", "an unicorn" → "a unicorn").

pub mod article;
pub mod config;
pub mod corrector;
pub mod error;
pub mod grammar;
pub mod numbers;

pub use article::{classify, Classification, IndefiniteArticleRule};
pub use config::{Config, OutputFormat};
pub use corrector::Corrector;
pub use error::{Error, Result};
pub use grammar::Diagnostic;
