pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::{cli::FileWordSource, CliConfig};
pub use core::{engine::PassphraseEngine, pipeline::GeneratorPipeline};
pub use domain::model::{Draft, Passphrase, WordList};
pub use utils::error::{PassgenError, Result};
