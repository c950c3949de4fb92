pub mod cli;

use crate::core::ConfigProvider;
use crate::utils::validation::{self, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "passgen")]
#[command(about = "Generate a memorable passphrase from a local wordlist")]
pub struct CliConfig {
    #[arg(default_value_t = 6, help = "Number of words in the pass phrase")]
    pub n: usize,

    #[arg(
        long,
        help = "Make the pass phrase stronger by randomly inserting a special character"
    )]
    pub special: bool,

    #[arg(
        long,
        default_value = "wordlist.txt",
        help = "Use an alternative word list (one <index><TAB><word> entry per line)"
    )]
    pub source: String,

    #[arg(long, default_value = " ", help = "Separator between words")]
    pub separator: String,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn word_count(&self) -> usize {
        self.n
    }

    fn inject_special(&self) -> bool {
        self.special
    }

    fn source_path(&self) -> &str {
        &self.source
    }

    fn separator(&self) -> &str {
        &self.separator
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> crate::utils::error::Result<()> {
        validation::validate_non_empty_string("source", &self.source)?;
        validation::validate_path("source", &self.source)?;
        Ok(())
    }
}
