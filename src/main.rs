use clap::Parser;
use passgen::utils::{logger, validation::Validate};
use passgen::{CliConfig, FileWordSource, GeneratorPipeline, PassphraseEngine};

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::debug!("Starting passgen CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let source = FileWordSource::new(config.source.clone());
    let pipeline = GeneratorPipeline::new(source, config);
    let engine = PassphraseEngine::new(pipeline);

    match engine.run() {
        Ok(passphrase) => {
            println!("{}", passphrase.text);

            if passphrase.is_weak() {
                println!("\nThe generated pass phrase is very short.\nTry again to create a longer one.");
            }
        }
        Err(e) => {
            tracing::error!("❌ Passphrase generation failed: {}", e);
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }
}
