use crate::core::{composer, inject, ConfigProvider, Draft, Passphrase, Pipeline, WordList, WordSource};
use crate::utils::error::Result;
use rand::rngs::OsRng;

/// The one concrete pipeline: words come from the configured source, the
/// draft is sampled with the OS CSPRNG, and the result is joined with the
/// configured separator.
pub struct GeneratorPipeline<S: WordSource, C: ConfigProvider> {
    source: S,
    config: C,
}

impl<S: WordSource, C: ConfigProvider> GeneratorPipeline<S, C> {
    pub fn new(source: S, config: C) -> Self {
        Self { source, config }
    }
}

impl<S: WordSource, C: ConfigProvider> Pipeline for GeneratorPipeline<S, C> {
    fn load_words(&self) -> Result<WordList> {
        self.source.load()
    }

    fn compose(&self, words: WordList) -> Result<Draft> {
        let mut rng = OsRng;
        let draft = composer::compose(&words, self.config.word_count(), &mut rng)?;

        if self.config.inject_special() {
            if draft.is_empty() {
                tracing::debug!("Empty draft, skipping special character injection");
                return Ok(draft);
            }
            return inject::inject(&draft, &mut rng);
        }

        Ok(draft)
    }

    fn render(&self, draft: Draft) -> Passphrase {
        draft.join(self.config.separator())
    }
}
