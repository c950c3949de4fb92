use crate::core::Pipeline;
use crate::domain::model::Passphrase;
use crate::utils::error::Result;

pub struct PassphraseEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PassphraseEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<Passphrase> {
        tracing::debug!("Loading word source...");
        let words = self.pipeline.load_words()?;
        tracing::debug!("Loaded {} words", words.len());

        tracing::debug!("Composing passphrase...");
        let draft = self.pipeline.compose(words)?;
        tracing::debug!("Composed {} words", draft.len());

        // The passphrase itself is never logged.
        let passphrase = self.pipeline.render(draft);
        tracing::debug!("Rendered passphrase ({} chars)", passphrase.char_len());

        Ok(passphrase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Draft, WordList};
    use crate::utils::error::PassgenError;

    struct StubPipeline {
        words: Vec<String>,
        fail_load: bool,
    }

    impl Pipeline for StubPipeline {
        fn load_words(&self) -> Result<WordList> {
            if self.fail_load {
                return Err(PassgenError::NotFoundError {
                    path: "missing.txt".to_string(),
                });
            }
            Ok(WordList::new(self.words.clone()))
        }

        fn compose(&self, words: WordList) -> Result<Draft> {
            Ok(Draft::new(words.words))
        }

        fn render(&self, draft: Draft) -> Passphrase {
            draft.join(" ")
        }
    }

    #[test]
    fn test_engine_runs_all_stages() {
        let engine = PassphraseEngine::new(StubPipeline {
            words: vec!["ab".to_string(), "cd".to_string()],
            fail_load: false,
        });

        let passphrase = engine.run().unwrap();
        assert_eq!(passphrase.text, "ab cd");
        assert!(passphrase.is_weak());
    }

    #[test]
    fn test_engine_propagates_stage_errors() {
        let engine = PassphraseEngine::new(StubPipeline {
            words: vec![],
            fail_load: true,
        });

        let err = engine.run().unwrap_err();
        assert!(matches!(err, PassgenError::NotFoundError { .. }));
        assert_eq!(err.exit_code(), 1);
    }
}
