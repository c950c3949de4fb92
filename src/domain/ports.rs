use crate::domain::model::{Draft, Passphrase, WordList};
use crate::utils::error::Result;

pub trait WordSource {
    fn load(&self) -> Result<WordList>;
}

pub trait ConfigProvider {
    fn word_count(&self) -> usize;
    fn inject_special(&self) -> bool;
    fn source_path(&self) -> &str;
    fn separator(&self) -> &str;
}

pub trait Pipeline {
    fn load_words(&self) -> Result<WordList>;
    fn compose(&self, words: WordList) -> Result<Draft>;
    fn render(&self, draft: Draft) -> Passphrase;
}
