pub mod composer;
pub mod engine;
pub mod inject;
pub mod pipeline;

pub use crate::domain::model::{Draft, Passphrase, WordList};
pub use crate::domain::ports::{ConfigProvider, Pipeline, WordSource};
pub use crate::utils::error::Result;
