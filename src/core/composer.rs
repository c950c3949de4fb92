use crate::domain::model::{Draft, WordList};
use crate::utils::error::{PassgenError, Result};
use rand::{CryptoRng, Rng};

/// Draw `n` words from the list, each chosen independently and uniformly
/// (sampling with replacement, so repeats are possible).
///
/// The `CryptoRng` bound keeps seeded general-purpose generators out of
/// production call sites; passphrases must not be predictable from prior
/// outputs.
pub fn compose<R: Rng + CryptoRng>(words: &WordList, n: usize, rng: &mut R) -> Result<Draft> {
    if n == 0 {
        return Ok(Draft::default());
    }

    if words.is_empty() {
        return Err(PassgenError::InvalidArgumentError {
            message: format!("cannot draw {} word(s) from an empty wordlist", n),
        });
    }

    let mut picked = Vec::with_capacity(n);
    for _ in 0..n {
        let i = rng.gen_range(0..words.len());
        picked.push(words.words[i].clone());
    }

    Ok(Draft::new(picked))
}
