use crate::domain::model::Draft;
use crate::utils::error::{PassgenError, Result};
use rand::{CryptoRng, Rng};

/// The fixed catalog of special characters, six rows of six. A character is
/// drawn by picking a row, then a column, each uniformly.
pub const SPECIAL_ROWS: [[char; 6]; 6] = [
    ['~', '!', '#', '$', '%', '^'],
    ['&', '*', '(', ')', '-', '='],
    ['+', '[', ']', '\\', '{', '}'],
    [':', ';', '"', '\'', '<', '>'],
    ['?', '/', '0', '1', '2', '3'],
    ['4', '5', '6', '7', '8', '9'],
];

pub fn catalog_contains(c: char) -> bool {
    SPECIAL_ROWS.iter().any(|row| row.contains(&c))
}

/// Rebuild one randomly chosen word of the draft around a random special
/// character, returning a new draft with that single element replaced.
///
/// The replacement is `word[pos] + special + word[0..=pos]` (char-wise): the
/// character at the chosen position is duplicated and everything after it is
/// dropped. Generated passphrases are checked against other tooling that
/// produces this exact shape, so the transformation must not be changed to a
/// plain insertion.
pub fn inject<R: Rng + CryptoRng>(draft: &Draft, rng: &mut R) -> Result<Draft> {
    if draft.is_empty() {
        return Err(PassgenError::InvalidArgumentError {
            message: "cannot inject a special character into an empty passphrase".to_string(),
        });
    }

    let word_index = rng.gen_range(0..draft.len());
    let chars: Vec<char> = draft.words[word_index].chars().collect();

    if chars.is_empty() {
        return Err(PassgenError::InvalidArgumentError {
            message: format!(
                "word at position {} is empty, cannot choose a character position",
                word_index
            ),
        });
    }

    let pos = rng.gen_range(0..chars.len());
    let row = &SPECIAL_ROWS[rng.gen_range(0..SPECIAL_ROWS.len())];
    let special = row[rng.gen_range(0..row.len())];

    let mut rebuilt = String::new();
    rebuilt.push(chars[pos]);
    rebuilt.push(special);
    rebuilt.extend(&chars[..=pos]);

    let mut words = draft.words.clone();
    words[word_index] = rebuilt;
    Ok(Draft::new(words))
}
