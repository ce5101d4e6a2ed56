//! Word lists for the game
//!
//! An English list is embedded in the binary; other languages are read from
//! `words_<lang>.txt` files.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{WORDS_EN, WORDS_EN_COUNT};

use anyhow::{Context, Result, bail};
use std::path::Path;

/// Load the dictionary for `lang`
///
/// With a directory, reads `<dir>/words_<lang>.txt`. Without one, only the
/// embedded English list is available.
///
/// # Errors
///
/// Returns an error if the file cannot be read, no list exists for `lang`,
/// or the list has no five-letter words.
pub fn load_language(lang: &str, dir: Option<&Path>) -> Result<Dictionary> {
    let words = match dir {
        Some(dir) => {
            let path = loader::language_file(dir, lang);
            loader::load_from_file(&path)
                .with_context(|| format!("failed to read word list {}", path.display()))?
        }
        None if lang == "en" => loader::words_from_slice(WORDS_EN),
        None => bail!("no embedded word list for '{lang}'; pass --words-dir"),
    };

    Ok(Dictionary::new(lang, words)?)
}
