//! Word list loading utilities
//!
//! Word list files are plain text, one word per line, any case.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Load words from a file
///
/// Lines are trimmed and uppercased. Blank lines and entries that are not
/// five letters long are skipped; file order is preserved.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use wordle_heuristic::wordlists::loader::load_from_file;
///
/// let words = load_from_file("words/words_pt.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Path of the word list for `lang` inside `dir` (`<dir>/words_<lang>.txt`)
#[must_use]
pub fn language_file(dir: &Path, lang: &str) -> PathBuf {
    dir.join(format!("words_{lang}.txt"))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use wordle_heuristic::wordlists::loader::words_from_slice;
/// use wordle_heuristic::wordlists::WORDS_EN;
///
/// let words = words_from_slice(WORDS_EN);
/// assert_eq!(words.len(), WORDS_EN.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'a>(lines: impl Iterator<Item = &'a str>) -> Vec<Word> {
    lines
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .filter_map(|line| Word::new(line).ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let words = words_from_slice(&["crane", "Slate", " irate "]);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
        assert_eq!(words[2].text(), "IRATE");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let words = words_from_slice(&["crane", "toolong", "abc", "", "slate"]);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "CRANE");
        assert_eq!(words[1].text(), "SLATE");
    }

    #[test]
    fn words_from_slice_keeps_order_and_duplicates() {
        let words = words_from_slice(&["slate", "crane", "slate"]);
        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["SLATE", "CRANE", "SLATE"]);
    }

    #[test]
    fn load_from_file_reads_lines() {
        let path = std::env::temp_dir().join(format!(
            "wordle_heuristic_loader_{}.txt",
            std::process::id()
        ));
        fs::write(&path, "crane\nSLATE\n\nfoo\nação\nmaçãs\n").unwrap();

        let words = load_from_file(&path).unwrap();
        fs::remove_file(&path).unwrap();

        let texts: Vec<&str> = words.iter().map(Word::text).collect();
        assert_eq!(texts, ["CRANE", "SLATE", "MAÇÃS"]);
    }

    #[test]
    fn load_from_missing_file_fails() {
        assert!(load_from_file("/definitely/not/here/words_xx.txt").is_err());
    }

    #[test]
    fn language_file_naming() {
        let path = language_file(Path::new("lists"), "pt");
        assert_eq!(path, Path::new("lists").join("words_pt.txt"));
    }
}
