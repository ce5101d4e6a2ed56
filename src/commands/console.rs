//! Line-based terminal input shared by the interactive commands

use std::io::{self, BufRead, Write};

/// Print `prompt` and read one trimmed line; `None` at end of input
pub(crate) fn read_input<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Commands understood at every interactive prompt
pub(crate) fn is_quit(input: &str) -> bool {
    matches!(input, "quit" | "q" | "exit")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_trimmed_lines_until_eof() {
        let mut input = "  crane \nslate\n".as_bytes();
        let mut out = Vec::new();

        assert_eq!(
            read_input(&mut input, &mut out, "Guess").unwrap().as_deref(),
            Some("crane")
        );
        assert_eq!(
            read_input(&mut input, &mut out, "Guess").unwrap().as_deref(),
            Some("slate")
        );
        assert_eq!(read_input(&mut input, &mut out, "Guess").unwrap(), None);
        assert_eq!(String::from_utf8(out).unwrap(), "Guess: Guess: Guess: ");
    }

    #[test]
    fn quit_words() {
        assert!(is_quit("q"));
        assert!(is_quit("exit"));
        assert!(!is_quit("quiet"));
    }
}
