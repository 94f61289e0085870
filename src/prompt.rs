//! Yes/no confirmation gate for destructive runs.

use std::io::{self, BufRead, Write};

/// Ask `question` on `out` and read one line from `input`.
///
/// Only `y` / `yes` (case-insensitive, surrounding whitespace ignored) confirm.
/// EOF or anything else declines.
pub fn confirm<R: BufRead, W: Write>(mut input: R, mut out: W, question: &str) -> io::Result<bool> {
    write!(out, "{question} (y/N): ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(false);
    }
    Ok(matches!(
        line.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// `confirm` against the process stdin/stdout.
pub fn confirm_stdin(question: &str) -> io::Result<bool> {
    let stdin = io::stdin();
    confirm(stdin.lock(), io::stdout(), question)
}
