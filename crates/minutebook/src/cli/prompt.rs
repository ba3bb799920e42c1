//! Interactive confirmation for destructive commands.

use std::io::{self, BufRead, Write};

/// Ask a yes/no question; only an explicit yes confirms.
///
/// Empty input, end of input or any other answer declines.
///
/// # Errors
///
/// Returns an error if writing the question or reading the answer fails.
pub fn confirm<R: BufRead, W: Write>(question: &str, input: &mut R, output: &mut W) -> io::Result<bool> {
    write!(output, "{question} [y/N] ")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }

    Ok(matches!(
        answer.trim().to_lowercase().as_str(),
        "y" | "yes" | "s" | "si" | "sí"
    ))
}
