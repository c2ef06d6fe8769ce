//! Interactive confirmation before anything is spawned.

use std::io::{self, BufRead, Write};

/// Ask `Proceed? [Y/n]` on `output` and read the answer from `input`.
///
/// An empty answer, `y` or `yes` accepts. Anything else, including end of
/// input, declines.
///
/// # Errors
/// Returns any I/O error from reading or writing.
pub fn ask(input: &mut impl BufRead, output: &mut impl Write) -> io::Result<bool> {
    write!(output, "Proceed? [Y/n] ")?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}
