//! Interactive console input

use std::io::{BufRead, Write};
use std::str::FromStr;

use super::error::{BenchError, Result};

/// Print `label`, read one line from `input` and parse it
///
/// End of input and unparsable values are reported as `BenchError::Input`.
pub fn prompt<T, R, W>(label: &str, input: &mut R, output: &mut W) -> Result<T>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    let line = read_answer(label, input, output)?;
    parse_answer(&line)
}

/// Like [`prompt`], but an empty line selects `default`
///
/// The default is shown in brackets after the label.
pub fn prompt_or_default<T, R, W>(label: &str, default: T, input: &mut R, output: &mut W) -> Result<T>
where
    T: FromStr + std::fmt::Display,
    R: BufRead,
    W: Write,
{
    let label = format!("{}[{}] ", label, default);
    let line = read_answer(&label, input, output)?;
    if line.trim().is_empty() {
        return Ok(default);
    }
    parse_answer(&line)
}

fn read_answer<R: BufRead, W: Write>(label: &str, input: &mut R, output: &mut W) -> Result<String> {
    write!(output, "{}", label)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(BenchError::Input(format!(
            "no value given for '{}'",
            label.trim_end_matches([':', ' '])
        )));
    }
    Ok(line)
}

fn parse_answer<T: FromStr>(line: &str) -> Result<T> {
    let trimmed = line.trim();
    trimmed
        .parse()
        .map_err(|_| BenchError::Input(format!("cannot parse '{}'", trimmed)))
}
