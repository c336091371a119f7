use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};

const TOKEN_PROMPT: &str =
    "Enter Authorization Token (e.g., 12345|AbCdEfGhIjKlMnOpQrStUvWxYz0123456789AbCdEfGh): ";
const INVALID_TOKEN: &str =
    "Invalid token format. Please ensure the token is in the correct 'ID|Token' format.";

/// Checks the `<id>|<secret>` shape: exactly one `|`, both halves non-empty
///
/// # Examples
///
/// ```
/// use b4nd_archiver::session::validate_token;
///
/// assert!(validate_token("12345|AbCdEf"));
/// assert!(!validate_token("12345|"));
/// assert!(!validate_token("1|2|3"));
/// ```
pub fn validate_token(token: &str) -> bool {
    match token.split_once('|') {
        Some((id, secret)) => !id.is_empty() && !secret.is_empty() && !secret.contains('|'),
        None => false,
    }
}

/// Reads one trimmed line; `None` at end of input
fn read_trimmed_line<R: BufRead>(reader: &mut R) -> Result<Option<String>> {
    let mut line = String::new();
    let read = reader.read_line(&mut line).context("Failed to read from input")?;
    if read == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts until a well-formed token is entered
///
/// There is no retry limit. End of input is an error rather than an endless loop.
pub fn read_token<R: BufRead, W: Write>(reader: &mut R, out: &mut W) -> Result<String> {
    loop {
        write!(out, "{}", TOKEN_PROMPT)?;
        out.flush()?;

        let Some(token) = read_trimmed_line(reader)? else {
            bail!("Input closed before a valid token was entered");
        };
        if validate_token(&token) {
            return Ok(token);
        }

        writeln!(out, "{}", INVALID_TOKEN)?;
    }
}

/// Prompts for `label` until a non-empty value is entered
pub fn read_non_empty<R: BufRead, W: Write>(
    reader: &mut R,
    out: &mut W,
    label: &str,
) -> Result<String> {
    loop {
        write!(out, "Enter {}: ", label)?;
        out.flush()?;

        let Some(value) = read_trimmed_line(reader)? else {
            bail!("Input closed before {} was entered", label);
        };
        if !value.is_empty() {
            return Ok(value);
        }

        writeln!(out, "{} cannot be empty. Please try again.", label)?;
    }
}
