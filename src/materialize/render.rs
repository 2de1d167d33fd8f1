//! Placeholder substitution.
//!
//! A placeholder is `{{ Name }}`, with optional inner spaces and an optional
//! leading dot (`{{ .Name }}`). Names match `[A-Za-z_][A-Za-z0-9_-]*`.
//! Unbound names are left as written. A `{{` not followed by a name is plain
//! text, so JSX like `style={{ color: 'red' }}` passes through untouched.

use crate::error::{BoilerplateError, Result};
use crate::variables::Variables;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Render `input`, naming `origin` (a file or pattern) in errors.
pub fn render(input: &str, vars: &Variables, origin: &str) -> Result<String> {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;
    let mut consumed = 0;

    while let Some(start) = rest.find(OPEN) {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];

        match scan_placeholder(tail) {
            Scan::Placeholder { name, len } => {
                match vars.get(name) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&tail[..len]),
                }
                rest = &tail[len..];
                consumed += start + len;
            }
            Scan::Literal => {
                out.push('{');
                rest = &tail[1..];
                consumed += start + 1;
            }
            Scan::Empty => {
                return Err(render_error(origin, input, consumed + start, "empty placeholder"));
            }
            Scan::Unclosed { name } => {
                let message = format!("unclosed placeholder '{{{{ {}'", name);
                return Err(render_error(origin, input, consumed + start, &message));
            }
        }
    }

    out.push_str(rest);
    Ok(out)
}

enum Scan<'a> {
    Placeholder { name: &'a str, len: usize },
    Literal,
    Empty,
    Unclosed { name: &'a str },
}

/// Classify the text at a `{{`.
fn scan_placeholder(tail: &str) -> Scan<'_> {
    let bytes = tail.as_bytes();
    let mut i = skip_blanks(bytes, OPEN.len());

    if tail[i..].starts_with(CLOSE) {
        return Scan::Empty;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
    }

    let name_start = i;
    match bytes.get(i) {
        Some(c) if c.is_ascii_alphabetic() || *c == b'_' => i += 1,
        _ => return Scan::Literal,
    }
    while matches!(bytes.get(i), Some(c) if c.is_ascii_alphanumeric() || *c == b'_' || *c == b'-') {
        i += 1;
    }
    let name = &tail[name_start..i];

    i = skip_blanks(bytes, i);
    if tail[i..].starts_with(CLOSE) {
        return Scan::Placeholder {
            name,
            len: i + CLOSE.len(),
        };
    }
    match bytes.get(i) {
        None | Some(b'\n') | Some(b'\r') | Some(b'}') => Scan::Unclosed { name },
        Some(_) => Scan::Literal,
    }
}

fn skip_blanks(bytes: &[u8], mut i: usize) -> usize {
    while matches!(bytes.get(i), Some(b' ') | Some(b'\t')) {
        i += 1;
    }
    i
}

fn render_error(origin: &str, input: &str, offset: usize, message: &str) -> BoilerplateError {
    let line = input[..offset].matches('\n').count() + 1;
    BoilerplateError::TemplateRender {
        origin: origin.to_string(),
        message: format!("line {}: {}", line, message),
    }
}
