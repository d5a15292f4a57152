//! INI parser
//!
//! Line-oriented: every line is a `[section]` header, a `key = value` or
//! `key[] = value` assignment, a `;`/`#` comment, or blank. Anything else is
//! skipped and reported as a [`ParseWarning`] rather than failing the whole
//! file; a half-readable config is more useful than none.

use std::path::Path;

use crate::domain::entities::Document;
use crate::domain::ports::FileSystem;
use crate::domain::value_objects::ErrorMode;
use crate::error::{StoreError, StoreResult};

/// A line that could not be understood
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseWarning {
    /// 1-indexed line number
    pub line: usize,
    pub message: String,
}

/// Parsed document plus the lines that were skipped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedDocument {
    pub document: Document,
    pub warnings: Vec<ParseWarning>,
}

/// Parse INI text into a document.
///
/// Values are kept as text. A repeated header continues the same section,
/// `key = v` replaces an earlier list, and `key[] = v` after a scalar starts
/// a new list.
pub fn parse_str(content: &str) -> ParsedDocument {
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);

    let mut parsed = ParsedDocument::default();
    let mut current: Option<String> = None;

    for (index, raw_line) in content.lines().enumerate() {
        let line_no = index + 1;
        let line = raw_line.trim();

        if line.is_empty() || line.starts_with(';') || line.starts_with('#') {
            continue;
        }

        let mut warn = |message: String| {
            parsed.warnings.push(ParseWarning {
                line: line_no,
                message,
            })
        };

        if line.starts_with('[') {
            match parse_header(line) {
                Ok(name) => {
                    parsed.document.section_mut(&name);
                    current = Some(name);
                }
                Err(message) => warn(message),
            }
            continue;
        }

        let Some(eq) = line.find('=') else {
            warn("expected `key = value`".to_string());
            continue;
        };

        let raw_key = line[..eq].trim();
        let (key, is_list) = match raw_key.strip_suffix("[]") {
            Some(stripped) => (stripped.trim_end(), true),
            None => (raw_key, false),
        };
        if key.is_empty() {
            warn("empty key".to_string());
            continue;
        }

        let Some(section_name) = current.as_deref() else {
            warn(format!("key '{}' appears before any [section] header", key));
            continue;
        };

        let value = match parse_value(line[eq + 1..].trim()) {
            Ok(value) => value,
            Err(message) => {
                warn(format!("{} for key '{}'", message, key));
                continue;
            }
        };

        let section = parsed.document.section_mut(section_name);
        if is_list {
            section.push(key, value);
        } else {
            section.insert(key, value);
        }
    }

    parsed
}

/// Read and parse a config file through the file-system port.
///
/// An unreadable file is `ConfigFileNotFound` in strict mode and an empty
/// document in lenient mode.
pub fn parse_file<F: FileSystem + ?Sized>(
    fs: &F,
    path: &Path,
    mode: ErrorMode,
) -> StoreResult<Document> {
    let content = match fs.read(path) {
        Ok(content) => content,
        Err(err) if mode.is_strict() => return Err(StoreError::from_read(path.to_path_buf(), err)),
        Err(err) => {
            tracing::warn!(
                path = %path.display(),
                error = %err,
                "config file unreadable, continuing with an empty document"
            );
            return Ok(Document::new());
        }
    };

    let parsed = parse_str(&content);
    for warning in &parsed.warnings {
        tracing::warn!(
            path = %path.display(),
            line = warning.line,
            "skipping config line: {}",
            warning.message
        );
    }

    tracing::debug!(
        path = %path.display(),
        sections = parsed.document.len(),
        "loaded config file"
    );
    Ok(parsed.document)
}

fn parse_header(line: &str) -> Result<String, String> {
    let Some(close) = line.find(']') else {
        return Err("unterminated section header".to_string());
    };
    let rest = line[close + 1..].trim();
    if !rest.is_empty() && !is_comment_start(rest) {
        return Err(format!("unexpected text after section header: '{}'", rest));
    }
    let name = line[1..close].trim();
    if name.is_empty() {
        return Err("empty section name".to_string());
    }
    Ok(name.to_string())
}

fn parse_value(raw: &str) -> Result<String, String> {
    if let Some(body) = raw.strip_prefix('"') {
        return parse_double_quoted(body);
    }
    if let Some(body) = raw.strip_prefix('\'') {
        let Some(close) = body.find('\'') else {
            return Err("unterminated quoted value".to_string());
        };
        check_trailing(&body[close + 1..])?;
        return Ok(body[..close].to_string());
    }
    Ok(strip_inline_comment(raw).to_string())
}

fn parse_double_quoted(body: &str) -> Result<String, String> {
    let mut value = String::with_capacity(body.len());
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                check_trailing(&body[i + 1..])?;
                return Ok(value);
            }
            '\\' => match chars.next() {
                Some((_, '"')) => value.push('"'),
                Some((_, '\\')) => value.push('\\'),
                Some((_, 'n')) => value.push('\n'),
                Some((_, 'r')) => value.push('\r'),
                Some((_, 't')) => value.push('\t'),
                Some((_, other)) => {
                    value.push('\\');
                    value.push(other);
                }
                None => value.push('\\'),
            },
            other => value.push(other),
        }
    }

    Err("unterminated quoted value".to_string())
}

fn check_trailing(rest: &str) -> Result<(), String> {
    let rest = rest.trim();
    if rest.is_empty() || is_comment_start(rest) {
        Ok(())
    } else {
        Err(format!("unexpected text '{}' after quoted value", rest))
    }
}

fn is_comment_start(s: &str) -> bool {
    s.starts_with(';') || s.starts_with('#')
}

/// Cut an unquoted value at a `;` that starts a comment (at the start or
/// after whitespace).
fn strip_inline_comment(raw: &str) -> &str {
    let mut prev_is_space = true;
    for (i, c) in raw.char_indices() {
        if c == ';' && prev_is_space {
            return raw[..i].trim_end();
        }
        prev_is_space = c.is_whitespace();
    }
    raw
}
