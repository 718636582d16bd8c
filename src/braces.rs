// std imports
use std::ops::Range;

// third-party imports
use once_cell::sync::Lazy;
use regex::Regex;

// local imports
use crate::error::{Error, Result};

// ---

static NUMERIC_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(-?\d+)\.\.(-?\d+)(?:\.\.(-?\d+))?$").expect("invalid regex"));
static ALPHA_RANGE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([a-zA-Z])\.\.([a-zA-Z])(?:\.\.(-?\d+))?$").expect("invalid regex"));

/// Expands brace sets in a pattern.
///
/// Supports lists (`{a,b}`), numeric ranges with optional step and zero padding
/// (`{1..10}`, `{1..10..2}`, `{01..10}`) and letter ranges (`{a..e}`). Sets may nest.
/// A brace pair with neither a top-level comma nor a valid range is kept literally,
/// as is an escaped `\{`. Patterns are produced left to right, first set varying slowest.
///
/// Fails when the expansion would produce more than `limit` patterns.
pub fn expand(pattern: &str, limit: usize) -> Result<Vec<String>> {
    let mut done = Vec::new();
    let mut pending = vec![pattern.to_owned()];

    while let Some(item) = pending.pop() {
        match find_set(&item, limit)? {
            Some((span, alternatives)) => {
                let (head, tail) = (&item[..span.start], &item[span.end..]);
                for alternative in alternatives.iter().rev() {
                    pending.push(format!("{head}{alternative}{tail}"));
                }
            }
            None => done.push(item),
        }
        if done.len() + pending.len() > limit {
            return Err(Error::TooManyExpansions { limit });
        }
    }

    log::debug!("expanded {:?} into {} pattern(s)", pattern, done.len());
    Ok(done)
}

// ---

fn find_set(pattern: &str, limit: usize) -> Result<Option<(Range<usize>, Vec<String>)>> {
    let bytes = pattern.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'{' => {
                if let Some(end) = closing_brace(bytes, i) {
                    if let Some(alternatives) = alternatives(&pattern[i + 1..end], limit)? {
                        return Ok(Some((i..end + 1, alternatives)));
                    }
                }
            }
            _ => {}
        }
        i += 1;
    }
    Ok(None)
}

fn closing_brace(bytes: &[u8], start: usize) -> Option<usize> {
    let mut depth = 0;
    let mut i = start;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
        i += 1;
    }
    None
}

fn alternatives(body: &str, limit: usize) -> Result<Option<Vec<String>>> {
    if let Some(values) = range(body, limit)? {
        return Ok(Some(values));
    }

    let bytes = body.as_bytes();
    let mut parts = Vec::new();
    let mut depth = 0;
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\\' => i += 1,
            b'{' => depth += 1,
            b'}' => depth -= 1,
            b',' if depth == 0 => {
                parts.push(body[start..i].to_owned());
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }
    if parts.is_empty() {
        return Ok(None);
    }
    parts.push(body[start..].to_owned());
    Ok(Some(parts))
}

fn range(body: &str, limit: usize) -> Result<Option<Vec<String>>> {
    if let Some(caps) = NUMERIC_RANGE.captures(body) {
        let (Ok(start), Ok(end), Some(step)) = (
            caps[1].parse::<i64>(),
            caps[2].parse::<i64>(),
            step(caps.get(3).map(|m| m.as_str())),
        ) else {
            return Ok(None);
        };

        let span = start.abs_diff(end) / step;
        if span >= limit as u64 {
            return Err(Error::TooManyExpansions { limit });
        }
        let count = span + 1;

        let width = if is_padded(&caps[1]) || is_padded(&caps[2]) {
            caps[1].len().max(caps[2].len())
        } else {
            0
        };
        let sign: i128 = if start <= end { 1 } else { -1 };
        let values = (0..count)
            .map(|k| pad(i128::from(start) + sign * i128::from(k * step), width))
            .collect();
        return Ok(Some(values));
    }

    if let Some(caps) = ALPHA_RANGE.captures(body) {
        let (Some(start), Some(end), Some(step)) = (
            caps[1].chars().next(),
            caps[2].chars().next(),
            step(caps.get(3).map(|m| m.as_str())),
        ) else {
            return Ok(None);
        };

        let (from, to) = (u32::from(start), u32::from(end));
        let mut values = Vec::new();
        let mut code = u64::from(from);
        let mut remaining = u64::from(from.abs_diff(to));
        loop {
            if let Some(ch) = char::from_u32(code as u32) {
                let mut value = String::new();
                if !ch.is_ascii_alphanumeric() {
                    value.push('\\');
                }
                value.push(ch);
                values.push(value);
            }
            if remaining < step {
                break;
            }
            remaining -= step;
            code = if from <= to { code + step } else { code - step };
        }
        return Ok(Some(values));
    }

    Ok(None)
}

fn step(text: Option<&str>) -> Option<u64> {
    match text {
        Some(text) => text.parse::<i64>().ok().map(|step| step.unsigned_abs().max(1)),
        None => Some(1),
    }
}

fn is_padded(text: &str) -> bool {
    let digits = text.trim_start_matches('-');
    digits.len() > 1 && digits.starts_with('0')
}

fn pad(value: i128, width: usize) -> String {
    match (width, value < 0) {
        (0, _) => value.to_string(),
        (_, true) => format!("-{:0>w$}", value.unsigned_abs(), w = width.saturating_sub(1)),
        (_, false) => format!("{:0>width$}", value),
    }
}
