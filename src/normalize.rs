// std imports
use std::borrow::Cow;

/// Converts backslash separators to forward slashes.
///
/// A run of backslashes becomes a single `/`, so `\\server\share` turns into
/// `/server/share`. Borrows the input when it contains no backslash.
pub fn unixify(path: &str) -> Cow<'_, str> {
    if !path.contains('\\') {
        return Cow::Borrowed(path);
    }

    let mut result = String::with_capacity(path.len());
    let mut chars = path.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\\' {
            while chars.next_if_eq(&'\\').is_some() {}
            result.push('/');
        } else {
            result.push(ch);
        }
    }
    Cow::Owned(result)
}

/// Strips a single trailing separator, keeping a lone `/` intact.
pub fn trim_trailing_separator(path: &str) -> Option<&str> {
    path.strip_suffix('/').filter(|rest| !rest.is_empty())
}
