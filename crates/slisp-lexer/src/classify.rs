//! Token to atom classification.

use slisp_types::Atom;

/// Classify one token into a leaf atom.
///
/// Returns `None` for tokens that are not a valid boolean, number or symbol:
/// empty text, whitespace, control characters, parentheses, numbers outside
/// the finite `f64` range, and words that start like a number but do not
/// finish as one.
pub fn classify(token: &str) -> Option<Atom> {
    if token.is_empty()
        || token
            .chars()
            .any(|c| c.is_whitespace() || c.is_control() || c == '(' || c == ')')
    {
        return None;
    }

    match token {
        "True" => return Some(Atom::boolean(true)),
        "False" => return Some(Atom::boolean(false)),
        _ => {}
    }

    if is_number(token) {
        // Overflowing literals would print as `inf` and read back as a symbol.
        return token
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(Atom::number);
    }

    if starts_like_number(token) {
        return None;
    }

    Some(Atom::symbol(token))
}

/// `true` if `token` matches `[-+]?digits('.'digits)?([eE][-+]?digits)?`.
pub fn is_number(token: &str) -> bool {
    let bytes = token.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let digits = |i: &mut usize| {
        let start = *i;
        while bytes.get(*i).is_some_and(u8::is_ascii_digit) {
            *i += 1;
        }
        *i > start
    };

    if !digits(&mut i) {
        return false;
    }
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        if !digits(&mut i) {
            return false;
        }
    }
    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        if !digits(&mut i) {
            return false;
        }
    }
    i == bytes.len()
}

/// A leading digit, optionally after a sign, commits a token to being a
/// number.
fn starts_like_number(token: &str) -> bool {
    let rest = token.strip_prefix(['+', '-']).unwrap_or(token);
    rest.starts_with(|c: char| c.is_ascii_digit())
}
