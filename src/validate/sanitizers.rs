//! Input sanitizers.
//!
//! Pure functions that clean raw user input before it is stored or
//! redisplayed. Stripping script tags here is defense in depth; the
//! rendering layer still owns output encoding.

/// Strip `<script>...</script>` blocks and `javascript:` scheme prefixes,
/// then trim surrounding whitespace.
pub fn text(value: &str) -> String {
    let stripped = strip_script_blocks(value);
    let stripped = strip_javascript_scheme(&stripped);
    stripped.trim().to_string()
}

/// Keep only digits, `.` and `-`.
pub fn number(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect()
}

/// Keep only digits and `.`, collapse extra dots after the first one, and
/// truncate the fraction to at most `places` digits.
///
/// When the input holds more than one dot the fragments after the first are
/// concatenated without truncation; truncation only applies to a single
/// well-placed fraction.
pub fn decimal(value: &str, places: usize) -> String {
    let cleaned: String = value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    let parts: Vec<&str> = cleaned.split('.').collect();
    if parts.len() > 2 {
        return format!("{}.{}", parts[0], parts[1..].join(""));
    }
    if parts.len() == 2 && parts[1].len() > places {
        return format!("{}.{}", parts[0], &parts[1][..places]);
    }
    cleaned
}

/// Remove every `<script ...>...</script>` block, matching the opening and
/// closing tags case-insensitively. An opening tag with no closing tag is
/// left alone. The tag name must end at a word boundary so `<scripted>` is
/// not treated as a script tag.
fn strip_script_blocks(input: &str) -> String {
    const OPEN: &str = "<script";
    const CLOSE: &str = "</script>";

    let lower = input.to_ascii_lowercase();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while let Some(rel) = lower[pos..].find(OPEN) {
        let start = pos + rel;
        let after_tag = start + OPEN.len();
        let at_boundary = lower
            .as_bytes()
            .get(after_tag)
            .is_none_or(|b| !b.is_ascii_alphanumeric() && *b != b'_');
        if !at_boundary {
            out.push_str(&input[pos..after_tag]);
            pos = after_tag;
            continue;
        }
        match lower[after_tag..].find(CLOSE) {
            Some(close_rel) => {
                out.push_str(&input[pos..start]);
                pos = after_tag + close_rel + CLOSE.len();
            }
            None => break,
        }
    }
    out.push_str(&input[pos..]);
    out
}

/// Remove every case-insensitive occurrence of `javascript:`.
fn strip_javascript_scheme(input: &str) -> String {
    const SCHEME: &str = "javascript:";

    let lower = input.to_ascii_lowercase();
    let mut out = String::with_capacity(input.len());
    let mut pos = 0;
    while let Some(rel) = lower[pos..].find(SCHEME) {
        let start = pos + rel;
        out.push_str(&input[pos..start]);
        pos = start + SCHEME.len();
    }
    out.push_str(&input[pos..]);
    out
}
