use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]*>").unwrap());

/// Uppercase the first character only.
pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Name casing: lowercase everything, then uppercase the start of each hyphenated part.
pub fn capitalize_name(part: &str) -> String {
    part.to_lowercase()
        .split('-')
        .map(capitalize_first)
        .collect::<Vec<_>>()
        .join("-")
}

/// NBSP to space, trim, and squeeze runs of spaces.
pub fn collapse_whitespace(text: &str) -> String {
    let replaced = text.replace('\u{a0}', " ");
    let mut out = String::with_capacity(replaced.len());
    let mut prev_space = false;
    for c in replaced.trim().chars() {
        if c == ' ' {
            if prev_space {
                continue;
            }
            prev_space = true;
        } else {
            prev_space = false;
        }
        out.push(c);
    }
    out
}

/// Split on any delimiter that is not inside parentheses, apply `transform`
/// to each raw piece, then collapse whitespace and capitalize. Empty pieces
/// are dropped.
pub fn split_normalize<F>(text: &str, delimiters: &[&str], transform: F) -> Vec<String>
where
    F: Fn(&str) -> String,
{
    split_pieces(text, delimiters)
        .into_iter()
        .map(|piece| capitalize_first(&collapse_whitespace(transform(piece).trim())))
        .filter(|piece| !piece.is_empty())
        .collect()
}

fn split_pieces<'a>(text: &'a str, delimiters: &[&str]) -> Vec<&'a str> {
    let delimiters: Vec<&str> = delimiters.iter().copied().filter(|d| !d.is_empty()).collect();
    if delimiters.is_empty() {
        return vec![text];
    }

    let mut pieces = Vec::new();
    let mut start = 0;
    let mut pos = 0;

    while pos < text.len() {
        let rest = &text[pos..];
        let hit = delimiters
            .iter()
            .find(|d| rest.starts_with(**d) && !inside_parens(&rest[d.len()..]));

        match hit {
            Some(d) => {
                pieces.push(&text[start..pos]);
                pos += d.len();
                start = pos;
            }
            None => pos += rest.chars().next().map_or(1, char::len_utf8),
        }
    }

    pieces.push(&text[start..]);
    pieces
}

/// A `)` shows up before any `(`.
fn inside_parens(after: &str) -> bool {
    after.chars().find(|c| matches!(c, '(' | ')')) == Some(')')
}

/// Tags removed and the usual entities decoded, for raw inner markup.
pub fn strip_markup(markup: &str) -> String {
    TAG_RE
        .replace_all(markup, "")
        .replace("&nbsp;", "\u{a0}")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}

/// Drop double quotes and surrounding periods.
pub fn strip_quotes_and_periods(text: &str) -> String {
    text.replace('"', "").trim_matches('.').to_string()
}
