//! Rewrites of a whitespace-separated compiler flag string.
//!
//! Edits only tidy the whitespace where they cut or append; spacing
//! elsewhere, such as inside a quoted define, is left alone.

/// A single edit applied to a flag string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagOverride {
    /// Add a flag at the end.
    Append(String),
    /// Drop every flag equal to the given token.
    RemoveToken(String),
    /// Delete every occurrence of the text, wherever it appears.
    StripSubstring(String),
}

impl FlagOverride {
    /// Apply this edit.
    pub fn apply(&self, flags: &str) -> String {
        match self {
            FlagOverride::Append(token) => join_at_cut(flags, token),
            FlagOverride::RemoveToken(token) => {
                let mut out = String::new();
                for (sep, word) in words(flags) {
                    if word == token {
                        continue;
                    }
                    if !out.is_empty() {
                        out.push_str(sep);
                    }
                    out.push_str(word);
                }
                out
            }
            FlagOverride::StripSubstring(text) if text.is_empty() => flags.to_string(),
            FlagOverride::StripSubstring(text) => {
                let mut pieces = flags.split(text.as_str());
                let first = pieces.next().unwrap_or_default().to_string();
                pieces.fold(first, |acc, piece| join_at_cut(&acc, piece))
            }
        }
    }
}

/// Apply edits in order.
pub fn apply_overrides(flags: &str, overrides: &[FlagOverride]) -> String {
    overrides
        .iter()
        .fold(flags.to_string(), |acc, o| o.apply(&acc))
}

/// Join two pieces with exactly one space at the seam.
fn join_at_cut(left: &str, right: &str) -> String {
    let left = left.trim_end();
    let right = right.trim_start();
    match (left.is_empty(), right.is_empty()) {
        (true, _) => right.to_string(),
        (_, true) => left.to_string(),
        _ => format!("{left} {right}"),
    }
}

/// Each whitespace-separated word with the whitespace before it.
fn words(flags: &str) -> impl Iterator<Item = (&str, &str)> {
    let mut rest = flags;
    std::iter::from_fn(move || {
        let start = rest.find(|c: char| !c.is_whitespace())?;
        let (sep, tail) = rest.split_at(start);
        let end = tail.find(char::is_whitespace).unwrap_or(tail.len());
        let (word, tail) = tail.split_at(end);
        rest = tail;
        Some((sep, word))
    })
}
