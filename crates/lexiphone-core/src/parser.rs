//! Line-level parsing of the pronouncing dictionary format.
//!
//! An entry line looks like `WORD(2)  P1 P2 P3`: the headword, an optional
//! alternate-index suffix, exactly two spaces, then phoneme symbols separated
//! by single spaces. Anything else is skipped. Nothing here returns an
//! error; rejected lines come back as `None` or a [`LineOutcome`] variant.

use std::borrow::Cow;

use crate::pronunciation::Pronunciation;

/// Separator between the headword and the phoneme field
pub const FIELD_SEPARATOR: &str = "  ";

/// A fully validated entry line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    /// Headword with alternate-index suffixes removed, case untouched
    pub word: String,
    pub pronunciation: Pronunciation,
}

/// What a single input line turned out to be
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineOutcome {
    /// Comment, header or blank line
    Skipped,
    /// Admitted line without a two-space separator
    MissingSeparator,
    /// Phoneme field contains a symbol outside the inventory
    InvalidPronunciation,
    Entry(ParsedLine),
}

/// Split text at `\n`, `\r\n` or a lone `\r`.
///
/// A trailing line break does not produce an extra empty line.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        match rest.find(['\r', '\n']) {
            Some(i) => {
                let line = &rest[..i];
                let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + width..];
                Some(line)
            }
            None => Some(std::mem::take(&mut rest)),
        }
    })
}

/// Entry lines start with `A`-`Z` or an apostrophe.
pub fn is_entry_line(line: &str) -> bool {
    matches!(line.chars().next(), Some('A'..='Z' | '\''))
}

/// Split at the first two-space separator into `(head, tail)`.
///
/// A tab or a single space between the fields does not count, so such lines
/// yield `None`.
pub fn split_entry(line: &str) -> Option<(&str, &str)> {
    line.split_once(FIELD_SEPARATOR)
}

/// Remove every `(<digits>)` group from the head field.
pub fn strip_alternate_index(head: &str) -> Cow<'_, str> {
    if !head.contains('(') {
        return Cow::Borrowed(head);
    }

    let bytes = head.as_bytes();
    let mut out = String::with_capacity(head.len());
    let mut copied_to = 0;
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'(' {
            let digits = bytes[i + 1..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
            let close = i + 1 + digits;
            if digits > 0 && bytes.get(close) == Some(&b')') {
                out.push_str(&head[copied_to..i]);
                i = close + 1;
                copied_to = i;
                continue;
            }
        }
        i += 1;
    }
    out.push_str(&head[copied_to..]);

    Cow::Owned(out)
}

/// Validate a phoneme field. Any symbol outside the inventory rejects the
/// whole field.
pub fn parse_pronunciation(tail: &str) -> Option<Pronunciation> {
    tail.trim().parse().ok()
}

/// Classify one input line.
pub fn classify_line(line: &str) -> LineOutcome {
    if !is_entry_line(line) {
        return LineOutcome::Skipped;
    }

    let Some((head, tail)) = split_entry(line) else {
        return LineOutcome::MissingSeparator;
    };

    match parse_pronunciation(tail) {
        Some(pronunciation) => LineOutcome::Entry(ParsedLine {
            word: strip_alternate_index(head).into_owned(),
            pronunciation,
        }),
        None => LineOutcome::InvalidPronunciation,
    }
}

/// Parse one line into a word and its pronunciation, if it is a valid entry.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    match classify_line(line) {
        LineOutcome::Entry(parsed) => Some(parsed),
        _ => None,
    }
}
