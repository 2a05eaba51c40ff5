//! Segment scanner for stop names.
//!
//! A stop name is split into bracket groups, `/` and `-` separators, and
//! whitespace-delimited words. Bracket groups are recognised first so their
//! content is never split by separators.

/// A typed piece of a stop name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Whitespace-delimited word outside brackets.
    Word(&'a str),
    /// A `/` or `-` outside brackets.
    Separator(char),
    /// Inner text of a `(...)` group, untrimmed and never blank.
    Bracket(&'a str),
}

/// Characters that split words outside brackets and are kept as tokens.
pub fn is_separator(ch: char) -> bool {
    matches!(ch, '/' | '-')
}

/// Scan `text` into segments.
///
/// A bracket group runs from `(` to the next `)` and needs a non-blank
/// inner text; `()`, `( )` and an unclosed `(` are ordinary word characters.
/// The inner text may itself contain `(`.
pub fn tokenize(text: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut plain_start = 0;
    let mut pos = 0;
    while pos < text.len() {
        let rest = &text[pos..];
        if rest.starts_with('(') {
            match rest[1..].find(')') {
                Some(close) if !rest[1..=close].trim().is_empty() => {
                    split_plain(&text[plain_start..pos], &mut segments);
                    segments.push(Segment::Bracket(&rest[1..=close]));
                    pos += close + 2;
                    plain_start = pos;
                    continue;
                }
                Some(_) => {}
                // No `)` anywhere after this point, so no further groups.
                None => break,
            }
        }
        pos += rest.chars().next().map_or(1, char::len_utf8);
    }
    split_plain(&text[plain_start..], &mut segments);
    segments
}

fn split_plain<'a>(plain: &'a str, segments: &mut Vec<Segment<'a>>) {
    let mut word_start: Option<usize> = None;
    for (idx, ch) in plain.char_indices() {
        let separator = is_separator(ch);
        if separator || ch.is_whitespace() {
            if let Some(start) = word_start.take() {
                segments.push(Segment::Word(&plain[start..idx]));
            }
            if separator {
                segments.push(Segment::Separator(ch));
            }
        } else if word_start.is_none() {
            word_start = Some(idx);
        }
    }
    if let Some(start) = word_start {
        segments.push(Segment::Word(&plain[start..]));
    }
}
