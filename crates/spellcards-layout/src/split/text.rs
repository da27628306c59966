/// Collapse a description onto one line of single-spaced tokens.
///
/// Line breaks become spaces, runs of whitespace collapse, and stray
/// one-character tokens that are neither letters nor digits (bullets, lone
/// dashes left over from scraping) are dropped.
pub fn normalize_description(text: &str) -> String {
    text.split_whitespace()
        .filter(|token| !is_stray_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A single character that is neither a letter nor a digit
pub(crate) fn is_stray_token(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => !ch.is_alphanumeric(),
        _ => false,
    }
}

/// Split text into sentences.
///
/// A boundary is `.`, `!` or `?` followed by whitespace. Text without a
/// boundary is a single sentence; whitespace-only text has none.
pub fn sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;
    let mut previous = None;

    for (index, ch) in text.char_indices() {
        if ch.is_whitespace() && matches!(previous, Some('.' | '!' | '?')) {
            push_trimmed(&mut sentences, &text[start..index]);
            start = index;
        }
        previous = Some(ch);
    }
    push_trimmed(&mut sentences, &text[start..]);

    sentences
}

fn push_trimmed<'a>(out: &mut Vec<&'a str>, piece: &'a str) {
    let piece = piece.trim();
    if !piece.is_empty() {
        out.push(piece);
    }
}
