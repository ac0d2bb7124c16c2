//! Section splitting and per-line parsers.
//!
//! A profile is a sequence of blocks separated by blank lines. Each block
//! starts with a header line; the parsers below only ever look inside the
//! block whose header carries the requested marker.

/// Normalize line endings and split on blank lines.
pub(crate) fn split_blocks(text: &str) -> Vec<String> {
    text.replace("\r\n", "\n")
        .split("\n\n")
        .map(str::to_owned)
        .collect()
}

/// First non-blank line of a block.
fn header(block: &str) -> Option<&str> {
    block.lines().find(|line| !line.trim().is_empty())
}

/// First block whose header contains `marker`.
pub(crate) fn find_block<'a>(blocks: &'a [String], marker: &str) -> Option<&'a str> {
    blocks
        .iter()
        .map(String::as_str)
        .find(|block| header(block).is_some_and(|h| h.contains(marker)))
}

/// Text between the first and second bullet marker on each bulleted line.
pub(crate) fn bullet_items(block: &str, bullet: &str) -> Vec<String> {
    block
        .lines()
        .filter(|line| line.contains(bullet))
        .filter_map(|line| line.split(bullet).nth(1))
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Text between the first and second `(` of each line that has both `(` and
/// `)`, cut at the first `)`.
pub(crate) fn parenthesized(block: &str) -> Vec<String> {
    block
        .lines()
        .filter(|line| line.contains('(') && line.contains(')'))
        .filter_map(|line| {
            let segment = line.split('(').nth(1)?;
            let inner = segment.split(')').next().unwrap_or(segment).trim();
            (!inner.is_empty()).then(|| inner.to_owned())
        })
        .collect()
}

/// First line mentioning any of `keywords`, trimmed.
pub(crate) fn first_line_with(block: &str, keywords: &[String]) -> Option<String> {
    block
        .lines()
        .find(|line| keywords.iter().any(|k| line.contains(k.as_str())))
        .map(|line| line.trim().to_owned())
}

/// Largest integer directly followed by a "year"/"years" word.
///
/// Accepts `5 years`, `5+ years` and `10 yrs`; returns 0 when nothing parses.
pub(crate) fn experience_years(block: &str) -> u32 {
    let words: Vec<&str> = block.split_whitespace().collect();
    words
        .windows(2)
        .filter(|pair| {
            let unit = pair[1]
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase();
            unit.starts_with("year") || unit == "yrs" || unit == "yr"
        })
        .filter_map(|pair| {
            pair[0]
                .trim_start_matches(|c: char| !c.is_ascii_digit())
                .trim_end_matches(|c: char| !c.is_ascii_digit())
                .parse::<u32>()
                .ok()
        })
        .max()
        .unwrap_or(0)
}
