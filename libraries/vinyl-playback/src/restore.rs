//! Parsing of the persisted last-played index

/// Parse a stored index and check it against the playlist length
///
/// Reads the leading decimal digits after optional whitespace and `+`, the
/// way browsers' `parseInt` does, so `"2.5"` and `"2abc"` both read as 2.
/// No leading digits, a `-` sign or an out-of-range value means "no restore".
pub fn parse_saved_index(raw: &str, playlist_len: usize) -> Option<usize> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    unsigned[..end]
        .parse::<usize>()
        .ok()
        .filter(|&index| index < playlist_len)
}
