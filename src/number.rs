/**
 * Convert optional form text to an integer. Blank or absent text becomes
 * zero; otherwise the longest leading integer prefix of the trimmed text is
 * taken, so `"12"`, `"12.7"` and `"12abc"` all map to 12 while `"abc"` maps
 * to 0. This function is total: it never fails, and non-numeric input is
 * detectable only through `round_trips`.
 */
pub fn normalize(text: Option<&str>) -> i64 {
    let text = match text {
        Some(text) => text.trim(),
        None => return 0,
    };

    let digits = text
        .char_indices()
        .take_while(|(i, c)| c.is_ascii_digit() || (*i == 0 && *c == '-'))
        .count();

    text[..digits].parse().unwrap_or(0)
}




/**
 * Whether the text reproduces itself exactly after conversion through
 * `normalize`. Blank, absent, padded, or non-numeric text does not round
 * trip. This is the signal used to recognize open-ended bucket bounds; it is
 * never surfaced as an error.
 */
pub fn round_trips(text: Option<&str>) -> bool {
    match text {
        Some(text) => normalize(Some(text)).to_string() == text,
        None => false,
    }
}
