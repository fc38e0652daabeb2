//! Text normalization applied to extracted PDF lines.

use unicode_normalization::UnicodeNormalization;

/// Strip diacritics: NFKD-decompose and drop every non-ASCII char.
///
/// Letters without a decomposition vanish entirely (`ł` -> ``), which the
/// marker phrases account for.
pub fn fold_ascii(text: &str) -> String {
    text.nfkd().filter(char::is_ascii).collect()
}

/// Lines from the first line containing `start` up to, but excluding, the
/// next line containing `end`. Markers compare against the upper-cased
/// line; the window may open again after it closes.
pub fn marker_window<'a, I>(lines: I, start: &str, end: &str) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut inside = false;
    let mut result = Vec::new();

    for line in lines {
        let upper = line.to_uppercase();
        if upper.contains(start) {
            inside = true;
        }
        if upper.contains(end) {
            inside = false;
        }
        if inside {
            result.push(line.to_string());
        }
    }

    result
}
