/// Left-pads `encoded` with `zero` until it is `min_width` symbols long.
///
/// Width is counted in symbols, not bytes. Strings already at or beyond
/// `min_width` come back unchanged; padding never truncates.
pub fn pad(encoded: &str, min_width: usize, zero: char) -> String {
    let width = encoded.chars().count();
    if width >= min_width {
        return encoded.to_string();
    }

    let fill = min_width - width;
    let mut padded = String::with_capacity(fill * zero.len_utf8() + encoded.len());
    padded.extend(std::iter::repeat_n(zero, fill));
    padded.push_str(encoded);
    padded
}

/// Builds the final string from little-endian digit symbols, padding as it goes.
pub(crate) fn finish(mut reversed: Vec<char>, min_width: usize, zero: char) -> String {
    if reversed.len() < min_width {
        reversed.resize(min_width, zero);
    }
    reversed.iter().rev().collect()
}
