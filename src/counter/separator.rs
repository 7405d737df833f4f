/// Characters that never belong to a word.
pub const SEPARATORS: [char; 12] = ['!', ',', '.', ' ', '"', ';', ':', '(', ')', '?', '/', '-'];

const SEPARATOR_TABLE: [bool; 128] = build_table();

const fn build_table() -> [bool; 128] {
    let mut table = [false; 128];
    let mut i = 0;
    while i < SEPARATORS.len() {
        table[SEPARATORS[i] as usize] = true;
        i += 1;
    }
    table
}

/// Returns `true` if `c` is a separator character.
///
/// Only ASCII characters can be separators; tabs and other whitespace outside
/// the fixed set are word characters.
#[must_use]
pub const fn is_separator(c: char) -> bool {
    c.is_ascii() && SEPARATOR_TABLE[c as usize]
}

#[cfg(test)]
#[path = "separator_tests.rs"]
mod tests;
