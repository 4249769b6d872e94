//! Cursor editing shared by the single-line inputs (filter bar, command bar).
//!
//! The cursor is a byte offset into the text and always sits on a char
//! boundary, so Turkish letters (two bytes in UTF-8) move and delete as one.

/// Insert `c` at `cursor` and step past it.
pub fn insert(text: &mut String, cursor: &mut usize, c: char) {
    text.insert(*cursor, c);
    *cursor += c.len_utf8();
}

/// Delete the char before `cursor`. Returns `false` at the start of the line.
pub fn delete_back(text: &mut String, cursor: &mut usize) -> bool {
    if *cursor == 0 {
        return false;
    }
    let prev = prev_boundary(text, *cursor);
    text.remove(prev);
    *cursor = prev;
    true
}

pub fn step_left(text: &str, cursor: &mut usize) {
    *cursor = prev_boundary(text, *cursor);
}

pub fn step_right(text: &str, cursor: &mut usize) {
    *cursor = text[*cursor..]
        .chars()
        .next()
        .map_or(*cursor, |c| *cursor + c.len_utf8());
}

/// Display column of `cursor`, counted in chars.
pub fn column(text: &str, cursor: usize) -> u16 {
    text[..cursor].chars().count() as u16
}

fn prev_boundary(text: &str, cursor: usize) -> usize {
    text[..cursor].char_indices().next_back().map_or(0, |(i, _)| i)
}
