use unicode_width::UnicodeWidthStr;

pub fn display_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Centers `text` in a field of `width` columns. An odd leftover space goes
/// to the right. Text wider than the field is returned unchanged.
pub fn center(text: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(text));
    let left = pad / 2;
    let right = pad - left;
    let mut out = String::with_capacity(text.len() + pad);
    push_spaces(&mut out, left);
    out.push_str(text);
    push_spaces(&mut out, right);
    out
}

/// Pads `line` with spaces until it is `col` columns wide.
/// Returns false if the line is already at or past `col`.
pub fn pad_to(line: &mut String, col: usize) -> bool {
    let width = display_width(line);
    if width >= col {
        return false;
    }
    push_spaces(line, col - width);
    true
}

pub fn push_spaces(line: &mut String, count: usize) {
    line.extend(std::iter::repeat_n(' ', count));
}
