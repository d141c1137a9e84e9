use crate::display_width::push_spaces;

pub const LIFELINE: char = '|';

/// Horizontal geometry of one call row, from its source column to its target
/// column.
#[derive(Debug, Clone, PartialEq)]
pub struct Span {
    pub source: usize,
    pub target: usize,
    pub reverse: bool,
    /// Number of columns crossed; 0 for a self-call.
    pub columns: usize,
    /// `columns * block_width`.
    pub width: usize,
    /// One extra character per gutter crossed between the two ends.
    pub compensation: usize,
    /// Lifelines of every column left of the span.
    pub left_pad: String,
}

impl Span {
    pub fn new(source: usize, target: usize, block_width: usize) -> Self {
        let columns = source.abs_diff(target);
        Self {
            source,
            target,
            reverse: source > target,
            columns,
            width: columns * block_width,
            compensation: columns.saturating_sub(1),
            left_pad: left_pad(source.min(target), block_width),
        }
    }

    pub fn right(&self) -> usize {
        self.source.max(self.target)
    }

    pub fn is_self_call(&self) -> bool {
        self.columns == 0
    }

    /// Characters between the two end lifelines of the span.
    pub fn inner_width(&self) -> usize {
        self.width + self.compensation
    }
}

/// One `|` plus `block_width` spaces for each of the first `index` columns.
pub fn left_pad(index: usize, block_width: usize) -> String {
    let mut pad = String::with_capacity(index * (block_width + 1));
    for _ in 0..index {
        pad.push(LIFELINE);
        push_spaces(&mut pad, block_width);
    }
    pad
}
