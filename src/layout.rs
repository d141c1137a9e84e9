use std::cmp::Ordering;

use log::{debug, trace};

use crate::config::Config;
use crate::diagram::{Diagram, Interaction};
use crate::display_width::{display_width, pad_to};
use crate::error::RenderError;
use crate::span::{LIFELINE, Span};

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub entities: Vec<String>,
    pub block_width: usize,
    pub rows: Vec<CallRow>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallRow {
    pub span: Span,
    pub call_text: String,
    pub result: Option<String>,
}

/// `screen_width / entity_count` rounded to the nearest integer, ties to even.
pub fn block_width(screen_width: usize, entity_count: usize) -> Result<usize, RenderError> {
    if entity_count == 0 {
        return Err(RenderError::NoEntities);
    }
    let quotient = screen_width / entity_count;
    let remainder = screen_width % entity_count;
    let rounded = match (remainder * 2).cmp(&entity_count) {
        Ordering::Less => quotient,
        Ordering::Greater => quotient + 1,
        Ordering::Equal => quotient + (quotient & 1),
    };
    if rounded == 0 {
        return Err(RenderError::ScreenTooNarrow {
            screen_width,
            entities: entity_count,
        });
    }
    Ok(rounded)
}

/// Resolves every call up front so a bad reference fails before any line is
/// produced.
pub fn compute(diagram: &Diagram, config: &Config) -> Result<Layout, RenderError> {
    if diagram.is_empty() {
        debug!(diagram = diagram.name.as_str(); "no entities, nothing to lay out");
        return Ok(Layout {
            entities: Vec::new(),
            block_width: 0,
            rows: Vec::new(),
        });
    }

    let block_width = block_width(config.screen_width, diagram.entity_count())?;
    debug!(
        diagram = diagram.name.as_str(),
        entities = diagram.entity_count(),
        block_width;
        "computed column layout"
    );

    let rows = diagram
        .interactions()
        .iter()
        .map(|call| compute_row(diagram, call, block_width))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Layout {
        entities: diagram.entities().map(str::to_string).collect(),
        block_width,
        rows,
    })
}

fn compute_row(
    diagram: &Diagram,
    call: &Interaction,
    block_width: usize,
) -> Result<CallRow, RenderError> {
    let source = resolve(diagram, &call.source, call)?;
    let target = resolve(diagram, &call.target, call)?;
    let span = Span::new(source, target, block_width);
    trace!(
        label = call.label.as_str(),
        source,
        target,
        reverse = span.reverse;
        "laid out call"
    );

    Ok(CallRow {
        span,
        call_text: call.call_text(),
        result: call.result.clone(),
    })
}

fn resolve(diagram: &Diagram, name: &str, call: &Interaction) -> Result<usize, RenderError> {
    diagram
        .index_of(name)
        .ok_or_else(|| RenderError::UnknownEntity {
            name: name.to_string(),
            label: call.label.clone(),
        })
}

impl Layout {
    /// Distance between two neighbouring lifelines: the column body plus a
    /// one-character gutter. Arrow lengths (`width + compensation`) and the
    /// lifeline padding either side of a span only line up on this pitch, so
    /// the header and lifeline rows carry the gutter too.
    pub fn pitch(&self) -> usize {
        self.block_width + 1
    }

    pub fn column_offset(&self, column: usize) -> usize {
        column * self.pitch()
    }

    /// Entity names, each starting at its column offset.
    pub fn header(&self) -> String {
        self.place(self.entities.iter().map(String::as_str))
    }

    /// One lifeline per column.
    pub fn lifelines(&self) -> String {
        let bar = LIFELINE.to_string();
        self.place(std::iter::repeat_n(bar.as_str(), self.entities.len()))
    }

    /// Appends the lifelines of every column right of `column`.
    pub fn push_lifelines_after(&self, line: &mut String, column: usize) {
        for col in (column + 1)..self.entities.len() {
            self.advance_to_lifeline(line, col);
            line.push(LIFELINE);
        }
    }

    fn place<'a>(&self, cells: impl Iterator<Item = &'a str>) -> String {
        let mut line = String::new();
        for (col, cell) in cells.enumerate() {
            if col > 0 {
                self.advance_to_column(&mut line, col);
            }
            line.push_str(cell);
        }
        line
    }

    // Names never touch, even when one overruns its column.
    fn advance_to_column(&self, line: &mut String, column: usize) {
        if !pad_to(line, self.column_offset(column)) {
            line.push(' ');
        }
    }

    // A lifeline lands on its offset unless text has run past it, or the
    // line already ends in a lifeline at that spot.
    fn advance_to_lifeline(&self, line: &mut String, column: usize) {
        let offset = self.column_offset(column);
        match display_width(line).cmp(&offset) {
            Ordering::Less => {
                pad_to(line, offset);
            }
            Ordering::Equal if !line.ends_with(LIFELINE) => {}
            Ordering::Equal | Ordering::Greater => line.push(' '),
        }
    }
}
