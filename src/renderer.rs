use crate::display_width::center;
use crate::layout::{CallRow, Layout};
use crate::span::{LIFELINE, Span};

const ARROW_R: char = '>';
const ARROW_L: char = '<';
const DASH: char = '-';

/// Lazily rendered output lines of a [`Layout`]. Cloning, or calling
/// [`Layout::lines`] again, restarts from the header.
#[derive(Debug, Clone)]
pub struct Lines<'a> {
    layout: &'a Layout,
    cursor: Cursor,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Cursor {
    Header,
    Lifelines,
    Row { index: usize, part: Part },
    Done,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Part {
    CallLabel,
    CallArrow,
    ResultLabel,
    ResultArrow,
}

impl Cursor {
    fn row(layout: &Layout, index: usize) -> Self {
        if index < layout.rows.len() {
            Cursor::Row {
                index,
                part: Part::CallLabel,
            }
        } else {
            Cursor::Done
        }
    }

    fn after(self, layout: &Layout) -> Self {
        match self {
            Cursor::Header => Cursor::Lifelines,
            Cursor::Lifelines => Cursor::row(layout, 0),
            Cursor::Row { index, part } => match part {
                Part::CallLabel => Cursor::Row {
                    index,
                    part: Part::CallArrow,
                },
                Part::CallArrow if layout.rows[index].result.is_some() => Cursor::Row {
                    index,
                    part: Part::ResultLabel,
                },
                Part::ResultLabel => Cursor::Row {
                    index,
                    part: Part::ResultArrow,
                },
                Part::CallArrow | Part::ResultArrow => Cursor::row(layout, index + 1),
            },
            Cursor::Done => Cursor::Done,
        }
    }
}

impl Layout {
    pub fn lines(&self) -> Lines<'_> {
        let cursor = if self.entities.is_empty() {
            Cursor::Done
        } else {
            Cursor::Header
        };
        Lines {
            layout: self,
            cursor,
        }
    }
}

impl Iterator for Lines<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        let layout = self.layout;
        let line = match self.cursor {
            Cursor::Done => return None,
            Cursor::Header => layout.header(),
            Cursor::Lifelines => layout.lifelines(),
            Cursor::Row { index, part } => render_part(layout, &layout.rows[index], part),
        };
        self.cursor = self.cursor.after(layout);
        Some(line)
    }
}

impl std::iter::FusedIterator for Lines<'_> {}

pub fn render(layout: &Layout) -> String {
    layout.lines().collect::<Vec<_>>().join("\n")
}

fn render_part(layout: &Layout, row: &CallRow, part: Part) -> String {
    let span = &row.span;
    let line = match part {
        Part::CallLabel => label_line(span, &row.call_text),
        Part::CallArrow => arrow_line(span, span.reverse),
        // Results always flow back towards the lower column.
        Part::ResultLabel => label_line(span, row.result.as_deref().unwrap_or_default()),
        Part::ResultArrow => arrow_line(span, true),
    };
    emit(layout, span, line)
}

/// `text` centered between the two end lifelines of the span. A self-call
/// writes it into its own column, closed off by the next lifeline.
pub fn label_line(span: &Span, text: &str) -> String {
    let mut line = span.left_pad.clone();
    line.push(LIFELINE);
    if span.is_self_call() {
        line.push_str(text);
        return line;
    }
    line.push_str(&center(text, span.inner_width()));
    line.push(LIFELINE);
    line
}

/// Dashed arrow between the two end lifelines, head at the target end.
/// A self-call draws only its own lifeline.
pub fn arrow_line(span: &Span, reverse: bool) -> String {
    let mut line = span.left_pad.clone();
    line.push(LIFELINE);
    if span.width == 0 {
        return line;
    }
    let dashes = std::iter::repeat_n(DASH, span.width - 1 + span.compensation);
    if reverse {
        line.push(ARROW_L);
        line.extend(dashes);
    } else {
        line.extend(dashes);
        line.push(ARROW_R);
    }
    line.push(LIFELINE);
    line
}

/// Continues the lifelines of the columns right of the span.
pub fn emit(layout: &Layout, span: &Span, mut line: String) -> String {
    layout.push_lifelines_after(&mut line, span.right());
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::diagram::{Diagram, Interaction};
    use crate::layout::compute;
    use pretty_assertions::assert_eq;

    fn layout_for(entities: &[&str], calls: Vec<Interaction>, width: usize) -> Layout {
        let mut d = Diagram::new("Flow");
        for e in entities {
            d.add_entity(*e);
        }
        for call in calls {
            d.add_interaction(call);
        }
        compute(&d, &Config::with_screen_width(width)).unwrap()
    }

    #[test]
    fn arrow_line_forward_spans_two_columns() {
        let span = Span::new(0, 2, 5);
        let line = arrow_line(&span, false);
        assert_eq!(line, "|---------->|");
        assert_eq!(line.matches(DASH).count(), 2 * 5 - 1 + 1);
    }

    #[test]
    fn arrow_line_reverse_puts_head_first() {
        let span = Span::new(1, 0, 4);
        assert_eq!(arrow_line(&span, true), "|<---|");
    }

    #[test]
    fn arrow_line_self_call_is_bare_lifeline() {
        let span = Span::new(0, 0, 6);
        assert_eq!(arrow_line(&span, false), "|");
        assert_eq!(arrow_line(&span, true), "|");
    }

    #[test]
    fn arrow_line_self_call_keeps_left_lifelines() {
        let span = Span::new(2, 2, 3);
        let line = arrow_line(&span, false);
        assert_eq!(line, "|   |   |");
        assert_eq!(line.matches(DASH).count(), 0);
    }

    #[test]
    fn label_line_centers_text_with_odd_space_right() {
        let span = Span::new(0, 1, 6);
        assert_eq!(label_line(&span, "ab"), "|  ab  |");
        assert_eq!(label_line(&span, "abc"), "| abc  |");
    }

    #[test]
    fn label_line_matches_arrow_width() {
        let span = Span::new(3, 0, 7);
        let label = label_line(&span, "call");
        let arrow = arrow_line(&span, span.reverse);
        assert_eq!(label.len(), arrow.len());
    }

    #[test]
    fn label_line_self_call_writes_beside_lifeline() {
        let span = Span::new(1, 1, 4);
        assert_eq!(label_line(&span, "tick"), "|    |tick");
    }

    #[test]
    fn emit_continues_right_lifelines() {
        let layout = layout_for(&["A", "B", "C", "D"], vec![], 16);
        let span = Span::new(0, 1, layout.block_width);
        let line = emit(&layout, &span, arrow_line(&span, false));
        assert_eq!(line, "|--->|    |    |");
    }

    #[test]
    fn emit_keeps_a_gutter_after_overlong_label() {
        let layout = layout_for(&["A", "B", "C", "D"], vec![], 16);
        let span = Span::new(0, 1, layout.block_width);
        let line = emit(&layout, &span, label_line(&span, "overflowing"));
        assert_eq!(line, "|overflowing| | |");
    }

    #[test]
    fn emit_self_call_label_filling_its_column_keeps_next_lifeline() {
        let layout = layout_for(&["A", "B", "C"], vec![], 15);
        let span = Span::new(1, 1, layout.block_width);
        let line = emit(&layout, &span, label_line(&span, "tock!"));
        assert_eq!(line, "|     |tock!|");
    }

    #[test]
    fn emit_self_call_label_overrun_gets_a_gutter() {
        let layout = layout_for(&["A", "B", "C"], vec![], 15);
        let span = Span::new(1, 1, layout.block_width);
        let line = emit(&layout, &span, label_line(&span, "toolong"));
        assert_eq!(line, "|     |toolong |");
    }

    #[test]
    fn lines_empty_layout_yields_nothing() {
        let layout = compute(&Diagram::new("Empty"), &Config::default()).unwrap();
        assert_eq!(layout.lines().count(), 0);
        assert_eq!(render(&layout), "");
    }

    #[test]
    fn lines_result_adds_two_lines() {
        let layout = layout_for(
            &["A", "B"],
            vec![
                Interaction::new("A", "B", "get()").with_result("value"),
                Interaction::new("B", "A", "ack()"),
            ],
            10,
        );
        let lines: Vec<String> = layout.lines().collect();
        assert_eq!(
            lines,
            vec![
                "A     B",
                "|     |",
                "|get()|",
                "|---->|",
                "|value|",
                "|<----|",
                "|ack()|",
                "|<----|",
            ]
        );
    }

    #[test]
    fn lines_can_restart() {
        let layout = layout_for(&["A", "B"], vec![Interaction::new("A", "B", "go")], 10);
        let first: Vec<String> = layout.lines().collect();
        let mut partial = layout.lines();
        partial.next();
        let resumed = partial.clone().count();
        assert_eq!(resumed, first.len() - 1);
        assert_eq!(layout.lines().collect::<Vec<_>>(), first);
    }
}
