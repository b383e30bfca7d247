//! Plain-text painter for the list projection.
//!
//! Rows are numbered from 1 in visible order; the command line uses the
//! same numbers to address rows.

use crate::types::TodoState;
use crate::view::{self, ListView};
use std::io::{self, Write};
use tasklist_runtime::render::{RenderError, Renderer};

/// Write `list` as text
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn paint(out: &mut impl Write, list: &ListView) -> io::Result<()> {
    if list.main_visible {
        let mark = if list.toggle_all_checked { "x" } else { " " };
        writeln!(out, "[{mark}] all")?;
        for (n, item) in list.items.iter().enumerate() {
            let mark = if item.completed { "x" } else { " " };
            writeln!(out, "{:>3}. [{mark}] {}", n + 1, item.title)?;
        }
    }

    let footer = &list.footer;
    if footer.visible {
        let links: Vec<String> = footer
            .links
            .iter()
            .map(|link| {
                if link.selected {
                    format!("<{}>", link.filter)
                } else {
                    link.filter.to_string()
                }
            })
            .collect();
        write!(
            out,
            "{} {} left | {}",
            footer.active_count,
            footer.active_word,
            links.join(" ")
        )?;
        if footer.show_clear_completed {
            write!(out, " | clear completed ({})", footer.completed_count)?;
        }
        writeln!(out)?;
    }

    out.flush()
}

/// Renderer painting every frame to a writer
#[derive(Debug)]
pub struct TextPainter<W> {
    out: W,
}

impl<W: Write> TextPainter<W> {
    /// Paint to `out`
    #[must_use]
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Renderer<TodoState> for TextPainter<W> {
    fn render(&mut self, state: &TodoState) -> Result<(), RenderError> {
        paint(&mut self.out, &view::render(state))?;
        Ok(())
    }
}
