//! Fixed-width table formatting.
//!
//! Widths are measured in terminal columns, so wide characters and ANSI
//! escapes are handled the same way the terminal draws them.

use console::{measure_text_width, pad_str, Alignment, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

const GAP: &str = "  ";
const MIN_FILL: usize = 8;
pub const DEFAULT_WIDTH: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Width {
    Fixed(usize),
    /// Shares whatever the fixed columns leave over.
    Fill,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub width: Width,
    pub align: Align,
}

impl Column {
    pub const fn fixed(header: &'static str, width: usize) -> Self {
        Column {
            header,
            width: Width::Fixed(width),
            align: Align::Left,
        }
    }

    pub const fn fill(header: &'static str) -> Self {
        Column {
            header,
            width: Width::Fill,
            align: Align::Left,
        }
    }

    pub const fn right(self) -> Self {
        Column {
            align: Align::Right,
            ..self
        }
    }
}

/// A record that can be drawn as one table line.
pub trait TableRow {
    const COLUMNS: &'static [Column];

    /// One cell per column, in column order.
    fn cells(&self) -> Vec<String>;
}

impl<T: TableRow> TableRow for &T {
    const COLUMNS: &'static [Column] = T::COLUMNS;

    fn cells(&self) -> Vec<String> {
        (**self).cells()
    }
}

/// Current terminal width, or [`DEFAULT_WIDTH`] when not attached to one.
pub fn terminal_width() -> usize {
    terminal_size::terminal_size()
        .map(|(w, _)| w.0 as usize)
        .unwrap_or(DEFAULT_WIDTH)
}

/// Truncates to `max_width` columns, ending with `…` when cut.
pub fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let limit = max_width - 1;
    let mut result = String::new();
    let mut current = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if current + w > limit {
            break;
        }
        result.push(c);
        current += w;
    }
    result.push('…');
    result
}

fn fit(s: &str, width: usize, align: Align) -> String {
    let cell = truncate_to_width(s, width);
    let alignment = match align {
        Align::Left => Alignment::Left,
        Align::Right => Alignment::Right,
    };
    pad_str(&cell, width, alignment, None).into_owned()
}

/// Resolves column widths for a line of `total` columns.
pub fn resolve_widths(columns: &[Column], total: usize) -> Vec<usize> {
    let gaps = GAP.len() * columns.len().saturating_sub(1);
    let fixed: usize = columns
        .iter()
        .map(|c| match c.width {
            Width::Fixed(w) => w,
            Width::Fill => 0,
        })
        .sum();
    let fills = columns.iter().filter(|c| c.width == Width::Fill).count();
    let spare = total.saturating_sub(fixed + gaps);
    let (share, mut extra) = if fills == 0 {
        (0, 0)
    } else {
        (spare / fills, spare % fills)
    };

    columns
        .iter()
        .map(|c| match c.width {
            Width::Fixed(w) => w,
            Width::Fill => {
                let bonus = usize::from(extra > 0);
                extra = extra.saturating_sub(1);
                (share + bonus).max(MIN_FILL)
            }
        })
        .collect()
}

/// Draws a header line plus one line per row.
pub fn render_table<'a, T, I>(rows: I, total_width: usize, styled: bool) -> String
where
    T: TableRow + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let widths = resolve_widths(T::COLUMNS, total_width);
    let header_style = Style::new().bold().force_styling(styled);

    let header = T::COLUMNS
        .iter()
        .zip(&widths)
        .map(|(col, w)| header_style.apply_to(fit(col.header, *w, col.align)).to_string())
        .collect::<Vec<_>>()
        .join(GAP);

    let mut lines = vec![header.trim_end().to_string()];
    for row in rows {
        let cells = row.cells();
        let line = T::COLUMNS
            .iter()
            .zip(&widths)
            .enumerate()
            .map(|(idx, (col, w))| {
                let cell = cells.get(idx).map(String::as_str).unwrap_or("");
                fit(cell, *w, col.align)
            })
            .collect::<Vec<_>>()
            .join(GAP);
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

/// Display width ignoring ANSI escapes.
pub fn display_width(s: &str) -> usize {
    measure_text_width(s)
}
