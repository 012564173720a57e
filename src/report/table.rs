/// Describes how a column should align its contents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Alignment {
    Left,
    Right,
    Center,
}

/// Specifies the configuration for a single column in the rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableColumn {
    pub header: String,
    pub min_width: usize,
    pub max_width: Option<usize>,
    pub alignment: Alignment,
}

impl TableColumn {
    pub fn new(header: impl Into<String>, alignment: Alignment) -> Self {
        Self {
            header: header.into(),
            min_width: 0,
            max_width: None,
            alignment,
        }
    }

    pub fn max_width(mut self, width: usize) -> Self {
        self.max_width = Some(width);
        self
    }
}

/// Rows of pre-formatted cells plus the column layout used to render them.
#[derive(Clone, Debug)]
pub struct Table {
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
    pub show_headers: bool,
    pub padding: usize,
    /// Use `-` for rules instead of `─`.
    pub plain: bool,
}

impl Table {
    pub fn new(columns: Vec<TableColumn>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            show_headers: true,
            padding: 1,
            plain: false,
        }
    }

    pub fn push_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Content width of each column, bounded by `min_width`/`max_width`.
    pub fn compute_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let mut width = visible_width(&column.header).max(column.min_width);
                for row in &self.rows {
                    if let Some(cell) = row.get(idx) {
                        width = width.max(visible_width(cell));
                    }
                }
                if let Some(max_width) = column.max_width {
                    width = width.min(max_width);
                }
                width
            })
            .collect()
    }

    pub fn render_row(&self, row: &[String], widths: &[usize]) -> String {
        let rendered_cells: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                let cell_text = row.get(idx).map(|s| s.as_str()).unwrap_or("");
                render_cell(cell_text, widths[idx], column.alignment, self.padding)
            })
            .collect();

        rendered_cells.join(" ").trim_end().to_string()
    }

    pub fn render(&self) -> String {
        let widths = self.compute_widths();
        let mut lines = Vec::with_capacity(self.rows.len() + 2);

        if self.show_headers {
            let header: Vec<String> = self.columns.iter().map(|c| c.header.clone()).collect();
            lines.push(self.render_row(&header, &widths));
            lines.push(horizontal_rule(&widths, self.padding, self.plain));
        }
        for row in &self.rows {
            lines.push(self.render_row(row, &widths));
        }

        lines.join("\n")
    }
}

/// Character count, skipping ANSI escape sequences.
pub fn visible_width(text: &str) -> usize {
    let mut width = 0;
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for byte in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&byte) {
                    break;
                }
            }
            continue;
        }
        width += 1;
    }
    width
}

fn truncate_text(text: &str, width: usize) -> String {
    if visible_width(text) <= width {
        return text.to_string();
    }
    match width {
        0 => String::new(),
        1 => "…".to_string(),
        _ => {
            let mut result: String = strip_ansi(text).chars().take(width - 1).collect();
            result.push('…');
            result
        }
    }
}

fn strip_ansi(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for byte in chars.by_ref() {
                if ('\u{40}'..='\u{7e}').contains(&byte) {
                    break;
                }
            }
            continue;
        }
        out.push(ch);
    }
    out
}

/// Renders a single cell with padding and alignment applied.
pub fn render_cell(text: &str, width: usize, alignment: Alignment, padding: usize) -> String {
    let fitted = truncate_text(text, width);
    let remaining = width.saturating_sub(visible_width(&fitted));

    let (left_spaces, right_spaces) = match alignment {
        Alignment::Left => (0, remaining),
        Alignment::Right => (remaining, 0),
        Alignment::Center => (remaining / 2, remaining - (remaining / 2)),
    };

    format!(
        "{pad}{left}{fitted}{right}{pad}",
        pad = " ".repeat(padding),
        left = " ".repeat(left_spaces),
        right = " ".repeat(right_spaces),
    )
}

/// Builds a horizontal rule that spans the width of the table.
pub fn horizontal_rule(widths: &[usize], padding: usize, plain: bool) -> String {
    if widths.is_empty() {
        return String::new();
    }
    let total_width: usize =
        widths.iter().map(|w| w + (padding * 2)).sum::<usize>() + widths.len() - 1;
    let ch = if plain { '-' } else { '─' };
    ch.to_string().repeat(total_width)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_columns() -> Vec<TableColumn> {
        vec![
            TableColumn::new("NAME", Alignment::Left),
            TableColumn::new("VALUE", Alignment::Right).max_width(6),
        ]
    }

    #[test]
    fn header_only_table_has_rule() {
        let mut table = Table::new(two_columns());
        table.plain = true;
        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines, [" NAME   VALUE", "--------------"]);
    }

    #[test]
    fn long_cells_are_truncated_with_ellipsis() {
        let mut table = Table::new(two_columns());
        table.show_headers = false;
        table.padding = 0;
        table.push_row(vec!["x".into(), "1234567890".into()]);
        assert_eq!(table.render(), "x    12345…");
    }

    #[test]
    fn right_alignment_pads_on_the_left() {
        assert_eq!(render_cell("7", 3, Alignment::Right, 0), "  7");
        assert_eq!(render_cell("7", 3, Alignment::Center, 1), "  7  ");
    }

    #[test]
    fn ansi_sequences_do_not_count_towards_width() {
        assert_eq!(visible_width("\u{1b}[31mred\u{1b}[0m"), 3);
        assert_eq!(visible_width("plain"), 5);
    }
}
