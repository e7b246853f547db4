//! Aligned ASCII tables for terminal output.
//!
//! Write-once value type: build with headings, push rows, print. Key/value
//! tables pass no headings and get a borderless-heading grid.

use std::fmt;

#[derive(Debug, Clone, Default)]
pub struct Table {
    title: Option<String>,
    headings: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<S: Into<String>>(headings: impl IntoIterator<Item = S>) -> Self {
        Table {
            title: None,
            headings: headings.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// A table with no heading row, rendered as plain rows. Used for the
    /// key/value result tables.
    pub fn key_value(title: impl Into<String>) -> Self {
        Table {
            title: Some(title.into()),
            headings: Vec::new(),
            rows: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn add_row<S: Into<String>>(&mut self, row: impl IntoIterator<Item = S>) {
        self.rows.push(row.into_iter().map(Into::into).collect());
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    fn column_count(&self) -> usize {
        self.rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(self.headings.len()))
            .max()
            .unwrap_or(0)
    }

    fn column_widths(&self) -> Vec<usize> {
        let cols = self.column_count();
        let mut widths = vec![0usize; cols];
        for (i, h) in self.headings.iter().enumerate() {
            widths[i] = widths[i].max(h.chars().count());
        }
        for row in &self.rows {
            for (i, cell) in row.iter().enumerate() {
                widths[i] = widths[i].max(cell.chars().count());
            }
        }
        widths
    }
}

fn border(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn render_row(widths: &[usize], cells: &[String]) -> String {
    let mut line = String::from("|");
    for (i, w) in widths.iter().enumerate() {
        let cell = cells.get(i).map(String::as_str).unwrap_or("");
        let pad = w - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut widths = self.column_widths();
        if widths.is_empty() {
            return Ok(());
        }

        // a title wider than the grid stretches the last column
        if let Some(title) = &self.title {
            let inner: usize = widths.iter().map(|w| w + 3).sum::<usize>() - 1;
            let deficit = title.chars().count().saturating_sub(inner);
            if let Some(last) = widths.last_mut() {
                *last += deficit;
            }
        }

        let sep = border(&widths);

        // inner width of the full grid, for the spanning title row
        let inner: usize = widths.iter().map(|w| w + 3).sum::<usize>() - 1;

        writeln!(f, "{sep}")?;
        if let Some(title) = &self.title {
            writeln!(f, "|{title:^inner$}|")?;
            writeln!(f, "{sep}")?;
        }
        if !self.headings.is_empty() {
            writeln!(f, "{}", render_row(&widths, &self.headings))?;
            writeln!(f, "{sep}")?;
        }
        for row in &self.rows {
            writeln!(f, "{}", render_row(&widths, row))?;
        }
        write!(f, "{sep}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_rows_aligned() {
        let mut t = Table::new(["id", "name"]);
        t.add_row(["1", "web1"]);
        t.add_row(["10", "db"]);
        let out = t.to_string();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[0], "+----+------+");
        assert_eq!(lines[1], "| id | name |");
        assert_eq!(lines[3], "| 1  | web1 |");
        assert_eq!(lines[4], "| 10 | db   |");
        assert_eq!(lines[5], lines[0]);
    }

    #[test]
    fn key_value_table_has_no_heading_row() {
        let mut t = Table::key_value("Results");
        t.add_row(["status", "OK"]);
        let out = t.to_string();
        assert!(out.contains("Results"));
        assert!(out.contains("| status | OK |"));
        // title border, title, border, row, border
        assert_eq!(out.lines().count(), 5);
    }

    #[test]
    fn wide_title_stretches_the_grid() {
        let mut t = Table::key_value("Droplet Creation Results");
        t.add_row(["status", "OK"]);
        let out = t.to_string();
        let lines: Vec<&str> = out.lines().collect();
        // every line of the grid is the same width
        assert!(lines.iter().all(|l| l.chars().count() == lines[0].chars().count()));
        assert!(out.contains("Droplet Creation Results"));
    }

    #[test]
    fn ragged_rows_pad_to_widest() {
        let mut t = Table::new(["a", "b"]);
        t.add_row(["only"]);
        let out = t.to_string();
        assert!(out.contains("| only |"));
    }
}
