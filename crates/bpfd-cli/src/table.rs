//! Minimal table renderer for `bpfd ls` (§6).

use std::io::Write;

pub struct Column {
    pub name: &'static str,
}

pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<String>>,
}

const SEP: &str = "  ";

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Table {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn row(&mut self, cells: Vec<String>) {
        self.rows.push(cells);
    }

    /// Header plus rows, columns auto-sized from data, last column unpadded.
    pub fn render(&self, out: &mut impl Write) {
        let widths: Vec<usize> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let max_data = self.rows.iter().map(|row| row.get(i).map_or(0, |s| s.len())).max().unwrap_or(0);
                col.name.len().max(max_data)
            })
            .collect();

        let last = self.columns.len().saturating_sub(1);
        let header: Vec<String> = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, col)| pad(col.name, widths[i], i == last))
            .collect();
        let _ = writeln!(out, "{}", header.join(SEP));

        for row in &self.rows {
            let cells: Vec<String> = (0..self.columns.len())
                .map(|i| pad(row.get(i).map_or("", |s| s.as_str()), widths[i], i == last))
                .collect();
            let _ = writeln!(out, "{}", cells.join(SEP));
        }
    }
}

fn pad(text: &str, width: usize, last: bool) -> String {
    if last {
        text.to_string()
    } else {
        format!("{:<width$}", text)
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod tests;
