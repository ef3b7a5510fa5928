use crate::domain::model::Table;

pub const DEFAULT_PREVIEW_ROWS: usize = 5;

const COLUMN_GAP: &str = "  ";

/// Renders the header and the first `n` rows as right-aligned text columns.
/// There is no index column.
pub fn render(table: &Table, n: usize) -> String {
    let header: Vec<String> = table.columns().iter().map(|c| c.to_string()).collect();
    let body: Vec<[String; 5]> = table.head(n).iter().map(|row| row.cells()).collect();

    let widths: Vec<usize> = header
        .iter()
        .enumerate()
        .map(|(col, name)| {
            body.iter()
                .map(|cells| cells[col].chars().count())
                .fold(name.chars().count(), usize::max)
        })
        .collect();

    let mut lines = Vec::with_capacity(body.len() + 1);
    lines.push(format_line(&header, &widths));
    for cells in &body {
        lines.push(format_line(cells, &widths));
    }
    lines.join("\n")
}

fn format_line(cells: &[String], widths: &[usize]) -> String {
    cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:>width$}", cell, width = width))
        .collect::<Vec<_>>()
        .join(COLUMN_GAP)
}

pub fn preview(table: &Table, n: usize) {
    println!("\n📋  Preview (first {} rows):\n", n.min(table.len()));
    println!("{}", render(table, n));
    println!("\n{}", "─".repeat(70));
}
