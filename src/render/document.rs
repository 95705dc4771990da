// Artifact encoding: the composed pages as a paginated fixed-width text
// document (form-feed page breaks, bordered table grids). No external
// consumer requires a bit-exact format; the layout mirrors the printed
// report sheet.

use bytes::Bytes;

use crate::models::{Block, ComposedDocument, Page, RunHourTable, StatsTable, TotalizerTable};

use super::TITLE_BLOCK;

const PAGE_WIDTH: usize = 110;
const PAGE_BREAK: char = '\u{0c}';

pub fn encode(document: &ComposedDocument) -> Bytes {
    let mut out = String::new();
    for (i, page) in document.pages.iter().enumerate() {
        if i > 0 {
            out.push(PAGE_BREAK);
        }
        write_page(&mut out, page);
    }
    Bytes::from(out)
}

fn write_page(out: &mut String, page: &Page) {
    for line in TITLE_BLOCK {
        push_centered(out, line);
    }
    push_centered(out, &format!("DAILY REPORT ON DATE: {}", page.report_date));
    if !page.period_text.is_empty() {
        push_centered(out, &format!("REPORT PERIOD: {}", page.period_text));
    }
    out.push('\n');
    push_centered(out, &page.title);
    out.push('\n');

    for block in &page.blocks {
        match block {
            Block::Caption { text } => {
                push_centered(out, text);
            }
            Block::InfoBar { cells } => {
                out.push_str(&grid(&[cells.clone()]));
            }
            Block::Stats { table } => {
                out.push_str(&stats_grid(table));
            }
            Block::Totalizer { table } => {
                out.push_str(&totalizer_grid(table));
            }
            Block::RunHours { table } => {
                out.push_str(&run_hour_grid(table));
            }
        }
        out.push('\n');
    }
}

fn push_centered(out: &mut String, text: &str) {
    let pad = PAGE_WIDTH.saturating_sub(text.chars().count()) / 2;
    for _ in 0..pad {
        out.push(' ');
    }
    out.push_str(text);
    out.push('\n');
}

fn stats_grid(table: &StatsTable) -> String {
    let mut rows = Vec::with_capacity(4);
    let mut header = vec![String::new()];
    header.extend(table.columns.iter().cloned());
    rows.push(header);
    for (name, values) in [("MAX", &table.max), ("MIN", &table.min), ("AVG", &table.avg)] {
        let mut row = vec![name.to_string()];
        row.extend(values.iter().cloned());
        rows.push(row);
    }
    grid(&rows)
}

fn totalizer_grid(table: &TotalizerTable) -> String {
    let mut rows = vec![vec![
        "TOTALIZER".to_string(),
        "INITIAL".to_string(),
        "FINAL".to_string(),
        "CUMULATIVE".to_string(),
    ]];
    for row in &table.rows {
        rows.push(vec![
            row.name.clone(),
            row.initial.clone(),
            row.final_value.clone(),
            row.cumulative.clone(),
        ]);
    }
    grid(&rows)
}

fn run_hour_grid(table: &RunHourTable) -> String {
    let mut rows = vec![vec![
        "PUMP NAME".to_string(),
        "START TIME".to_string(),
        "STOP TIME".to_string(),
        "DURATION".to_string(),
    ]];
    for row in &table.rows {
        rows.push(vec![
            row.pump_name.clone(),
            row.start_time.clone(),
            row.stop_time.clone(),
            row.duration.clone(),
        ]);
    }
    grid(&rows)
}

/// Bordered grid with per-column widths from the widest cell.
fn grid(rows: &[Vec<String>]) -> String {
    let columns = rows.iter().map(Vec::len).max().unwrap_or(0);
    if columns == 0 {
        return String::new();
    }
    let mut widths = vec![0usize; columns];
    for row in rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.chars().count());
        }
    }

    let rule = {
        let mut s = String::from("+");
        for w in &widths {
            s.push_str(&"-".repeat(w + 2));
            s.push('+');
        }
        s.push('\n');
        s
    };

    let mut out = rule.clone();
    for row in rows {
        out.push('|');
        for (i, width) in widths.iter().enumerate() {
            let cell = row.get(i).map(String::as_str).unwrap_or("");
            out.push(' ');
            out.push_str(cell);
            out.push_str(&" ".repeat(width - cell.chars().count() + 1));
            out.push('|');
        }
        out.push('\n');
        out.push_str(&rule);
    }
    out
}
