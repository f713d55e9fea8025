use std::fmt::Write;

use roster_core::{FilterMode, ListViewModel, LoadStatus};

const HEADERS: [&str; 3] = ["#ID", "Name", "Description"];

/// Renders the view as a plain-text table followed by a status line.
pub fn render_table(view: &ListViewModel) -> String {
    let mut out = String::new();

    if view.status == LoadStatus::Loaded {
        let rows: Vec<[String; 3]> = view
            .rows
            .iter()
            .map(|row| [row.id.to_string(), row.name.clone(), row.description.clone()])
            .collect();

        let mut widths = HEADERS.map(|header| header.chars().count());
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        push_line(&mut out, ' ', &HEADERS.map(str::to_string), &widths);
        let rule = widths.map(|width| "-".repeat(width));
        push_line(&mut out, ' ', &rule, &widths);
        for (row, cells) in view.rows.iter().zip(&rows) {
            let marker = if row.selected { '*' } else { ' ' };
            push_line(&mut out, marker, cells, &widths);
        }
        let _ = writeln!(
            out,
            "{} of {} group(s) shown ({})",
            view.rows.len(),
            view.total,
            filter_label(view.filter)
        );
    } else if view.status == LoadStatus::Loading {
        out.push_str("Loading...\n");
    }

    if let Some(error) = &view.error {
        let _ = writeln!(out, "error: {error}");
    }
    out
}

fn push_line(out: &mut String, marker: char, cells: &[String; 3], widths: &[usize; 3]) {
    let _ = writeln!(
        out,
        "{marker} {:>w0$} | {:<w1$} | {}",
        cells[0],
        cells[1],
        cells[2],
        w0 = widths[0],
        w1 = widths[1],
    );
}

fn filter_label(filter: FilterMode) -> &'static str {
    match filter {
        FilterMode::Unset => "all",
        FilterMode::IncludeOnly => "subscribed",
        FilterMode::ExcludeOnly => "not subscribed",
    }
}
