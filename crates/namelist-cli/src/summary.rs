use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use namelist_core::{WriteOutcome, WriteStatus};

use crate::types::MergeResult;

pub fn print_summary(result: &MergeResult) {
    println!("New name file:     {}", result.new_file.display());
    println!("Default name file: {}", result.default_file.display());

    let mut counts = Table::new();
    counts.set_header(vec![header_cell("List"), header_cell("Entries")]);
    apply_table_style(&mut counts);
    align_column(&mut counts, 1, CellAlignment::Right);
    counts.add_row(vec![Cell::new("Default names"), Cell::new(result.default_count)]);
    counts.add_row(vec![Cell::new("New names"), Cell::new(result.new_count)]);
    counts.add_row(vec![
        Cell::new("Duplicates removed"),
        count_cell(result.removed.len(), Color::Yellow),
    ]);
    counts.add_row(vec![Cell::new("Reduced names"), Cell::new(result.reduced_count)]);
    println!("{counts}");

    let mut outputs = Table::new();
    outputs.set_header(vec![
        header_cell("Output"),
        header_cell("Path"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut outputs);
    align_column(&mut outputs, 2, CellAlignment::Center);
    if let Some(conversion) = &result.conversion {
        outputs.add_row(output_row("Converted", &conversion.outcome));
    }
    outputs.add_row(output_row("Reduced", &result.reduced));
    outputs.add_row(output_row("Merged", &result.merged));
    println!("{outputs}");

    if !result.removed.is_empty() {
        println!("Removed duplicates:");
        for name in &result.removed {
            println!("- {name}");
        }
    }
}

fn output_row(label: &str, outcome: &WriteOutcome) -> Vec<Cell> {
    vec![
        Cell::new(label).fg(Color::Blue).add_attribute(Attribute::Bold),
        Cell::new(outcome.path.display()),
        status_cell(outcome.status),
    ]
}

fn status_cell(status: WriteStatus) -> Cell {
    match status {
        WriteStatus::Written => Cell::new("written")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        WriteStatus::SkippedExists => Cell::new("skipped (exists)").fg(Color::Yellow),
        WriteStatus::SkippedSelf => Cell::new("skipped (is input)").fg(Color::Yellow),
        WriteStatus::DryRun => dim_cell("dry-run"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
