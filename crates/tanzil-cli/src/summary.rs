use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use tanzil_sql::sql::{QURAN_AYAHS_TABLE, QURAN_SURAHS_TABLE, QURAN_WORDS_TABLE};

use crate::types::{Destination, ImportOutcome};

pub fn print_summary(outcome: &ImportOutcome) {
    println!("Source: {}", outcome.source.display());
    println!("SHA-256: {}", outcome.sha256);
    match &outcome.destination {
        Destination::DryRun => println!("Database: - (dry run)"),
        Destination::Database(target) => println!("Database: {target}"),
    }
    if let Some(path) = &outcome.sql_output {
        println!("SQL script: {}", path.display());
    }
    println!("{}", summary_table(outcome));
}

fn summary_table(outcome: &ImportOutcome) -> Table {
    let summary = &outcome.summary;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Table"),
        header_cell("Rows"),
        header_cell("Vajib"),
        header_cell("Mustahab"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        table_cell(QURAN_SURAHS_TABLE),
        Cell::new(summary.surahs),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        table_cell(QURAN_AYAHS_TABLE),
        Cell::new(summary.ayahs),
        count_cell(summary.vajib, Color::Green),
        count_cell(summary.mustahab, Color::Green),
    ]);
    table.add_row(vec![
        table_cell(QURAN_WORDS_TABLE),
        Cell::new(summary.words),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
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

fn table_cell(name: &str) -> Cell {
    Cell::new(name)
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
