use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use listing_model::CsvDialect;

use crate::types::ConvertResult;

pub fn print_summary(result: &ConvertResult) {
    println!("Input: {}", result.input.display());
    if result.dry_run {
        println!("Output: (dry run)");
    } else {
        println!("Output: {}", result.output.display());
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    let stats = &result.transform;
    table.add_row(vec![Cell::new("Rows read"), Cell::new(result.rows_read)]);
    table.add_row(vec![Cell::new("Rows transformed"), Cell::new(stats.rows)]);
    table.add_row(vec![
        Cell::new("Prices not found"),
        count_cell(stats.prices_not_found, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Dates not found"),
        count_cell(stats.dates_not_found, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Short rows padded"),
        count_cell(stats.short_rows, Color::Yellow),
    ]);
    match &result.written {
        Some(written) => {
            table.add_row(vec![
                Cell::new("Rows written").add_attribute(Attribute::Bold),
                Cell::new(written.rows).add_attribute(Attribute::Bold),
            ]);
            table.add_row(vec![
                Cell::new("Characters replaced"),
                count_cell(written.replaced_chars, Color::Yellow),
            ]);
        }
        None => {
            table.add_row(vec![Cell::new("Rows written"), dim_cell("-")]);
        }
    }
    println!("{table}");
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

/// Rows of the dialect comparison table.
pub fn dialect_rows(input: &CsvDialect, output: &CsvDialect) -> Vec<Vec<String>> {
    vec![
        vec![
            "Delimiter".to_string(),
            char_label(input.delimiter),
            char_label(output.delimiter),
        ],
        vec![
            "Quote".to_string(),
            char_label(input.quote),
            char_label(output.quote),
        ],
        vec![
            "Escape".to_string(),
            char_label(input.escape),
            char_label(output.escape),
        ],
        vec![
            "Encoding".to_string(),
            input.encoding.label().to_string(),
            output.encoding.label().to_string(),
        ],
        vec![
            "Quote all fields".to_string(),
            yes_no(input.quote_all),
            yes_no(output.quote_all),
        ],
    ]
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn char_label(byte: u8) -> String {
    format!("{}", char::from(byte))
}

fn yes_no(value: bool) -> String {
    let label = if value { "yes" } else { "no" };
    label.to_string()
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
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
