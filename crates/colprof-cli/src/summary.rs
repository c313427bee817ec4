use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use colprof_model::{ColumnReport, ColumnType, DatasetReport, InvalidRow, Number};

use colprof_cli::profile::ProfileResult;

pub fn print_summary(result: &ProfileResult, top: Option<usize>) {
    let report = &result.report;
    match &report.source {
        Some(path) => println!("Source: {}", path.display()),
        None => println!("Source: {}", colprof_cli::profile::STDIN_NAME),
    }
    println!(
        "Rows: {} valid, {} invalid | Columns: {} | Placeholders replaced: {} | {} ms",
        report.valid_row_count,
        report.invalid_rows.len(),
        report.columns.len(),
        result.cleaned.replaced,
        result.elapsed.as_millis()
    );
    println!("{}", column_table(report));
    if let Some(limit) = top {
        print_most_common(report, limit);
    }
    print_invalid_rows(&report.invalid_rows);
    if !report.failures.is_empty() {
        eprintln!("Column issues:");
        for failure in &report.failures {
            eprintln!(
                "- [{}] {}: {}",
                failure.column_index, failure.header, failure.message
            );
        }
    }
}

pub fn column_table(report: &DatasetReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Column"),
        header_cell("Type"),
        header_cell("Mode"),
        header_cell("Min"),
        header_cell("Max"),
        header_cell("Mean"),
        header_cell("Median"),
        header_cell("Outliers"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for index in 4..=8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (index, column) in report.columns.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index),
            Cell::new(&column.header).add_attribute(Attribute::Bold),
            type_cell(column),
            optional_cell(column.mode.as_deref()),
            number_cell(column.min),
            number_cell(column.max),
            optional_cell(column.mean.as_deref()),
            number_cell(column.median),
            count_cell(column.outlier_count, Color::Yellow),
        ]);
    }
    table
}

fn print_most_common(report: &DatasetReport, limit: usize) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Value"),
        header_cell("Count"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for column in &report.columns {
        for (rank, entry) in column.most_common.iter().take(limit).enumerate() {
            let name = if rank == 0 {
                Cell::new(&column.header).add_attribute(Attribute::Bold)
            } else {
                Cell::new("")
            };
            let value = if entry.value.is_empty() {
                dim_cell("(missing)")
            } else {
                Cell::new(&entry.value)
            };
            table.add_row(vec![name, value, Cell::new(entry.count)]);
        }
    }
    println!("{table}");
}

fn print_invalid_rows(rows: &[InvalidRow]) {
    if rows.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Position"),
        header_cell("Line"),
        header_cell("Fields"),
        header_cell("Values"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.position).fg(Color::Yellow),
            row.line.map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(row.fields.len()),
            Cell::new(row.fields.join(", ")),
        ]);
    }
    println!("Invalid rows:");
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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

fn type_cell(column: &ColumnReport) -> Cell {
    if column.empty {
        return dim_cell("(empty)");
    }
    let color = match column.column_type {
        ColumnType::Float | ColumnType::Integer => Color::Green,
        ColumnType::Bool => Color::Blue,
        ColumnType::Enum => Color::Magenta,
        ColumnType::String => Color::White,
        ColumnType::Unclassified => Color::DarkGrey,
    };
    Cell::new(column.column_type).fg(color)
}

fn number_cell(value: Option<Number>) -> Cell {
    value.map_or_else(|| dim_cell("-"), Cell::new)
}

fn optional_cell(value: Option<&str>) -> Cell {
    value.map_or_else(|| dim_cell("-"), Cell::new)
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
