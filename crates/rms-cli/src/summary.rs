//! Table rendering for command results.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};
use serde::Serialize;

use rms_model::CategoryCount;

use rms_cli::types::{BreakdownResult, DimensionsResult, SummaryResult};

/// Serializes a command result for the machine interface.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn print_summary(result: &SummaryResult) {
    println!("Export: {}", result.source.display());
    println!(
        "Rows: {} loaded, {} skipped, {} after filters",
        result.rows_loaded, result.rows_skipped, result.filtered_count
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Total Devices"),
        header_cell("Avg Days Offline"),
        header_cell("Most Common Issue"),
        header_cell("Critical (100+ Days)"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(result.summary.total_count),
        Cell::new(format!("{:.1}", result.summary.avg_days)),
        Cell::new(&result.summary.most_common_reason),
        Cell::new(result.summary.critical_count),
    ]);
    println!("{table}");

    print_tally("Brand", &result.summary.brand_counts);
    print_tally("Sub Region", &result.summary.region_counts);
    print_tally("Reason", &result.summary.reason_counts);
    print_tally("Aging", &result.summary.aging_counts);
}

pub fn print_breakdown(result: &BreakdownResult) {
    println!("Export: {}", result.source.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Enfra Offline"),
        header_cell("SMS LD Offline"),
        header_cell("RMS Offline"),
        header_cell("Total Sites"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new(result.breakdown.enfra),
        Cell::new(result.breakdown.sms_ld),
        Cell::new(result.breakdown.named_total()),
        Cell::new(result.breakdown.total),
    ]);
    println!("{table}");

    if !result.region_domain.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Region"),
            header_cell("Domain"),
            header_cell("Count"),
        ]);
        apply_table_style(&mut table);
        align_column(&mut table, 2, CellAlignment::Right);
        for entry in &result.region_domain {
            table.add_row(vec![
                Cell::new(&entry.region),
                Cell::new(&entry.domain),
                Cell::new(entry.count),
            ]);
        }
        println!("{table}");
    }

    print_tally("Aging (Enfra)", &result.enfra_aging);
    print_tally("Aging (SMS LD)", &result.sms_ld_aging);
    print_tally("Reason", &result.top_reasons);
}

pub fn print_dimensions(result: &DimensionsResult) {
    println!("Export: {}", result.source.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Dimension"), header_cell("Values")]);
    apply_table_style(&mut table);
    for entry in &result.dimensions {
        table.add_row(vec![
            Cell::new(&entry.dimension),
            Cell::new(entry.values.join(", ")),
        ]);
    }
    println!("{table}");
}

fn print_tally(title: &str, counts: &[CategoryCount]) {
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell(title), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for entry in counts {
        table.add_row(vec![Cell::new(&entry.category), Cell::new(entry.count)]);
    }
    println!("{table}");
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
