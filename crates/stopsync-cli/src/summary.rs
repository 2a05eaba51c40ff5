use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use stopsync_model::Diagnostics;
use stopsync_rules::RuleSet;

use crate::types::RunReport;

/// Tone of a summary count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Tone {
    Plain,
    Good,
    Warn,
}

pub fn print_summary(report: &RunReport) {
    match &report.written {
        Some(paths) => {
            println!("Output: {}", report.output_dir.display());
            println!("Stops: {}", paths.stops.display());
            println!("Route links: {}", paths.route_links.display());
            if let Some(path) = &paths.stops_json {
                println!("Stops JSON: {}", path.display());
            }
        }
        None => println!("Dry run: no files written to {}", report.output_dir.display()),
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (label, count, tone) in summary_rows(report) {
        table.add_row(vec![Cell::new(label), count_cell(count, tone)]);
    }
    println!("{table}");

    let lines = diagnostic_lines(&report.output.diagnostics);
    if !lines.is_empty() {
        println!();
        for line in lines {
            println!("{line}");
        }
    }
}

pub fn print_rules(rules: &RuleSet) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Rule"), header_cell("Value")]);
    apply_table_style(&mut table);
    for (rule, value) in rule_rows(rules) {
        table.add_row(vec![Cell::new(rule).fg(Color::Blue), Cell::new(value)]);
    }
    println!("{table}");
}

fn summary_rows(report: &RunReport) -> Vec<(&'static str, usize, Tone)> {
    let output = &report.output;
    let diagnostics = &output.diagnostics;
    vec![
        ("Source rows", diagnostics.source_rows, Tone::Plain),
        ("Stops", output.stops.len(), Tone::Plain),
        ("Resolved", diagnostics.resolved_stops, Tone::Good),
        ("Native", diagnostics.native_stops, Tone::Good),
        ("Unresolved", diagnostics.unresolved_stops.len(), Tone::Warn),
        ("Rows without id", diagnostics.missing_stop_ids.len(), Tone::Warn),
        ("Duplicate stop ids", diagnostics.duplicate_stop_ids.len(), Tone::Warn),
        ("Route links", output.route_links.len(), Tone::Plain),
        ("Duplicates removed", diagnostics.duplicate_links, Tone::Plain),
        ("Unresolved links", diagnostics.unresolved_links.len(), Tone::Warn),
        ("Excluded rows", diagnostics.excluded_rows, Tone::Plain),
    ]
}

/// Advisory lines, grouped under a heading per kind.
fn diagnostic_lines(diagnostics: &Diagnostics) -> Vec<String> {
    let mut lines = Vec::new();
    if !diagnostics.unresolved_stops.is_empty() {
        lines.push("Stops without a canonical id:".to_string());
        lines.extend(
            diagnostics
                .unresolved_stops
                .iter()
                .map(|stop| format!("- {}: {stop}", stop.stop_id)),
        );
    }
    if !diagnostics.missing_stop_ids.is_empty() {
        lines.push("Registry rows without a stop id:".to_string());
        lines.extend(
            diagnostics
                .missing_stop_ids
                .iter()
                .map(|missing| format!("- {missing}")),
        );
    }
    if !diagnostics.unresolved_links.is_empty() {
        lines.push("Route links without a stop id:".to_string());
        lines.extend(
            diagnostics
                .unresolved_links
                .iter()
                .map(|link| format!("- {link}")),
        );
    }
    if !diagnostics.duplicate_stop_ids.is_empty() {
        lines.push("Shared canonical ids:".to_string());
        lines.extend(
            diagnostics
                .duplicate_stop_ids
                .iter()
                .map(|duplicate| format!("- {duplicate}")),
        );
    }
    lines
}

fn rule_rows(rules: &RuleSet) -> Vec<(String, String)> {
    let mut rows = vec![
        (
            "code prefixes".to_string(),
            rules.code_prefixes.scan_order().collect::<Vec<_>>().join(", "),
        ),
        (
            "feeder routes".to_string(),
            rules.feeder_routes.iter().collect::<Vec<_>>().join(", "),
        ),
        (
            "uppercase".to_string(),
            rules.names.uppercase_tokens().collect::<Vec<_>>().join(", "),
        ),
    ];
    rows.extend(
        rules
            .names
            .street_types()
            .map(|(key, value)| (format!("street type {key}"), value.to_string())),
    );
    rows
}

fn apply_table_style(table: &mut Table) {
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
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn count_cell(count: usize, tone: Tone) -> Cell {
    match tone {
        _ if count == 0 => dim_cell(count),
        Tone::Good => Cell::new(count).fg(Color::Green),
        Tone::Warn => Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold),
        Tone::Plain => Cell::new(count),
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
