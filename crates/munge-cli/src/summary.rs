use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use munge_report::{BoxSummary, CategoryCount, ColumnDescription, MISSING_MARKER, MissingCount};
use munge_transform::{FillReport, GroupedStatistic, StepSummary};

use crate::types::{CleanResult, InspectResult};

pub fn print_clean_summary(result: &CleanResult) {
    let outcome = &result.outcome;
    println!("Input: {}", result.input.display());
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    println!(
        "Rows: {}  Columns: {}",
        outcome.frame.height(),
        outcome.frame.width()
    );
    print_step_table(&outcome.steps);
    print_counts("Salutations", &result.salutations);
    print_counts("Salutation groups", &result.groups);
    if let Some(statistic) = &outcome.statistic {
        print_pivot(statistic);
    }
    print_fill(&outcome.fill);

    let mut table = Table::new();
    table.set_header(
        result
            .preview
            .headers
            .iter()
            .map(|header| header_cell(header))
            .collect::<Vec<_>>(),
    );
    apply_table_style(&mut table);
    for row in &result.preview.rows {
        table.add_row(row.iter().map(|value| value_cell(value)).collect::<Vec<_>>());
    }
    println!();
    println!("Head ({} rows):", result.preview.rows.len());
    println!("{table}");
}

pub fn print_inspect_summary(result: &InspectResult) {
    println!("Input: {}", result.input.display());
    println!("Rows: {}  Columns: {}", result.rows, result.columns);
    print_missing(&result.missing);
    print_describe(&result.describe);
    print_boxes(result);
}

fn print_step_table(steps: &[StepSummary]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Step"),
        header_cell("Rows"),
        header_cell("Added"),
        header_cell("Removed"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for step in steps {
        table.add_row(vec![
            Cell::new(step.step.label())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(step.rows_out),
            list_cell(&step.columns_added, Color::Green),
            list_cell(&step.columns_removed, Color::Yellow),
        ]);
    }
    println!("{table}");
}

fn print_counts(title: &str, counts: &[CategoryCount]) {
    if counts.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Label"), header_cell("Count")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for count in counts {
        table.add_row(vec![Cell::new(&count.label), Cell::new(count.count)]);
    }
    println!();
    println!("{title}:");
    println!("{table}");
}

fn print_pivot(statistic: &GroupedStatistic) {
    let pivot = statistic.pivot();
    let mut header = vec![header_cell(&format!(
        "{} \\ {}",
        pivot.row_header, pivot.column_header
    ))];
    header.extend(pivot.columns.iter().map(|column| header_cell(column)));
    let mut table = Table::new();
    table.set_header(header);
    apply_table_style(&mut table);
    for index in 1..=pivot.columns.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in &pivot.rows {
        let mut cells = vec![Cell::new(row).add_attribute(Attribute::Bold)];
        cells.extend(
            pivot
                .columns
                .iter()
                .map(|column| number_cell(pivot.get(row, column))),
        );
        table.add_row(cells);
    }
    println!();
    println!("Median {} by group:", statistic.target());
    println!("{table}");
}

fn print_fill(fill: &FillReport) {
    println!();
    println!(
        "Imputed {}: {} of {} missing cells filled ({}), {} still missing",
        fill.target, fill.filled, fill.missing_before, fill.strategy, fill.missing_after
    );
    if let Some(value) = fill.value {
        println!("Fill value: {value:.2}");
    }
    if fill.by_key.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![header_cell("Group"), header_cell("Filled")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (key, count) in &fill.by_key {
        table.add_row(vec![Cell::new(key), Cell::new(count)]);
    }
    println!("{table}");
}

fn print_missing(missing: &[MissingCount]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Missing"),
        header_cell("Ratio"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for entry in missing {
        let count = if entry.missing > 0 {
            Cell::new(entry.missing).fg(Color::Yellow)
        } else {
            dim_cell(entry.missing)
        };
        table.add_row(vec![
            Cell::new(&entry.column),
            count,
            Cell::new(format!("{:.3}", entry.ratio)),
        ]);
    }
    println!();
    println!("Missing values:");
    println!("{table}");
}

fn print_describe(descriptions: &[ColumnDescription]) {
    if descriptions.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Count"),
        header_cell("Mean"),
        header_cell("Std"),
        header_cell("Min"),
        header_cell("25%"),
        header_cell("50%"),
        header_cell("75%"),
        header_cell("Max"),
    ]);
    apply_table_style(&mut table);
    for index in 1..9 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for description in descriptions {
        table.add_row(vec![
            Cell::new(&description.column).add_attribute(Attribute::Bold),
            Cell::new(description.count),
            number_cell(description.mean),
            number_cell(description.std),
            number_cell(description.min),
            number_cell(description.q25),
            number_cell(description.median),
            number_cell(description.q75),
            number_cell(description.max),
        ]);
    }
    println!();
    println!("Numeric columns:");
    println!("{table}");
}

fn print_boxes(result: &InspectResult) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell(&result.group_column),
        header_cell("Count"),
        header_cell("Min"),
        header_cell("Q1"),
        header_cell("Median"),
        header_cell("Q3"),
        header_cell("Max"),
        header_cell("Fences"),
        header_cell("Outliers"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for summary in &result.boxes {
        table.add_row(vec![
            Cell::new(&summary.group)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(summary.count),
            number_cell(Some(summary.min)),
            number_cell(Some(summary.q1)),
            number_cell(Some(summary.median)),
            number_cell(Some(summary.q3)),
            number_cell(Some(summary.max)),
            Cell::new(format!(
                "{:.2} .. {:.2}",
                summary.lower_fence, summary.upper_fence
            )),
            outlier_cell(summary),
        ]);
    }
    println!();
    println!("{} by {}:", result.value_column, result.group_column);
    println!("{table}");
}

fn outlier_cell(summary: &BoxSummary) -> Cell {
    if summary.outliers.is_empty() {
        return dim_cell("-");
    }
    let listed = summary
        .outliers
        .iter()
        .map(|outlier| format!("{}={:.2}", outlier.id, outlier.value))
        .collect::<Vec<_>>()
        .join(", ");
    Cell::new(listed).fg(Color::Red)
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

fn number_cell(value: Option<f64>) -> Cell {
    match value {
        Some(value) => Cell::new(format!("{value:.2}")),
        None => dim_cell(MISSING_MARKER),
    }
}

fn value_cell(value: &str) -> Cell {
    if value == MISSING_MARKER {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn list_cell(values: &[String], color: Color) -> Cell {
    if values.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(values.join(", ")).fg(color)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
