use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bldg_import::BatchOutcome;
use bldg_ingest::{ColumnMap, Field};

use crate::commands::ImportResult;

pub fn print_summary(result: &ImportResult) {
    println!("Rows processed: {}", result.outcome.rows_seen());
    if result.dry_run {
        println!("Dry run: catalog not written");
    } else {
        println!(
            "Catalog: {} ({} entries)",
            result.catalog_path.display(),
            result.catalog_len
        );
    }
    println!("{}", outcome_table(&result.outcome));
    if let Some(table) = error_table(&result.outcome) {
        println!("Skipped rows:");
        println!("{table}");
    }
}

pub fn print_column_map(map: &ColumnMap) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Field"), header_cell("Header")]);
    for field in Field::ALL {
        table.add_row(vec![Cell::new(field.as_str()), Cell::new(map.header(field))]);
    }
    println!("{table}");
}

fn outcome_table(outcome: &BatchOutcome) -> Table {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Created"),
        header_cell("Updated"),
        header_cell("Skipped"),
    ]);
    let skipped_cell = if outcome.skipped > 0 {
        Cell::new(outcome.skipped).fg(Color::Red)
    } else {
        Cell::new(outcome.skipped)
    };
    table.add_row(vec![
        Cell::new(outcome.created).set_alignment(CellAlignment::Right),
        Cell::new(outcome.updated).set_alignment(CellAlignment::Right),
        skipped_cell.set_alignment(CellAlignment::Right),
    ]);
    table
}

fn error_table(outcome: &BatchOutcome) -> Option<Table> {
    if outcome.errors.is_empty() {
        return None;
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Row"), header_cell("Reason")]);
    for error in &outcome.errors {
        table.add_row(vec![
            Cell::new(error.row_index).set_alignment(CellAlignment::Right),
            Cell::new(error.reason.to_string()),
        ]);
    }
    Some(table)
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bldg_import::{RowError, RowFailure};

    #[test]
    fn outcome_table_renders_counts() {
        let outcome = BatchOutcome {
            created: 3,
            updated: 1,
            skipped: 2,
            errors: Vec::new(),
        };
        let rendered = outcome_table(&outcome).to_string();
        assert!(rendered.contains("Created"));
        assert!(rendered.contains('3'));
    }

    #[test]
    fn error_table_is_omitted_when_clean() {
        assert!(error_table(&BatchOutcome::default()).is_none());

        let outcome = BatchOutcome {
            skipped: 1,
            errors: vec![RowError {
                row_index: 4,
                reason: RowFailure::Decode("unequal lengths".to_string()),
            }],
            ..BatchOutcome::default()
        };
        let rendered = error_table(&outcome).expect("table").to_string();
        assert!(rendered.contains('4'));
        assert!(rendered.contains("decoded"));
    }
}
