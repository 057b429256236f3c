//! Table rendering for terminal output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use cdt_match::CodeCandidate;
use cdt_model::{NoteSection, ProcedureEntry, ScoredMatch, SoapNote};
use cdt_standards::DoctorReport;

/// Shared table styling.
pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Ranked matches for `suggest` and `note`.
pub fn matches_table(matches: &[ScoredMatch]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Category"),
        header_cell("Description"),
        header_cell("Score"),
        header_cell("Matched terms"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Right);
    for m in matches {
        table.add_row(vec![
            m.code.to_string(),
            m.category.label().to_string(),
            m.description.clone(),
            m.score.to_string(),
            m.matched_terms.join(", "),
        ]);
    }
    table
}

/// Catalog listing for `codes`.
pub fn codes_table(entries: &[ProcedureEntry]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Category"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![
            entry.code.to_string(),
            entry.category().label().to_string(),
            entry.description.clone(),
        ]);
    }
    table
}

/// Did-you-mean candidates for `show` on an unknown code.
pub fn candidates_table(candidates: &[CodeCandidate]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Code"), header_cell("Similarity")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for candidate in candidates {
        table.add_row(vec![
            candidate.code.to_string(),
            format!("{:.0}%", candidate.similarity * 100.0),
        ]);
    }
    table
}

/// Parsed SOAP sections for `note`.
pub fn note_table(note: &SoapNote) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Section"), header_cell("Text")]);
    apply_table_style(&mut table);
    if let Some(date) = note.date {
        table.add_row(vec!["Date".to_string(), date.to_string()]);
    }
    for section in NoteSection::ALL {
        if let Some(text) = note.section(section) {
            table.add_row(vec![section.heading().to_string(), text.to_string()]);
        }
    }
    table
}

/// Per-category counts for `doctor`.
pub fn doctor_table(report: &DoctorReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Codes")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in &report.counts.categories {
        table.add_row(vec![category.clone(), count.to_string()]);
    }
    table
}
