//! Terminal rendering of pages and the page registry.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Table};

use lexref_grid::GridPage;
use lexref_model::{CellValue, ColumnSet, GridRow, TableViewState};

use crate::browse::BrowseResult;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

/// Render one grid page into a table string, honoring column visibility.
pub fn render_grid<R: GridRow>(
    page: &GridPage<'_, R>,
    columns: &ColumnSet,
    state: &TableViewState,
) -> String {
    let visible: Vec<_> = columns
        .iter()
        .filter(|c| state.is_visible(&c.id))
        .collect();

    let mut table = Table::new();
    let header: Vec<Cell> = visible.iter().map(|c| header_cell(&c.label)).collect();
    table.set_header(header);
    apply_table_style(&mut table);
    for (index, column) in visible.iter().enumerate() {
        // Right-align numeric columns, judged by the first row's cell type.
        if let Some(row) = page.rows.first() {
            if matches!(row.cell(&column.id), CellValue::Int(_)) {
                if let Some(col) = table.column_mut(index) {
                    col.set_cell_alignment(CellAlignment::Right);
                }
            }
        }
    }
    for row in &page.rows {
        let cells: Vec<Cell> = visible
            .iter()
            .map(|c| Cell::new(row.cell(&c.id).display()))
            .collect();
        table.add_row(cells);
    }
    table.to_string()
}

pub fn print_browse(result: &BrowseResult) {
    println!("{}", result.title);
    println!("{}", result.table);
    println!(
        "Page {} of {} - {} row{}",
        result.page_index + 1,
        result.page_count,
        result.total_rows,
        if result.total_rows == 1 { "" } else { "s" },
    );
    println!("Link: ?{}", result.share_query);
}
