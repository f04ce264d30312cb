//! Table components for the users directory.
//!
//! - `columns`: Column definitions and heights
//! - `header`: Sortable header rendering
//! - `row`: Individual row rendering with cells
//! - `cells`: Cell rendering functions for each column type

mod cells;
pub mod columns;
pub mod header;
pub mod row;

use directory_business::{Page, SortDirection, SortKey};
use egui::Ui;
use egui_extras::TableBuilder;

use columns::{HEADER_HEIGHT, ROW_HEIGHT, table_columns};
use header::render_table_header;
use row::{render_empty_row, render_user_row};

pub const EMPTY_MESSAGE: &str = "No users found matching your search.";

/// Renders the current page as a table.
///
/// Returns the column whose header was clicked, if any.
pub fn render_users_table(
    ui: &mut Ui,
    page: &Page<'_>,
    sort_key: SortKey,
    direction: SortDirection,
) -> Option<SortKey> {
    let mut requested = None;

    let mut builder = TableBuilder::new(ui)
        .striped(true)
        .resizable(false)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
    for column in table_columns() {
        builder = builder.column(column);
    }

    builder
        .header(HEADER_HEIGHT, |mut header| {
            requested = render_table_header(&mut header, sort_key, direction);
        })
        .body(|mut body| {
            if page.is_empty() {
                body.row(ROW_HEIGHT, |mut row| render_empty_row(&mut row));
                return;
            }
            for record in page.rows {
                body.row(ROW_HEIGHT, |mut row| render_user_row(&mut row, record));
            }
        });

    requested
}
