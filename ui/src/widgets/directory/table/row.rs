//! Row rendering for the users table.

use directory_business::Record;
use egui_extras::TableRow;

use super::EMPTY_MESSAGE;
use super::cells::{render_status_cell, render_text_cell};
use super::columns::COLUMN_COUNT;

/// Renders Name, Email, Role and Status for one record.
#[inline]
pub fn render_user_row(row: &mut TableRow<'_, '_>, record: &Record) {
    row.col(|ui| render_text_cell(ui, &record.name));
    row.col(|ui| render_text_cell(ui, &record.email));
    row.col(|ui| render_text_cell(ui, &record.role));
    row.col(|ui| render_status_cell(ui, record.status));
}

/// Single row standing in for an empty page; the message sits in the first
/// column and the rest stay blank.
#[inline]
pub fn render_empty_row(row: &mut TableRow<'_, '_>) {
    row.col(|ui| {
        ui.weak(EMPTY_MESSAGE);
    });
    for _ in 1..COLUMN_COUNT {
        row.col(|_| {});
    }
}
