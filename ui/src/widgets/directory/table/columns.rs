//! Column definitions for the users table.

use egui_extras::Column;

pub const COLUMN_COUNT: usize = 4;
pub const ROLE_WIDTH: f32 = 120.0;
pub const STATUS_WIDTH: f32 = 100.0;
pub const ROW_HEIGHT: f32 = 28.0;
pub const HEADER_HEIGHT: f32 = 24.0;

/// Name, Email, Role, Status.
#[inline]
pub fn table_columns() -> Vec<Column> {
    vec![
        Column::initial(200.0).at_least(120.0), // Name
        Column::remainder().at_least(160.0),    // Email - flexible
        Column::exact(ROLE_WIDTH),              // Role
        Column::exact(STATUS_WIDTH),            // Status
    ]
}
