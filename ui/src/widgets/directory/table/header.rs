//! Sortable header for the users table.

use directory_business::{SortDirection, SortKey};
use egui::{Button, RichText, Ui};
use egui_extras::TableRow;

/// Renders one sort button per column.
///
/// Returns the key of the clicked header.
#[inline]
pub fn render_table_header(
    header: &mut TableRow<'_, '_>,
    sort_key: SortKey,
    direction: SortDirection,
) -> Option<SortKey> {
    let mut clicked = None;
    for key in SortKey::ALL {
        header.col(|ui| {
            let active = (key == sort_key).then_some(direction);
            if render_header_cell(ui, key, active) {
                clicked = Some(key);
            }
        });
    }
    clicked
}

/// Header text, with a direction marker on the active column.
pub fn header_text(key: SortKey, active: Option<SortDirection>) -> String {
    match active {
        Some(SortDirection::Ascending) => format!("{} ⏶", key.title()),
        Some(SortDirection::Descending) => format!("{} ⏷", key.title()),
        None => key.title().to_owned(),
    }
}

#[inline]
fn render_header_cell(ui: &mut Ui, key: SortKey, active: Option<SortDirection>) -> bool {
    let text = RichText::new(header_text(key, active)).strong();
    ui.add(Button::new(text).frame(false)).clicked()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_active_column_carries_marker() {
        assert_eq!(header_text(SortKey::Email, None), "Email");
        assert_eq!(
            header_text(SortKey::Name, Some(SortDirection::Ascending)),
            "Name ⏶"
        );
        assert_eq!(
            header_text(SortKey::Status, Some(SortDirection::Descending)),
            "Status ⏷"
        );
    }
}
