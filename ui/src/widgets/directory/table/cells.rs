//! Cell rendering functions for the users table.

use directory_business::Status;
use egui::{Color32, RichText, Ui};

#[inline]
pub fn render_text_cell(ui: &mut Ui, text: &str) {
    ui.label(text);
}

/// Renders the status as a coloured, bold label.
#[inline]
pub fn render_status_cell(ui: &mut Ui, status: Status) {
    ui.label(
        RichText::new(status.label())
            .strong()
            .color(status_color(status)),
    );
}

/// Colors:
/// - Green: active
/// - Red: inactive
/// - Orange: pending
#[inline]
pub fn status_color(status: Status) -> Color32 {
    match status {
        Status::Active => Color32::from_rgb(34, 139, 34),
        Status::Inactive => Color32::RED,
        Status::Pending => Color32::from_rgb(255, 165, 0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_status_has_its_own_color() {
        let colors: Vec<Color32> = Status::ALL.into_iter().map(status_color).collect();
        assert_ne!(colors[0], colors[1]);
        assert_ne!(colors[1], colors[2]);
        assert_ne!(colors[0], colors[2]);
    }
}
