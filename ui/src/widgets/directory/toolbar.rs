use egui::{RichText, TextEdit, Ui};

use super::DirectoryAction;

pub const SEARCH_HINT: &str = "Search by name or email";
const SEARCH_WIDTH: f32 = 400.0;

/// Heading with the match count, and the search box.
///
/// Returns the new search text when the user edited it this frame.
pub fn render_toolbar(ui: &mut Ui, matching: usize, search_text: &str) -> Option<DirectoryAction> {
    ui.horizontal(|ui| {
        ui.heading(RichText::new("Users Directory").strong());
        ui.label(format!("{matching} Users"));

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let mut text = search_text.to_owned();
            let response = ui.add(
                TextEdit::singleline(&mut text)
                    .hint_text(SEARCH_HINT)
                    .desired_width(SEARCH_WIDTH),
            );
            response
                .changed()
                .then_some(DirectoryAction::Search(text))
        })
        .inner
    })
    .inner
}
