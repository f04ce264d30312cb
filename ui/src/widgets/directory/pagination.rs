use directory_business::{PAGE_SIZE_OPTIONS, Page};
use egui::{Button, ComboBox, Ui};

use super::DirectoryAction;

/// Range label on the left; rows-per-page selector and page navigation on the right.
pub fn render_pagination_bar(ui: &mut Ui, page: &Page<'_>) -> Vec<DirectoryAction> {
    let mut actions = Vec::new();

    ui.horizontal(|ui| {
        ui.label(page.range_label());

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui
                .add_enabled(page.has_next(), Button::new("Next"))
                .clicked()
            {
                actions.push(DirectoryAction::NextPage);
            }
            if ui
                .add_enabled(page.has_previous(), Button::new("Previous"))
                .clicked()
            {
                actions.push(DirectoryAction::PreviousPage);
            }
            ui.label(format!(
                "Page {} of {}",
                page.page_index + 1,
                page.page_count()
            ));

            let mut selected = page.page_size;
            ComboBox::from_id_salt("rows_per_page")
                .selected_text(selected.to_string())
                .show_ui(ui, |ui| {
                    for option in PAGE_SIZE_OPTIONS {
                        ui.selectable_value(&mut selected, option, option.to_string());
                    }
                });
            ui.label("Rows per page");

            if selected != page.page_size {
                actions.push(DirectoryAction::PageSize(selected));
            }
        });
    });

    actions
}
