use directory_business::{DirectoryView, UsersSnapshot, ViewInput};
use directory_states::StateCtx;
use egui::{Color32, Ui};

use super::pagination::render_pagination_bar;
use super::table::render_users_table;
use super::toolbar::render_toolbar;
use super::{DirectoryAction, apply_actions};

/// Displays whichever of the loading, error or ready views the snapshot calls for.
pub fn directory_panel(state_ctx: &mut StateCtx, ui: &mut Ui) {
    let Some(snapshot) = state_ctx.cached::<UsersSnapshot>() else {
        render_loading(ui);
        return;
    };

    if snapshot.is_loading() {
        render_loading(ui);
        return;
    }

    if let Some(message) = snapshot.error() {
        render_error(ui, message);
        return;
    }

    let actions = render_ready(state_ctx, ui);
    apply_actions(state_ctx, actions);
}

fn render_loading(ui: &mut Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.spinner();
        ui.label("Loading users...");
    });
}

fn render_error(ui: &mut Ui, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.colored_label(Color32::RED, format!("Error: {message}"));
    });
}

fn render_ready(state_ctx: &StateCtx, ui: &mut Ui) -> Vec<DirectoryAction> {
    let mut actions = Vec::new();
    let Some(view) = state_ctx.cached::<DirectoryView>() else {
        return actions;
    };
    let input = state_ctx.state::<ViewInput>();
    let page = view.page(input);

    actions.extend(render_toolbar(ui, view.total(), input.search_text()));
    ui.add_space(8.0);

    if let Some(key) = render_users_table(ui, &page, input.sort_key(), input.sort_direction()) {
        actions.push(DirectoryAction::Sort(key));
    }

    ui.add_space(8.0);
    actions.extend(render_pagination_bar(ui, &page));
    actions
}
