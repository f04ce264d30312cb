use directory_business::{FetchUsersCommand, UsersSnapshot};
use log::error;

use crate::{state::State, widgets};

/// Page heading and window title.
pub const APP_TITLE: &str = "User Database";

pub struct DirectoryApp {
    pub state: State,
    fetch_started: bool,
}

impl DirectoryApp {
    /// Called once before the first frame.
    pub fn new(state: State) -> Self {
        Self {
            state,
            fetch_started: false,
        }
    }

    fn run_computed(&mut self) {
        if let Err(err) = self.state.ctx.run_computed() {
            error!("Failed to run computes: {err}");
        }
    }

    fn start_fetch_once(&mut self) {
        if self.fetch_started {
            return;
        }
        self.fetch_started = true;
        if let Err(err) = self.state.ctx.dispatch::<FetchUsersCommand>() {
            error!("Failed to start users fetch: {err}");
        }
    }
}

impl eframe::App for DirectoryApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Sync Compute for render
        self.state.ctx.sync_computes();
        self.run_computed();
        self.start_fetch_once();

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.heading(APP_TITLE);
            ui.separator();
            widgets::directory_panel(&mut self.state.ctx, ui);
        });

        self.run_computed();

        // The fetch lands from another thread; keep polling until it settles.
        let loading = self
            .state
            .ctx
            .cached::<UsersSnapshot>()
            .is_none_or(UsersSnapshot::is_loading);
        if loading {
            ctx.request_repaint();
        }
    }
}
