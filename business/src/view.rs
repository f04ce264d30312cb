use std::any::Any;

use directory_states::{Compute, ComputeDeps, Dep, Updater, assign_impl};
use log::debug;

use crate::pagination::{Page, paginate};
use crate::pipeline::derive_view;
use crate::{Record, UsersSnapshot, ViewInput};

/// Filtered and sorted rows of the snapshot, rebuilt on every change to
/// `ViewInput` or `UsersSnapshot`.
#[derive(Debug, Clone, Default)]
pub struct DirectoryView {
    rows: Vec<Record>,
}

impl DirectoryView {
    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    /// Number of records matching the search.
    pub fn total(&self) -> usize {
        self.rows.len()
    }

    /// The page selected in `input`.
    pub fn page(&self, input: &ViewInput) -> Page<'_> {
        paginate(&self.rows, input.page_index(), input.page_size())
    }
}

impl Compute for DirectoryView {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::none()
            .state::<ViewInput>()
            .compute::<UsersSnapshot>()
    }

    fn compute(&self, deps: Dep<'_>, updater: Updater) {
        let input = deps.state::<ViewInput>();
        let snapshot = deps.compute::<UsersSnapshot>();

        let rows = derive_view(
            snapshot.records(),
            input.search_text(),
            input.sort_key(),
            input.sort_direction(),
        );
        debug!(
            "DirectoryView: {} of {} records match {:?}",
            rows.len(),
            snapshot.records().len(),
            input.search_text()
        );
        updater.set(Self { rows });
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}
