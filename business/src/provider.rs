//! Data provider: the one-time users fetch and the snapshot it produces.
//!
//! Fetching is a side effect, so it lives in a command
//! (`FetchUsersCommand`) rather than a compute. The command publishes into
//! `UsersSnapshot`, a compute-shaped cache with no dependencies of its own,
//! which makes it the single writer of the record set.

use std::any::Any;

use chrono::{DateTime, Utc};
use directory_states::{
    Command, CommandFuture, CommandSnapshot, Compute, ComputeDeps, Dep, StateCtx, Updater,
    assign_impl,
};
use log::{error, info};

use crate::api::fetch_users;
use crate::{DirectoryConfig, DirectoryView, Record, ViewInput};

#[derive(Debug, Clone, Default)]
pub enum SnapshotResult {
    /// Nothing dispatched yet.
    #[default]
    Idle,
    Loading,
    Loaded {
        records: Vec<Record>,
        fetched_at: DateTime<Utc>,
    },
    Error(String),
}

/// The fetched record set plus loading/error flags.
#[derive(Debug, Clone, Default)]
pub struct UsersSnapshot {
    pub result: SnapshotResult,
}

impl UsersSnapshot {
    pub fn loading() -> Self {
        Self {
            result: SnapshotResult::Loading,
        }
    }

    pub fn loaded(records: Vec<Record>, fetched_at: DateTime<Utc>) -> Self {
        Self {
            result: SnapshotResult::Loaded {
                records,
                fetched_at,
            },
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            result: SnapshotResult::Error(message.into()),
        }
    }

    /// Empty until the fetch succeeds.
    pub fn records(&self) -> &[Record] {
        match &self.result {
            SnapshotResult::Loaded { records, .. } => records,
            _ => &[],
        }
    }

    /// True until the read settles, including before it starts.
    pub fn is_loading(&self) -> bool {
        matches!(self.result, SnapshotResult::Idle | SnapshotResult::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.result {
            SnapshotResult::Error(message) => Some(message),
            _ => None,
        }
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        match &self.result {
            SnapshotResult::Loaded { fetched_at, .. } => Some(*fetched_at),
            _ => None,
        }
    }
}

impl Compute for UsersSnapshot {
    fn deps(&self) -> ComputeDeps {
        ComputeDeps::none()
    }

    fn compute(&self, _deps: Dep<'_>, _updater: Updater) {
        // No-op: only `FetchUsersCommand` writes the snapshot.
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>) {
        assign_impl(self, new_self);
    }
}

/// Reads `DirectoryConfig`, fetches once and publishes into `UsersSnapshot`.
#[derive(Debug, Default)]
pub struct FetchUsersCommand;

impl Command for FetchUsersCommand {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture {
        let config = snap.state::<DirectoryConfig>().cloned();

        Box::pin(async move {
            let config = match config {
                Ok(config) => config,
                Err(err) => {
                    error!("FetchUsersCommand: {err}");
                    updater.set(UsersSnapshot::failed(err.to_string()));
                    return;
                }
            };

            updater.set(UsersSnapshot::loading());

            match fetch_users(&config).await {
                Ok(records) => {
                    info!("FetchUsersCommand: fetched {} users", records.len());
                    updater.set(UsersSnapshot::loaded(records, Utc::now()));
                }
                Err(err) => {
                    error!("FetchUsersCommand: {err}");
                    updater.set(UsersSnapshot::failed(err.to_string()));
                }
            }
        })
    }
}

/// Register every state, compute and command the directory needs.
pub fn register(ctx: &mut StateCtx, config: DirectoryConfig) {
    ctx.add_state(config);
    ctx.add_state(ViewInput::default());
    ctx.record_compute(UsersSnapshot::default());
    ctx.record_compute(DirectoryView::default());
    ctx.record_command(FetchUsersCommand);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Status;

    #[test]
    fn idle_counts_as_loading() {
        let snapshot = UsersSnapshot::default();
        assert!(snapshot.is_loading());
        assert!(snapshot.records().is_empty());
        assert_eq!(snapshot.error(), None);
    }

    #[test]
    fn failure_settles_without_records() {
        let snapshot = UsersSnapshot::failed("boom");
        assert!(!snapshot.is_loading());
        assert_eq!(snapshot.error(), Some("boom"));
        assert!(snapshot.records().is_empty());
        assert_eq!(snapshot.fetched_at(), None);
    }

    #[test]
    fn loaded_exposes_records() {
        let now = Utc::now();
        let snapshot = UsersSnapshot::loaded(
            vec![Record::new(1, "A B", "a@b.c", "user", Status::Active)],
            now,
        );
        assert!(!snapshot.is_loading());
        assert_eq!(snapshot.records().len(), 1);
        assert_eq!(snapshot.fetched_at(), Some(now));
    }
}
