//! Reactive state runtime used by the users directory.
//!
//! `StateCtx` stores plain `State`s, derived `Compute`s and explicitly
//! dispatched `Command`s. Computes declare their dependencies and are kept in
//! topological order; commands run on tokio and report back via `Updater`.

mod command;
mod compute;
mod ctx;
mod dep;
mod error;
mod graph;
mod state;
mod state_sync_status;
mod updater;

pub use command::{Command, CommandFuture, CommandSnapshot};
pub use compute::{Compute, ComputeDeps, assign_impl};
pub use ctx::StateCtx;
pub use dep::Dep;
pub use error::Error;
pub use graph::{DepRoute, Graph, TopologyError};
pub use state::{State, state_assign_impl};
pub use state_sync_status::StateSyncStatus;
pub use updater::Updater;
