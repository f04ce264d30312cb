//! Explicitly dispatched side effects.
//!
//! Network IO and other effects must not live in a `Compute`, because computes
//! run implicitly (at startup and on every dependency change). A `Command` only
//! runs when dispatched via `StateCtx::dispatch`. It receives a snapshot of the
//! states it may need and an `Updater` to publish results.

use std::{
    any::{Any, TypeId},
    collections::BTreeMap,
    future::Future,
    pin::Pin,
};

use crate::{Error, State, Updater};

pub type CommandFuture = Pin<Box<dyn Future<Output = ()> + Send>>;

pub trait Command: Send + Sync + 'static {
    fn run(&self, snap: CommandSnapshot, updater: Updater) -> CommandFuture;
}

/// Cloned states taken at dispatch time.
#[derive(Default)]
pub struct CommandSnapshot {
    states: BTreeMap<TypeId, Box<dyn Any + Send>>,
}

impl CommandSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: TypeId, value: Box<dyn Any + Send>) {
        self.states.insert(id, value);
    }

    /// Snapshot of state `T`; fails when the state is missing or does not
    /// provide a snapshot.
    pub fn state<T: State>(&self) -> Result<&T, Error> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|value| value.downcast_ref::<T>())
            .ok_or_else(Error::state_not_found::<T>)
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }
}

impl std::fmt::Debug for CommandSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CommandSnapshot")
            .field("states", &self.states.len())
            .finish()
    }
}
