use std::any::{Any, TypeId, type_name};

use log::error;

use crate::{Dep, State, Updater};

/// Dependencies of a compute: the states and computes it reads.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComputeDeps {
    states: Vec<TypeId>,
    computes: Vec<TypeId>,
}

impl ComputeDeps {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn state<T: State>(mut self) -> Self {
        self.states.push(TypeId::of::<T>());
        self
    }

    pub fn compute<T: Compute>(mut self) -> Self {
        self.computes.push(TypeId::of::<T>());
        self
    }

    pub fn states(&self) -> &[TypeId] {
        &self.states
    }

    pub fn computes(&self) -> &[TypeId] {
        &self.computes
    }

    pub fn iter(&self) -> impl Iterator<Item = TypeId> + '_ {
        self.states.iter().chain(self.computes.iter()).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty() && self.computes.is_empty()
    }
}

/// A value derived from other states and computes.
///
/// `compute` must be free of side effects: it may run at startup and after
/// any dependency change. New values are published through the `Updater`.
pub trait Compute: Any {
    fn deps(&self) -> ComputeDeps;

    fn compute(&self, deps: Dep<'_>, updater: Updater);

    fn as_any(&self) -> &dyn Any;

    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for computes.
pub fn assign_impl<T: Compute>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!(
            "Ignored update for compute {}: value has a different type",
            type_name::<T>()
        ),
    }
}
