use std::any::{Any, type_name};

use log::error;

/// A value owned by `StateCtx`, stored once per concrete type.
///
/// States are written by the UI (through `StateCtx::update`) or by commands
/// (through `Updater::set`). Computes that list a state in their deps are
/// marked dirty whenever it changes.
pub trait State: Any {
    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Clone of the state handed to async commands.
    ///
    /// States that commands never read can keep the default.
    fn snapshot(&self) -> Option<Box<dyn Any + Send>> {
        None
    }

    /// Replace `self` with a value sent through an `Updater`.
    fn assign_box(&mut self, new_self: Box<dyn Any + Send>);
}

/// Shared `assign_box` body for states.
pub fn state_assign_impl<T: State>(target: &mut T, new_self: Box<dyn Any + Send>) {
    match new_self.downcast::<T>() {
        Ok(value) => *target = *value,
        Err(_) => error!(
            "Ignored update for state {}: value has a different type",
            type_name::<T>()
        ),
    }
}
