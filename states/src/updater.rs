use std::any::{Any, TypeId, type_name};

use flume::Sender;
use log::warn;

pub(crate) type Update = (TypeId, Box<dyn Any + Send>);

/// Handle used by computes and commands to publish new values.
///
/// Updates are queued and applied by `StateCtx::sync_computes` on the thread
/// that owns the context. The handle is `Send`, so async commands can keep it
/// across await points.
#[derive(Debug, Clone)]
pub struct Updater {
    send: Sender<Update>,
}

impl Updater {
    pub(crate) fn new(send: Sender<Update>) -> Self {
        Self { send }
    }

    /// Queue `value` as the replacement for the state or compute of type `T`.
    pub fn set<T: Any + Send>(&self, value: T) {
        if self
            .send
            .send((TypeId::of::<T>(), Box::new(value)))
            .is_err()
        {
            warn!(
                "Dropped update for {}: state context is gone",
                type_name::<T>()
            );
        }
    }
}
