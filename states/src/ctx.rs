use std::{
    any::{TypeId, type_name},
    collections::BTreeMap,
    sync::Arc,
};

use flume::{Receiver, Sender};
use log::{debug, warn};

use crate::{
    Command, CommandSnapshot, Compute, Dep, Error, Graph, State, StateSyncStatus, Updater,
    graph::TopologyError, updater::Update,
};

pub(crate) struct ComputeSlot {
    pub(crate) compute: Box<dyn Compute>,
    pub(crate) status: StateSyncStatus,
}

/// Owner of every state, compute and command of the application.
///
/// The UI thread drives it once per frame:
/// 1. `sync_computes` applies values published by computes and commands
/// 2. `run_computed` re-evaluates dirty computes in dependency order
/// 3. rendering reads `state` / `cached` and writes inputs through `update`
pub struct StateCtx {
    states: BTreeMap<TypeId, Box<dyn State>>,
    computes: BTreeMap<TypeId, ComputeSlot>,
    commands: BTreeMap<TypeId, Arc<dyn Command>>,
    names: BTreeMap<TypeId, &'static str>,

    graph: Graph<TypeId>,
    order: Option<Vec<TypeId>>,

    send: Sender<Update>,
    recv: Receiver<Update>,
}

impl Default for StateCtx {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for StateCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StateCtx")
            .field("states", &self.names_of(self.states.keys()))
            .field("computes", &self.names_of(self.computes.keys()))
            .field("commands", &self.names_of(self.commands.keys()))
            .field("pending_updates", &self.recv.len())
            .finish()
    }
}

impl StateCtx {
    pub fn new() -> Self {
        let (send, recv) = flume::unbounded();
        Self {
            states: BTreeMap::new(),
            computes: BTreeMap::new(),
            commands: BTreeMap::new(),
            names: BTreeMap::new(),
            graph: Graph::new(),
            order: None,
            send,
            recv,
        }
    }

    fn name_of(&self, id: TypeId) -> &'static str {
        self.names.get(&id).copied().unwrap_or("<unregistered>")
    }

    fn names_of<'a>(&self, ids: impl Iterator<Item = &'a TypeId>) -> Vec<&'static str> {
        ids.map(|id| self.name_of(*id)).collect()
    }

    pub fn updater(&self) -> Updater {
        Updater::new(self.send.clone())
    }

    pub fn add_state<T: State>(&mut self, state: T) {
        let id = TypeId::of::<T>();
        self.names.insert(id, type_name::<T>());
        self.graph.add_node(id);
        if self.states.insert(id, Box::new(state)).is_some() {
            warn!("State {} was added twice, keeping the latest", type_name::<T>());
        }
        self.order = None;
    }

    pub fn record_compute<T: Compute>(&mut self, compute: T) {
        let id = TypeId::of::<T>();
        self.names.insert(id, type_name::<T>());
        self.graph.add_node(id);
        for dep in compute.deps().iter() {
            self.graph.route_to(dep, id);
        }
        self.computes.insert(
            id,
            ComputeSlot {
                compute: Box::new(compute),
                status: StateSyncStatus::Init,
            },
        );
        self.order = None;
    }

    pub fn record_command<T: Command>(&mut self, command: T) {
        let id = TypeId::of::<T>();
        self.names.insert(id, type_name::<T>());
        self.commands.insert(id, Arc::new(command));
    }

    pub fn try_state<T: State>(&self) -> Option<&T> {
        self.states
            .get(&TypeId::of::<T>())
            .and_then(|state| state.as_any().downcast_ref::<T>())
    }

    /// # Panics
    /// Panics if `T` was never added.
    pub fn state<T: State>(&self) -> &T {
        self.try_state::<T>()
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()))
    }

    /// Mutate state `T` in place and mark every compute reading it dirty.
    ///
    /// # Panics
    /// Panics if `T` was never added.
    pub fn update<T: State>(&mut self, f: impl FnOnce(&mut T)) {
        let id = TypeId::of::<T>();
        let state = self
            .states
            .get_mut(&id)
            .and_then(|state| state.as_any_mut().downcast_mut::<T>())
            .unwrap_or_else(|| panic!("State {} is not registered", type_name::<T>()));
        f(state);
        self.mark_dependents_dirty(id);
    }

    /// Latest value of compute `T`.
    pub fn cached<T: Compute>(&self) -> Option<&T> {
        self.computes
            .get(&TypeId::of::<T>())
            .and_then(|slot| slot.compute.as_any().downcast_ref::<T>())
    }

    pub fn compute_status<T: Compute>(&self) -> Option<StateSyncStatus> {
        self.computes.get(&TypeId::of::<T>()).map(|slot| slot.status)
    }

    fn mark_dependents_dirty(&mut self, id: TypeId) {
        for dependent in self.graph.dependents(id) {
            if let Some(slot) = self.computes.get_mut(dependent) {
                slot.status = StateSyncStatus::Dirty;
            }
        }
    }

    /// Apply every queued update. Returns how many were applied.
    pub fn sync_computes(&mut self) -> usize {
        let updates: Vec<Update> = self.recv.try_iter().collect();
        let mut applied = 0;
        for (id, value) in updates {
            if let Some(slot) = self.computes.get_mut(&id) {
                slot.compute.assign_box(value);
            } else if let Some(state) = self.states.get_mut(&id) {
                state.assign_box(value);
            } else {
                warn!("Dropped update for an unregistered type {id:?}");
                continue;
            }
            self.mark_dependents_dirty(id);
            applied += 1;
        }
        applied
    }

    fn evaluation_order(&mut self) -> Result<Vec<TypeId>, Error> {
        if let Some(order) = &self.order {
            return Ok(order.clone());
        }
        let order: Vec<TypeId> = self
            .graph
            .topology_sort()
            .map_err(|TopologyError::CycleDetected(route)| Error::DependencyCycle {
                route: format!("{:?}", route.map(|id| DisplayName(self.name_of(*id)))),
            })?
            .into_iter()
            .filter(|id| self.computes.contains_key(id))
            .collect();
        self.order = Some(order.clone());
        Ok(order)
    }

    /// Evaluate every dirty compute, upstream first.
    ///
    /// Values published by a compute are applied before its dependents run,
    /// so a single call settles the whole graph.
    pub fn run_computed(&mut self) -> Result<(), Error> {
        self.sync_computes();
        for id in self.evaluation_order()? {
            let Some(slot) = self.computes.get(&id) else {
                continue;
            };
            if !slot.status.needs_run() {
                continue;
            }
            debug!("Running compute {}", self.name_of(id));
            slot.compute
                .compute(Dep::new(&self.states, &self.computes), self.updater());
            if let Some(slot) = self.computes.get_mut(&id) {
                slot.status = StateSyncStatus::Clean;
            }
            self.sync_computes();
        }
        Ok(())
    }

    fn snapshot(&self) -> CommandSnapshot {
        let mut snap = CommandSnapshot::new();
        for (id, state) in &self.states {
            if let Some(value) = state.snapshot() {
                snap.insert(*id, value);
            }
        }
        snap
    }

    /// Run command `C` on the tokio runtime the caller is inside of.
    pub fn dispatch<C: Command>(&self) -> Result<(), Error> {
        let command = self
            .commands
            .get(&TypeId::of::<C>())
            .cloned()
            .ok_or_else(Error::command_not_found::<C>)?;
        let handle = tokio::runtime::Handle::try_current().map_err(|_| Error::NoRuntime {
            name: type_name::<C>(),
        })?;

        debug!("Dispatching command {}", type_name::<C>());
        handle.spawn(command.run(self.snapshot(), self.updater()));
        Ok(())
    }
}

struct DisplayName(&'static str);

impl std::fmt::Debug for DisplayName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.0)
    }
}
