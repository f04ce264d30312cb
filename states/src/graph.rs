use std::{
    collections::{BTreeMap, BTreeSet, VecDeque},
    fmt::{Debug, Formatter},
};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TopologyError<T>
where
    T: Debug,
{
    #[error("Cycle detected in dependency graph, from {:?}", .0)]
    CycleDetected(DepRoute<T>),
}

pub struct DepRoute<T> {
    // first is the start node, last repeats it to close the loop
    route: Vec<T>,
}

impl<T> DepRoute<T> {
    pub fn nodes(&self) -> &[T] {
        &self.route
    }

    pub fn map<U>(&self, f: impl FnMut(&T) -> U) -> DepRoute<U> {
        DepRoute {
            route: self.route.iter().map(f).collect(),
        }
    }
}

impl<T> Debug for DepRoute<T>
where
    T: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let Some((last, init)) = self.route.split_last() else {
            return write!(f, "[]");
        };
        for item in init {
            write!(f, "{item:?} -> ")?;
        }
        write!(f, "{last:?}")
    }
}

/// Directed dependency graph. An edge `from -> to` means `to` reads `from`.
#[derive(Debug)]
pub struct Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    edges: BTreeMap<Node, BTreeSet<Node>>,
    nodes: BTreeSet<Node>,

    dependents_cache: BTreeMap<Node, BTreeSet<Node>>,
}

impl<Node> Default for Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<Node> Graph<Node>
where
    Node: Debug + Copy + Ord,
{
    pub fn new() -> Self {
        Self {
            edges: BTreeMap::new(),
            nodes: BTreeSet::new(),
            dependents_cache: BTreeMap::new(),
        }
    }

    /// Register a node that may have no edges.
    pub fn add_node(&mut self, node: Node) {
        self.nodes.insert(node);
    }

    /// Add `from -> to`. Returns `false` if the edge already existed.
    pub fn route_to(&mut self, from: Node, to: Node) -> bool {
        self.nodes.insert(from);
        self.nodes.insert(to);
        self.dependents_cache.clear();
        self.edges.entry(from).or_default().insert(to)
    }

    pub fn edge_count(&self) -> usize {
        self.edges.values().map(BTreeSet::len).sum()
    }

    fn direct(&self, node: Node) -> impl Iterator<Item = Node> + '_ {
        self.edges.get(&node).into_iter().flatten().copied()
    }

    /// Every node in an order where each node comes after all nodes it reads.
    pub fn topology_sort(&self) -> Result<Vec<Node>, TopologyError<Node>> {
        let mut in_degree: BTreeMap<Node, usize> =
            self.nodes.iter().map(|node| (*node, 0)).collect();
        for targets in self.edges.values() {
            for to in targets {
                *in_degree.entry(*to).or_default() += 1;
            }
        }

        let mut ready: VecDeque<Node> = in_degree
            .iter()
            .filter(|(_, degree)| **degree == 0)
            .map(|(node, _)| *node)
            .collect();
        let mut order = Vec::with_capacity(in_degree.len());

        while let Some(node) = ready.pop_front() {
            order.push(node);
            for next in self.direct(node) {
                if let Some(degree) = in_degree.get_mut(&next) {
                    *degree -= 1;
                    if *degree == 0 {
                        ready.push_back(next);
                    }
                }
            }
        }

        if order.len() == in_degree.len() {
            return Ok(order);
        }

        let remaining: BTreeSet<Node> = in_degree
            .into_iter()
            .filter(|(_, degree)| *degree > 0)
            .map(|(node, _)| node)
            .collect();
        let route = self.find_cycle(&remaining).unwrap_or_default();
        Err(TopologyError::CycleDetected(DepRoute { route }))
    }

    fn find_cycle(&self, nodes: &BTreeSet<Node>) -> Option<Vec<Node>> {
        let mut visited = BTreeSet::new();
        let mut path: Vec<Node> = Vec::new();
        let mut stack: Vec<(Node, Vec<Node>)> = Vec::new();

        let neighbours = |node: Node| -> Vec<Node> {
            self.direct(node)
                .filter(|next| nodes.contains(next))
                .collect()
        };

        for &start in nodes {
            if !visited.insert(start) {
                continue;
            }
            path.push(start);
            stack.push((start, neighbours(start)));

            while let Some((_, pending)) = stack.last_mut() {
                let Some(next) = pending.pop() else {
                    stack.pop();
                    path.pop();
                    continue;
                };
                if let Some(pos) = path.iter().position(|node| *node == next) {
                    let mut cycle = path[pos..].to_vec();
                    cycle.push(next);
                    return Some(cycle);
                }
                if visited.insert(next) {
                    path.push(next);
                    stack.push((next, neighbours(next)));
                }
            }
        }
        None
    }

    /// Transitive dependents of `node`, i.e. everything that must be
    /// recomputed when `node` changes.
    pub fn dependents(&mut self, node: Node) -> &BTreeSet<Node> {
        if !self.dependents_cache.contains_key(&node) {
            let collected = self.collect_dependents(node);
            self.dependents_cache.insert(node, collected);
        }
        &self.dependents_cache[&node]
    }

    fn collect_dependents(&self, node: Node) -> BTreeSet<Node> {
        let mut collected = BTreeSet::new();
        let mut queue = VecDeque::from([node]);

        while let Some(current) = queue.pop_front() {
            for next in self.direct(current) {
                // collected doubles as the visited set, so cycles terminate
                if collected.insert(next) {
                    queue.push_back(next);
                }
            }
        }

        collected
    }
}
