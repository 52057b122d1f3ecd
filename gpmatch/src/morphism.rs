//! Morphisms from the left-hand graph of a rule into a host graph.

use crate::assignment::{Assignments, Outcome, Value};
use crate::label::HostAtom;
use crate::Error;
use alloc::boxed::Box;
use alloc::vec;
use core::fmt::{self, Display};

/// Mapping of one rule node or edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Map {
    /// index of the host item, `None` if unmapped
    pub host: Option<usize>,
    /// number of variable assignments made when this mapping was added
    ///
    /// This is needed when matching backtracks,
    /// in order to remove the right number of assignments.
    pub assignments: usize,
}

/// Number of nodes, edges and variables of a rule's left-hand side.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Shape {
    pub nodes: usize,
    pub edges: usize,
    pub variables: usize,
}

/// Progress of a morphism.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    /// no node or edge is mapped
    Empty,
    /// some, but not all nodes and edges are mapped
    Partial,
    /// all nodes and edges are mapped
    Total,
}

/// Graph morphism with variable assignment.
///
/// A morphism consists of node-to-node mappings, edge-to-edge mappings, and
/// variable-value assignments.
/// The sizes of all three are fixed on construction by the rule,
/// and a morphism is reused for all matches of its rule
/// by calling [`Morphism::reset`] between them.
///
/// Adding a mapping stamps it with the number of
/// assignments made while establishing it;
/// removing the mapping undoes exactly these assignments.
///
/// ~~~
/// # use gpmatch::Morphism;
/// let mut m = Morphism::new(2, 0, 1);
///
/// // map rule node 0 to host node 5, binding variable 0 on the way
/// let before = m.assigned();
/// m.try_assign_integer(0, 42);
/// m.add_node_map(0, 5, m.assigned() - before);
/// m.add_node_map(1, 7, 0);
/// assert!(m.is_total());
///
/// m.remove_node_map(0)?;
/// assert_eq!(m.lookup_node(0), None);
/// assert_eq!(m.lookup_node(1), Some(7));
/// assert_eq!(m.assigned(), 0);
/// # Ok::<_, gpmatch::Error>(())
/// ~~~
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Morphism {
    node_map: Box<[Map]>,
    edge_map: Box<[Map]>,
    assignments: Assignments,
}

fn add(kind: &str, entry: &mut Map, left: usize, host: usize, assignments: usize) {
    if let Some(old) = entry.host {
        warn!("overwrite {} map {} -> {} with {}", kind, left, old, host);
    }
    trace!("map {} {} -> {} ({} assignments)", kind, left, host, assignments);
    *entry = Map {
        host: Some(host),
        assignments,
    };
}

fn remove(kind: &str, entry: &mut Map, asg: &mut Assignments, left: usize) -> Result<(), Error> {
    asg.undo(entry.assignments)?;
    trace!("unmap {} {}", kind, left);
    *entry = Map::default();
    Ok(())
}

impl Morphism {
    /// Create an empty morphism for a rule with
    /// the given numbers of nodes, edges, and variables.
    pub fn new(nodes: usize, edges: usize, variables: usize) -> Self {
        Self {
            node_map: vec![Map::default(); nodes].into_boxed_slice(),
            edge_map: vec![Map::default(); edges].into_boxed_slice(),
            assignments: Assignments::new(variables),
        }
    }

    pub fn with_shape(shape: Shape) -> Self {
        Self::new(shape.nodes, shape.edges, shape.variables)
    }

    pub fn shape(&self) -> Shape {
        Shape {
            nodes: self.nodes(),
            edges: self.edges(),
            variables: self.variables(),
        }
    }

    pub fn nodes(&self) -> usize {
        self.node_map.len()
    }

    pub fn edges(&self) -> usize {
        self.edge_map.len()
    }

    pub fn variables(&self) -> usize {
        self.assignments.variables()
    }

    /// Number of currently bound variables.
    pub fn assigned(&self) -> usize {
        self.assignments.len()
    }

    /// Remove all mappings and assignments.
    ///
    /// This is done after each (successful or failed) matching attempt.
    pub fn reset(&mut self) {
        debug!("reset morphism");
        let maps = self.node_map.iter_mut().chain(self.edge_map.iter_mut());
        maps.for_each(|entry| *entry = Map::default());
        self.assignments.clear()
    }

    /// Map a rule node to a host node.
    ///
    /// `assignments` is the number of variables bound
    /// in the course of establishing this mapping.
    /// The rule node is expected to be unmapped.
    pub fn add_node_map(&mut self, left: usize, host: usize, assignments: usize) {
        add("node", &mut self.node_map[left], left, host, assignments)
    }

    /// Unmap a rule node and undo the assignments made when it was mapped.
    pub fn remove_node_map(&mut self, left: usize) -> Result<(), Error> {
        let entry = &mut self.node_map[left];
        remove("node", entry, &mut self.assignments, left)
    }

    /// Map a rule edge to a host edge.
    pub fn add_edge_map(&mut self, left: usize, host: usize, assignments: usize) {
        add("edge", &mut self.edge_map[left], left, host, assignments)
    }

    /// Unmap a rule edge and undo the assignments made when it was mapped.
    pub fn remove_edge_map(&mut self, left: usize) -> Result<(), Error> {
        let entry = &mut self.edge_map[left];
        remove("edge", entry, &mut self.assignments, left)
    }

    /// Return the host node that a rule node is mapped to.
    pub fn lookup_node(&self, left: usize) -> Option<usize> {
        self.node_map[left].host
    }

    /// Return the host edge that a rule edge is mapped to.
    pub fn lookup_edge(&self, left: usize) -> Option<usize> {
        self.edge_map[left].host
    }

    pub fn node_map(&self) -> &[Map] {
        &self.node_map
    }

    pub fn edge_map(&self) -> &[Map] {
        &self.edge_map
    }

    pub fn state(&self) -> State {
        let maps = self.node_map.iter().chain(self.edge_map.iter());
        let mapped = maps.filter(|entry| entry.host.is_some()).count();
        if mapped == self.nodes() + self.edges() {
            State::Total
        } else if mapped == 0 {
            State::Empty
        } else {
            State::Partial
        }
    }

    pub fn is_total(&self) -> bool {
        self.state() == State::Total
    }

    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub fn assignments_mut(&mut self) -> &mut Assignments {
        &mut self.assignments
    }

    pub fn try_assign(&mut self, id: usize, value: Value) -> Outcome {
        self.assignments.try_assign(id, value)
    }

    pub fn try_assign_integer(&mut self, id: usize, i: i32) -> Outcome {
        self.assignments.try_assign_integer(id, i)
    }

    pub fn try_assign_string(&mut self, id: usize, s: &str) -> Outcome {
        self.assignments.try_assign_string(id, s)
    }

    pub fn try_assign_list(&mut self, id: usize, l: &[HostAtom]) -> Outcome {
        self.assignments.try_assign_list(id, l)
    }

    /// Undo the `n` most recent assignments.
    ///
    /// This is for assignments made by a matching step
    /// that failed before its mapping could be added.
    pub fn undo(&mut self, n: usize) -> Result<(), Error> {
        Ok(self.assignments.undo(n)?)
    }

    pub fn integer(&self, id: usize) -> Result<i32, Error> {
        Ok(self.assignments.integer(id)?)
    }

    pub fn string(&self, id: usize) -> Result<&str, Error> {
        Ok(self.assignments.string(id)?)
    }

    pub fn list(&self, id: usize) -> Result<&[HostAtom], Error> {
        Ok(self.assignments.list(id)?)
    }
}

/// Live mappings as triples of rule index, host index, and assignment count.
fn live(map: &[Map]) -> impl Iterator<Item = (usize, usize, usize)> + '_ {
    let entries = map.iter().enumerate();
    entries.filter_map(|(left, entry)| Some((left, entry.host?, entry.assignments)))
}

impl Display for Morphism {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Node mappings:")?;
        for (left, host, n) in live(&self.node_map) {
            writeln!(f, "  {} --> {} ({} assignments)", left, host, n)?;
        }
        writeln!(f, "Edge mappings:")?;
        for (left, host, n) in live(&self.edge_map) {
            writeln!(f, "  {} --> {} ({} assignments)", left, host, n)?;
        }
        writeln!(f, "Assignments:")?;
        for (id, value) in self.assignments.iter() {
            writeln!(f, "  {} ({}) = {}", id, value.kind(), value)?;
        }
        Ok(())
    }
}
