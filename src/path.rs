use fnv::FnvHashMap;

use crate::graph::{IncidenceGraph, VertexDescriptor};
use crate::visitor::{Event, Visitor};

pub fn reverse_path(
    parents: &FnvHashMap<VertexDescriptor, VertexDescriptor>,
    goal: VertexDescriptor,
) -> Vec<VertexDescriptor> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(&parent) = parents.get(&current) {
        path.push(parent);
        current = parent;
    }
    path.reverse();
    path
}

/// Remembers the tree-edge parent of every vertex reached through a tree
/// edge. Roots of depth-first trees have no entry.
#[derive(Clone, Debug, Default)]
pub struct ParentRecorder {
    parents: FnvHashMap<VertexDescriptor, VertexDescriptor>,
}

impl ParentRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parent(&self, v: VertexDescriptor) -> Option<VertexDescriptor> {
        self.parents.get(&v).cloned()
    }

    pub fn parents(&self) -> &FnvHashMap<VertexDescriptor, VertexDescriptor> {
        &self.parents
    }

    /// Tree path from the root of `v`'s depth-first tree down to `v`.
    pub fn path_to(&self, v: VertexDescriptor) -> Vec<VertexDescriptor> {
        reverse_path(&self.parents, v)
    }
}

impl<'a, G> Visitor<G, Event> for ParentRecorder
where
    G: IncidenceGraph<'a>,
{
    fn visit(&mut self, e: &Event, graph: &G) {
        match *e {
            Event::InitializeVertex(v) => {
                self.parents.remove(&v);
            }
            Event::TreeEdge(e) => {
                self.parents.insert(graph.target(e), graph.source(e));
            }
            _ => (),
        }
    }
}
