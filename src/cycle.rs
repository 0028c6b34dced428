use crate::graph::{EdgeDescriptor, Graph};
use crate::visitor::{Event, Visitor};

/// Collects back edges. A directed graph has a cycle iff a depth-first
/// search over it reports at least one.
#[derive(Clone, Debug, Default)]
pub struct CycleDetector {
    back_edges: Vec<EdgeDescriptor>,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_cycle(&self) -> bool {
        !self.back_edges.is_empty()
    }

    pub fn back_edges(&self) -> &[EdgeDescriptor] {
        &self.back_edges
    }
}

impl<G> Visitor<G, Event> for CycleDetector
where
    G: Graph,
{
    fn visit(&mut self, e: &Event, _g: &G) {
        if let Event::BackEdge(e) = *e {
            self.back_edges.push(e);
        }
    }
}
