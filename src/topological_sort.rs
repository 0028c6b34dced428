use crate::graph::{Graph, VertexDescriptor};
use crate::visitor::{Event, Visitor};

/// Orders the vertices so that every edge points forward, by reversing
/// the finish order of a depth-first search.
#[derive(Clone, Debug, Default)]
pub struct TopologicalSort {
    finished: Vec<VertexDescriptor>,
    acyclic: bool,
}

impl TopologicalSort {
    pub fn new() -> Self {
        Self {
            finished: Vec::new(),
            acyclic: true,
        }
    }

    /// `None` if the traversal met a back edge.
    pub fn into_order(self) -> Option<Vec<VertexDescriptor>> {
        if self.acyclic {
            let mut order = self.finished;
            order.reverse();
            Some(order)
        } else {
            None
        }
    }
}

impl<G> Visitor<G, Event> for TopologicalSort
where
    G: Graph,
{
    fn visit(&mut self, e: &Event, _g: &G) {
        match *e {
            Event::FinishVertex(v) => self.finished.push(v),
            Event::BackEdge(_) => self.acyclic = false,
            _ => (),
        }
    }
}
