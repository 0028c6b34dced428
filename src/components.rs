use crate::graph::{Graph, VertexDescriptor};
use crate::visitor::{Event, Visitor};

/// Labels every vertex with the index of the depth-first tree it was
/// discovered in. Trees are numbered in the order their roots are started.
#[derive(Clone, Debug, Default)]
pub struct ComponentLabeler {
    labels: Vec<Option<usize>>,
    count: usize,
}

impl ComponentLabeler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn label(&self, v: VertexDescriptor) -> Option<usize> {
        self.labels.get(usize::from(v)).copied().flatten()
    }

    pub fn count(&self) -> usize {
        self.count
    }
}

impl<G> Visitor<G, Event> for ComponentLabeler
where
    G: Graph,
{
    fn visit(&mut self, e: &Event, _g: &G) {
        match *e {
            Event::InitializeVertex(v) => {
                let i = usize::from(v);
                if i >= self.labels.len() {
                    self.labels.resize(i + 1, None);
                }
                self.labels[i] = None;
                self.count = 0;
            }
            Event::StartVertex(_) => self.count += 1,
            Event::DiscoverVertex(v) => self.labels[usize::from(v)] = Some(self.count - 1),
            _ => (),
        }
    }
}
