use crate::graph::{EdgeDescriptor, Graph, VertexDescriptor};

/// Receives the events of a traversal. Implementors match on the events
/// they care about and ignore the rest.
pub trait Visitor<G, T>
where
    G: Graph,
{
    fn visit(&mut self, e: &T, graph: &G);
}

/// Callback points of a depth-first search, in the order they fire for a
/// single vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Event {
    /// Once per vertex, before the traversal begins.
    InitializeVertex(VertexDescriptor),
    /// The vertex becomes the root of a new depth-first tree.
    StartVertex(VertexDescriptor),
    /// The vertex turns gray.
    DiscoverVertex(VertexDescriptor),
    /// Every out-edge, before it is classified.
    ExamineEdge(EdgeDescriptor),
    /// The target was white. Fires after the target's subtree is finished.
    TreeEdge(EdgeDescriptor),
    /// The target is gray, i.e. still on the current path.
    BackEdge(EdgeDescriptor),
    /// The target is already black.
    ForwardOrCrossEdge(EdgeDescriptor),
    /// Every out-edge, after classification and any descent it caused.
    FinishEdge(EdgeDescriptor),
    /// The vertex turns black.
    FinishVertex(VertexDescriptor),
}

pub struct DefaultVisitor;

impl<G> Visitor<G, Event> for DefaultVisitor
where
    G: Graph,
{
    fn visit(&mut self, _e: &Event, _g: &G) {}
}

impl<'v, G, T, V> Visitor<G, T> for &'v mut V
where
    G: Graph,
    V: Visitor<G, T>,
{
    fn visit(&mut self, e: &T, graph: &G) {
        (**self).visit(e, graph)
    }
}

/// Runs two visitors side by side; `A` sees each event before `B`.
impl<G, T, A, B> Visitor<G, T> for (A, B)
where
    G: Graph,
    A: Visitor<G, T>,
    B: Visitor<G, T>,
{
    fn visit(&mut self, e: &T, graph: &G) {
        self.0.visit(e, graph);
        self.1.visit(e, graph);
    }
}
