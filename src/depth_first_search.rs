use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::color_map::{Color, ColorMap, VecColorMap};
use crate::graph::{EdgeDescriptor, Graph, IncidenceGraph, VertexDescriptor, VertexListGraph};
use crate::visitor::{DefaultVisitor, Event, Visitor};

/// A vertex on the current traversal path together with the out-edges it
/// has left to examine.
struct Frame<I> {
    vertex: VertexDescriptor,
    out_edges: I,
    // Tree edge whose target subtree is being walked.
    descending: Option<EdgeDescriptor>,
}

/// Depth-first search over every vertex of a graph.
///
/// The traversal keeps its own stack instead of recursing, so the depth of
/// the graph is bounded by memory rather than by the call stack. Events are
/// reported to the visitor in exactly the order a recursive search would
/// produce them: a vertex is discovered before its children, a tree edge is
/// reported once the subtree under it is finished, and a vertex finishes
/// after all of its out-edges.
///
/// Vertex state lives in a [`ColorMap`] rebuilt for every run; the default
/// is the dense [`VecColorMap`].
pub struct Dfs<T, V, C = VecColorMap>
where
    T: Graph,
    V: Visitor<T, Event>,
    C: ColorMap,
{
    colors: C,
    visitor: V,
    phantom: PhantomData<T>,
}

impl<T> Dfs<T, DefaultVisitor>
where
    T: Graph,
{
    pub fn new() -> Self {
        Self::with_visitor(DefaultVisitor)
    }
}

impl<T> Default for Dfs<T, DefaultVisitor>
where
    T: Graph,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T, V> Dfs<T, V>
where
    T: Graph,
    V: Visitor<T, Event>,
{
    pub fn with_visitor(visitor: V) -> Self {
        Self::with_color_map(visitor)
    }
}

impl<T, V, C> Dfs<T, V, C>
where
    T: Graph,
    V: Visitor<T, Event>,
    C: ColorMap,
{
    /// Like [`with_visitor`](Dfs::with_visitor) with the color map type
    /// chosen by the caller.
    pub fn with_color_map(visitor: V) -> Self {
        Self {
            colors: C::with_order(0),
            visitor,
            phantom: PhantomData,
        }
    }

    /// Walks the whole graph. Each vertex of `starts` that is still white
    /// becomes the root of a depth-first tree, in the given order; the
    /// remaining white vertices are then swept in vertex order, each one
    /// starting a new tree. `None` and `Some(v)` work as `starts`.
    pub fn run<'a, I>(&mut self, starts: I, graph: &'a T)
    where
        I: IntoIterator<Item = VertexDescriptor>,
        T: IncidenceGraph<'a> + VertexListGraph<'a>,
    {
        debug!(
            order = graph.order(),
            size = graph.size(),
            "depth-first search"
        );

        self.colors = C::with_order(graph.order());
        for vertex in graph.vertices() {
            self.visitor.visit(&Event::InitializeVertex(vertex), graph);
        }

        let mut fringe = Vec::new();
        let mut trees = 0usize;
        for start in starts.into_iter().chain(graph.vertices()) {
            if self.colors.color(start) == Color::White {
                self.visit(start, &mut fringe, graph);
                trees += 1;
            }
        }

        debug!(trees, "depth-first search finished");
    }

    fn visit<'a>(
        &mut self,
        root: VertexDescriptor,
        fringe: &mut Vec<Frame<<T as IncidenceGraph<'a>>::Incidences>>,
        graph: &'a T,
    ) where
        T: IncidenceGraph<'a>,
    {
        trace!(?root, "start vertex");
        self.visitor.visit(&Event::StartVertex(root), graph);
        self.discover(root, fringe, graph);

        while let Some(frame) = fringe.last_mut() {
            if let Some(edge) = frame.descending.take() {
                self.visitor.visit(&Event::TreeEdge(edge), graph);
                self.visitor.visit(&Event::FinishEdge(edge), graph);
            }

            let edge = match frame.out_edges.next() {
                Some(edge) => edge,
                None => {
                    let vertex = frame.vertex;
                    fringe.pop();
                    self.colors.set_color(vertex, Color::Black);
                    self.visitor.visit(&Event::FinishVertex(vertex), graph);
                    continue;
                }
            };

            self.visitor.visit(&Event::ExamineEdge(edge), graph);
            let target = graph.target(edge);
            match self.colors.color(target) {
                Color::White => {
                    frame.descending = Some(edge);
                    self.discover(target, fringe, graph);
                }
                Color::Gray => {
                    self.visitor.visit(&Event::BackEdge(edge), graph);
                    self.visitor.visit(&Event::FinishEdge(edge), graph);
                }
                Color::Black => {
                    self.visitor.visit(&Event::ForwardOrCrossEdge(edge), graph);
                    self.visitor.visit(&Event::FinishEdge(edge), graph);
                }
            }
        }
    }

    fn discover<'a>(
        &mut self,
        vertex: VertexDescriptor,
        fringe: &mut Vec<Frame<<T as IncidenceGraph<'a>>::Incidences>>,
        graph: &'a T,
    ) where
        T: IncidenceGraph<'a>,
    {
        self.colors.set_color(vertex, Color::Gray);
        self.visitor.visit(&Event::DiscoverVertex(vertex), graph);
        fringe.push(Frame {
            vertex,
            out_edges: graph.out_edges(vertex),
            descending: None,
        });
    }

    /// Color of `v` as left by the last run.
    pub fn color(&self, v: VertexDescriptor) -> Color {
        self.colors.color(v)
    }

    pub fn visitor_ref(&self) -> &V {
        &self.visitor
    }

    pub fn visitor_mut(&mut self) -> &mut V {
        &mut self.visitor
    }

    pub fn into_visitor(self) -> V {
        self.visitor
    }
}

#[cfg(test)]
mod tests {
    use super::Dfs;
    use crate::adjacency_list::AdjacencyList;
    use crate::graph::{FromUsize, Graph, IncidenceGraph, VertexDescriptor};
    use crate::visitor::{Event, Visitor};

    fn v(i: usize) -> VertexDescriptor {
        VertexDescriptor::from_usize(i)
    }

    fn graph(order: usize, edges: &[(usize, usize)]) -> AdjacencyList {
        let mut g = AdjacencyList::with_order(order);
        for &(s, t) in edges {
            g.add_edge(v(s), v(t)).unwrap();
        }
        g
    }

    #[derive(Default)]
    struct MyVisitor {
        init: Vec<VertexDescriptor>,
        started: Vec<VertexDescriptor>,
        discovered: Vec<VertexDescriptor>,
        edge_target_examined: Vec<VertexDescriptor>,
        tree_edge_target: Vec<VertexDescriptor>,
        back_edge_target: Vec<VertexDescriptor>,
        forward_or_cross_edge_target: Vec<VertexDescriptor>,
        finished_edges: usize,
        finished: Vec<VertexDescriptor>,
    }

    impl<'a, T> Visitor<T, Event> for MyVisitor
    where
        T: IncidenceGraph<'a>,
    {
        fn visit(&mut self, e: &Event, graph: &T) {
            match *e {
                Event::InitializeVertex(v) => self.init.push(v),
                Event::StartVertex(v) => self.started.push(v),
                Event::DiscoverVertex(v) => self.discovered.push(v),
                Event::ExamineEdge(e) => self.edge_target_examined.push(graph.target(e)),
                Event::TreeEdge(e) => self.tree_edge_target.push(graph.target(e)),
                Event::BackEdge(e) => self.back_edge_target.push(graph.target(e)),
                Event::ForwardOrCrossEdge(e) => {
                    self.forward_or_cross_edge_target.push(graph.target(e))
                }
                Event::FinishEdge(_) => self.finished_edges += 1,
                Event::FinishVertex(v) => self.finished.push(v),
            }
        }
    }

    struct Recorder(Vec<Event>);

    impl<T> Visitor<T, Event> for Recorder
    where
        T: Graph,
    {
        fn visit(&mut self, e: &Event, _g: &T) {
            self.0.push(*e);
        }
    }

    fn ten_vertices() -> AdjacencyList {
        graph(
            10,
            &[
                (0, 1),
                (0, 4),
                (1, 5),
                (2, 0),
                (2, 4),
                (4, 1),
                (4, 3),
                (4, 6),
                (5, 4),
                (5, 4),
                (6, 7),
                (7, 3),
                (7, 9),
                (8, 7),
                (9, 8),
            ],
        )
    }

    #[test]
    fn dfs_with_visitor() {
        let g = ten_vertices();
        let mut dfs = Dfs::with_visitor(MyVisitor::default());
        dfs.run(Some(v(0)), &g);

        let vs = |xs: &[usize]| xs.iter().map(|&x| v(x)).collect::<Vec<_>>();
        let visitor = dfs.visitor_ref();

        assert_eq!(visitor.init, vs(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]));
        assert_eq!(visitor.started, vs(&[0, 2]));
        assert_eq!(visitor.discovered, vs(&[0, 1, 5, 4, 3, 6, 7, 9, 8, 2]));
        assert_eq!(
            visitor.edge_target_examined,
            vs(&[1, 5, 4, 1, 3, 6, 7, 3, 9, 8, 7, 4, 4, 0, 4])
        );
        assert_eq!(visitor.tree_edge_target, vs(&[3, 8, 9, 7, 6, 4, 5, 1]));
        assert_eq!(visitor.back_edge_target, vs(&[1, 7]));
        assert_eq!(visitor.forward_or_cross_edge_target, vs(&[3, 4, 4, 0, 4]));
        assert_eq!(visitor.finished_edges, 15);
        assert_eq!(visitor.finished, vs(&[3, 8, 9, 7, 6, 4, 5, 1, 0, 2]));
    }

    #[test]
    fn event_order_around_tree_and_back_edges() {
        let mut g = AdjacencyList::with_order(2);
        let e01 = g.add_edge(v(0), v(1)).unwrap();
        let e11 = g.add_edge(v(1), v(1)).unwrap();

        let mut dfs = Dfs::with_visitor(Recorder(Vec::new()));
        dfs.run(Some(v(0)), &g);

        assert_eq!(
            dfs.into_visitor().0,
            vec![
                Event::InitializeVertex(v(0)),
                Event::InitializeVertex(v(1)),
                Event::StartVertex(v(0)),
                Event::DiscoverVertex(v(0)),
                Event::ExamineEdge(e01),
                Event::DiscoverVertex(v(1)),
                Event::ExamineEdge(e11),
                Event::BackEdge(e11),
                Event::FinishEdge(e11),
                Event::FinishVertex(v(1)),
                Event::TreeEdge(e01),
                Event::FinishEdge(e01),
                Event::FinishVertex(v(0)),
            ]
        );
    }

    #[test]
    fn start_vertex_is_visited_first() {
        let g = graph(4, &[(0, 1), (1, 2), (2, 3)]);
        let mut dfs = Dfs::with_visitor(MyVisitor::default());
        dfs.run(Some(v(2)), &g);

        let visitor = dfs.visitor_ref();
        assert_eq!(visitor.started, vec![v(2), v(0)]);
        assert_eq!(visitor.discovered, vec![v(2), v(3), v(0), v(1)]);
        assert_eq!(visitor.forward_or_cross_edge_target, vec![v(2)]);
    }

    #[test]
    fn every_start_roots_its_own_tree() {
        // Trees 0 -> 3 and 2 -> 1. A plain sweep would reach 1 before its
        // parent 2.
        let g = graph(4, &[(2, 1), (0, 3)]);
        let mut dfs = Dfs::with_visitor(MyVisitor::default());
        dfs.run(vec![v(0), v(2)], &g);

        let visitor = dfs.visitor_ref();
        assert_eq!(visitor.started, vec![v(0), v(2)]);
        assert_eq!(visitor.discovered, vec![v(0), v(3), v(2), v(1)]);
        assert_eq!(visitor.tree_edge_target, vec![v(3), v(1)]);
        assert!(visitor.forward_or_cross_edge_target.is_empty());
    }

    #[test]
    fn finished_starts_are_skipped() {
        let g = graph(3, &[(0, 1), (1, 2)]);
        let mut dfs = Dfs::with_visitor(MyVisitor::default());
        dfs.run(vec![v(0), v(2), v(0)], &g);

        let visitor = dfs.visitor_ref();
        assert_eq!(visitor.started, vec![v(0)]);
        assert_eq!(visitor.discovered, vec![v(0), v(1), v(2)]);
    }

    #[test]
    fn hash_color_map_matches_vec_color_map() {
        use crate::color_map::{Color, HashColorMap};

        let g = ten_vertices();
        let mut dense = Dfs::with_visitor(Recorder(Vec::new()));
        let mut sparse: Dfs<_, _, HashColorMap> = Dfs::with_color_map(Recorder(Vec::new()));
        dense.run(Some(v(5)), &g);
        sparse.run(Some(v(5)), &g);

        assert_eq!(dense.visitor_ref().0, sparse.visitor_ref().0);
        for i in 0..g.order() {
            assert_eq!(sparse.color(v(i)), Color::Black);
        }
    }

    #[test]
    fn sweep_without_start() {
        let g = graph(5, &[(3, 4), (1, 0)]);
        let mut dfs = Dfs::with_visitor(MyVisitor::default());
        dfs.run(None, &g);

        let visitor = dfs.visitor_ref();
        assert_eq!(visitor.started, vec![v(0), v(1), v(2), v(3)]);
        assert_eq!(visitor.discovered, vec![v(0), v(1), v(2), v(3), v(4)]);
        assert_eq!(visitor.forward_or_cross_edge_target, vec![v(0)]);
        assert_eq!(visitor.tree_edge_target, vec![v(4)]);
    }

    #[test]
    fn every_vertex_ends_black() {
        use crate::color_map::Color;

        let g = ten_vertices();
        let mut dfs = Dfs::new();
        dfs.run(Some(v(4)), &g);

        for i in 0..g.order() {
            assert_eq!(dfs.color(v(i)), Color::Black);
        }
    }

    #[test]
    fn rerun_is_identical() {
        let g = ten_vertices();
        let mut dfs = Dfs::with_visitor(Recorder(Vec::new()));

        dfs.run(Some(v(0)), &g);
        let first = std::mem::take(&mut dfs.visitor_mut().0);
        dfs.run(Some(v(0)), &g);

        assert_eq!(first, dfs.visitor_ref().0);
    }

    #[test]
    fn deep_chain() {
        let n = 200_000;
        let mut g = AdjacencyList::with_order_size(n, n - 1);
        for i in 1..n {
            g.add_edge(v(i - 1), v(i)).unwrap();
        }

        let mut dfs = Dfs::with_visitor(MyVisitor::default());
        dfs.run(Some(v(0)), &g);

        let visitor = dfs.visitor_ref();
        assert_eq!(visitor.started, vec![v(0)]);
        assert_eq!(visitor.discovered.len(), n);
        assert_eq!(visitor.finished.first(), Some(&v(n - 1)));
        assert_eq!(visitor.finished.last(), Some(&v(0)));
    }

    #[test]
    fn empty_graph() {
        let g = AdjacencyList::with_order(0);
        let mut dfs = Dfs::with_visitor(Recorder(Vec::new()));
        dfs.run(None, &g);
        assert!(dfs.visitor_ref().0.is_empty());
    }
}
