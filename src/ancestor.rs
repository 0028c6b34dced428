use num_traits::{One, Zero};

use crate::depth_first_search::Dfs;
use crate::graph::{Graph, IncidenceGraph, VertexDescriptor, VertexListGraph};
use crate::time_stamps::TimeStamps;

/// "Is `ancestor` an ancestor of `vertex`?"
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Query {
    pub ancestor: VertexDescriptor,
    pub vertex: VertexDescriptor,
}

impl Query {
    pub fn new(ancestor: VertexDescriptor, vertex: VertexDescriptor) -> Self {
        Self { ancestor, vertex }
    }
}

/// Answers ancestor queries on a depth-first forest in constant time.
///
/// `a` is an ancestor of `v` exactly when the search entered `a` before `v`
/// and left `v` before `a`, i.e. when the interval of `a` contains the
/// interval of `v`. Every vertex counts as its own ancestor.
#[derive(Clone, Debug)]
pub struct AncestorOracle<T = usize> {
    stamps: TimeStamps<T>,
}

impl<T> AncestorOracle<T>
where
    T: Copy + Ord + Zero + One,
{
    /// Traverses `graph` from each of `roots` (then from every vertex left
    /// over) and keeps the resulting time stamps. For a forest, pass all of
    /// its roots; a vertex reached before its own root would otherwise start
    /// a tree of its own.
    pub fn new<'a, G, I>(graph: &'a G, roots: I) -> Self
    where
        G: IncidenceGraph<'a> + VertexListGraph<'a>,
        I: IntoIterator<Item = VertexDescriptor>,
    {
        let mut dfs = Dfs::with_visitor(TimeStamps::with_order(graph.order()));
        dfs.run(roots, graph);
        Self::from_time_stamps(dfs.into_visitor())
    }

    pub fn from_time_stamps(stamps: TimeStamps<T>) -> Self {
        Self { stamps }
    }

    pub fn time_stamps(&self) -> &TimeStamps<T> {
        &self.stamps
    }

    pub fn is_ancestor(&self, ancestor: VertexDescriptor, vertex: VertexDescriptor) -> bool {
        let (a_in, a_out) = self.stamps.interval(ancestor);
        let (v_in, v_out) = self.stamps.interval(vertex);
        a_in <= v_in && v_out <= a_out
    }

    /// Like [`is_ancestor`](Self::is_ancestor) but a vertex is not its own
    /// ancestor.
    pub fn is_strict_ancestor(&self, ancestor: VertexDescriptor, vertex: VertexDescriptor) -> bool {
        ancestor != vertex && self.is_ancestor(ancestor, vertex)
    }

    pub fn resolve(&self, query: &Query) -> bool {
        self.is_ancestor(query.ancestor, query.vertex)
    }

    pub fn resolve_all<'q, I>(&self, queries: I) -> Vec<bool>
    where
        I: IntoIterator<Item = &'q Query>,
    {
        queries.into_iter().map(|q| self.resolve(q)).collect()
    }
}
