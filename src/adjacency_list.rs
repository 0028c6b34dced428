use std::iter::{Copied, Map};
use std::ops::{Deref, Range};
use std::slice;

use slab::{self, Slab};

use crate::error::GraphError;
use crate::graph::{EdgeDescriptor, EdgeListGraph, FromUsize, Graph, IncidenceGraph,
                   VertexDescriptor, VertexListGraph};

/// Directed graph over the vertices `0..order`, with out-edges kept per
/// vertex in insertion order.
#[derive(Clone, Debug)]
pub struct AdjacencyList {
    out_edges: Vec<Vec<EdgeDescriptor>>,
    edges: Slab<Edge>,
}

#[derive(Clone, Debug, Hash)]
pub struct Edge {
    incidence: (VertexDescriptor, VertexDescriptor),
}

impl Deref for Edge {
    type Target = (VertexDescriptor, VertexDescriptor);

    fn deref(&self) -> &Self::Target {
        &self.incidence
    }
}

impl AdjacencyList {
    pub fn with_order(order: usize) -> Self {
        Self {
            out_edges: vec![Vec::new(); order],
            edges: Slab::new(),
        }
    }

    pub fn with_order_size(order: usize, size: usize) -> Self {
        Self {
            out_edges: vec![Vec::new(); order],
            edges: Slab::with_capacity(size),
        }
    }

    /// Appends `source -> target` to the out-edges of `source`. Parallel
    /// edges and self-loops are kept as distinct edges.
    pub fn add_edge(
        &mut self,
        source: VertexDescriptor,
        target: VertexDescriptor,
    ) -> Result<EdgeDescriptor, GraphError> {
        let order = self.order();
        for &vertex in &[source, target] {
            if usize::from(vertex) >= order {
                return Err(GraphError::VertexOutOfRange { vertex, order });
            }
        }

        let key = self.edges.insert(Edge { incidence: (source, target) });
        let ed = EdgeDescriptor::from_usize(key);
        self.out_edges[usize::from(source)].push(ed);
        Ok(ed)
    }
}

impl Graph for AdjacencyList {
    fn order(&self) -> usize {
        self.out_edges.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }
}

impl<'a> IncidenceGraph<'a> for AdjacencyList {
    type Incidences = Copied<slice::Iter<'a, EdgeDescriptor>>;

    fn out_degree(&self, d: VertexDescriptor) -> usize {
        self.out_edges[usize::from(d)].len()
    }

    fn out_edges(&'a self, d: VertexDescriptor) -> Self::Incidences {
        self.out_edges[usize::from(d)].iter().copied()
    }

    fn source(&self, d: EdgeDescriptor) -> VertexDescriptor {
        let &(s, _) = self.edges[usize::from(d)].deref();
        s
    }

    fn target(&self, d: EdgeDescriptor) -> VertexDescriptor {
        let &(_, t) = self.edges[usize::from(d)].deref();
        t
    }
}

impl<'a> VertexListGraph<'a> for AdjacencyList {
    type Vertices = Map<Range<usize>, fn(usize) -> VertexDescriptor>;

    fn vertices(&'a self) -> Self::Vertices {
        (0..self.order()).map(VertexDescriptor::from_usize as fn(usize) -> VertexDescriptor)
    }
}

impl<'a> EdgeListGraph<'a> for AdjacencyList {
    type Edges = Map<slab::Iter<'a, Edge>, fn((usize, &Edge)) -> EdgeDescriptor>;

    fn edges(&'a self) -> Self::Edges {
        self.edges.iter().map(|(k, _)| EdgeDescriptor::from_usize(k))
    }
}
