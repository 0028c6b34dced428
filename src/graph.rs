pub trait FromUsize {
    fn from_usize(v: usize) -> Self;
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct VertexDescriptor(usize);

impl From<VertexDescriptor> for usize {
    fn from(v: VertexDescriptor) -> Self {
        v.0
    }
}

impl FromUsize for VertexDescriptor {
    fn from_usize(v: usize) -> Self {
        VertexDescriptor(v)
    }
}

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct EdgeDescriptor(usize);

impl From<EdgeDescriptor> for usize {
    fn from(v: EdgeDescriptor) -> Self {
        v.0
    }
}

impl FromUsize for EdgeDescriptor {
    fn from_usize(v: usize) -> Self {
        EdgeDescriptor(v)
    }
}

/// Read-only view of a directed graph whose vertices are `0..order()`.
pub trait Graph {
    fn order(&self) -> usize;
    fn size(&self) -> usize;
}

/// Out-edge access. Edges come back in the order they were added.
pub trait IncidenceGraph<'a>: Graph {
    type Incidences: Iterator<Item = EdgeDescriptor>;

    fn out_degree(&self, d: VertexDescriptor) -> usize;
    fn out_edges(&'a self, d: VertexDescriptor) -> Self::Incidences;
    fn source(&self, d: EdgeDescriptor) -> VertexDescriptor;
    fn target(&self, d: EdgeDescriptor) -> VertexDescriptor;
}

/// Vertex enumeration. The iteration order is the sweep order of a
/// depth-first search.
pub trait VertexListGraph<'a>: Graph {
    type Vertices: Iterator<Item = VertexDescriptor>;

    fn vertices(&'a self) -> Self::Vertices;
}

pub trait EdgeListGraph<'a>: Graph {
    type Edges: Iterator<Item = EdgeDescriptor>;

    fn edges(&'a self) -> Self::Edges;
}
