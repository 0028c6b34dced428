use fnv::FnvHashMap;

use crate::graph::VertexDescriptor;

/// Traversal state of a vertex. A vertex only ever moves
/// `White -> Gray -> Black`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Color {
    /// Not discovered yet.
    #[default]
    White,
    /// Discovered, still on the traversal path.
    Gray,
    /// Every out-edge has been processed.
    Black,
}

/// Per-vertex color storage for one traversal.
pub trait ColorMap {
    /// A map over `order` vertices, all of them white.
    fn with_order(order: usize) -> Self
    where
        Self: Sized;
    fn color(&self, v: VertexDescriptor) -> Color;
    fn set_color(&mut self, v: VertexDescriptor, color: Color);
}

/// Color map backed by a vector sized once to the order of the graph.
#[derive(Clone, Debug, Default)]
pub struct VecColorMap {
    colors: Vec<Color>,
}

impl VecColorMap {
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }
}

impl ColorMap for VecColorMap {
    fn with_order(order: usize) -> Self {
        Self { colors: vec![Color::White; order] }
    }

    fn color(&self, v: VertexDescriptor) -> Color {
        self.colors[usize::from(v)]
    }

    fn set_color(&mut self, v: VertexDescriptor, color: Color) {
        self.colors[usize::from(v)] = color;
    }
}

/// Color map that only stores vertices which left white. Suits searches
/// that touch a small part of a large graph.
#[derive(Clone, Debug, Default)]
pub struct HashColorMap {
    order: usize,
    colors: FnvHashMap<VertexDescriptor, Color>,
}

impl HashColorMap {
    /// Number of vertices that are gray or black.
    pub fn touched(&self) -> usize {
        self.colors.len()
    }
}

impl ColorMap for HashColorMap {
    fn with_order(order: usize) -> Self {
        Self {
            order,
            colors: FnvHashMap::default(),
        }
    }

    fn color(&self, v: VertexDescriptor) -> Color {
        assert!(usize::from(v) < self.order, "vertex {:?} out of range", v);
        self.colors.get(&v).cloned().unwrap_or_default()
    }

    fn set_color(&mut self, v: VertexDescriptor, color: Color) {
        assert!(usize::from(v) < self.order, "vertex {:?} out of range", v);
        self.colors.insert(v, color);
    }
}
