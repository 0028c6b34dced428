use std::num::ParseIntError;

use crate::graph::VertexDescriptor;

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("vertex {vertex:?} is out of range for a graph of order {order}")]
    VertexOutOfRange { vertex: VertexDescriptor, order: usize },
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("unexpected end of input while reading {what}")]
    UnexpectedEof { what: &'static str },
    #[error("invalid integer `{token}` while reading {what}")]
    InvalidInteger {
        token: String,
        what: &'static str,
        #[source]
        source: ParseIntError,
    },
    #[error("parent {parent} of vertex {vertex} is out of range 1..={order}")]
    ParentOutOfRange {
        vertex: usize,
        parent: usize,
        order: usize,
    },
    #[error("query #{index} refers to vertex {vertex}, out of range 1..={order}")]
    QueryOutOfRange {
        index: usize,
        vertex: usize,
        order: usize,
    },
    #[error(transparent)]
    Graph(#[from] GraphError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
