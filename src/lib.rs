mod adjacency_list;
mod ancestor;
mod color_map;
mod components;
mod cycle;
mod depth_first_search;
mod error;
mod graph;
mod path;
pub mod problem;
mod time_stamps;
mod topological_sort;
mod visitor;

pub use adjacency_list::{AdjacencyList, Edge};
pub use ancestor::{AncestorOracle, Query};
pub use color_map::{Color, ColorMap, HashColorMap, VecColorMap};
pub use components::ComponentLabeler;
pub use cycle::CycleDetector;
pub use depth_first_search::Dfs;
pub use error::{GraphError, InputError};
pub use graph::{EdgeDescriptor, EdgeListGraph, FromUsize, Graph, IncidenceGraph,
                VertexDescriptor, VertexListGraph};
pub use path::{reverse_path, ParentRecorder};
pub use time_stamps::TimeStamps;
pub use topological_sort::TopologicalSort;
pub use visitor::{DefaultVisitor, Event, Visitor};
