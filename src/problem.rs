//! The ancestor problem as read from text.
//!
//! The input is a whitespace separated list of integers: the number of
//! vertices `n`, then for each vertex its 1-based parent (`0` for a root),
//! then the number of queries `q`, then `q` pairs of 1-based
//! `ancestor vertex` indices. Every query is answered with a line holding
//! `1` if the first vertex is an ancestor of (or equal to) the second, and
//! `0` otherwise.

use std::io::{self, Read, Write};
use std::str::SplitAsciiWhitespace;

use tracing::{debug, warn};

use crate::adjacency_list::AdjacencyList;
use crate::ancestor::{AncestorOracle, Query};
use crate::cycle::CycleDetector;
use crate::depth_first_search::Dfs;
use crate::error::{GraphError, InputError};
use crate::graph::{FromUsize, VertexDescriptor};
use crate::time_stamps::TimeStamps;

struct Tokens<'s> {
    inner: SplitAsciiWhitespace<'s>,
}

impl<'s> Tokens<'s> {
    fn new(input: &'s str) -> Self {
        Self { inner: input.split_ascii_whitespace() }
    }

    fn next_usize(&mut self, what: &'static str) -> Result<usize, InputError> {
        let token = self.inner.next().ok_or(InputError::UnexpectedEof { what })?;
        token.parse().map_err(|source| InputError::InvalidInteger {
            token: token.to_owned(),
            what,
            source,
        })
    }

    /// A 1-based vertex index turned into a descriptor.
    fn next_vertex(&mut self, order: usize, index: usize) -> Result<VertexDescriptor, InputError> {
        let vertex = self.next_usize("query")?;
        if vertex == 0 || vertex > order {
            return Err(InputError::QueryOutOfRange { index, vertex, order });
        }
        Ok(VertexDescriptor::from_usize(vertex - 1))
    }
}

#[derive(Clone, Debug)]
pub struct Problem {
    parents: Vec<Option<VertexDescriptor>>,
    queries: Vec<Query>,
}

impl Problem {
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let mut tokens = Tokens::new(input);

        // Counts come from the input; never reserve more than the text could
        // possibly hold.
        let order = tokens.next_usize("vertex count")?;
        let mut parents = Vec::with_capacity(order.min(input.len()));
        for vertex in 1..=order {
            let parent = tokens.next_usize("parent")?;
            if parent > order {
                return Err(InputError::ParentOutOfRange { vertex, parent, order });
            }
            parents.push(parent.checked_sub(1).map(VertexDescriptor::from_usize));
        }

        let count = tokens.next_usize("query count")?;
        let mut queries = Vec::with_capacity(count.min(input.len()));
        for index in 1..=count {
            let ancestor = tokens.next_vertex(order, index)?;
            let vertex = tokens.next_vertex(order, index)?;
            queries.push(Query { ancestor, vertex });
        }

        debug!(order, queries = queries.len(), "parsed problem");
        Ok(Self { parents, queries })
    }

    pub fn read<R: Read>(mut reader: R) -> Result<Self, InputError> {
        let mut input = String::new();
        reader.read_to_string(&mut input)?;
        Self::parse(&input)
    }

    pub fn order(&self) -> usize {
        self.parents.len()
    }

    pub fn queries(&self) -> &[Query] {
        &self.queries
    }

    /// Vertices without a parent, in vertex order.
    pub fn roots(&self) -> Vec<VertexDescriptor> {
        self.parents
            .iter()
            .enumerate()
            .filter(|(_, p)| p.is_none())
            .map(|(i, _)| VertexDescriptor::from_usize(i))
            .collect()
    }

    /// One edge from each parent to its child.
    pub fn build_graph(&self) -> Result<AdjacencyList, GraphError> {
        let size = self.parents.iter().filter(|p| p.is_some()).count();
        let mut graph = AdjacencyList::with_order_size(self.order(), size);
        for (child, parent) in self.parents.iter().enumerate() {
            if let Some(parent) = *parent {
                graph.add_edge(parent, VertexDescriptor::from_usize(child))?;
            }
        }
        Ok(graph)
    }

    pub fn solve(&self) -> Result<Vec<bool>, InputError> {
        let graph = self.build_graph()?;

        let roots = self.roots();
        debug!(roots = roots.len(), "traversing from every root");

        let mut dfs = Dfs::with_visitor((
            TimeStamps::<usize>::with_order(self.order()),
            CycleDetector::new(),
        ));
        dfs.run(roots, &graph);
        let (stamps, cycles) = dfs.into_visitor();
        if cycles.has_cycle() {
            warn!(
                back_edges = cycles.back_edges().len(),
                "parent links contain a cycle, answers follow the depth-first forest"
            );
        }

        let oracle = AncestorOracle::from_time_stamps(stamps);
        Ok(oracle.resolve_all(&self.queries))
    }
}

pub fn write_answers<W: Write>(mut out: W, answers: &[bool]) -> io::Result<()> {
    for &answer in answers {
        writeln!(out, "{}", if answer { 1 } else { 0 })?;
    }
    out.flush()
}
