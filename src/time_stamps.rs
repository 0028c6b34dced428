use num_traits::{One, Zero};

use crate::graph::{Graph, VertexDescriptor};
use crate::visitor::{Event, Visitor};

/// Records discovery and finish times of a depth-first search.
///
/// A single clock starting at zero advances on every discovery and every
/// finish, so a full traversal of `n` vertices hands out the ticks
/// `0..2n`, and the intervals `[time_in, time_out]` of any two vertices are
/// either disjoint or nested.
///
/// The tick type defaults to `usize`; narrower unsigned types work as long
/// as they can count to `2n - 1`. Running a search again with the same
/// visitor starts the clock over.
#[derive(Clone, Debug)]
pub struct TimeStamps<T = usize> {
    timer: T,
    time_in: Vec<T>,
    time_out: Vec<T>,
}

impl<T> TimeStamps<T>
where
    T: Copy + Zero + One,
{
    pub fn new() -> Self {
        Self::with_order(0)
    }

    pub fn with_order(order: usize) -> Self {
        Self {
            timer: T::zero(),
            time_in: vec![T::zero(); order],
            time_out: vec![T::zero(); order],
        }
    }

    pub fn time_in(&self, v: VertexDescriptor) -> T {
        self.time_in[usize::from(v)]
    }

    pub fn time_out(&self, v: VertexDescriptor) -> T {
        self.time_out[usize::from(v)]
    }

    pub fn interval(&self, v: VertexDescriptor) -> (T, T) {
        (self.time_in(v), self.time_out(v))
    }

    /// Number of ticks handed out so far.
    pub fn elapsed(&self) -> T {
        self.timer
    }

    fn tick(&mut self) -> T {
        let now = self.timer;
        self.timer = now + T::one();
        now
    }
}

impl<T> Default for TimeStamps<T>
where
    T: Copy + Zero + One,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<G, T> Visitor<G, Event> for TimeStamps<T>
where
    G: Graph,
    T: Copy + Zero + One,
{
    fn visit(&mut self, e: &Event, _g: &G) {
        match *e {
            // Every vertex is initialized before the first discovery, so the
            // clock restarts with each run.
            Event::InitializeVertex(v) => {
                let i = usize::from(v);
                if i >= self.time_in.len() {
                    self.time_in.resize(i + 1, T::zero());
                    self.time_out.resize(i + 1, T::zero());
                }
                self.time_in[i] = T::zero();
                self.time_out[i] = T::zero();
                self.timer = T::zero();
            }
            Event::DiscoverVertex(v) => {
                self.time_in[usize::from(v)] = self.tick();
            }
            Event::FinishVertex(v) => {
                self.time_out[usize::from(v)] = self.tick();
            }
            _ => (),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TimeStamps;
    use crate::adjacency_list::AdjacencyList;
    use crate::depth_first_search::Dfs;
    use crate::graph::{FromUsize, VertexDescriptor};

    fn v(i: usize) -> VertexDescriptor {
        VertexDescriptor::from_usize(i)
    }

    fn small_tree() -> AdjacencyList {
        //     0
        //    / \
        //   1   2
        //       |
        //       3
        let mut g = AdjacencyList::with_order(4);
        g.add_edge(v(0), v(1)).unwrap();
        g.add_edge(v(0), v(2)).unwrap();
        g.add_edge(v(2), v(3)).unwrap();
        g
    }

    #[test]
    fn ticks_follow_discover_and_finish() {
        let g = small_tree();
        let mut dfs = Dfs::with_visitor(TimeStamps::<usize>::with_order(4));
        dfs.run(Some(v(0)), &g);

        let ts = dfs.into_visitor();
        assert_eq!(ts.interval(v(0)), (0, 7));
        assert_eq!(ts.interval(v(1)), (1, 2));
        assert_eq!(ts.interval(v(2)), (3, 6));
        assert_eq!(ts.interval(v(3)), (4, 5));
        assert_eq!(ts.elapsed(), 8);
    }

    #[test]
    fn grows_on_initialize() {
        let g = small_tree();
        let mut dfs = Dfs::with_visitor(TimeStamps::<u32>::new());
        dfs.run(Some(v(2)), &g);

        let ts = dfs.into_visitor();
        assert_eq!(ts.interval(v(2)), (0, 3));
        assert_eq!(ts.interval(v(3)), (1, 2));
        assert_eq!(ts.interval(v(0)), (4, 7));
        assert_eq!(ts.interval(v(1)), (5, 6));
    }

    #[test]
    fn rerun_restarts_the_clock() {
        let g = small_tree();
        let mut dfs = Dfs::with_visitor(TimeStamps::<usize>::new());

        dfs.run(Some(v(0)), &g);
        let first = dfs.visitor_ref().clone();
        dfs.run(Some(v(0)), &g);
        let second = dfs.visitor_ref();

        assert_eq!(second.elapsed(), 8);
        for i in 0..4 {
            assert_eq!(first.interval(v(i)), second.interval(v(i)));
            assert!(second.time_out(v(i)) <= 7);
        }

        dfs.run(Some(v(2)), &g);
        assert_eq!(dfs.visitor_ref().interval(v(2)), (0, 3));
        assert_eq!(dfs.visitor_ref().elapsed(), 8);
    }

    #[test]
    fn isolated_vertices_get_adjacent_ticks() {
        let g = AdjacencyList::with_order(3);
        let mut dfs = Dfs::with_visitor(TimeStamps::<u64>::default());
        dfs.run(None, &g);

        let ts = dfs.into_visitor();
        for i in 0..3 {
            let (tin, tout) = ts.interval(v(i));
            assert_eq!(tin, 2 * i as u64);
            assert_eq!(tout, tin + 1);
        }
    }
}
