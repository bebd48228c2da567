//! Graph searches over lazily generated edges
//!
//! None of these searches need the graph up front. Callers pass a closure
//! producing the neighbours of a vertex; it is invoked once per vertex, when
//! that vertex is visited. Each search is an [`Iterator`] of [`Visit`]s in
//! the order vertices are settled, so callers can stop at a goal, take the
//! first `n` vertices, or drain the whole reachable set.
//!
//! # Example
//!
//! ```rust
//! use puzzle_solutions::utils::graph::{Bfs, dijkstra};
//!
//! // Unweighted: numbers reachable from 1 by doubling or adding three
//! let depth_of_10 = Bfs::new([1u32], |&n| [n * 2, n + 3].into_iter().filter(|&m| m <= 20))
//!     .find(|visit| visit.vertex == 10)
//!     .map(|visit| visit.cost);
//! assert_eq!(depth_of_10, Some(3)); // 1 -> 2 -> 5 -> 10
//!
//! // Weighted: walking costs 1 per unit, teleporting to 0 costs 5
//! let mut search = dijkstra([12i64], |&n| vec![(n - 1, 1u32), (0, 5)]);
//! let zero = search.find(|visit| visit.vertex == 0).unwrap();
//! assert_eq!(zero.cost, 5);
//! assert_eq!(search.path_to(&0), Some(vec![12, 0]));
//! ```

use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::ops::Add;

/// Edge weight / path length usable by the weighted searches
pub trait Cost: Copy + Ord + Add<Output = Self> + Default {}

impl<T: Copy + Ord + Add<Output = T> + Default> Cost for T {}

/// A settled vertex and the length of the best path found to it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Visit<V, C> {
    pub vertex: V,
    pub cost: C,
}

fn reconstruct<V: Clone + Eq + Hash>(parents: &HashMap<V, V>, target: &V) -> Vec<V> {
    let mut path = vec![target.clone()];
    while let Some(parent) = parents.get(path.last().unwrap_or(target)) {
        path.push(parent.clone());
    }
    path.reverse();
    path
}

/// Breadth-first search from one or more start vertices
///
/// Yields every reachable vertex exactly once, in non-decreasing depth.
/// Start vertices have depth 0.
pub struct Bfs<V, F> {
    frontier: VecDeque<(V, usize)>,
    seen: HashSet<V>,
    parents: HashMap<V, V>,
    neighbors: F,
}

impl<V, F, I> Bfs<V, F>
where
    V: Clone + Eq + Hash,
    F: FnMut(&V) -> I,
    I: IntoIterator<Item = V>,
{
    pub fn new(starts: impl IntoIterator<Item = V>, neighbors: F) -> Self {
        let mut seen = HashSet::new();
        let frontier = starts
            .into_iter()
            .filter(|s| seen.insert(s.clone()))
            .map(|s| (s, 0))
            .collect();
        Self {
            frontier,
            seen,
            parents: HashMap::new(),
            neighbors,
        }
    }

    /// Path from a start to `target`, if `target` has been discovered
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        self.seen
            .contains(target)
            .then(|| reconstruct(&self.parents, target))
    }
}

impl<V, F, I> Iterator for Bfs<V, F>
where
    V: Clone + Eq + Hash,
    F: FnMut(&V) -> I,
    I: IntoIterator<Item = V>,
{
    type Item = Visit<V, usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let (vertex, depth) = self.frontier.pop_front()?;
        for next in (self.neighbors)(&vertex) {
            if self.seen.insert(next.clone()) {
                self.parents.insert(next.clone(), vertex.clone());
                self.frontier.push_back((next, depth + 1));
            }
        }
        Some(Visit {
            vertex,
            cost: depth,
        })
    }
}

struct HeapEntry<V, C> {
    priority: C,
    cost: C,
    vertex: V,
}

impl<V, C: Ord> Ord for HeapEntry<V, C> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Min-heap on priority; among equal priorities prefer the longer path,
        // which is closer to the goal under A*.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.cost.cmp(&other.cost))
    }
}

impl<V, C: Ord> PartialOrd for HeapEntry<V, C> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<V, C: Ord> PartialEq for HeapEntry<V, C> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<V, C: Ord> Eq for HeapEntry<V, C> {}

/// A* search; yields vertices ordered by `cost + heuristic(vertex)`
///
/// Edge costs must be non-negative. With a consistent heuristic each vertex
/// is yielded once with its optimal cost; a heuristic that is merely
/// admissible still gives the optimal cost for the first goal yielded.
pub struct AStar<V, C, F, H> {
    open: BinaryHeap<HeapEntry<V, C>>,
    best: HashMap<V, C>,
    closed: HashSet<V>,
    parents: HashMap<V, V>,
    edges: F,
    heuristic: H,
}

/// Dijkstra is A* with a zero heuristic
pub type Dijkstra<V, C, F> = AStar<V, C, F, fn(&V) -> C>;

fn zero<V, C: Default>(_: &V) -> C {
    C::default()
}

/// Dijkstra's algorithm from one or more start vertices
pub fn dijkstra<V, C, F, I>(starts: impl IntoIterator<Item = V>, edges: F) -> Dijkstra<V, C, F>
where
    V: Clone + Eq + Hash,
    C: Cost,
    F: FnMut(&V) -> I,
    I: IntoIterator<Item = (V, C)>,
{
    AStar::new(starts, edges, zero::<V, C> as fn(&V) -> C)
}

impl<V, C, F, H, I> AStar<V, C, F, H>
where
    V: Clone + Eq + Hash,
    C: Cost,
    F: FnMut(&V) -> I,
    I: IntoIterator<Item = (V, C)>,
    H: FnMut(&V) -> C,
{
    pub fn new(starts: impl IntoIterator<Item = V>, edges: F, mut heuristic: H) -> Self {
        let mut open = BinaryHeap::new();
        let mut best = HashMap::new();
        for start in starts {
            if best.insert(start.clone(), C::default()).is_none() {
                open.push(HeapEntry {
                    priority: heuristic(&start),
                    cost: C::default(),
                    vertex: start,
                });
            }
        }
        Self {
            open,
            best,
            closed: HashSet::new(),
            parents: HashMap::new(),
            edges,
            heuristic,
        }
    }

    /// Best path from a start to `target`, if `target` has been yielded
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        self.closed
            .contains(target)
            .then(|| reconstruct(&self.parents, target))
    }
}

impl<V, C, F, H, I> Iterator for AStar<V, C, F, H>
where
    V: Clone + Eq + Hash,
    C: Cost,
    F: FnMut(&V) -> I,
    I: IntoIterator<Item = (V, C)>,
    H: FnMut(&V) -> C,
{
    type Item = Visit<V, C>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let HeapEntry { cost, vertex, .. } = self.open.pop()?;
            if self.closed.contains(&vertex) {
                continue;
            }
            self.closed.insert(vertex.clone());

            for (next, weight) in (self.edges)(&vertex) {
                if self.closed.contains(&next) {
                    continue;
                }
                let next_cost = cost + weight;
                let improved = match self.best.entry(next.clone()) {
                    Entry::Occupied(mut known) if next_cost < *known.get() => {
                        known.insert(next_cost);
                        true
                    }
                    Entry::Occupied(_) => false,
                    Entry::Vacant(slot) => {
                        slot.insert(next_cost);
                        true
                    }
                };
                if improved {
                    self.parents.insert(next.clone(), vertex.clone());
                    let priority = next_cost + (self.heuristic)(&next);
                    self.open.push(HeapEntry {
                        priority,
                        cost: next_cost,
                        vertex: next,
                    });
                }
            }

            return Some(Visit { vertex, cost });
        }
    }
}

/// Depth of the first vertex satisfying `is_goal`
pub fn bfs_distance<V, F, I>(start: V, neighbors: F, mut is_goal: impl FnMut(&V) -> bool) -> Option<usize>
where
    V: Clone + Eq + Hash,
    F: FnMut(&V) -> I,
    I: IntoIterator<Item = V>,
{
    Bfs::new([start], neighbors)
        .find(|visit| is_goal(&visit.vertex))
        .map(|visit| visit.cost)
}

/// Cheapest cost from any start to a vertex satisfying `is_goal`
pub fn dijkstra_distance<V, C, F, I>(
    starts: impl IntoIterator<Item = V>,
    edges: F,
    mut is_goal: impl FnMut(&V) -> bool,
) -> Option<C>
where
    V: Clone + Eq + Hash,
    C: Cost,
    F: FnMut(&V) -> I,
    I: IntoIterator<Item = (V, C)>,
{
    dijkstra(starts, edges)
        .find(|visit| is_goal(&visit.vertex))
        .map(|visit| visit.cost)
}

/// Cheapest cost from `start` to a goal, guided by an admissible heuristic
pub fn astar_distance<V, C, F, H, I>(
    start: V,
    edges: F,
    heuristic: H,
    mut is_goal: impl FnMut(&V) -> bool,
) -> Option<C>
where
    V: Clone + Eq + Hash,
    C: Cost,
    F: FnMut(&V) -> I,
    I: IntoIterator<Item = (V, C)>,
    H: FnMut(&V) -> C,
{
    AStar::new([start], edges, heuristic)
        .find(|visit| is_goal(&visit.vertex))
        .map(|visit| visit.cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::coord::Coord;
    use crate::utils::grid::Grid;

    const MAZE: &str = "\
S.#.....
.##.###.
....#...
.####.#.
......#E";

    fn open_neighbors(grid: &Grid<char>) -> impl FnMut(&Coord) -> Vec<Coord> + '_ {
        move |c: &Coord| grid.neighbors4(*c).filter(|n| grid[*n] != '#').collect()
    }

    #[test]
    fn test_bfs_depths_are_monotonic_and_unique() {
        let grid = Grid::parse_chars(MAZE).unwrap();
        let start = grid.find(|&c| c == 'S').unwrap();
        let visits: Vec<_> = Bfs::new([start], open_neighbors(&grid)).collect();

        assert!(visits.windows(2).all(|w| w[0].cost <= w[1].cost));
        let unique: HashSet<_> = visits.iter().map(|v| v.vertex).collect();
        assert_eq!(unique.len(), visits.len());
        assert_eq!(visits.len(), grid.count(|&c| c != '#'));
    }

    #[test]
    fn test_bfs_path_reconstruction() {
        let grid = Grid::parse_chars(MAZE).unwrap();
        let start = grid.find(|&c| c == 'S').unwrap();
        let end = grid.find(|&c| c == 'E').unwrap();
        let mut bfs = Bfs::new([start], open_neighbors(&grid));
        let hit = bfs.find(|v| v.vertex == end).unwrap();

        let path = bfs.path_to(&end).unwrap();
        assert_eq!(path.len(), hit.cost + 1);
        assert_eq!(path.first(), Some(&start));
        assert_eq!(path.last(), Some(&end));
        assert!(path.windows(2).all(|w| w[0].manhattan(w[1]) == 1));
        assert_eq!(bfs.path_to(&Coord::new(100, 100)), None);
    }

    #[test]
    fn test_multi_source_bfs() {
        let depths: HashMap<i32, usize> = Bfs::new([0, 10], |&n: &i32| {
            [n - 1, n + 1].into_iter().filter(|m| (0..=10).contains(m))
        })
        .map(|v| (v.vertex, v.cost))
        .collect();
        assert_eq!(depths[&5], 5);
        assert_eq!(depths[&8], 2);
        assert_eq!(depths[&0], 0);
    }

    #[test]
    fn test_dijkstra_prefers_cheap_detour() {
        // a -10-> d, a -1-> b -1-> c -1-> d
        let edges = |v: &char| -> Vec<(char, u32)> {
            match v {
                'a' => vec![('d', 10), ('b', 1)],
                'b' => vec![('c', 1)],
                'c' => vec![('d', 1)],
                _ => vec![],
            }
        };
        let mut search = dijkstra(['a'], edges);
        let order: Vec<(char, u32)> = search.by_ref().map(|v| (v.vertex, v.cost)).collect();
        assert_eq!(order, vec![('a', 0), ('b', 1), ('c', 2), ('d', 3)]);
        assert_eq!(search.path_to(&'d'), Some(vec!['a', 'b', 'c', 'd']));
    }

    #[test]
    fn test_astar_matches_dijkstra() {
        let grid = Grid::parse_with("\
131
919
111", |c| Ok(c.to_digit(10).unwrap_or(0))).unwrap();
        let goal = Coord::new(2, 2);
        let edges = |c: &Coord| -> Vec<(Coord, u32)> {
            grid.neighbors4(*c).map(|n| (n, grid[n])).collect()
        };

        let plain = dijkstra_distance([Coord::ORIGIN], edges, |c| *c == goal);
        let guided = astar_distance(
            Coord::ORIGIN,
            edges,
            |c: &Coord| c.manhattan(goal) as u32,
            |c| *c == goal,
        );
        assert_eq!(plain, Some(6));
        assert_eq!(guided, plain);
    }

    #[test]
    fn test_unreachable_goal() {
        assert_eq!(bfs_distance(0u8, |_| Vec::new(), |&n| n == 1), None);
        assert_eq!(
            dijkstra_distance([0u8], |_| Vec::<(u8, u32)>::new(), |&n| n == 1),
            None
        );
    }
}
