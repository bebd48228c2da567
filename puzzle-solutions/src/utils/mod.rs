//! Shared building blocks for the puzzle solutions

pub mod combinatorics;
pub mod coord;
pub mod dp_cache;
pub mod graph;
pub mod grid;
pub mod parse;
pub mod union_find;

pub use coord::{Coord, Direction};
pub use grid::Grid;
pub use union_find::UnionFind;
