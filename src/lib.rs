//! # grid_waymark
//!
//! Weighted [A*](https://en.wikipedia.org/wiki/A*_search_algorithm)
//! pathfinding over ASCII grid maps. A map is multi-line text where `.` is
//! walkable, `S` is the start, `X` is the goal and any other character is an
//! obstacle. Moves go to the 8 surrounding tiles at cost 1.0 (orthogonal) or
//! 1.5 (diagonal); the heuristic is the straight-line distance to the goal.
//! Pre-computes [connected components](https://en.wikipedia.org/wiki/Component_(graph_theory))
//! over the walkable tiles to avoid flood-filling behaviour if no path
//! exists.
//!
//! The single end-to-end operation is [add_path]: parse the map, search,
//! and return the same text with every path tile replaced by `*`.
//!
//! ```
//! let marked = grid_waymark::add_path("S..\n.X.\n...").unwrap();
//! assert_eq!(marked, "*..\n.*.\n...");
//! ```
mod astar;
pub mod error;
pub mod marker;
pub mod neighbor;
pub mod tile_map;

pub use error::PathError;
pub use tile_map::{Path, TileMap};

/// Parses `map_text`, finds a cheapest route from `S` to `X` and returns the
/// text with the route overlaid as `*` characters. Either the fully marked
/// text is returned or an error; the input structure (row count, per-row
/// column count) is always preserved in the output.
pub fn add_path(map_text: &str) -> Result<String, PathError> {
    TileMap::from_text(map_text)?.add_path()
}
