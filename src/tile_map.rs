use crate::astar::astar;
use crate::error::PathError;
use crate::marker::mark_path;
use crate::neighbor::{euclidean, weighted_neighbors, DIAGONAL_COST, ORTHOGONAL_COST};
use core::fmt;
use fxhash::FxHashSet;
use grid_util::point::Point;
use log::info;
use ordered_float::OrderedFloat;
use petgraph::unionfind::UnionFind;

/// A shortest route from start to goal: the visited coordinates in order,
/// both endpoints included, and the accumulated cost under the fixed move
/// table (1.0 orthogonal, 1.5 diagonal).
#[derive(Clone, Debug, PartialEq)]
pub struct Path {
    pub coords: Vec<Point>,
    pub cost: f64,
}

impl Path {
    pub fn contains(&self, coord: &Point) -> bool {
        self.coords.contains(coord)
    }

    /// Re-derives the cost from the coordinate chain alone. Agrees with
    /// [cost](Self::cost) exactly: the search accumulates the same weights in
    /// the same order.
    pub fn edge_weight_sum(&self) -> f64 {
        self.coords
            .windows(2)
            .map(|pair| {
                if pair[0].x != pair[1].x && pair[0].y != pair[1].y {
                    DIAGONAL_COST
                } else {
                    ORTHOGONAL_COST
                }
            })
            .fold(0.0, |acc, w| acc + w)
    }
}

/// [TileMap] is the parsed form of an ASCII map: the original text, the set
/// of walkable coordinates and the start and goal positions, plus a
/// [UnionFind] over walkable tiles so unreachable goals are answered without
/// flood-filling the search frontier. Immutable once built.
///
/// Character semantics: `.` is walkable, `S` is the walkable start, `X` is
/// the walkable goal, anything else is an obstacle. Row index is y, column
/// index is x.
#[derive(Clone, Debug)]
pub struct TileMap {
    text: String,
    tiles: FxHashSet<Point>,
    start: Point,
    goal: Point,
    components: UnionFind<usize>,
    stride: usize,
}

impl TileMap {
    /// Parses map text. Fails eagerly with [PathError::MissingStart] or
    /// [PathError::MissingGoal] when a marker is absent, before any search
    /// has a chance to misreport this as an unreachable goal. If a marker
    /// appears more than once the last occurrence wins.
    pub fn from_text(text: &str) -> Result<TileMap, PathError> {
        let mut tiles: FxHashSet<Point> = FxHashSet::default();
        let mut start = None;
        let mut goal = None;
        let mut rows = 0;
        let mut stride = 0;
        for (y, line) in text.split('\n').enumerate() {
            rows = y + 1;
            let mut width = 0;
            for (x, c) in line.chars().enumerate() {
                width = x + 1;
                let coord = Point::new(x as i32, y as i32);
                match c {
                    '.' => {
                        tiles.insert(coord);
                    }
                    'S' => {
                        tiles.insert(coord);
                        start = Some(coord);
                    }
                    'X' => {
                        tiles.insert(coord);
                        goal = Some(coord);
                    }
                    _ => {}
                }
            }
            stride = stride.max(width);
        }
        let start = start.ok_or(PathError::MissingStart)?;
        let goal = goal.ok_or(PathError::MissingGoal)?;
        let components = generate_components(&tiles, rows, stride);
        Ok(TileMap {
            text: text.to_owned(),
            tiles,
            start,
            goal,
            components,
            stride,
        })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn start(&self) -> Point {
        self.start
    }

    pub fn goal(&self) -> Point {
        self.goal
    }

    pub fn walkable(&self, coord: &Point) -> bool {
        self.tiles.contains(coord)
    }

    fn tile_ix(&self, coord: &Point) -> usize {
        coord.y as usize * self.stride + coord.x as usize
    }

    /// Checks whether two walkable positions lie on different connected
    /// components. Positions outside the walkable set are unreachable by
    /// definition.
    pub fn unreachable(&self, a: &Point, b: &Point) -> bool {
        if self.tiles.contains(a) && self.tiles.contains(b) {
            !self.components.equiv(self.tile_ix(a), self.tile_ix(b))
        } else {
            true
        }
    }

    /// The walkable neighbours of `node` with their move costs.
    fn weighted_neighborhood(&self, node: &Point) -> Vec<(Point, OrderedFloat<f64>)> {
        weighted_neighbors(node)
            .into_iter()
            .filter(|(coord, _)| self.tiles.contains(coord))
            .map(|(coord, cost)| (coord, OrderedFloat(cost)))
            .collect()
    }

    /// Computes a cheapest path from start to goal. The heuristic is the
    /// straight-line distance to the goal.
    pub fn find_path(&self) -> Result<Path, PathError> {
        if self.unreachable(&self.start, &self.goal) {
            info!("{} is not reachable from {}", self.goal, self.start);
            return Err(PathError::NoPath);
        }
        info!("{} is reachable from {}, computing path", self.goal, self.start);
        let goal = self.goal;
        astar(
            &self.start,
            |node| self.weighted_neighborhood(node),
            |coord| OrderedFloat(euclidean(coord, &goal)),
            |coord| *coord == goal,
        )
        .map(|(coords, cost)| Path {
            coords,
            cost: cost.into_inner(),
        })
        .ok_or(PathError::NoPath)
    }

    /// Finds a cheapest path and renders it onto the original text, every
    /// path tile becoming `*`.
    pub fn add_path(&self) -> Result<String, PathError> {
        self.find_path().map(|path| mark_path(&self.text, &path))
    }
}

/// Links walkable tiles into a [UnionFind] of connected components. Each
/// tile is joined with its four forward neighbours, which covers all eight
/// king-move adjacencies over the whole pass.
fn generate_components(tiles: &FxHashSet<Point>, rows: usize, stride: usize) -> UnionFind<usize> {
    info!("Generating connected components");
    let mut components = UnionFind::new(rows * stride);
    let ix = |p: &Point| p.y as usize * stride + p.x as usize;
    for tile in tiles {
        let forward = [
            Point::new(tile.x + 1, tile.y),
            Point::new(tile.x, tile.y + 1),
            Point::new(tile.x + 1, tile.y + 1),
            Point::new(tile.x + 1, tile.y - 1),
        ];
        for neighbour in forward.iter().filter(|p| tiles.contains(*p)) {
            components.union(ix(tile), ix(neighbour));
        }
    }
    components
}

impl fmt::Display for TileMap {
    /// Renders the parsed view of the map: markers and walkable tiles as in
    /// the input, every obstacle normalised to `#`.
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for (y, line) in self.text.split('\n').enumerate() {
            for (x, _) in line.chars().enumerate() {
                let coord = Point::new(x as i32, y as i32);
                let c = if coord == self.start {
                    'S'
                } else if coord == self.goal {
                    'X'
                } else if self.tiles.contains(&coord) {
                    '.'
                } else {
                    '#'
                };
                write!(f, "{}", c)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_tiles_start_and_goal() {
        let map = TileMap::from_text("S.#\n.X.").unwrap();
        assert_eq!(map.start(), Point::new(0, 0));
        assert_eq!(map.goal(), Point::new(1, 1));
        assert!(map.walkable(&Point::new(1, 0)));
        assert!(!map.walkable(&Point::new(2, 0)));
        assert!(map.walkable(&Point::new(2, 1)));
        assert!(map.walkable(&map.start()));
        assert!(map.walkable(&map.goal()));
    }

    #[test]
    fn any_unknown_character_is_an_obstacle() {
        let map = TileMap::from_text("S~X\no?.").unwrap();
        assert!(!map.walkable(&Point::new(1, 0)));
        assert!(!map.walkable(&Point::new(0, 1)));
        assert!(!map.walkable(&Point::new(1, 1)));
        assert!(map.walkable(&Point::new(2, 1)));
    }

    #[test]
    fn missing_markers_fail_eagerly() {
        assert_eq!(
            TileMap::from_text("...\n.X.").unwrap_err(),
            PathError::MissingStart
        );
        assert_eq!(
            TileMap::from_text("S..\n...").unwrap_err(),
            PathError::MissingGoal
        );
        assert_eq!(TileMap::from_text("").unwrap_err(), PathError::MissingStart);
    }

    #[test]
    fn last_duplicate_marker_wins() {
        let map = TileMap::from_text("S.S\nX.X").unwrap();
        assert_eq!(map.start(), Point::new(2, 0));
        assert_eq!(map.goal(), Point::new(2, 1));
    }

    #[test]
    fn components_separate_walled_off_regions() {
        let map = TileMap::from_text("S#X\n.#.").unwrap();
        assert!(map.unreachable(&map.start(), &map.goal()));
        assert!(!map.unreachable(&map.start(), &Point::new(0, 1)));
    }

    #[test]
    fn components_join_across_diagonals() {
        // The only connection is the anti-diagonal step (1,1) -> (2,0).
        let map = TileMap::from_text("S#X\n#.#").unwrap();
        assert!(!map.unreachable(&map.start(), &map.goal()));
    }

    #[test]
    fn display_normalises_obstacles() {
        let map = TileMap::from_text("S~.\n.oX").unwrap();
        assert_eq!(format!("{}", map), "S#.\n.#X\n");
    }
}
