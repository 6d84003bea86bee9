//! The weighted move model: 8 king-move neighbours with a fixed cost table
//! and the straight-line heuristic.

use grid_util::point::Point;

/// Cost of a horizontal or vertical step.
pub const ORTHOGONAL_COST: f64 = 1.0;
/// Cost of a diagonal step. Deliberately 1.5 rather than sqrt(2): the move
/// table is a fixed approximation and changing it changes which of several
/// near-equal routes wins.
pub const DIAGONAL_COST: f64 = 1.5;

/// The 8 geometric neighbours of `p` with their move costs, in a fixed
/// column-major order. The order matters: frontier insertion order is the
/// final tie-break during search, so it has to be the same on every run.
pub fn weighted_neighbors(p: &Point) -> [(Point, f64); 8] {
    [
        (Point::new(p.x - 1, p.y - 1), DIAGONAL_COST),
        (Point::new(p.x - 1, p.y), ORTHOGONAL_COST),
        (Point::new(p.x - 1, p.y + 1), DIAGONAL_COST),
        (Point::new(p.x, p.y - 1), ORTHOGONAL_COST),
        (Point::new(p.x, p.y + 1), ORTHOGONAL_COST),
        (Point::new(p.x + 1, p.y - 1), DIAGONAL_COST),
        (Point::new(p.x + 1, p.y), ORTHOGONAL_COST),
        (Point::new(p.x + 1, p.y + 1), DIAGONAL_COST),
    ]
}

/// Euclidean distance between two grid positions, used as the search
/// heuristic. Note this can slightly overestimate diagonal-heavy remainders
/// since a diagonal step costs 1.5 while contributing sqrt(2) of distance.
pub fn euclidean(a: &Point, b: &Point) -> f64 {
    f64::from(a.x - b.x).hypot(f64::from(a.y - b.y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn eight_neighbours_with_expected_costs() {
        let neighbours = weighted_neighbors(&Point::new(2, 3));
        assert_eq!(neighbours.len(), 8);
        let orthogonal = neighbours.iter().filter(|(_, c)| *c == ORTHOGONAL_COST);
        let diagonal = neighbours.iter().filter(|(_, c)| *c == DIAGONAL_COST);
        assert_eq!(orthogonal.count(), 4);
        assert_eq!(diagonal.count(), 4);
        for (p, _) in neighbours {
            assert!((p.x - 2).abs() <= 1 && (p.y - 3).abs() <= 1);
            assert_ne!(p, Point::new(2, 3));
        }
    }

    #[test]
    fn euclidean_matches_hypotenuse() {
        assert_eq!(euclidean(&Point::new(0, 0), &Point::new(3, 4)), 5.0);
        assert_eq!(euclidean(&Point::new(1, 1), &Point::new(1, 1)), 0.0);
    }
}
