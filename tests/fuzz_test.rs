/// Fuzzes the parse-search-mark pipeline on many random maps: whenever the
/// goal is reachable (checked by an independent flood fill) a path must be
/// found, and every found path must be contiguous, correctly costed and
/// rendered without disturbing the rest of the map.
use grid_util::point::Point;
use grid_waymark::{PathError, TileMap};
use rand::prelude::*;

fn random_map(n: usize, rng: &mut StdRng) -> String {
    let rows: Vec<String> = (0..n)
        .map(|y| {
            (0..n)
                .map(|x| {
                    if x == 0 && y == 0 {
                        'S'
                    } else if x == n - 1 && y == n - 1 {
                        'X'
                    } else if rng.gen_bool(0.4) {
                        '#'
                    } else {
                        '.'
                    }
                })
                .collect()
        })
        .collect();
    rows.join("\n")
}

/// Reachability oracle: an explicit-stack flood fill over the walkable set.
fn reachable(map: &TileMap) -> bool {
    let mut seen = vec![map.start()];
    let mut stack = vec![map.start()];
    while let Some(current) = stack.pop() {
        if current == map.goal() {
            return true;
        }
        for dx in -1..=1 {
            for dy in -1..=1 {
                let next = Point::new(current.x + dx, current.y + dy);
                if map.walkable(&next) && !seen.contains(&next) {
                    seen.push(next);
                    stack.push(next);
                }
            }
        }
    }
    false
}

fn step_cost(a: &Point, b: &Point) -> f64 {
    if a.x != b.x && a.y != b.y {
        1.5
    } else {
        1.0
    }
}

#[test]
fn fuzz() {
    const N: usize = 10;
    const N_MAPS: usize = 2000;
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..N_MAPS {
        let text = random_map(N, &mut rng);
        let map = TileMap::from_text(&text).unwrap();
        match map.find_path() {
            Ok(path) => {
                assert!(reachable(&map));
                assert_eq!(path.coords.first(), Some(&map.start()));
                assert_eq!(path.coords.last(), Some(&map.goal()));
                let mut total = 0.0;
                for pair in path.coords.windows(2) {
                    assert!((pair[0].x - pair[1].x).abs() <= 1);
                    assert!((pair[0].y - pair[1].y).abs() <= 1);
                    assert_ne!(pair[0], pair[1]);
                    assert!(map.walkable(&pair[1]));
                    total += step_cost(&pair[0], &pair[1]);
                }
                assert_eq!(total, path.cost);

                let marked = map.add_path().unwrap();
                for (input, output) in text.split('\n').zip(marked.split('\n')) {
                    assert_eq!(input.chars().count(), output.chars().count());
                }
            }
            Err(err) => {
                assert_eq!(err, PathError::NoPath);
                assert!(!reachable(&map));
            }
        }
    }
}
