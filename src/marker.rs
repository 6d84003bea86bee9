use crate::tile_map::Path;
use fxhash::FxHashSet;
use grid_util::point::Point;
use itertools::Itertools;

/// Overlays `path` onto `text`: every character on a path coordinate becomes
/// `*` (start and goal markers included), everything else is carried over
/// untouched. Row and column structure is preserved exactly.
pub fn mark_path(text: &str, path: &Path) -> String {
    let on_path: FxHashSet<Point> = path.coords.iter().copied().collect();
    text.split('\n')
        .enumerate()
        .map(|(y, line)| {
            line.chars()
                .enumerate()
                .map(|(x, c)| {
                    if on_path.contains(&Point::new(x as i32, y as i32)) {
                        '*'
                    } else {
                        c
                    }
                })
                .collect::<String>()
        })
        .join("\n")
}
