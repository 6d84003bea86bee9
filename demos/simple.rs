// In this example a path is found and marked on a map with shape
// S....
// .###.
// .#...
// .#.#.
// ...#X
// S marks the start
// X marks the goal
// # is an obstacle
fn main() {
    let map_text = "S....\n.###.\n.#...\n.#.#.\n...#X";
    println!("Input map:\n{}\n", map_text);
    match grid_waymark::add_path(map_text) {
        Ok(marked) => println!("A path has been found:\n{}", marked),
        Err(err) => println!("No marked map: {}", err),
    }
}
