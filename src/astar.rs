use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use num_traits::Zero;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

use log::warn;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

use std::hash::Hash;

/// A discovered node waiting in the frontier. The arena index refers to the
/// parent map entry holding the node itself; entries are never removed, so
/// indices stay stable for the whole search.
struct FrontierEntry<K> {
    estimated: K,
    cost: K,
    heuristic: K,
    seq: u64,
    index: usize,
}

impl<K: PartialEq> Eq for FrontierEntry<K> {}

impl<K: PartialEq> PartialEq for FrontierEntry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated.eq(&other.estimated)
            && self.cost.eq(&other.cost)
            && self.heuristic.eq(&other.heuristic)
            && self.seq == other.seq
    }
}

impl<K: Ord> PartialOrd for FrontierEntry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for FrontierEntry<K> {
    /// Extraction order is fully specified so searches are reproducible:
    /// smallest estimated total first, ties broken by smallest cost-so-far,
    /// then smallest heuristic, then earliest insertion into the frontier.
    /// Comparisons are reversed since [BinaryHeap] is a max-heap.
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .estimated
            .cmp(&self.estimated)
            .then_with(|| other.cost.cmp(&self.cost))
            .then_with(|| other.heuristic.cmp(&self.heuristic))
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Walks parent indices from `goal_ix` back through the arena and returns the
/// chain in start-to-goal order. Iterative, so deep paths cannot overflow the
/// stack.
fn reconstruct<N, V, F>(arena: &FxIndexMap<N, V>, mut parent: F, goal_ix: usize) -> Vec<N>
where
    N: Eq + Hash + Clone,
    F: FnMut(&V) -> usize,
{
    let mut path: Vec<N> = itertools::unfold(goal_ix, |i| {
        arena.get_index(*i).map(|(node, value)| {
            *i = parent(value);
            node.clone()
        })
    })
    .collect();
    path.reverse();
    path
}

/// Best-first search over nodes produced by `successors`, returning the
/// cheapest chain from `start` to the first node satisfying `success`
/// together with its accumulated cost, or [None] if the frontier runs dry.
///
/// The open set is split into two structures as they serve two concerns:
/// membership and cost lookup live in a coordinate-keyed [IndexMap] (also
/// acting as the parent arena), extraction order lives in a [BinaryHeap] of
/// [FrontierEntry] values. Superseded heap entries are not removed eagerly;
/// they are recognised on pop by their cost exceeding the best recorded one
/// and skipped.
pub fn astar<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let start_h = heuristic(start);
    let mut frontier = BinaryHeap::new();
    let mut seq: u64 = 0;
    frontier.push(FrontierEntry {
        estimated: start_h,
        cost: Zero::zero(),
        heuristic: start_h,
        seq,
        index: 0,
    });
    let mut arena: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    arena.insert(start.clone(), (usize::MAX, Zero::zero()));
    while let Some(FrontierEntry { cost, index, .. }) = frontier.pop() {
        let successors = {
            let (node, &(_, best_cost)) = arena.get_index(index).unwrap();
            if success(node) {
                let path = reconstruct(&arena, |&(p, _)| p, index);
                return Some((path, best_cost));
            }
            // A node is pushed anew each time a cheaper way to it is found,
            // so stale entries may remain in the heap. Only the entry
            // matching the best recorded cost expands; the rest are skipped.
            if cost > best_cost {
                continue;
            }
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h; // heuristic(&successor)
            let n; // arena index of successor
            match arena.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    // Keep the incumbent unless the candidate is strictly
                    // cheaper.
                    if e.get().1 > new_cost {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            seq += 1;
            frontier.push(FrontierEntry {
                estimated: new_cost + h,
                cost: new_cost,
                heuristic: h,
                seq,
                index: n,
            });
        }
    }
    warn!("Frontier exhausted before reaching the goal");
    None
}
