//! Sparse Conway's Game of Life (B3/S23) on an unbounded integer lattice.
//!
//! Only live cells are stored. Each generation re-evaluates just the frontier: the cells
//! next to something that changed in the previous generation. Everything else is known
//! to keep its state.

use std::collections::HashSet;

use itertools::Itertools;

use cell::Cell;
use rule::{COUNT_CUTOFF, Fate};

pub mod cell;
pub mod rule;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Life {
    live: HashSet<Cell>,

    /// Cells that may change on the next step. Any cell outside it keeps its state.
    frontier: HashSet<Cell>,
}

impl Life {
    /// Starts a world from the given live cells. The first step checks every live cell
    /// and all of their neighbors.
    pub fn new<I>(cells: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        let live: HashSet<Cell> = cells.into_iter().collect();

        let frontier = live
            .iter()
            .flat_map(|&cell| std::iter::once(cell).chain(cell.neighbors()))
            .collect();

        Self { live, frontier }
    }

    /// Advances exactly one generation.
    pub fn step(&mut self) {
        let mut next_live = self.live.clone();
        let mut next_frontier = HashSet::new();

        for &cell in &self.frontier {
            let alive = self.live.contains(&cell);

            let fate = Fate::of(alive, self.live_neighbor_count(cell));
            if !fate.changes() {
                continue;
            }

            if fate.apply(alive) {
                next_live.insert(cell);
            } else {
                next_live.remove(&cell);
            }

            // A transition can destabilize every neighbor.
            next_frontier.extend(cell.neighbors());
        }

        self.live = next_live;
        self.frontier = next_frontier;
    }

    /// Advances `generations` generations. Zero is a no-op.
    ///
    /// Stops early once the world is settled, since the remaining steps can't change it.
    pub fn advance(&mut self, generations: u64) {
        for _ in 0..generations {
            if self.is_settled() {
                break;
            }
            self.step();
        }
    }

    pub fn live_cells(&self) -> &HashSet<Cell> {
        &self.live
    }

    /// Live cells ordered by x, then y.
    pub fn live_cells_sorted(&self) -> Vec<Cell> {
        self.live.iter().copied().sorted().collect()
    }

    pub fn frontier(&self) -> &HashSet<Cell> {
        &self.frontier
    }

    pub fn is_alive(&self, cell: Cell) -> bool {
        self.live.contains(&cell)
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// Whether nothing changed in the last step, so every further step is a no-op.
    pub fn is_settled(&self) -> bool {
        self.frontier.is_empty()
    }

    /// Live neighbors of `cell`, counted up to `COUNT_CUTOFF` since higher counts all
    /// classify the same way.
    fn live_neighbor_count(&self, cell: Cell) -> usize {
        cell.neighbors()
            .filter(|neighbor| self.live.contains(neighbor))
            .take(COUNT_CUTOFF)
            .count()
    }
}

impl FromIterator<Cell> for Life {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Cell>,
    {
        Self::new(iter)
    }
}
