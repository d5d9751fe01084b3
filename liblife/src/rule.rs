//! The B3/S23 transition rule, expressed as the change (if any) a cell undergoes.

/// Live-neighbor count at which a dead cell is born.
pub const BIRTH_COUNT: usize = 3;

/// Fewest live neighbors a live cell needs to survive.
pub const SURVIVE_MIN: usize = 2;

/// Most live neighbors a live cell can have and still survive.
pub const SURVIVE_MAX: usize = 3;

/// Counting past this many live neighbors can't change the outcome.
pub const COUNT_CUTOFF: usize = SURVIVE_MAX + 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fate {
    /// Dead cell becomes alive.
    Born,

    /// Live cell becomes dead.
    Dies,

    /// The cell keeps its current state, whichever it is.
    Unchanged,
}

impl Fate {
    pub fn of(alive: bool, live_neighbors: usize) -> Self {
        match live_neighbors {
            BIRTH_COUNT if !alive => Fate::Born,
            SURVIVE_MIN..=SURVIVE_MAX => Fate::Unchanged,
            _ if alive => Fate::Dies,
            _ => Fate::Unchanged,
        }
    }

    pub fn changes(self) -> bool {
        self != Fate::Unchanged
    }

    /// State of a cell after applying this fate to a cell that was `alive`.
    pub fn apply(self, alive: bool) -> bool {
        match self {
            Fate::Born => true,
            Fate::Dies => false,
            Fate::Unchanged => alive,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_b3_s23() {
        for count in 0..=8 {
            for alive in [false, true] {
                let expected_alive = if alive {
                    count == 2 || count == 3
                } else {
                    count == 3
                };

                let fate = Fate::of(alive, count);
                assert_eq!(
                    fate.apply(alive),
                    expected_alive,
                    "alive={alive} count={count}"
                );
                assert_eq!(fate.changes(), expected_alive != alive);
            }
        }
    }

    #[test]
    fn two_neighbors_never_changes_anything() {
        assert_eq!(Fate::of(true, 2), Fate::Unchanged);
        assert_eq!(Fate::of(false, 2), Fate::Unchanged);
    }

    #[test]
    fn cutoff_count_already_decides() {
        assert_eq!(Fate::of(true, COUNT_CUTOFF), Fate::Dies);
        assert_eq!(Fate::of(false, COUNT_CUTOFF), Fate::Unchanged);
    }
}
