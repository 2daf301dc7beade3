use rand::Rng;
use tracing::debug;

use crate::cell::Pos;
use crate::error::Result;
use crate::grid::Grid;

/// Uniform choice among `n` alternatives; must return a value in `[0, n)`.
pub trait RandomChoice {
    fn pick(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomChoice for R {
    fn pick(&mut self, n: usize) -> usize {
        self.gen_range(0..n)
    }
}

/// Replays a fixed sequence of choices, cycling when it runs out.
#[derive(Debug, Clone)]
pub struct ScriptedChoice {
    script: Vec<usize>,
    next: usize,
}

impl ScriptedChoice {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, next: 0 }
    }

    /// How many choices have been requested so far.
    pub fn calls(&self) -> usize {
        self.next
    }
}

impl RandomChoice for ScriptedChoice {
    fn pick(&mut self, n: usize) -> usize {
        let value = if self.script.is_empty() {
            0
        } else {
            self.script[self.next % self.script.len()]
        };
        self.next += 1;
        value % n
    }
}

/// Builds a fresh `width` x `height` perfect maze.
pub fn generate<C: RandomChoice + ?Sized>(
    width: usize,
    height: usize,
    choice: &mut C,
) -> Result<Grid> {
    let mut grid = Grid::new(width, height)?;
    carve(&mut grid, choice)?;
    debug!(width, height, "maze generated");
    Ok(grid)
}

/// Randomized iterative backtracking from the origin.
///
/// A popped cell is pushed back whenever it still has an unvisited
/// neighbor, so the stack unwinds to the latest cell with work left.
/// Stack depth is bounded by the cell count, not by the call stack.
pub fn carve<C: RandomChoice + ?Sized>(grid: &mut Grid, choice: &mut C) -> Result<()> {
    let origin = grid.origin();
    let mut stack: Vec<Pos> = Vec::with_capacity(grid.width() * grid.height());
    grid.mark_visited(origin);
    stack.push(origin);

    while let Some(current) = stack.pop() {
        let unvisited: Vec<Pos> = grid
            .neighbors_of(current)
            .into_iter()
            .map(|(_, pos)| pos)
            .filter(|pos| !grid[*pos].visited())
            .collect();

        if unvisited.is_empty() {
            continue;
        }

        stack.push(current);
        let next = unvisited[choice.pick(unvisited.len()) % unvisited.len()];
        grid.open_passage(current, next)?;
        grid.mark_visited(next);
        stack.push(next);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Dir;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn single_cell_keeps_all_walls() {
        let mut choice = ScriptedChoice::new(vec![]);
        let grid = generate(1, 1, &mut choice).unwrap();
        let cell = &grid[Pos::ORIGIN];
        assert_eq!(cell.walls().open_count(), 0);
        assert!(cell.visited());
        assert_eq!(choice.calls(), 0);
    }

    #[test]
    fn always_first_choice_walks_the_canonical_order() {
        // Up is never available from row 0, so index 0 means Right until the
        // row ends, then Down, then Left back along the next row.
        let mut choice = ScriptedChoice::new(vec![0]);
        let grid = generate(3, 2, &mut choice).unwrap();

        assert!(grid.is_open(Pos::new(0, 0), Dir::Right));
        assert!(grid.is_open(Pos::new(1, 0), Dir::Right));
        assert!(grid.is_open(Pos::new(2, 0), Dir::Down));
        assert!(grid.is_open(Pos::new(2, 1), Dir::Left));
        assert!(grid.is_open(Pos::new(1, 1), Dir::Left));
        assert!(!grid.is_open(Pos::new(0, 0), Dir::Down));
        assert!(!grid.is_open(Pos::new(1, 0), Dir::Down));
        assert_eq!(choice.calls(), 5);
        assert!(grid.is_perfect());
    }

    #[test]
    fn every_cell_is_visited() {
        let mut rng = StdRng::seed_from_u64(7);
        let grid = generate(9, 5, &mut rng).unwrap();
        assert!(grid.cells().all(|cell| cell.visited()));
        assert!(grid.is_perfect());
        assert!(grid.walls_consistent());
    }

    #[test]
    fn one_pick_per_removed_wall() {
        let mut choice = ScriptedChoice::new(vec![1, 0, 2, 1, 3]);
        let grid = generate(6, 4, &mut choice).unwrap();
        assert_eq!(choice.calls(), 6 * 4 - 1);
        assert_eq!(grid.open_passage_count(), 6 * 4 - 1);
    }

    #[test]
    fn same_script_same_maze() {
        let script = vec![2, 0, 1, 1, 0, 3, 2];
        let a = generate(8, 8, &mut ScriptedChoice::new(script.clone())).unwrap();
        let b = generate(8, 8, &mut ScriptedChoice::new(script)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_dimensions_do_no_work() {
        let mut choice = ScriptedChoice::new(vec![0]);
        assert!(generate(0, 3, &mut choice).is_err());
        assert_eq!(choice.calls(), 0);
    }
}
