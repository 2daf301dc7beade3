use crate::cell::{Dir, Pos};
use crate::grid::Grid;

/// The token the player steers from the origin to the goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Player {
    pos: Pos,
}

impl Player {
    pub fn new() -> Self {
        Self { pos: Pos::ORIGIN }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn reset(&mut self) {
        self.pos = Pos::ORIGIN;
    }

    /// Steps one cell unless a wall blocks `dir`. Returns whether it moved.
    ///
    /// The rim of a generated grid is always walled, so the wall check is
    /// also the bounds check.
    pub fn try_move(&mut self, grid: &Grid, dir: Dir) -> bool {
        if !grid.is_open(self.pos, dir) {
            return false;
        }
        match grid.neighbor(self.pos, dir) {
            Some(next) => {
                self.pos = next;
                true
            }
            None => false,
        }
    }

    pub fn has_won(&self, grid: &Grid) -> bool {
        self.pos == grid.goal()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corridor() -> Grid {
        // (0,0) -> (1,0) -> (1,1), everything else walled.
        let mut grid = Grid::new(2, 2).unwrap();
        grid.open_passage(Pos::new(0, 0), Pos::new(1, 0)).unwrap();
        grid.open_passage(Pos::new(1, 0), Pos::new(1, 1)).unwrap();
        grid
    }

    #[test]
    fn wall_blocks_movement_silently() {
        let grid = corridor();
        let mut player = Player::new();
        assert!(grid[Pos::ORIGIN].has_wall(Dir::Down));
        assert!(!player.try_move(&grid, Dir::Down));
        assert!(!player.try_move(&grid, Dir::Up));
        assert!(!player.try_move(&grid, Dir::Left));
        assert_eq!(player.pos(), Pos::ORIGIN);
    }

    #[test]
    fn right_wall_blocks_right() {
        let grid = Grid::new(3, 3).unwrap();
        let mut player = Player::new();
        assert!(grid[Pos::ORIGIN].has_wall(Dir::Right));
        assert!(!player.try_move(&grid, Dir::Right));
        assert_eq!(player.pos(), Pos::ORIGIN);
    }

    #[test]
    fn follows_open_passages_to_the_goal() {
        let grid = corridor();
        let mut player = Player::new();
        assert!(!player.has_won(&grid));
        assert!(player.try_move(&grid, Dir::Right));
        assert_eq!(player.pos(), Pos::new(1, 0));
        assert!(player.try_move(&grid, Dir::Down));
        assert!(player.has_won(&grid));
    }

    #[test]
    fn reset_is_idempotent() {
        let grid = corridor();
        let mut player = Player::new();
        player.try_move(&grid, Dir::Right);
        player.reset();
        player.reset();
        assert_eq!(player, Player::new());
    }

    #[test]
    fn single_cell_starts_on_the_goal() {
        let grid = Grid::new(1, 1).unwrap();
        assert!(Player::new().has_won(&grid));
    }
}
