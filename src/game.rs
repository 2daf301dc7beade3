use tracing::{debug, info};

use crate::cell::Dir;
use crate::error::Result;
use crate::generator::{self, RandomChoice};
use crate::grid::Grid;
use crate::level::Difficulty;
use crate::player::Player;
use crate::session::{Session, TickOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Blocked,
    Moved,
    /// Reached the goal; a new maze is already in place.
    Solved { total: u32 },
    /// The round is over and moves are ignored.
    RoundOver,
}

/// Single owner of the maze, the token and the session counters.
pub struct Game<C> {
    grid: Grid,
    player: Player,
    session: Session,
    difficulty: Difficulty,
    choice: C,
}

impl<C: RandomChoice> Game<C> {
    pub fn new(difficulty: Difficulty, round_secs: u32, choice: C) -> Result<Self> {
        let (width, height) = difficulty.dimensions();
        Self::with_dimensions(width, height, difficulty, round_secs, choice)
    }

    pub fn with_dimensions(
        width: usize,
        height: usize,
        difficulty: Difficulty,
        round_secs: u32,
        mut choice: C,
    ) -> Result<Self> {
        let grid = generator::generate(width, height, &mut choice)?;
        info!(width, height, %difficulty, round_secs, "new game");
        Ok(Self {
            grid,
            player: Player::new(),
            session: Session::new(round_secs),
            difficulty,
            choice,
        })
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn player(&self) -> &Player {
        &self.player
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// Preset name when the maze has the preset's size, `"Custom"` otherwise.
    pub fn difficulty_label(&self) -> &'static str {
        if (self.grid.width(), self.grid.height()) == self.difficulty.dimensions() {
            self.difficulty.name()
        } else {
            "Custom"
        }
    }

    pub fn is_over(&self) -> bool {
        self.session.timer().is_expired()
    }

    /// Replaces the maze with a fresh one and puts the token back at the
    /// origin. On invalid dimensions the current maze is left untouched.
    pub fn regenerate(&mut self, width: usize, height: usize) -> Result<()> {
        let grid = generator::generate(width, height, &mut self.choice)?;
        debug_assert!(grid.is_perfect());
        self.grid = grid;
        self.player.reset();
        Ok(())
    }

    pub fn set_difficulty(&mut self, difficulty: Difficulty) -> Result<()> {
        let (width, height) = difficulty.dimensions();
        self.regenerate(width, height)?;
        self.difficulty = difficulty;
        info!(%difficulty, width, height, "difficulty changed");
        Ok(())
    }

    /// Wall-checked step followed by the win check. The win check runs even
    /// when the step was blocked.
    pub fn move_player(&mut self, dir: Dir) -> Result<MoveOutcome> {
        if self.is_over() {
            return Ok(MoveOutcome::RoundOver);
        }
        let moved = self.player.try_move(&self.grid, dir);
        if self.player.has_won(&self.grid) {
            let total = self.session.record_win();
            info!(total, "maze solved");
            self.regenerate(self.grid.width(), self.grid.height())?;
            return Ok(MoveOutcome::Solved { total });
        }
        if moved {
            debug!(pos = %self.player.pos(), ?dir, "moved");
            Ok(MoveOutcome::Moved)
        } else {
            Ok(MoveOutcome::Blocked)
        }
    }

    pub fn tick(&mut self) -> TickOutcome {
        let outcome = self.session.tick();
        if outcome == TickOutcome::Expired {
            info!(solved = self.session.solved(), "time is up");
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Pos;
    use crate::generator::ScriptedChoice;

    fn first_choice_game(width: usize, height: usize) -> Game<ScriptedChoice> {
        Game::with_dimensions(
            width,
            height,
            Difficulty::Easy,
            60,
            ScriptedChoice::new(vec![0]),
        )
        .unwrap()
    }

    #[test]
    fn solving_counts_resets_and_regenerates() {
        // Always taking the first choice on a 3x1 grid carves a straight
        // corridor to the goal.
        let mut game = first_choice_game(3, 1);
        assert_eq!(game.move_player(Dir::Right).unwrap(), MoveOutcome::Moved);
        assert_eq!(
            game.move_player(Dir::Right).unwrap(),
            MoveOutcome::Solved { total: 1 }
        );
        assert_eq!(game.session().solved(), 1);
        assert_eq!(game.player().pos(), Pos::ORIGIN);
        assert!(game.grid().is_perfect());
        assert_eq!(game.grid().width(), 3);
    }

    #[test]
    fn blocked_move_is_not_an_error() {
        let mut game = first_choice_game(3, 2);
        assert_eq!(game.move_player(Dir::Down).unwrap(), MoveOutcome::Blocked);
        assert_eq!(game.move_player(Dir::Up).unwrap(), MoveOutcome::Blocked);
        assert_eq!(game.player().pos(), Pos::ORIGIN);
    }

    #[test]
    fn single_cell_is_solved_by_any_key() {
        let mut game = first_choice_game(1, 1);
        assert!(game.player().has_won(game.grid()));
        assert_eq!(
            game.move_player(Dir::Left).unwrap(),
            MoveOutcome::Solved { total: 1 }
        );
        assert_eq!(game.grid()[Pos::ORIGIN].walls().open_count(), 0);
    }

    #[test]
    fn invalid_regeneration_keeps_the_current_maze() {
        let mut game = first_choice_game(3, 2);
        game.move_player(Dir::Right).unwrap();
        let before = game.grid().clone();
        assert!(game.regenerate(0, 4).is_err());
        assert_eq!(game.grid(), &before);
        assert_eq!(game.player().pos(), Pos::new(1, 0));
    }

    #[test]
    fn difficulty_change_swaps_the_whole_grid() {
        let mut game = first_choice_game(3, 2);
        game.move_player(Dir::Right).unwrap();
        game.set_difficulty(Difficulty::Hard).unwrap();
        let (w, h) = Difficulty::Hard.dimensions();
        assert_eq!((game.grid().width(), game.grid().height()), (w, h));
        assert_eq!(game.grid().cells().count(), w * h);
        assert_eq!(game.player().pos(), Pos::ORIGIN);
        assert_eq!(game.difficulty(), Difficulty::Hard);
        assert!(game.grid().is_perfect());
    }

    #[test]
    fn custom_size_is_labelled_until_a_preset_is_chosen() {
        let mut game = first_choice_game(5, 3);
        assert_eq!(game.difficulty(), Difficulty::Easy);
        assert_eq!(game.difficulty_label(), "Custom");
        game.set_difficulty(Difficulty::Easy).unwrap();
        assert_eq!(game.difficulty_label(), "Easy");
    }

    #[test]
    fn expiry_ends_the_round() {
        let mut game = Game::with_dimensions(
            3,
            1,
            Difficulty::Easy,
            2,
            ScriptedChoice::new(vec![0]),
        )
        .unwrap();
        assert_eq!(game.tick(), TickOutcome::Counting { remaining: 1 });
        assert_eq!(game.tick(), TickOutcome::Expired);
        assert!(game.is_over());
        assert_eq!(game.tick(), TickOutcome::Idle);
        assert_eq!(game.move_player(Dir::Right).unwrap(), MoveOutcome::RoundOver);
        assert_eq!(game.player().pos(), Pos::ORIGIN);
        assert_eq!(game.session().timer().remaining(), 0);
    }
}
