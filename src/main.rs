use std::io::{self, Stdout, Write};
use std::thread;
use std::time::{Duration, Instant};

use clap::Parser;
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event};
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::ExecutableCommand;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{error, info};

use maze_game::config::{Args, Settings};
use maze_game::input::{command_for, Command};
use maze_game::render::Renderer;
use maze_game::{logging, Game, Result};

const TIMER_TICK: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    let settings = Settings::from_args(Args::parse());
    logging::init(settings.log_file.as_deref())?;

    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &settings);
    let restored = restore_terminal(&mut stdout);

    if let Err(e) = &result {
        error!(error = %e, "game aborted");
    }
    if let Err(e) = &restored {
        error!(error = %e, "failed to restore terminal");
    }
    result?;
    restored?;
    Ok(())
}

/// Runs every restore step, even after one fails, and reports the first
/// failure.
fn restore_terminal<W: Write>(out: &mut W) -> io::Result<()> {
    let shown = out.execute(Show).map(|_| ());
    let left = out.execute(LeaveAlternateScreen).map(|_| ());
    let cooked = terminal::disable_raw_mode();
    shown.and(left).and(cooked)
}

fn run(stdout: &mut Stdout, settings: &Settings) -> Result<()> {
    let seed = settings.seed.unwrap_or_else(|| rand::thread_rng().gen());
    info!(seed, "session rng seeded");
    let rng = StdRng::seed_from_u64(seed);
    let mut game = Game::with_dimensions(
        settings.width,
        settings.height,
        settings.difficulty,
        settings.round_secs,
        rng,
    )?;
    let mut renderer = Renderer::new();
    let frame_time = Duration::from_micros(1_000_000 / settings.render_fps.max(1));
    let mut last_tick = Instant::now();

    loop {
        let frame_start = Instant::now();
        while event::poll(Duration::from_millis(0))? {
            let Event::Key(key) = event::read()? else {
                continue;
            };
            match command_for(key) {
                Some(Command::Quit) => {
                    info!(solved = game.session().solved(), "quit");
                    return Ok(());
                }
                Some(Command::Move(dir)) => {
                    game.move_player(dir)?;
                }
                Some(Command::SetDifficulty(difficulty)) => {
                    game.set_difficulty(difficulty)?;
                }
                None => {}
            }
        }

        if last_tick.elapsed() >= TIMER_TICK {
            last_tick += TIMER_TICK;
            game.tick();
        }
        renderer.render(stdout, &game)?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe {
        writes: usize,
    }

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            self.writes += 1;
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn restore_keeps_going_after_a_failed_step() {
        let mut out = BrokenPipe { writes: 0 };
        let err = restore_terminal(&mut out).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
        // Show and LeaveAlternateScreen were both attempted.
        assert!(out.writes >= 2);
    }
}
