use std::io::{Stdout, Write};

use crossterm::cursor::MoveTo;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType};
use crossterm::QueueableCommand;
use unicode_width::UnicodeWidthStr;

use crate::cell::{Dir, Pos};
use crate::error::Result;
use crate::game::Game;
use crate::generator::RandomChoice;
use crate::grid::Grid;
use crate::session::format_clock;

const CELL_W: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Wall,
    Floor,
}

/// Block layout of a grid: `(2w+1) x (2h+1)` tiles, cells on odd
/// coordinates, walls and corners between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileMap {
    width: usize,
    height: usize,
    tiles: Vec<Tile>,
}

impl TileMap {
    pub fn from_grid(grid: &Grid) -> Self {
        let width = grid.width() * 2 + 1;
        let height = grid.height() * 2 + 1;
        let mut tiles = Vec::with_capacity(width * height);
        for ty in 0..height {
            for tx in 0..width {
                tiles.push(tile_for(grid, tx, ty));
            }
        }
        Self {
            width,
            height,
            tiles,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn get(&self, tx: usize, ty: usize) -> Tile {
        self.tiles[ty * self.width + tx]
    }
}

/// Tile coordinate of a cell's interior.
pub fn tile_of(pos: Pos) -> (usize, usize) {
    (pos.x * 2 + 1, pos.y * 2 + 1)
}

fn tile_for(grid: &Grid, tx: usize, ty: usize) -> Tile {
    let open = match (tx % 2, ty % 2) {
        (1, 1) => true,
        (0, 1) => {
            let y = ty / 2;
            let x = tx / 2;
            if x < grid.width() {
                grid.is_open(Pos { x, y }, Dir::Left)
            } else {
                grid.is_open(Pos { x: x - 1, y }, Dir::Right)
            }
        }
        (1, 0) => {
            let x = tx / 2;
            let y = ty / 2;
            if y < grid.height() {
                grid.is_open(Pos { x, y }, Dir::Up)
            } else {
                grid.is_open(Pos { x, y: y - 1 }, Dir::Down)
            }
        }
        _ => false,
    };
    if open {
        Tile::Floor
    } else {
        Tile::Wall
    }
}

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Wall,
    Floor,
    Player,
    Goal,
}

#[derive(Clone, Copy, PartialEq)]
struct ScreenCell {
    glyph: Glyph,
    color: Color,
}

const BLANK: ScreenCell = ScreenCell {
    glyph: Glyph::Floor,
    color: Color::Reset,
};

pub struct Renderer {
    last: Vec<ScreenCell>,
    last_hud: String,
    last_footer: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    pub fn new() -> Self {
        Self {
            last: Vec::new(),
            last_hud: String::new(),
            last_footer: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }

    pub fn render<C: RandomChoice>(&mut self, stdout: &mut Stdout, game: &Game<C>) -> Result<()> {
        let map = TileMap::from_grid(game.grid());
        if self.last.len() != map.width() * map.height() {
            self.last = vec![BLANK; map.width() * map.height()];
            self.needs_full = true;
        }

        stdout.queue(MoveTo(0, 0))?;

        let (term_w, term_h) = terminal::size()?;
        let Some((needed_w, needed_h)) = fitting_size(&map, term_w, term_h) else {
            stdout.queue(Clear(ClearType::All))?;
            let msg = format!(
                "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}.",
                map.width() * CELL_W,
                map.height() + 2,
                term_w,
                term_h
            );
            stdout.queue(Print(msg))?;
            stdout.flush()?;
            self.needs_full = true;
            return Ok(());
        };

        let origin_x = (term_w - needed_w) / 2;
        let origin_y = (term_h - needed_h) / 2 + 1;
        if origin_x != self.origin_x || origin_y != self.origin_y {
            self.origin_x = origin_x;
            self.origin_y = origin_y;
            self.needs_full = true;
        }
        if self.needs_full {
            stdout.queue(Clear(ClearType::All))?;
        }

        let hud = hud_line(game);
        if self.needs_full || hud != self.last_hud {
            stdout.queue(MoveTo(self.origin_x, self.origin_y - 1))?;
            stdout.queue(SetForegroundColor(Color::White))?;
            stdout.queue(Clear(ClearType::CurrentLine))?;
            stdout.queue(Print(&hud))?;
            stdout.queue(ResetColor)?;
            self.last_hud = hud;
        }

        let player = tile_of(game.player().pos());
        let goal = tile_of(game.grid().goal());
        for ty in 0..map.height() {
            for tx in 0..map.width() {
                let cell = if (tx, ty) == player {
                    ScreenCell {
                        glyph: Glyph::Player,
                        color: Color::Red,
                    }
                } else if (tx, ty) == goal {
                    ScreenCell {
                        glyph: Glyph::Goal,
                        color: Color::Green,
                    }
                } else {
                    match map.get(tx, ty) {
                        Tile::Wall => ScreenCell {
                            glyph: Glyph::Wall,
                            color: Color::Grey,
                        },
                        Tile::Floor => BLANK,
                    }
                };
                let idx = ty * map.width() + tx;
                if self.needs_full || cell != self.last[idx] {
                    self.last[idx] = cell;
                    self.draw_cell(stdout, tx, ty, cell)?;
                }
            }
        }

        let footer = if game.is_over() {
            format!("{} (press q to quit)", game.session().summary())
        } else {
            String::new()
        };
        if self.needs_full || footer != self.last_footer {
            stdout.queue(MoveTo(self.origin_x, self.origin_y + map.height() as u16))?;
            stdout.queue(Clear(ClearType::CurrentLine))?;
            stdout.queue(SetForegroundColor(Color::Yellow))?;
            stdout.queue(Print(&footer))?;
            stdout.queue(ResetColor)?;
            self.last_footer = footer;
        }
        self.needs_full = false;

        stdout.flush()?;
        Ok(())
    }

    fn draw_cell(&self, stdout: &mut Stdout, tx: usize, ty: usize, cell: ScreenCell) -> Result<()> {
        let text = match cell.glyph {
            Glyph::Wall => "██",
            Glyph::Floor => "  ",
            Glyph::Player => "😃",
            Glyph::Goal => "🏁",
        };
        let x_pos = self.origin_x + (tx * CELL_W) as u16;
        let y_pos = self.origin_y + ty as u16;
        stdout.queue(MoveTo(x_pos, y_pos))?;
        stdout.queue(SetForegroundColor(cell.color))?;
        stdout.queue(Print(text))?;
        let w = UnicodeWidthStr::width(text);
        if w < CELL_W {
            for _ in 0..(CELL_W - w) {
                stdout.queue(Print(' '))?;
            }
        }
        stdout.queue(ResetColor)?;
        Ok(())
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Screen columns and rows needed for `map` plus the HUD and footer lines,
/// or `None` when they do not fit a `term_w` x `term_h` terminal.
fn fitting_size(map: &TileMap, term_w: u16, term_h: u16) -> Option<(u16, u16)> {
    let needed_w = u16::try_from(map.width().checked_mul(CELL_W)?).ok()?;
    let needed_h = u16::try_from(map.height().checked_add(2)?).ok()?;
    (needed_w <= term_w && needed_h <= term_h).then_some((needed_w, needed_h))
}

pub fn hud_line<C: RandomChoice>(game: &Game<C>) -> String {
    format!(
        "Time: {}  Mazes Solved: {}  Difficulty: {}  (arrows/hjkl move, 1-3 difficulty, q quit)",
        format_clock(game.session().timer().remaining()),
        game.session().solved(),
        game.difficulty_label(),
    )
}
