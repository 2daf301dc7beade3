use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: usize,
    pub y: usize,
}

impl Pos {
    pub const ORIGIN: Pos = Pos { x: 0, y: 0 };

    pub fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// One step in `dir`, or `None` when that would leave the first quadrant.
    pub fn step(self, dir: Dir) -> Option<Pos> {
        let (dx, dy) = dir.delta();
        let x = self.x.checked_add_signed(dx)?;
        let y = self.y.checked_add_signed(dy)?;
        Some(Pos { x, y })
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dir {
    Up,
    Right,
    Down,
    Left,
}

impl Dir {
    /// Neighbor enumeration order used everywhere, the generator included.
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    pub fn delta(self) -> (isize, isize) {
        match self {
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
            Dir::Left => (-1, 0),
        }
    }

    pub fn opposite(self) -> Dir {
        match self {
            Dir::Up => Dir::Down,
            Dir::Right => Dir::Left,
            Dir::Down => Dir::Up,
            Dir::Left => Dir::Right,
        }
    }

    /// Direction leading from `from` to the orthogonally adjacent `to`.
    pub fn between(from: Pos, to: Pos) -> Option<Dir> {
        Dir::ALL.into_iter().find(|dir| from.step(*dir) == Some(to))
    }
}

/// Wall flags of a single cell; `true` blocks movement on that side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Walls {
    pub top: bool,
    pub right: bool,
    pub bottom: bool,
    pub left: bool,
}

impl Walls {
    pub const CLOSED: Walls = Walls {
        top: true,
        right: true,
        bottom: true,
        left: true,
    };

    pub fn has(&self, dir: Dir) -> bool {
        match dir {
            Dir::Up => self.top,
            Dir::Right => self.right,
            Dir::Down => self.bottom,
            Dir::Left => self.left,
        }
    }

    pub(crate) fn clear(&mut self, dir: Dir) {
        match dir {
            Dir::Up => self.top = false,
            Dir::Right => self.right = false,
            Dir::Down => self.bottom = false,
            Dir::Left => self.left = false,
        }
    }

    pub fn open_count(&self) -> usize {
        Dir::ALL.iter().filter(|dir| !self.has(**dir)).count()
    }
}

impl Default for Walls {
    fn default() -> Self {
        Walls::CLOSED
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    pos: Pos,
    walls: Walls,
    visited: bool,
}

impl Cell {
    pub(crate) fn new(pos: Pos) -> Self {
        Self {
            pos,
            walls: Walls::CLOSED,
            visited: false,
        }
    }

    pub fn pos(&self) -> Pos {
        self.pos
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, dir: Dir) -> bool {
        self.walls.has(dir)
    }

    /// Generation-time marker; afterwards only a rendering hint.
    pub fn visited(&self) -> bool {
        self.visited
    }

    pub(crate) fn mark_visited(&mut self) {
        self.visited = true;
    }

    pub(crate) fn clear_wall(&mut self, dir: Dir) {
        self.walls.clear(dir);
    }
}
