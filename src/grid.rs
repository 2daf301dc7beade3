use std::collections::VecDeque;
use std::ops::Index;

use crate::cell::{Cell, Dir, Pos};
use crate::error::{Error, Result};

/// Rectangular set of cells, stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Fully walled grid with nothing visited.
    pub fn new(width: usize, height: usize) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(Pos { x, y }));
            }
        }
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn origin(&self) -> Pos {
        Pos::ORIGIN
    }

    pub fn goal(&self) -> Pos {
        Pos {
            x: self.width - 1,
            y: self.height - 1,
        }
    }

    pub fn contains(&self, pos: Pos) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    pub fn get(&self, pos: Pos) -> Option<&Cell> {
        if self.contains(pos) {
            Some(&self.cells[self.index_of(pos)])
        } else {
            None
        }
    }

    pub fn cell_at(&self, pos: Pos) -> Result<&Cell> {
        self.get(pos).ok_or(Error::OutOfBounds {
            pos,
            width: self.width,
            height: self.height,
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    /// In-bounds neighbor in `dir`, if any.
    pub fn neighbor(&self, pos: Pos, dir: Dir) -> Option<Pos> {
        pos.step(dir).filter(|next| self.contains(*next))
    }

    /// Up to four orthogonal neighbors, in `Dir::ALL` order.
    pub fn neighbors_of(&self, pos: Pos) -> Vec<(Dir, Pos)> {
        Dir::ALL
            .into_iter()
            .filter_map(|dir| self.neighbor(pos, dir).map(|next| (dir, next)))
            .collect()
    }

    /// True when `pos` is inside the grid and has no wall toward `dir`.
    pub fn is_open(&self, pos: Pos, dir: Dir) -> bool {
        self.get(pos).is_some_and(|cell| !cell.has_wall(dir))
    }

    /// Removes the wall shared by two adjacent cells, on both sides at once.
    pub fn open_passage(&mut self, a: Pos, b: Pos) -> Result<()> {
        self.cell_at(a)?;
        self.cell_at(b)?;
        let dir = Dir::between(a, b).ok_or(Error::NotAdjacent { a, b })?;
        let ia = self.index_of(a);
        let ib = self.index_of(b);
        self.cells[ia].clear_wall(dir);
        self.cells[ib].clear_wall(dir.opposite());
        Ok(())
    }

    /// Number of open passages, each shared wall counted once.
    pub fn open_passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                let right = cell.pos().x + 1 < self.width && !cell.has_wall(Dir::Right);
                let down = cell.pos().y + 1 < self.height && !cell.has_wall(Dir::Down);
                usize::from(right) + usize::from(down)
            })
            .sum()
    }

    /// Every shared wall agrees from both sides and the outer rim is closed.
    pub fn walls_consistent(&self) -> bool {
        self.cells.iter().all(|cell| {
            Dir::ALL.into_iter().all(|dir| match self.neighbor(cell.pos(), dir) {
                Some(next) => cell.has_wall(dir) == self[next].has_wall(dir.opposite()),
                None => cell.has_wall(dir),
            })
        })
    }

    /// BFS step counts over open passages, indexed `[y][x]`.
    pub fn distances_from(&self, start: Pos) -> Vec<Vec<Option<usize>>> {
        let mut dist = vec![vec![None; self.width]; self.height];
        if !self.contains(start) {
            return dist;
        }
        let mut q = VecDeque::new();
        dist[start.y][start.x] = Some(0);
        q.push_back(start);

        while let Some(pos) = q.pop_front() {
            let base = dist[pos.y][pos.x].unwrap_or(0);
            for dir in Dir::ALL {
                if !self.is_open(pos, dir) {
                    continue;
                }
                let Some(next) = self.neighbor(pos, dir) else {
                    continue;
                };
                if dist[next.y][next.x].is_none() {
                    dist[next.y][next.x] = Some(base + 1);
                    q.push_back(next);
                }
            }
        }
        dist
    }

    /// Connected and acyclic: a spanning tree over all cells.
    pub fn is_perfect(&self) -> bool {
        if self.open_passage_count() != self.cells.len() - 1 {
            return false;
        }
        self.distances_from(self.origin())
            .iter()
            .flatten()
            .all(Option::is_some)
    }

    pub(crate) fn mark_visited(&mut self, pos: Pos) {
        let idx = self.index_of(pos);
        self.cells[idx].mark_visited();
    }

    fn index_of(&self, pos: Pos) -> usize {
        pos.y * self.width + pos.x
    }
}

impl Index<Pos> for Grid {
    type Output = Cell;

    fn index(&self, pos: Pos) -> &Cell {
        assert!(
            self.contains(pos),
            "cell {pos} is outside the {}x{} grid",
            self.width,
            self.height
        );
        &self.cells[self.index_of(pos)]
    }
}
