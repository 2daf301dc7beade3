use std::fmt;

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, ValueEnum)]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    /// Grid size in cells, `(width, height)`.
    pub fn dimensions(self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (10, 6),
            Difficulty::Medium => (16, 10),
            Difficulty::Hard => (24, 14),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn harder_means_bigger() {
        let sizes: Vec<usize> = Difficulty::ALL
            .iter()
            .map(|d| {
                let (w, h) = d.dimensions();
                w * h
            })
            .collect();
        assert!(sizes.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn every_preset_is_a_valid_grid() {
        for difficulty in Difficulty::ALL {
            let (w, h) = difficulty.dimensions();
            assert!(w >= 1 && h >= 1, "{difficulty}");
        }
    }
}
