pub const DEFAULT_ROUND_SECS: u32 = 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    Running,
    Expired,
}

/// What a single tick did to the countdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Counting { remaining: u32 },
    /// Reported once, on the tick that reached zero.
    Expired,
    /// The countdown had already expired; nothing changed.
    Idle,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    remaining: u32,
    state: TimerState,
}

impl Countdown {
    pub fn new(seconds: u32) -> Self {
        let state = if seconds == 0 {
            TimerState::Expired
        } else {
            TimerState::Running
        };
        Self {
            remaining: seconds,
            state,
        }
    }

    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_expired(&self) -> bool {
        self.state == TimerState::Expired
    }

    pub fn tick(&mut self) -> TickOutcome {
        if self.state == TimerState::Expired {
            return TickOutcome::Idle;
        }
        self.remaining = self.remaining.saturating_sub(1);
        if self.remaining == 0 {
            self.state = TimerState::Expired;
            TickOutcome::Expired
        } else {
            TickOutcome::Counting {
                remaining: self.remaining,
            }
        }
    }
}

/// Per-play-session counters; survives maze regeneration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    solved: u32,
    timer: Countdown,
}

impl Session {
    pub fn new(round_secs: u32) -> Self {
        Self {
            solved: 0,
            timer: Countdown::new(round_secs),
        }
    }

    pub fn solved(&self) -> u32 {
        self.solved
    }

    pub fn timer(&self) -> &Countdown {
        &self.timer
    }

    pub fn record_win(&mut self) -> u32 {
        self.solved = self.solved.saturating_add(1);
        self.solved
    }

    pub fn tick(&mut self) -> TickOutcome {
        self.timer.tick()
    }

    pub fn summary(&self) -> String {
        format!("Time is up! Mazes solved: {}", self.solved)
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_ROUND_SECS)
    }
}

/// `MM:SS`, zero padded.
pub fn format_clock(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
