use crate::catalog::ChordCategory;
use crate::config::PracticeConfig;
use crate::inversion::InversionKind;
use crate::selector::{ChordSelector, GeneratedChord};

pub const MIN_DURATION_SECS: u64 = 1;
pub const MAX_DURATION_SECS: u64 = 120;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Practicing,
}

/// Timer-driven practice session. Owns the config, the countdown to the
/// next card, and the chord currently on display. The countdown is the only
/// timer handle that exists; arming assigns it in place, so re-arming can
/// never leave a second timer ticking.
pub struct PracticeSession {
    selector: ChordSelector,
    config: PracticeConfig,
    state: SessionState,
    secs_until_advance: Option<f64>,
    current: Option<GeneratedChord>,
}

impl PracticeSession {
    pub fn new(config: PracticeConfig) -> Self {
        Self {
            selector: ChordSelector::new(),
            config,
            state: SessionState::Idle,
            secs_until_advance: None,
            current: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn config(&self) -> &PracticeConfig {
        &self.config
    }

    pub fn current(&self) -> Option<&GeneratedChord> {
        self.current.as_ref()
    }

    pub fn secs_until_advance(&self) -> Option<f64> {
        self.secs_until_advance
    }

    /// Idle -> Practicing: draw a card immediately and arm the timer.
    /// No-op while already practicing.
    pub fn start(&mut self) {
        if self.state == SessionState::Practicing {
            return;
        }
        self.state = SessionState::Practicing;
        self.advance();
    }

    /// Practicing -> Idle: disarm the timer. No draws happen until the next
    /// start(); a tick arriving after this is a no-op.
    pub fn pause(&mut self) {
        self.state = SessionState::Idle;
        self.secs_until_advance = None;
    }

    pub fn toggle(&mut self) {
        match self.state {
            SessionState::Idle => self.start(),
            SessionState::Practicing => self.pause(),
        }
    }

    /// Clamps to [MIN, MAX]. While practicing the in-flight interval is
    /// discarded and the timer re-armed with the full new period.
    pub fn change_duration(&mut self, secs: u64) {
        self.config.duration_secs = secs.clamp(MIN_DURATION_SECS, MAX_DURATION_SECS);
        if self.state == SessionState::Practicing {
            self.arm();
        }
    }

    pub fn toggle_category(&mut self, category: ChordCategory) {
        if !self.config.categories.remove(&category) {
            self.config.categories.insert(category);
        }
    }

    /// Returns false (and changes nothing) when asked to deselect the last
    /// remaining inversion; the enabled set must never go empty.
    pub fn toggle_inversion(&mut self, kind: InversionKind) -> bool {
        if self.config.inversions.contains(&kind) {
            if self.config.inversions.len() == 1 {
                return false;
            }
            self.config.inversions.remove(&kind);
        } else {
            self.config.inversions.insert(kind);
        }
        true
    }

    /// Advance the countdown by `elapsed` seconds. Returns true when a new
    /// card was drawn so the caller knows to redraw. Missed ticks never
    /// queue: one draw per expiry, then the timer is re-armed.
    pub fn on_tick(&mut self, elapsed: f64) -> bool {
        if self.state != SessionState::Practicing {
            return false;
        }
        let Some(remaining) = self.secs_until_advance else {
            return false;
        };
        let remaining = remaining - elapsed;
        if remaining <= 0.0 {
            self.advance();
            true
        } else {
            self.secs_until_advance = Some(remaining);
            false
        }
    }

    fn advance(&mut self) {
        self.current = Some(self.selector.draw(&self.config));
        self.arm();
    }

    fn arm(&mut self) {
        self.secs_until_advance = Some(self.config.duration_secs as f64);
    }
}
