//! Application state: the path store and the control surface.

use std::time::Instant;

use tracing::info;

use gridway_navigation::PathResult;
use gridway_navigation::map::GridPoint;

use crate::playback::Player;

/// One algorithm's precomputed search outcome. Computed once at startup,
/// immutable afterwards.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Display name shown in the window title line.
    pub name: &'static str,
    /// The search result, including the path if one was found.
    pub result: PathResult,
}

/// State owned by the event loop: the search outcomes, the index of the
/// active algorithm and the animation driver replaying its path.
#[derive(Debug)]
pub struct AppState {
    outcomes: Vec<SearchOutcome>,
    active: usize,
    player: Player,
}

impl AppState {
    /// Creates the application state with the first algorithm active and
    /// its playback already running.
    ///
    /// `outcomes` must not be empty.
    pub fn new(outcomes: Vec<SearchOutcome>, now: Instant) -> Self {
        assert!(!outcomes.is_empty(), "at least one search outcome required");
        let mut player = Player::new(now);
        player.restart_at(outcomes[0].result.path().map(<[GridPoint]>::len), now);
        Self {
            outcomes,
            active: 0,
            player,
        }
    }

    /// Name of the active algorithm.
    pub fn active_name(&self) -> &'static str {
        self.outcomes[self.active].name
    }

    /// Path of the active algorithm, if its search succeeded.
    pub fn active_path(&self) -> Option<&[GridPoint]> {
        self.outcomes[self.active].result.path()
    }

    /// Cycles to the next algorithm and restarts playback from frame 0.
    ///
    /// The in-flight playback is discarded before the new one starts, so
    /// the old and new tick clocks can never interleave.
    pub fn advance_algorithm(&mut self, now: Instant) {
        self.active = (self.active + 1) % self.outcomes.len();
        let len = self.active_path().map(<[GridPoint]>::len);
        self.player.restart_at(len, now);
        info!(algorithm = self.active_name(), "Switched active algorithm");
    }

    /// Feeds the animation driver with the current time.
    pub fn update(&mut self, now: Instant) {
        let len = self.active_path().map_or(0, <[GridPoint]>::len);
        self.player.update_at(len, now);
    }

    /// Frame index into the active path, or `None` when there is nothing
    /// to render (failed search, or nothing selected yet).
    pub fn frame(&self) -> Option<usize> {
        let len = self.active_path()?.len();
        self.player.frame(len)
    }
}
