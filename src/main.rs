mod commands;
mod graphics;
mod playback;
mod scenario;
mod settings;
mod state;

use std::time::Instant;

use macroquad::prelude::*;
use tracing::{error, info};
use tracing_subscriber::{self, EnvFilter};

use gridway_navigation::astar::astar_search_detailed;
use gridway_navigation::dfs::dfs_search_detailed;

use crate::commands::{Command, CommandBus};
use crate::graphics::window_conf;
use crate::state::{AppState, SearchOutcome};

#[macroquad::main(window_conf)]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    info!("Gridway demo starting.");

    let grid = match scenario::build_grid() {
        Ok(grid) => grid,
        Err(e) => {
            error!("Failed to build the demo grid: {e:#}");
            return;
        }
    };
    info!(
        width = grid.width(),
        height = grid.height(),
        obstacles = scenario::OBSTACLES.len(),
        "Demo grid ready"
    );

    // Both engines run exactly once, up front; the window only replays the
    // precomputed results.
    let outcomes = vec![
        SearchOutcome {
            name: scenario::ASTAR_NAME,
            result: astar_search_detailed(&grid, scenario::START, scenario::GOAL),
        },
        SearchOutcome {
            name: scenario::DFS_NAME,
            result: dfs_search_detailed(&grid, scenario::START, scenario::GOAL),
        },
    ];
    for outcome in &outcomes {
        info!(algorithm = outcome.name, result = %outcome.result, "Search finished");
    }

    let mut state = AppState::new(outcomes, Instant::now());
    let mut bus = CommandBus::new(16);

    loop {
        let now = Instant::now();

        for cmd in bus.drain() {
            match cmd {
                Command::NextAlgorithm => state.advance_algorithm(now),
            }
        }

        state.update(now);

        if graphics::draw_scene(&state, &grid) {
            bus.publish(Command::NextAlgorithm);
        }

        next_frame().await
    }
}
