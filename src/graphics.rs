use macroquad::prelude::*;

use gridway_navigation::map::{CellState, GridPoint, OccupancyGrid};

use crate::scenario;
use crate::settings;
use crate::state::AppState;

// Function to configure the macroquad window
pub fn window_conf() -> Conf {
    let window = settings::load_settings().window;
    Conf {
        window_title: window.title,
        window_width: window.width,
        window_height: window.height,
        high_dpi: window.high_dpi,
        ..Default::default()
    }
}

// Scene palette.
const TRAIL_COLOR: Color = LIME;
const MARKER_COLOR: Color = ORANGE;
const START_COLOR: Color = BLUE;
const GOAL_COLOR: Color = RED;
const STEP_TEXT_COLOR: Color = DARKBLUE;

const TOP_MARGIN: f32 = 84.0;
const BOTTOM_MARGIN: f32 = 130.0;
const SIDE_MARGIN: f32 = 30.0;

const TITLE_FONT_SIZE: f32 = 30.0;
const STEP_FONT_SIZE: f32 = 22.0;
const LEGEND_FONT_SIZE: f32 = 18.0;
const BUTTON_FONT_SIZE: f32 = 24.0;

/// Pixel placement of the grid for the current screen size.
struct Layout {
    cell: f32,
    origin: Vec2,
    width_px: f32,
    height_px: f32,
}

fn layout(grid: &OccupancyGrid) -> Layout {
    let avail_w = screen_width() - 2.0 * SIDE_MARGIN;
    let avail_h = screen_height() - TOP_MARGIN - BOTTOM_MARGIN;
    let cell = (avail_w / grid.width() as f32).min(avail_h / grid.height() as f32);
    let width_px = cell * grid.width() as f32;
    let height_px = cell * grid.height() as f32;
    Layout {
        cell,
        origin: vec2((screen_width() - width_px) / 2.0, TOP_MARGIN),
        width_px,
        height_px,
    }
}

/// Center of a cell in screen coordinates. Row 0 is drawn at the top.
fn cell_center(l: &Layout, p: GridPoint) -> Vec2 {
    l.origin + vec2((p.x as f32 + 0.5) * l.cell, (p.y as f32 + 0.5) * l.cell)
}

/// Draws the whole scene and returns true if the Next button was clicked
/// this frame.
pub fn draw_scene(state: &AppState, grid: &OccupancyGrid) -> bool {
    clear_background(WHITE);
    let l = layout(grid);

    draw_cells(grid, &l);
    draw_endpoints(&l);
    draw_path_overlay(state, &l);
    draw_title(state);
    draw_legend(&l);
    draw_next_button(&l)
}

fn draw_cells(grid: &OccupancyGrid, l: &Layout) {
    for y in 0..grid.height() {
        for x in 0..grid.width() {
            if let Ok(CellState::Blocked) = grid.state(GridPoint::new(x, y)) {
                draw_rectangle(
                    l.origin.x + x as f32 * l.cell,
                    l.origin.y + y as f32 * l.cell,
                    l.cell,
                    l.cell,
                    BLACK,
                );
            }
        }
    }

    // Thin grid lines over the cells.
    for x in 0..=grid.width() {
        let px = l.origin.x + x as f32 * l.cell;
        draw_line(px, l.origin.y, px, l.origin.y + l.height_px, 1.0, DARKGRAY);
    }
    for y in 0..=grid.height() {
        let py = l.origin.y + y as f32 * l.cell;
        draw_line(l.origin.x, py, l.origin.x + l.width_px, py, 1.0, DARKGRAY);
    }
}

fn draw_endpoints(l: &Layout) {
    let start = cell_center(l, scenario::START);
    let goal = cell_center(l, scenario::GOAL);
    draw_circle(start.x, start.y, l.cell * 0.22, START_COLOR);
    draw_circle(goal.x, goal.y, l.cell * 0.22, GOAL_COLOR);
}

fn draw_path_overlay(state: &AppState, l: &Layout) {
    // A failed search renders nothing: no trail, no marker, no step text.
    let Some(path) = state.active_path() else {
        return;
    };
    let Some(frame) = state.frame() else {
        return;
    };

    // Trail over the prefix path[0..=frame].
    for pair in path[..=frame].windows(2) {
        let a = cell_center(l, pair[0]);
        let b = cell_center(l, pair[1]);
        draw_line(a.x, a.y, b.x, b.y, 4.0, TRAIL_COLOR);
    }

    // Square marker at the current waypoint.
    let c = cell_center(l, path[frame]);
    let side = l.cell * 0.55;
    draw_rectangle(c.x - side / 2.0, c.y - side / 2.0, side, side, MARKER_COLOR);
    draw_rectangle_lines(c.x - side / 2.0, c.y - side / 2.0, side, side, 2.0, BLACK);

    let step_text = format!("Step: {} / {}", frame + 1, path.len());
    draw_centered_text(&step_text, 64.0, STEP_FONT_SIZE, STEP_TEXT_COLOR);
}

fn draw_title(state: &AppState) {
    let title = format!("Algorithm: {}", state.active_name());
    draw_centered_text(&title, 36.0, TITLE_FONT_SIZE, BLACK);
}

fn draw_legend(l: &Layout) {
    let y = l.origin.y + l.height_px + 32.0;
    let marker = 12.0;
    let gap = 8.0;
    let spacing = 26.0;

    let entries = ["Start", "Goal", "Obstacle", "Path"];
    let total: f32 = entries
        .iter()
        .map(|label| marker + gap + text_width(label, LEGEND_FONT_SIZE) + spacing)
        .sum::<f32>()
        - spacing;
    let mut x = (screen_width() - total) / 2.0;

    for label in entries {
        let cy = y - marker / 2.0;
        match label {
            "Start" => draw_circle(x + marker / 2.0, cy, marker / 2.0, START_COLOR),
            "Goal" => draw_circle(x + marker / 2.0, cy, marker / 2.0, GOAL_COLOR),
            "Obstacle" => draw_rectangle(x, cy - marker / 2.0, marker, marker, BLACK),
            _ => draw_line(x, cy, x + marker, cy, 4.0, TRAIL_COLOR),
        }
        x += marker + gap;
        draw_text(label, x, y, LEGEND_FONT_SIZE, BLACK);
        x += text_width(label, LEGEND_FONT_SIZE) + spacing;
    }
}

fn draw_next_button(l: &Layout) -> bool {
    let size = vec2(130.0, 42.0);
    let rect = Rect::new(
        (screen_width() - size.x) / 2.0,
        l.origin.y + l.height_px + 54.0,
        size.x,
        size.y,
    );

    let (mx, my) = mouse_position();
    let hovered = rect.contains(vec2(mx, my));

    draw_rectangle(
        rect.x,
        rect.y,
        rect.w,
        rect.h,
        if hovered { SKYBLUE } else { LIGHTGRAY },
    );
    draw_rectangle_lines(rect.x, rect.y, rect.w, rect.h, 2.0, DARKGRAY);

    let label = "Next";
    let dims = measure_text(label, None, BUTTON_FONT_SIZE as u16, 1.0);
    draw_text(
        label,
        rect.x + (rect.w - dims.width) / 2.0,
        rect.y + (rect.h - dims.height) / 2.0 + dims.offset_y,
        BUTTON_FONT_SIZE,
        BLACK,
    );

    hovered && is_mouse_button_pressed(MouseButton::Left)
}

fn draw_centered_text(text: &str, baseline_y: f32, font_size: f32, color: Color) {
    let dims = measure_text(text, None, font_size as u16, 1.0);
    draw_text(
        text,
        (screen_width() - dims.width) / 2.0,
        baseline_y,
        font_size,
        color,
    );
}

fn text_width(text: &str, font_size: f32) -> f32 {
    measure_text(text, None, font_size as u16, 1.0).width
}
