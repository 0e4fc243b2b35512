use crate::colors::*;
use crate::App;
use core_pm::game_state::{CellView, Phase};
use core_pm::grid::Direction;
use eframe::egui::{Painter, Pos2, Rounding, Shape, Stroke, Vec2};

/// Half the opening of pacman's mouth, in radians
const MOUTH_HALF_ANGLE: f32 = 0.6;

pub fn draw_grid(app: &App, painter: &Painter) {
    // nothing is drawn until a submitted size has produced a grid
    if app.state.phase() != Phase::Ready {
        return;
    }
    let Some(grid) = app.state.grid() else {
        return;
    };
    let wts = app.world_to_screen;
    let outline = if app.ui_settings.cell_outlines {
        Stroke::new(1.0, CELL_OUTLINE_COLOR)
    } else {
        Stroke::NONE
    };

    for row in 0..grid.size() {
        for col in 0..grid.size() {
            let Some(view) = app.state.cell_view(row, col) else {
                continue;
            };
            let rect = wts.map_cell(row, col);
            let fill = match view {
                CellView::Border => WALL_COLOR,
                CellView::Interior | CellView::Cursor(_) => FLOOR_COLOR,
            };
            painter.rect(rect, Rounding::ZERO, fill, outline);
            if let CellView::Cursor(direction) = view {
                draw_pacman(painter, rect.center(), wts.map_dist(0.4), direction);
            }
        }
    }
}

/// Pacman fills most of the cell, with the mouth open towards `direction`
fn draw_pacman(painter: &Painter, center: Pos2, radius: f32, direction: Direction) {
    painter.circle_filled(center, radius, PACMAN_COLOR);

    let (dx, dy) = direction.vector();
    let facing = f32::from(dy).atan2(f32::from(dx));
    let lip = |angle: f32| -> Pos2 { center + Vec2::angled(angle) * radius * 1.1 };
    painter.add(Shape::convex_polygon(
        vec![
            center,
            lip(facing - MOUTH_HALF_ANGLE),
            lip(facing + MOUTH_HALF_ANGLE),
        ],
        FLOOR_COLOR,
        Stroke::NONE,
    ));
}
