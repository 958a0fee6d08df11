//! Board rendering for the tic-tac-toe GUI

use crate::board::{Board, Mark, Pos, GRID_SIZE};
use egui::{Color32, CornerRadius, Painter, Pos2, Rect, Sense, Stroke, Vec2};

use super::theme::*;

/// Board view handles rendering and input for the game board
pub struct BoardView {
    /// Cached cell size for coordinate calculations
    cell_size: f32,
    /// Board drawing area
    board_rect: Rect,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: 100.0,
            board_rect: Rect::NOTHING,
        }
    }
}

impl BoardView {
    /// Render the board and return the clicked cell if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        current_turn: Mark,
        last_move: Option<Pos>,
        winning_line: Option<[Pos; 3]>,
        game_over: bool,
        input_enabled: bool,
    ) -> Option<Pos> {
        let available_size = ui.available_size();

        // Square board fitted to the available space
        let board_size = available_size.x.min(available_size.y) - 20.0;
        self.cell_size = (board_size - 2.0 * BOARD_MARGIN) / GRID_SIZE as f32;

        let (response, painter) =
            ui.allocate_painter(Vec2::new(board_size, board_size), Sense::click());

        self.board_rect = response.rect;

        // Board background
        painter.rect_filled(self.board_rect, CornerRadius::same(4), BOARD_BG);

        // Winning cells go under the grid and marks
        if let Some(line) = winning_line {
            for pos in line {
                painter.rect_filled(self.cell_rect(pos).shrink(2.0), CornerRadius::same(2), WIN_CELL_BG);
            }
        }

        self.draw_grid(&painter);
        self.draw_marks(&painter, board);

        if let Some(pos) = last_move {
            self.draw_last_move_marker(&painter, pos);
        }

        // Hover preview and click handling
        let mut clicked_pos = None;

        if !game_over && input_enabled {
            if let Some(pointer_pos) = response.hover_pos() {
                if let Some(board_pos) = self.screen_to_board(pointer_pos) {
                    if board.is_empty(board_pos) {
                        self.draw_hover_preview(&painter, board_pos, current_turn);
                        if response.clicked() {
                            clicked_pos = Some(board_pos);
                        }
                    }
                }
            }
        }

        clicked_pos
    }

    /// Draw the two vertical and two horizontal grid lines
    fn draw_grid(&self, painter: &Painter) {
        let stroke = Stroke::new(GRID_LINE_WIDTH, GRID_LINE);
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let extent = GRID_SIZE as f32 * self.cell_size;

        for i in 1..GRID_SIZE {
            let offset = i as f32 * self.cell_size;

            // Vertical line
            painter.line_segment(
                [
                    origin + Vec2::new(offset, 0.0),
                    origin + Vec2::new(offset, extent),
                ],
                stroke,
            );

            // Horizontal line
            painter.line_segment(
                [
                    origin + Vec2::new(0.0, offset),
                    origin + Vec2::new(extent, offset),
                ],
                stroke,
            );
        }
    }

    /// Draw all placed marks
    fn draw_marks(&self, painter: &Painter, board: &Board) {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let pos = Pos::new(row as u8, col as u8);
                match board.get(pos) {
                    Mark::X => self.draw_x(painter, pos, X_COLOR),
                    Mark::O => self.draw_o(painter, pos, O_COLOR),
                    Mark::Empty => {}
                }
            }
        }
    }

    /// Draw an X as two diagonal strokes inset into the cell
    fn draw_x(&self, painter: &Painter, pos: Pos, color: Color32) {
        let rect = self.cell_rect(pos).shrink(self.cell_size * MARK_INSET_RATIO);
        let stroke = Stroke::new(MARK_STROKE_WIDTH, color);

        painter.line_segment([rect.left_top(), rect.right_bottom()], stroke);
        painter.line_segment([rect.right_top(), rect.left_bottom()], stroke);
    }

    /// Draw an O as a circle outline inset into the cell
    fn draw_o(&self, painter: &Painter, pos: Pos, color: Color32) {
        let radius = self.cell_size * (0.5 - MARK_INSET_RATIO);
        painter.circle_stroke(
            self.cell_center(pos),
            radius,
            Stroke::new(MARK_STROKE_WIDTH, color),
        );
    }

    /// Draw last move marker
    fn draw_last_move_marker(&self, painter: &Painter, pos: Pos) {
        let rect = self.cell_rect(pos);
        let center = rect.min + Vec2::splat(self.cell_size * 0.12);
        painter.circle_filled(center, LAST_MOVE_MARKER_RADIUS, LAST_MOVE_MARKER);
    }

    /// Draw a translucent preview of the mark under the pointer
    fn draw_hover_preview(&self, painter: &Painter, pos: Pos, turn: Mark) {
        let color = match turn {
            Mark::X => Color32::from_rgba_unmultiplied(226, 72, 72, 80),
            Mark::O => Color32::from_rgba_unmultiplied(84, 132, 255, 80),
            Mark::Empty => return,
        };

        match turn {
            Mark::X => self.draw_x(painter, pos, color),
            Mark::O => self.draw_o(painter, pos, color),
            Mark::Empty => {}
        }
    }

    /// Screen rect of a cell
    fn cell_rect(&self, pos: Pos) -> Rect {
        let origin = self.board_rect.min + Vec2::splat(BOARD_MARGIN);
        let min = origin
            + Vec2::new(
                pos.col as f32 * self.cell_size,
                pos.row as f32 * self.cell_size,
            );
        Rect::from_min_size(min, Vec2::splat(self.cell_size))
    }

    /// Screen center of a cell
    fn cell_center(&self, pos: Pos) -> Pos2 {
        self.cell_rect(pos).center()
    }

    /// Convert screen coordinates to a board position
    pub fn screen_to_board(&self, screen_pos: Pos2) -> Option<Pos> {
        let relative = screen_pos - self.board_rect.min - Vec2::splat(BOARD_MARGIN);

        let col = (relative.x / self.cell_size).floor() as i32;
        let row = (relative.y / self.cell_size).floor() as i32;

        if Pos::is_valid(row, col) {
            Some(Pos::new(row as u8, col as u8))
        } else {
            None
        }
    }
}
