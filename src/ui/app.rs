//! Main application for the tic-tac-toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2};

use crate::board::Mark;
use crate::engine::Difficulty;

use super::board_view::BoardView;
use super::game_state::{GameResult, GameSettings, GameState};
use super::theme::*;

/// Main tic-tac-toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    /// Setup screen choices; the game screen shows while this is `None`
    pending: Option<GameSettings>,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(GameSettings::default()),
            board_view: BoardView::default(),
            pending: Some(GameSettings::default()),
            show_debug: true,
        }
    }
}

impl TicTacToeApp {
    /// Create a new app showing the setup screen
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the setup screen: symbol, difficulty, pruning
    fn render_setup(&mut self, ctx: &Context) {
        let mut settings = self.pending.unwrap_or_default();
        let mut start = false;

        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(40.0);
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("TIC-TAC-TOE").size(28.0).strong().color(TEXT_PRIMARY));
                    ui.label(RichText::new("minimax with alpha-beta pruning").size(12.0).color(TEXT_MUTED));
                    ui.add_space(24.0);

                    let card_width = 320.0;

                    Self::card_frame().show(ui, |ui| {
                        ui.set_width(card_width);
                        ui.label(RichText::new("YOUR SYMBOL").size(10.0).color(TEXT_MUTED));
                        ui.add_space(6.0);
                        ui.horizontal(|ui| {
                            ui.selectable_value(&mut settings.human_mark, Mark::X, RichText::new("Play as X").size(14.0));
                            ui.selectable_value(&mut settings.human_mark, Mark::O, RichText::new("Play as O").size(14.0));
                        });
                        ui.label(RichText::new("X always opens the game").size(10.0).color(TEXT_MUTED));
                    });

                    ui.add_space(10.0);

                    Self::card_frame().show(ui, |ui| {
                        ui.set_width(card_width);
                        ui.label(RichText::new("AI DIFFICULTY").size(10.0).color(TEXT_MUTED));
                        ui.add_space(6.0);
                        for tier in Difficulty::ALL {
                            let text = format!("{} (search depth {})", tier.label(), tier.search_depth());
                            ui.selectable_value(&mut settings.difficulty, tier, RichText::new(text).size(13.0));
                        }
                    });

                    ui.add_space(10.0);

                    Self::card_frame().show(ui, |ui| {
                        ui.set_width(card_width);
                        ui.label(RichText::new("SEARCH").size(10.0).color(TEXT_MUTED));
                        ui.add_space(6.0);
                        ui.checkbox(&mut settings.use_pruning, "Alpha-beta pruning");
                    });

                    ui.add_space(18.0);

                    if ui
                        .button(RichText::new("  Start Game  ").size(16.0).strong())
                        .clicked()
                    {
                        start = true;
                    }
                });
            });

        if start {
            self.state = GameState::new(settings);
            self.pending = None;
        } else {
            self.pending = Some(settings);
        }
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Game (N)").clicked() {
                        self.state.reset();
                        ui.close_menu();
                    }
                    if ui.button("New Game with Options...").clicked() {
                        self.pending = Some(self.state.settings);
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let settings = self.state.settings;
                    ui.label(format!(
                        "You: {} · AI: {} · {}",
                        settings.human_mark.label(),
                        settings.difficulty.label(),
                        if settings.use_pruning { "pruning on" } else { "pruning off" },
                    ));
                });
            });
        });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render the side panel with game info and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(230.0)
            .max_width(270.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_settings_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(result) = self.state.game_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, &result);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X·O").size(20.0).color(TEXT_SECONDARY));
            ui.add_space(4.0);
            ui.label(RichText::new("TIC-TAC-TOE").size(20.0).strong().color(TEXT_PRIMARY));
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("minimax AI").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let turn = self.state.current_turn;
            let accent = if turn == Mark::X { X_COLOR } else { O_COLOR };

            ui.horizontal(|ui| {
                let (rect, _) = ui.allocate_exact_size(Vec2::new(44.0, 44.0), egui::Sense::hover());
                ui.painter().circle_filled(rect.center(), 20.0, CARD_BG);
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    turn.label(),
                    egui::FontId::proportional(26.0),
                    accent,
                );

                ui.add_space(10.0);

                ui.vertical(|ui| {
                    ui.add_space(4.0);
                    let name = if self.state.is_human_turn() { "YOU" } else { "AI" };
                    ui.label(RichText::new(name).size(16.0).strong().color(TEXT_PRIMARY));

                    let status = if self.state.game_over.is_some() {
                        ("Game over", WIN_HIGHLIGHT)
                    } else if self.state.is_ai_thinking() {
                        ("AI thinking...", STATUS_BUSY)
                    } else {
                        ("Your move", STATUS_OK)
                    };
                    ui.label(RichText::new(status.0).size(12.0).color(status.1));
                });
            });
        });
    }

    /// Render current settings card
    fn render_settings_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SETTINGS").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let settings = self.state.settings;
            ui.label(
                RichText::new(format!(
                    "{} · depth {}",
                    settings.difficulty.label(),
                    settings.difficulty.search_depth()
                ))
                .size(13.0)
                .color(TEXT_PRIMARY),
            );
            ui.label(
                RichText::new(if settings.use_pruning {
                    "Alpha-beta pruning on"
                } else {
                    "Alpha-beta pruning off"
                })
                .size(11.0)
                .color(TEXT_SECONDARY),
            );
            ui.add_space(4.0);
            ui.label(
                RichText::new(format!("Move #{}", self.state.move_history.len()))
                    .size(11.0)
                    .color(TEXT_SECONDARY),
            );
        });
    }

    /// Render debug card with the latest search statistics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
            .show(ui, |ui| {
                ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
                ui.add_space(6.0);

                if let Some(result) = &self.state.last_ai_result {
                    ui.label(
                        RichText::new(format!("{} nodes visited", result.nodes))
                            .size(12.0)
                            .color(TEXT_PRIMARY),
                    );
                    if self.state.settings.use_pruning {
                        ui.label(
                            RichText::new(format!("{} branches pruned", result.pruned))
                                .size(12.0)
                                .color(TEXT_SECONDARY),
                        );
                    }
                    ui.label(
                        RichText::new(format!("{} ms", result.time_ms))
                            .size(11.0)
                            .color(TEXT_MUTED),
                    );

                    if let Some(pos) = result.best_move {
                        let col = (b'A' + pos.col) as char;
                        let row = 3 - pos.row;
                        ui.add_space(4.0);
                        ui.label(
                            RichText::new(format!("→ {}{}", col, row))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                } else {
                    ui.label(RichText::new("Waiting for AI...").size(10.0).color(TEXT_MUTED));
                }
            });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, result: &GameResult) {
        let (headline, accent) = match result.winner {
            Some(mark) if mark == self.state.settings.human_mark => {
                (format!("{} WINS - THAT'S YOU!", mark.label()), STATUS_OK)
            }
            Some(Mark::X) => ("X (AI) WINS".to_string(), X_COLOR),
            Some(mark) => (format!("{} (AI) WINS", mark.label()), O_COLOR),
            None => ("IT'S A DRAW".to_string(), TEXT_SECONDARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 58, 50))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("GAME OVER").size(10.0).color(TEXT_MUTED));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(16.0).strong().color(accent));
                    ui.add_space(10.0);

                    ui.horizontal(|ui| {
                        ui.add_space(ui.available_width() / 2.0 - 90.0);
                        if ui.button("Play Again").clicked() {
                            self.state.reset();
                        }
                        if ui.button("Options...").clicked() {
                            self.pending = Some(self.state.settings);
                        }
                    });
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new(msg).size(11.0).color(STATUS_BUSY));
        });
    }

    /// Render the central board panel
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                let winning_line = self.state.game_over.and_then(|r| r.winning_line);

                let clicked = self.board_view.show(
                    ui,
                    &self.state.board,
                    self.state.current_turn,
                    self.state.last_move,
                    winning_line,
                    self.state.game_over.is_some(),
                    self.state.is_human_turn() && !self.state.is_ai_thinking(),
                );

                if let Some(pos) = clicked {
                    if let Err(msg) = self.state.try_place_mark(pos) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // N - New game
            if i.key_pressed(egui::Key::N) {
                self.state.reset();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Setup screen replaces the whole UI until the game starts
        if self.pending.is_some() {
            self.render_setup(ctx);
            return;
        }

        // Handle keyboard input
        self.handle_input(ctx);

        // Check AI result
        self.state.check_ai_result();

        // Start AI thinking if needed
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() && self.state.game_over.is_none()
        {
            self.state.start_ai_thinking();
        }

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);

        // Keep repainting while the AI reply is pending
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
