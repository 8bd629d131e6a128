//! Main application for the Tic-Tac-Toe GUI

use eframe::egui;
use egui::{CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel};

use super::board_view::BoardView;
use super::game_state::{GameState, RoundOutcome};
use super::theme::*;
use crate::Mark;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl Default for TicTacToeApp {
    fn default() -> Self {
        Self {
            state: GameState::new(),
            board_view: BoardView::default(),
            show_debug: false,
        }
    }
}

impl TicTacToeApp {
    /// Create a new app
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self::default()
    }

    /// Render the top menu bar
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::menu::bar(ui, |ui| {
                ui.menu_button("Game", |ui| {
                    if ui.button("New Round (N)").clicked() {
                        self.state.new_round();
                        ui.close_menu();
                    }
                    if ui.button("Reset Scores").clicked() {
                        self.state.reset_scores();
                        ui.close_menu();
                    }
                });

                ui.menu_button("View", |ui| {
                    ui.checkbox(&mut self.show_debug, "Debug Panel (D)");
                });

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if !self.state.awaiting_first_choice {
                        ui.label(format!(
                            "You: {}  •  Computer: {}",
                            self.state.human, self.state.computer
                        ));
                    }
                });
            });
        });
    }

    /// Render the side panel with game info
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG))
            .show(ctx, |ui| {
                ui.add_space(12.0);

                self.render_title_card(ui);
                ui.add_space(12.0);

                self.render_turn_card(ui);
                ui.add_space(10.0);

                self.render_score_card(ui);
                ui.add_space(10.0);

                self.render_actions_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(outcome) = self.state.round_over {
                    ui.add_space(10.0);
                    self.render_game_over_card(ui, outcome);
                }

                if let Some(msg) = self.state.message.clone() {
                    ui.add_space(10.0);
                    self.render_message_card(ui, &msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    /// Render title card
    fn render_title_card(&self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("X").size(20.0).strong().color(X_COLOR));
            ui.label(RichText::new("O").size(20.0).strong().color(O_COLOR));
            ui.add_space(4.0);
            ui.label(
                RichText::new("TIC-TAC-TOE")
                    .size(20.0)
                    .strong()
                    .color(TEXT_PRIMARY),
            );
        });
        ui.horizontal(|ui| {
            ui.add_space(8.0);
            ui.label(RichText::new("minimax opponent").size(11.0).color(TEXT_MUTED));
        });
    }

    /// Render turn indicator card
    fn render_turn_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("TURN").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let to_move = self.state.board.to_move();
            let (glyph, color) = match to_move {
                Mark::X => ("X", X_COLOR),
                _ => ("O", O_COLOR),
            };

            ui.horizontal(|ui| {
                ui.label(RichText::new(glyph).size(28.0).strong().color(color));
                ui.add_space(10.0);

                let status = if self.state.awaiting_first_choice {
                    ("Choose who starts", STATUS_WAIT)
                } else if self.state.round_over.is_some() {
                    ("Round over", WIN_HIGHLIGHT)
                } else if self.state.is_ai_thinking() {
                    ("Computer thinking...", STATUS_WAIT)
                } else if self.state.is_human_turn() {
                    ("Your turn", STATUS_OK)
                } else {
                    ("Computer's turn", TEXT_SECONDARY)
                };
                ui.label(RichText::new(status.0).size(12.0).color(status.1));
            });
        });
    }

    /// Render scoreboard card
    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORE").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            let rows = [
                ("You", self.state.scores.human, STATUS_OK),
                ("Computer", self.state.scores.computer, X_COLOR),
                ("Ties", self.state.scores.ties, TEXT_SECONDARY),
            ];
            for (label, value, color) in rows {
                ui.horizontal(|ui| {
                    ui.label(RichText::new(label).size(13.0).color(TEXT_PRIMARY));
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.label(RichText::new(format!("{}", value)).size(16.0).strong().color(color));
                    });
                });
            }
        });
    }

    /// Render actions card
    fn render_actions_card(&mut self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("ACTIONS").size(10.0).color(TEXT_MUTED));
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui.button("New Round").clicked() {
                    self.state.new_round();
                }
                if ui.button("Reset Scores").clicked() {
                    self.state.reset_scores();
                }
            });
        });
    }

    /// Render debug card with the last search diagnostics
    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SEARCH DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            if let Some((search, elapsed)) = &self.state.last_search {
                let verdict = match search.value {
                    1 => "X wins with best play",
                    -1 => "O wins with best play",
                    _ => "Tie with best play",
                };
                ui.label(RichText::new(verdict).size(11.0).strong().color(STATUS_OK));
                ui.label(
                    RichText::new(format!("value {}  •  {} nodes", search.value, search.nodes))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                ui.label(
                    RichText::new(format!("{:.2}ms", elapsed.as_secs_f64() * 1000.0))
                        .size(10.0)
                        .color(TEXT_SECONDARY),
                );
                if let Some(pos) = search.best_move {
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new(format!("→ row {} col {}", pos.row, pos.col))
                            .size(12.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                }
            } else {
                ui.label(RichText::new("No search yet").size(10.0).color(TEXT_MUTED));
            }
        });
    }

    /// Render game over card
    fn render_game_over_card(&mut self, ui: &mut egui::Ui, outcome: RoundOutcome) {
        let (headline, color) = match outcome {
            RoundOutcome::HumanWin => ("You win!", STATUS_OK),
            RoundOutcome::ComputerWin => ("Computer wins!", X_COLOR),
            RoundOutcome::Tie => ("It's a tie!", TEXT_SECONDARY),
        };

        Frame::new()
            .fill(egui::Color32::from_rgb(45, 60, 55))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(14.0)
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("ROUND OVER").size(11.0).color(TEXT_MUTED));
                    ui.add_space(6.0);
                    ui.label(RichText::new(headline).size(18.0).strong().color(color));
                    ui.add_space(10.0);
                    if ui.button("New Round").clicked() {
                        self.state.new_round();
                    }
                });
            });
    }

    /// Render status message card
    fn render_message_card(&self, ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(egui::Color32::from_rgb(80, 60, 30))
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the "who goes first" prompt as a centered window
    fn render_first_move_prompt(&mut self, ctx: &Context) {
        if !self.state.awaiting_first_choice {
            return;
        }

        egui::Window::new("First Move")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label("Do you want to play first?");
                ui.add_space(8.0);
                ui.horizontal(|ui| {
                    if ui.button("Yes, I start (X)").clicked() {
                        self.state.choose_first(true);
                    }
                    if ui.button("No, computer starts").clicked() {
                        self.state.choose_first(false);
                    }
                });
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default().show(ctx, |ui| {
            let interactive = self.state.is_human_turn() && !self.state.is_ai_thinking();

            let clicked = self.board_view.show(
                ui,
                &self.state.board,
                self.state.board.to_move(),
                self.state.last_move,
                self.state.winning_line,
                interactive,
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

            // N - New round
            if i.key_pressed(egui::Key::N) {
                self.state.new_round();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        // Handle keyboard input
        self.handle_input(ctx);

        // Pick up a finished computer move
        self.state.check_ai_result();

        // Start the search when it is the computer's turn
        if self.state.is_ai_turn() && !self.state.is_ai_thinking() {
            self.state.start_ai_thinking();
        }

        // Render UI
        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_first_move_prompt(ctx);

        // Keep polling while the search is in flight
        if self.state.is_ai_thinking() {
            ctx.request_repaint();
        }
    }
}
