use std::time::{Duration, Instant};

use snake_engine::{Board, MoveOutcome, log, log_debug};

use crate::agent::{Agent, create_agent};
use crate::colors::tile_color;
use crate::config::Config;
use crate::game::start_board;
use crate::headless::describe_death;
use crate::input::pressed_command;

pub struct SnakeApp {
    config: Config,
    board: Board,
    agent: Option<Box<dyn Agent>>,
    last_tick: Instant,
    last_outcome: Option<MoveOutcome>,
    error: Option<String>,
}

impl SnakeApp {
    pub fn new(config: Config, board: Board) -> Self {
        let agent = create_agent(config.controller, board.seed());
        Self {
            config,
            board,
            agent,
            last_tick: Instant::now(),
            last_outcome: None,
            error: None,
        }
    }

    fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.config.tick_interval_ms)
    }

    /// New game on a fresh random seed, so a fixed config seed only pins the
    /// first game.
    fn restart(&mut self) {
        match start_board(self.config.board, None) {
            Ok(board) => {
                log!("New game with seed {}", board.seed());
                self.agent = create_agent(self.config.controller, board.seed());
                self.board = board;
                self.last_outcome = None;
                self.error = None;
            }
            Err(err) => self.error = Some(err.to_string()),
        }
    }

    fn handle_input(&mut self, ctx: &egui::Context) {
        let (pressed, restart) =
            ctx.input(|i| (pressed_command(i), i.key_pressed(egui::Key::R)));

        if restart && !self.board.is_alive() {
            self.restart();
            return;
        }

        let interval = self.tick_interval();
        let command = match self.agent.as_mut() {
            Some(agent) => {
                if !self.board.is_alive() || self.last_tick.elapsed() < interval {
                    return;
                }
                self.last_tick = Instant::now();
                agent.decide(&self.board)
            }
            None => match pressed {
                Some(command) => command,
                None => return,
            },
        };

        let outcome = self.board.apply(command);
        log_debug!("{:?} -> {:?}", command, outcome);
        self.last_outcome = Some(outcome);
    }

    fn render_board(&self, ui: &mut egui::Ui) {
        let grid = self.board.state();
        let tile = self.config.tile_size;
        let size = egui::vec2(grid.width() as f32 * tile, grid.height() as f32 * tile);
        let (rect, _) = ui.allocate_exact_size(size, egui::Sense::hover());
        let painter = ui.painter();

        for (row, cells) in grid.rows().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                let min = rect.min + egui::vec2(col as f32 * tile, row as f32 * tile);
                let tile_rect = egui::Rect::from_min_size(min, egui::vec2(tile, tile));
                painter.rect_filled(tile_rect.shrink(1.0), 3.0, tile_color(cell));
            }
        }
    }

    fn render_status(&self, ui: &mut egui::Ui) {
        ui.heading(format!(
            "Length: {}   Moves: {}",
            self.board.snake_len(),
            self.board.moves_made()
        ));

        if let Some(error) = &self.error {
            ui.label(egui::RichText::new(error).color(egui::Color32::RED));
        }

        match self.board.death_reason() {
            Some(reason) => {
                ui.label(
                    egui::RichText::new(format!("Game Over: the snake {}", describe_death(reason)))
                        .color(egui::Color32::RED)
                        .size(20.0),
                );
                ui.label("Press R to play again");
            }
            None => {
                let hint = match &self.agent {
                    Some(agent) => format!("{} agent playing", agent.name()),
                    None => "Up/W: forward, Left/A: turn left, Right/D: turn right".to_string(),
                };
                ui.label(hint);
            }
        }

        if let Some(outcome) = self.last_outcome {
            ui.label(format!("Last move: {:?}", outcome));
        }
    }
}

impl eframe::App for SnakeApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                self.render_status(ui);
                ui.add_space(10.0);
                self.render_board(ui);
            });
        });

        if self.agent.is_some() && self.board.is_alive() {
            ctx.request_repaint_after(self.tick_interval());
        }
    }
}

pub fn run(config: Config, board: Board) -> Result<(), eframe::Error> {
    let grid = board.state();
    let width = grid.width() as f32 * config.tile_size + 40.0;
    let height = grid.height() as f32 * config.tile_size + 140.0;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([width, height])
            .with_title(format!("Snake - seed {}", board.seed())),
        ..Default::default()
    };

    eframe::run_native(
        "Snake",
        options,
        Box::new(|_cc| Ok(Box::new(SnakeApp::new(config, board)))),
    )
}
