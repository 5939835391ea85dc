use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use grid_snake::config::{DEFAULT_GRID, INPUT_POLL_INTERVAL, THEME_CANVAS};
use grid_snake::error::AppError;
use grid_snake::input::{GameInput, InputHandler};
use grid_snake::renderer;
use grid_snake::session::{Command, GameEvent, Session};
use grid_snake::terminal_runtime::TerminalSession;
use grid_snake::ui::hud::{HudInfo, SCORE_FLASH_DURATION};
use log::{LevelFilter, info};
use simplelog::{Config, WriteLogger};

#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    /// Seed the food sequence for a reproducible game.
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file. Nothing is logged when omitted.
    #[arg(long = "log-file", value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Log level used with --log-file.
    #[arg(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
}

/// Host-side view state fed by session events.
#[derive(Debug, Default)]
struct HostState {
    best_score: u32,
    /// `best_score` as it stood before the last game ended.
    previous_best: u32,
    score_changed_at: Option<Instant>,
    needs_redraw: bool,
}

impl HostState {
    fn observe(&mut self, event: GameEvent, now: Instant) {
        match event {
            GameEvent::ScoreChanged(score) => {
                self.score_changed_at = (score > 0).then_some(now);
                self.needs_redraw = true;
            }
            GameEvent::FrameReady => self.needs_redraw = true,
            GameEvent::GameOver { final_score } | GameEvent::Victory { final_score } => {
                self.previous_best = self.best_score;
                self.best_score = self.best_score.max(final_score);
                self.needs_redraw = true;
            }
        }
    }

    /// Whether the next loop iteration should draw. Keeps drawing while the
    /// score highlight is active, plus one frame to clear it.
    fn wants_frame(&mut self, now: Instant) -> bool {
        match self.score_changed_at {
            Some(at) if now.saturating_duration_since(at) >= SCORE_FLASH_DURATION => {
                self.score_changed_at = None;
                true
            }
            Some(_) => true,
            None => self.needs_redraw,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("grid-snake: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    if let Some(path) = &cli.log_file {
        WriteLogger::init(cli.log_level, Config::default(), File::create(path)?)?;
    }

    let mut session = match cli.seed {
        Some(seed) => Session::with_seed(DEFAULT_GRID, seed)?,
        None => Session::new(DEFAULT_GRID)?,
    };
    info!(
        "starting on {}x{} grid, seed {:?}",
        DEFAULT_GRID.width, DEFAULT_GRID.height, cli.seed
    );

    let mut terminal = TerminalSession::enter()?;
    let mut input = InputHandler::new();
    let mut host = HostState {
        needs_redraw: true,
        ..HostState::default()
    };
    let mut events = Vec::new();

    loop {
        let now = Instant::now();
        if host.wants_frame(now) | input.take_resized() {
            let hud_info = HudInfo {
                best_score: host.best_score,
                previous_best: host.previous_best,
                theme: &THEME_CANVAS,
                score_changed_at: host.score_changed_at,
                now,
            };
            terminal
                .terminal_mut()
                .draw(|frame| renderer::render(frame, session.state(), hud_info))?;
            host.needs_redraw = false;
        }

        let timeout = session
            .time_until_tick(now)
            .map_or(INPUT_POLL_INTERVAL, |due| due.min(INPUT_POLL_INTERVAL));
        if let Some(game_input) = input.poll_input(timeout)? {
            if game_input == GameInput::Quit {
                break;
            }
            if let Some(command) = Command::from_input(game_input) {
                session.apply(command, Instant::now(), &mut events);
            }
        }

        let now = Instant::now();
        session.poll(now, &mut events);
        for event in events.drain(..) {
            host.observe(event, now);
        }
    }

    info!("quit with best score {}", host.best_score);
    Ok(())
}
