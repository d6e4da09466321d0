use arboard::Clipboard;
use macroquad::prelude::{
    clear_background, draw_line, draw_rectangle, draw_rectangle_lines, draw_text, is_key_pressed,
    next_frame, screen_height, screen_width, Color, KeyCode, BLUE, RED, WHITE, YELLOW,
};
use macroquad::Window;
use rover_sim::action_log::ActionLog;
use rover_sim::config::{Config, LoggingConfig};
use rover_sim::geometry::Neighbors;
use rover_sim::layout::{self, Bounds};
use rover_sim::{logging, Heading, Position, Rover, RoverResult};

const USAGE: &str = "Usage: rover-sim [--run <COMMANDS> | --plan]";

/// Session state shared by the headless modes and the viewer
struct Session {
    rover: Rover,
    journal: ActionLog,
}

impl Session {
    fn new(rover: Rover) -> Self {
        let mut journal = ActionLog::new();
        if let Some(position) = rover.position() {
            journal.record_create(&position);
        }
        Session { rover, journal }
    }

    fn send(&mut self, commands: &str) -> RoverResult<Position> {
        let result = self.rover.move_by(commands);
        self.journal.record_move(commands, &result);
        result
    }

    /// Generate a command and replay it; returns the command and where it ended
    fn plan_and_replay(&mut self) -> RoverResult<(String, Position)> {
        let command = self.generate()?;
        let position = self.send(&command)?;
        Ok((command, position))
    }

    /// Generate a command and report where it would land, without moving
    fn plan_preview(&mut self) -> RoverResult<(String, Position)> {
        let command = self.generate()?;
        let position = self.rover.preview(&command)?;
        Ok((command, position))
    }

    fn generate(&mut self) -> RoverResult<String> {
        let generated = self.rover.generate_command();
        self.journal.record_generate(&generated);
        generated
    }

    fn finish(&self, config: &LoggingConfig) {
        log::info!("{}", self.journal.summary().replace('\n', "; "));
        if !config.enable_action_log {
            return;
        }
        match self.journal.save_to_file(&config.action_log_path) {
            Ok(()) => log::info!("Action log saved to {}", config.action_log_path),
            Err(e) => log::error!("Failed to save action log: {}", e),
        }
    }
}

/// Run a headless mode; returns the process exit code
fn run_headless(session: &mut Session, args: &[String]) -> i32 {
    let outcome = match args[1].as_str() {
        "--run" => {
            let Some(commands) = args.get(2) else {
                eprintln!("{}", USAGE);
                return 2;
            };
            session.send(commands).map(|position| println!("{}", position))
        }
        "--plan" => session.plan_and_replay().map(|(command, position)| {
            println!("{}", command);
            println!("{}", position);
        }),
        _ => {
            eprintln!("{}", USAGE);
            return 2;
        }
    };

    match outcome {
        Ok(()) => 0,
        Err(e) => {
            eprintln!("{}", e);
            1
        }
    }
}

/// Visualization state
struct Viewer {
    session: Session,
    status: String,
    cell_size: f32,
    background: Color,
    show_neighbors: bool,
    /// Previewed command and the pose it lands on
    pending_plan: Option<(String, Position)>,
}

impl Viewer {
    fn new(session: Session, config: &Config) -> Self {
        let status = match session.rover.position() {
            Some(position) => format!("Rover at {}", position),
            None => "Rover not created".to_string(),
        };

        Viewer {
            session,
            status,
            cell_size: config.visual.cell_size,
            background: Color::from_rgba(
                config.visual.background_r,
                config.visual.background_g,
                config.visual.background_b,
                255,
            ),
            show_neighbors: config.visual.show_neighbors,
            pending_plan: None,
        }
    }

    fn handle_keys(&mut self) {
        for (key, command) in [
            (KeyCode::F, "F"),
            (KeyCode::B, "B"),
            (KeyCode::L, "L"),
            (KeyCode::R, "R"),
        ] {
            if is_key_pressed(key) {
                self.pending_plan = None;
                self.status = match self.session.send(command) {
                    Ok(position) => format!("{} -> {}", command, position),
                    Err(e) => format!("{} -> {}", command, e),
                };
            }
        }

        if is_key_pressed(KeyCode::P) {
            self.status = match self.session.plan_preview() {
                Ok((command, position)) => {
                    let status = format!("Preview {} -> {}", command, position);
                    self.pending_plan = Some((command, position));
                    status
                }
                Err(e) => format!("Plan failed: {}", e),
            };
        }

        if is_key_pressed(KeyCode::G) {
            let replayed = match self.pending_plan.take() {
                Some((command, _)) => {
                    self.session.send(&command).map(|position| (command, position))
                }
                None => self.session.plan_and_replay(),
            };
            self.status = match replayed {
                Ok((command, position)) => format!("Plan {} -> {}", command, position),
                Err(e) => format!("Plan failed: {}", e),
            };
        }

        if is_key_pressed(KeyCode::C) {
            self.copy_to_clipboard();
        }
    }

    /// Cells that fit on screen, centred on the rover
    fn visible_bounds(&self) -> Bounds {
        let center = self
            .session
            .rover
            .position()
            .unwrap_or(Position::new(0, 0, Heading::North));
        let cols = (screen_width() / self.cell_size) as i32 + 1;
        let rows = (screen_height() / self.cell_size) as i32 + 1;

        let min_x = center.x.saturating_sub(cols / 2);
        let max_y = center.y.saturating_add(rows / 2);
        Bounds::new(
            min_x,
            max_y.saturating_sub(rows - 1),
            min_x.saturating_add(cols - 1),
            max_y,
        )
    }

    fn copy_to_clipboard(&mut self) {
        let rover = self.session.rover.position();
        let obstacles = self.session.rover.obstacles();
        let text = layout::render(obstacles, rover.as_ref(), Bounds::enclosing(obstacles, rover.as_ref()));

        self.status = match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text)) {
            Ok(()) => {
                // Keep clipboard alive for a moment so clipboard managers can capture it
                std::thread::sleep(std::time::Duration::from_millis(100));
                "Layout copied to clipboard".to_string()
            }
            Err(e) => {
                log::error!("Failed to copy to clipboard: {}", e);
                format!("Clipboard error: {}", e)
            }
        };
    }

    fn draw(&self) {
        clear_background(self.background);

        let bounds = self.visible_bounds();
        let rover = self.session.rover.position();
        let obstacles = self.session.rover.obstacles();
        let to_screen = |x: i32, y: i32| {
            (
                (x - bounds.min_x) as f32 * self.cell_size,
                (bounds.max_y - y) as f32 * self.cell_size,
            )
        };

        for y in bounds.min_y..=bounds.max_y {
            for x in bounds.min_x..=bounds.max_x {
                let (px, py) = to_screen(x, y);
                let color = if obstacles.is_blocked(x, y) {
                    RED
                } else {
                    Color::from_rgba(60, 60, 60, 255)
                };
                draw_rectangle(px, py, self.cell_size - 1.0, self.cell_size - 1.0, color);
            }
        }

        if let Some(position) = rover {
            if self.show_neighbors {
                for neighbor in Neighbors::of(&position).ahead().into_iter().flatten() {
                    if obstacles.is_obstacle(&neighbor) {
                        continue;
                    }
                    let color = if obstacles.is_cave(&neighbor) {
                        Color::from_rgba(200, 140, 40, 255) // Cave
                    } else {
                        Color::from_rgba(100, 200, 100, 255) // Open
                    };
                    let (px, py) = to_screen(neighbor.x, neighbor.y);
                    draw_rectangle(px, py, self.cell_size - 1.0, self.cell_size - 1.0, color);
                }
            }

            if let Some((_, target)) = &self.pending_plan {
                let (tx, ty) = to_screen(target.x, target.y);
                let size = self.cell_size - 1.0;
                draw_rectangle_lines(tx, ty, size, size, 3.0, YELLOW);
            }

            let (px, py) = to_screen(position.x, position.y);
            draw_rectangle(px, py, self.cell_size - 1.0, self.cell_size - 1.0, BLUE);

            let half = self.cell_size / 2.0;
            let (dx, dy) = match position.heading {
                Heading::North => (0.0, -half),
                Heading::East => (half, 0.0),
                Heading::South => (0.0, half),
                Heading::West => (-half, 0.0),
            };
            let (cx, cy) = (px + half, py + half);
            draw_line(cx, cy, cx + dx, cy + dy, 3.0, WHITE);
        }

        let info = [
            self.status.as_str(),
            "F/B: move  L/R: turn  P: preview plan  G: replay plan",
            "C: copy layout to clipboard  Esc: close window",
        ];
        for (i, line) in info.iter().enumerate() {
            draw_text(line, 10.0, 20.0 + i as f32 * 20.0, 20.0, WHITE);
        }
    }
}

async fn run_viewer(mut viewer: Viewer, logging_config: LoggingConfig) {
    loop {
        viewer.handle_keys();

        // Close window on Escape
        if is_key_pressed(KeyCode::Escape) {
            break;
        }

        viewer.draw();

        next_frame().await
    }

    viewer.session.finish(&logging_config);
}

fn main() {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Warning: {}", e);
        eprintln!("Using default configuration");
        Config::default()
    });
    logging::init(&config.logging);

    let rover = match config.build_rover() {
        Ok(rover) => rover,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };
    let mut session = Session::new(rover);

    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        let code = run_headless(&mut session, &args);
        session.finish(&config.logging);
        std::process::exit(code);
    }

    let viewer = Viewer::new(session, &config);
    Window::new("Rover - Obstacle Grid", run_viewer(viewer, config.logging));
}
