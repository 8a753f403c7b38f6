//! The terminal user interface.

use crate::{args::Args, camera::Camera};
use anyhow::{Context, Result};
use crossterm::{
    cursor::{Hide, MoveTo, Show},
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    },
    execute, queue,
    style::{Attribute, Print, PrintStyledContent, SetAttribute, Stylize},
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use lifepad_lib::{resolve_cursor, Command, Coord, Direction, Session};
use log::{debug, error, info};
use std::{
    io::{self, Stdout, Write},
    time::{Duration, Instant},
};

/// How long to wait for input when paused.
const IDLE_POLL: Duration = Duration::from_millis(250);
const ZOOM_STEP: i32 = 10;
const ROTATE_STEP: i32 = 15;

const HELP: &str = "[enter] run [esc] pause [n] step [g] random [c] clear \
                    [1-7] pattern [p] stamp [ [ ] ] rotate pattern [wasd] move \
                    [q/e] zoom [r] rotate view [space] reset view [x] quit";

/// Terminal characters are about twice as tall as they are wide,
/// so one screen unit is two columns and one row.
fn screen_pos(col: u16, row: u16) -> (f64, f64) {
    ((col as f64 + 0.5) / 2.0, row as f64 + 0.5)
}

struct App {
    session: Session,
    camera: Camera,
    interval: Duration,
    last_step: Instant,
    /// Terminal size, `(columns, rows)`.
    size: (u16, u16),
    /// The cell under the mouse.
    cursor: Option<Coord>,
    /// Whether clicks stamp the selected pattern instead of drawing.
    stamping: bool,
    quit: bool,
}

impl App {
    fn new(session: Session, interval: Duration, size: (u16, u16)) -> Self {
        let mut app = App {
            session,
            camera: Camera::new((0.0, 0.0)),
            interval,
            last_step: Instant::now(),
            size,
            cursor: None,
            stamping: false,
            quit: false,
        };
        app.resize(size);
        app
    }

    /// Rows used by the world, between the top and bottom bars.
    fn world_rows(&self) -> u16 {
        self.size.1.saturating_sub(2)
    }

    fn resize(&mut self, size: (u16, u16)) {
        self.size = size;
        self.camera.viewport = (size.0 as f64 / 2.0, self.world_rows() as f64);
    }

    /// Finds the cell at a terminal position.
    fn cell_at(&self, col: u16, row: u16) -> Option<Coord> {
        if row == 0 || row > self.world_rows() {
            return None;
        }
        let (sx, sy) = screen_pos(col, row - 1);
        resolve_cursor(&self.camera, self.session.world(), sx, sy)
    }

    fn apply(&mut self, command: Command) {
        if let Err(e) = self.session.apply(command) {
            error!("{:?} failed: {}", command, e);
        }
    }

    /// Moves the preview to the cursor, or removes it.
    fn update_preview(&mut self) {
        match (self.stamping, self.cursor) {
            (true, Some(coord)) => self.apply(Command::PreviewPattern(coord)),
            _ => self.apply(Command::ClearPreview),
        }
    }

    fn on_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => self.quit = true,
            KeyCode::Char('x') => self.quit = true,
            KeyCode::Enter => {
                self.apply(Command::SetRunning(true));
                self.last_step = Instant::now();
            }
            KeyCode::Esc => self.apply(Command::SetRunning(false)),
            KeyCode::Char('n') => self.apply(Command::Step),
            KeyCode::Char('g') => self.apply(Command::Randomize),
            KeyCode::Char('c') => self.apply(Command::ClearWorld),
            KeyCode::Char(d @ '1'..='9') => {
                let index = d as usize - '1' as usize;
                if index < self.session.catalog().len() {
                    self.apply(Command::SelectPattern(index));
                    self.stamping = true;
                    self.update_preview();
                }
            }
            KeyCode::Char('p') => {
                self.stamping = !self.stamping;
                self.update_preview();
            }
            KeyCode::Char(']') => {
                self.apply(Command::CycleVariant(Direction::Forward));
                self.update_preview();
            }
            KeyCode::Char('[') => {
                self.apply(Command::CycleVariant(Direction::Backward));
                self.update_preview();
            }
            KeyCode::Left | KeyCode::Char('a') => self.camera.pan(-1.0, 0.0),
            KeyCode::Right | KeyCode::Char('d') => self.camera.pan(1.0, 0.0),
            KeyCode::Up | KeyCode::Char('w') => self.camera.pan(0.0, -1.0),
            KeyCode::Down | KeyCode::Char('s') => self.camera.pan(0.0, 1.0),
            KeyCode::Char('q') => self.camera.zoom(-ZOOM_STEP),
            KeyCode::Char('e') => self.camera.zoom(ZOOM_STEP),
            KeyCode::Char('r') => self.camera.rotate(ROTATE_STEP),
            KeyCode::Char(' ') => self.camera.reset(),
            _ => (),
        }
    }

    fn on_mouse(&mut self, mouse: MouseEvent) {
        self.cursor = self.cell_at(mouse.column, mouse.row);
        let erase = mouse.modifiers.contains(KeyModifiers::SHIFT);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) if self.stamping => {
                if let Some(coord) = self.cursor {
                    self.apply(Command::CommitPattern(coord));
                }
            }
            MouseEventKind::Down(MouseButton::Right) if self.stamping => {
                self.apply(Command::CycleVariant(Direction::Forward));
            }
            // Dragging only moves the preview in stamp mode.
            MouseEventKind::Drag(_) if self.stamping => (),
            MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(coord) = self.cursor {
                    self.apply(Command::ToggleCell(coord, !erase));
                }
            }
            MouseEventKind::Down(MouseButton::Right) | MouseEventKind::Drag(MouseButton::Right) => {
                if let Some(coord) = self.cursor {
                    self.apply(Command::ToggleCell(coord, false));
                }
            }
            _ => (),
        }
        self.update_preview();
    }

    /// Advances the world if it is running and the interval has passed.
    fn maybe_step(&mut self) {
        if self.session.is_running() && self.last_step.elapsed() >= self.interval {
            self.session.tick();
            self.last_step = Instant::now();
        }
    }

    /// How long to wait for the next event.
    fn timeout(&self) -> Duration {
        if self.session.is_running() {
            self.interval.saturating_sub(self.last_step.elapsed())
        } else {
            IDLE_POLL
        }
    }

    fn bar(out: &mut impl Write, row: u16, text: &str, width: u16) -> io::Result<()> {
        let text: String = text.chars().take(width as usize).collect();
        queue!(
            out,
            MoveTo(0, row),
            SetAttribute(Attribute::Reverse),
            Print(format!("{:width$}", text, width = width as usize)),
            SetAttribute(Attribute::Reset)
        )
    }

    fn draw(&self, out: &mut impl Write) -> io::Result<()> {
        let world = self.session.world();
        let (cols, rows) = self.size;
        for row in 0..self.world_rows() {
            queue!(out, MoveTo(0, row + 1))?;
            for col in 0..cols {
                let (sx, sy) = screen_pos(col, row);
                match resolve_cursor(&self.camera, world, sx, sy) {
                    None => queue!(out, Print(' '))?,
                    Some((x, y)) => {
                        let cell = world.get(x, y);
                        if cell.is_preview() {
                            queue!(out, PrintStyledContent('+'.dark_grey()))?
                        } else if cell.is_alive() {
                            queue!(out, PrintStyledContent('o'.magenta()))?
                        } else {
                            queue!(out, Print('.'))?
                        }
                    }
                }
            }
        }

        let pattern = self.session.pattern();
        let mut status = format!(
            "Gen: {}  Cells: {}  Pattern: {} ({}/{})  {}",
            world.generation(),
            world.population(),
            pattern.name,
            self.session.variant_index() + 1,
            pattern.variant_count(),
            if self.session.is_running() { "Running" } else { "Paused" },
        );
        if self.stamping {
            status.push_str("  Stamp");
        }
        if let Some((x, y)) = self.cursor {
            status.push_str(&format!("  Cursor: {}, {}", x, y));
        }
        status.push_str(&format!(
            "  Zoom: {:.2}  Rotation: {}",
            self.camera.scale(),
            self.camera.rotation()
        ));
        Self::bar(out, 0, &status, cols)?;
        if rows > 1 {
            Self::bar(out, rows - 1, HELP, cols)?;
        }
        out.flush()
    }
}

fn event_loop(app: &mut App, out: &mut Stdout) -> Result<()> {
    app.draw(out)?;
    while !app.quit {
        if event::poll(app.timeout())? {
            match event::read()? {
                Event::Key(key) => app.on_key(key),
                Event::Mouse(mouse) => app.on_mouse(mouse),
                Event::Resize(cols, rows) => {
                    app.resize((cols, rows));
                    execute!(out, terminal::Clear(terminal::ClearType::All))?;
                }
                _ => (),
            }
        }
        app.maybe_step();
        app.draw(out)?;
    }
    Ok(())
}

/// Runs the TUI until the user quits.
pub(crate) fn run(args: Args) -> Result<()> {
    let session = args.config.session().context("invalid configuration")?;
    let interval = Duration::from_millis(args.config.interval_ms);
    let size = terminal::size().context("failed to get terminal size")?;
    let mut app = App::new(session, interval, size);
    info!("Starting a {}x{} world", args.config.width, args.config.height);

    let mut stdout = io::stdout();
    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, Hide)
        .context("failed to enter alternate screen")?;

    let result = event_loop(&mut app, &mut stdout);

    if let Err(e) = execute!(stdout, Show, DisableMouseCapture, LeaveAlternateScreen) {
        error!("failed to leave alternate screen: {}", e);
    }
    if let Err(e) = terminal::disable_raw_mode() {
        error!("failed to disable raw mode: {}", e);
    }
    debug!("Quit at generation {}", app.session.world().generation());

    result?;
    print!("{}", app.session.world().rle());
    Ok(())
}
