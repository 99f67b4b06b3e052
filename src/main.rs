mod display;

use std::collections::HashMap;
use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers, KeyboardEnhancementFlags, MouseEvent, MouseEventKind,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::ThreadRng;
use rand::thread_rng;
use thiserror::Error;

use zombie_shooter::assets::Assets;
use zombie_shooter::audio::{AudioSink, SoundCue};
use zombie_shooter::consts::FRAME_INTERVAL;
use zombie_shooter::driver::{FrameDriver, LoopControl};
use zombie_shooter::entities::Canvas;
use zombie_shooter::input::InputSnapshot;
use zombie_shooter::render::render;

use display::{Layout, TerminalSurface, MIN_COLS, MIN_ROWS};

const LOG_FILE_NAME: &str = "zombie_shooter.log";

/// A key is considered "held" if its last press/repeat event arrived within
/// this many frames. Covers terminals that don't emit key-release events:
/// the OS key-repeat rate is ≥ 15 Hz, so a window of 8 frames (≈128 ms at
/// 60 FPS) is always refreshed before expiry.
const HOLD_WINDOW: u64 = 8;

#[derive(Debug, Error)]
enum AppError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("terminal is {cols}x{rows}, at least {}x{} is needed", MIN_COLS, MIN_ROWS)]
    TerminalTooSmall { cols: u16, rows: u16 },
}

/// Returns true if `key` was seen within the last `HOLD_WINDOW` frames.
fn is_held(key_frame: &HashMap<KeyCode, u64>, key: &KeyCode, frame: u64) -> bool {
    key_frame
        .get(key)
        .map(|&last| frame.saturating_sub(last) <= HOLD_WINDOW)
        .unwrap_or(false)
}

fn any_held(key_frame: &HashMap<KeyCode, u64>, keys: &[KeyCode], frame: u64) -> bool {
    keys.iter().any(|k| is_held(key_frame, k, frame))
}

const UP_KEYS: [KeyCode; 3] = [KeyCode::Up, KeyCode::Char('w'), KeyCode::Char('W')];
const DOWN_KEYS: [KeyCode; 3] = [KeyCode::Down, KeyCode::Char('s'), KeyCode::Char('S')];
const LEFT_KEYS: [KeyCode; 3] = [KeyCode::Left, KeyCode::Char('a'), KeyCode::Char('A')];
const RIGHT_KEYS: [KeyCode; 3] = [KeyCode::Right, KeyCode::Char('d'), KeyCode::Char('D')];
const FIRE_KEYS: [KeyCode; 3] = [KeyCode::Char(' '), KeyCode::Char('f'), KeyCode::Char('F')];

fn keyboard_snapshot(key_frame: &HashMap<KeyCode, u64>, frame: u64) -> InputSnapshot {
    InputSnapshot {
        up: any_held(key_frame, &UP_KEYS, frame),
        down: any_held(key_frame, &DOWN_KEYS, frame),
        left: any_held(key_frame, &LEFT_KEYS, frame),
        right: any_held(key_frame, &RIGHT_KEYS, frame),
        fire: any_held(key_frame, &FIRE_KEYS, frame),
    }
}

// ── Audio ─────────────────────────────────────────────────────────────────────

/// A terminal has no mixer; cues only go to the log.
struct CueLog;

impl AudioSink for CueLog {
    fn play(&mut self, cue: SoundCue) {
        log::debug!("sound cue: {:?}", cue);
    }
}

// ── Viewport ──────────────────────────────────────────────────────────────────

/// Terminal size plus the fullscreen toggle; decides which canvas is in use.
struct Viewport {
    cols: u16,
    rows: u16,
    fullscreen: bool,
}

impl Viewport {
    fn canvas(&self) -> Canvas {
        if self.fullscreen {
            Layout::viewport_canvas(self.cols, self.rows)
        } else {
            Canvas::default()
        }
    }

    /// Push the current canvas and layout into the driver.
    fn apply(&self, driver: &mut FrameDriver) -> Layout {
        driver.set_canvas(self.canvas());
        let layout = Layout::fit(&driver.state().canvas, self.cols, self.rows);
        display::resolve_assets(&layout, driver.assets_mut());
        layout
    }
}

// ── Menu ──────────────────────────────────────────────────────────────────────

enum MenuResult {
    Start,
    Quit,
}

fn show_menu<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    viewport: &mut Viewport,
) -> std::io::Result<MenuResult> {
    display::draw_menu(out, viewport.cols, viewport.rows)?;

    // Block until the user makes a choice
    loop {
        match rx.recv() {
            Ok(Event::Key(KeyEvent {
                code,
                kind: KeyEventKind::Press,
                modifiers,
                ..
            })) => match code {
                KeyCode::Enter | KeyCode::Char(' ') => return Ok(MenuResult::Start),
                KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                    return Ok(MenuResult::Quit);
                }
                KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                    return Ok(MenuResult::Quit);
                }
                _ => {}
            },
            Ok(Event::Resize(cols, rows)) => {
                viewport.cols = cols;
                viewport.rows = rows;
                display::draw_menu(out, cols, rows)?;
            }
            Ok(_) => {}
            Err(_) => return Ok(MenuResult::Quit),
        }
    }
}

// ── Game loop ─────────────────────────────────────────────────────────────────

enum GameExit {
    Quit,
    Menu,
}

/// Drive one session until the player quits or returns to the menu.
///
/// Input model: a `key_frame` map records the frame number of the last
/// press/repeat event for every key. Each frame the keys that are still
/// "fresh" are folded into one `InputSnapshot`, merged with any click on the
/// playfield (treated as a touch), and handed to the frame driver.
fn game_loop<W: Write>(
    out: &mut W,
    driver: &mut FrameDriver,
    rx: &mpsc::Receiver<Event>,
    viewport: &mut Viewport,
    rng: &mut ThreadRng,
    audio: &mut CueLog,
) -> std::io::Result<GameExit> {
    let mut key_frame: HashMap<KeyCode, u64> = HashMap::new();
    let mut layout = viewport.apply(driver);
    let mut frame: u64 = 0;
    // The game-over screen is only redrawn when something changes
    let mut overlay_dirty = true;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        let mut fire_pressed = false;
        let mut touch = InputSnapshot::default();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            match ev {
                Event::Key(KeyEvent {
                    code,
                    kind,
                    modifiers,
                    ..
                }) => match kind {
                    KeyEventKind::Press => {
                        key_frame.insert(code.clone(), frame);
                        match code {
                            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                                return Ok(GameExit::Quit);
                            }
                            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                                return Ok(GameExit::Quit);
                            }
                            KeyCode::Char('r') | KeyCode::Char('R') if driver.state().is_over() => {
                                driver.start(rng, audio);
                                key_frame.clear();
                            }
                            KeyCode::Char('m') | KeyCode::Char('M') if driver.state().is_over() => {
                                return Ok(GameExit::Menu);
                            }
                            KeyCode::Tab => {
                                viewport.fullscreen = !viewport.fullscreen;
                                layout = viewport.apply(driver);
                                overlay_dirty = true;
                            }
                            c if FIRE_KEYS.contains(&c) => fire_pressed = true,
                            _ => {}
                        }
                    }
                    // Repeat: refresh timestamp so key stays "held"
                    KeyEventKind::Repeat => {
                        key_frame.insert(code.clone(), frame);
                    }
                    // Release: remove key immediately (keyboard-enhancement path)
                    KeyEventKind::Release => {
                        key_frame.remove(&code);
                    }
                },
                Event::Mouse(MouseEvent {
                    kind: MouseEventKind::Down(_),
                    column,
                    row,
                    ..
                }) => {
                    if let Some((x, y)) = layout.to_canvas(column, row) {
                        touch = InputSnapshot::from_touch(x, y, &driver.state().canvas);
                    }
                }
                Event::Resize(cols, rows) => {
                    viewport.cols = cols;
                    viewport.rows = rows;
                    layout = viewport.apply(driver);
                    overlay_dirty = true;
                }
                _ => {}
            }
        }

        if driver.state().is_running() {
            let mut input = keyboard_snapshot(&key_frame, frame).merge(touch);
            input.fire |= fire_pressed;

            let mut surface = TerminalSurface::new(out, layout);
            if driver.step(&input, Instant::now(), rng, &mut surface, audio)?
                == LoopControl::Halt
            {
                overlay_dirty = true;
            }
        }

        if driver.state().is_over() && overlay_dirty {
            let mut surface = TerminalSurface::new(out, layout);
            render(&mut surface, driver.state(), driver.assets())?;
            display::draw_game_over(out, driver.state(), &layout)?;
            overlay_dirty = false;
        }

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME_INTERVAL {
            thread::sleep(FRAME_INTERVAL - elapsed);
        }
    }
}

// ── Logging ───────────────────────────────────────────────────────────────────

/// Log to a file: stderr shares the terminal with the game screen.
fn init_logging() -> std::io::Result<PathBuf> {
    let path = std::env::temp_dir().join(LOG_FILE_NAME);
    let file = File::create(&path)?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .write_style(env_logger::WriteStyle::Never)
        .init();
    Ok(path)
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    let logging = init_logging();
    if let Ok(path) = &logging {
        log::info!("zombie_shooter starting, logging to {}", path.display());
    }

    let result = run_in_terminal();

    if let Err(e) = &logging {
        eprintln!("logging disabled: could not create log file: {}", e);
    }
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run_in_terminal() -> Result<(), AppError> {
    let (cols, rows) = terminal::size()?;
    if cols < MIN_COLS || rows < MIN_ROWS {
        return Err(AppError::TerminalTooSmall { cols, rows });
    }

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();
    if !keyboard_enhanced {
        log::warn!("terminal does not report key releases; using key-repeat hold window");
    }

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break; // receiver dropped → program exiting
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx, Viewport { cols, rows, fullscreen: false });

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.map_err(AppError::from)
}

fn run<W: Write>(
    out: &mut W,
    rx: &mpsc::Receiver<Event>,
    mut viewport: Viewport,
) -> std::io::Result<()> {
    let mut rng = thread_rng();
    let mut audio = CueLog;
    let mut driver = FrameDriver::new(viewport.canvas(), Assets::pending());

    loop {
        match show_menu(out, rx, &mut viewport)? {
            MenuResult::Quit => break,
            MenuResult::Start => {
                driver.start(&mut rng, &mut audio);
                match game_loop(out, &mut driver, rx, &mut viewport, &mut rng, &mut audio)? {
                    GameExit::Quit => break,
                    GameExit::Menu => {}
                }
            }
        }
    }
    Ok(())
}
