/// Terminal front end: frame loop, keyboard input and pacing
use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{self},
};
use spin3d_core::{Config, Demo, Direction, Keys, Tick, Variant, Xorshift64};
use std::io::{stdout, Stdout, Write};
use std::time::{Duration, Instant};

pub mod renderer;

pub use renderer::TerminalSurface;

/// Map a key to the direction it turns the cube.
pub fn direction_for(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Up | KeyCode::Char('w') => Some(Direction::Up),
        KeyCode::Down | KeyCode::Char('s') => Some(Direction::Down),
        KeyCode::Left | KeyCode::Char('a') => Some(Direction::Left),
        KeyCode::Right | KeyCode::Char('d') => Some(Direction::Right),
        _ => None,
    }
}

/// Whether a key event is the quit signal (q, Esc or Ctrl-C).
pub fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Puts the terminal back into cooked mode on the main screen when dropped,
/// including while unwinding from a panic.
struct TerminalGuard<W: Write> {
    out: W,
}

impl<W: Write> Drop for TerminalGuard<W> {
    fn drop(&mut self) {
        if let Err(err) = terminal::disable_raw_mode() {
            log::warn!("failed to disable raw mode: {err}");
        }
        if let Err(err) = execute!(self.out, terminal::LeaveAlternateScreen, cursor::Show) {
            log::warn!("failed to leave alternate screen: {err}");
        }
    }
}

/// Main application struct for terminal rendering
pub struct TerminalApp {
    config: Config,
    demo: Demo,
    surface: TerminalSurface<Stdout>,
    running: bool,
    frame_count: u64,
}

impl TerminalApp {
    pub fn new(variant: Variant) -> Result<Self> {
        let (columns, rows) = terminal::size().context("failed to query terminal size")?;
        let config = variant.config();
        let fitted = config.fit_to(columns as u32, rows as u32 * 2);
        log::info!(
            "starting {variant} demo on a {columns}x{rows} terminal ({}x{} pixels, fov {:.1})",
            fitted.width,
            fitted.height,
            fitted.fov
        );

        Ok(Self {
            demo: Demo::new(variant, &fitted, Xorshift64::from_time())?,
            surface: TerminalSurface::new(columns, rows, stdout()),
            config,
            running: true,
            frame_count: 0,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        let guard = TerminalGuard { out: stdout() };
        execute!(
            stdout(),
            terminal::EnterAlternateScreen,
            terminal::SetTitle(&self.config.title),
            cursor::Hide
        )?;

        let result = self.main_loop();
        drop(guard);

        log::info!("quit after {} frames", self.frame_count);
        result
    }

    fn main_loop(&mut self) -> Result<()> {
        let target_frame_time = self.config.tick_interval();

        self.demo.draw(&mut self.surface)?;
        self.frame_count += 1;

        while self.running {
            let frame_start = Instant::now();

            // Handle input
            let keys = self.poll_input()?;
            if !self.running {
                break;
            }

            // Update and render
            if self.demo.tick(&keys, &mut self.surface)? == Tick::Redrawn {
                self.frame_count += 1;
            }

            // Frame timing
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }
        }

        Ok(())
    }

    /// Drain pending events; every direction seen this tick counts as held.
    fn poll_input(&mut self) -> Result<Keys> {
        let mut keys = Keys::none();
        while event::poll(Duration::ZERO)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if is_quit(&key) {
                        log::debug!("quit requested");
                        self.running = false;
                    } else if let Some(direction) = direction_for(key.code) {
                        keys.press(direction);
                    }
                }
                Event::Resize(columns, rows) => self.resize(columns, rows)?,
                _ => {}
            }
        }
        Ok(keys)
    }

    fn resize(&mut self, columns: u16, rows: u16) -> Result<()> {
        let fitted = self.config.fit_to(columns as u32, rows as u32 * 2);
        log::debug!("resized to {columns}x{rows}, fov {:.1}", fitted.fov);
        self.surface.resize(columns, rows);
        self.demo.set_camera(fitted.camera());
        // Idle ticks never redraw, so repaint now
        self.demo.draw(&mut self.surface)?;
        Ok(())
    }
}

/// Build and run a demo, restoring the terminal when it ends.
pub fn run(variant: Variant) -> Result<()> {
    let mut app = TerminalApp::new(variant)?;
    app.run()
}
