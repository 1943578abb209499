// crates/retro-cli/src/render/term.rs
//
// Animated terminal view. The reference body sits fixed at the center;
// each frame redraws the trace so far and the current observed point,
// then waits one frame interval while polling for `q` / Esc.

use std::io::{self, Stdout, Write};
use std::time::{Duration, Instant};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal::{self, BeginSynchronizedUpdate, ClearType, EndSynchronizedUpdate, EnterAlternateScreen, LeaveAlternateScreen},
};
use retro_core::{FrameRenderer, FrameState, Vec2, ViewConfig};

use crate::render::canvas::Canvas;

const TRACE: char = '·';
const REFERENCE: char = 'E';
const OBSERVED: char = 'M';

pub struct TermRenderer {
    out: Stdout,
    interval: Duration,
    frame_count: u64,
    view: ViewConfig,
    canvas: Option<Canvas>,
    active: bool,
    quit: bool,
}

impl TermRenderer {
    /// `interval` is the wall-clock pause between frames.
    pub fn new(interval: Duration, frame_count: u64) -> Self {
        Self {
            out: io::stdout(),
            interval,
            frame_count,
            view: ViewConfig::default(),
            canvas: None,
            active: false,
            quit: false,
        }
    }

    fn restore(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;
        execute!(self.out, ResetColor, cursor::Show, LeaveAlternateScreen)?;
        terminal::disable_raw_mode()
    }

    /// Wait up to `timeout` for a key; records quit requests.
    fn poll_keys(&mut self, timeout: Duration) -> io::Result<bool> {
        let deadline = Instant::now() + timeout;
        loop {
            let left = deadline.saturating_duration_since(Instant::now());
            if !event::poll(left)? {
                return Ok(false);
            }
            if let Event::Key(k) = event::read()? {
                if k.kind != KeyEventKind::Press {
                    continue;
                }
                let ctrl_c = k.code == KeyCode::Char('c') && k.modifiers.contains(KeyModifiers::CONTROL);
                if matches!(k.code, KeyCode::Char('q') | KeyCode::Esc) || ctrl_c {
                    self.quit = true;
                }
                return Ok(true);
            }
        }
    }

    fn draw(&mut self, frame: &FrameState, trace: &[Vec2]) -> io::Result<()> {
        let (cols, rows) = terminal::size()?;
        let cols = cols as usize;
        // title line + status line
        let plot_rows = (rows as usize).saturating_sub(2).max(1);

        let canvas = self
            .canvas
            .get_or_insert_with(|| Canvas::new(cols, plot_rows, &self.view));
        canvas.clear();
        for p in trace {
            canvas.plot(*p, TRACE);
        }
        canvas.plot(Vec2::ZERO, REFERENCE);
        canvas.plot(frame.relative, OBSERVED);

        queue!(self.out, BeginSynchronizedUpdate, cursor::MoveTo(0, 0))?;
        queue!(
            self.out,
            SetForegroundColor(Color::White),
            Print(truncate(&self.view.title, cols)),
            terminal::Clear(ClearType::UntilNewLine)
        )?;
        for (r, line) in canvas.lines().enumerate() {
            queue!(self.out, cursor::MoveTo(0, (r + 1) as u16))?;
            for ch in line.chars() {
                let color = match ch {
                    REFERENCE => Color::Blue,
                    OBSERVED | TRACE => Color::Red,
                    _ => Color::Reset,
                };
                queue!(self.out, SetForegroundColor(color), Print(ch))?;
            }
        }
        let status = format!(
            "t = {:>7.3} y   frame {}/{}   x = {:+.3} AU  y = {:+.3} AU   q: quit",
            frame.t,
            frame.index + 1,
            self.frame_count,
            frame.relative.x,
            frame.relative.y
        );
        queue!(
            self.out,
            cursor::MoveTo(0, (plot_rows + 1) as u16),
            ResetColor,
            Print(truncate(&status, cols)),
            terminal::Clear(ClearType::UntilNewLine),
            EndSynchronizedUpdate
        )?;
        self.out.flush()
    }
}

impl FrameRenderer for TermRenderer {
    type Error = io::Error;

    fn setup(&mut self, view: &ViewConfig) -> io::Result<()> {
        self.view = view.clone();
        self.canvas = None;
        terminal::enable_raw_mode()?;
        self.active = true;
        execute!(self.out, EnterAlternateScreen, cursor::Hide, terminal::Clear(ClearType::All))
    }

    fn render_frame(&mut self, frame: &FrameState, trace: &[Vec2]) -> io::Result<()> {
        let started = Instant::now();
        self.draw(frame, trace)?;
        let left = self.interval.saturating_sub(started.elapsed());
        self.poll_keys(left)?;
        Ok(())
    }

    fn should_stop(&self) -> bool {
        self.quit
    }

    /// Keeps the last frame on screen until a key is pressed (unless the
    /// user already quit), then restores the terminal. No repeat.
    fn finish(&mut self) -> io::Result<()> {
        if self.active && !self.quit {
            let (_, rows) = terminal::size()?;
            queue!(
                self.out,
                cursor::MoveTo(0, rows.saturating_sub(1)),
                Print("done, press any key"),
                terminal::Clear(ClearType::UntilNewLine)
            )?;
            self.out.flush()?;
            while !self.poll_keys(Duration::from_millis(250))? {}
        }
        self.restore()
    }
}

impl Drop for TermRenderer {
    fn drop(&mut self) {
        // Best effort after an error path skipped finish().
        let _ = self.restore();
    }
}

fn truncate(s: &str, cols: usize) -> String {
    s.chars().take(cols).collect()
}
