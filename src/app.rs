//! Application entry: terminal setup, event loop, input routing.
//!
//! The loop runs at a fixed frame budget (~60fps by default): drain input,
//! advance the shell, and only composite + flush when something actually
//! moved. Terminal state (raw mode, mouse capture, alternate screen) is
//! restored on every exit path through a guard.

use std::io::{self, stdout, Write};
use std::time::{Duration, Instant};

use crossterm::event::{
    poll, read, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind,
    KeyModifiers, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, size};

use crate::content::Content;
use crate::renderer::DiffRenderer;
use crate::sections::Anchor;
use crate::shell::Shell;
use crate::state::scroll::{LINE_SCROLL, WHEEL_SCROLL};

// =============================================================================
// Config
// =============================================================================

#[derive(Debug, Clone, Copy)]
pub struct AppConfig {
    pub target_fps: u8,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self { target_fps: 60 }
    }
}

impl AppConfig {
    fn frame_budget(&self) -> Duration {
        Duration::from_secs(1) / self.target_fps.max(1) as u32
    }
}

// =============================================================================
// Terminal guard
// =============================================================================

/// Enables raw mode and mouse capture; restores both (plus cursor and main
/// screen) on drop, so panics and early returns still leave a usable
/// terminal.
struct TerminalGuard;

impl TerminalGuard {
    fn acquire() -> io::Result<Self> {
        enable_raw_mode()?;
        execute!(stdout(), EnableMouseCapture)?;
        Ok(Self)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
        let _ = disable_raw_mode();
        // Belt and braces: if the renderer never exited fullscreen, these
        // put the terminal back regardless
        let mut out = stdout();
        let _ = out.write_all(b"\x1b[0m\x1b[?25h\x1b[?1049l");
        let _ = out.flush();
    }
}

// =============================================================================
// Run loop
// =============================================================================

/// What an input event asks the loop to do.
#[derive(Debug, PartialEq)]
enum Action {
    None,
    Quit,
    Resize(u16, u16),
}

pub fn run(config: AppConfig) -> io::Result<()> {
    let (width, height) = size()?;
    let mut shell = Shell::new(Content::load(), width, height)?;

    let _guard = TerminalGuard::acquire()?;
    let mut renderer = DiffRenderer::new();
    renderer.enter_fullscreen()?;

    let result = run_loop(&mut shell, &mut renderer, config);

    renderer.exit_fullscreen()?;
    shell.unmount();
    result
}

fn run_loop(shell: &mut Shell, renderer: &mut DiffRenderer, config: AppConfig) -> io::Result<()> {
    let budget = config.frame_budget();
    let mut last_frame = Instant::now();

    // First frame is always a full paint
    shell.tick(0.0);
    shell.compose();
    renderer.render_full(shell.screen())?;

    loop {
        let elapsed = last_frame.elapsed();
        let timeout = budget.saturating_sub(elapsed);

        if poll(timeout)? {
            // Drain everything pending before the next frame
            loop {
                match handle_event(shell, read()?) {
                    Action::Quit => return Ok(()),
                    Action::Resize(w, h) => {
                        shell.relayout(w, h)?;
                        renderer.invalidate();
                    }
                    Action::None => {}
                }
                if !poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        let now = Instant::now();
        let dt = (now - last_frame).as_secs_f32();
        last_frame = now;

        if shell.tick(dt) {
            shell.compose();
            renderer.render(shell.screen())?;
        }
    }
}

fn handle_event(shell: &mut Shell, event: Event) -> Action {
    match event {
        Event::Key(key) => {
            if key.kind == KeyEventKind::Release {
                return Action::None;
            }
            match key.code {
                KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    Action::Quit
                }

                KeyCode::Up | KeyCode::Char('k') => {
                    shell.scroll_by(-(LINE_SCROLL as i32));
                    Action::None
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    shell.scroll_by(LINE_SCROLL as i32);
                    Action::None
                }
                KeyCode::PageUp => {
                    shell.scroll_by(-(shell.page_rows() as i32));
                    Action::None
                }
                KeyCode::PageDown | KeyCode::Char(' ') => {
                    shell.scroll_by(shell.page_rows() as i32);
                    Action::None
                }
                KeyCode::Home => {
                    shell.scroll_to_top();
                    Action::None
                }
                KeyCode::End => {
                    shell.scroll_to_bottom();
                    Action::None
                }

                KeyCode::Char(c @ '1'..='6') => {
                    // Absent anchors fall through as a no-op
                    if let Some(anchor) = Anchor::from_digit(c as u8 - b'0') {
                        shell.jump_to(anchor);
                    }
                    Action::None
                }
                KeyCode::Char('t') => {
                    shell.toggle_theme();
                    Action::None
                }

                _ => Action::None,
            }
        }
        Event::Mouse(mouse) => {
            match mouse.kind {
                MouseEventKind::ScrollUp => {
                    shell.scroll_by(-(WHEEL_SCROLL as i32));
                }
                MouseEventKind::ScrollDown => {
                    shell.scroll_by(WHEEL_SCROLL as i32);
                }
                _ => {}
            }
            Action::None
        }
        Event::Resize(w, h) => Action::Resize(w, h),
        _ => Action::None,
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventState, MouseEvent};

    fn shell() -> Shell {
        Shell::new(Content::load(), 100, 30).unwrap()
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        })
    }

    #[test]
    fn test_quit_keys() {
        let mut s = shell();
        assert_eq!(handle_event(&mut s, key(KeyCode::Char('q'))), Action::Quit);
        assert_eq!(handle_event(&mut s, key(KeyCode::Esc)), Action::Quit);

        let ctrl_c = Event::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        });
        assert_eq!(handle_event(&mut s, ctrl_c), Action::Quit);

        // Plain 'c' is not quit
        assert_eq!(handle_event(&mut s, key(KeyCode::Char('c'))), Action::None);
    }

    #[test]
    fn test_arrow_scrolling() {
        let mut s = shell();
        handle_event(&mut s, key(KeyCode::Down));
        assert_eq!(s.scroll_offset(), LINE_SCROLL);

        handle_event(&mut s, key(KeyCode::Up));
        assert_eq!(s.scroll_offset(), 0);
    }

    #[test]
    fn test_page_and_edge_keys() {
        let mut s = shell();
        handle_event(&mut s, key(KeyCode::PageDown));
        assert_eq!(s.scroll_offset(), s.page_rows());

        handle_event(&mut s, key(KeyCode::End));
        assert!(s.scroll_offset() > s.page_rows());

        handle_event(&mut s, key(KeyCode::Home));
        assert_eq!(s.scroll_offset(), 0);

        handle_event(&mut s, key(KeyCode::Char(' ')));
        assert_eq!(s.scroll_offset(), s.page_rows());
    }

    #[test]
    fn test_anchor_jump_keys() {
        let mut s = shell();
        handle_event(&mut s, key(KeyCode::Char('6')));
        assert!(s.scroll_offset() > 0, "contact anchor scrolls down");

        handle_event(&mut s, key(KeyCode::Char('1')));
        assert_eq!(s.scroll_offset(), 0, "about anchor returns to top");

        // Digits outside 1-6 are ignored
        handle_event(&mut s, key(KeyCode::Char('9')));
        assert_eq!(s.scroll_offset(), 0);
    }

    #[test]
    fn test_wheel_scrolling() {
        let mut s = shell();
        let wheel = Event::Mouse(MouseEvent {
            kind: MouseEventKind::ScrollDown,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::empty(),
        });
        handle_event(&mut s, wheel);
        assert_eq!(s.scroll_offset(), WHEEL_SCROLL);
    }

    #[test]
    fn test_theme_toggle_key() {
        let mut s = shell();
        handle_event(&mut s, key(KeyCode::Char('t')));
        assert_eq!(s.theme_name(), "terminal");
    }

    #[test]
    fn test_resize_event_maps_to_action() {
        let mut s = shell();
        assert_eq!(
            handle_event(&mut s, Event::Resize(120, 50)),
            Action::Resize(120, 50)
        );
    }

    #[test]
    fn test_key_release_ignored() {
        let mut s = shell();
        let release = Event::Key(KeyEvent {
            code: KeyCode::Char('q'),
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        });
        assert_eq!(handle_event(&mut s, release), Action::None);
    }

    #[test]
    fn test_frame_budget() {
        let config = AppConfig { target_fps: 60 };
        assert_eq!(config.frame_budget(), Duration::from_secs(1) / 60);

        let zero = AppConfig { target_fps: 0 };
        assert_eq!(zero.frame_budget(), Duration::from_secs(1));
    }
}
