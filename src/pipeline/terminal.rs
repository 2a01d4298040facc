//! Terminal size and render mode as signals.
//!
//! The session's redraw effect reads the size, so a resize marks the page
//! dirty without any explicit wiring.

use spark_signals::{signal, Signal};

/// Used until the real size is known, and when it cannot be queried.
const FALLBACK_SIZE: (u16, u16) = (80, 24);

thread_local! {
    static SIZE: Signal<(u16, u16)> = signal(FALLBACK_SIZE);
    static MODE: Signal<RenderMode> = signal(RenderMode::Fullscreen);
}

pub fn terminal_width() -> u16 {
    SIZE.with(|s| s.get().0)
}

pub fn terminal_height() -> u16 {
    SIZE.with(|s| s.get().1)
}

pub fn set_terminal_size(width: u16, height: u16) {
    SIZE.with(|s| s.set((width, height)));
}

/// Query the real size and store it. `None` when stdout is not a terminal.
pub fn detect_terminal_size() -> Option<(u16, u16)> {
    let (width, height) = crossterm::terminal::size().ok()?;
    set_terminal_size(width, height);
    Some((width, height))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenderMode {
    /// Interactive page on the alternate screen.
    #[default]
    Fullscreen,
    /// The whole document written once, to scrollback or a pipe.
    Print,
}

pub fn render_mode() -> RenderMode {
    MODE.with(|m| m.get())
}

pub fn set_render_mode(mode: RenderMode) {
    MODE.with(|m| m.set(mode));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_round_trips_through_signal() {
        set_terminal_size(132, 43);
        assert_eq!((terminal_width(), terminal_height()), (132, 43));
        set_terminal_size(FALLBACK_SIZE.0, FALLBACK_SIZE.1);
    }

    #[test]
    fn print_mode_is_sticky_until_changed() {
        set_render_mode(RenderMode::Print);
        assert_eq!(render_mode(), RenderMode::Print);
        set_render_mode(RenderMode::Fullscreen);
        assert_eq!(render_mode(), RenderMode::Fullscreen);
    }
}
