//! Terminal input: crossterm events in, page events out.
//!
//! The only module that touches stdin. Mouse and key events are translated
//! into the [`mouse`](super::mouse) and [`keyboard`](super::keyboard) types
//! the session dispatches on; everything the page has no use for (focus
//! reports, bracketed paste) becomes [`InputEvent::None`].

use std::io::stdout;
use std::time::Duration;

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton as TermButton, MouseEvent as TermMouse, MouseEventKind,
};
use crossterm::execute;

use super::keyboard::{KeyState, KeyboardEvent, Modifiers};
use super::mouse::{MouseAction, MouseButton, MouseEvent, ScrollDirection};

/// One thing that happened at the terminal.
#[derive(Debug, Clone)]
pub enum InputEvent {
    Mouse(MouseEvent),
    Key(KeyboardEvent),
    /// New terminal size in cells (width, height).
    Resize(u16, u16),
    None,
}

impl From<Event> for InputEvent {
    fn from(event: Event) -> Self {
        match event {
            Event::Mouse(mouse) => InputEvent::Mouse(mouse.into()),
            Event::Key(key) => InputEvent::Key(key.into()),
            Event::Resize(width, height) => InputEvent::Resize(width, height),
            _ => InputEvent::None,
        }
    }
}

impl From<TermMouse> for MouseEvent {
    fn from(event: TermMouse) -> Self {
        let wheel = |dir| (MouseAction::Scroll, MouseButton::None, Some(dir));
        let (action, button, scroll) = match event.kind {
            MouseEventKind::Down(b) => (MouseAction::Down, b.into(), None),
            MouseEventKind::Up(b) => (MouseAction::Up, b.into(), None),
            MouseEventKind::Drag(b) => (MouseAction::Drag, b.into(), None),
            MouseEventKind::Moved => (MouseAction::Move, MouseButton::None, None),
            MouseEventKind::ScrollUp => wheel(ScrollDirection::Up),
            MouseEventKind::ScrollDown => wheel(ScrollDirection::Down),
            MouseEventKind::ScrollLeft => wheel(ScrollDirection::Left),
            MouseEventKind::ScrollRight => wheel(ScrollDirection::Right),
        };

        MouseEvent {
            action,
            button,
            x: event.column,
            y: event.row,
            modifiers: event.modifiers.into(),
            scroll,
            component_index: None,
        }
    }
}

impl From<TermButton> for MouseButton {
    fn from(button: TermButton) -> Self {
        match button {
            TermButton::Left => MouseButton::Left,
            TermButton::Right => MouseButton::Right,
            TermButton::Middle => MouseButton::Middle,
        }
    }
}

impl From<KeyEvent> for KeyboardEvent {
    fn from(event: KeyEvent) -> Self {
        let state = match event.kind {
            KeyEventKind::Press => KeyState::Press,
            KeyEventKind::Repeat => KeyState::Repeat,
            KeyEventKind::Release => KeyState::Release,
        };
        KeyboardEvent {
            key: key_name(event.code),
            modifiers: event.modifiers.into(),
            state,
        }
    }
}

impl From<KeyModifiers> for Modifiers {
    fn from(mods: KeyModifiers) -> Self {
        Modifiers {
            ctrl: mods.contains(KeyModifiers::CONTROL),
            alt: mods.contains(KeyModifiers::ALT),
            shift: mods.contains(KeyModifiers::SHIFT),
            meta: mods.contains(KeyModifiers::META),
        }
    }
}

/// Names follow the DOM `KeyboardEvent.key` values the bindings match on.
/// Keys the page never binds come through as an empty name.
fn key_name(code: KeyCode) -> String {
    let name = match code {
        KeyCode::Char(c) => return c.to_string(),
        KeyCode::F(n) => return format!("F{n}"),
        KeyCode::Up => "ArrowUp",
        KeyCode::Down => "ArrowDown",
        KeyCode::Left => "ArrowLeft",
        KeyCode::Right => "ArrowRight",
        KeyCode::PageUp => "PageUp",
        KeyCode::PageDown => "PageDown",
        KeyCode::Home => "Home",
        KeyCode::End => "End",
        KeyCode::Tab => "Tab",
        KeyCode::BackTab => "BackTab",
        KeyCode::Enter => "Enter",
        KeyCode::Esc => "Escape",
        KeyCode::Backspace => "Backspace",
        _ => "",
    };
    name.to_owned()
}

/// Wait up to `timeout` for the next event.
pub fn poll_event(timeout: Duration) -> std::io::Result<Option<InputEvent>> {
    if !event::poll(timeout)? {
        return Ok(None);
    }
    Ok(Some(event::read()?.into()))
}

pub fn enable_mouse() -> std::io::Result<()> {
    execute!(stdout(), EnableMouseCapture)
}

pub fn disable_mouse() -> std::io::Result<()> {
    execute!(stdout(), DisableMouseCapture)
}
