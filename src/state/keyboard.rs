//! Key events and the page's key bindings.
//!
//! | Keys                       | Action              |
//! |----------------------------|---------------------|
//! | `q`, `Escape`, `Ctrl+C`    | quit                |
//! | `ArrowDown`/`j`, `ArrowUp`/`k` | scroll one row  |
//! | `PageDown`/`Space`/`Ctrl+D`, `PageUp`/`Ctrl+U` | scroll one page |
//! | `Home`/`g`, `End`/`G`      | top, bottom         |
//! | `1`..`9`                   | jump to that nav item |
//! | `Tab`, `Shift+Tab`         | cycle nav focus     |
//! | `Enter`                    | follow focused link |

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// DOM-style key name: `"j"`, `"Enter"`, `"PageDown"`.
    pub key: String,
    pub modifiers: Modifiers,
    pub state: KeyState,
}

impl KeyboardEvent {
    /// A press of `key` without modifiers.
    pub fn new(key: impl Into<String>) -> Self {
        Self::with_modifiers(key, Modifiers::default())
    }

    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    /// Rows to scroll, negative toward the top.
    ScrollLines(i32),
    /// Viewport heights to scroll, negative toward the top.
    ScrollPages(i32),
    Top,
    Bottom,
    /// Nav item by 0-based position.
    Jump(usize),
    FocusNext,
    FocusPrev,
    Activate,
}

/// What `event` asks the page to do. Releases and unbound keys give `None`;
/// held keys repeat their action.
pub fn key_action(event: &KeyboardEvent) -> Option<KeyAction> {
    if event.state == KeyState::Release {
        return None;
    }
    let key = event.key.as_str();

    if event.modifiers.ctrl {
        return match key {
            "c" => Some(KeyAction::Quit),
            "d" => Some(KeyAction::ScrollPages(1)),
            "u" => Some(KeyAction::ScrollPages(-1)),
            _ => None,
        };
    }

    Some(match key {
        "q" | "Escape" => KeyAction::Quit,
        "j" | "ArrowDown" => KeyAction::ScrollLines(1),
        "k" | "ArrowUp" => KeyAction::ScrollLines(-1),
        " " | "PageDown" => KeyAction::ScrollPages(1),
        "PageUp" => KeyAction::ScrollPages(-1),
        "g" | "Home" => KeyAction::Top,
        "G" | "End" => KeyAction::Bottom,
        "BackTab" => KeyAction::FocusPrev,
        "Tab" if event.modifiers.shift => KeyAction::FocusPrev,
        "Tab" => KeyAction::FocusNext,
        "Enter" => KeyAction::Activate,
        _ => match key.parse::<usize>() {
            Ok(n @ 1..=9) => KeyAction::Jump(n - 1),
            _ => return None,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pressed(key: &str) -> Option<KeyAction> {
        key_action(&KeyboardEvent::new(key))
    }

    #[test]
    fn three_ways_to_leave() {
        assert_eq!(pressed("q"), Some(KeyAction::Quit));
        assert_eq!(pressed("Escape"), Some(KeyAction::Quit));
        let ctrl_c = KeyboardEvent::with_modifiers("c", Modifiers::ctrl());
        assert_eq!(key_action(&ctrl_c), Some(KeyAction::Quit));
    }

    #[test]
    fn vim_and_arrow_scrolling() {
        assert_eq!(pressed("j"), Some(KeyAction::ScrollLines(1)));
        assert_eq!(pressed("ArrowUp"), Some(KeyAction::ScrollLines(-1)));
        assert_eq!(pressed(" "), Some(KeyAction::ScrollPages(1)));
        assert_eq!(pressed("PageUp"), Some(KeyAction::ScrollPages(-1)));
        assert_eq!(pressed("g"), Some(KeyAction::Top));
        assert_eq!(pressed("End"), Some(KeyAction::Bottom));
        let ctrl_d = KeyboardEvent::with_modifiers("d", Modifiers::ctrl());
        assert_eq!(key_action(&ctrl_d), Some(KeyAction::ScrollPages(1)));
    }

    #[test]
    fn digits_pick_nav_items() {
        assert_eq!(pressed("1"), Some(KeyAction::Jump(0)));
        assert_eq!(pressed("4"), Some(KeyAction::Jump(3)));
        assert_eq!(pressed("0"), None);
        assert_eq!(pressed("12"), None);
        assert_eq!(pressed("x"), None);
    }

    #[test]
    fn tab_and_back_tab() {
        assert_eq!(pressed("Tab"), Some(KeyAction::FocusNext));
        assert_eq!(pressed("BackTab"), Some(KeyAction::FocusPrev));
        let shift_tab = KeyboardEvent::with_modifiers("Tab", Modifiers::shift());
        assert_eq!(key_action(&shift_tab), Some(KeyAction::FocusPrev));
    }

    #[test]
    fn release_does_nothing_repeat_does() {
        let mut event = KeyboardEvent::new("j");
        event.state = KeyState::Release;
        assert_eq!(key_action(&event), None);
        event.state = KeyState::Repeat;
        assert_eq!(key_action(&event), Some(KeyAction::ScrollLines(1)));
    }
}
