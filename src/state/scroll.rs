//! Scroll State Module
//!
//! The page scrolls as one document below a pinned nav bar:
//! - `scroll_offset` is user state (rows scrolled past the top)
//! - `max_scroll` comes from layout (`content_height - viewport_height`)
//! - Every write is clamped to `[0, max_scroll]`
//!
//! Both values are signals so viewport observers can react to scrolling.

use spark_signals::{signal, Signal};

// =============================================================================
// SCROLL CONSTANTS
// =============================================================================

/// Default scroll amount for arrow keys (lines).
pub const LINE_SCROLL: u16 = 1;

/// Default scroll amount for mouse wheel.
pub const WHEEL_SCROLL: u16 = 3;

/// Default scroll amount for Page Up/Down (90% of viewport).
pub const PAGE_SCROLL_FACTOR: f32 = 0.9;

// =============================================================================
// SCROLL STATE
// =============================================================================

thread_local! {
    static SCROLL_Y: Signal<u16> = signal(0);
    static MAX_SCROLL_Y: Signal<u16> = signal(0);
}

pub fn scroll_offset() -> u16 {
    SCROLL_Y.with(|s| s.get())
}

pub fn max_scroll() -> u16 {
    MAX_SCROLL_Y.with(|s| s.get())
}

fn write_offset(value: u16) -> bool {
    if value == scroll_offset() {
        return false;
    }
    SCROLL_Y.with(|s| s.set(value));
    true
}

/// Update the scroll bound; the current offset is pulled back inside it.
pub fn set_max_scroll(max: u16) {
    if max != max_scroll() {
        MAX_SCROLL_Y.with(|s| s.set(max));
    }
    if scroll_offset() > max {
        write_offset(max);
    }
}

// =============================================================================
// SCROLL OPERATIONS
// =============================================================================

/// Set scroll offset (clamped to valid range).
pub fn set_scroll_offset(y: u16) -> bool {
    write_offset(y.min(max_scroll()))
}

/// Scroll by a delta amount.
///
/// Returns `true` if scrolling occurred, `false` if already at boundary.
pub fn scroll_by(delta_y: i32) -> bool {
    let new_y = (scroll_offset() as i32 + delta_y).clamp(0, max_scroll() as i32) as u16;
    write_offset(new_y)
}

pub fn scroll_to_top() -> bool {
    write_offset(0)
}

pub fn scroll_to_bottom() -> bool {
    write_offset(max_scroll())
}

/// Rows moved by one page for a viewport of `viewport_height` rows.
pub fn page_delta(viewport_height: u16) -> i32 {
    ((viewport_height as f32 * PAGE_SCROLL_FACTOR) as i32).max(1)
}

pub fn reset_scroll_state() {
    SCROLL_Y.with(|s| s.set(0));
    MAX_SCROLL_Y.with(|s| s.set(0));
}
