//! Mount API - page lifecycle and the frame loop.
//!
//! Two ways to put the page on a terminal:
//!
//! - [`mount`] takes over the terminal (raw mode, alternate screen, mouse
//!   capture) and returns a [`MountHandle`] driven by [`tick`] / [`run`].
//! - [`print_page`] paints the whole document once into any writer. There is
//!   no viewport to observe, so every reveal fails open and shows at rest.
//!
//! # Example
//!
//! ```ignore
//! use folio_tui::pipeline::mount;
//!
//! let handle = mount::mount(&content::portfolio(), &config)?;
//! mount::run(&mut handle)?;  // Blocks until q / Esc / Ctrl+C
//! handle.unmount();
//! ```

use std::io::{self, Stdout, Write};
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use crossterm::terminal;
use tracing::{debug, info, warn};

use crate::components;
use crate::config::FolioConfig;
use crate::content::Portfolio;
use crate::error::Result;
use crate::layout::compute_layout;
use crate::renderer::{ansi, DiffRenderer, InlineRenderer};
use crate::state::animate::{SystemClock, Transition};
use crate::state::reveal::{RevealRegistry, Unobserved};
use crate::state::{input, InputEvent};
use crate::theme::Theme;

use super::frame_buffer::{paint_document, PaintContext};
use super::session::Session;
use super::terminal::{detect_terminal_size, set_render_mode, terminal_height, terminal_width, RenderMode};

// =============================================================================
// Mount Handle
// =============================================================================

/// Handle returned by [`mount`].
///
/// Owns the session and the terminal. Dropping it restores the terminal.
pub struct MountHandle {
    session: Option<Session>,
    renderer: DiffRenderer,
    stdout: Stdout,
    frame_interval: Duration,
    running: Arc<AtomicBool>,
    restored: bool,
}

impl MountHandle {
    /// Stop the loop and give the terminal back.
    pub fn unmount(mut self) {
        self.restore();
        info!("page unmounted");
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }

    /// Ask the loop to stop after the current tick.
    pub fn stop(&self) {
        self.running.store(false, Ordering::SeqCst);
    }

    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    fn restore(&mut self) {
        if self.restored {
            return;
        }
        self.restored = true;
        self.running.store(false, Ordering::SeqCst);

        // Session teardown stops its effects and handlers
        self.session.take();

        let _ = input::disable_mouse();
        let _ = self.renderer.exit_fullscreen(&mut self.stdout);
        let _ = terminal::disable_raw_mode();
    }

    fn draw(&mut self) -> io::Result<()> {
        let Some(session) = self.session.as_mut() else {
            return Ok(());
        };
        if !session.needs_render() {
            return Ok(());
        }
        let frame = session.render_frame();
        let changed = self.renderer.render(&frame.buffer, &mut self.stdout)?;
        debug!(changed, "frame");
        Ok(())
    }
}

impl Drop for MountHandle {
    fn drop(&mut self) {
        self.restore();
    }
}

// =============================================================================
// Mount Function
// =============================================================================

/// Take over the terminal and show the page.
///
/// This sets up:
/// 1. Terminal size detection
/// 2. Raw mode, alternate screen and mouse capture
/// 3. The session (layout, reveals, pointer handlers) at the detected size
/// 4. The first frame
pub fn mount(portfolio: &Portfolio, config: &FolioConfig) -> Result<MountHandle> {
    set_render_mode(RenderMode::Fullscreen);
    if detect_terminal_size().is_none() {
        warn!("terminal size unavailable, using {}x{}", terminal_width(), terminal_height());
    }

    let theme = config.resolve_theme()?;
    let transition = Transition::new(config.reveal_duration());

    terminal::enable_raw_mode()?;
    let mut handle = MountHandle {
        session: None,
        renderer: DiffRenderer::new(),
        stdout: io::stdout(),
        frame_interval: config.frame_interval(),
        running: Arc::new(AtomicBool::new(true)),
        restored: false,
    };

    // From here on the handle's Drop restores the terminal on any error
    let profile = &portfolio.profile;
    ansi::set_title(&mut handle.stdout, &format!("{} {}", profile.name, profile.name_highlight))?;
    handle.renderer.enter_fullscreen(&mut handle.stdout)?;
    input::enable_mouse()?;

    handle.session = Some(Session::new(portfolio, theme, transition, Rc::new(SystemClock))?);
    handle.draw()?;

    info!(
        width = terminal_width(),
        height = terminal_height(),
        theme = %config.theme,
        "page mounted in fullscreen"
    );
    Ok(handle)
}

// =============================================================================
// Event Loop
// =============================================================================

/// Run the event loop once.
///
/// Waits up to one frame interval for input, applies it, and redraws if
/// anything changed or a transition is in flight.
///
/// # Returns
///
/// * `Ok(true)` - Continue running
/// * `Ok(false)` - Stop requested (quit key or `handle.stop()`)
pub fn tick(handle: &mut MountHandle) -> Result<bool> {
    if !handle.is_running() {
        return Ok(false);
    }

    if let Some(event) = input::poll_event(handle.frame_interval)? {
        if matches!(event, InputEvent::Resize(..)) {
            handle.renderer.invalidate();
        }
        if let Some(session) = handle.session.as_mut() {
            if !session.handle_event(event)? {
                handle.stop();
                return Ok(false);
            }
        }
    }

    handle.draw()?;
    Ok(handle.is_running())
}

/// Run the event loop until stopped.
pub fn run(handle: &mut MountHandle) -> Result<()> {
    while tick(handle)? {}
    Ok(())
}

// =============================================================================
// Print Mode
// =============================================================================

/// Paint the whole page once at `width` columns into `writer`.
///
/// `plain` drops every escape sequence (colors, attributes, hyperlinks).
pub fn print_page<W: Write>(
    portfolio: &Portfolio,
    theme: &Theme,
    width: u16,
    plain: bool,
    writer: &mut W,
) -> Result<()> {
    set_render_mode(RenderMode::Print);

    let page = components::page(portfolio);
    let layout = compute_layout(&page, width)?;

    // No viewport: every reveal shows straight away
    let mut reveals = RevealRegistry::new(Transition::instant(), Rc::new(SystemClock));
    for (index, node) in page.walk().into_iter().enumerate() {
        if let Some(spec) = node.reveal {
            reveals.attach(index, spec, &Unobserved);
        }
    }

    let ctx = PaintContext {
        theme,
        reveals: Some(&reveals),
        focused: None,
    };
    let frame = paint_document(&page, &layout, &ctx);

    let mut renderer = if plain { InlineRenderer::plain() } else { InlineRenderer::new() };
    renderer.render(&frame.buffer, writer)?;

    info!(width, rows = frame.buffer.height(), plain, "page printed");
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content;
    use crate::theme::presets;

    fn printed(width: u16, plain: bool) -> String {
        let mut out = Vec::new();
        print_page(&content::portfolio(), &presets::emerald(), width, plain, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_print_shows_every_section() {
        let text = printed(100, true);
        for expected in [
            "VN.",
            "Vengateshwaran",
            "Summary",
            "Education",
            "Expertise",
            "Selected Works",
            "Let's build something together.",
        ] {
            assert!(text.contains(expected), "missing {expected}");
        }
        assert!(!text.contains('\x1b'));
    }

    #[test]
    fn test_print_keeps_list_order() {
        let text = printed(100, true);
        let smart = text.find("Smart Leave").unwrap();
        let chatbot = text.find("AI Chatbot").unwrap();
        assert!(smart < chatbot);

        let sankara = text.find("Sankara College").unwrap();
        let sslc = text.find("SSLC").unwrap();
        assert!(sankara < sslc);
    }

    #[test]
    fn test_styled_print_carries_hyperlinks() {
        let text = printed(100, false);
        assert!(text.contains("\x1b]8;;https://smartleave.vercel.app/\x07"));
        assert!(text.contains("\x1b]8;;mailto:vengateshnavaneethaperumal@gmail.com\x07"));
    }

    #[test]
    fn test_print_sets_render_mode() {
        printed(60, true);
        assert_eq!(super::super::terminal::render_mode(), RenderMode::Print);
    }
}
