//! Page-level behavior: rows, anchors, reveals, hover and jumps.

use std::rc::Rc;
use std::time::Duration;

use folio_tui::components::{self, NAV_ITEMS, SKILL_HOVER};
use folio_tui::content::{self, Portfolio};
use folio_tui::layout::compute_layout;
use folio_tui::pipeline::{self, set_terminal_size, Session};
use folio_tui::state::reveal::{RevealRegistry, Unobserved, ViewportObserver, REVEAL_OFFSET};
use folio_tui::state::{focus, hover, mouse, scroll, InputEvent, ManualClock, MouseEvent, Transition};
use folio_tui::theme::presets;
use folio_tui::view::{Node, Role, Transform};

fn reset() {
    scroll::reset_scroll_state();
    mouse::reset_mouse_state();
    focus::reset_focus_state();
    hover::reset_hover_state();
}

fn session(portfolio: &Portfolio, width: u16, height: u16) -> (Session, Rc<ManualClock>) {
    reset();
    set_terminal_size(width, height);
    let clock = Rc::new(ManualClock::new());
    let session = Session::new(
        portfolio,
        presets::emerald(),
        Transition::new(Duration::from_millis(600)),
        clock.clone(),
    )
    .unwrap();
    (session, clock)
}

fn rows(root: &Node, role: Role) -> Vec<String> {
    root.find_role(role).into_iter().map(Node::text_content).collect()
}

#[test]
fn project_rows_follow_literal_order() {
    let page = components::page(&content::portfolio());
    let projects = rows(&page, Role::ProjectRow);

    assert_eq!(projects.len(), 2);
    assert!(projects[0].contains("Smart Leave – For Staffs"));
    assert!(projects[1].contains("AI Chatbot"));
}

#[test]
fn every_list_renders_one_row_per_entry() {
    let portfolio = content::portfolio();
    let page = components::page(&portfolio);

    assert_eq!(page.find_role(Role::SkillRow).len(), portfolio.skills.len());
    assert_eq!(page.find_role(Role::EducationRow).len(), portfolio.education.len());
    assert_eq!(page.find_role(Role::ProjectRow).len(), portfolio.projects.len());
}

#[test]
fn empty_skills_render_zero_rows() {
    let mut portfolio = content::portfolio();
    portfolio.skills.clear();

    let page = components::page(&portfolio);
    assert!(page.find_role(Role::SkillRow).is_empty());

    // Still lays out and the section is still there to jump to
    let layout = compute_layout(&page, 80).unwrap();
    assert_eq!(layout.len(), page.walk().len());
    assert_eq!(rows(&page, Role::Section).len(), 4);
}

#[test]
fn nav_anchors_resolve_to_one_section_each() {
    let page = components::page(&content::portfolio());
    let anchors = folio_tui::state::AnchorTable::collect(&page);
    let walk = page.walk();

    for (_, id) in NAV_ITEMS {
        assert_eq!(anchors.count(id), 1, "anchor {id}");
        let idx = anchors.resolve(id).unwrap();
        assert_eq!(walk[idx].role, Role::Section);
    }
}

#[test]
fn skill_hover_reverts_exactly() {
    let portfolio = content::portfolio();
    let (mut session, clock) = session(&portfolio, 100, 200);
    clock.advance(Duration::from_secs(1));

    let first_skill = session
        .page()
        .walk()
        .iter()
        .position(|n| n.role == Role::SkillRow)
        .unwrap();
    let before = hover::transform(first_skill);
    let frame = session.render_frame();
    let region = frame
        .hit_regions
        .iter()
        .find(|r| r.component_index == first_skill)
        .unwrap()
        .clone();

    session
        .handle_event(InputEvent::Mouse(MouseEvent::move_to(region.x + 1, region.y + 1)))
        .unwrap();
    assert_eq!(hover::transform(first_skill), SKILL_HOVER.transform);

    // Off every hoverable node
    session
        .handle_event(InputEvent::Mouse(MouseEvent::move_to(0, 199)))
        .unwrap();
    assert_eq!(hover::transform(first_skill), before);
    assert_eq!(before, Transform::IDENTITY);
}

#[test]
fn sections_start_hidden_and_reveal_once() {
    let page = components::page(&content::portfolio());
    let layout = compute_layout(&page, 80).unwrap();
    let skills = folio_tui::state::AnchorTable::collect(&page).resolve("skills").unwrap();
    let spec = page.walk()[skills].reveal.unwrap();

    let clock = Rc::new(ManualClock::new());
    let observer = ViewportObserver::new();
    let mut reveals = RevealRegistry::new(Transition::new(Duration::from_millis(600)), clock.clone());
    reveals.attach(skills, spec, &observer);

    // Pre-reveal: transparent and pushed down
    observer.update(0, 5, &layout);
    let hidden = reveals.visual(skills).unwrap();
    assert!(hidden.opacity < 1.0);
    assert_eq!(hidden.offset.dy, REVEAL_OFFSET);

    let top = layout.top(skills).unwrap();
    observer.update(top, 5, &layout);
    assert!(reveals.state(skills).unwrap().has_revealed());
    clock.advance(Duration::from_millis(600));
    let shown = reveals.visual(skills).unwrap();
    assert_eq!(shown.opacity, 1.0);
    assert!(shown.offset.is_identity());

    // Out and back in: nothing restarts
    observer.update(0, 5, &layout);
    observer.update(top, 5, &layout);
    assert_eq!(reveals.visual(skills).unwrap().opacity, 1.0);
    assert!(!reveals.is_animating());
}

#[test]
fn no_visibility_capability_fails_open() {
    let page = components::page(&content::portfolio());
    let mut reveals = RevealRegistry::new(Transition::new(Duration::from_millis(600)), Rc::new(ManualClock::new()));

    for (idx, node) in page.walk().into_iter().enumerate() {
        if node.role == Role::Section {
            reveals.attach(idx, node.reveal.unwrap(), &Unobserved);
            assert_eq!(reveals.visual(idx).unwrap().opacity, 1.0);
        }
    }
    assert_eq!(reveals.len(), 4);

    let mut out = Vec::new();
    pipeline::print_page(&content::portfolio(), &presets::mono(), 90, true, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    for heading in ["Summary", "Education", "Expertise", "Selected Works"] {
        assert!(text.contains(heading), "missing {heading}");
    }
}

#[test]
fn anchor_jump_aligns_then_clamps() {
    let portfolio = content::portfolio();
    let (mut session, _) = session(&portfolio, 80, 24);

    assert!(session.jump_to("skills"));
    let skills_top = session.layout().top(session.anchors().resolve("skills").unwrap()).unwrap();
    assert_eq!(session.viewport().0, skills_top);

    // The last section cannot scroll past the end of the document
    assert!(session.jump_to("projects"));
    let projects_top = session.layout().top(session.anchors().resolve("projects").unwrap()).unwrap();
    let expected = projects_top
        .saturating_sub(session.nav_height())
        .min(scroll::max_scroll());
    assert_eq!(scroll::scroll_offset(), expected);
}

#[test]
fn print_page_is_stable() {
    let render = || {
        let mut out = Vec::new();
        pipeline::print_page(&content::portfolio(), &presets::emerald(), 100, false, &mut out).unwrap();
        out
    };
    assert_eq!(render(), render());
}
