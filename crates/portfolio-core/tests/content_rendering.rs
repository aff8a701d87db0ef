//! Content rendering integration tests
//!
//! Verifies the dynamic sections after bootstrap: skill bars, project cards
//! and the detail modal, the filterable timeline and scroll reveals.

use std::time::Duration;

use portfolio_core::content::skills_for;
use portfolio_core::{
    Bounds, Document, ExperienceFilter, ExperienceKind, MemoryDocument, Node, PortfolioApp,
    SectionId, Selector, SkillCategory, UiEvent, EXPERIENCE, PROJECTS,
};

fn started_app() -> PortfolioApp<MemoryDocument> {
    let mut app = PortfolioApp::builder(MemoryDocument::standard())
        .seed(5)
        .build();
    app.init().unwrap();
    app
}

fn scroll_to(app: &mut PortfolioApp<MemoryDocument>, y: f64) {
    app.document_mut().set_scroll_y(y);
    app.handle(UiEvent::Scrolled);
}

fn timeline_items(app: &PortfolioApp<MemoryDocument>) -> Vec<Node> {
    app.document()
        .query(Node::ExperienceTimeline, Selector::Class("timeline-item"))
}

// ============================================================================
// Skills
// ============================================================================

/// Test that every category renders one row per skill
#[test]
fn test_skill_rows_rendered() {
    let app = started_app();
    for category in SkillCategory::ALL {
        let items = app
            .document()
            .query(Node::SkillsContainer(category), Selector::Class("skill-item"));
        assert_eq!(items.len(), skills_for(category).len());
    }
}

/// Test that bars fill to their level shortly after the section scrolls in
#[test]
fn test_skill_bars_fill_on_scroll() {
    let mut app = started_app();
    app.document_mut()
        .set_bounds(Node::Section(SectionId::Skills), Bounds::new(2000.0, 600.0));

    let bar = Node::SkillBar(SkillCategory::Frontend, 0);
    assert_eq!(app.document().style(bar, "width"), None);

    scroll_to(&mut app, 1900.0);
    app.advance(Duration::from_millis(99));
    assert_eq!(app.document().style(bar, "width"), None);

    app.advance(Duration::from_millis(1));
    let level = skills_for(SkillCategory::Frontend)[0].level;
    assert_eq!(
        app.document().style(bar, "width"),
        Some(format!("{level}%").as_str())
    );
    assert!(app
        .document()
        .has_class(Node::Section(SectionId::Skills), "animate-in"));
}

// ============================================================================
// Projects
// ============================================================================

/// Test that clicking a card opens the modal with that project's details
#[test]
fn test_project_modal_opens_and_closes() {
    let mut app = started_app();
    let project = &PROJECTS[1];

    app.handle(UiEvent::ProjectCardClicked {
        id: project.id.to_string(),
        on_links: false,
    });
    assert!(app.state().modal_open);
    assert_eq!(app.document().text(Node::ModalTitle), Some(project.title));
    assert_eq!(
        app.document().attribute(Node::Modal, "aria-hidden").as_deref(),
        Some("false")
    );
    assert_eq!(app.document().style(Node::Body, "overflow"), Some("hidden"));
    assert_eq!(app.document().focused(), Some(Node::ModalClose));
    assert!(app
        .document()
        .markup(Node::ModalBody)
        .unwrap()
        .contains(project.details.overview));

    app.handle(UiEvent::ModalOverlayClicked);
    assert!(!app.state().modal_open);
    assert_eq!(app.document().style(Node::Body, "overflow"), Some(""));
}

/// Test that clicks on a card's link row do not open the modal
#[test]
fn test_project_link_click_skips_modal() {
    let mut app = started_app();
    app.handle(UiEvent::ProjectCardClicked {
        id: PROJECTS[0].id.to_string(),
        on_links: true,
    });
    assert!(!app.state().modal_open);
}

// ============================================================================
// Experience Timeline
// ============================================================================

/// Test that the timeline starts unfiltered and fades in with a stagger
#[test]
fn test_timeline_fades_in_sequence() {
    let mut app = started_app();
    let items = timeline_items(&app);
    assert_eq!(items.len(), EXPERIENCE.len());

    // The first item fades in during bootstrap
    assert_eq!(app.document().style(items[0], "opacity"), Some("1"));
    assert_eq!(app.document().style(items[1], "opacity"), None);

    app.advance(Duration::from_millis(200));
    assert_eq!(app.document().style(items[1], "opacity"), Some("1"));
    assert_eq!(app.document().style(items[2], "opacity"), None);

    app.advance(Duration::from_millis(200));
    assert_eq!(app.document().style(items[2], "opacity"), Some("1"));
}

/// Test that a filter click narrows the timeline and moves the active pill
#[test]
fn test_timeline_filter() {
    let mut app = started_app();
    app.handle(UiEvent::FilterClicked("freelance".into()));

    let expected: Vec<Node> = EXPERIENCE
        .iter()
        .filter(|e| e.kind == ExperienceKind::Freelance)
        .map(|e| Node::TimelineItem(e.id))
        .collect();
    assert_eq!(timeline_items(&app), expected);

    let freelance = Node::FilterButton(ExperienceFilter::Kind(ExperienceKind::Freelance));
    assert!(app.document().has_class(freelance, "filter-btn--active"));
    assert!(!app
        .document()
        .has_class(Node::FilterButton(ExperienceFilter::All), "filter-btn--active"));
    assert_eq!(app.snapshot().active_filter, "freelance");

    app.handle(UiEvent::FilterClicked("all".into()));
    assert_eq!(timeline_items(&app).len(), EXPERIENCE.len());
}

// ============================================================================
// Scroll Reveal
// ============================================================================

/// Test that a section reveals once and its children follow in sequence
#[test]
fn test_section_reveal_with_staggered_children() {
    let mut app = started_app();
    let about = Node::Section(SectionId::About);
    app.document_mut().set_bounds(about, Bounds::new(1000.0, 800.0));

    scroll_to(&mut app, 500.0);
    assert!(app.document().has_class(about, "animate-in"));
    assert!(app.state().is_animated(about));

    let first = Node::AnimateChild(SectionId::About, 0);
    let second = Node::AnimateChild(SectionId::About, 1);
    assert!(app.document().has_class(first, "animate-in"));
    assert!(!app.document().has_class(second, "animate-in"));

    app.advance(Duration::from_millis(100));
    assert!(app.document().has_class(second, "animate-in"));

    // Leaving and re-entering does not reveal again
    app.document_mut().remove_class(about, "animate-in");
    scroll_to(&mut app, 0.0);
    app.advance(Duration::from_millis(20));
    scroll_to(&mut app, 500.0);
    assert!(!app.document().has_class(about, "animate-in"));
}

/// Test that the floating shapes move against the scroll
#[test]
fn test_scroll_parallax() {
    let mut app = started_app();
    app.advance(Duration::from_millis(20));
    scroll_to(&mut app, 300.0);
    assert_eq!(
        app.document().style(Node::FloatingShapes, "transform"),
        Some("translate3d(0, -150px, 0)")
    );
}
