//! Edge case and boundary condition tests
//!
//! These tests verify the app tolerates missing page elements, unknown
//! identifiers and input arriving at awkward times.

use std::time::Duration;

use portfolio_core::{
    Document, ExperienceFilter, FieldName, KeyTarget, MemoryDocument, Node, PortfolioApp,
    PortfolioConfig, ReadyState, SectionId, Selector, UiEvent,
};

fn app_for(doc: MemoryDocument) -> PortfolioApp<MemoryDocument> {
    let mut app = PortfolioApp::builder(doc).seed(9).build();
    app.init().unwrap();
    app
}

// ============================================================================
// Missing Elements
// ============================================================================

/// Test that a page with nothing but a body boots and handles every event
#[test]
fn test_empty_document_tolerates_all_events() {
    let mut app = app_for(MemoryDocument::empty());
    assert!(app.is_started());
    assert!(app.document().has_class(Node::Body, "loaded"));

    let events = [
        UiEvent::NavToggleClicked,
        UiEvent::NavLinkClicked(SectionId::About),
        UiEvent::DocumentClicked { target: Node::Body },
        UiEvent::ThemeToggleChanged { checked: true },
        UiEvent::Scrolled,
        UiEvent::Resized,
        UiEvent::MouseMoved { x: 10.0, y: 10.0 },
        UiEvent::KeyDown {
            key: "g".into(),
            target: KeyTarget::Page,
        },
        UiEvent::FieldBlurred(FieldName::Email),
        UiEvent::FormSubmitted,
        UiEvent::ProjectCardClicked {
            id: "task-manager".into(),
            on_links: false,
        },
        UiEvent::ModalCloseClicked,
        UiEvent::FilterClicked("work".into()),
        UiEvent::BeforePrint,
        UiEvent::AfterPrint,
    ];
    for event in events {
        app.handle(event);
    }
    app.advance(Duration::from_secs(30));

    assert!(!app.state().is_loading);
    assert!(app.document().alerts().is_empty());
}

/// Test that a missing matrix container leaves the rest of the effects running
#[test]
fn test_missing_matrix_container() {
    let mut doc = MemoryDocument::standard();
    doc.remove(Node::MatrixRain);
    let mut app = app_for(doc);

    app.handle(UiEvent::ThemeToggleChanged { checked: true });
    app.advance(Duration::from_secs(5));
    assert!(!app.document().contains(Node::MatrixRain));
    assert!(app.document().contains(Node::ParticleCanvas));
}

/// Test that a form without a subject field still submits
#[test]
fn test_form_without_optional_field() {
    let mut doc = MemoryDocument::standard();
    doc.remove(Node::Field(FieldName::Subject));
    let mut app = app_for(doc);

    for (field, value) in [
        (FieldName::Name, "Grace"),
        (FieldName::Email, "grace@navy.mil"),
        (FieldName::Message, "Compilers are fun to write."),
    ] {
        app.handle(UiEvent::FieldInput {
            field,
            value: value.into(),
        });
    }
    app.handle(UiEvent::FormSubmitted);
    assert!(app.state().is_loading);
}

// ============================================================================
// Unknown Identifiers
// ============================================================================

/// Test that an unknown project id leaves the modal closed
#[test]
fn test_unknown_project_id() {
    let mut app = app_for(MemoryDocument::standard());
    app.handle(UiEvent::ProjectCardClicked {
        id: "does-not-exist".into(),
        on_links: false,
    });
    assert!(!app.state().modal_open);
    assert_eq!(
        app.document().attribute(Node::Modal, "aria-hidden").as_deref(),
        Some("true")
    );
}

/// Test that a filter naming no experience type renders an empty timeline
#[test]
fn test_filter_with_no_matches_empties_timeline() {
    let mut app = app_for(MemoryDocument::standard());
    app.handle(UiEvent::FilterClicked("work".into()));
    assert_eq!(
        app.document()
            .query(Node::ExperienceTimeline, Selector::Class("timeline-item"))
            .len(),
        1
    );

    app.handle(UiEvent::FilterClicked("education".into()));

    assert_eq!(app.snapshot().active_filter, "none");
    assert!(app
        .document()
        .query(Node::ExperienceTimeline, Selector::Class("timeline-item"))
        .is_empty());
    assert!(app.document().children(Node::ExperienceTimeline).is_empty());
    for button in ExperienceFilter::ALL {
        assert!(!app
            .document()
            .has_class(Node::FilterButton(button), "filter-btn--active"));
    }
}

// ============================================================================
// Timing
// ============================================================================

/// Test that events before DOMContentLoaded are dropped, not queued
#[test]
fn test_events_before_ready_are_dropped() {
    let mut doc = MemoryDocument::standard();
    doc.set_ready_state(ReadyState::Loading);
    let mut app = PortfolioApp::builder(doc).seed(9).build();
    app.init().unwrap();

    app.handle(UiEvent::ThemeToggleChanged { checked: true });
    app.handle(UiEvent::DomContentLoaded);

    assert!(app.is_started());
    assert!(!app.state().theme.is_dark());
}

/// Test that the menu toggle is symmetric and outside clicks close it
#[test]
fn test_nav_outside_click() {
    let mut app = app_for(MemoryDocument::standard());
    app.handle(UiEvent::NavToggleClicked);
    assert!(app.state().nav_open);

    app.handle(UiEvent::DocumentClicked {
        target: Node::NavMenu,
    });
    assert!(app.state().nav_open);

    app.handle(UiEvent::DocumentClicked {
        target: Node::Section(SectionId::About),
    });
    assert!(!app.state().nav_open);
    assert_eq!(
        app.document().attribute(Node::NavToggle, "aria-expanded").as_deref(),
        Some("false")
    );
}

/// Test that jumping to the first section never scrolls above the page
#[test]
fn test_scroll_target_clamped_at_top() {
    let mut app = app_for(MemoryDocument::standard());
    app.document_mut()
        .set_bounds(Node::Section(SectionId::Home), portfolio_core::Bounds::new(0.0, 800.0));
    app.handle(UiEvent::NavLinkClicked(SectionId::Home));
    assert_eq!(app.document().scroll_requests().last(), Some(&0.0));
}

/// Test that shortcuts stay off when disabled in the configuration
#[test]
fn test_shortcuts_disabled_by_config() {
    let config = PortfolioConfig {
        keyboard_shortcuts: false,
        ..Default::default()
    };
    let mut app = PortfolioApp::builder(MemoryDocument::standard())
        .config(config)
        .seed(9)
        .build();
    app.init().unwrap();

    app.handle(UiEvent::KeyDown {
        key: "t".into(),
        target: KeyTarget::Page,
    });
    assert!(!app.state().theme.is_dark());
}
