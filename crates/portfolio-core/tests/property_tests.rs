//! Property-based tests for validation, rate limiting and toggles
//!
//! Uses proptest to check invariants that must hold for any input.

use std::time::Duration;

use portfolio_core::form::MIN_MESSAGE_LEN;
use portfolio_core::{
    validate, FieldError, FieldName, KeyTarget, MemoryDocument, PortfolioApp, Theme, Throttle,
    UiEvent,
};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Plausible email addresses
fn email_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z0-9._%+-]{1,20}@[a-z0-9-]{1,15}\\.[a-z]{2,6}")
        .expect("valid regex")
}

/// Whitespace-only strings, including the empty string
fn blank_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[ \t\n]{0,10}").expect("valid regex")
}

/// Page-level input that a user could produce in any order
#[derive(Debug, Clone)]
enum Input {
    ToggleTheme,
    ToggleMenu,
    Escape,
    Scroll(f64),
}

fn inputs_strategy(max: usize) -> impl Strategy<Value = Vec<Input>> {
    prop::collection::vec(
        prop_oneof![
            2 => Just(Input::ToggleTheme),
            2 => Just(Input::ToggleMenu),
            1 => Just(Input::Escape),
            1 => (0.0..5000.0f64).prop_map(Input::Scroll),
        ],
        0..max,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Well-formed addresses always pass, surrounding whitespace included
    #[test]
    fn valid_emails_accepted(email in email_strategy()) {
        prop_assert_eq!(validate(FieldName::Email, &email), Ok(()));
        let padded = format!("  {email}\t");
        prop_assert_eq!(validate(FieldName::Email, &padded), Ok(()));
    }

    /// Anything without an `@` is never an email
    #[test]
    fn emails_need_at_sign(raw in "[a-z0-9.]{1,30}") {
        prop_assert_eq!(validate(FieldName::Email, &raw), Err(FieldError::InvalidEmail));
    }

    /// Blank input is required-missing everywhere except the subject
    #[test]
    fn blank_input(blank in blank_strategy()) {
        for field in FieldName::ALL {
            let expected = if field == FieldName::Subject {
                Ok(())
            } else {
                Err(FieldError::Required)
            };
            prop_assert_eq!(validate(field, &blank), expected);
        }
    }

    /// Message length is counted in UTF-16 units after trimming
    #[test]
    fn message_length_boundary(body in "[a-zA-Z\u{1F600}]{1,40}") {
        let result = validate(FieldName::Message, &format!("   {body}   "));
        if body.encode_utf16().count() >= MIN_MESSAGE_LEN {
            prop_assert_eq!(result, Ok(()));
        } else {
            prop_assert_eq!(result, Err(FieldError::TooShort));
        }
    }

    /// A throttle never fires twice within its window
    #[test]
    fn throttle_spacing(
        limit_ms in 1u64..200,
        mut times in prop::collection::vec(0u64..2000, 1..100),
    ) {
        times.sort_unstable();
        let limit = Duration::from_millis(limit_ms);
        let mut throttle = Throttle::new(limit);

        let fired: Vec<u64> = times
            .iter()
            .copied()
            .filter(|t| throttle.try_fire(Duration::from_millis(*t)))
            .collect();

        prop_assert_eq!(fired.first(), times.first());
        for pair in fired.windows(2) {
            prop_assert!(pair[1] - pair[0] >= limit_ms);
        }
    }

    /// Theme and menu state always reflect the parity of their toggles
    #[test]
    fn toggles_track_parity(inputs in inputs_strategy(40)) {
        let mut app = PortfolioApp::builder(MemoryDocument::standard()).seed(1).build();
        app.init().unwrap();

        let mut dark = false;
        let mut menu = false;
        for input in inputs {
            match input {
                Input::ToggleTheme => {
                    app.handle(UiEvent::KeyDown { key: "t".into(), target: KeyTarget::Page });
                    dark = !dark;
                }
                Input::ToggleMenu => {
                    app.handle(UiEvent::NavToggleClicked);
                    menu = !menu;
                }
                Input::Escape => {
                    app.handle(UiEvent::KeyDown { key: "Escape".into(), target: KeyTarget::Page });
                    menu = false;
                }
                Input::Scroll(y) => {
                    app.document_mut().set_scroll_y(y);
                    app.handle(UiEvent::Scrolled);
                    app.advance(Duration::from_millis(16));
                }
            }
        }

        let expected = if dark { Theme::Dark } else { Theme::Light };
        prop_assert_eq!(app.state().theme, expected);
        prop_assert_eq!(app.state().nav_open, menu);
    }
}
