//! Reusable portfolio components

mod button;
mod filter_pills;
mod form_field;
mod skill_bar;
mod theme_switch;

pub use button::*;
pub use filter_pills::*;
pub use form_field::*;
pub use skill_bar::*;
pub use theme_switch::*;

/// Join a base class with optional extra classes.
pub fn join_classes(base: &str, extra: Option<&str>) -> String {
    match extra.map(str::trim) {
        Some(extra) if !extra.is_empty() => format!("{base} {extra}"),
        _ => base.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_classes_skips_blank_extra() {
        assert_eq!(join_classes("btn", None), "btn");
        assert_eq!(join_classes("btn", Some("  ")), "btn");
        assert_eq!(join_classes("btn", Some("wide")), "btn wide");
    }
}
