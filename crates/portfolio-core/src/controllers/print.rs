use super::Context;
use crate::ports::Node;

/// Mirror the print dialog onto a `printing` body class.
pub fn set_printing(cx: &mut Context<'_>, printing: bool) {
    cx.state.printing = printing;
    cx.doc.set_class(Node::Body, "printing", printing);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controllers::test_support::Harness;
    use crate::ports::Document;

    #[test]
    fn toggles_body_class() {
        let mut h = Harness::new();
        set_printing(&mut h.cx(), true);
        assert!(h.doc.has_class(Node::Body, "printing"));
        set_printing(&mut h.cx(), false);
        assert!(!h.doc.has_class(Node::Body, "printing"));
        assert!(!h.state.printing);
    }
}
