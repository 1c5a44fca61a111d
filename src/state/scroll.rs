/// Vertical offset past which the back-to-top control is shown.
pub const SCROLL_THRESHOLD_PX: f64 = 400.0;

/// Strictly greater than the threshold; an offset of exactly 400 is not past it.
pub fn past_threshold(offset: f64) -> bool {
    offset > SCROLL_THRESHOLD_PX
}

/// Visibility of the back-to-top control. Always false until the client has
/// hydrated: the server renders with an offset of 0, and the first client
/// render must produce the same markup even if the page loads scrolled.
pub fn show_back_to_top(hydrated: bool, offset: f64) -> bool {
    hydrated && past_threshold(offset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary() {
        assert!(!past_threshold(0.0));
        assert!(!past_threshold(399.5));
        assert!(!past_threshold(400.0));
        assert!(past_threshold(400.5));
        assert!(past_threshold(2_000.0));
    }

    #[test]
    fn test_hidden_until_hydrated() {
        // a reload at /#contact hydrates with a large offset
        assert!(!show_back_to_top(false, 2_000.0));
        assert!(!show_back_to_top(false, 0.0));
        assert!(show_back_to_top(true, 2_000.0));
        assert!(!show_back_to_top(true, 400.0));
    }

    #[test]
    fn test_negative_overscroll() {
        // rubber-band scrolling can report negative offsets
        assert!(!past_threshold(-30.0));
    }
}
