//! Truncation of labels to the space a slice actually has.

/// Character appended to labels that had to be shortened.
pub const ELLIPSIS: char = '…';

/// Fit `label` into `max_width` using the caller's text measurement.
///
/// Labels that already fit come back unchanged. Anything longer loses
/// trailing characters until the remaining text, with the ellipsis appended,
/// measures at most `max_width`; dropping whole characters (never bytes)
/// keeps multi-byte labels intact. A `max_width` too narrow for even the
/// ellipsis glyph short-circuits to the bare ellipsis instead of looping.
///
/// Costs one measurement per dropped character, so it finishes in O(label
/// length) calls for any measurement function.
pub fn fit_label<F>(label: &str, max_width: f64, mut measure: F) -> String
where
    F: FnMut(&str) -> f64,
{
    if measure(label) <= max_width {
        return label.to_string();
    }

    let ellipsis = ELLIPSIS.to_string();
    if max_width <= 0.0 || measure(&ellipsis) > max_width {
        return ellipsis;
    }

    let mut text = label.to_string();
    while !text.is_empty() {
        text.pop();
        let mut candidate = text.clone();
        candidate.push(ELLIPSIS);
        if measure(&candidate) <= max_width {
            return candidate;
        }
    }
    ellipsis
}

#[cfg(test)]
mod tests {
    use super::*;

    // Every character is 5 units wide, like a fixed-pitch font.
    fn char_width(s: &str) -> f64 {
        s.chars().count() as f64 * 5.0
    }

    #[test]
    fn short_labels_come_back_unchanged() {
        assert_eq!(fit_label("Tacos", 100.0, char_width), "Tacos");
        assert_eq!(fit_label("", 0.0, char_width), "");
    }

    #[test]
    fn exact_fit_is_not_truncated() {
        // 5 chars * 5 units each.
        assert_eq!(fit_label("Pizza", 25.0, char_width), "Pizza");
    }

    #[test]
    fn long_labels_are_shortened_and_ellipsized() {
        let label = "A very long activity name that will not fit";
        assert_eq!(char_width(label), 215.0);

        let fitted = fit_label(label, 60.0, char_width);
        assert!(fitted.ends_with(ELLIPSIS));
        assert!(fitted.chars().count() < label.chars().count());
        assert!(char_width(&fitted) <= 60.0);
        // 12 chars * 5 units uses the full budget, ellipsis included.
        assert_eq!(fitted, "A very long…");
    }

    #[test]
    fn fitted_text_never_exceeds_the_budget() {
        let label = "Sufficiently long label";
        for max_width in [5.0, 10.0, 35.0, 70.0, 110.0] {
            let fitted = fit_label(label, max_width, char_width);
            assert!(
                char_width(&fitted) <= max_width,
                "max_width = {max_width}, fitted = {fitted:?}"
            );
        }
    }

    #[test]
    fn degenerate_widths_fall_back_to_the_ellipsis() {
        assert_eq!(fit_label("Sushi", 0.0, char_width), "…");
        assert_eq!(fit_label("Sushi", -3.0, char_width), "…");
        // Narrower than one glyph.
        assert_eq!(fit_label("Sushi", 2.0, char_width), "…");
    }

    #[test]
    fn pathological_measurement_does_not_loop() {
        // Everything measures as too wide; the guard must bail out
        // immediately instead of grinding through the label.
        let fitted = fit_label("Salad", 10.0, |_| f64::INFINITY);
        assert_eq!(fitted, "…");
    }

    #[test]
    fn multi_byte_labels_are_cut_on_char_boundaries() {
        let fitted = fit_label("Smörgåsbord för två", 40.0, char_width);
        assert!(fitted.ends_with(ELLIPSIS));
        assert!(char_width(&fitted) <= 40.0);
    }

    #[test]
    fn fitting_is_idempotent() {
        let label = "A very long activity name that will not fit";
        let once = fit_label(label, 60.0, char_width);
        let twice = fit_label(&once, 60.0, char_width);
        assert_eq!(once, twice);
    }
}
