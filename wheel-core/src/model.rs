use serde::{Deserialize, Serialize};

/// Label shown for items whose source label is blank.
pub const UNTITLED_LABEL: &str = "Untitled";

/// One selectable entry on the wheel.
///
/// `id` is opaque and unique within one load from the item source; `label` is
/// the display text. Items are immutable once loaded and are only ever
/// replaced wholesale when the category changes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub label: String,
}

impl Item {
    /// Build an item, trimming the label and substituting [`UNTITLED_LABEL`]
    /// when the source delivered nothing displayable.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        let label = label.into();
        let trimmed = label.trim();
        let label = if trimmed.is_empty() {
            UNTITLED_LABEL.to_string()
        } else {
            trimmed.to_string()
        };
        Item {
            id: id.into(),
            label,
        }
    }
}

/// Outcome of one completed spin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpinResult {
    /// Index of the slice that ended up under the pointer.
    pub target_index: usize,
    /// Exact rest angle of the wheel, already folded back into the session.
    pub final_angle: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_labels_become_untitled() {
        assert_eq!(Item::new("a", "").label, UNTITLED_LABEL);
        assert_eq!(Item::new("b", "   ").label, UNTITLED_LABEL);
    }

    #[test]
    fn labels_are_trimmed() {
        assert_eq!(Item::new("c", "  Sushi \n").label, "Sushi");
    }
}
