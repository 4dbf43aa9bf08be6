//! Per-item badge styles and quantity text.

use wishlist_common::models::{Priority, UNIT_PIECE, WishlistItemSnapshot};

use crate::error::FormatResult;

/// Color class shown when there is no item to style.
pub const NEUTRAL_COLOR: &str = "text-neutral-500";

/// Text color class for a priority badge.
pub fn priority_color(priority: Priority) -> &'static str {
    match priority {
        Priority::None => NEUTRAL_COLOR,
        Priority::Low => "text-yellow-500",
        Priority::Medium => "text-orange-500",
        Priority::High => "text-red-500",
    }
}

/// Badge label; items without priority get no label.
pub fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::None => "",
        Priority::Low => "Low priority",
        Priority::Medium => "Medium priority",
        Priority::High => "High priority",
    }
}

/// Display strings for one wishlist item.
#[derive(Debug, Clone, Copy)]
pub struct WishlistItemStyles<'a> {
    item: Option<&'a WishlistItemSnapshot>,
}

impl<'a> WishlistItemStyles<'a> {
    pub fn new(item: Option<&'a WishlistItemSnapshot>) -> Self {
        Self { item }
    }

    /// Neutral when there is no item.
    pub fn priority_color(&self) -> FormatResult<&'static str> {
        match self.item {
            None => Ok(NEUTRAL_COLOR),
            Some(item) => Ok(priority_color(item.priority()?)),
        }
    }

    pub fn priority_text(&self) -> FormatResult<&'static str> {
        match self.item {
            None => Ok(""),
            Some(item) => Ok(priority_label(item.priority()?)),
        }
    }

    /// `"1 piece"` / `"3 pieces"` for countable items, `"<quantity> <unit>"` otherwise.
    pub fn amount_text(&self) -> String {
        let Some(item) = self.item else {
            return String::new();
        };

        if item.is_counted_in_pieces() {
            if item.quantity == 1 {
                format!("1 {UNIT_PIECE}")
            } else {
                format!("{} {UNIT_PIECE}s", item.quantity)
            }
        } else {
            format!("{} {}", item.quantity, item.measurement_unit)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FormatError;
    use uuid::Uuid;

    fn item(quantity: i64, unit: &str, priority: i64) -> WishlistItemSnapshot {
        WishlistItemSnapshot {
            uuid: Uuid::nil(),
            wishlist_uuid: Uuid::nil(),
            name: "Tea".into(),
            quantity,
            measurement_unit: unit.into(),
            priority,
            is_purchased: false,
        }
    }

    #[test]
    fn priority_tables() {
        let expected = [
            (0, "text-neutral-500", ""),
            (1, "text-yellow-500", "Low priority"),
            (2, "text-orange-500", "Medium priority"),
            (3, "text-red-500", "High priority"),
        ];
        for (priority, color, text) in expected {
            let it = item(1, "piece", priority);
            let styles = WishlistItemStyles::new(Some(&it));
            assert_eq!(styles.priority_color(), Ok(color));
            assert_eq!(styles.priority_text(), Ok(text));
        }
    }

    #[test]
    fn absent_item_fallbacks() {
        let styles = WishlistItemStyles::new(None);
        assert_eq!(styles.priority_color(), Ok("text-neutral-500"));
        assert_eq!(styles.priority_text(), Ok(""));
        assert_eq!(styles.amount_text(), "");
    }

    #[test]
    fn unknown_priority_is_rejected() {
        let it = item(1, "piece", 7);
        let styles = WishlistItemStyles::new(Some(&it));
        assert_eq!(styles.priority_color(), Err(FormatError::UnrecognizedPriority(7)));
        assert_eq!(styles.priority_text(), Err(FormatError::UnrecognizedPriority(7)));
        assert_eq!(styles.amount_text(), "1 piece");
    }

    #[test]
    fn amounts() {
        let text = |q, unit: &str| WishlistItemStyles::new(Some(&item(q, unit, 0))).amount_text();
        assert_eq!(text(1, "piece"), "1 piece");
        assert_eq!(text(0, "piece"), "0 pieces");
        assert_eq!(text(3, "piece"), "3 pieces");
        assert_eq!(text(1, "kg"), "1 kg");
        assert_eq!(text(2, "l"), "2 l");
    }
}
