//! Header texts of a wishlist page.

use wishlist_common::models::WishlistSnapshot;

use crate::locale::DateFormatter;

/// Summary strings for one wishlist. All of them are `""` without a snapshot.
pub struct WishlistInfo<'a, F: DateFormatter + ?Sized> {
    wishlist: Option<&'a WishlistSnapshot>,
    dates: &'a F,
}

impl<'a, F: DateFormatter + ?Sized> WishlistInfo<'a, F> {
    pub fn new(wishlist: Option<&'a WishlistSnapshot>, dates: &'a F) -> Self {
        Self { wishlist, dates }
    }

    /// `"Created at 7/4/2024"`, in the formatter's locale.
    ///
    /// `""` when the wishlist carries no creation timestamp; no date is made up.
    pub fn creation_date(&self) -> String {
        self.wishlist
            .and_then(|w| w.created_at)
            .map(|at| format!("Created at {}", self.dates.format_date(at)))
            .unwrap_or_default()
    }

    pub fn archived_text(&self) -> String {
        match self.wishlist {
            Some(w) if w.is_archived => "(archived)".to_owned(),
            _ => String::new(),
        }
    }

    /// `"1 item"`, otherwise `"<n> items"` (including `"0 items"`).
    pub fn items_amount_text(&self) -> String {
        match self.wishlist.map(WishlistSnapshot::item_count) {
            None => String::new(),
            Some(1) => "1 item".to_owned(),
            Some(n) => format!("{n} items"),
        }
    }
}
