//! Text formatting utilities for the grid demo.
//!
//! This module provides helper functions for describing grid geometry in a
//! human-readable way.

use crate::layout::GridItem;

/// Formats an item's committed geometry as `x,y wxh`.
///
/// # Examples
/// ```
/// use gridpanel::utils::format_geometry;
/// use gridpanel::GridItem;
///
/// assert_eq!(format_geometry(&GridItem::new("a", 2, 1, 3, 4)), "2,1 3x4");
/// ```
pub fn format_geometry(item: &GridItem) -> String {
    format!("{},{} {}x{}", item.x, item.y, item.w, item.h)
}

/// Formats a count with a singular or plural noun.
///
/// # Examples
/// ```
/// use gridpanel::utils::format_count;
///
/// assert_eq!(format_count(1, "panel"), "1 panel");
/// assert_eq!(format_count(3, "panel"), "3 panels");
/// ```
pub fn format_count(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
