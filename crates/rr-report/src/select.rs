//! Role-based item selection and totals.

use rr_common::{Item, Role, VisibleItem};

/// Threshold above which an item is flagged high-priority in admin views.
pub const ADMIN_PRIORITY_LIMIT: f64 = 1000.0;

/// Threshold above which an item is hidden from user-role views.
pub const USER_VALUE_LIMIT: f64 = 500.0;

/// Select the items visible to a role, in input order.
///
/// Admins see every item, annotated with a priority flag. Users see only
/// items at or below the value limit, unannotated. Any other role sees
/// nothing; an unrecognized role is not an error.
pub fn visible_items(role: Role, items: &[Item]) -> Vec<VisibleItem> {
    match role {
        Role::Admin => items
            .iter()
            .map(|item| VisibleItem::flagged(item, item.value > ADMIN_PRIORITY_LIMIT))
            .collect(),
        Role::User => items
            .iter()
            .filter(|item| item.value <= USER_VALUE_LIMIT)
            .map(VisibleItem::plain)
            .collect(),
        Role::Unknown => Vec::new(),
    }
}

/// Sum of visible item values. Zero for an empty set.
pub fn total(items: &[VisibleItem]) -> f64 {
    // Explicit 0.0 identity: the empty `Sum<f64>` is -0.0 on newer
    // toolchains, which would render as "-0" in reports.
    items.iter().map(|item| item.value).fold(0.0, |acc, value| acc + value)
}
