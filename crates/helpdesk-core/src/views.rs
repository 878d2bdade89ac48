//! Permission-gated view access.
//!
//! The application has a fixed, ordered set of views, each enabled by
//! one permission flag. When the signed-in user or the selected view
//! changes, [`reconcile`] decides whether the selection is still valid
//! and, if not, which view to fall back to.

use serde::{Deserialize, Serialize};

use crate::models::user::Permissions;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppView {
    Dashboard,
    Tickets,
    Assets,
    Admin,
}

impl AppView {
    /// Fallback preference order.
    pub const ORDER: [AppView; 4] = [
        AppView::Dashboard,
        AppView::Tickets,
        AppView::Assets,
        AppView::Admin,
    ];
}

impl Permissions {
    /// The single flag gating each view.
    pub fn allows(&self, view: AppView) -> bool {
        match view {
            AppView::Dashboard => self.can_view_dashboard,
            AppView::Tickets => self.can_view_tickets,
            AppView::Assets => self.can_view_assets,
            AppView::Admin => self.can_view_admin,
        }
    }
}

/// Reconcile the selected view against the user's permissions.
///
/// Keeps `current` when it is still allowed; otherwise selects the
/// first allowed view in [`AppView::ORDER`]; `None` when no view is
/// allowed at all. Pure and idempotent: re-running with unchanged
/// inputs returns the same selection.
pub fn reconcile(permissions: &Permissions, current: Option<AppView>) -> Option<AppView> {
    if let Some(view) = current {
        if permissions.allows(view) {
            return Some(view);
        }
    }
    AppView::ORDER.into_iter().find(|v| permissions.allows(*v))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn only(view: AppView) -> Permissions {
        let mut p = Permissions::default();
        match view {
            AppView::Dashboard => p.can_view_dashboard = true,
            AppView::Tickets => p.can_view_tickets = true,
            AppView::Assets => p.can_view_assets = true,
            AppView::Admin => p.can_view_admin = true,
        }
        p
    }

    #[test]
    fn allowed_view_is_kept() {
        let perms = Permissions::all();
        assert_eq!(
            reconcile(&perms, Some(AppView::Admin)),
            Some(AppView::Admin)
        );
    }

    #[test]
    fn reconcile_is_idempotent() {
        let perms = only(AppView::Tickets);
        let first = reconcile(&perms, Some(AppView::Admin));
        let second = reconcile(&perms, first);
        assert_eq!(first, Some(AppView::Tickets));
        assert_eq!(second, first);
    }

    #[test]
    fn falls_back_to_single_enabled_view() {
        let perms = only(AppView::Assets);
        assert_eq!(
            reconcile(&perms, Some(AppView::Dashboard)),
            Some(AppView::Assets)
        );
    }

    #[test]
    fn falls_back_in_fixed_order() {
        let mut perms = only(AppView::Admin);
        perms.can_view_tickets = true;
        // Tickets precedes Admin in the order.
        assert_eq!(reconcile(&perms, None), Some(AppView::Tickets));
    }

    #[test]
    fn no_enabled_views_selects_nothing() {
        let perms = Permissions::default();
        assert_eq!(reconcile(&perms, Some(AppView::Tickets)), None);
        assert_eq!(reconcile(&perms, None), None);
    }
}
