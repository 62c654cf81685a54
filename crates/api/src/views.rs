//! Cached-view invalidation registry.
//!
//! The web frontend renders views (a cabin detail page, the reservations
//! list, the profile page) from API data and caches them. After a mutation,
//! the owning handler bumps the version of every view whose rendered output
//! is now stale. Clients compare the versions they rendered against
//! `GET /api/v1/views` and re-fetch what changed.
//!
//! Invalidation is fire-and-forget: bumping never fails and callers ignore
//! the new version number.

use std::collections::HashMap;
use std::sync::Mutex;

use tamarack_core::types::DbId;

// ---------------------------------------------------------------------------
// Well-known view paths
// ---------------------------------------------------------------------------

/// The guest's reservations list.
pub const RESERVATIONS_VIEW: &str = "/account/reservations";

/// The guest's profile page.
pub const PROFILE_VIEW: &str = "/account/profile";

/// The detail page of one cabin.
pub fn cabin_view(cabin_id: DbId) -> String {
    format!("/cabins/{cabin_id}")
}

/// The edit page of one reservation.
pub fn reservation_edit_view(booking_id: DbId) -> String {
    format!("/account/reservations/edit/{booking_id}")
}

/// Monotonically increasing version per view path.
///
/// Paths not present in the map are implicitly at version 0.
#[derive(Debug, Default)]
pub struct ViewVersions {
    versions: Mutex<HashMap<String, u64>>,
}

impl ViewVersions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a view stale by bumping its version.
    pub fn invalidate(&self, path: &str) {
        let mut versions = self.versions.lock().expect("view version lock poisoned");
        let entry = versions.entry(path.to_string()).or_insert(0);
        *entry += 1;
        tracing::debug!(path, version = *entry, "View invalidated");
    }

    /// Current version of a single view path (0 if never invalidated).
    pub fn version(&self, path: &str) -> u64 {
        let versions = self.versions.lock().expect("view version lock poisoned");
        versions.get(path).copied().unwrap_or(0)
    }

    /// Snapshot of every view path that has been invalidated at least once.
    pub fn snapshot(&self) -> HashMap<String, u64> {
        self.versions
            .lock()
            .expect("view version lock poisoned")
            .clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untouched_view_is_at_version_zero() {
        let views = ViewVersions::new();
        assert_eq!(views.version("/cabins/1"), 0);
    }

    #[test]
    fn invalidate_bumps_version_monotonically() {
        let views = ViewVersions::new();
        views.invalidate("/account/reservations");
        views.invalidate("/account/reservations");
        assert_eq!(views.version("/account/reservations"), 2);
    }

    #[test]
    fn paths_are_versioned_independently() {
        let views = ViewVersions::new();
        views.invalidate("/cabins/1");
        assert_eq!(views.version("/cabins/1"), 1);
        assert_eq!(views.version("/cabins/2"), 0);
    }

    #[test]
    fn snapshot_contains_only_invalidated_paths() {
        let views = ViewVersions::new();
        views.invalidate("/account/profile");
        let snapshot = views.snapshot();
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot["/account/profile"], 1);
    }
}
