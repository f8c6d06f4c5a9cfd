//! Save-time transition rules for status and progress.
//!
//! The editor lets the user pick any status/progress combination; these
//! rules reconcile the pair into a consistent entry before it is stored.

use tracing::debug;

use crate::models::WatchStatus;

/// Status and progress after the save rules have been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolved {
    pub status: WatchStatus,
    pub watched: u32,
}

/// Apply the save-time rules, in order:
///
/// 1. `completed` with a known total forces watched to the total.
/// 2. `watching` with watched >= total promotes to `completed` and clamps.
/// 3. `plan_to_watch` with any progress promotes to `watching`.
///
/// A total of zero means the catalog does not know the episode count, so
/// rules 1 and 2 do not fire.
pub fn resolve_save(status: WatchStatus, watched: u32, total: Option<u32>) -> Resolved {
    let mut status = status;
    let mut watched = watched;
    let total = total.filter(|&t| t > 0);

    if status == WatchStatus::Completed {
        if let Some(total) = total {
            watched = total;
        }
    }

    if status == WatchStatus::Watching {
        if let Some(total) = total {
            if watched >= total {
                debug!(watched, total, "Progress reached total, marking completed");
                status = WatchStatus::Completed;
                watched = total;
            }
        }
    }

    if status == WatchStatus::PlanToWatch && watched > 0 {
        debug!(watched, "Plan-to-watch entry has progress, marking watching");
        status = WatchStatus::Watching;
    }

    Resolved { status, watched }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completed_forces_watched_to_total() {
        let r = resolve_save(WatchStatus::Completed, 3, Some(24));
        assert_eq!(r.status, WatchStatus::Completed);
        assert_eq!(r.watched, 24);
    }

    #[test]
    fn test_completed_with_unknown_total_keeps_watched() {
        let r = resolve_save(WatchStatus::Completed, 3, None);
        assert_eq!(r.status, WatchStatus::Completed);
        assert_eq!(r.watched, 3);

        let r = resolve_save(WatchStatus::Completed, 3, Some(0));
        assert_eq!(r.watched, 3);
    }

    #[test]
    fn test_watching_at_total_promotes_to_completed() {
        let r = resolve_save(WatchStatus::Watching, 12, Some(12));
        assert_eq!(r.status, WatchStatus::Completed);
        assert_eq!(r.watched, 12);
    }

    #[test]
    fn test_watching_past_total_clamps() {
        let r = resolve_save(WatchStatus::Watching, 30, Some(12));
        assert_eq!(r.status, WatchStatus::Completed);
        assert_eq!(r.watched, 12);
    }

    #[test]
    fn test_watching_below_total_unchanged() {
        let r = resolve_save(WatchStatus::Watching, 5, Some(12));
        assert_eq!(r.status, WatchStatus::Watching);
        assert_eq!(r.watched, 5);
    }

    #[test]
    fn test_watching_unknown_total_never_completes() {
        let r = resolve_save(WatchStatus::Watching, 500, None);
        assert_eq!(r.status, WatchStatus::Watching);
        assert_eq!(r.watched, 500);
    }

    #[test]
    fn test_plan_to_watch_with_progress_promotes() {
        let r = resolve_save(WatchStatus::PlanToWatch, 1, Some(24));
        assert_eq!(r.status, WatchStatus::Watching);
        assert_eq!(r.watched, 1);
    }

    #[test]
    fn test_plan_to_watch_without_progress_stays() {
        let r = resolve_save(WatchStatus::PlanToWatch, 0, Some(24));
        assert_eq!(r.status, WatchStatus::PlanToWatch);
        assert_eq!(r.watched, 0);
    }

    #[test]
    fn test_plan_to_watch_at_total_promotes_then_completes() {
        // Rule 3 fires after rule 2 has already been checked, so a
        // plan-to-watch entry saved at the full episode count lands on
        // watching. The next save with status watching completes it.
        let r = resolve_save(WatchStatus::PlanToWatch, 12, Some(12));
        assert_eq!(r.status, WatchStatus::Watching);
        assert_eq!(r.watched, 12);

        let r = resolve_save(r.status, r.watched, Some(12));
        assert_eq!(r.status, WatchStatus::Completed);
    }

    #[test]
    fn test_clamp_applies_on_completion_paths() {
        let r = resolve_save(WatchStatus::Completed, 99, Some(24));
        assert_eq!(r.watched, 24);

        let r = resolve_save(WatchStatus::Watching, 99, Some(24));
        assert_eq!((r.status, r.watched), (WatchStatus::Completed, 24));

        // An over-count on a plan-to-watch save survives; only the
        // completion paths clamp, and the display layer caps at 100%.
        let r = resolve_save(WatchStatus::PlanToWatch, 99, Some(24));
        assert_eq!((r.status, r.watched), (WatchStatus::Watching, 99));
    }
}
