//! Display formatting helpers for catalog metadata values.

/// Score with the star prefix, `★ ?` when the catalog has none.
pub fn score(s: Option<f32>) -> String {
    format!("★ {}", score_value(s))
}

/// Bare score value, `?` when the catalog has none.
pub fn score_value(s: Option<f32>) -> String {
    match s {
        Some(s) => format!("{s:.2}"),
        None => "?".into(),
    }
}

/// "28 Eps", or "? Eps" when the episode count is unknown.
pub fn episodes(count: Option<u32>) -> String {
    format!("{} Eps", episode_count(count))
}

/// Bare episode count for "watched / total" lines, `?` when unknown.
pub fn episode_count(count: Option<u32>) -> String {
    match count {
        Some(n) if n > 0 => n.to_string(),
        _ => "?".into(),
    }
}

/// Ten-cell progress bar filled to the given percentage.
pub fn progress_bar(percent: f32) -> String {
    let filled = ((percent / 10.0).round() as usize).min(10);
    format!("[{}{}]", "#".repeat(filled), "-".repeat(10 - filled))
}

/// Format a UTC timestamp as a human-readable relative time string.
pub fn relative_time(dt: &chrono::DateTime<chrono::Utc>) -> String {
    let now = chrono::Utc::now();
    let secs = (now - *dt).num_seconds().max(0);

    if secs < 60 {
        "just now".into()
    } else if secs < 3600 {
        let m = secs / 60;
        format!("{m}m ago")
    } else if secs < 86400 {
        let h = secs / 3600;
        format!("{h}h ago")
    } else {
        let d = secs / 86400;
        format!("{d}d ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_fallback() {
        assert_eq!(score(Some(9.32)), "★ 9.32");
        assert_eq!(score(None), "★ ?");
    }

    #[test]
    fn test_episode_fallbacks() {
        assert_eq!(episodes(Some(28)), "28 Eps");
        assert_eq!(episodes(Some(0)), "? Eps");
        assert_eq!(episodes(None), "? Eps");
    }

    #[test]
    fn test_progress_bar_bounds() {
        assert_eq!(progress_bar(0.0), "[----------]");
        assert_eq!(progress_bar(50.0), "[#####-----]");
        assert_eq!(progress_bar(100.0), "[##########]");
    }

    #[test]
    fn test_relative_time() {
        let now = chrono::Utc::now();
        assert_eq!(relative_time(&now), "just now");
        assert_eq!(relative_time(&(now - chrono::Duration::minutes(5))), "5m ago");
        assert_eq!(relative_time(&(now - chrono::Duration::days(3))), "3d ago");
    }
}
