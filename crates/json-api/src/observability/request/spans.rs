//! HTTP span and metric route helpers.

use uuid::Uuid;

/// Metrics scrapes and liveness/readiness probes.
pub(super) fn is_probe_path(path: &str) -> bool {
    matches!(path, "/metrics" | "/api/isalive" | "/api/isready")
}

/// The app a request is scoped to, when its path names one.
pub(super) fn app_id_from_path(path: &str) -> Option<Uuid> {
    let mut segments = path.trim_start_matches('/').split('/');

    match (segments.next(), segments.next(), segments.next()) {
        (Some("api"), Some("apps" | "events"), Some(id)) => Uuid::parse_str(id).ok(),
        _ => None,
    }
}

/// Collapse identifier segments so spans and metrics group by route.
pub(super) fn normalise_path(path: &str) -> String {
    let segments: Vec<&str> = path
        .trim_start_matches('/')
        .split('/')
        .map(|segment| {
            if Uuid::parse_str(segment).is_ok() {
                "{uuid}"
            } else {
                segment
            }
        })
        .collect();

    format!("/{}", segments.join("/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uuid_segments_are_replaced() {
        let app = Uuid::now_v7();

        assert_eq!(
            normalise_path(&format!("/api/apps/{app}/events")),
            "/api/apps/{uuid}/events"
        );
        assert_eq!(
            normalise_path(&format!("/api/events/{app}")),
            "/api/events/{uuid}"
        );
    }

    #[test]
    fn static_paths_are_unchanged() {
        assert_eq!(normalise_path("/"), "/");
        assert_eq!(normalise_path("/api/send"), "/api/send");
    }

    #[test]
    fn probe_paths() {
        assert!(is_probe_path("/metrics"));
        assert!(is_probe_path("/api/isready"));
        assert!(!is_probe_path("/api/send"));
    }

    #[test]
    fn app_scoped_paths_yield_the_app_id() {
        let app = Uuid::now_v7();

        assert_eq!(app_id_from_path(&format!("/api/apps/{app}")), Some(app));
        assert_eq!(
            app_id_from_path(&format!("/api/apps/{app}/events")),
            Some(app)
        );
        assert_eq!(app_id_from_path(&format!("/api/events/{app}")), Some(app));
    }

    #[test]
    fn other_paths_have_no_app_id() {
        assert_eq!(app_id_from_path("/api/apps"), None);
        assert_eq!(app_id_from_path("/api/apps/not-a-uuid"), None);
        assert_eq!(app_id_from_path("/api/send"), None);
        assert_eq!(app_id_from_path("/"), None);
    }
}
