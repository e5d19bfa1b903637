use chrono::Local;

use site_core::contract::SiteResponse;

/// Liveness probe: a fixed page carrying the current local wall-clock time.
/// Consults no inputs and cannot fail.
pub fn handle_ping_request() -> SiteResponse {
    let now = Local::now().format("%B %e, %Y, %r");
    let html = format!(
        "<html><head><title>Ping -> Pong</title></head><body><h1>Ping -> Pong</h1><p>The current date, and time, is {now}</p></body></html>"
    );
    SiteResponse::html(html)
}

#[cfg(test)]
mod tests {
    use std::thread;
    use std::time::Duration;

    use super::*;

    #[test]
    fn body_carries_the_fixed_title() {
        let response = handle_ping_request();

        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.headers.get("Content-Type").map(String::as_str),
            Some("text/html")
        );
        assert!(response.body.contains("Ping -> Pong"));
    }

    #[test]
    fn timestamp_changes_between_invocations() {
        let first = handle_ping_request();
        thread::sleep(Duration::from_secs(1));
        let second = handle_ping_request();

        assert_ne!(first.body, second.body);
    }
}
