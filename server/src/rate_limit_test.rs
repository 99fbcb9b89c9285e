use std::net::Ipv4Addr;

use super::*;

fn limiter(per_client_limit: usize, global_limit: usize) -> RateLimiter {
    RateLimiter::new(RateLimitConfig { per_client_limit, global_limit, window: Duration::from_secs(60) })
}

fn ip(last: u8) -> IpAddr {
    IpAddr::V4(Ipv4Addr::new(10, 0, 0, last))
}

#[test]
fn per_client_allows_up_to_limit() {
    let rl = limiter(3, 100);
    let now = Instant::now();

    for i in 0..3 {
        assert!(rl.check_and_record_at(ip(1), now).is_ok(), "request {i} should succeed");
    }
    assert_eq!(
        rl.check_and_record_at(ip(1), now),
        Err(RateLimitError::PerClientExceeded { limit: 3, window_secs: 60 })
    );
    assert!(rl.check_and_record_at(ip(2), now).is_ok(), "other clients are unaffected");
}

#[test]
fn global_allows_up_to_limit() {
    let rl = limiter(10, 4);
    let now = Instant::now();

    for last in 0..4 {
        assert!(rl.check_and_record_at(ip(last), now).is_ok());
    }
    assert!(matches!(
        rl.check_and_record_at(ip(200), now),
        Err(RateLimitError::GlobalExceeded { limit: 4, .. })
    ));
}

#[test]
fn window_expiry_allows_new_requests() {
    let rl = limiter(2, 100);
    let start = Instant::now();

    rl.check_and_record_at(ip(1), start).unwrap();
    rl.check_and_record_at(ip(1), start).unwrap();
    assert!(rl.check_and_record_at(ip(1), start).is_err());

    let later = start + Duration::from_secs(61);
    assert!(rl.check_and_record_at(ip(1), later).is_ok());
}

#[test]
fn rejected_requests_are_not_recorded() {
    let rl = limiter(1, 100);
    let start = Instant::now();

    rl.check_and_record_at(ip(1), start).unwrap();
    for _ in 0..5 {
        assert!(rl.check_and_record_at(ip(1), start + Duration::from_secs(30)).is_err());
    }
    // Only the first request counts toward the window.
    assert!(rl.check_and_record_at(ip(1), start + Duration::from_secs(61)).is_ok());
}

#[test]
fn clones_share_counters() {
    let rl = limiter(1, 100);
    let other = rl.clone();
    let now = Instant::now();

    rl.check_and_record_at(ip(1), now).unwrap();
    assert!(other.check_and_record_at(ip(1), now).is_err());
}

#[test]
fn default_config_matches_documented_limits() {
    let cfg = RateLimitConfig::default();
    assert_eq!(cfg.per_client_limit, 5);
    assert_eq!(cfg.global_limit, 60);
    assert_eq!(cfg.window, Duration::from_secs(60));
}
