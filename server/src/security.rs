use axum::{
    body::Body,
    http::{
        Request, Response, StatusCode,
        header::{HeaderName, HeaderValue},
    },
    middleware::Next,
};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::Mutex;

/// Security headers middleware.
///
/// Adds the standard hardening headers to all responses. The CSP is tuned
/// for a Leptos/WASM frontend: WASM evaluation and inline styles stay
/// allowed, everything else is same-origin.
pub async fn security_headers(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, StatusCode> {
    let mut response = next.run(req).await;

    let headers = response.headers_mut();

    // X-Frame-Options: prevent clickjacking
    headers.insert(
        HeaderName::from_static("x-frame-options"),
        HeaderValue::from_static("DENY"),
    );

    // X-Content-Type-Options: prevent MIME type sniffing
    headers.insert(
        HeaderName::from_static("x-content-type-options"),
        HeaderValue::from_static("nosniff"),
    );

    // Referrer-Policy: control referrer information
    headers.insert(
        HeaderName::from_static("referrer-policy"),
        HeaderValue::from_static("strict-origin-when-cross-origin"),
    );

    // Strict-Transport-Security (HSTS): force HTTPS for 1 year
    headers.insert(
        HeaderName::from_static("strict-transport-security"),
        HeaderValue::from_static("max-age=31536000; includeSubDomains"),
    );

    let csp = [
        "default-src 'self'",
        "script-src 'self' 'wasm-unsafe-eval'", // Required for WASM
        "style-src 'self' 'unsafe-inline'",     // Leptos inline styles
        "img-src 'self' data: https:",
        "font-src 'self' data:",
        "connect-src 'self'",
        "frame-ancestors 'none'",
        "base-uri 'self'",
        "form-action 'self'",
    ]
    .join("; ");

    headers.insert(
        HeaderName::from_static("content-security-policy"),
        HeaderValue::from_str(&csp)
            .unwrap_or_else(|_| HeaderValue::from_static("default-src 'self'")),
    );

    // Permissions-Policy: disable browser features the site never uses
    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "geolocation=(), microphone=(), camera=(), payment=(), usb=(), magnetometer=()",
        ),
    );

    Ok(response)
}

/// Fixed-window rate limiter keyed by client IP.
#[derive(Clone)]
pub struct RateLimiter {
    /// Map of IP addresses to their request history
    requests: Arc<Mutex<HashMap<String, Vec<Instant>>>>,
    /// Maximum requests per window
    max_requests: usize,
    /// Time window in seconds
    window_secs: u64,
}

impl RateLimiter {
    /// Create a new rate limiter allowing `max_requests` per `window_secs`.
    pub fn new(max_requests: usize, window_secs: u64) -> Self {
        Self {
            requests: Arc::new(Mutex::new(HashMap::new())),
            max_requests,
            window_secs,
        }
    }

    /// Check if a request from the given IP should be allowed.
    async fn check_rate_limit(&self, ip: &str) -> bool {
        let mut requests = self.requests.lock().await;
        let now = Instant::now();
        let window = Duration::from_secs(self.window_secs);

        let ip_requests = requests.entry(ip.to_string()).or_insert_with(Vec::new);

        // Forget requests that have aged out of the window.
        ip_requests.retain(|&time| now.duration_since(time) < window);

        if ip_requests.len() < self.max_requests {
            ip_requests.push(now);
            true
        } else {
            false
        }
    }

    /// Middleware function for rate limiting.
    pub async fn middleware(
        self,
        req: Request<Body>,
        next: Next,
    ) -> Result<Response<Body>, StatusCode> {
        let ip = req
            .headers()
            .get("x-forwarded-for")
            .and_then(|h| h.to_str().ok())
            .and_then(|s| s.split(',').next())
            .unwrap_or("unknown")
            .trim()
            .to_string();

        if !self.check_rate_limit(&ip).await {
            tracing::warn!("Rate limit exceeded for IP: {}", ip);
            return Err(StatusCode::TOO_MANY_REQUESTS);
        }

        Ok(next.run(req).await)
    }
}

/// Ensures the variables production deployments rely on are present.
///
/// Only enforced when `RUST_ENV=production`; development runs fall back to
/// the leptos configuration defaults.
pub fn validate_production_env() -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    let required_vars = vec!["LEPTOS_SITE_ADDR", "SITE_ORIGIN"];

    let is_production = std::env::var("RUST_ENV")
        .unwrap_or_else(|_| "development".to_string())
        == "production";

    if is_production {
        for var in required_vars {
            if std::env::var(var).is_err() {
                errors.push(format!("Missing required environment variable: {}", var));
            }
        }

        if let Ok(origin) = std::env::var("SITE_ORIGIN") {
            if !origin.starts_with("https://") {
                errors.push("SITE_ORIGIN must be an https:// origin in production".to_string());
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rate_limiter_allows_under_limit() {
        let limiter = RateLimiter::new(5, 60);

        // First 5 requests should be allowed
        for _ in 0..5 {
            assert!(limiter.check_rate_limit("127.0.0.1").await);
        }
    }

    #[tokio::test]
    async fn test_rate_limiter_blocks_over_limit() {
        let limiter = RateLimiter::new(3, 60);

        for _ in 0..3 {
            assert!(limiter.check_rate_limit("192.168.1.1").await);
        }

        // 4th request should be blocked
        assert!(!limiter.check_rate_limit("192.168.1.1").await);
    }

    #[tokio::test]
    async fn test_rate_limiter_different_ips() {
        let limiter = RateLimiter::new(2, 60);

        // Each IP should have its own limit
        assert!(limiter.check_rate_limit("10.0.0.1").await);
        assert!(limiter.check_rate_limit("10.0.0.2").await);
        assert!(limiter.check_rate_limit("10.0.0.1").await);
        assert!(limiter.check_rate_limit("10.0.0.2").await);

        assert!(!limiter.check_rate_limit("10.0.0.1").await);
        assert!(!limiter.check_rate_limit("10.0.0.2").await);
    }

    #[test]
    fn test_validation_passes_in_development() {
        // RUST_ENV is unset in tests, so the production checks are skipped.
        assert!(validate_production_env().is_ok());
    }
}
