use std::collections::HashMap;
use std::sync::Mutex;
use std::time::{Duration, SystemTime};

use actix_web::HttpRequest;

pub const CONTACT_WINDOW: Duration = Duration::from_secs(10 * 60);

/// In-memory sliding window limiter keyed by client address.
pub struct RateLimiter {
    max_requests: usize,
    window: Duration,
    requests: Mutex<HashMap<String, Vec<SystemTime>>>,
}

impl RateLimiter {
    pub fn new(max_requests: usize, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            requests: Mutex::new(HashMap::new()),
        }
    }

    /// Records the attempt and returns `false` once `key` is over the limit.
    pub fn check(&self, key: &str) -> bool {
        let now = SystemTime::now();
        let mut requests = self
            .requests
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        let entry = requests.entry(key.to_string()).or_default();
        entry.retain(|&time| now.duration_since(time).unwrap_or(Duration::ZERO) < self.window);

        if entry.len() >= self.max_requests {
            log::warn!("rate limit reached for {key}");
            return false;
        }

        entry.push(now);

        // Drop idle keys so the map does not grow without bound.
        requests.retain(|_, times| !times.is_empty());

        true
    }
}

/// Peer address, honouring `X-Forwarded-For` when behind a proxy.
pub fn client_key(req: &HttpRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map(|addr| addr.split(',').next().unwrap_or(addr).trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
