use std::time::Duration;

pub const MODEL_LOADING_STATUS: u16 = 503;
pub const DEFAULT_POLL_DELAY: Duration = Duration::from_secs(30);

pub fn is_model_loading(status: u16) -> bool {
    status == MODEL_LOADING_STATUS
}

/// How often, and how patiently, a single `infer` call re-sends its request.
///
/// `max_attempts` counts requests, not retries: `Some(1)` means one request
/// and no retry. `None` keeps retrying for as long as the provider answers
/// with a retryable status.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    pub max_attempts: Option<u32>,
    pub delay: Duration,
    pub retryable: fn(u16) -> bool,
}

impl RetryPolicy {
    /// Policy of the polling binary: wait 30 seconds on 503, forever.
    pub fn polling() -> Self {
        Self {
            max_attempts: None,
            delay: DEFAULT_POLL_DELAY,
            retryable: is_model_loading,
        }
    }

    /// Policy of the form: one request, a 503 is reported to the user.
    pub fn interactive() -> Self {
        Self {
            max_attempts: Some(1),
            delay: Duration::ZERO,
            retryable: is_model_loading,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn with_max_attempts(mut self, max_attempts: Option<u32>) -> Self {
        // zero would mean "never send"; treat it as a single attempt
        self.max_attempts = max_attempts.map(|n| n.max(1));
        self
    }

    pub fn is_retryable(&self, status: u16) -> bool {
        (self.retryable)(status)
    }

    /// Whether another request may follow the `attempts` already sent.
    pub fn allows_another(&self, attempts: u32) -> bool {
        self.max_attempts.map_or(true, |max| attempts < max)
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::polling()
    }
}

/// Blocking wait between attempts. Tests swap in a recorder.
pub trait Sleeper {
    fn sleep(&self, delay: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, delay: Duration) {
        std::thread::sleep(delay);
    }
}
