use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use wordwise_config::phrases::PhrasesConfig;

/// Delay inserted after a failed attempt
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Backoff {
    None,
    Fixed(Duration),
}

impl Backoff {
    /// Delay after a failed attempt
    pub fn delay(&self) -> Duration {
        match *self {
            Backoff::None => Duration::ZERO,
            Backoff::Fixed(delay) => delay,
        }
    }
}

/// Bounded retry applied uniformly to fallible async operations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub backoff: Backoff,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, backoff: Backoff) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff,
        }
    }

    pub fn fixed(max_attempts: u32, delay: Duration) -> Self {
        Self::new(max_attempts, Backoff::Fixed(delay))
    }

    pub fn immediate(max_attempts: u32) -> Self {
        Self::new(max_attempts, Backoff::None)
    }

    /// Run `op` until it succeeds or attempts run out, returning the last error.
    /// `op` receives the 1-based attempt number.
    pub async fn run<T, E, F, Fut>(&self, label: &str, mut op: F) -> Result<T, E>
    where
        F: FnMut(u32) -> Fut,
        Fut: Future<Output = Result<T, E>>,
        E: Display,
    {
        let max_attempts = self.max_attempts.max(1);
        let mut attempt = 1;

        loop {
            match op(attempt).await {
                Ok(value) => return Ok(value),
                Err(e) if attempt >= max_attempts => {
                    tracing::warn!("{label}: giving up after {attempt} attempts: {e}");
                    return Err(e);
                }
                Err(e) => {
                    tracing::debug!("{label}: attempt {attempt}/{max_attempts} failed: {e}");
                    let delay = self.backoff.delay();
                    if !delay.is_zero() {
                        tokio::time::sleep(delay).await;
                    }
                    attempt += 1;
                }
            }
        }
    }
}

impl From<&PhrasesConfig> for RetryPolicy {
    fn from(config: &PhrasesConfig) -> Self {
        RetryPolicy::fixed(
            config.max_attempts,
            Duration::from_millis(config.retry_delay_ms),
        )
    }
}
