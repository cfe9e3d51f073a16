use chrono::{DateTime, Utc};

/// Source of the current time for handlers that stamp their output.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// The current UTC date as `YYYY-MM-DD`.
    fn today(&self) -> String {
        self.now().format("%Y-%m-%d").to_string()
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at a single instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
