use chrono::{DateTime, Utc};

pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    /// Milliseconds since the Unix epoch, used to name uploaded objects.
    fn now_millis(&self) -> i64 {
        self.now().timestamp_millis()
    }
}
