use chrono::{DateTime, Local};

pub trait ClockPort: Send + Sync {
    fn now_local(&self) -> DateTime<Local>;
}
