use chrono::{DateTime, Local};
use jp_core::ports::ClockPort;

/// Wall-clock implementation of the clock port.
pub struct SystemClock;

impl ClockPort for SystemClock {
    fn now_local(&self) -> DateTime<Local> {
        Local::now()
    }
}
