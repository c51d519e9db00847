//! Elapsed-since-boot clock adapter

use std::sync::OnceLock;
use std::time::Instant;

use crate::application::ports::ElapsedClock;

/// Clock reading CLOCK_BOOTTIME where available.
///
/// Elsewhere it falls back to a monotonic clock anchored at first use.
#[derive(Debug, Default, Clone, Copy)]
pub struct BootClock;

impl BootClock {
    pub fn new() -> Self {
        Self
    }
}

impl ElapsedClock for BootClock {
    fn elapsed_realtime_ms(&self) -> u64 {
        boot_time_ms().unwrap_or_else(monotonic_ms)
    }
}

#[cfg(any(target_os = "linux", target_os = "android"))]
fn boot_time_ms() -> Option<u64> {
    use nix::time::{clock_gettime, ClockId};

    let now = clock_gettime(ClockId::CLOCK_BOOTTIME).ok()?;
    let secs = u64::try_from(now.tv_sec()).ok()?;
    let nanos = u64::try_from(now.tv_nsec()).ok()?;
    Some(secs * 1000 + nanos / 1_000_000)
}

#[cfg(not(any(target_os = "linux", target_os = "android")))]
fn boot_time_ms() -> Option<u64> {
    None
}

fn monotonic_ms() -> u64 {
    static START: OnceLock<Instant> = OnceLock::new();
    let start = START.get_or_init(Instant::now);
    u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_does_not_go_backwards() {
        let clock = BootClock::new();
        let first = clock.elapsed_realtime_ms();
        let second = clock.elapsed_realtime_ms();
        assert!(second >= first);
    }

    #[test]
    fn monotonic_fallback_advances() {
        let first = monotonic_ms();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(monotonic_ms() > first);
    }
}
