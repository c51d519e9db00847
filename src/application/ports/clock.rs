//! Clock port interface

/// Port for the elapsed-since-boot clock used in notification titles
pub trait ElapsedClock: Send + Sync {
    /// Milliseconds since boot, including time spent suspended where the
    /// host can report it
    fn elapsed_realtime_ms(&self) -> u64;
}
