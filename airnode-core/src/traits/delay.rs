//! End-of-Cycle Wait
//!
//! The only suspension point of the node. No analysis runs while waiting.

/// Blocks for the chosen sampling interval
pub trait Delay {
    /// Block for `ms` milliseconds
    fn delay_ms(&mut self, ms: u32);
}

/// Delay backed by `std::thread::sleep`
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadDelay;

#[cfg(feature = "std")]
impl Delay for ThreadDelay {
    fn delay_ms(&mut self, ms: u32) {
        std::thread::sleep(std::time::Duration::from_millis(u64::from(ms)));
    }
}

/// Delay that returns immediately and records what was asked for
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay {
    /// Sum of every requested delay (ms)
    pub total_ms: u64,
    /// Number of delay calls
    pub calls: u32,
}

impl Delay for NoDelay {
    fn delay_ms(&mut self, ms: u32) {
        self.total_ms = self.total_ms.saturating_add(u64::from(ms));
        self.calls = self.calls.saturating_add(1);
    }
}
