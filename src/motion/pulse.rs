//! Enable pulse timing.

use core::time::Duration;

use embedded_hal::delay::DelayNs;

/// Pulse duration used when none is configured (15 ms).
pub const DEFAULT_PULSE_DURATION: Duration = Duration::from_millis(15);

/// Block on `delay` for `duration`.
///
/// `DelayNs` takes a `u32` nanosecond count, so longer durations are split
/// into several calls. A zero duration returns without touching the delay.
pub fn hold_for<D: DelayNs>(delay: &mut D, duration: Duration) {
    let mut remaining = duration.as_nanos();
    while remaining > 0 {
        let chunk = remaining.min(u128::from(u32::MAX)) as u32;
        delay.delay_ns(chunk);
        remaining -= u128::from(chunk);
    }
}
