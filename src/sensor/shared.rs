//! Distance reading shared between the sampler and its consumers.

use core::sync::atomic::{AtomicU32, AtomicU8, Ordering};

/// Latest accepted pulse duration, readable from any context.
///
/// Owned by the application (a `static` or a field of its state) and handed
/// by reference to the sampler that writes it and the loop that reads it.
///
/// The reading and the stale count live in separate atomics. Each is
/// consistent on its own, but a reader racing a poll may pair a new reading
/// with the previous poll's stale count. Treat [`current`](Self::current) as
/// the value to act on and [`stale_count`](Self::stale_count) as a hint.
#[derive(Debug, Default)]
pub struct SharedDistance {
    value_us: AtomicU32,
    stale: AtomicU8,
}

impl SharedDistance {
    /// Create an empty reading.
    pub const fn new() -> Self {
        Self {
            value_us: AtomicU32::new(0),
            stale: AtomicU8::new(0),
        }
    }

    /// Most recent accepted pulse duration in microseconds, 0 if none yet.
    #[inline]
    pub fn current(&self) -> u32 {
        self.value_us.load(Ordering::Acquire)
    }

    /// Most recent accepted reading converted to millimetres.
    #[inline]
    pub fn current_mm(&self) -> u32 {
        pulse_to_mm(self.current())
    }

    /// Samples rejected since the last accepted one.
    #[inline]
    pub fn stale_count(&self) -> u8 {
        self.stale.load(Ordering::Relaxed)
    }

    pub(crate) fn publish(&self, value_us: u32, stale: u8) {
        self.stale.store(stale, Ordering::Relaxed);
        self.value_us.store(value_us, Ordering::Release);
    }
}

/// Convert an echo pulse width to a one-way distance in millimetres.
///
/// Speed of sound taken as 343 m/s (0.343 mm/us), halved for the round trip.
pub const fn pulse_to_mm(pulse_us: u32) -> u32 {
    ((pulse_us as u64 * 343) / 2000) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_and_read() {
        let shared = SharedDistance::new();
        assert_eq!(shared.current(), 0);

        shared.publish(580, 1);
        assert_eq!(shared.current(), 580);
        assert_eq!(shared.stale_count(), 1);
    }

    #[test]
    fn test_reader_sees_only_published_values() {
        let shared = SharedDistance::new();

        std::thread::scope(|s| {
            s.spawn(|| {
                for i in 1..=1_000u32 {
                    shared.publish(i * 10, (i % 3) as u8);
                }
            });
            for _ in 0..1_000 {
                let value = shared.current();
                assert_eq!(value % 10, 0);
                assert!(value <= 10_000);
                assert!(shared.stale_count() < 3);
            }
        });

        assert_eq!(shared.current(), 10_000);
        assert_eq!(shared.stale_count(), 1);
    }

    #[test]
    fn test_pulse_to_mm() {
        // ~1 m round trip
        assert_eq!(pulse_to_mm(5831), 1000);
        assert_eq!(pulse_to_mm(0), 0);
        assert_eq!(pulse_to_mm(u32::MAX), 736_586_891);
    }
}
