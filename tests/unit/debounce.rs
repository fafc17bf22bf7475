//! Tests for the distance debounce filter.

use proptest::prelude::*;

use l9110_motion::{DebounceFilter, Sample, SamplerConfig};

#[test]
fn filter_uses_config_values() {
    let config = SamplerConfig {
        threshold_us: 700,
        stale_limit: 3,
        ..SamplerConfig::default()
    };
    let mut filter = DebounceFilter::from_config(&config);
    assert_eq!(filter.threshold_us(), 700);

    filter.offer(100);
    for _ in 0..3 {
        assert!(!filter.offer(900).is_accepted());
    }
    assert_eq!(filter.offer(900), Sample::Accepted(900));
}

#[test]
fn short_reading_resets_stale_count() {
    let mut filter = DebounceFilter::new(1000, 2);
    filter.offer(100);
    filter.offer(4000);
    assert_eq!(filter.stale_count(), 1);

    filter.offer(200);
    assert_eq!(filter.stale_count(), 0);
    assert!(!filter.offer(4000).is_accepted());
}

proptest! {
    #[test]
    fn short_positive_samples_always_accepted(
        threshold in 2u32..100_000,
        pick in any::<u32>(),
    ) {
        let sample = 1 + pick % (threshold - 1);
        let mut filter = DebounceFilter::new(threshold, 2);
        prop_assert_eq!(filter.offer(sample), Sample::Accepted(sample));
        prop_assert_eq!(filter.value(), sample);
    }

    #[test]
    fn isolated_spike_never_accepted(
        base in 1u32..1000,
        spike in 1001u32..u32::MAX,
    ) {
        let mut filter = DebounceFilter::new(1000, 2);
        filter.offer(base);
        prop_assert!(!filter.offer(spike).is_accepted());
        prop_assert_eq!(filter.offer(base), Sample::Accepted(base));
        prop_assert!(!filter.offer(spike).is_accepted());
        prop_assert_eq!(filter.value(), base);
    }
}
