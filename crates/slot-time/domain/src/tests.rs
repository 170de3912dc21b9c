use chrono::{DateTime, FixedOffset, TimeDelta};
use num_bigint::BigUint;

use super::*;

fn genesis() -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339("2019-12-13T19:13:37+00:00").unwrap()
}

#[test]
fn delta_to_nanos_widens_beyond_i64_nanoseconds() {
    // 1000 years of nanoseconds do not fit into an `i64`.
    let delta = TimeDelta::days(365_250);
    assert!(delta.num_nanoseconds().is_none());

    let expected = BigUint::from(365_250u64) * 86_400u64 * 1_000_000_000u64;
    assert_eq!(span::delta_to_nanos(delta), Some(expected));
}

#[test]
fn delta_to_nanos_rejects_negative_deltas() {
    assert_eq!(span::delta_to_nanos(TimeDelta::milliseconds(-1)), None);
    assert_eq!(span::delta_to_nanos(TimeDelta::seconds(-3)), None);
    assert_eq!(span::delta_to_nanos(TimeDelta::zero()), Some(BigUint::from(0u32)));
}

#[test]
fn max_chunk_is_the_largest_time_delta() {
    assert_eq!(span::nanos_to_delta(&span::max_chunk()), Some(TimeDelta::MAX));
    assert_eq!(span::nanos_to_delta(&(span::max_chunk() + 1u32)), None);
}

#[test]
fn add_nanos_is_exact_for_wide_offsets() {
    let delta = TimeDelta::days(36_524_250) + TimeDelta::nanoseconds(123_456_789);
    let nanos = span::delta_to_nanos(delta).unwrap();

    assert_eq!(span::add_nanos(genesis(), &nanos), genesis().checked_add_signed(delta));
}

#[test]
fn add_nanos_fails_when_a_chunk_leaves_the_representable_range() {
    let nanos = span::max_chunk() * 3u32 + 17u32;

    assert_eq!(span::add_nanos(genesis(), &nanos), None);
}

#[test]
fn nanos_between_is_none_for_reversed_instants() {
    let later = genesis() + TimeDelta::nanoseconds(1);

    assert_eq!(span::nanos_between(genesis(), later), Some(BigUint::from(1u32)));
    assert_eq!(span::nanos_between(later, genesis()), None);
}

#[test]
fn parse_reports_the_failing_part() {
    let err = AbstractDate::parse("1-17").unwrap_err();
    assert_eq!(err.text(), "1-17");
    assert_eq!(err.reason(), &ParseErrorReason::Format);

    let err = AbstractDate::parse("1.2.3").unwrap_err();
    assert_eq!(err.reason(), &ParseErrorReason::Format);

    let err = AbstractDate::parse("A.444").unwrap_err();
    assert_eq!(err.reason(), &ParseErrorReason::Epoch("A".into()));

    let err = AbstractDate::parse("-1.444").unwrap_err();
    assert_eq!(err.reason(), &ParseErrorReason::Epoch("-1".into()));

    let err = AbstractDate::parse("1.A").unwrap_err();
    assert_eq!(err.reason(), &ParseErrorReason::Slot("A".into()));

    let err = AbstractDate::parse("2.-666").unwrap_err();
    assert_eq!(err.reason(), &ParseErrorReason::Slot("-666".into()));
}

#[test]
fn parse_rejects_signs_whitespace_and_overflow() {
    for text in ["+1.2", "1.+2", " 1.2", "1.2 ", ".2", "1.", "", "18446744073709551616.0"] {
        assert!(AbstractDate::parse(text).is_err(), "'{text}' must be rejected");
    }

    assert_eq!(
        AbstractDate::parse("18446744073709551615.18446744073709551615"),
        Ok(AbstractDate::new(u64::MAX, u64::MAX))
    );
}

#[test]
fn parse_error_message_names_text_and_reason() {
    let err = AbstractDate::parse("A.444").unwrap_err();

    assert_eq!(
        err.to_string(),
        "failed to parse 'A.444': epoch must be a positive number, but was 'A'"
    );
}

#[test]
fn non_positive_slot_duration_is_rejected() {
    for slot_duration in [TimeDelta::zero(), TimeDelta::seconds(-2)] {
        let result = ChainTimeSettings::builder()
            .genesis_instant(genesis())
            .slots_per_epoch(core::num::NonZeroU64::MIN)
            .slot_duration(slot_duration)
            .build();

        assert_eq!(result.unwrap_err(), SettingsError::NonPositiveSlotDuration(slot_duration));
    }
}
