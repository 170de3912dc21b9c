//! Nanosecond spans of arbitrary width and their application to chrono instants.
//!
//! `TimeDelta` can only express its length in nanoseconds as an `i64` (about 292 years), and a
//! single `DateTime` addition accepts at most `TimeDelta::MAX`. Spans are therefore carried as
//! [`BigUint`] nanoseconds and only narrowed at the point where chrono is called.

use chrono::{DateTime, FixedOffset, TimeDelta};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

const NANOS_PER_SEC: u32 = 1_000_000_000;

/// Returns the length of a non-negative delta in nanoseconds, or `None` if it is negative.
pub(crate) fn delta_to_nanos(delta: TimeDelta) -> Option<BigUint> {
    let secs = u64::try_from(delta.num_seconds()).ok()?;
    let subsec_nanos = u32::try_from(delta.subsec_nanos()).ok()?;

    Some(BigUint::from(secs) * NANOS_PER_SEC + subsec_nanos)
}

/// Returns the delta of the given length, if it is at most `TimeDelta::MAX`.
pub(crate) fn nanos_to_delta(nanos: &BigUint) -> Option<TimeDelta> {
    let (secs, subsec_nanos) = nanos.div_rem(&BigUint::from(NANOS_PER_SEC));

    TimeDelta::new(secs.to_i64()?, subsec_nanos.to_u32()?)
}

/// The widest span chrono applies to an instant in one step.
pub(crate) fn max_chunk() -> BigUint {
    BigUint::from(TimeDelta::MAX.num_seconds().unsigned_abs()) * NANOS_PER_SEC
        + TimeDelta::MAX.subsec_nanos().unsigned_abs()
}

/// Returns the nanoseconds elapsed from `from` to `to`, or `None` if `to` precedes `from`.
///
/// Every span between two representable instants fits into a single `TimeDelta`, so the
/// difference is taken in one step and widened through whole seconds.
pub(crate) fn nanos_between(
    from: DateTime<FixedOffset>,
    to: DateTime<FixedOffset>,
) -> Option<BigUint> {
    delta_to_nanos(to.signed_duration_since(from))
}

/// Adds `nanos` to `start`, or returns `None` if the result is not representable.
///
/// Offsets wider than [`max_chunk`] are applied as a sequence of maximal chunks followed by
/// the remainder. The result is exact.
pub(crate) fn add_nanos(
    start: DateTime<FixedOffset>,
    nanos: &BigUint,
) -> Option<DateTime<FixedOffset>> {
    let (chunks, remainder) = nanos.div_rem(&max_chunk());

    if !chunks.is_zero() {
        tracing::debug!(%chunks, "offset exceeds a single time delta, applying in chunks");
    }

    let mut instant = start;
    let mut applied = BigUint::zero();

    while applied < chunks {
        instant = instant.checked_add_signed(TimeDelta::MAX)?;
        applied += 1u32;
    }

    instant.checked_add_signed(nanos_to_delta(&remainder)?)
}
