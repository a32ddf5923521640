//! Process-wide cache of the small integer constants `0..=16`.
//!
//! The parser and formatter only ever need a base (2, 8, 10, or 16) or a
//! digit value (0..16) as a [`BigInt`] operand, so both bottom out here
//! instead of constructing a fresh value on every digit. Lifecycle is
//! explicit `init`/`teardown`, matching the C source's
//! `small_number_cache` rather than a lazily-initialized `OnceLock` that
//! could never be torn down.

use std::sync::Mutex;

use crate::BigInt;

const CACHE_SIZE: u64 = 17;

static CACHE: Mutex<Option<Vec<BigInt>>> = Mutex::new(None);

/// Populate the cache with the constants `0..=16`. Calling this again
/// without an intervening [`teardown`] simply replaces the existing
/// entries; neither function is safe to call concurrently with [`get`].
pub fn init() {
    let mut guard = CACHE.lock().unwrap();
    *guard = Some((0..CACHE_SIZE).map(BigInt::from_u64).collect());
}

/// Release the cache.
pub fn teardown() {
    let mut guard = CACHE.lock().unwrap();
    *guard = None;
}

/// Fetch a cached constant for `n` in `0..=16`.
///
/// Panics if the cache was never [`init`]ialized or `n` is out of range:
/// both are programming errors rather than a recoverable error kind,
/// matching how the C source treats an uninitialized
/// `small_number_cache` as undefined behavior rather than a recoverable
/// failure.
pub(crate) fn get(n: u64) -> BigInt {
    let guard = CACHE.lock().unwrap();
    let entries = guard.as_ref().expect("small-number cache used before cache::init()");
    entries
        .get(n as usize)
        .cloned()
        .unwrap_or_else(|| panic!("small-number cache has no entry for {n}"))
}
