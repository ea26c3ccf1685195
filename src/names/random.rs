use std::sync::{Mutex, OnceLock, PoisonError};
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng};

/// Source of selection indices. Implementations must return a value in
/// `0..len`; callers never ask with `len == 0`.
pub trait RandomSource {
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform picks from any `rand` generator.
#[derive(Debug)]
pub struct RngSource<R> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RngSource<StdRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Seeds from OS entropy, falling back to the clock and process id when
    /// the OS source cannot be read.
    pub fn from_entropy_or_time() -> Self {
        match StdRng::from_rng(OsRng) {
            Ok(rng) => Self::new(rng),
            Err(e) => {
                log::warn!("OS entropy unavailable ({}), seeding from current time", e);
                Self::seeded(fallback_seed())
            }
        }
    }
}

impl<R: Rng> RandomSource for RngSource<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len)
    }
}

fn fallback_seed() -> u64 {
    let now = chrono::Utc::now();
    let nanos = now
        .timestamp_nanos_opt()
        .unwrap_or_else(|| now.timestamp_micros()) as u64;
    nanos ^ (u64::from(std::process::id()) << 32)
}

/// Replays a fixed list of indices, cycling when exhausted. Each value is
/// reduced modulo the requested length.
#[derive(Clone, Debug)]
pub struct FixedSequence {
    values: Vec<usize>,
    position: usize,
}

impl FixedSequence {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, position: 0 }
    }

    pub fn consumed(&self) -> usize {
        self.position
    }
}

impl RandomSource for FixedSequence {
    fn pick(&mut self, len: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.position % self.values.len()];
        self.position += 1;
        value % len
    }
}

impl<S: RandomSource + ?Sized> RandomSource for &mut S {
    fn pick(&mut self, len: usize) -> usize {
        (**self).pick(len)
    }
}

/// Mutex-guarded source usable from many threads at once.
#[derive(Debug)]
pub struct SharedSource<S> {
    inner: Mutex<S>,
}

impl<S: RandomSource> SharedSource<S> {
    pub fn new(source: S) -> Self {
        Self { inner: Mutex::new(source) }
    }

    pub fn pick(&self, len: usize) -> usize {
        // A panic elsewhere cannot leave the generator state half-written.
        let mut source = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        source.pick(len)
    }

    pub fn into_inner(self) -> S {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<S: RandomSource> RandomSource for &SharedSource<S> {
    fn pick(&mut self, len: usize) -> usize {
        SharedSource::pick(*self, len)
    }
}

pub type ProcessSource = SharedSource<RngSource<StdRng>>;

static PROCESS_SOURCE: OnceLock<ProcessSource> = OnceLock::new();

/// Switches the process-wide source to an entropy-seeded generator. Only the
/// first call seeds; later calls return immediately.
pub fn ensure_non_deterministic() {
    process_source();
}

pub fn process_source() -> &'static ProcessSource {
    PROCESS_SOURCE.get_or_init(|| {
        log::debug!("Seeding process-wide random source");
        SharedSource::new(RngSource::from_entropy_or_time())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_fixed_sequence_cycles() {
        let mut source = FixedSequence::new(vec![1, 5, 2]);
        let picks: Vec<usize> = (0..5).map(|_| source.pick(4)).collect();
        assert_eq!(picks, vec![1, 1, 2, 1, 1]);
        assert_eq!(source.consumed(), 5);
    }

    #[test]
    fn test_empty_fixed_sequence_picks_first() {
        let mut source = FixedSequence::new(Vec::new());
        assert_eq!(source.pick(10), 0);
    }

    #[test]
    fn test_seeded_source_is_reproducible() {
        let mut a = RngSource::seeded(42);
        let mut b = RngSource::seeded(42);
        let left: Vec<usize> = (0..50).map(|_| a.pick(1000)).collect();
        let right: Vec<usize> = (0..50).map(|_| b.pick(1000)).collect();
        assert_eq!(left, right);
    }

    #[test]
    fn test_picks_stay_in_range() {
        let mut source = RngSource::seeded(7);
        for len in 1..100 {
            assert!(source.pick(len) < len);
        }
    }

    #[test]
    fn test_fallback_seed_varies_with_time() {
        let first = fallback_seed();
        thread::sleep(std::time::Duration::from_millis(2));
        assert_ne!(first, fallback_seed());
    }

    #[test]
    fn test_ensure_non_deterministic_is_idempotent() {
        ensure_non_deterministic();
        let first = process_source() as *const ProcessSource;
        ensure_non_deterministic();
        let second = process_source() as *const ProcessSource;
        assert_eq!(first, second);
    }

    #[test]
    fn test_process_source_is_not_constant() {
        ensure_non_deterministic();
        let picks: Vec<usize> = (0..20).map(|_| process_source().pick(1_000_000)).collect();
        assert!(picks.iter().any(|p| *p != picks[0]));
    }

    #[test]
    fn test_shared_source_across_threads() {
        let shared = Arc::new(SharedSource::new(RngSource::seeded(3)));
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let shared = Arc::clone(&shared);
                thread::spawn(move || (0..1000).all(|_| shared.pick(17) < 17))
            })
            .collect();

        for handle in handles {
            assert!(handle.join().unwrap());
        }
    }

    #[test]
    fn test_shared_fixed_sequence_consumes_in_order() {
        let shared = SharedSource::new(FixedSequence::new(vec![0, 1, 2]));
        assert_eq!(shared.pick(10), 0);
        assert_eq!(shared.pick(10), 1);
        assert_eq!(shared.into_inner().consumed(), 2);
    }
}
