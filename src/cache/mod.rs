pub mod disk;

use crate::cards::flop::Flop;
use crate::cards::isomorphism::Isomorphism;
use std::collections::HashMap;
use std::sync::PoisonError;
use std::sync::RwLock;
use std::sync::RwLockReadGuard;
use std::sync::RwLockWriteGuard;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

/// memoized `Flop -> Isomorphism` for batch workloads that
/// canonicalize the same flops over and over.
///
/// Keys are concrete flops in the order their cards were received, since
/// that order decides the canonical form. Many readers may look up at once;
/// a miss computes outside the lock and then inserts only if absent, so two
/// threads racing on one flop both compute but only the first result is
/// kept. Both results are identical anyway.
#[derive(Debug, Default)]
pub struct Cache {
    lookup: RwLock<HashMap<Flop, Isomorphism>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }
    /// stored result, if this flop has been seen
    pub fn get(&self, flop: &Flop) -> Option<Isomorphism> {
        self.read().get(flop).copied()
    }
    /// same answer as [`Isomorphism::canonicalize`], computed at most once per
    /// flop unless two threads miss on it together
    pub fn canonicalize(&self, flop: &Flop) -> Isomorphism {
        if let Some(isomorphism) = self.get(flop) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return isomorphism;
        }
        self.misses.fetch_add(1, Ordering::Relaxed);
        let isomorphism = Isomorphism::canonicalize(flop);
        *self.write().entry(*flop).or_insert(isomorphism)
    }
    pub fn len(&self) -> usize {
        self.read().len()
    }
    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::Relaxed)
    }
    pub fn misses(&self) -> usize {
        self.misses.load(Ordering::Relaxed)
    }
    /// populate every flop, one ordering each, as `Flop::exhaust` yields them
    pub fn warm(&self) {
        log::info!("{:<32}{:<32}", "warming flop cache", crate::N_FLOPS);
        let computed = Self::compute(Flop::exhaust().collect());
        let mut lookup = self.write();
        computed.into_iter().for_each(|(flop, isomorphism)| {
            lookup.entry(flop).or_insert(isomorphism);
        });
        log::info!("{:<32}{:<32}", "warmed flop cache", lookup.len());
    }
    /// everything stored, ordered by flop
    pub fn entries(&self) -> Vec<(Flop, Isomorphism)> {
        let mut entries = self
            .read()
            .iter()
            .map(|(flop, isomorphism)| (*flop, *isomorphism))
            .collect::<Vec<_>>();
        entries.sort_by_key(|(flop, _)| *flop);
        entries
    }

    #[cfg(feature = "parallel")]
    fn compute(flops: Vec<Flop>) -> Vec<(Flop, Isomorphism)> {
        use rayon::iter::IntoParallelIterator;
        use rayon::iter::ParallelIterator;
        flops
            .into_par_iter()
            .map(|flop| (flop, Isomorphism::canonicalize(&flop)))
            .collect()
    }
    #[cfg(not(feature = "parallel"))]
    fn compute(flops: Vec<Flop>) -> Vec<(Flop, Isomorphism)> {
        flops
            .into_iter()
            .map(|flop| (flop, Isomorphism::canonicalize(&flop)))
            .collect()
    }

    /// entries are plain values that are never left half-written,
    /// so a panic elsewhere does not invalidate the map
    fn read(&self) -> RwLockReadGuard<'_, HashMap<Flop, Isomorphism>> {
        self.lookup.read().unwrap_or_else(PoisonError::into_inner)
    }
    fn write(&self) -> RwLockWriteGuard<'_, HashMap<Flop, Isomorphism>> {
        self.lookup.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl FromIterator<(Flop, Isomorphism)> for Cache {
    fn from_iter<I: IntoIterator<Item = (Flop, Isomorphism)>>(iter: I) -> Self {
        Self {
            lookup: RwLock::new(iter.into_iter().collect()),
            hits: AtomicUsize::new(0),
            misses: AtomicUsize::new(0),
        }
    }
}

impl Drop for Cache {
    fn drop(&mut self) {
        log::debug!(
            "flop cache dropped: {} entries, {} hits, {} misses",
            self.read().len(),
            self.hits(),
            self.misses()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Arbitrary;
    use std::sync::Arc;

    #[test]
    fn miss_then_hit() {
        let cache = Cache::new();
        let flop = Flop::random();
        let first = cache.canonicalize(&flop);
        let again = cache.canonicalize(&flop);
        assert_eq!(first, again);
        assert_eq!(first, Isomorphism::canonicalize(&flop));
        assert_eq!(cache.misses(), 1);
        assert_eq!(cache.hits(), 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn keyed_by_order() {
        let cache = Cache::new();
        let ahkhqs = Flop::try_from("Ah Kh Qs").unwrap();
        let qsahkh = Flop::try_from("Qs Ah Kh").unwrap();
        let a = cache.canonicalize(&ahkhqs);
        let b = cache.canonicalize(&qsahkh);
        assert_eq!(cache.len(), 2);
        assert_ne!(a.canonical(), b.canonical());
    }

    #[test]
    fn warm_everything() {
        let cache = Cache::new();
        cache.warm();
        assert_eq!(cache.len(), crate::N_FLOPS);
        let flop = Flop::exhaust().nth(1234).unwrap();
        assert_eq!(cache.get(&flop), Some(Isomorphism::canonicalize(&flop)));
    }

    #[test]
    fn concurrent_readers_and_writers() {
        let cache = Arc::new(Cache::new());
        let flops = Flop::exhaust().take(512).collect::<Vec<_>>();
        let handles = (0..4)
            .map(|_| {
                let cache = Arc::clone(&cache);
                let flops = flops.clone();
                std::thread::spawn(move || {
                    flops
                        .iter()
                        .map(|flop| cache.canonicalize(flop) == Isomorphism::canonicalize(flop))
                        .all(|agrees| agrees)
                })
            })
            .collect::<Vec<_>>();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
        assert_eq!(cache.len(), 512);
        assert_eq!(cache.hits() + cache.misses(), 4 * 512);
    }

    #[test]
    fn entries_sorted() {
        let cache = (0..32)
            .map(|_| Flop::random())
            .map(|flop| (flop, Isomorphism::canonicalize(&flop)))
            .collect::<Cache>();
        let entries = cache.entries();
        assert!(entries.windows(2).all(|w| w[0].0 < w[1].0));
        assert_eq!(entries.len(), cache.len());
    }
}
