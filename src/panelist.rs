//! Panelists: simulated evaluators holding a random subset of preferences.
//!
//! A panelist is deliberately partial. It samples at most `pool_size - 1` of
//! the panel's preferences, so no single panelist ever evaluates with the
//! panel's complete preference set; consensus emerges from averaging many
//! partial views rather than from any one complete one.
//!
//! Panelists are transient. The panel rebuilds its entire roster on every
//! evaluation, so a panelist lives for exactly one `opine`/`verdict`/
//! `deliberate` call and is discarded afterwards.

use std::fmt;
use std::sync::Arc;

use rand::Rng;

use crate::preference::Preference;

/// A simulated evaluator holding a sampled subset of the panel's preferences.
pub struct Panelist<S: ?Sized> {
    preferences: Vec<Arc<Preference<S>>>,
}

impl<S: ?Sized> Panelist<S> {
    /// Sample a fresh panelist from the given preference pool.
    ///
    /// Draws `min(requested, pool_size - 1)` distinct preferences uniformly
    /// at random without replacement, via a partial Fisher-Yates shuffle: a
    /// shrinking candidate list starts as a copy of the pool, and each draw
    /// moves one uniformly chosen candidate into the panelist's set. Every
    /// preference remaining in the candidate list has equal probability at
    /// each draw, and no preference can be drawn twice.
    ///
    /// With a pool of fewer than two preferences the adjusted quota is zero,
    /// and the panelist ends up with an empty set. That is a valid state,
    /// not an error: an empty panelist simply opines neutrally.
    pub fn sample<R: Rng>(pool: &[Arc<Preference<S>>], requested: usize, rng: &mut R) -> Self {
        let quota = requested.min(pool.len().saturating_sub(1));
        let mut candidates = pool.to_vec();
        let mut preferences = Vec::with_capacity(quota);

        for _ in 0..quota {
            let idx = rng.gen_range(0..candidates.len());
            preferences.push(candidates.swap_remove(idx));
        }

        Self { preferences }
    }

    /// This panelist's opinion of the subject: the arithmetic mean of its
    /// preferences' clamped scores.
    ///
    /// A panelist with no preferences opines exactly `0.0` (neutral). This
    /// avoids a 0/0 mean and composes cleanly with the panel-level average:
    /// empty panelists pull the consensus toward neutrality instead of
    /// poisoning it with NaN.
    pub fn opine(&self, subject: &S) -> f64 {
        if self.preferences.is_empty() {
            return 0.0;
        }
        let total: f64 = self
            .preferences
            .iter()
            .map(|pref| pref.inspect(subject))
            .sum();
        total / self.preferences.len() as f64
    }

    /// This panelist's binary vote: `true` when its opinion is strictly
    /// positive. A neutral (exactly zero) opinion counts as dislike.
    pub fn verdict(&self, subject: &S) -> bool {
        self.opine(subject) > 0.0
    }

    /// The preferences this panelist sampled.
    pub fn preferences(&self) -> &[Arc<Preference<S>>] {
        &self.preferences
    }

    /// Number of preferences this panelist holds.
    pub fn preference_count(&self) -> usize {
        self.preferences.len()
    }
}

impl<S: ?Sized> fmt::Debug for Panelist<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panelist")
            .field("preference_count", &self.preferences.len())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    fn constant_pool(scores: &[f64]) -> Vec<Arc<Preference<i32>>> {
        scores
            .iter()
            .map(|&s| Arc::new(Preference::new(move |_: &i32| s)))
            .collect()
    }

    #[test]
    fn sample_size_is_capped_at_pool_minus_one() {
        let pool = constant_pool(&[1.0, 2.0, 3.0, 4.0]);
        let mut rng = StdRng::seed_from_u64(1);
        let panelist = Panelist::sample(&pool, 10, &mut rng);
        assert_eq!(panelist.preference_count(), 3);
    }

    #[test]
    fn sample_honors_requested_count_when_pool_is_large() {
        let pool = constant_pool(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        let mut rng = StdRng::seed_from_u64(2);
        let panelist = Panelist::sample(&pool, 2, &mut rng);
        assert_eq!(panelist.preference_count(), 2);
    }

    #[test]
    fn sample_from_empty_pool_is_empty() {
        let pool = constant_pool(&[]);
        let mut rng = StdRng::seed_from_u64(3);
        let panelist = Panelist::sample(&pool, 5, &mut rng);
        assert_eq!(panelist.preference_count(), 0);
    }

    #[test]
    fn sample_from_singleton_pool_is_empty() {
        let pool = constant_pool(&[50.0]);
        let mut rng = StdRng::seed_from_u64(4);
        let panelist = Panelist::sample(&pool, 5, &mut rng);
        assert_eq!(panelist.preference_count(), 0);
    }

    #[test]
    fn sampled_preferences_are_distinct() {
        let pool = constant_pool(&[1.0; 12]);
        let mut rng = StdRng::seed_from_u64(5);
        let panelist = Panelist::sample(&pool, 8, &mut rng);

        let identities: HashSet<*const Preference<i32>> = panelist
            .preferences()
            .iter()
            .map(Arc::as_ptr)
            .collect();
        assert_eq!(identities.len(), panelist.preference_count());
    }

    #[test]
    fn sampled_preferences_come_from_the_pool() {
        let pool = constant_pool(&[1.0, 2.0, 3.0]);
        let mut rng = StdRng::seed_from_u64(6);
        let panelist = Panelist::sample(&pool, 2, &mut rng);

        let pool_identities: HashSet<*const Preference<i32>> =
            pool.iter().map(Arc::as_ptr).collect();
        for pref in panelist.preferences() {
            assert!(pool_identities.contains(&Arc::as_ptr(pref)));
        }
    }

    #[test]
    fn opine_averages_preference_scores() {
        let pool = constant_pool(&[10.0, 20.0, 30.0]);
        let mut rng = StdRng::seed_from_u64(7);
        // Quota of 2 from a pool of 3: possible means are 15, 20, or 25.
        let panelist = Panelist::sample(&pool, 2, &mut rng);
        let opinion = panelist.opine(&0);
        assert!(
            [15.0, 20.0, 25.0].iter().any(|m| (opinion - m).abs() < f64::EPSILON),
            "unexpected mean {opinion}"
        );
    }

    #[test]
    fn empty_panelist_opines_neutrally() {
        let pool = constant_pool(&[50.0]);
        let mut rng = StdRng::seed_from_u64(8);
        let panelist = Panelist::sample(&pool, 3, &mut rng);
        assert!((panelist.opine(&0)).abs() < f64::EPSILON);
        assert!(!panelist.verdict(&0));
    }

    #[test]
    fn verdict_is_strictly_positive() {
        let positive = constant_pool(&[0.5, 0.5]);
        let neutral = constant_pool(&[0.0, 0.0]);
        let negative = constant_pool(&[-0.5, -0.5]);
        let mut rng = StdRng::seed_from_u64(9);

        assert!(Panelist::sample(&positive, 1, &mut rng).verdict(&0));
        assert!(!Panelist::sample(&neutral, 1, &mut rng).verdict(&0));
        assert!(!Panelist::sample(&negative, 1, &mut rng).verdict(&0));
    }
}
