//! The panel: preference pool ownership, roster recruitment, and aggregation.
//!
//! A [`Panel`] owns the full pool of registered preferences and answers three
//! questions about a subject:
//!
//! - [`opine`](Panel::opine) -- the consensus opinion, a score in
//!   `[MIN_SCORE, MAX_SCORE]`.
//! - [`verdict`](Panel::verdict) -- the binary liked/disliked decision by
//!   majority vote.
//! - [`deliberate`](Panel::deliberate) -- both of the above plus per-panelist
//!   detail, from a single roster.
//!
//! Every evaluation recruits a completely fresh roster of panelists. Nothing
//! about panel composition survives between calls, so two consecutive calls
//! on the same subject may disagree: each is an independent sample of the
//! consensus distribution. For a fixed subject and deterministic scoring
//! functions, results converge as the panelist count grows.
//!
//! Aggregation is mean-of-means: every panelist contributes its sub-average
//! with equal weight, regardless of how many preferences it holds. This is
//! intentionally not the same as averaging every individual preference score.

use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::errors::{PanelError, PanelResult};
use crate::panelist::Panelist;
use crate::preference::{Preference, Score};

// ---------------------------------------------------------------------------
// PanelConfig
// ---------------------------------------------------------------------------

/// Sizing parameters for a panel, fixed at construction.
///
/// `panelists` must be positive -- a panel of zero members has no one to
/// average over, and [`Panel::new`] rejects it. `preferences_per_panelist`
/// may be zero (panelists then hold no preferences and opine neutrally) and
/// is additionally capped per evaluation at one less than the pool size, so
/// no panelist ever holds the panel's complete preference set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    /// Number of panelists recruited per evaluation.
    pub panelists: usize,
    /// Number of preferences each panelist requests from the pool.
    pub preferences_per_panelist: usize,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panelists: 5,
            preferences_per_panelist: 3,
        }
    }
}

impl PanelConfig {
    /// Check that the configuration can produce a working panel.
    pub fn validate(&self) -> PanelResult<()> {
        if self.panelists == 0 {
            return Err(PanelError::InvalidConfiguration {
                reason: "panel requires at least one panelist".into(),
            });
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Deliberation
// ---------------------------------------------------------------------------

/// Full detail of a single panel evaluation.
///
/// Produced by [`Panel::deliberate`], which recruits one roster and reports
/// everything it found: each panelist's opinion, the vote split, and the
/// aggregate opinion and verdict. Useful when a caller wants both the score
/// and the decision without paying for (and re-randomizing across) two
/// separate recruitments.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Deliberation {
    /// Each panelist's opinion, in roster order.
    pub opinions: Vec<f64>,
    /// Number of panelists with a strictly positive opinion.
    pub votes_for: usize,
    /// Number of panelists with a zero or negative opinion.
    pub votes_against: usize,
    /// The consensus opinion: mean of the panelist opinions.
    pub opinion: f64,
    /// The majority decision: `true` when more than half the panelists
    /// voted in favor.
    pub liked: bool,
}

impl Deliberation {
    /// Number of panelists that took part.
    pub fn turnout(&self) -> usize {
        self.opinions.len()
    }

    /// Fraction of panelists that voted in favor, in `[0.0, 1.0]`.
    pub fn approval_ratio(&self) -> f64 {
        self.votes_for as f64 / self.opinions.len() as f64
    }
}

// ---------------------------------------------------------------------------
// Panel
// ---------------------------------------------------------------------------

/// A consensus panel over subjects of type `S`.
///
/// The panel owns its preference pool (grow-only, never pruned) and the
/// transient roster from the most recent evaluation. The random source is an
/// explicit, injected dependency: construct with [`Panel::with_seed`] for
/// deterministic behavior in tests, or [`Panel::new`] for an entropy seed.
///
/// Evaluations take `&mut self` because recruitment replaces the roster and
/// advances the RNG. Sharing one panel across threads therefore requires an
/// external lock around each whole call; the recruit-then-aggregate sequence
/// must not interleave with another evaluation.
pub struct Panel<S: ?Sized> {
    config: PanelConfig,
    pool: Vec<Arc<Preference<S>>>,
    roster: Vec<Panelist<S>>,
    rng: StdRng,
}

impl<S: ?Sized> Panel<S> {
    /// Create a panel seeded from system entropy.
    pub fn new(config: PanelConfig) -> PanelResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pool: Vec::new(),
            roster: Vec::new(),
            rng: StdRng::from_entropy(),
        })
    }

    /// Create a panel with a fixed RNG seed.
    ///
    /// Two panels built with the same configuration, seed, registration
    /// sequence, and call sequence recruit identical rosters and produce
    /// identical results.
    pub fn with_seed(config: PanelConfig, seed: u64) -> PanelResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            pool: Vec::new(),
            roster: Vec::new(),
            rng: StdRng::seed_from_u64(seed),
        })
    }

    /// Register a scoring function as a new preference in the pool.
    ///
    /// No deduplication is performed: registering the same function twice
    /// yields two independent preferences, each separately samplable.
    pub fn add_preference<F>(&mut self, scorer: F)
    where
        F: Score<S> + 'static,
    {
        self.pool.push(Arc::new(Preference::new(scorer)));
    }

    /// Register a labeled scoring function as a new preference in the pool.
    pub fn add_named_preference<F>(&mut self, label: impl Into<String>, scorer: F)
    where
        F: Score<S> + 'static,
    {
        self.pool.push(Arc::new(Preference::named(label, scorer)));
    }

    /// The panel's sizing parameters.
    pub fn config(&self) -> PanelConfig {
        self.config
    }

    /// Number of registered preferences.
    pub fn pool_size(&self) -> usize {
        self.pool.len()
    }

    /// The roster from the most recent evaluation, in recruitment order.
    ///
    /// Empty until the first evaluation runs. The roster is replaced
    /// wholesale on every call, so this is only ever a snapshot of the last
    /// recruitment.
    pub fn roster(&self) -> &[Panelist<S>] {
        &self.roster
    }

    /// The consensus opinion of the subject, in `[MIN_SCORE, MAX_SCORE]`.
    ///
    /// Recruits a fresh roster, then returns the arithmetic mean of every
    /// panelist's opinion. Fails with [`PanelError::EmptyPool`] when no
    /// preference has been registered.
    pub fn opine(&mut self, subject: &S) -> PanelResult<f64> {
        self.ensure_pool()?;
        self.recruit();

        let total: f64 = self.roster.iter().map(|p| p.opine(subject)).sum();
        let opinion = total / self.roster.len() as f64;

        tracing::debug!(
            opinion,
            panelists = self.roster.len(),
            pool = self.pool.len(),
            "panel opined"
        );
        Ok(opinion)
    }

    /// The majority decision on the subject.
    ///
    /// Recruits a fresh roster, counts panelists with a strictly positive
    /// opinion, and returns whether they make up more than half the roster.
    /// Fails with [`PanelError::EmptyPool`] when no preference has been
    /// registered.
    pub fn verdict(&mut self, subject: &S) -> PanelResult<bool> {
        self.ensure_pool()?;
        self.recruit();

        let votes_for = self
            .roster
            .iter()
            .filter(|p| p.verdict(subject))
            .count();
        let liked = majority(votes_for, self.roster.len());

        tracing::debug!(
            votes_for,
            panelists = self.roster.len(),
            liked,
            "panel voted"
        );
        Ok(liked)
    }

    /// Evaluate the subject once and report everything.
    ///
    /// One recruitment serves both the opinion and the verdict, so the two
    /// numbers in the returned [`Deliberation`] describe the same roster --
    /// unlike separate `opine` and `verdict` calls, which each re-sample.
    /// Votes are derived from the already-computed opinions, so each scoring
    /// function runs once per holding panelist.
    pub fn deliberate(&mut self, subject: &S) -> PanelResult<Deliberation> {
        self.ensure_pool()?;
        self.recruit();

        let opinions: Vec<f64> = self.roster.iter().map(|p| p.opine(subject)).collect();
        let votes_for = opinions.iter().filter(|&&o| o > 0.0).count();
        let votes_against = opinions.len() - votes_for;
        let opinion = opinions.iter().sum::<f64>() / opinions.len() as f64;
        let liked = majority(votes_for, opinions.len());

        tracing::debug!(
            opinion,
            votes_for,
            votes_against,
            liked,
            "panel deliberated"
        );
        Ok(Deliberation {
            opinions,
            votes_for,
            votes_against,
            opinion,
            liked,
        })
    }

    /// Replace the roster with freshly recruited panelists.
    fn recruit(&mut self) {
        self.roster = fresh_roster(&self.config, &self.pool, &mut self.rng);
    }

    fn ensure_pool(&self) -> PanelResult<()> {
        if self.pool.is_empty() {
            return Err(PanelError::EmptyPool);
        }
        Ok(())
    }
}

impl<S: ?Sized> fmt::Debug for Panel<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Panel")
            .field("config", &self.config)
            .field("pool_size", &self.pool.len())
            .field("roster_size", &self.roster.len())
            .finish_non_exhaustive()
    }
}

/// Build a brand-new roster for one evaluation.
///
/// Pure with respect to the panel: the existing roster is untouched and a new
/// value is returned, so recruitment can never leak state between
/// evaluations. Each panelist samples independently from the same pool.
fn fresh_roster<S: ?Sized>(
    config: &PanelConfig,
    pool: &[Arc<Preference<S>>],
    rng: &mut StdRng,
) -> Vec<Panelist<S>> {
    let roster: Vec<Panelist<S>> = (0..config.panelists)
        .map(|_| Panelist::sample(pool, config.preferences_per_panelist, rng))
        .collect();

    tracing::debug!(
        panelists = roster.len(),
        pool = pool.len(),
        requested_per_panelist = config.preferences_per_panelist,
        "recruited fresh roster"
    );
    roster
}

/// The majority rule: strictly more than half the panelists in favor.
///
/// The vote ratio is computed in floating point, so 6 of 10 positive votes
/// (0.6) is a liked verdict while 5 of 10 (exactly 0.5) is not. `panelists`
/// is always positive here because the config is validated at construction.
fn majority(votes_for: usize, panelists: usize) -> bool {
    votes_for as f64 / panelists as f64 > 0.5
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
