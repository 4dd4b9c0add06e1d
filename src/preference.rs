//! Scoring preferences and the scoring-function capability.
//!
//! A [`Preference`] is the leaf of the consensus system: it wraps one
//! caller-supplied scoring function and clamps its output into the panel's
//! fixed score range. Preferences carry no opinion of their own beyond the
//! function they wrap -- what a preference *means* is entirely up to the
//! caller.
//!
//! The [`Score`] trait is the capability boundary: anything that can map a
//! subject reference to a real number can be registered on a panel. A blanket
//! implementation covers plain closures and function pointers, so most callers
//! never implement the trait by hand.

use std::fmt;
use std::sync::Arc;

/// Lower bound of the clamped score range.
pub const MIN_SCORE: f64 = -100.0;

/// Upper bound of the clamped score range.
pub const MAX_SCORE: f64 = 100.0;

// ---------------------------------------------------------------------------
// Score trait
// ---------------------------------------------------------------------------

/// A scoring function over subjects of type `S`.
///
/// Implementations receive the subject by reference and return an unclamped
/// real number; the panel clamps it into `[MIN_SCORE, MAX_SCORE]` before
/// aggregation. Scoring functions are treated as pure: the same subject
/// should produce the same score. Nothing enforces purity, but evaluation
/// results are only meaningful when it holds.
///
/// Any `Fn(&S) -> f64` closure or function pointer implements this trait
/// automatically:
///
/// ```
/// use focus_group::Score;
///
/// fn length_bonus(s: &str) -> f64 {
///     s.len() as f64
/// }
///
/// let by_fn: &dyn Score<str> = &length_bonus;
/// let by_closure: &dyn Score<str> = &|s: &str| -(s.len() as f64);
/// assert_eq!(by_fn.score("four"), 4.0);
/// assert_eq!(by_closure.score("four"), -4.0);
/// ```
pub trait Score<S: ?Sized>: Send + Sync {
    /// Score the given subject. The result may fall anywhere on the real
    /// line; clamping happens in [`Preference::inspect`].
    fn score(&self, subject: &S) -> f64;
}

impl<S: ?Sized, F> Score<S> for F
where
    F: Fn(&S) -> f64 + Send + Sync,
{
    fn score(&self, subject: &S) -> f64 {
        self(subject)
    }
}

// ---------------------------------------------------------------------------
// Preference
// ---------------------------------------------------------------------------

/// One evaluative preference: a scoring function with clamped output.
///
/// Preferences are created through panel registration, are immutable
/// afterwards, and live in the panel's pool for the panel's whole lifetime.
/// Panelists share them by reference (`Arc`), never by copy, so two panelists
/// holding "the same" preference observe the identical function.
///
/// The optional label exists purely for diagnostics -- it shows up in `Debug`
/// output and log events and has no effect on scoring.
pub struct Preference<S: ?Sized> {
    label: Option<String>,
    scorer: Arc<dyn Score<S>>,
}

impl<S: ?Sized> Preference<S> {
    /// Wrap a scoring function in an unlabeled preference.
    pub fn new<F>(scorer: F) -> Self
    where
        F: Score<S> + 'static,
    {
        Self {
            label: None,
            scorer: Arc::new(scorer),
        }
    }

    /// Wrap a scoring function in a labeled preference.
    ///
    /// The label identifies the preference in `Debug` output and log events.
    pub fn named<F>(label: impl Into<String>, scorer: F) -> Self
    where
        F: Score<S> + 'static,
    {
        Self {
            label: Some(label.into()),
            scorer: Arc::new(scorer),
        }
    }

    /// Human-readable label for this preference, or `"preference"` when
    /// unlabeled.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or("preference")
    }

    /// Score the subject and clamp the result into `[MIN_SCORE, MAX_SCORE]`.
    ///
    /// Raw scores below the range return [`MIN_SCORE`]; raw scores above it
    /// return [`MAX_SCORE`]; in-range scores pass through unchanged. A NaN
    /// raw score maps to neutral `0.0` so that the clamp guarantee holds for
    /// every possible scoring function.
    ///
    /// Panics raised by the scoring function propagate to the caller
    /// unchanged; the panel performs no isolation or recovery.
    pub fn inspect(&self, subject: &S) -> f64 {
        let raw = self.scorer.score(subject);
        if raw.is_nan() {
            return 0.0;
        }
        if raw < MIN_SCORE {
            MIN_SCORE
        } else if raw > MAX_SCORE {
            MAX_SCORE
        } else {
            raw
        }
    }
}

impl<S: ?Sized> Clone for Preference<S> {
    fn clone(&self) -> Self {
        Self {
            label: self.label.clone(),
            scorer: Arc::clone(&self.scorer),
        }
    }
}

impl<S: ?Sized> fmt::Debug for Preference<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preference")
            .field("label", &self.label())
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
