//! Focus Group - Simulated Consensus Engine
//!
//! A focus group is a panel of simulated evaluators ("panelists"), each
//! holding a random subset of scoring preferences, that independently score
//! an arbitrary subject. Their scores aggregate into a consensus opinion
//! (a score in `[-100, 100]`) or a verdict (a binary liked/disliked
//! decision). The crate models statistical consensus formation under
//! randomized, partial information distribution.
//!
//! # Architecture
//!
//! Three components compose bottom-up:
//!
//! - **Preference** (`preference`): wraps a single scoring function and
//!   clamps its output into the fixed score range.
//! - **Panelist** (`panelist`): holds a duplicate-free random subset of
//!   preferences and averages their clamped scores.
//! - **Panel** (`panel`): owns the preference pool, recruits a fresh roster
//!   of panelists for every evaluation, and aggregates their opinions and
//!   votes.
//!
//! Every evaluation re-samples the entire roster, so consecutive calls are
//! independent draws from the consensus distribution; they converge as the
//! panelist count grows.
//!
//! # Example
//!
//! ```
//! use focus_group::{Panel, PanelConfig};
//!
//! # fn main() -> focus_group::PanelResult<()> {
//! let config = PanelConfig {
//!     panelists: 10,
//!     preferences_per_panelist: 2,
//! };
//! let mut panel = Panel::with_seed(config, 42)?;
//!
//! panel.add_named_preference("brevity", |s: &str| 100.0 - s.len() as f64);
//! panel.add_named_preference("exuberance", |s: &str| {
//!     s.matches('!').count() as f64 * 30.0
//! });
//! panel.add_preference(|_: &str| 10.0);
//!
//! let opinion = panel.opine("short and sweet!")?;
//! assert!((-100.0..=100.0).contains(&opinion));
//!
//! let liked = panel.verdict("short and sweet!")?;
//! let report = panel.deliberate("short and sweet!")?;
//! assert_eq!(report.turnout(), 10);
//! # let _ = liked;
//! # Ok(())
//! # }
//! ```

pub mod errors;
pub mod panel;
pub mod panelist;
pub mod preference;

// Re-export commonly used types for convenience
pub use errors::{PanelError, PanelResult};
pub use panel::{Deliberation, Panel, PanelConfig};
pub use panelist::Panelist;
pub use preference::{Preference, Score, MAX_SCORE, MIN_SCORE};
