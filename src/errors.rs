//! Domain errors for the focus-group consensus engine.

use thiserror::Error;

/// Errors that can occur when configuring or consulting a panel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PanelError {
    /// The panel sizing parameters are unusable.
    ///
    /// Raised at construction time, before any evaluation can run. A panel of
    /// zero panelists has no one to average over.
    #[error("invalid panel configuration: {reason}")]
    InvalidConfiguration {
        /// Human-readable description of what was wrong.
        reason: String,
    },

    /// An evaluation was requested before any preference was registered.
    ///
    /// Sampling and averaging over an empty pool is undefined, so `opine`,
    /// `verdict`, and `deliberate` all refuse to run until at least one
    /// preference exists.
    #[error("no preferences registered; the panel has no basis for an opinion")]
    EmptyPool,
}

/// Convenience alias used throughout the crate.
pub type PanelResult<T> = Result<T, PanelError>;
