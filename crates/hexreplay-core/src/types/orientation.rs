//! Display orientation flags

use serde::{Deserialize, Serialize};

/// Display hints carried alongside the history: board rotation, mirror,
/// alternate coordinate labels, color scheme.
///
/// The engine never interprets these; it only carries them so a shared
/// link reproduces the view it was taken from. The link codec renders
/// them as the `rNN`, `m`, `n` and `cN` parameter tokens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Orientation {
    /// Rotation steps (`rNN`), absent when the view uses its default
    pub rotation: Option<u32>,
    /// Mirrored board (`m`)
    pub mirror: bool,
    /// Alternate coordinate labels (`n`)
    pub alt_labels: bool,
    /// Color scheme index (`cN`)
    pub scheme: Option<u32>,
}

impl Orientation {
    /// True when no flag deviates from the default view
    #[inline]
    pub fn is_default(self) -> bool {
        self == Orientation::default()
    }
}
