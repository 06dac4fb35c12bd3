use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Compositing strategy.
///
/// - `Weighted` — per-pixel average of all inputs.
/// - `Simple`   — per-pixel sum, saturated at 255 (a "lighten" effect).
/// - `Grid`     — tiles up to nine inputs in a square grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MergeMethod {
    Weighted,
    Simple,
    Grid,
}

impl MergeMethod {
    pub const ALL: [MergeMethod; 3] = [MergeMethod::Weighted, MergeMethod::Simple, MergeMethod::Grid];

    pub fn as_str(self) -> &'static str {
        match self {
            MergeMethod::Weighted => "weighted",
            MergeMethod::Simple   => "simple",
            MergeMethod::Grid     => "grid",
        }
    }
}

impl FromStr for MergeMethod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim().to_ascii_lowercase();
        MergeMethod::ALL
            .into_iter()
            .find(|m| m.as_str() == name)
            .ok_or_else(|| Error::UnknownMethod(s.to_owned()))
    }
}

impl fmt::Display for MergeMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
