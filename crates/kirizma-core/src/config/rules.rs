use serde::{Deserialize, Serialize};

/// Romanization overrides used in romaji mode.
///
/// Each flag swaps the default letter of one sound for its alternate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RomajiRules {
    /// じ → `J` instead of `Z`
    pub use_j_for_zi: bool,
    /// ち → `C` instead of `T`
    pub use_c_for_chi: bool,
    /// ふ → `F` instead of `H`
    pub use_f_for_fu: bool,
    /// ら..ろ → `L` instead of `R`
    pub use_l_for_ra_row: bool,
    /// ん → `X` instead of `N`
    pub use_x_for_n: bool,
}
