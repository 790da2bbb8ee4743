//! Round key set derived from a master key.

use crate::block::Block;

/// The ten expanded round keys.
///
/// Immutable once derived; recompute whenever the master key changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub(crate) [Block; 10]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=9).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}
