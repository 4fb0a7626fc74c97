// Copyright 2024-2025 Forecasting Technologies LTD.
//
// This file is part of Zeitgeist.
//
// Zeitgeist is free software: you can redistribute it and/or modify it
// under the terms of the GNU General Public License as published by the
// Free Software Foundation, either version 3 of the License, or (at
// your option) any later version.
//
// Zeitgeist is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with Zeitgeist. If not, see <https://www.gnu.org/licenses/>.

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Number of children of every inner node.
pub(crate) const CHILDREN: u64 = 16;

/// Number of key bits consumed by every level of the tree.
const BITS_PER_LEVEL: u32 = 4;

/// Identifies a node of the sum tree.
///
/// Leaves are on level zero and their key is the key of the item they hold. The ancestor of leaf
/// `k` on level `l` has key `k >> (4 * l)`, so the children of `(l, p)` are `(l - 1, 16 * p + i)`.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct NodeId {
    pub level: u8,
    pub key: u64,
}

impl NodeId {
    pub(crate) fn leaf(key: u64) -> Self {
        NodeId { level: 0, key }
    }

    pub(crate) fn root(height: u8) -> Self {
        NodeId { level: height, key: 0 }
    }

    /// Returns the ancestor of leaf `key` on `level`.
    pub(crate) fn ancestor(key: u64, level: u8) -> Self {
        let key = key.checked_shr(Self::shift(level)).unwrap_or(0);
        NodeId { level, key }
    }

    /// Returns the child with index `index` (`0..16`). `None` for leaves.
    pub(crate) fn child(&self, index: u64) -> Option<Self> {
        let level = self.level.checked_sub(1)?;
        let key = self.key.saturating_mul(CHILDREN).saturating_add(index);
        Some(NodeId { level, key })
    }

    /// Returns the key of the leftmost leaf below this node.
    pub(crate) fn first_leaf(&self) -> u64 {
        self.key.checked_shl(Self::shift(self.level)).unwrap_or(0)
    }

    /// Returns the number of leaves a tree of `height` can hold or `None` if it can hold every
    /// `u64` key.
    pub(crate) fn capacity(height: u8) -> Option<u64> {
        CHILDREN.checked_pow(height.into())
    }

    fn shift(level: u8) -> u32 {
        BITS_PER_LEVEL.saturating_mul(level.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(0x1234, 0, 0x1234)]
    #[test_case(0x1234, 1, 0x123)]
    #[test_case(0x1234, 3, 0x1)]
    #[test_case(0x1234, 4, 0x0)]
    #[test_case(u64::MAX, 16, 0x0)]
    fn ancestor_works(key: u64, level: u8, expected: u64) {
        assert_eq!(NodeId::ancestor(key, level), NodeId { level, key: expected });
    }

    #[test]
    fn child_and_first_leaf_are_consistent() {
        let node = NodeId { level: 2, key: 3 };
        assert_eq!(node.first_leaf(), 3 * 256);
        assert_eq!(node.child(0), Some(NodeId { level: 1, key: 48 }));
        assert_eq!(node.child(15), Some(NodeId { level: 1, key: 63 }));
        assert_eq!(node.child(15).map(|c| c.first_leaf()), Some(63 * 16));
        assert_eq!(NodeId::leaf(7).child(0), None);
    }

    #[test_case(1, Some(16))]
    #[test_case(2, Some(256))]
    #[test_case(15, Some(1 << 60))]
    #[test_case(16, None)]
    fn capacity_works(height: u8, expected: Option<u64>) {
        assert_eq!(NodeId::capacity(height), expected);
    }
}
