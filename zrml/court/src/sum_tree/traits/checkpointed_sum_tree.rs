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

use crate::sum_tree::types::{SearchHit, UpdateOperation};
use alloc::vec::Vec;
use sp_runtime::{DispatchError, DispatchResult};
use zeitgeist_primitives::types::TermId;

/// A 16-ary sum tree whose nodes keep a history of their values.
///
/// All writes happen at a `time` which must not precede the time of any earlier write. Reads can
/// be performed at any point in time.
pub(crate) trait CheckpointedSumTree {
    type Balance;

    /// The key the next inserted item receives.
    fn next_key() -> u64;

    /// The current height of the tree.
    fn height() -> u8;

    /// The height the tree had at `time`.
    fn height_at(time: TermId) -> u8;

    /// Inserts a new item with `value` at `time` and returns its key.
    fn insert(time: TermId, value: Self::Balance) -> Result<u64, DispatchError>;

    /// Inserts a new item with `value` at `time` under `key`, which must be the next key.
    fn insert_at(time: TermId, key: u64, value: Self::Balance) -> DispatchResult;

    /// Sets the value of item `key` from `time` on.
    fn set(key: u64, time: TermId, value: Self::Balance) -> DispatchResult;

    /// Increases or decreases the value of item `key` by `delta` from `time` on.
    fn update(
        key: u64,
        time: TermId,
        delta: Self::Balance,
        operation: UpdateOperation,
    ) -> DispatchResult;

    /// The most recent value of item `key`.
    fn item(key: u64) -> Self::Balance;

    /// The value of item `key` at `time`.
    fn item_at(key: u64, time: TermId) -> Self::Balance;

    /// The most recent sum of all items.
    fn total() -> Self::Balance;

    /// The sum of all items at `time`.
    fn total_at(time: TermId) -> Self::Balance;

    /// Resolves each of the ascending cumulative `values` to the item it falls on at `time`.
    ///
    /// Item `k` covers the cumulative range `[s, s + v)`, where `s` is the sum of all items with a
    /// key lower than `k` and `v` is the value of item `k`. Hits are returned in the order of
    /// `values`.
    fn search(
        values: &[Self::Balance],
        time: TermId,
    ) -> Result<Vec<SearchHit<Self::Balance>>, DispatchError>;
}
