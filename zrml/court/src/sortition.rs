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

//! Weighted sortition: maps a batch of a draft round to a range of cumulative active balance and
//! samples pseudo-random points within that range.

use crate::{BalanceOf, Config, Error};
use alloc::vec::Vec;
use frame_support::{ensure, Blake2_256, StorageHasher};
use parity_scale_codec::Encode;
use sp_core::U256;
use sp_runtime::{DispatchError, SaturatedConversion};
use zeitgeist_primitives::types::DisputeId;

/// Returns the range `[low, high)` of cumulative active balance a batch draws from.
///
/// A round of `total_requested` jurors splits `total_weight` into equal slices. The batch starting
/// at `selected` covers the slices of its `batch` jurors.
pub(crate) fn draft_batch_bounds<T>(
    selected: u32,
    batch: u32,
    total_requested: u32,
    total_weight: BalanceOf<T>,
) -> Result<(BalanceOf<T>, BalanceOf<T>), DispatchError>
where
    T: Config,
{
    ensure!(total_requested > 0, Error::<T>::InvalidRoundSize);
    let end = selected.checked_add(batch).ok_or(Error::<T>::DraftBatchExceedsRound)?;

    let total_weight = U256::from(total_weight.saturated_into::<u128>());
    let total_requested = U256::from(total_requested);
    // Neither product can overflow, the factors are at most `u32::MAX` and `u128::MAX`.
    let low = total_weight.saturating_mul(U256::from(selected)) / total_requested;
    let high = total_weight.saturating_mul(U256::from(end)) / total_requested;

    Ok((low.low_u128().saturated_into(), high.low_u128().saturated_into()))
}

/// The seed of one sortition pass.
#[derive(Clone, Copy, Debug, Encode, Eq, PartialEq)]
pub(crate) struct SortitionSeed<Hash> {
    pub(crate) randomness: Hash,
    pub(crate) dispute_id: DisputeId,
    pub(crate) iteration: u32,
}

impl<Hash> SortitionSeed<Hash>
where
    Hash: Encode,
{
    /// The pseudo-random number of the `index`-th point of the pass.
    fn point_hash(&self, index: u32) -> U256 {
        let hash = Blake2_256::hash(
            &(&self.randomness, self.dispute_id, self.iteration, index).encode(),
        );
        U256::from_big_endian(&hash)
    }
}

/// Samples `batch` points of the range `[low, high)`, sorted in ascending order. All points are
/// `low` if the range is empty.
pub(crate) fn sample<T, Hash>(
    seed: &SortitionSeed<Hash>,
    batch: u32,
    low: BalanceOf<T>,
    high: BalanceOf<T>,
) -> Vec<BalanceOf<T>>
where
    T: Config,
    Hash: Encode,
{
    let low_u256 = U256::from(low.saturated_into::<u128>());
    let span = U256::from(high.saturated_into::<u128>()).saturating_sub(low_u256);

    let mut points = (0..batch)
        .map(|index| {
            if span.is_zero() {
                return low;
            }
            let offset = seed.point_hash(index) % span;
            // `low + offset < high`, so the point fits into a balance.
            low_u256.saturating_add(offset).low_u128().saturated_into()
        })
        .collect::<Vec<_>>();
    points.sort();
    points
}
