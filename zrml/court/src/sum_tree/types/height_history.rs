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

use crate::{
    sum_tree::{traits::CheckpointHistory, types::Checkpoint},
    Config, SumTreeHeightCheckpointCount, SumTreeHeightCheckpoints,
};
use core::marker::PhantomData;

/// Height of an empty tree.
pub(crate) const INITIAL_HEIGHT: u8 = 1;

/// The checkpointed height of the sum tree, backed by pallet storage.
pub(crate) struct HeightHistory<T>(PhantomData<T>);

impl<T> HeightHistory<T> {
    pub(crate) fn new() -> Self {
        HeightHistory(PhantomData)
    }
}

impl<T> CheckpointHistory for HeightHistory<T>
where
    T: Config,
{
    type Value = u8;

    fn initial_value(&self) -> u8 {
        INITIAL_HEIGHT
    }

    fn len(&self) -> u32 {
        SumTreeHeightCheckpointCount::<T>::get()
    }

    fn checkpoint(&self, index: u32) -> Option<Checkpoint<u8>> {
        SumTreeHeightCheckpoints::<T>::get(index)
    }

    fn push(&mut self, checkpoint: Checkpoint<u8>) {
        let index = self.len();
        SumTreeHeightCheckpoints::<T>::insert(index, checkpoint);
        SumTreeHeightCheckpointCount::<T>::put(index.saturating_add(1));
    }

    fn overwrite(&mut self, index: u32, checkpoint: Checkpoint<u8>) {
        SumTreeHeightCheckpoints::<T>::insert(index, checkpoint);
    }
}
