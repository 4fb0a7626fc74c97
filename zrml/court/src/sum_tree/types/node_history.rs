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
    sum_tree::{
        traits::CheckpointHistory,
        types::{Checkpoint, NodeId},
    },
    BalanceOf, Config, SumTreeCheckpointCount, SumTreeCheckpoints,
};
use core::marker::PhantomData;
use sp_runtime::traits::Zero;

/// The checkpoints of a single tree node, backed by pallet storage.
pub(crate) struct NodeHistory<T> {
    node: NodeId,
    _marker: PhantomData<T>,
}

impl<T> NodeHistory<T> {
    pub(crate) fn new(node: NodeId) -> Self {
        NodeHistory { node, _marker: PhantomData }
    }
}

impl<T> CheckpointHistory for NodeHistory<T>
where
    T: Config,
{
    type Value = BalanceOf<T>;

    fn initial_value(&self) -> Self::Value {
        Zero::zero()
    }

    fn len(&self) -> u32 {
        SumTreeCheckpointCount::<T>::get(self.node)
    }

    fn checkpoint(&self, index: u32) -> Option<Checkpoint<Self::Value>> {
        SumTreeCheckpoints::<T>::get(self.node, index)
    }

    fn push(&mut self, checkpoint: Checkpoint<Self::Value>) {
        let index = self.len();
        SumTreeCheckpoints::<T>::insert(self.node, index, checkpoint);
        SumTreeCheckpointCount::<T>::insert(self.node, index.saturating_add(1));
    }

    fn overwrite(&mut self, index: u32, checkpoint: Checkpoint<Self::Value>) {
        SumTreeCheckpoints::<T>::insert(self.node, index, checkpoint);
    }
}
