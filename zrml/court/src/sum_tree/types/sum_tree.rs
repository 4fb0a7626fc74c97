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
        traits::{CheckpointHistory, CheckpointedSumTree},
        types::{
            HeightHistory, NodeHistory, NodeId, SearchHit, SumTreeError, UpdateOperation,
            CHILDREN,
        },
    },
    BalanceOf, Config, SumTreeNextKey,
};
use alloc::{vec, vec::Vec};
use core::marker::PhantomData;
use frame_support::ensure;
use sp_runtime::{
    traits::{CheckedAdd, CheckedSub, Saturating, Zero},
    DispatchError, DispatchResult,
};
use zeitgeist_primitives::types::TermId;

/// The checkpointed sum tree of juror active balances, backed by pallet storage.
pub(crate) struct SumTree<T>(PhantomData<T>);

/// A node together with the range of search values which fall into its subtree.
struct SearchGroup<Balance> {
    node: NodeId,
    /// The sum of all items left of the node's subtree.
    offset: Balance,
    /// Range of indices into the search values.
    start: usize,
    end: usize,
}

impl<T> SumTree<T>
where
    T: Config,
{
    fn root_history() -> NodeHistory<T> {
        NodeHistory::new(NodeId::root(Self::height()))
    }

    /// Fails unless `delta` can be added to the tree at `time`. The root is part of every update,
    /// so it carries the most recent checkpoint and the largest value of the tree.
    fn ensure_root_accepts(time: TermId, delta: BalanceOf<T>) -> DispatchResult {
        let root = Self::root_history();
        root.ensure_writable_at(time).map_err(|e| e.into_dispatch_error::<T>())?;
        root.latest()
            .checked_add(&delta)
            .ok_or(SumTreeError::Overflow.into_dispatch_error::<T>())?;
        Ok(())
    }

    /// Adds a level above the current root. The new root inherits the value of the old root.
    fn grow(time: TermId) -> DispatchResult {
        let height = Self::height();
        let new_height =
            height.checked_add(1).ok_or(SumTreeError::Overflow.into_dispatch_error::<T>())?;
        let old_root_value = NodeHistory::<T>::new(NodeId::root(height)).latest();
        NodeHistory::<T>::new(NodeId::root(new_height))
            .record(time, old_root_value)
            .map_err(|e| e.into_dispatch_error::<T>())?;
        HeightHistory::<T>::new()
            .record(time, new_height)
            .map_err(|e| e.into_dispatch_error::<T>())?;
        log::debug!(
            target: crate::LOG_TARGET,
            "Sum tree grew to height {} at term {}",
            new_height,
            time,
        );
        Ok(())
    }

    fn node_value_at(node: NodeId, time: TermId) -> BalanceOf<T> {
        NodeHistory::<T>::new(node).value_at(time)
    }
}

impl<T> CheckpointedSumTree for SumTree<T>
where
    T: Config,
{
    type Balance = BalanceOf<T>;

    fn next_key() -> u64 {
        SumTreeNextKey::<T>::get()
    }

    fn height() -> u8 {
        HeightHistory::<T>::new().latest()
    }

    fn height_at(time: TermId) -> u8 {
        HeightHistory::<T>::new().value_at(time)
    }

    fn insert(time: TermId, value: Self::Balance) -> Result<u64, DispatchError> {
        let key = Self::next_key();
        Self::insert_at(time, key, value)?;
        Ok(key)
    }

    fn insert_at(time: TermId, key: u64, value: Self::Balance) -> DispatchResult {
        ensure!(key == Self::next_key(), SumTreeError::KeyNotAdjacent.into_dispatch_error::<T>());
        let next_key = key.checked_add(1).ok_or(SumTreeError::Overflow.into_dispatch_error::<T>())?;
        Self::ensure_root_accepts(time, value)?;

        if let Some(capacity) = NodeId::capacity(Self::height()) {
            if key >= capacity {
                Self::grow(time)?;
            }
        }
        SumTreeNextKey::<T>::put(next_key);

        Self::update(key, time, value, UpdateOperation::Increase)
    }

    fn set(key: u64, time: TermId, value: Self::Balance) -> DispatchResult {
        let current = Self::item(key);
        if value >= current {
            Self::update(key, time, value.saturating_sub(current), UpdateOperation::Increase)
        } else {
            Self::update(key, time, current.saturating_sub(value), UpdateOperation::Decrease)
        }
    }

    fn update(
        key: u64,
        time: TermId,
        delta: Self::Balance,
        operation: UpdateOperation,
    ) -> DispatchResult {
        ensure!(key < Self::next_key(), SumTreeError::KeyDoesNotExist.into_dispatch_error::<T>());
        if delta.is_zero() {
            return Ok(());
        }

        // Check everything that can go wrong up front, so that no partial path is written.
        match operation {
            UpdateOperation::Increase => Self::ensure_root_accepts(time, delta)?,
            UpdateOperation::Decrease => {
                Self::ensure_root_accepts(time, Zero::zero())?;
                Self::item(key)
                    .checked_sub(&delta)
                    .ok_or(SumTreeError::Underflow.into_dispatch_error::<T>())?;
            }
        }

        for level in 0..=Self::height() {
            let mut history = NodeHistory::<T>::new(NodeId::ancestor(key, level));
            let current = history.latest();
            let new_value = match operation {
                UpdateOperation::Increase => {
                    current.checked_add(&delta).ok_or(SumTreeError::Overflow)
                }
                UpdateOperation::Decrease => {
                    current.checked_sub(&delta).ok_or(SumTreeError::Underflow)
                }
            }
            .map_err(|e| e.into_dispatch_error::<T>())?;
            history.record(time, new_value).map_err(|e| e.into_dispatch_error::<T>())?;
        }

        Ok(())
    }

    fn item(key: u64) -> Self::Balance {
        NodeHistory::<T>::new(NodeId::leaf(key)).latest()
    }

    fn item_at(key: u64, time: TermId) -> Self::Balance {
        Self::node_value_at(NodeId::leaf(key), time)
    }

    fn total() -> Self::Balance {
        Self::root_history().latest()
    }

    fn total_at(time: TermId) -> Self::Balance {
        Self::node_value_at(NodeId::root(Self::height_at(time)), time)
    }

    fn search(
        values: &[Self::Balance],
        time: TermId,
    ) -> Result<Vec<SearchHit<Self::Balance>>, DispatchError> {
        let last =
            values.last().ok_or(SumTreeError::MissingSearchValues.into_dispatch_error::<T>())?;
        ensure!(
            values.windows(2).all(|pair| pair[0] <= pair[1]),
            SumTreeError::UnsortedSearchValues.into_dispatch_error::<T>()
        );
        let height = Self::height_at(time);
        let root = NodeId::root(height);
        ensure!(
            *last < Self::node_value_at(root, time),
            SumTreeError::OutOfBounds.into_dispatch_error::<T>()
        );

        let next_key = Self::next_key();
        let mut groups =
            vec![SearchGroup { node: root, offset: Zero::zero(), start: 0, end: values.len() }];

        // Every level partitions the values of each group once against the children's sums.
        for _ in 0..height {
            let mut next_groups = Vec::with_capacity(groups.len());
            for group in groups {
                let mut offset = group.offset;
                let mut cursor = group.start;
                for index in 0..CHILDREN {
                    if cursor >= group.end {
                        break;
                    }
                    let Some(child) = group.node.child(index) else {
                        break;
                    };
                    if child.first_leaf() >= next_key {
                        break;
                    }
                    let upper = offset
                        .checked_add(&Self::node_value_at(child, time))
                        .ok_or(SumTreeError::Overflow.into_dispatch_error::<T>())?;
                    let start = cursor;
                    while cursor < group.end && values[cursor] < upper {
                        cursor = cursor.saturating_add(1);
                    }
                    if cursor > start {
                        next_groups.push(SearchGroup { node: child, offset, start, end: cursor });
                    }
                    offset = upper;
                }
                ensure!(cursor == group.end, SumTreeError::OutOfBounds.into_dispatch_error::<T>());
            }
            groups = next_groups;
        }

        let mut hits = Vec::with_capacity(values.len());
        for group in groups {
            let value = Self::node_value_at(group.node, time);
            for _ in group.start..group.end {
                hits.push(SearchHit { key: group.node.key, value });
            }
        }

        Ok(hits)
    }
}
