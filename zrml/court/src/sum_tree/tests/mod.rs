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
    mock::{ExtBuilder, Runtime},
    sum_tree::{
        traits::{CheckpointHistory, CheckpointedSumTree},
        types::{NodeHistory, NodeId, SearchHit, SumTree, SumTreeError, UpdateOperation, CHILDREN},
    },
    Error, SumTreeCheckpointCount,
};
use frame_support::{assert_err, assert_ok};
use sp_runtime::DispatchError;
use zeitgeist_primitives::types::TermId;

mod search;

type Tree = SumTree<Runtime>;

mod utility {
    use super::*;

    pub(super) fn tree_error(error: SumTreeError) -> DispatchError {
        Error::<Runtime>::SumTreeError(error).into()
    }

    /// Inserts `values` at `time` and returns their keys.
    pub(super) fn insert_items(time: TermId, values: &[u128]) -> Vec<u64> {
        values.iter().map(|value| Tree::insert(time, *value).unwrap()).collect()
    }

    /// Checks that every inner node is the sum of its children at `time`.
    pub(super) fn assert_sum_invariant(time: TermId) {
        let height = Tree::height_at(time);
        let next_key = Tree::next_key();
        for level in 1..=height {
            let leaves_per_node = CHILDREN.pow(level.into());
            let node_count = next_key.div_ceil(leaves_per_node).max(1);
            for key in 0..node_count {
                let node = NodeId { level, key };
                let children_sum: u128 = (0..CHILDREN)
                    .filter_map(|index| node.child(index))
                    .map(|child| NodeHistory::<Runtime>::new(child).value_at(time))
                    .sum();
                assert_eq!(
                    NodeHistory::<Runtime>::new(node).value_at(time),
                    children_sum,
                    "node {:?} at time {}",
                    node,
                    time,
                );
            }
        }
    }

    /// Resolves `values` one by one by scanning the items in key order.
    pub(super) fn linear_search(values: &[u128], time: TermId) -> Vec<u64> {
        values
            .iter()
            .map(|value| {
                let mut upper = 0u128;
                (0..Tree::next_key())
                    .find(|key| {
                        upper += Tree::item_at(*key, time);
                        *value < upper
                    })
                    .unwrap()
            })
            .collect()
    }
}
