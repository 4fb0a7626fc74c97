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

use super::*;

fn hits(keys_and_values: &[(u64, u128)]) -> Vec<SearchHit<u128>> {
    keys_and_values.iter().map(|&(key, value)| SearchHit { key, value }).collect()
}

#[test]
fn search_resolves_values_to_items() {
    ExtBuilder::default().build().execute_with(|| {
        // Cumulative ranges: [0, 5), empty, [5, 15), [15, 18)
        utility::insert_items(1, &[5, 0, 10, 3]);
        let values = [0, 4, 5, 14, 15, 17];
        assert_eq!(
            Tree::search(&values, 1),
            Ok(hits(&[(0, 5), (0, 5), (2, 10), (2, 10), (3, 3), (3, 3)]))
        );
    });
}

#[test]
fn search_fails_on_invalid_values() {
    ExtBuilder::default().build().execute_with(|| {
        assert_err!(Tree::search(&[0], 1), utility::tree_error(SumTreeError::OutOfBounds));

        utility::insert_items(1, &[5, 3]);
        assert_err!(Tree::search(&[], 1), utility::tree_error(SumTreeError::MissingSearchValues));
        assert_err!(
            Tree::search(&[3, 1], 1),
            utility::tree_error(SumTreeError::UnsortedSearchValues)
        );
        assert_err!(Tree::search(&[1, 8], 1), utility::tree_error(SumTreeError::OutOfBounds));
        assert_err!(Tree::search(&[0], 0), utility::tree_error(SumTreeError::OutOfBounds));
    });
}

#[test]
fn search_uses_values_at_time() {
    ExtBuilder::default().build().execute_with(|| {
        utility::insert_items(1, &[5, 5]);
        assert_ok!(Tree::update(0, 2, 5, UpdateOperation::Decrease));
        assert_ok!(Tree::update(1, 2, 10, UpdateOperation::Increase));

        assert_eq!(Tree::search(&[4, 5], 1), Ok(hits(&[(0, 5), (1, 5)])));
        assert_eq!(Tree::search(&[0, 14], 2), Ok(hits(&[(1, 15), (1, 15)])));
    });
}

#[test]
fn search_uses_height_at_time() {
    ExtBuilder::default().build().execute_with(|| {
        utility::insert_items(1, &[1; 16]);
        utility::insert_items(2, &[100]);
        assert_eq!(Tree::search(&[15], 1), Ok(hits(&[(15, 1)])));
        assert_err!(Tree::search(&[16], 1), utility::tree_error(SumTreeError::OutOfBounds));
        assert_eq!(Tree::search(&[16, 115], 2), Ok(hits(&[(16, 100), (16, 100)])));
    });
}

#[test]
fn search_matches_linear_search_on_multi_level_tree() {
    ExtBuilder::default().build().execute_with(|| {
        let values = (0..300).map(|i| (i % 7) * 1_000 + i).collect::<Vec<u128>>();
        utility::insert_items(1, &values);
        let total = Tree::total();
        assert_eq!(Tree::height(), 3);

        let targets = (0..total).step_by(997).collect::<Vec<_>>();
        let expected = utility::linear_search(&targets, 1);
        let actual = Tree::search(&targets, 1).unwrap();
        assert_eq!(actual.iter().map(|hit| hit.key).collect::<Vec<_>>(), expected);
        assert!(actual.iter().all(|hit| hit.value == values[hit.key as usize]));
    });
}

#[test]
fn search_is_idempotent() {
    ExtBuilder::default().build().execute_with(|| {
        utility::insert_items(1, &[3, 1, 4, 1, 5, 9, 2, 6]);
        let targets = [0, 3, 3, 8, 20, 30];
        let first = Tree::search(&targets, 1).unwrap();
        assert_eq!(Tree::search(&targets, 1).unwrap(), first);
        assert_eq!(
            first.iter().map(|hit| hit.key).collect::<Vec<_>>(),
            utility::linear_search(&targets, 1)
        );
    });
}
