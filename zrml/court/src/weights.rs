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

//! Weights of zrml_court. The values are estimates until the benchmarks in `benchmarks.rs` are run
//! on reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

/// Trait containing the required functions for weight retrival within zrml_court.
pub trait WeightInfoZeitgeist {
    fn stake() -> Weight;
    fn unstake() -> Weight;
    fn activate() -> Weight;
    fn deactivate() -> Weight;
    fn process_deactivation_request() -> Weight;
    fn set_total_active_balance_limit() -> Weight;
    fn recover_funds() -> Weight;
}

/// Weight functions for zrml_court.
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    fn stake() -> Weight {
        Weight::from_parts(38_210_000, 4714)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(2))
    }
    /// Includes one implicit term transition.
    fn unstake() -> Weight {
        Weight::from_parts(44_650_000, 4714)
            .saturating_add(T::DbWeight::get().reads(4))
            .saturating_add(T::DbWeight::get().writes(4))
    }
    /// Worst case: the insertion grows the sum tree by one level, touching 17 nodes on two
    /// levels.
    fn activate() -> Weight {
        Weight::from_parts(182_400_000, 44_524)
            .saturating_add(T::DbWeight::get().reads(41))
            .saturating_add(T::DbWeight::get().writes(40))
    }
    fn deactivate() -> Weight {
        Weight::from_parts(171_050_000, 44_524)
            .saturating_add(T::DbWeight::get().reads(39))
            .saturating_add(T::DbWeight::get().writes(37))
    }
    fn process_deactivation_request() -> Weight {
        Weight::from_parts(24_300_000, 3604)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(3))
    }
    fn set_total_active_balance_limit() -> Weight {
        Weight::from_parts(10_120_000, 3522)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    /// Moves funds between two accounts.
    fn recover_funds() -> Weight {
        Weight::from_parts(52_480_000, 6196)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(2))
    }
}
