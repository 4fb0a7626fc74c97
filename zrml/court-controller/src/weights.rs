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

//! Weights of zrml_court_controller. The values are estimates until the benchmarks in
//! `benchmarks.rs` are run on reference hardware.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{traits::Get, weights::Weight};

/// Trait containing the required functions for weight retrival within zrml_court_controller.
pub trait WeightInfoZeitgeist {
    fn heartbeat(n: u32) -> Weight;
    fn compute_term_randomness() -> Weight;
    fn record_term_randomness() -> Weight;
    fn set_governor() -> Weight;
    fn set_module() -> Weight;
}

/// Weight functions for zrml_court_controller.
pub struct WeightInfo<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfoZeitgeist for WeightInfo<T> {
    /// `n` is the number of entered terms, each of which is written to `Terms`.
    fn heartbeat(n: u32) -> Weight {
        Weight::from_parts(13_480_000, 3554)
            .saturating_add(Weight::from_parts(2_950_000, 0).saturating_mul(n.into()))
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
            .saturating_add(T::DbWeight::get().writes((1_u64).saturating_mul(n.into())))
            .saturating_add(Weight::from_parts(0, 2564).saturating_mul(n.into()))
    }
    fn compute_term_randomness() -> Weight {
        Weight::from_parts(9_870_000, 3554).saturating_add(T::DbWeight::get().reads(2))
    }
    /// Reads the current term and the random material, writes the term.
    fn record_term_randomness() -> Weight {
        Weight::from_parts(21_310_000, 4079)
            .saturating_add(T::DbWeight::get().reads(3))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn set_governor() -> Weight {
        Weight::from_parts(11_020_000, 3522)
            .saturating_add(T::DbWeight::get().reads(1))
            .saturating_add(T::DbWeight::get().writes(1))
    }
    fn set_module() -> Weight {
        Weight::from_parts(12_640_000, 3522)
            .saturating_add(T::DbWeight::get().reads(2))
            .saturating_add(T::DbWeight::get().writes(1))
    }
}
