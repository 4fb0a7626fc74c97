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

#![allow(
    // Auto-generated code is a no man's land
    clippy::arithmetic_side_effects
)]
#![cfg(feature = "runtime-benchmarks")]

use crate::{Pallet as CourtController, *};
use frame_benchmarking::v2::*;
use frame_support::traits::{Get, Hooks};
use frame_system::{pallet_prelude::BlockNumberFor, RawOrigin};
use sp_runtime::{
    traits::{One, Saturating},
    SaturatedConversion,
};
use zeitgeist_primitives::types::{CourtModule, GovernorRole};

fn set_block_number<T: Config>(n: BlockNumberFor<T>) {
    frame_system::Pallet::<T>::set_block_number(n);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn heartbeat(n: Linear<1, 64>) {
        let caller: T::AccountId = whitelisted_caller();
        let duration = T::TermDuration::get();
        set_block_number::<T>(duration.saturating_mul(n.saturated_into()));

        #[extrinsic_call]
        heartbeat(RawOrigin::Signed(caller), n);

        assert_eq!(CurrentTermId::<T>::get(), u64::from(n));
    }

    #[benchmark]
    fn compute_term_randomness() {
        let caller: T::AccountId = whitelisted_caller();
        let recording_block = Terms::<T>::get(0).randomness_block + One::one();
        set_block_number::<T>(recording_block);
        CourtController::<T>::on_initialize(recording_block);

        #[extrinsic_call]
        compute_term_randomness(RawOrigin::Signed(caller), 0);

        assert!(Terms::<T>::get(0).randomness.is_some());
    }

    #[benchmark]
    fn record_term_randomness() {
        let recording_block = Terms::<T>::get(0).randomness_block + One::one();
        set_block_number::<T>(recording_block);

        #[block]
        {
            CourtController::<T>::on_initialize(recording_block);
        }

        assert!(Terms::<T>::get(0).randomness.is_some());
    }

    #[benchmark]
    fn set_governor() {
        let governor: T::AccountId = whitelisted_caller();
        Governors::<T>::insert(GovernorRole::ConfigGovernor, governor.clone());
        let successor: T::AccountId = account("successor", 0, 0);

        #[extrinsic_call]
        set_governor(RawOrigin::Signed(governor), GovernorRole::ConfigGovernor, successor.clone());

        assert_eq!(Governors::<T>::get(GovernorRole::ConfigGovernor), Some(successor));
    }

    #[benchmark]
    fn set_module() {
        let governor: T::AccountId = whitelisted_caller();
        Governors::<T>::insert(GovernorRole::ModulesGovernor, governor.clone());
        let module_account: T::AccountId = account("dispute_manager", 0, 0);

        #[extrinsic_call]
        set_module(
            RawOrigin::Signed(governor),
            CourtModule::DisputeManager,
            module_account.clone(),
        );

        assert_eq!(Modules::<T>::get(CourtModule::DisputeManager), Some(module_account));
    }

    impl_benchmark_test_suite!(
        CourtController,
        crate::mock::ExtBuilder::default().build(),
        crate::mock::Runtime
    );
}
