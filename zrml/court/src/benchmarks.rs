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

use crate::{Pallet as Court, *};
use frame_benchmarking::v2::*;
use frame_support::traits::{Currency, Get};
use frame_system::{pallet_prelude::BlockNumberFor, RawOrigin};
use sp_runtime::traits::{One, Saturating, Zero};
use zeitgeist_primitives::traits::CourtControllerApi;

fn min_active_balance<T: Config>() -> BalanceOf<T> {
    T::MinActiveBalance::get()
}

fn fund<T: Config>(who: &T::AccountId, amount: BalanceOf<T>) {
    let _ = T::Currency::deposit_creating(who, amount.saturating_mul(2u32.into()));
}

fn stake_and_activate<T: Config>(who: &T::AccountId, amount: BalanceOf<T>) {
    fund::<T>(who, amount);
    Court::<T>::stake(RawOrigin::Signed(who.clone()).into(), amount).unwrap();
    Court::<T>::activate(RawOrigin::Signed(who.clone()).into(), amount).unwrap();
}

/// Activates jurors until the next activation grows the sum tree.
fn fill_first_level<T: Config>() {
    for index in 0..16 {
        let juror: T::AccountId = account("juror", index, 0);
        stake_and_activate::<T>(&juror, min_active_balance::<T>());
    }
}

/// Moves to the first block of the next term.
fn run_to_next_term<T: Config>() {
    let mut now = frame_system::Pallet::<T>::block_number();
    while T::Controller::needed_term_transitions() == 0 {
        now = now.saturating_add(BlockNumberFor::<T>::one());
        frame_system::Pallet::<T>::set_block_number(now);
    }
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn stake() {
        let caller: T::AccountId = whitelisted_caller();
        let amount = min_active_balance::<T>();
        fund::<T>(&caller, amount);

        #[extrinsic_call]
        stake(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(Jurors::<T>::get(&caller).map(|info| info.available), Some(amount));
    }

    #[benchmark]
    fn unstake() {
        let caller: T::AccountId = whitelisted_caller();
        let amount = min_active_balance::<T>();
        fund::<T>(&caller, amount);
        Court::<T>::stake(RawOrigin::Signed(caller.clone()).into(), amount).unwrap();

        #[extrinsic_call]
        unstake(RawOrigin::Signed(caller.clone()), amount);

        assert!(Jurors::<T>::get(&caller).is_none());
    }

    #[benchmark]
    fn activate() {
        fill_first_level::<T>();
        let caller: T::AccountId = whitelisted_caller();
        let amount = min_active_balance::<T>();
        fund::<T>(&caller, amount);
        Court::<T>::stake(RawOrigin::Signed(caller.clone()).into(), amount).unwrap();

        #[extrinsic_call]
        activate(RawOrigin::Signed(caller.clone()), amount);

        assert_eq!(Jurors::<T>::get(&caller).and_then(|info| info.id), Some(16));
    }

    #[benchmark]
    fn deactivate() {
        fill_first_level::<T>();
        let caller: T::AccountId = whitelisted_caller();
        stake_and_activate::<T>(&caller, min_active_balance::<T>());

        #[extrinsic_call]
        deactivate(RawOrigin::Signed(caller.clone()), Zero::zero());

        assert!(Jurors::<T>::get(&caller).and_then(|info| info.deactivation).is_some());
    }

    #[benchmark]
    fn process_deactivation_request() {
        let juror: T::AccountId = account("juror", 0, 0);
        stake_and_activate::<T>(&juror, min_active_balance::<T>());
        Court::<T>::deactivate(RawOrigin::Signed(juror.clone()).into(), Zero::zero()).unwrap();
        run_to_next_term::<T>();
        let caller: T::AccountId = whitelisted_caller();

        #[extrinsic_call]
        process_deactivation_request(RawOrigin::Signed(caller), juror.clone());

        assert!(Jurors::<T>::get(&juror).and_then(|info| info.deactivation).is_none());
    }

    #[benchmark]
    fn set_total_active_balance_limit() {
        let limit = Some(min_active_balance::<T>());

        #[extrinsic_call]
        set_total_active_balance_limit(RawOrigin::Root, limit);

        assert_eq!(TotalActiveBalanceLimit::<T>::get(), limit);
    }

    #[benchmark]
    fn recover_funds() {
        let amount = min_active_balance::<T>();
        fund::<T>(&Court::<T>::court_account_id(), amount);
        let destination: T::AccountId = account("destination", 0, 0);

        #[extrinsic_call]
        recover_funds(RawOrigin::Root, destination.clone(), amount);

        assert_eq!(T::Currency::free_balance(&destination), amount);
    }

    impl_benchmark_test_suite!(
        Court,
        crate::mock::ExtBuilder::default().build(),
        crate::mock::Runtime
    );
}
