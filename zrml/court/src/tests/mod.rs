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

#![cfg(test)]

mod collect_tokens;
mod views;

use crate::{mock::*, *};
use frame_support::{
    assert_noop, assert_ok,
    traits::{Currency, NamedReservableCurrency},
};
use sp_runtime::DispatchError;
use zeitgeist_primitives::{
    constants::BASE,
    traits::JurorsRegistryApi,
    types::{AccountIdTest, Balance, JurorBalances, TermId},
};

fn stake_and_activate(who: AccountIdTest, amount: Balance) {
    assert_ok!(Court::stake(RuntimeOrigin::signed(who), amount));
    assert_ok!(Court::activate(RuntimeOrigin::signed(who), amount));
}

fn reserved(who: AccountIdTest) -> Balance {
    Balances::reserved_balance_named(&Court::reserve_id(), &who)
}

fn juror_info(who: AccountIdTest) -> JurorInfoOf<Runtime> {
    Jurors::<Runtime>::get(who).unwrap()
}

fn set_locked(who: AccountIdTest, locked: Balance) {
    Jurors::<Runtime>::mutate(who, |info| info.as_mut().unwrap().locked = locked);
}

fn court_free_balance() -> Balance {
    Balances::free_balance(Court::court_account_id())
}

fn active_at(who: AccountIdTest, term_id: TermId) -> Balance {
    Court::active_balance_of_at(&who, term_id)
}
