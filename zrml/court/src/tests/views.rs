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

#[test]
fn unlocked_active_balance_of_uses_current_term() {
    ExtBuilder::default().build().execute_with(|| {
        stake_and_activate(ALICE, 500 * BASE);
        assert_eq!(Court::unlocked_active_balance_of(&ALICE), 0);

        run_to_term(1);
        set_locked(ALICE, 100 * BASE);
        assert_eq!(Court::unlocked_active_balance_of(&ALICE), 400 * BASE);
        assert_eq!(Court::unlocked_active_balance_of(&BOB), 0);
    });
}

#[test]
fn balance_of_works() {
    ExtBuilder::default().build().execute_with(|| {
        assert_ok!(Court::stake(RuntimeOrigin::signed(ALICE), 600 * BASE));
        assert_ok!(Court::activate(RuntimeOrigin::signed(ALICE), 500 * BASE));
        run_to_term(1);
        assert_ok!(Court::deactivate(RuntimeOrigin::signed(ALICE), 100 * BASE));
        set_locked(ALICE, 50 * BASE);

        assert_eq!(
            Court::balance_of(&ALICE),
            JurorBalances {
                active: 400 * BASE,
                available: 100 * BASE,
                locked: 50 * BASE,
                pending_deactivation: 100 * BASE,
            }
        );
        assert_eq!(Court::balance_of(&BOB), JurorBalances::default());
    });
}

#[test]
fn total_active_balance_at_follows_activations() {
    ExtBuilder::default().build().execute_with(|| {
        stake_and_activate(ALICE, 500 * BASE);
        run_to_term(1);
        stake_and_activate(BOB, 300 * BASE);
        run_to_term(2);
        assert_ok!(Court::deactivate(RuntimeOrigin::signed(ALICE), 200 * BASE));

        assert_eq!(Court::total_active_balance_at(0), 0);
        assert_eq!(Court::total_active_balance_at(1), 500 * BASE);
        assert_eq!(Court::total_active_balance_at(2), 800 * BASE);
        assert_eq!(Court::total_active_balance_at(3), 600 * BASE);
        assert_eq!(active_at(BOB, 1), 0);
        assert_eq!(active_at(BOB, 2), 300 * BASE);
        assert_eq!(active_at(CHARLIE, 2), 0);
    });
}
