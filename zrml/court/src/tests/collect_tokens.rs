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
use crate::types::DeactivationRequest;

#[test]
fn collect_tokens_works() {
    ExtBuilder::default().build().execute_with(|| {
        stake_and_activate(ALICE, 500 * BASE);
        run_to_term(1);
        let court_balance = court_free_balance();

        assert_eq!(Court::collect_tokens(&DISPUTE_MANAGER, &ALICE, 100 * BASE, 1), Ok(true));
        assert_eq!(active_at(ALICE, 1), 500 * BASE);
        assert_eq!(active_at(ALICE, 2), 400 * BASE);
        assert_eq!(reserved(ALICE), 400 * BASE);
        assert_eq!(court_free_balance(), court_balance + 100 * BASE);
        System::assert_last_event(
            Event::JurorTokensCollected { juror: ALICE, amount: 100 * BASE, effective_term: 2 }
                .into(),
        );
    });
}

#[test]
fn collect_tokens_returns_false_if_juror_cannot_cover_amount() {
    ExtBuilder::default().build().execute_with(|| {
        stake_and_activate(ALICE, 500 * BASE);
        run_to_term(1);
        set_locked(ALICE, 450 * BASE);

        assert_eq!(Court::collect_tokens(&DISPUTE_MANAGER, &ALICE, 100 * BASE, 1), Ok(false));
        assert_eq!(active_at(ALICE, 2), 500 * BASE);
        assert_eq!(reserved(ALICE), 500 * BASE);
        assert_eq!(Court::collect_tokens(&DISPUTE_MANAGER, &BOB, 100 * BASE, 1), Ok(false));
    });
}

#[test]
fn collect_tokens_reduces_pending_deactivation() {
    ExtBuilder::default().build().execute_with(|| {
        stake_and_activate(ALICE, 500 * BASE);
        run_to_term(1);
        assert_ok!(Court::deactivate(RuntimeOrigin::signed(ALICE), 350 * BASE));

        assert_eq!(Court::collect_tokens(&DISPUTE_MANAGER, &ALICE, 200 * BASE, 1), Ok(true));
        assert_eq!(
            juror_info(ALICE).deactivation,
            Some(DeactivationRequest { amount: 300 * BASE, available_term: 2 })
        );
        assert_eq!(active_at(ALICE, 2), 0);
        assert_eq!(reserved(ALICE), 300 * BASE);
    });
}

#[test]
fn collect_tokens_fails_if_sender_is_not_dispute_manager() {
    ExtBuilder::default().build().execute_with(|| {
        stake_and_activate(ALICE, 500 * BASE);
        assert_noop!(
            Court::collect_tokens(&ALICE, &ALICE, BASE, 0),
            Error::<Runtime>::SenderNotDisputeManager
        );
    });
}

#[test]
fn collect_tokens_fails_if_term_is_not_current() {
    ExtBuilder::default().build().execute_with(|| {
        stake_and_activate(ALICE, 500 * BASE);
        run_to_term(1);
        assert_noop!(
            Court::collect_tokens(&DISPUTE_MANAGER, &ALICE, BASE, 0),
            Error::<Runtime>::TermNotCurrent
        );
    });
}
