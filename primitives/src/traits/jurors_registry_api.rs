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

use crate::types::{DraftParams, DraftResult, JurorBalances, JurorSettlement, TermId};
use alloc::vec::Vec;
use sp_runtime::{DispatchError, DispatchResult};

/// Interface of the juror registry exposed to the dispute manager.
///
/// All mutating functions take the `caller` and fail unless it is the account registered as the
/// dispute manager module.
pub trait JurorsRegistryApi {
    type AccountId;
    type Balance;

    /// Drafts up to `params.batch_requested_jurors` jurors for a round and locks
    /// `params.draft_lock_amount` for every accepted draft.
    ///
    /// Returns a partial result if the active jurors can't cover the batch within the maximum
    /// number of sortition iterations. The caller has to persist `selected_jurors` and the
    /// returned `next_iteration` and invoke the draft again later.
    ///
    /// # Errors
    ///
    /// Fails if the randomness of the draft term isn't recorded, if the total active balance of
    /// the draft term is zero or if the parameters are inconsistent.
    fn draft(
        caller: &Self::AccountId,
        params: DraftParams<Self::Balance>,
    ) -> Result<DraftResult<Self::AccountId>, DispatchError>;

    /// Releases the draft locks of a settled round. Locks of jurors which weren't rewarded are
    /// slashed and moved to the court. Returns the total slashed amount.
    fn slash_or_unlock(
        caller: &Self::AccountId,
        term_id: TermId,
        settlements: Vec<JurorSettlement<Self::AccountId, Self::Balance>>,
    ) -> Result<Self::Balance, DispatchError>;

    /// Collects `amount` from the unlocked active balance of `juror`, effective after `term_id`.
    /// Returns `false` without changing state if the juror can't cover the amount.
    fn collect_tokens(
        caller: &Self::AccountId,
        juror: &Self::AccountId,
        amount: Self::Balance,
        term_id: TermId,
    ) -> Result<bool, DispatchError>;

    /// Assigns `amount` of the funds held by the court to the available balance of `juror`.
    fn assign_tokens(
        caller: &Self::AccountId,
        juror: &Self::AccountId,
        amount: Self::Balance,
    ) -> DispatchResult;

    /// Returns the active balance of `juror` in the current term which is not locked by drafts.
    fn unlocked_active_balance_of(juror: &Self::AccountId) -> Self::Balance;

    /// Returns a snapshot of the balances of `juror`.
    fn balance_of(juror: &Self::AccountId) -> JurorBalances<Self::Balance>;

    /// Returns the active balance of `juror` at `term_id`.
    fn active_balance_of_at(juror: &Self::AccountId, term_id: TermId) -> Self::Balance;

    /// Returns the sum of all active balances at `term_id`.
    fn total_active_balance_at(term_id: TermId) -> Self::Balance;
}
