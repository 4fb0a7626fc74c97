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

use crate::types::{DisputeId, TermId};
use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// The governor roles of the court. Each role is held by exactly one account (or none).
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub enum GovernorRole {
    /// Allowed to recover funds held by the court.
    FundsGovernor,
    /// Allowed to change governed configuration, like the total active balance limit.
    ConfigGovernor,
    /// Allowed to register and replace court modules.
    ModulesGovernor,
}

/// Modules of the court which are allowed to call into privileged juror registry functions.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub enum CourtModule {
    /// Owns the dispute and appeal lifecycle. The only module allowed to draft jurors and settle
    /// their locked balances.
    DisputeManager,
}

/// Parameters of a single draft invocation.
///
/// `selected_jurors` is the resumption cursor of the round and has to be persisted by the caller
/// between invocations, just like `sortition_iteration`.
#[derive(Clone, Decode, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct DraftParams<Balance> {
    pub dispute_id: DisputeId,
    /// The term in which the draft takes place. Its randomness seeds the sortition and its
    /// checkpointed active balances are the sortition weights.
    pub term_id: TermId,
    /// Number of jurors of the round which were already selected.
    pub selected_jurors: u32,
    /// Number of jurors requested by this invocation.
    pub batch_requested_jurors: u32,
    /// Number of jurors of the whole round.
    pub round_requested_jurors: u32,
    /// Amount locked for every accepted draft.
    pub draft_lock_amount: Balance,
    /// First sortition iteration of this invocation.
    pub sortition_iteration: u32,
}

/// A juror drafted by one draft invocation together with the number of times they were drafted.
#[derive(Clone, Decode, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct DraftedJuror<AccountId> {
    pub juror: AccountId,
    pub weight: u32,
}

/// The outcome of a draft invocation.
#[derive(Clone, Decode, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct DraftResult<AccountId> {
    /// Drafted jurors in order of their first selection. Never contains a juror twice.
    pub jurors: Vec<DraftedJuror<AccountId>>,
    /// Number of accepted drafts, which is the sum of all weights in `jurors`.
    pub selected: u32,
    /// The sortition iteration the next invocation for this round should start with.
    pub next_iteration: u32,
}

impl<AccountId> DraftResult<AccountId> {
    /// Returns whether the invocation selected every requested juror.
    pub fn is_complete(&self, batch_requested_jurors: u32) -> bool {
        self.selected >= batch_requested_jurors
    }
}

/// A snapshot of a juror's balances.
#[derive(Clone, Copy, Decode, Default, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct JurorBalances<Balance> {
    /// Most recent active balance, which includes activations effective next term.
    pub active: Balance,
    /// Staked balance which is not active.
    pub available: Balance,
    /// Active balance locked by drafts.
    pub locked: Balance,
    /// Balance which leaves the active balance with the next term transition.
    pub pending_deactivation: Balance,
}

/// Settlement of a single draft lock, passed by the dispute manager once a round is final.
#[derive(Clone, Decode, Encode, Eq, PartialEq, RuntimeDebug, TypeInfo)]
pub struct JurorSettlement<AccountId, Balance> {
    pub juror: AccountId,
    /// The amount that was locked for the juror's drafts in the settled round.
    pub locked_amount: Balance,
    /// Rewarded jurors get their lock released, all others are slashed.
    pub rewarded: bool,
}

