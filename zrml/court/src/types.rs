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

use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{
    traits::{Saturating, Zero},
    RuntimeDebug,
};
use zeitgeist_primitives::types::TermId;

/// A request to move active balance back to the available balance.
#[derive(Clone, Copy, Decode, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct DeactivationRequest<Balance> {
    /// The amount which left the active balance.
    pub amount: Balance,
    /// The first term in which the amount can be moved to the available balance.
    pub available_term: TermId,
}

/// The registry entry of a juror.
#[derive(
    Clone, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo,
)]
pub struct JurorInfo<Balance> {
    /// Key of the juror's leaf in the sum tree. Assigned on first activation and never changed.
    pub id: Option<u64>,
    /// Staked balance which isn't active.
    pub available: Balance,
    /// Active balance locked by drafts.
    pub locked: Balance,
    pub deactivation: Option<DeactivationRequest<Balance>>,
}

impl<Balance> JurorInfo<Balance>
where
    Balance: Copy + Saturating + Zero,
{
    /// The amount of a deactivation request which can be processed at `term_id`.
    pub fn due_deactivation(&self, term_id: TermId) -> Option<Balance> {
        self.deactivation
            .filter(|request| request.available_term <= term_id)
            .map(|request| request.amount)
    }

    pub fn pending_deactivation(&self) -> Balance {
        self.deactivation.map(|request| request.amount).unwrap_or_else(Zero::zero)
    }

    /// Returns `true` if nothing is held for the juror anymore. The sum tree leaf of the juror
    /// has to be checked separately.
    pub fn is_empty(&self) -> bool {
        self.available.is_zero() && self.locked.is_zero() && self.deactivation.is_none()
    }
}

/// The progress of a single draft invocation.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DraftCursor {
    /// Number of jurors of the round selected so far, including previous invocations.
    pub(crate) selected: u32,
    /// Number of jurors of the batch which still have to be selected.
    pub(crate) remaining: u32,
    /// The sortition iteration of the next pass.
    pub(crate) iteration: u32,
    /// Number of passes made by this invocation.
    pub(crate) passes: u32,
}

impl DraftCursor {
    pub(crate) fn new(selected: u32, remaining: u32, iteration: u32) -> Self {
        DraftCursor { selected, remaining, iteration, passes: 0 }
    }

    /// Returns `true` if another pass is required and allowed.
    pub(crate) fn needs_pass(&self, max_passes: u32) -> bool {
        self.remaining > 0 && self.passes < max_passes
    }

    /// Records a pass which accepted `accepted` drafts.
    pub(crate) fn advance(&mut self, accepted: u32) {
        let accepted = accepted.min(self.remaining);
        self.remaining = self.remaining.saturating_sub(accepted);
        self.selected = self.selected.saturating_add(accepted);
        self.iteration = self.iteration.saturating_add(1);
        self.passes = self.passes.saturating_add(1);
    }
}
