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

use crate::types::{CourtModule, GovernorRole, TermId};
use sp_runtime::DispatchError;

/// Clock and role registry of the court, used by court modules to look up terms, term
/// randomness and the identities allowed to call privileged functions.
pub trait CourtControllerApi {
    type AccountId;
    type Hash;

    /// Returns the id of the last transitioned term.
    fn current_term_id() -> TermId;

    /// Returns the number of term transitions required to reach the term of the current block.
    fn needed_term_transitions() -> TermId;

    /// Transitions into the term of the current block and returns its id.
    ///
    /// Fails if more transitions are required than can be performed automatically; in that case
    /// heartbeats have to be sent first.
    fn ensure_current_term() -> Result<TermId, DispatchError>;

    /// Returns the randomness of `term_id` if it was recorded.
    fn term_randomness(term_id: TermId) -> Option<Self::Hash>;

    /// Returns the randomness of `term_id`.
    ///
    /// Fails if the term doesn't exist yet, if its randomness block hasn't passed yet or if the
    /// randomness was never recorded.
    fn ensure_term_randomness(term_id: TermId) -> Result<Self::Hash, DispatchError>;

    /// Returns the current holder of `role`.
    fn governor(role: GovernorRole) -> Option<Self::AccountId>;

    /// Returns the account registered for `module`.
    fn module(module: CourtModule) -> Option<Self::AccountId>;
}
