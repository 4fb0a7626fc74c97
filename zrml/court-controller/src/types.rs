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

use alloc::vec::Vec;
use parity_scale_codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::{
    traits::{AtLeast32BitUnsigned, One, Saturating, Zero},
    RuntimeDebug, SaturatedConversion,
};
use zeitgeist_primitives::types::TermId;

/// A court term.
#[derive(Clone, Decode, Default, Encode, Eq, MaxEncodedLen, PartialEq, RuntimeDebug, TypeInfo)]
pub struct Term<BlockNumber, Hash> {
    /// The block at which the term starts.
    pub start_block: BlockNumber,
    /// The block whose successor may provide the randomness of the term.
    pub randomness_block: BlockNumber,
    /// The randomness of the term, once recorded.
    pub randomness: Option<Hash>,
}

impl<BlockNumber, Hash> Term<BlockNumber, Hash>
where
    BlockNumber: AtLeast32BitUnsigned + Copy,
{
    /// Returns the number of transitions needed to reach the term which contains `now`.
    pub fn needed_transitions(&self, duration: BlockNumber, now: BlockNumber) -> TermId {
        if duration.is_zero() || now < self.start_block.saturating_add(duration) {
            return 0;
        }
        let elapsed = now.saturating_sub(self.start_block);
        (elapsed / duration).saturated_into()
    }

    /// Returns the term following `self`, entered at block `now`.
    pub fn successor(&self, duration: BlockNumber, now: BlockNumber) -> Self {
        Term {
            start_block: self.start_block.saturating_add(duration),
            randomness_block: now.saturating_add(One::one()),
            randomness: None,
        }
    }
}

/// The state of the term clock: the last transitioned term and its id.
#[derive(Clone, Eq, PartialEq, RuntimeDebug)]
pub struct Clock<BlockNumber, Hash> {
    pub term_id: TermId,
    pub term: Term<BlockNumber, Hash>,
}

impl<BlockNumber, Hash> Clock<BlockNumber, Hash>
where
    BlockNumber: AtLeast32BitUnsigned + Copy,
    Hash: Clone,
{
    /// Performs at most `max_steps` term transitions towards the term of block `now`.
    ///
    /// Returns the new clock, the entered terms in ascending order and whether the clock caught up
    /// with `now`.
    pub fn advance(
        self,
        max_steps: TermId,
        duration: BlockNumber,
        now: BlockNumber,
    ) -> (Self, Vec<(TermId, Term<BlockNumber, Hash>)>, bool) {
        let needed = self.term.needed_transitions(duration, now);
        let steps = needed.min(max_steps);
        let mut entered = Vec::new();
        let mut clock = self;
        for _ in 0..steps {
            let term = clock.term.successor(duration, now);
            clock = Clock { term_id: clock.term_id.saturating_add(1), term };
            entered.push((clock.term_id, clock.term.clone()));
        }
        (clock, entered, steps == needed)
    }
}
