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

use crate::sum_tree::types::{Checkpoint, SumTreeError};
use zeitgeist_primitives::types::TermId;

/// A time-ascending list of checkpoints.
///
/// Implementors provide indexed access to the underlying storage; reading a value at a point in
/// time and recording new values is shared.
pub(crate) trait CheckpointHistory {
    type Value: Copy + PartialEq;

    /// The value before the first checkpoint.
    fn initial_value(&self) -> Self::Value;

    /// Number of recorded checkpoints.
    fn len(&self) -> u32;

    fn checkpoint(&self, index: u32) -> Option<Checkpoint<Self::Value>>;

    fn push(&mut self, checkpoint: Checkpoint<Self::Value>);

    fn overwrite(&mut self, index: u32, checkpoint: Checkpoint<Self::Value>);

    fn last(&self) -> Option<Checkpoint<Self::Value>> {
        self.len().checked_sub(1).and_then(|index| self.checkpoint(index))
    }

    /// Returns the value of the most recent checkpoint.
    fn latest(&self) -> Self::Value {
        self.last().map(|checkpoint| checkpoint.value).unwrap_or_else(|| self.initial_value())
    }

    /// Returns the value of the latest checkpoint recorded at or before `time`.
    fn value_at(&self, time: TermId) -> Self::Value {
        let initial_value = self.initial_value();
        let Some(last) = self.last() else {
            return initial_value;
        };
        if time >= last.time {
            return last.value;
        }
        match self.checkpoint(0) {
            Some(first) if time >= first.time => {}
            _ => return initial_value,
        }

        // `low` always points to a checkpoint at or before `time`, `high` is the last candidate.
        let mut low: u32 = 0;
        let mut high: u32 = self.len().saturating_sub(1);
        while high > low {
            let mid = low.saturating_add(high.saturating_sub(low).saturating_add(1) / 2);
            match self.checkpoint(mid) {
                Some(checkpoint) if time < checkpoint.time => high = mid.saturating_sub(1),
                Some(_) => low = mid,
                None => return initial_value,
            }
        }
        self.checkpoint(low).map(|checkpoint| checkpoint.value).unwrap_or(initial_value)
    }

    /// Records `value` from `time` on.
    ///
    /// Overwrites the last checkpoint if it was recorded at `time` and skips the write if the value
    /// doesn't change.
    fn record(&mut self, time: TermId, value: Self::Value) -> Result<(), SumTreeError> {
        match self.last() {
            None => {
                if value != self.initial_value() {
                    self.push(Checkpoint { time, value });
                }
            }
            Some(last) if time < last.time => return Err(SumTreeError::CannotAddPastValue),
            Some(last) if time == last.time => {
                if value != last.value {
                    let index = self.len().saturating_sub(1);
                    self.overwrite(index, Checkpoint { time, value });
                }
            }
            Some(last) => {
                if value != last.value {
                    self.push(Checkpoint { time, value });
                }
            }
        }
        Ok(())
    }

    /// Fails if a value can't be recorded at `time`.
    fn ensure_writable_at(&self, time: TermId) -> Result<(), SumTreeError> {
        match self.last() {
            Some(last) if time < last.time => Err(SumTreeError::CannotAddPastValue),
            _ => Ok(()),
        }
    }
}
