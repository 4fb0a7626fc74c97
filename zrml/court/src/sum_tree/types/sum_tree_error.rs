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

use crate::{Config, Error};
use frame_support::{PalletError, RuntimeDebugNoBound};
use parity_scale_codec::{Decode, Encode};
use scale_info::TypeInfo;
use sp_runtime::DispatchError;

#[derive(Decode, Encode, Eq, PartialEq, PalletError, RuntimeDebugNoBound, TypeInfo)]
pub enum SumTreeError {
    /// Keys have to be inserted in strictly ascending order without gaps.
    KeyNotAdjacent,
    /// There is no item with this key.
    KeyDoesNotExist,
    /// A node value would exceed the maximum balance.
    Overflow,
    /// A node value would drop below zero.
    Underflow,
    /// Checkpoints can't be recorded before the latest checkpoint.
    CannotAddPastValue,
    /// A search requires at least one value.
    MissingSearchValues,
    /// Search values have to be sorted in ascending order.
    UnsortedSearchValues,
    /// A search value is not below the total of the tree.
    OutOfBounds,
}

impl<T> From<SumTreeError> for Error<T> {
    fn from(error: SumTreeError) -> Error<T> {
        Error::<T>::SumTreeError(error)
    }
}

impl SumTreeError {
    pub(crate) fn into_dispatch_error<T>(self) -> DispatchError
    where
        T: Config,
    {
        Error::<T>::SumTreeError(self).into()
    }
}
