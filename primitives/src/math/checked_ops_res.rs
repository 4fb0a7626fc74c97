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

//! Checked arithmetic returning `DispatchError::Arithmetic` instead of `Option`, so that balance
//! bookkeeping can be written with `?`.

use sp_arithmetic::{
    traits::{CheckedAdd, CheckedDiv, CheckedMul, CheckedSub},
    ArithmeticError,
};
use sp_runtime::DispatchError;

macro_rules! checked_res_trait {
    ($trait:ident, $method:ident, $inner:ident, $inner_method:ident, $error:expr) => {
        pub trait $trait
        where
            Self: Sized,
        {
            fn $method(&self, other: &Self) -> Result<Self, DispatchError>;
        }

        impl<T> $trait for T
        where
            T: $inner,
        {
            #[inline]
            fn $method(&self, other: &Self) -> Result<Self, DispatchError> {
                self.$inner_method(other).ok_or(DispatchError::Arithmetic($error))
            }
        }
    };
}

checked_res_trait!(CheckedAddRes, checked_add_res, CheckedAdd, checked_add, ArithmeticError::Overflow);
checked_res_trait!(
    CheckedSubRes,
    checked_sub_res,
    CheckedSub,
    checked_sub,
    ArithmeticError::Underflow
);
checked_res_trait!(CheckedMulRes, checked_mul_res, CheckedMul, checked_mul, ArithmeticError::Overflow);
checked_res_trait!(
    CheckedDivRes,
    checked_div_res,
    CheckedDiv,
    checked_div,
    ArithmeticError::DivisionByZero
);
