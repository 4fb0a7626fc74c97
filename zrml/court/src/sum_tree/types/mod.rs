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

pub(crate) mod checkpoint;
pub(crate) mod height_history;
pub(crate) mod node_history;
pub(crate) mod node_id;
pub(crate) mod search_hit;
pub(crate) mod sum_tree;
pub(crate) mod sum_tree_error;
pub(crate) mod update_operation;

pub(crate) use checkpoint::*;
pub(crate) use height_history::*;
pub(crate) use node_history::*;
pub(crate) use node_id::*;
pub(crate) use search_hit::*;
pub(crate) use sum_tree::*;
pub use sum_tree_error::*;
pub(crate) use update_operation::*;
