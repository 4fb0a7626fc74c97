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

#![cfg(test)]

use crate as zrml_court;
use frame_support::{
    construct_runtime,
    traits::{Everything, Hooks},
};
use frame_system::mocking::MockBlock;
use sp_runtime::{
    traits::{AccountIdConversion, BlakeTwo256, IdentityLookup},
    BuildStorage,
};
use zeitgeist_primitives::{
    constants::{
        mock::{
            BlockHashCount, CourtMaxAutoTermTransitions, CourtMaxDraftBatchSize,
            CourtMaxDraftIterations, CourtMinActiveBalance, CourtPalletId, CourtTermDuration,
            ExistentialDeposit, MaxLocks, MaxReserves,
        },
        BASE,
    },
    types::{AccountIdTest, Balance, BlockNumber, CourtModule, GovernorRole, Hash, TermId},
};

pub const ALICE: AccountIdTest = 0;
pub const BOB: AccountIdTest = 1;
pub const CHARLIE: AccountIdTest = 2;
pub const DAVE: AccountIdTest = 3;
pub const EVE: AccountIdTest = 4;
pub const DISPUTE_MANAGER: AccountIdTest = 10;
pub const CONFIG_GOVERNOR: AccountIdTest = 11;
pub const FUNDS_GOVERNOR: AccountIdTest = 12;

pub const INITIAL_BALANCE: Balance = 10_000 * BASE;

construct_runtime!(
    pub enum Runtime {
        System: frame_system,
        Balances: pallet_balances,
        RandomnessCollectiveFlip: pallet_insecure_randomness_collective_flip,
        CourtController: zrml_court_controller,
        Court: zrml_court,
    }
);

impl crate::Config for Runtime {
    type Controller = CourtController;
    type Currency = Balances;
    type MaxDraftBatchSize = CourtMaxDraftBatchSize;
    type MaxDraftIterations = CourtMaxDraftIterations;
    type MinActiveBalance = CourtMinActiveBalance;
    type PalletId = CourtPalletId;
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = zrml_court::weights::WeightInfo<Runtime>;
}

impl zrml_court_controller::Config for Runtime {
    type MaxAutoTermTransitions = CourtMaxAutoTermTransitions;
    type Random = RandomnessCollectiveFlip;
    type RuntimeEvent = RuntimeEvent;
    type TermDuration = CourtTermDuration;
    type WeightInfo = zrml_court_controller::weights::WeightInfo<Runtime>;
}

impl frame_system::Config for Runtime {
    type AccountData = pallet_balances::AccountData<Balance>;
    type AccountId = AccountIdTest;
    type BaseCallFilter = Everything;
    type Block = MockBlock<Runtime>;
    type BlockHashCount = BlockHashCount;
    type BlockLength = ();
    type BlockWeights = ();
    type RuntimeCall = RuntimeCall;
    type RuntimeTask = RuntimeTask;
    type DbWeight = ();
    type RuntimeEvent = RuntimeEvent;
    type Hash = Hash;
    type Hashing = BlakeTwo256;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Nonce = u64;
    type MaxConsumers = frame_support::traits::ConstU32<16>;
    type MultiBlockMigrator = ();
    type OnKilledAccount = ();
    type OnNewAccount = ();
    type RuntimeOrigin = RuntimeOrigin;
    type PalletInfo = PalletInfo;
    type PreInherents = ();
    type PostInherents = ();
    type PostTransactions = ();
    type SingleBlockMigrations = ();
    type SS58Prefix = ();
    type SystemWeightInfo = ();
    type Version = ();
    type OnSetCode = ();
}

impl pallet_balances::Config for Runtime {
    type AccountStore = System;
    type Balance = Balance;
    type DustRemoval = ();
    type FreezeIdentifier = ();
    type RuntimeHoldReason = ();
    type RuntimeEvent = RuntimeEvent;
    type ExistentialDeposit = ExistentialDeposit;
    type MaxFreezes = ();
    type MaxLocks = MaxLocks;
    type MaxReserves = MaxReserves;
    type ReserveIdentifier = [u8; 8];
    type RuntimeFreezeReason = ();
    type WeightInfo = ();
}

impl pallet_insecure_randomness_collective_flip::Config for Runtime {}

pub fn run_to_block(n: BlockNumber) {
    while System::block_number() < n {
        let next = System::block_number() + 1;
        System::set_block_number(next);
        RandomnessCollectiveFlip::on_initialize(next);
        CourtController::on_initialize(next);
    }
}

/// Moves to the first block of `term_id` and transitions the clock.
pub fn run_to_term(term_id: TermId) {
    run_to_block(term_id * CourtTermDuration::get());
    let _ = CourtController::heartbeat(RuntimeOrigin::signed(ALICE), u32::MAX);
}

/// Moves to the block which records the randomness of the current term and returns it.
pub fn record_term_randomness() -> Hash {
    let term_id = zrml_court_controller::CurrentTermId::<Runtime>::get();
    let randomness_block = zrml_court_controller::Terms::<Runtime>::get(term_id).randomness_block;
    run_to_block(randomness_block + 1);
    CourtController::compute_term_randomness(RuntimeOrigin::signed(ALICE), term_id).unwrap();
    zrml_court_controller::Terms::<Runtime>::get(term_id).randomness.unwrap()
}

/// Overwrites the randomness of the current term.
pub fn set_term_randomness(randomness: Hash) {
    let term_id = zrml_court_controller::CurrentTermId::<Runtime>::get();
    zrml_court_controller::Terms::<Runtime>::mutate(term_id, |term| {
        term.randomness = Some(randomness)
    });
}

pub struct ExtBuilder {
    balances: Vec<(AccountIdTest, Balance)>,
}

impl Default for ExtBuilder {
    fn default() -> Self {
        let court_account_id: AccountIdTest = CourtPalletId::get().into_account_truncating();
        Self {
            balances: vec![
                (ALICE, INITIAL_BALANCE),
                (BOB, INITIAL_BALANCE),
                (CHARLIE, INITIAL_BALANCE),
                (DAVE, INITIAL_BALANCE),
                (EVE, INITIAL_BALANCE),
                (DISPUTE_MANAGER, INITIAL_BALANCE),
                (court_account_id, ExistentialDeposit::get()),
            ],
        }
    }
}

impl ExtBuilder {
    pub fn build(self) -> sp_io::TestExternalities {
        let mut t = frame_system::GenesisConfig::<Runtime>::default().build_storage().unwrap();

        // see the logs in tests when using `RUST_LOG=debug cargo test -- --nocapture`
        let _ = env_logger::builder().is_test(true).try_init();

        pallet_balances::GenesisConfig::<Runtime> { balances: self.balances }
            .assimilate_storage(&mut t)
            .unwrap();

        let mut t: sp_io::TestExternalities = t.into();

        t.execute_with(|| {
            System::set_block_number(1);
            zrml_court_controller::Modules::<Runtime>::insert(
                CourtModule::DisputeManager,
                DISPUTE_MANAGER,
            );
            zrml_court_controller::Governors::<Runtime>::insert(
                GovernorRole::ConfigGovernor,
                CONFIG_GOVERNOR,
            );
            zrml_court_controller::Governors::<Runtime>::insert(
                GovernorRole::FundsGovernor,
                FUNDS_GOVERNOR,
            );
        });

        t
    }
}
