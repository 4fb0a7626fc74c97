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

#![doc = include_str!("../README.md")]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(feature = "runtime-benchmarks")]
mod benchmarks;
#[cfg(test)]
mod mock;
mod sortition;
mod sum_tree;
#[cfg(test)]
mod tests;
pub mod types;
pub mod weights;

pub use pallet::*;

const LOG_TARGET: &str = "runtime::zrml-court";

#[frame_support::pallet]
mod pallet {
    use crate::{
        sortition::{draft_batch_bounds, sample, SortitionSeed},
        sum_tree::{
            traits::CheckpointedSumTree,
            types::{Checkpoint, NodeId, SumTree, SumTreeError, UpdateOperation},
        },
        types::{DeactivationRequest, DraftCursor, JurorInfo},
        weights::WeightInfoZeitgeist,
        LOG_TARGET,
    };
    use alloc::{vec, vec::Vec};
    use core::marker::PhantomData;
    use frame_support::{
        ensure,
        pallet_prelude::{
            DispatchError, DispatchResult, OptionQuery, StorageDoubleMap, StorageMap,
            StorageValue, ValueQuery,
        },
        traits::{
            BalanceStatus, Currency, ExistenceRequirement, Get, IsType, NamedReservableCurrency,
            StorageVersion,
        },
        transactional, Blake2_128Concat, PalletId, Twox64Concat,
    };
    use frame_system::{ensure_signed, ensure_signed_or_root, pallet_prelude::OriginFor};
    use sp_runtime::traits::{AccountIdConversion, CheckedSub, Saturating, Zero};
    use zeitgeist_primitives::{
        math::checked_ops_res::{CheckedAddRes, CheckedSubRes},
        traits::{CourtControllerApi, JurorsRegistryApi},
        types::{
            CourtModule, DisputeId, DraftParams, DraftResult, DraftedJuror, GovernorRole,
            JurorBalances, JurorSettlement, TermId,
        },
    };

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The court clock. Provides terms, term randomness, governors and court modules.
        type Controller: CourtControllerApi<AccountId = Self::AccountId, Hash = Self::Hash>;

        type Currency: NamedReservableCurrency<Self::AccountId, ReserveIdentifier = [u8; 8]>;

        /// The maximum number of jurors a single draft invocation may request.
        #[pallet::constant]
        type MaxDraftBatchSize: Get<u32>;

        /// The maximum number of sortition passes of a single draft invocation.
        #[pallet::constant]
        type MaxDraftIterations: Get<u32>;

        /// The minimum active balance of a juror with a non-zero active balance.
        #[pallet::constant]
        type MinActiveBalance: Get<BalanceOf<Self>>;

        /// Identifies the named reserve of staked funds and the account which holds collected
        /// funds.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        type WeightInfo: WeightInfoZeitgeist;
    }

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type BalanceOf<T> = <<T as Config>::Currency as Currency<AccountIdOf<T>>>::Balance;
    pub(crate) type JurorInfoOf<T> = JurorInfo<BalanceOf<T>>;
    pub(crate) type JurorSettlementOf<T> = JurorSettlement<AccountIdOf<T>, BalanceOf<T>>;

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    /// Registry entries of all accounts which staked.
    #[pallet::storage]
    pub type Jurors<T: Config> =
        StorageMap<_, Blake2_128Concat, AccountIdOf<T>, JurorInfoOf<T>, OptionQuery>;

    /// Maps sum tree keys back to jurors.
    #[pallet::storage]
    pub type JurorIdToAccount<T: Config> =
        StorageMap<_, Twox64Concat, u64, AccountIdOf<T>, OptionQuery>;

    /// Upper bound of the total active balance. Unbounded if not set.
    #[pallet::storage]
    pub type TotalActiveBalanceLimit<T: Config> = StorageValue<_, BalanceOf<T>, OptionQuery>;

    #[pallet::storage]
    pub(crate) type SumTreeNextKey<T> = StorageValue<_, u64, ValueQuery>;

    #[pallet::storage]
    pub(crate) type SumTreeCheckpointCount<T> =
        StorageMap<_, Twox64Concat, NodeId, u32, ValueQuery>;

    #[pallet::storage]
    pub(crate) type SumTreeCheckpoints<T: Config> = StorageDoubleMap<
        _,
        Twox64Concat,
        NodeId,
        Twox64Concat,
        u32,
        Checkpoint<BalanceOf<T>>,
        OptionQuery,
    >;

    #[pallet::storage]
    pub(crate) type SumTreeHeightCheckpointCount<T> = StorageValue<_, u32, ValueQuery>;

    #[pallet::storage]
    pub(crate) type SumTreeHeightCheckpoints<T> =
        StorageMap<_, Twox64Concat, u32, Checkpoint<u8>, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        JurorStaked { juror: AccountIdOf<T>, amount: BalanceOf<T> },
        JurorUnstaked { juror: AccountIdOf<T>, amount: BalanceOf<T> },
        /// `amount` is part of the active balance of `juror` from `from_term` on.
        JurorActivated { juror: AccountIdOf<T>, amount: BalanceOf<T>, from_term: TermId },
        JurorDeactivationRequested {
            juror: AccountIdOf<T>,
            amount: BalanceOf<T>,
            available_term: TermId,
        },
        /// A draft reduced the pending deactivation request of `juror` to `amount`.
        JurorDeactivationUpdated {
            juror: AccountIdOf<T>,
            amount: BalanceOf<T>,
            available_term: TermId,
        },
        JurorDeactivationProcessed { juror: AccountIdOf<T>, amount: BalanceOf<T>, term_id: TermId },
        /// `juror` was drafted `weight` times by a single draft invocation.
        JurorDrafted { dispute_id: DisputeId, juror: AccountIdOf<T>, weight: u32 },
        /// All jurors of the current round of `dispute_id` were drafted.
        RoundDrafted { dispute_id: DisputeId, jurors: u32 },
        JurorSlashed { juror: AccountIdOf<T>, amount: BalanceOf<T>, effective_term: TermId },
        JurorTokensCollected {
            juror: AccountIdOf<T>,
            amount: BalanceOf<T>,
            effective_term: TermId,
        },
        JurorTokensAssigned { juror: AccountIdOf<T>, amount: BalanceOf<T> },
        TotalActiveBalanceLimitChanged { limit: Option<BalanceOf<T>> },
        FundsRecovered { destination: AccountIdOf<T>, amount: BalanceOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Specifies an error that happened in the sum tree of active balances.
        SumTreeError(SumTreeError),
        /// The amount is zero.
        ZeroAmount,
        /// The available balance of the juror is too low.
        InsufficientAvailableBalance,
        /// The active balance of the juror which isn't locked by drafts is too low.
        InsufficientUnlockedActiveBalance,
        /// The active balance of the juror would be positive but below the minimum.
        ActiveBalanceBelowMin,
        /// The total active balance would exceed the limit.
        TotalActiveBalanceLimitExceeded,
        /// The juror has no deactivation request which can be processed.
        DeactivationRequestNotDue,
        /// The account never staked.
        UnknownJuror,
        /// The caller is not the registered dispute manager.
        SenderNotDisputeManager,
        /// The sender does not hold the required governor role.
        SenderNotGovernor,
        /// Drafts can only take place in the current term.
        DraftTermNotCurrent,
        /// The batch requests more jurors than a single draft invocation may select.
        DraftBatchTooLarge,
        /// The batch requests more jurors than the round has left.
        DraftBatchExceedsRound,
        /// The round size is zero.
        InvalidRoundSize,
        /// The randomness of the draft term was not recorded.
        RandomnessUnavailable,
        /// Settlements can only take place in the current term.
        TermNotCurrent,
        /// The settled amount exceeds the locked balance of the juror.
        InsufficientLockedBalance,
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Stakes `amount` of the free balance of the sender. Staked funds are available for
        /// activation.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::stake())]
        #[transactional]
        pub fn stake(
            origin: OriginFor<T>,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

            T::Currency::reserve_named(&Self::reserve_id(), &who, amount)?;
            let mut info = Jurors::<T>::get(&who).unwrap_or_default();
            info.available = info.available.checked_add_res(&amount)?;
            Jurors::<T>::insert(&who, info);

            Self::deposit_event(Event::JurorStaked { juror: who, amount });

            Ok(())
        }

        /// Unstakes `amount` of the available balance of the sender. Processes a due
        /// deactivation request first.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::unstake())]
        #[transactional]
        pub fn unstake(
            origin: OriginFor<T>,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

            let term_id = T::Controller::ensure_current_term()?;

            let mut info = Self::juror(&who)?;
            Self::process_due_deactivation(&who, &mut info, term_id);
            ensure!(info.available >= amount, Error::<T>::InsufficientAvailableBalance);
            info.available = info.available.checked_sub_res(&amount)?;

            let missing = T::Currency::unreserve_named(&Self::reserve_id(), &who, amount);
            debug_assert!(
                missing.is_zero(),
                "Could not unreserve all of the amount. who: {:?}, amount: {:?}, missing: {:?}",
                who,
                amount,
                missing,
            );
            Self::store_juror(&who, info);

            Self::deposit_event(Event::JurorUnstaked { juror: who, amount });

            Ok(())
        }

        /// Activates `amount` of the available balance of the sender from the next term on.
        /// Activates the whole available balance if `amount` is zero.
        ///
        /// # Weight
        ///
        /// Complexity: `O(h)`, where `h` is the height of the sum tree.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::activate())]
        #[transactional]
        pub fn activate(
            origin: OriginFor<T>,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let term_id = T::Controller::ensure_current_term()?;
            let from_term = term_id.checked_add_res(&1)?;

            let mut info = Self::juror(&who)?;
            Self::process_due_deactivation(&who, &mut info, term_id);
            let amount = if amount.is_zero() { info.available } else { amount };
            ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
            ensure!(info.available >= amount, Error::<T>::InsufficientAvailableBalance);

            // The latest values of the tree are the values of the next term.
            if let Some(limit) = TotalActiveBalanceLimit::<T>::get() {
                let total = SumTree::<T>::total().checked_add_res(&amount)?;
                ensure!(total <= limit, Error::<T>::TotalActiveBalanceLimitExceeded);
            }
            let active = info.id.map(SumTree::<T>::item).unwrap_or_else(Zero::zero);
            ensure!(
                active.checked_add_res(&amount)? >= T::MinActiveBalance::get(),
                Error::<T>::ActiveBalanceBelowMin
            );

            match info.id {
                Some(id) => SumTree::<T>::update(id, from_term, amount, UpdateOperation::Increase)?,
                None => {
                    let id = SumTree::<T>::insert(from_term, amount)?;
                    JurorIdToAccount::<T>::insert(id, who.clone());
                    info.id = Some(id);
                }
            }
            info.available = info.available.checked_sub_res(&amount)?;
            Jurors::<T>::insert(&who, info);

            Self::deposit_event(Event::JurorActivated { juror: who, amount, from_term });

            Ok(())
        }

        /// Requests the deactivation of `amount` of the unlocked active balance of the sender.
        /// Deactivates the whole unlocked active balance if `amount` is zero.
        ///
        /// The amount leaves the active balance with the next term and can be moved to the
        /// available balance from then on.
        ///
        /// # Weight
        ///
        /// Complexity: `O(h)`, where `h` is the height of the sum tree.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::deactivate())]
        #[transactional]
        pub fn deactivate(
            origin: OriginFor<T>,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            let term_id = T::Controller::ensure_current_term()?;
            let available_term = term_id.checked_add_res(&1)?;

            let mut info = Self::juror(&who)?;
            Self::process_due_deactivation(&who, &mut info, term_id);
            let id = info.id.ok_or(Error::<T>::InsufficientUnlockedActiveBalance)?;
            let unlocked = SumTree::<T>::item(id).saturating_sub(info.locked);
            let amount = if amount.is_zero() { unlocked } else { amount };
            ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);
            ensure!(amount <= unlocked, Error::<T>::InsufficientUnlockedActiveBalance);
            let remaining = unlocked.checked_sub_res(&amount)?;
            ensure!(
                remaining.is_zero() || remaining >= T::MinActiveBalance::get(),
                Error::<T>::ActiveBalanceBelowMin
            );

            SumTree::<T>::update(id, available_term, amount, UpdateOperation::Decrease)?;
            let requested = info.pending_deactivation().checked_add_res(&amount)?;
            info.deactivation = Some(DeactivationRequest { amount: requested, available_term });
            Jurors::<T>::insert(&who, info);

            Self::deposit_event(Event::JurorDeactivationRequested {
                juror: who,
                amount: requested,
                available_term,
            });

            Ok(())
        }

        /// Moves the due deactivation request of `juror` to their available balance.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::process_deactivation_request())]
        #[transactional]
        pub fn process_deactivation_request(
            origin: OriginFor<T>,
            juror: AccountIdOf<T>,
        ) -> DispatchResult {
            ensure_signed(origin)?;
            let term_id = T::Controller::ensure_current_term()?;

            let mut info = Self::juror(&juror)?;
            ensure!(
                Self::process_due_deactivation(&juror, &mut info, term_id).is_some(),
                Error::<T>::DeactivationRequestNotDue
            );
            Jurors::<T>::insert(&juror, info);

            Ok(())
        }

        /// Sets the upper bound of the total active balance. Callable by root or the config
        /// governor.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(5)]
        #[pallet::weight(T::WeightInfo::set_total_active_balance_limit())]
        #[transactional]
        pub fn set_total_active_balance_limit(
            origin: OriginFor<T>,
            limit: Option<BalanceOf<T>>,
        ) -> DispatchResult {
            Self::ensure_governor_or_root(origin, GovernorRole::ConfigGovernor)?;

            TotalActiveBalanceLimit::<T>::set(limit);

            Self::deposit_event(Event::TotalActiveBalanceLimitChanged { limit });

            Ok(())
        }

        /// Transfers `amount` of the funds collected by the court to `destination`. Callable by
        /// root or the funds governor.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(6)]
        #[pallet::weight(T::WeightInfo::recover_funds())]
        #[transactional]
        pub fn recover_funds(
            origin: OriginFor<T>,
            destination: AccountIdOf<T>,
            #[pallet::compact] amount: BalanceOf<T>,
        ) -> DispatchResult {
            Self::ensure_governor_or_root(origin, GovernorRole::FundsGovernor)?;
            ensure!(!amount.is_zero(), Error::<T>::ZeroAmount);

            T::Currency::transfer(
                &Self::court_account_id(),
                &destination,
                amount,
                ExistenceRequirement::KeepAlive,
            )?;

            Self::deposit_event(Event::FundsRecovered { destination, amount });

            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        pub fn reserve_id() -> [u8; 8] {
            T::PalletId::get().0
        }

        /// The account which holds slashed and collected funds.
        pub fn court_account_id() -> AccountIdOf<T> {
            T::PalletId::get().into_account_truncating()
        }

        fn juror(who: &AccountIdOf<T>) -> Result<JurorInfoOf<T>, DispatchError> {
            Jurors::<T>::get(who).ok_or_else(|| Error::<T>::UnknownJuror.into())
        }

        /// Stores `info` or removes the entry if it doesn't hold anything anymore. Jurors with a
        /// sum tree leaf are never removed.
        fn store_juror(who: &AccountIdOf<T>, info: JurorInfoOf<T>) {
            if info.id.is_none() && info.is_empty() {
                Jurors::<T>::remove(who);
            } else {
                Jurors::<T>::insert(who, info);
            }
        }

        /// Passes for root and for signed origins holding `role`.
        fn ensure_governor_or_root(origin: OriginFor<T>, role: GovernorRole) -> DispatchResult {
            if let Some(who) = ensure_signed_or_root(origin)? {
                ensure!(
                    T::Controller::governor(role).as_ref() == Some(&who),
                    Error::<T>::SenderNotGovernor
                );
            }
            Ok(())
        }

        fn ensure_dispute_manager(caller: &AccountIdOf<T>) -> DispatchResult {
            ensure!(
                T::Controller::module(CourtModule::DisputeManager).as_ref() == Some(caller),
                Error::<T>::SenderNotDisputeManager
            );
            Ok(())
        }

        /// Fails unless `term_id` is the current term, transitioning the clock if needed.
        fn ensure_settlement_term(term_id: TermId) -> Result<TermId, DispatchError> {
            let current_term_id = T::Controller::ensure_current_term()?;
            ensure!(term_id == current_term_id, Error::<T>::TermNotCurrent);
            Ok(current_term_id.checked_add_res(&1)?)
        }

        /// Moves a deactivation request which is due at `term_id` to the available balance and
        /// returns the moved amount.
        fn process_due_deactivation(
            who: &AccountIdOf<T>,
            info: &mut JurorInfoOf<T>,
            term_id: TermId,
        ) -> Option<BalanceOf<T>> {
            let amount = info.due_deactivation(term_id)?;
            info.available = info.available.saturating_add(amount);
            info.deactivation = None;
            Self::deposit_event(Event::JurorDeactivationProcessed {
                juror: who.clone(),
                amount,
                term_id,
            });
            Some(amount)
        }

        /// Returns `amount` of the deactivation request of `who` effective at `next_term_id` to
        /// the active balance. Fails if the request doesn't cover `amount`.
        fn reduce_deactivation_request(
            who: &AccountIdOf<T>,
            info: &mut JurorInfoOf<T>,
            amount: BalanceOf<T>,
            next_term_id: TermId,
        ) -> DispatchResult {
            let id = info.id.ok_or(Error::<T>::UnknownJuror)?;
            let mut request = info
                .deactivation
                .filter(|request| request.available_term == next_term_id)
                .ok_or(Error::<T>::InsufficientUnlockedActiveBalance)?;
            ensure!(request.amount >= amount, Error::<T>::InsufficientUnlockedActiveBalance);

            request.amount = request.amount.checked_sub_res(&amount)?;
            info.deactivation = if request.amount.is_zero() { None } else { Some(request) };
            SumTree::<T>::update(id, next_term_id, amount, UpdateOperation::Increase)?;

            Self::deposit_event(Event::JurorDeactivationUpdated {
                juror: who.clone(),
                amount: request.amount,
                available_term: request.available_term,
            });

            Ok(())
        }

        /// Locks `lock` of the active balance of `who` for a draft at `term_id`, where the juror
        /// had an active balance of `active`. Returns `false` if the juror can't cover the lock.
        fn lock_for_draft(
            who: &AccountIdOf<T>,
            active: BalanceOf<T>,
            lock: BalanceOf<T>,
            term_id: TermId,
        ) -> Result<bool, DispatchError> {
            let mut info = Self::juror(who)?;
            let id = info.id.ok_or(Error::<T>::UnknownJuror)?;
            let locked = info.locked.checked_add_res(&lock)?;
            if active < locked {
                return Ok(false);
            }

            // The lock must be backed in the next term as well. A pending deactivation is
            // reduced if it would leave less than the locked balance.
            let next_term_id = term_id.checked_add_res(&1)?;
            let next_active = SumTree::<T>::item(id);
            if next_active < locked {
                let shortfall = locked.saturating_sub(next_active);
                let covered = info
                    .deactivation
                    .is_some_and(|r| r.available_term == next_term_id && r.amount >= shortfall);
                if !covered {
                    return Ok(false);
                }
                Self::reduce_deactivation_request(who, &mut info, shortfall, next_term_id)?;
            }

            info.locked = locked;
            Jurors::<T>::insert(who, info);
            Ok(true)
        }

        /// Moves `amount` of the stake of `who` to the court account.
        fn transfer_stake_to_court(who: &AccountIdOf<T>, amount: BalanceOf<T>) -> DispatchResult {
            let missing = T::Currency::repatriate_reserved_named(
                &Self::reserve_id(),
                who,
                &Self::court_account_id(),
                amount,
                BalanceStatus::Free,
            )?;
            debug_assert!(
                missing.is_zero(),
                "Could not repatriate all of the amount. who: {:?}, amount: {:?}, missing: {:?}",
                who,
                amount,
                missing,
            );
            Ok(())
        }

        #[transactional]
        fn do_draft(
            params: DraftParams<BalanceOf<T>>,
        ) -> Result<DraftResult<AccountIdOf<T>>, DispatchError> {
            let DraftParams {
                dispute_id,
                term_id,
                selected_jurors,
                batch_requested_jurors,
                round_requested_jurors,
                draft_lock_amount,
                sortition_iteration,
            } = params;

            let current_term_id = T::Controller::ensure_current_term()?;
            ensure!(term_id == current_term_id, Error::<T>::DraftTermNotCurrent);
            ensure!(!round_requested_jurors.is_zero(), Error::<T>::InvalidRoundSize);
            ensure!(
                batch_requested_jurors <= T::MaxDraftBatchSize::get(),
                Error::<T>::DraftBatchTooLarge
            );
            let batch_end = selected_jurors
                .checked_add(batch_requested_jurors)
                .ok_or(Error::<T>::DraftBatchExceedsRound)?;
            ensure!(batch_end <= round_requested_jurors, Error::<T>::DraftBatchExceedsRound);
            let randomness =
                T::Controller::term_randomness(term_id).ok_or(Error::<T>::RandomnessUnavailable)?;

            let total_weight = SumTree::<T>::total_at(term_id);
            let mut cursor =
                DraftCursor::new(selected_jurors, batch_requested_jurors, sortition_iteration);
            let mut drafted: Vec<DraftedJuror<AccountIdOf<T>>> = vec![];

            while cursor.needs_pass(T::MaxDraftIterations::get()) {
                let (low, high) = draft_batch_bounds::<T>(
                    cursor.selected,
                    cursor.remaining,
                    round_requested_jurors,
                    total_weight,
                )?;
                let seed = SortitionSeed { randomness, dispute_id, iteration: cursor.iteration };
                let points = sample::<T, _>(&seed, cursor.remaining, low, high);
                let hits = SumTree::<T>::search(&points, term_id)?;

                let mut accepted: u32 = 0;
                for hit in hits {
                    let juror =
                        JurorIdToAccount::<T>::get(hit.key).ok_or(Error::<T>::UnknownJuror)?;
                    if !Self::lock_for_draft(&juror, hit.value, draft_lock_amount, term_id)? {
                        continue;
                    }
                    accepted = accepted.saturating_add(1);
                    match drafted.iter_mut().find(|d| d.juror == juror) {
                        Some(entry) => entry.weight = entry.weight.saturating_add(1),
                        None => drafted.push(DraftedJuror { juror, weight: 1 }),
                    }
                }

                log::debug!(
                    target: LOG_TARGET,
                    "Draft of dispute {} accepted {} of {} jurors in iteration {}.",
                    dispute_id,
                    accepted,
                    cursor.remaining,
                    cursor.iteration,
                );
                cursor.advance(accepted);
            }

            for entry in drafted.iter() {
                Self::deposit_event(Event::JurorDrafted {
                    dispute_id,
                    juror: entry.juror.clone(),
                    weight: entry.weight,
                });
            }
            if cursor.selected == round_requested_jurors {
                Self::deposit_event(Event::RoundDrafted {
                    dispute_id,
                    jurors: round_requested_jurors,
                });
            }

            Ok(DraftResult {
                jurors: drafted,
                selected: cursor.selected.saturating_sub(selected_jurors),
                next_iteration: cursor.iteration,
            })
        }
    }

    impl<T: Config> JurorsRegistryApi for Pallet<T> {
        type AccountId = AccountIdOf<T>;
        type Balance = BalanceOf<T>;

        fn draft(
            caller: &Self::AccountId,
            params: DraftParams<Self::Balance>,
        ) -> Result<DraftResult<Self::AccountId>, DispatchError> {
            Self::ensure_dispute_manager(caller)?;
            Self::do_draft(params)
        }

        #[transactional]
        fn slash_or_unlock(
            caller: &Self::AccountId,
            term_id: TermId,
            settlements: Vec<JurorSettlementOf<T>>,
        ) -> Result<Self::Balance, DispatchError> {
            Self::ensure_dispute_manager(caller)?;
            let effective_term = Self::ensure_settlement_term(term_id)?;

            let mut collected: BalanceOf<T> = Zero::zero();
            for JurorSettlement { juror, locked_amount, rewarded } in settlements {
                let mut info = Self::juror(&juror)?;
                info.locked = info
                    .locked
                    .checked_sub(&locked_amount)
                    .ok_or(Error::<T>::InsufficientLockedBalance)?;

                if !rewarded && !locked_amount.is_zero() {
                    let id = info.id.ok_or(Error::<T>::UnknownJuror)?;
                    SumTree::<T>::update(
                        id,
                        effective_term,
                        locked_amount,
                        UpdateOperation::Decrease,
                    )?;
                    Self::transfer_stake_to_court(&juror, locked_amount)?;
                    collected = collected.checked_add_res(&locked_amount)?;
                    Self::deposit_event(Event::JurorSlashed {
                        juror: juror.clone(),
                        amount: locked_amount,
                        effective_term,
                    });
                }
                Jurors::<T>::insert(&juror, info);
            }

            Ok(collected)
        }

        #[transactional]
        fn collect_tokens(
            caller: &Self::AccountId,
            juror: &Self::AccountId,
            amount: Self::Balance,
            term_id: TermId,
        ) -> Result<bool, DispatchError> {
            Self::ensure_dispute_manager(caller)?;
            let effective_term = Self::ensure_settlement_term(term_id)?;
            if amount.is_zero() {
                return Ok(true);
            }

            let Some(mut info) = Jurors::<T>::get(juror) else {
                return Ok(false);
            };
            let Some(id) = info.id else {
                return Ok(false);
            };
            let unlocked = SumTree::<T>::item(id).saturating_sub(info.locked);
            let pending = info
                .deactivation
                .filter(|request| request.available_term == effective_term)
                .map(|request| request.amount)
                .unwrap_or_else(Zero::zero);
            if amount > unlocked.saturating_add(pending) {
                return Ok(false);
            }
            if amount > unlocked {
                let shortfall = amount.saturating_sub(unlocked);
                Self::reduce_deactivation_request(juror, &mut info, shortfall, effective_term)?;
            }

            SumTree::<T>::update(id, effective_term, amount, UpdateOperation::Decrease)?;
            Self::transfer_stake_to_court(juror, amount)?;
            Jurors::<T>::insert(juror, info);

            Self::deposit_event(Event::JurorTokensCollected {
                juror: juror.clone(),
                amount,
                effective_term,
            });

            Ok(true)
        }

        #[transactional]
        fn assign_tokens(
            caller: &Self::AccountId,
            juror: &Self::AccountId,
            amount: Self::Balance,
        ) -> DispatchResult {
            Self::ensure_dispute_manager(caller)?;
            if amount.is_zero() {
                return Ok(());
            }

            T::Currency::transfer(
                &Self::court_account_id(),
                juror,
                amount,
                ExistenceRequirement::KeepAlive,
            )?;
            T::Currency::reserve_named(&Self::reserve_id(), juror, amount)?;
            let mut info = Jurors::<T>::get(juror).unwrap_or_default();
            info.available = info.available.checked_add_res(&amount)?;
            Jurors::<T>::insert(juror, info);

            Self::deposit_event(Event::JurorTokensAssigned { juror: juror.clone(), amount });

            Ok(())
        }

        fn unlocked_active_balance_of(juror: &Self::AccountId) -> Self::Balance {
            let Some(info) = Jurors::<T>::get(juror) else {
                return Zero::zero();
            };
            let term_id = T::Controller::current_term_id();
            info.id
                .map(|id| SumTree::<T>::item_at(id, term_id).saturating_sub(info.locked))
                .unwrap_or_else(Zero::zero)
        }

        fn balance_of(juror: &Self::AccountId) -> JurorBalances<Self::Balance> {
            let Some(info) = Jurors::<T>::get(juror) else {
                return Default::default();
            };
            JurorBalances {
                active: info.id.map(SumTree::<T>::item).unwrap_or_else(Zero::zero),
                available: info.available,
                locked: info.locked,
                pending_deactivation: info.pending_deactivation(),
            }
        }

        fn active_balance_of_at(juror: &Self::AccountId, term_id: TermId) -> Self::Balance {
            Jurors::<T>::get(juror)
                .and_then(|info| info.id)
                .map(|id| SumTree::<T>::item_at(id, term_id))
                .unwrap_or_else(Zero::zero)
        }

        fn total_active_balance_at(term_id: TermId) -> Self::Balance {
            SumTree::<T>::total_at(term_id)
        }
    }
}
