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
pub mod types;
pub mod weights;

pub use pallet::*;

#[frame_support::pallet]
mod pallet {
    use crate::{
        types::{Clock, Term},
        weights::WeightInfoZeitgeist,
    };
    use core::marker::PhantomData;
    use frame_support::{
        ensure,
        pallet_prelude::{
            DispatchError, DispatchResult, OptionQuery, StorageMap, StorageValue, ValueQuery,
            Weight,
        },
        traits::{Get, Hooks, IsType, Randomness, StorageVersion},
        transactional, Twox64Concat,
    };
    use frame_system::{
        ensure_signed, ensure_signed_or_root,
        pallet_prelude::{BlockNumberFor, OriginFor},
    };
    use parity_scale_codec::Encode;
    use sp_runtime::traits::{One, Saturating, Zero};
    use zeitgeist_primitives::{
        traits::CourtControllerApi,
        types::{CourtModule, GovernorRole, TermId},
    };

    const LOG_TARGET: &str = "runtime::zrml-court-controller";

    /// Subject passed to the randomness source when a term's randomness is recorded.
    const TERM_RANDOMNESS_SUBJECT: &[u8; 15] = b"zrml-court/term";

    #[pallet::config]
    pub trait Config: frame_system::Config {
        /// The maximum number of term transitions court modules may perform implicitly when they
        /// require the current term. More transitions require explicit heartbeats.
        #[pallet::constant]
        type MaxAutoTermTransitions: Get<TermId>;

        /// The source of term randomness. Sampled in the block after a term's randomness block.
        type Random: Randomness<Self::Hash, BlockNumberFor<Self>>;

        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// The length of a term in blocks.
        #[pallet::constant]
        type TermDuration: Get<BlockNumberFor<Self>>;

        type WeightInfo: WeightInfoZeitgeist;
    }

    /// The current storage version.
    const STORAGE_VERSION: StorageVersion = StorageVersion::new(0);

    pub(crate) type AccountIdOf<T> = <T as frame_system::Config>::AccountId;
    pub(crate) type HashOf<T> = <T as frame_system::Config>::Hash;
    pub(crate) type TermOf<T> = Term<BlockNumberFor<T>, HashOf<T>>;
    pub(crate) type ClockOf<T> = Clock<BlockNumberFor<T>, HashOf<T>>;

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(PhantomData<T>);

    /// The id of the last transitioned term.
    #[pallet::storage]
    pub type CurrentTermId<T> = StorageValue<_, TermId, ValueQuery>;

    /// All transitioned terms. Term zero starts at genesis.
    #[pallet::storage]
    pub type Terms<T: Config> = StorageMap<_, Twox64Concat, TermId, TermOf<T>, ValueQuery>;

    #[pallet::storage]
    pub type Governors<T: Config> =
        StorageMap<_, Twox64Concat, GovernorRole, AccountIdOf<T>, OptionQuery>;

    #[pallet::storage]
    pub type Modules<T: Config> =
        StorageMap<_, Twox64Concat, CourtModule, AccountIdOf<T>, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(fn deposit_event)]
    pub enum Event<T>
    where
        T: Config,
    {
        /// The clock transitioned from `previous_term_id` to `current_term_id`.
        Heartbeat { previous_term_id: TermId, current_term_id: TermId },
        /// The randomness of a term was recorded.
        TermRandomnessRecorded { term_id: TermId, randomness: HashOf<T> },
        /// A governor role was assigned.
        GovernorChanged {
            role: GovernorRole,
            previous: Option<AccountIdOf<T>>,
            governor: AccountIdOf<T>,
        },
        /// A court module was registered.
        ModuleSet { module: CourtModule, account: AccountIdOf<T> },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// The number of transitions of a heartbeat must not be zero.
        ZeroTermTransitions,
        /// The clock already is in the term of the current block.
        TermTransitionNotNeeded,
        /// More term transitions are required than can be performed implicitly.
        TooManyTermTransitions,
        /// The term was not transitioned yet.
        TermDoesNotExist,
        /// The randomness of the term is recorded once its randomness block has passed.
        TermRandomnessNotYet,
        /// The randomness of the term wasn't recorded and can't be recorded anymore.
        TermRandomnessUnavailable,
        /// The sender does not hold the required governor role.
        SenderNotGovernor,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn on_initialize(now: BlockNumberFor<T>) -> Weight {
            let term_id = CurrentTermId::<T>::get();
            let term = Terms::<T>::get(term_id);
            let recording_block = term.randomness_block.saturating_add(One::one());
            if term.randomness.is_some() || now != recording_block {
                return T::DbWeight::get().reads(2);
            }
            Self::record_term_randomness(term_id, term);
            T::WeightInfo::record_term_randomness()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Transitions the clock by up to `max_transitions` terms towards the term of the current
        /// block.
        ///
        /// # Weight
        ///
        /// Complexity: `O(n)`, where `n` is `max_transitions`.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::heartbeat(*max_transitions))]
        #[transactional]
        pub fn heartbeat(origin: OriginFor<T>, max_transitions: u32) -> DispatchResult {
            ensure_signed(origin)?;
            ensure!(!max_transitions.is_zero(), Error::<T>::ZeroTermTransitions);

            Self::do_transition_terms(max_transitions.into())?;

            Ok(())
        }

        /// Fails unless the randomness of `term_id` is recorded.
        ///
        /// The randomness of the current term is recorded automatically in the block after the
        /// term's randomness block. Terms which were superseded before that block never receive
        /// randomness.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::compute_term_randomness())]
        #[transactional]
        pub fn compute_term_randomness(origin: OriginFor<T>, term_id: TermId) -> DispatchResult {
            ensure_signed(origin)?;

            Self::ensure_term_randomness(term_id)?;

            Ok(())
        }

        /// Assigns `role` to `governor`. Callable by root or the current holder of `role`.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::set_governor())]
        #[transactional]
        pub fn set_governor(
            origin: OriginFor<T>,
            role: GovernorRole,
            governor: AccountIdOf<T>,
        ) -> DispatchResult {
            Self::ensure_governor_or_root(origin, role)?;

            let previous = Governors::<T>::get(role);
            Governors::<T>::insert(role, governor.clone());

            Self::deposit_event(Event::GovernorChanged { role, previous, governor });

            Ok(())
        }

        /// Registers `account` as `module`. Callable by root or the modules governor.
        ///
        /// # Weight
        ///
        /// Complexity: `O(1)`
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::set_module())]
        #[transactional]
        pub fn set_module(
            origin: OriginFor<T>,
            module: CourtModule,
            account: AccountIdOf<T>,
        ) -> DispatchResult {
            Self::ensure_governor_or_root(origin, GovernorRole::ModulesGovernor)?;

            Modules::<T>::insert(module, account.clone());

            Self::deposit_event(Event::ModuleSet { module, account });

            Ok(())
        }
    }

    impl<T: Config> Pallet<T> {
        /// Passes for root and for signed origins holding `role`.
        pub(crate) fn ensure_governor_or_root(
            origin: OriginFor<T>,
            role: GovernorRole,
        ) -> DispatchResult {
            if let Some(who) = ensure_signed_or_root(origin)? {
                ensure!(
                    Governors::<T>::get(role).as_ref() == Some(&who),
                    Error::<T>::SenderNotGovernor
                );
            }
            Ok(())
        }

        pub(crate) fn clock() -> ClockOf<T> {
            let term_id = CurrentTermId::<T>::get();
            Clock { term_id, term: Terms::<T>::get(term_id) }
        }

        /// Samples and stores the randomness of `term_id`.
        fn record_term_randomness(term_id: TermId, mut term: TermOf<T>) {
            let subject = (TERM_RANDOMNESS_SUBJECT, term_id).encode();
            let (randomness, _) = T::Random::random(&subject);
            term.randomness = Some(randomness);
            Terms::<T>::insert(term_id, term);

            log::debug!(target: LOG_TARGET, "Recorded the randomness of term {:?}.", term_id);
            Self::deposit_event(Event::TermRandomnessRecorded { term_id, randomness });
        }

        /// Performs up to `max_transitions` term transitions and returns the new current term id.
        fn do_transition_terms(max_transitions: TermId) -> Result<TermId, DispatchError> {
            let now = frame_system::Pallet::<T>::block_number();
            let clock = Self::clock();
            let previous_term_id = clock.term_id;

            let (clock, entered, caught_up) =
                clock.advance(max_transitions, T::TermDuration::get(), now);
            ensure!(!entered.is_empty(), Error::<T>::TermTransitionNotNeeded);

            for (term_id, term) in entered {
                Terms::<T>::insert(term_id, term);
            }
            CurrentTermId::<T>::put(clock.term_id);

            if !caught_up {
                log::debug!(
                    target: LOG_TARGET,
                    "Transitioned to term {:?}, but the clock is still behind block {:?}.",
                    clock.term_id,
                    now,
                );
            }

            Self::deposit_event(Event::Heartbeat {
                previous_term_id,
                current_term_id: clock.term_id,
            });

            Ok(clock.term_id)
        }
    }

    impl<T: Config> CourtControllerApi for Pallet<T> {
        type AccountId = AccountIdOf<T>;
        type Hash = HashOf<T>;

        fn current_term_id() -> TermId {
            CurrentTermId::<T>::get()
        }

        fn needed_term_transitions() -> TermId {
            let now = frame_system::Pallet::<T>::block_number();
            Self::clock().term.needed_transitions(T::TermDuration::get(), now)
        }

        fn ensure_current_term() -> Result<TermId, DispatchError> {
            let needed = Self::needed_term_transitions();
            if needed.is_zero() {
                return Ok(CurrentTermId::<T>::get());
            }
            ensure!(needed <= T::MaxAutoTermTransitions::get(), Error::<T>::TooManyTermTransitions);
            Self::do_transition_terms(needed)
        }

        fn term_randomness(term_id: TermId) -> Option<Self::Hash> {
            if term_id > CurrentTermId::<T>::get() {
                return None;
            }
            Terms::<T>::get(term_id).randomness
        }

        fn ensure_term_randomness(term_id: TermId) -> Result<Self::Hash, DispatchError> {
            ensure!(term_id <= CurrentTermId::<T>::get(), Error::<T>::TermDoesNotExist);

            let term = Terms::<T>::get(term_id);
            if let Some(randomness) = term.randomness {
                return Ok(randomness);
            }

            // The hook of the block after the randomness block records the randomness.
            let now = frame_system::Pallet::<T>::block_number();
            ensure!(now > term.randomness_block, Error::<T>::TermRandomnessNotYet);
            Err(Error::<T>::TermRandomnessUnavailable.into())
        }

        fn governor(role: GovernorRole) -> Option<Self::AccountId> {
            Governors::<T>::get(role)
        }

        fn module(module: CourtModule) -> Option<Self::AccountId> {
            Modules::<T>::get(module)
        }
    }
}
