//! # Whitelist Sale Pallet
//!
//! Fixed-price, whitelist-gated primary sale for units of a
//! [`pallet_nft_registry`] collection.
//!
//! The sale owner curates the whitelist. A whitelisted account calls
//! [`Pallet::mint`] with the exact price of the units it asks for; the payment
//! moves into the pallet account and the units are issued through the
//! registry, with the pallet account acting as the registry's issuer. The
//! per-wallet quota is checked against the account's registry balance, so no
//! separate mint ledger is kept. The owner collects accumulated payments with
//! [`Pallet::withdraw`].
//!
//! The registry owner has to delegate the issuer role to
//! [`Pallet::account_id`] before the first sale; until then every `mint` fails
//! with the registry's `Unauthorized` error and nothing changes.

#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream but still the read surface here
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{
    dispatch::DispatchResult,
    ensure,
    pallet_prelude::*,
    storage::with_storage_layer,
    traits::{
        fungible::{Inspect, Mutate},
        tokens::Preservation,
    },
    PalletId,
};
use frame_system::{ensure_signed, pallet_prelude::*};
use pallet_nft_registry::UnitIssuer;
use sp_runtime::traits::{AccountIdConversion, CheckedAdd, CheckedMul, Zero};
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

const LOG_TARGET: &str = "runtime::whitelist-sale";

pub type BalanceOf<T> =
    <<T as Config>::Currency as Inspect<<T as frame_system::Config>::AccountId>>::Balance;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Currency buyers pay in.
        type Currency: Mutate<Self::AccountId>;

        /// Registry that units are issued through.
        type Registry: UnitIssuer<Self::AccountId>;

        /// Derives the account that holds payments and acts as registry issuer.
        #[pallet::constant]
        type PalletId: Get<PalletId>;

        /// Maximum number of accounts in one whitelist edit.
        #[pallet::constant]
        type MaxBatchSize: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Sale administrator: curates the whitelist and withdraws payments
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Price of a single unit, fixed at genesis
    #[pallet::storage]
    #[pallet::getter(fn unit_price)]
    pub type UnitPrice<T: Config> = StorageValue<_, BalanceOf<T>, ValueQuery>;

    /// Lifetime cap on units one account can buy, fixed at genesis
    #[pallet::storage]
    #[pallet::getter(fn max_per_wallet)]
    pub type MaxPerWallet<T> = StorageValue<_, u32, ValueQuery>;

    /// Accounts admitted to the sale
    #[pallet::storage]
    #[pallet::getter(fn whitelist)]
    pub type Whitelist<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, bool, ValueQuery>;

    /// Payments received and not yet withdrawn
    #[pallet::storage]
    #[pallet::getter(fn retained_funds)]
    pub type RetainedFunds<T: Config> = StorageValue<_, BalanceOf<T>, ValueQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Account added to whitelist
        Whitelisted { account: T::AccountId },
        /// Account removed from whitelist
        RemovedFromWhitelist { account: T::AccountId },
        /// Units bought and issued to the buyer
        Minted { who: T::AccountId, quantity: u32, paid: BalanceOf<T> },
        /// Retained payments sent to the owner
        Withdrawn { to: T::AccountId, amount: BalanceOf<T> },
        /// Sale ownership handed over
        OwnershipTransferred { previous: T::AccountId, owner: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller is not the sale owner.
        Unauthorized,
        /// Zero units requested.
        InvalidQuantity,
        /// Caller is not on the whitelist.
        NotWhitelisted,
        /// Payment differs from `unit_price * quantity`.
        IncorrectPayment,
        /// Caller would hold more than `MaxPerWallet` units.
        WalletLimitExceeded,
        /// Sale would push the registry past its supply ceiling.
        SupplyExceeded,
        /// Retained funds no longer fit the balance type.
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MaxBatchSize::get() > 0, "`MaxBatchSize` must admit at least one account");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::add_to_whitelist(accounts.len() as u32))]
        pub fn add_to_whitelist(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxBatchSize>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            for account in accounts {
                Whitelist::<T>::insert(&account, true);
                Self::deposit_event(Event::Whitelisted { account });
            }
            Ok(())
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::remove_from_whitelist(accounts.len() as u32))]
        pub fn remove_from_whitelist(
            origin: OriginFor<T>,
            accounts: BoundedVec<T::AccountId, T::MaxBatchSize>,
        ) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            for account in accounts {
                Whitelist::<T>::remove(&account);
                Self::deposit_event(Event::RemovedFromWhitelist { account });
            }
            Ok(())
        }

        /// Buy `quantity` units for exactly `unit_price * quantity`.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::mint((*quantity).min(T::Registry::max_supply())))]
        pub fn mint(origin: OriginFor<T>, quantity: u32, payment: BalanceOf<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_mint(&who, quantity, payment)
        }

        /// Send every retained payment to the owner.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::withdraw())]
        pub fn withdraw(origin: OriginFor<T>) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            // Cleared before the transfer so nothing can observe it twice
            let amount = RetainedFunds::<T>::take();
            if !amount.is_zero() {
                T::Currency::transfer(&Self::account_id(), &who, amount, Preservation::Expendable)?;
            }

            log::info!(target: LOG_TARGET, "Withdrew {:?} to {:?}", amount, who);
            Self::deposit_event(Event::Withdrawn { to: who, amount });
            Ok(())
        }

        #[pallet::call_index(4)]
        #[pallet::weight(T::WeightInfo::transfer_ownership())]
        pub fn transfer_ownership(origin: OriginFor<T>, owner: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            Owner::<T>::put(&owner);
            log::info!(target: LOG_TARGET, "Ownership moved from {:?} to {:?}", who, owner);
            Self::deposit_event(Event::OwnershipTransferred { previous: who, owner });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Sale owner, normally the deploying account
        pub owner: Option<T::AccountId>,
        /// Price per unit
        pub unit_price: BalanceOf<T>,
        /// Lifetime per-account quota
        pub max_per_wallet: u32,
        /// Accounts to whitelist at genesis
        pub whitelisted_accounts: Vec<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            Owner::<T>::set(self.owner.clone());
            UnitPrice::<T>::put(self.unit_price);
            MaxPerWallet::<T>::put(self.max_per_wallet);

            for account in &self.whitelisted_accounts {
                Whitelist::<T>::insert(account, true);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Account holding retained payments; also the issuer the registry must trust.
    pub fn account_id() -> T::AccountId {
        T::PalletId::get().into_account_truncating()
    }

    pub fn is_whitelisted(who: &T::AccountId) -> bool {
        Whitelist::<T>::get(who)
    }

    /// Units `who` has bought so far.
    pub fn minted_by(who: &T::AccountId) -> u32 {
        T::Registry::balance_of(who)
    }

    /// Units `who` may still buy before hitting the quota.
    pub fn remaining_allowance(who: &T::AccountId) -> u32 {
        MaxPerWallet::<T>::get().saturating_sub(T::Registry::balance_of(who))
    }

    /// Run every check read-only, then take payment and issue in one storage layer.
    ///
    /// Checks run in a fixed order and the first failure is reported: quantity,
    /// whitelist, payment, wallet quota, supply.
    pub fn do_mint(who: &T::AccountId, quantity: u32, payment: BalanceOf<T>) -> DispatchResult {
        ensure!(quantity > 0, Error::<T>::InvalidQuantity);
        ensure!(Whitelist::<T>::get(who), Error::<T>::NotWhitelisted);

        let price = UnitPrice::<T>::get()
            .checked_mul(&quantity.into())
            .ok_or(Error::<T>::IncorrectPayment)?;
        ensure!(payment == price, Error::<T>::IncorrectPayment);

        ensure!(
            T::Registry::balance_of(who).saturating_add(quantity) <= MaxPerWallet::<T>::get(),
            Error::<T>::WalletLimitExceeded
        );
        ensure!(
            T::Registry::total_issued().saturating_add(quantity) <= T::Registry::max_supply(),
            Error::<T>::SupplyExceeded
        );

        let retained = RetainedFunds::<T>::get().checked_add(&payment).ok_or(Error::<T>::Overflow)?;
        let sale_account = Self::account_id();

        with_storage_layer(|| -> DispatchResult {
            if !payment.is_zero() {
                T::Currency::transfer(who, &sale_account, payment, Preservation::Preserve)?;
            }
            RetainedFunds::<T>::put(retained);
            T::Registry::issue(&sale_account, who, quantity)
        })?;

        log::debug!(target: LOG_TARGET, "{:?} bought {} units for {:?}", who, quantity, payment);
        Self::deposit_event(Event::Minted { who: who.clone(), quantity, paid: payment });
        Ok(())
    }

    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        ensure!(Owner::<T>::get().as_ref() == Some(who), Error::<T>::Unauthorized);
        Ok(())
    }

    /// The pallet account must cover every payment that has not been withdrawn.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        ensure!(
            T::Currency::balance(&Self::account_id()) >= RetainedFunds::<T>::get(),
            "Sale account holds less than the retained funds"
        );
        Ok(())
    }
}
