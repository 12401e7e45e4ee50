//! # NFT Registry Pallet
//!
//! Owns an enumerable, supply-capped collection of units. Every unit has a
//! sequential identity and a holder; per-account balances and the issued
//! counter always agree.
//!
//! Exactly one account, the *issuer*, may create new units. The registry
//! owner decides who that is through [`Pallet::set_issuer`], usually handing
//! the role to a sale pallet's account right after genesis. Other pallets
//! reach the registry through the [`UnitIssuer`] trait rather than its storage.

#![cfg_attr(not(feature = "std"), no_std)]
// `#[pallet::getter]` is deprecated upstream but still the read surface here
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
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

const LOG_TARGET: &str = "runtime::nft-registry";

/// Sequential identity of a single unit.
pub type ItemId = u32;

/// Issuing capability handed to other pallets.
///
/// `issue` performs the same issuer check as the extrinsic, so the caller has to
/// pass the account it was delegated under.
pub trait UnitIssuer<AccountId> {
    /// Create `count` new units for `recipient` on behalf of `issuer`.
    fn issue(issuer: &AccountId, recipient: &AccountId, count: u32) -> DispatchResult;

    /// Units currently held by `who`.
    fn balance_of(who: &AccountId) -> u32;

    /// Units issued so far.
    fn total_issued() -> u32;

    /// Ceiling on [`UnitIssuer::total_issued`].
    fn max_supply() -> u32;

    /// Point the issuer role at `issuer` without an owner signature.
    #[cfg(feature = "runtime-benchmarks")]
    fn force_issuer(issuer: &AccountId);
}

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;

        /// Maximum number of units that can ever be issued.
        #[pallet::constant]
        type MaxSupply: Get<u32>;

        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Collection name (e.g., "WhitelistNFT")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, BoundedVec<u8, ConstU32<64>>, ValueQuery>;

    /// Collection symbol (e.g., "WLNFT")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, BoundedVec<u8, ConstU32<16>>, ValueQuery>;

    /// Units issued so far. Also the identity the next unit will receive.
    #[pallet::storage]
    #[pallet::getter(fn total_minted)]
    pub type TotalMinted<T> = StorageValue<_, u32, ValueQuery>;

    /// Units held per account
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u32, ValueQuery>;

    /// Holder of each issued unit
    #[pallet::storage]
    #[pallet::getter(fn owner_of)]
    pub type ItemOwner<T: Config> = StorageMap<_, Twox64Concat, ItemId, T::AccountId, OptionQuery>;

    /// Account allowed to delegate the issuer role and hand over ownership
    #[pallet::storage]
    #[pallet::getter(fn owner)]
    pub type Owner<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// The only account allowed to issue units
    #[pallet::storage]
    #[pallet::getter(fn issuer)]
    pub type Issuer<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// `count` units with identities `first_id..first_id + count` went to `to`
        Issued { to: T::AccountId, first_id: ItemId, count: u32 },
        /// Issuer role reassigned
        IssuerSet { previous: Option<T::AccountId>, issuer: T::AccountId },
        /// Registry ownership handed over
        OwnershipTransferred { previous: T::AccountId, owner: T::AccountId },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Caller does not hold the role the call requires.
        Unauthorized,
        /// Zero units requested.
        InvalidQuantity,
        /// Issuing would push the total past `MaxSupply`.
        SupplyExceeded,
        /// Name or symbol does not fit its storage bound.
        MetadataTooLong,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        fn integrity_test() {
            assert!(T::MaxSupply::get() > 0, "`MaxSupply` must allow at least one unit");
        }

        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Hand the issuer role to `issuer`, revoking it from whoever held it.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::set_issuer())]
        pub fn set_issuer(origin: OriginFor<T>, issuer: T::AccountId) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::ensure_owner(&who)?;

            let previous = Issuer::<T>::get();
            Issuer::<T>::put(&issuer);
            log::info!(
                target: LOG_TARGET,
                "Issuer role moved from {:?} to {:?}",
                previous,
                issuer
            );
            Self::deposit_event(Event::IssuerSet { previous, issuer });
            Ok(())
        }

        /// Issue `count` units to `recipient`. Only the current issuer may call this.
        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::issue(*count))]
        pub fn issue(origin: OriginFor<T>, recipient: T::AccountId, count: u32) -> DispatchResult {
            let who = ensure_signed(origin)?;
            Self::do_issue(&who, &recipient, count)
        }

        #[pallet::call_index(2)]
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
        /// Registry owner, normally the deploying account
        pub owner: Option<T::AccountId>,
        /// Collection name
        pub name: Vec<u8>,
        /// Collection symbol
        pub symbol: Vec<u8>,
        /// Issuer delegated right after creation (e.g. a sale pallet account)
        pub issuer: Option<T::AccountId>,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            Pallet::<T>::do_create(self.owner.clone(), &self.name, &self.symbol)
                .expect("Collection name (max 64 bytes) or symbol (max 16 bytes) too long");

            if let Some(ref issuer) = self.issuer {
                Issuer::<T>::put(issuer);
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// Initialise metadata and ownership. The issuer role starts out unset.
    pub fn do_create(owner: Option<T::AccountId>, name: &[u8], symbol: &[u8]) -> DispatchResult {
        let name: BoundedVec<u8, ConstU32<64>> =
            name.to_vec().try_into().map_err(|_| Error::<T>::MetadataTooLong)?;
        let symbol: BoundedVec<u8, ConstU32<16>> =
            symbol.to_vec().try_into().map_err(|_| Error::<T>::MetadataTooLong)?;

        TokenName::<T>::put(name);
        TokenSymbol::<T>::put(symbol);
        Owner::<T>::set(owner);
        Issuer::<T>::kill();
        Ok(())
    }

    /// Validate everything, then write identities, balance and counter together.
    pub fn do_issue(issuer: &T::AccountId, recipient: &T::AccountId, count: u32) -> DispatchResult {
        ensure!(Issuer::<T>::get().as_ref() == Some(issuer), Error::<T>::Unauthorized);
        ensure!(count > 0, Error::<T>::InvalidQuantity);

        let first_id = TotalMinted::<T>::get();
        let next_id = first_id
            .checked_add(count)
            .filter(|total| *total <= T::MaxSupply::get())
            .ok_or(Error::<T>::SupplyExceeded)?;

        for id in first_id..next_id {
            ItemOwner::<T>::insert(id, recipient);
        }
        // Bounded by MaxSupply, which fits in u32
        Balances::<T>::mutate(recipient, |held| *held = held.saturating_add(count));
        TotalMinted::<T>::put(next_id);

        log::debug!(
            target: LOG_TARGET,
            "Issued units {}..{} to {:?}",
            first_id,
            next_id,
            recipient
        );
        Self::deposit_event(Event::Issued { to: recipient.clone(), first_id, count });
        Ok(())
    }

    pub fn max_supply() -> u32 {
        T::MaxSupply::get()
    }

    fn ensure_owner(who: &T::AccountId) -> DispatchResult {
        ensure!(Owner::<T>::get().as_ref() == Some(who), Error::<T>::Unauthorized);
        Ok(())
    }

    /// Check the ledger invariants: the ceiling holds, balances sum to the
    /// counter and every identity below the counter has a holder.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let total = TotalMinted::<T>::get();
        ensure!(total <= T::MaxSupply::get(), "Total minted exceeds MaxSupply");

        let held = Balances::<T>::iter_values().fold(0u64, |acc, units| acc + u64::from(units));
        ensure!(held == u64::from(total), "Balances do not sum to total minted");

        ensure!(
            (0..total).all(|id| ItemOwner::<T>::contains_key(id)),
            "Issued unit without a holder"
        );
        ensure!(!ItemOwner::<T>::contains_key(total), "Unit recorded past total minted");
        Ok(())
    }
}

impl<T: Config> UnitIssuer<T::AccountId> for Pallet<T> {
    fn issue(issuer: &T::AccountId, recipient: &T::AccountId, count: u32) -> DispatchResult {
        Self::do_issue(issuer, recipient, count)
    }

    fn balance_of(who: &T::AccountId) -> u32 {
        Balances::<T>::get(who)
    }

    fn total_issued() -> u32 {
        TotalMinted::<T>::get()
    }

    fn max_supply() -> u32 {
        T::MaxSupply::get()
    }

    #[cfg(feature = "runtime-benchmarks")]
    fn force_issuer(issuer: &T::AccountId) {
        Issuer::<T>::put(issuer);
    }
}
