//! Benchmarking setup for pallet-whitelist-sale

use super::*;

#[allow(unused)]
use crate::Pallet as WhitelistSale;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

fn setup_owner<T: Config>() -> T::AccountId {
    let owner: T::AccountId = whitelisted_caller();
    Owner::<T>::put(&owner);
    owner
}

fn batch_of<T: Config>(n: u32) -> BoundedVec<T::AccountId, T::MaxBatchSize> {
    let accounts: Vec<T::AccountId> = (0..n).map(|i| account("buyer", i, 0)).collect();
    accounts.try_into().expect("n is bounded by MaxBatchSize")
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn add_to_whitelist(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let owner = setup_owner::<T>();
        let accounts = batch_of::<T>(n);
        let last = accounts.last().cloned().expect("n >= 1");

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), accounts);

        assert!(Whitelist::<T>::get(&last));
    }

    #[benchmark]
    fn remove_from_whitelist(n: Linear<1, { T::MaxBatchSize::get() }>) {
        let owner = setup_owner::<T>();
        let accounts = batch_of::<T>(n);
        for account in accounts.iter() {
            Whitelist::<T>::insert(account, true);
        }
        let last = accounts.last().cloned().expect("n >= 1");

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), accounts);

        assert!(!Whitelist::<T>::get(&last));
    }

    #[benchmark]
    fn mint(q: Linear<1, { T::Registry::max_supply() }>) {
        let buyer: T::AccountId = whitelisted_caller();
        Whitelist::<T>::insert(&buyer, true);
        MaxPerWallet::<T>::put(q);

        // Price at the existential deposit so the first payment can open the sale account
        let price = T::Currency::minimum_balance();
        UnitPrice::<T>::put(price);
        let payment = price * q.into();
        T::Currency::set_balance(&buyer, payment + price * 2u32.into());

        T::Registry::force_issuer(&WhitelistSale::<T>::account_id());

        #[extrinsic_call]
        _(RawOrigin::Signed(buyer.clone()), q, payment);

        assert_eq!(T::Registry::balance_of(&buyer), q);
        assert_eq!(RetainedFunds::<T>::get(), payment);
    }

    #[benchmark]
    fn withdraw() {
        let owner = setup_owner::<T>();
        let amount = T::Currency::minimum_balance() * 10u32.into();
        T::Currency::set_balance(&WhitelistSale::<T>::account_id(), amount);
        RetainedFunds::<T>::put(amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner));

        assert!(RetainedFunds::<T>::get().is_zero());
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner = setup_owner::<T>();
        let successor: T::AccountId = account("successor", 0, 0);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), successor.clone());

        assert_eq!(Owner::<T>::get(), Some(successor));
    }

    impl_benchmark_test_suite!(WhitelistSale, crate::mock::new_test_ext(), crate::mock::Test);
}
