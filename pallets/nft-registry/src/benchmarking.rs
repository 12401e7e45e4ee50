//! Benchmarking setup for pallet-nft-registry

use super::*;

#[allow(unused)]
use crate::Pallet as NftRegistry;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn set_issuer() {
        let owner: T::AccountId = whitelisted_caller();
        let issuer: T::AccountId = account("issuer", 0, 0);
        Owner::<T>::put(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), issuer.clone());

        assert_eq!(Issuer::<T>::get(), Some(issuer));
    }

    #[benchmark]
    fn issue(n: Linear<1, { T::MaxSupply::get() }>) {
        let issuer: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, 0);
        Issuer::<T>::put(&issuer);

        #[extrinsic_call]
        _(RawOrigin::Signed(issuer), recipient.clone(), n);

        assert_eq!(Balances::<T>::get(&recipient), n);
        assert_eq!(TotalMinted::<T>::get(), n);
    }

    #[benchmark]
    fn transfer_ownership() {
        let owner: T::AccountId = whitelisted_caller();
        let successor: T::AccountId = account("successor", 0, 0);
        Owner::<T>::put(&owner);

        #[extrinsic_call]
        _(RawOrigin::Signed(owner), successor.clone());

        assert_eq!(Owner::<T>::get(), Some(successor));
    }

    impl_benchmark_test_suite!(NftRegistry, crate::mock::new_test_ext(), crate::mock::Test);
}
