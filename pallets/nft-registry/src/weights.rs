//! Weights for pallet-nft-registry.
//!
//! Hand-estimated until the benchmarks in `benchmarking.rs` are run on reference
//! hardware; regenerate with `frame-omni-bencher` and replace the `()` impl.

#![allow(unused_parens)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn set_issuer() -> Weight;
    fn issue(n: u32) -> Weight;
    fn transfer_ownership() -> Weight;
}

impl WeightInfo for () {
    /// Storage: `NftRegistry::Owner` (r:1 w:0), `NftRegistry::Issuer` (r:1 w:1)
    fn set_issuer() -> Weight {
        Weight::from_parts(9_000_000, 1_600)
            .saturating_add(RocksDbWeight::get().reads(2_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }

    /// Storage: `NftRegistry::Issuer` (r:1), `NftRegistry::TotalMinted` (r:1 w:1),
    /// `NftRegistry::Balances` (r:1 w:1), `NftRegistry::ItemOwner` (w:n)
    fn issue(n: u32) -> Weight {
        Weight::from_parts(14_000_000, 3_500)
            .saturating_add(Weight::from_parts(2_500_000, 0).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }

    /// Storage: `NftRegistry::Owner` (r:1 w:1)
    fn transfer_ownership() -> Weight {
        Weight::from_parts(8_500_000, 1_600)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
