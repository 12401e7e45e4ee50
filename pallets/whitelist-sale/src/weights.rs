//! Weights for pallet-whitelist-sale.
//!
//! Hand-estimated until the benchmarks in `benchmarking.rs` are run on reference
//! hardware.

#![allow(unused_parens)]

use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

pub trait WeightInfo {
    fn add_to_whitelist(n: u32) -> Weight;
    fn remove_from_whitelist(n: u32) -> Weight;
    fn mint(q: u32) -> Weight;
    fn withdraw() -> Weight;
    fn transfer_ownership() -> Weight;
}

impl WeightInfo for () {
    /// Storage: `WhitelistSale::Owner` (r:1), `WhitelistSale::Whitelist` (w:n)
    fn add_to_whitelist(n: u32) -> Weight {
        Weight::from_parts(8_000_000, 1_600)
            .saturating_add(Weight::from_parts(1_800_000, 0).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }

    /// Storage: `WhitelistSale::Owner` (r:1), `WhitelistSale::Whitelist` (w:n)
    fn remove_from_whitelist(n: u32) -> Weight {
        Weight::from_parts(8_000_000, 1_600)
            .saturating_add(Weight::from_parts(1_700_000, 0).saturating_mul(n.into()))
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(n.into())))
    }

    /// Storage: `WhitelistSale::Whitelist` (r:1), `WhitelistSale::UnitPrice` (r:1),
    /// `WhitelistSale::MaxPerWallet` (r:1), `WhitelistSale::RetainedFunds` (r:1 w:1),
    /// `System::Account` (r:2 w:2), plus `NftRegistry::issue` for `q` units
    fn mint(q: u32) -> Weight {
        Weight::from_parts(48_000_000, 6_200)
            .saturating_add(Weight::from_parts(2_500_000, 0).saturating_mul(q.into()))
            .saturating_add(RocksDbWeight::get().reads(9_u64))
            .saturating_add(RocksDbWeight::get().writes(5_u64))
            .saturating_add(RocksDbWeight::get().writes((1_u64).saturating_mul(q.into())))
    }

    /// Storage: `WhitelistSale::Owner` (r:1), `WhitelistSale::RetainedFunds` (r:1 w:1),
    /// `System::Account` (r:2 w:2)
    fn withdraw() -> Weight {
        Weight::from_parts(40_000_000, 6_200)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }

    /// Storage: `WhitelistSale::Owner` (r:1 w:1)
    fn transfer_ownership() -> Weight {
        Weight::from_parts(8_500_000, 1_600)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(1_u64))
    }
}
