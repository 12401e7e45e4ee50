use crate as pallet_whitelist_sale;
use frame_support::{
    assert_ok, derive_impl, parameter_types,
    traits::{ConstU128, ConstU32, ConstU64},
    BoundedVec, PalletId,
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const DEPLOYER: u64 = 1;
pub const ALICE: u64 = 2;
pub const BOB: u64 = 3;
pub const CHARLIE: u64 = 4;

/// One whole unit of an 18-decimal currency
pub const UNIT: u128 = 1_000_000_000_000_000_000;
/// 0.003 per unit
pub const PRICE: u128 = 3_000_000_000_000_000;
pub const MAX_PER_WALLET: u32 = 5;
pub const MAX_SUPPLY: u32 = 100;
pub const MAX_BATCH: u32 = 50;

/// Accounts endowed at genesis (`1..=FUNDED_ACCOUNTS`)
pub const FUNDED_ACCOUNTS: u64 = 60;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        Balances: pallet_balances,
        NftRegistry: pallet_nft_registry,
        WhitelistSale: pallet_whitelist_sale,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type BlockHashCount = ConstU64<250>;
    type AccountData = pallet_balances::AccountData<u128>;
    type MaxConsumers = ConstU32<16>;
}

#[derive_impl(pallet_balances::config_preludes::TestDefaultConfig)]
impl pallet_balances::Config for Test {
    type Balance = u128;
    type ExistentialDeposit = ConstU128<1>;
    type AccountStore = System;
}

impl pallet_nft_registry::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxSupply = ConstU32<MAX_SUPPLY>;
    type WeightInfo = ();
}

parameter_types! {
    pub const SalePalletId: PalletId = PalletId(*b"wl/sale_");
}

impl pallet_whitelist_sale::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type Currency = Balances;
    type Registry = NftRegistry;
    type PalletId = SalePalletId;
    type MaxBatchSize = ConstU32<MAX_BATCH>;
    type WeightInfo = ();
}

/// Deploy the registry and the sale, then delegate the issuer role to the sale,
/// in the order a deployment script would.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_balances::GenesisConfig::<Test> {
        balances: (1..=FUNDED_ACCOUNTS).map(|who| (who, UNIT)).collect(),
        dev_accounts: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_nft_registry::GenesisConfig::<Test> {
        owner: Some(DEPLOYER),
        name: b"WhitelistNFT".to_vec(),
        symbol: b"WLNFT".to_vec(),
        issuer: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    pallet_whitelist_sale::GenesisConfig::<Test> {
        owner: Some(DEPLOYER),
        unit_price: PRICE,
        max_per_wallet: MAX_PER_WALLET,
        whitelisted_accounts: vec![],
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    ext.execute_with(|| {
        System::set_block_number(1);
        assert_ok!(NftRegistry::set_issuer(
            RuntimeOrigin::signed(DEPLOYER),
            WhitelistSale::account_id()
        ));
    });
    ext
}

/// Build a whitelist batch from a slice of accounts.
pub fn batch(accounts: &[u64]) -> BoundedVec<u64, ConstU32<MAX_BATCH>> {
    accounts.to_vec().try_into().expect("test batches fit MaxBatchSize")
}
