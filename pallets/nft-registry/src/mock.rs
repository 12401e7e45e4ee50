use crate as pallet_nft_registry;
use frame_support::{
    derive_impl,
    traits::{ConstU32, ConstU64},
};
use sp_core::H256;
use sp_runtime::{
    traits::{BlakeTwo256, IdentityLookup},
    BuildStorage,
};

type Block = frame_system::mocking::MockBlock<Test>;

pub const OWNER: u64 = 1;
pub const ISSUER: u64 = 2;
pub const ALICE: u64 = 3;
pub const BOB: u64 = 4;

pub const MAX_SUPPLY: u32 = 100;

frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        NftRegistry: pallet_nft_registry,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type RuntimeOrigin = RuntimeOrigin;
    type RuntimeCall = RuntimeCall;
    type Nonce = u64;
    type Hash = H256;
    type Hashing = BlakeTwo256;
    type AccountId = u64;
    type Lookup = IdentityLookup<Self::AccountId>;
    type Block = Block;
    type RuntimeEvent = RuntimeEvent;
    type BlockHashCount = ConstU64<250>;
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_nft_registry::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type MaxSupply = ConstU32<MAX_SUPPLY>;
    type WeightInfo = ();
}

/// Registry created by `OWNER` with no issuer delegated yet.
pub fn new_test_ext() -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();

    pallet_nft_registry::GenesisConfig::<Test> {
        owner: Some(OWNER),
        name: b"WhitelistNFT".to_vec(),
        symbol: b"WLNFT".to_vec(),
        issuer: None,
    }
    .assimilate_storage(&mut t)
    .unwrap();

    let mut ext = sp_io::TestExternalities::new(t);
    // Events are only recorded from block 1
    ext.execute_with(|| System::set_block_number(1));
    ext
}

/// Same as [`new_test_ext`] with `ISSUER` already delegated.
pub fn new_test_ext_with_issuer() -> sp_io::TestExternalities {
    let mut ext = new_test_ext();
    ext.execute_with(|| {
        frame_support::assert_ok!(NftRegistry::set_issuer(RuntimeOrigin::signed(OWNER), ISSUER));
    });
    ext
}
