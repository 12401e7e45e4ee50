//! Genesis presets for deploying the sale.

use crate::{
    AccountId, BalancesConfig, NftRegistryConfig, RuntimeGenesisConfig, WhitelistSale,
    WhitelistSaleConfig, MAX_PER_WALLET, UNIT, UNIT_PRICE,
};

/// Native endowment for every account passed to [`sale_genesis`]
pub const ENDOWMENT: u128 = 1_000 * UNIT;

/// Registry and sale both owned by `deployer`, with the issuer role already
/// delegated to the sale pallet account.
///
/// # Parameters
/// - `deployer`: Owner of the registry and of the sale
/// - `endowed_accounts`: Accounts pre-funded with [`ENDOWMENT`]
/// - `whitelisted_accounts`: Accounts admitted to the sale from the first block
pub fn sale_genesis(
    deployer: AccountId,
    endowed_accounts: Vec<AccountId>,
    whitelisted_accounts: Vec<AccountId>,
) -> RuntimeGenesisConfig {
    RuntimeGenesisConfig {
        balances: BalancesConfig {
            balances: endowed_accounts.into_iter().map(|k| (k, ENDOWMENT)).collect(),
            dev_accounts: None,
        },
        nft_registry: NftRegistryConfig {
            owner: Some(deployer.clone()),
            name: b"WhitelistNFT".to_vec(),
            symbol: b"WLNFT".to_vec(),
            issuer: Some(WhitelistSale::account_id()),
        },
        whitelist_sale: WhitelistSaleConfig {
            owner: Some(deployer),
            unit_price: UNIT_PRICE,
            max_per_wallet: MAX_PER_WALLET,
            whitelisted_accounts,
        },
        ..Default::default()
    }
}
