use crate as pallet_token_ledger;
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

/// Account that deploys the ledger at genesis.
pub const DEPLOYER: u64 = 1;
/// Plain token holder.
pub const RECEIVER: u64 = 2;
/// Spender that is approved to move the deployer's tokens.
pub const EXCHANGE: u64 = 3;
/// The all-zero account.
pub const NULL: u64 = 0;

pub const TOTAL_SUPPLY_WHOLE: u128 = 1_000_000;

/// Whole tokens to base units.
pub fn tokens(n: u128) -> u128 {
    n * 10u128.pow(18)
}

// Configure a mock runtime to test the pallet.
frame_support::construct_runtime!(
    pub enum Test {
        System: frame_system,
        TokenLedger: pallet_token_ledger,
    }
);

#[derive_impl(frame_system::config_preludes::TestDefaultConfig)]
impl frame_system::Config for Test {
    type BaseCallFilter = frame_support::traits::Everything;
    type BlockWeights = ();
    type BlockLength = ();
    type DbWeight = ();
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
    type Version = ();
    type PalletInfo = PalletInfo;
    type AccountData = ();
    type OnNewAccount = ();
    type OnKilledAccount = ();
    type SystemWeightInfo = ();
    type SS58Prefix = ();
    type OnSetCode = ();
    type MaxConsumers = ConstU32<16>;
}

impl pallet_token_ledger::Config for Test {
    type RuntimeEvent = RuntimeEvent;
    type WeightInfo = ();
}

fn build_ext(genesis: pallet_token_ledger::GenesisConfig<Test>) -> sp_io::TestExternalities {
    let mut t = frame_system::GenesisConfig::<Test>::default().build_storage().unwrap();
    genesis.assimilate_storage(&mut t).unwrap();

    let mut ext: sp_io::TestExternalities = t.into();
    ext.execute_with(|| {
        System::set_block_number(1);
        System::reset_events();
    });
    ext
}

// Build genesis storage with the ledger deployed by `DEPLOYER`.
pub fn new_test_ext() -> sp_io::TestExternalities {
    build_ext(pallet_token_ledger::GenesisConfig::<Test> {
        deployer: Some(DEPLOYER),
        name: b"Sage Coin".to_vec(),
        symbol: b"SAGE".to_vec(),
        total_supply_whole: TOTAL_SUPPLY_WHOLE,
    })
}

// Build genesis storage with no ledger deployed yet.
pub fn undeployed_test_ext() -> sp_io::TestExternalities {
    build_ext(pallet_token_ledger::GenesisConfig::<Test>::default())
}

/// Ledger events deposited so far, oldest first.
pub fn ledger_events() -> Vec<pallet_token_ledger::Event<Test>> {
    System::events()
        .into_iter()
        .filter_map(|record| match record.event {
            RuntimeEvent::TokenLedger(event) => Some(event),
            _ => None,
        })
        .collect()
}
