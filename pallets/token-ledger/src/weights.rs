//! Weights for pallet-token-ledger.
//!
//! These are not benchmark output. The figures are hand-written estimates: storage access
//! counts are taken from the dispatchables in `lib.rs`, while the base execution times and
//! proof sizes are fixed placeholders. Regenerate this file from `benchmarking.rs` with
//! `frame-omni-bencher` on reference hardware before relying on it in a production runtime.

#![allow(unused_parens)]
#![allow(unused_imports)]

use core::marker::PhantomData;
use frame_support::{
    traits::Get,
    weights::{constants::RocksDbWeight, Weight},
};

/// Weight functions needed for pallet-token-ledger.
pub trait WeightInfo {
    fn deploy() -> Weight;
    fn transfer() -> Weight;
    fn approve() -> Weight;
    fn transfer_from() -> Weight;
}

/// Estimated weights for pallet-token-ledger, priced with the runtime's database weights.
pub struct SubstrateWeight<T>(PhantomData<T>);
impl<T: frame_system::Config> WeightInfo for SubstrateWeight<T> {
    /// Storage: `TokenLedger::Deployer` (r:1 w:1)
    /// Storage: `TokenLedger::TokenName` (r:0 w:1)
    /// Storage: `TokenLedger::TokenSymbol` (r:0 w:1)
    /// Storage: `TokenLedger::TotalSupply` (r:0 w:1)
    /// Storage: `TokenLedger::Balances` (r:0 w:1)
    fn deploy() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(T::DbWeight::get().reads(1_u64))
            .saturating_add(T::DbWeight::get().writes(5_u64))
    }
    /// Storage: `TokenLedger::Balances` (r:3 w:2)
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 6_196)
            .saturating_add(T::DbWeight::get().reads(3_u64))
            .saturating_add(T::DbWeight::get().writes(2_u64))
    }
    /// Storage: `TokenLedger::Allowances` (r:0 w:1)
    fn approve() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(T::DbWeight::get().writes(1_u64))
    }
    /// Storage: `TokenLedger::Allowances` (r:1 w:1)
    /// Storage: `TokenLedger::Balances` (r:3 w:2)
    fn transfer_from() -> Weight {
        Weight::from_parts(24_000_000, 8_760)
            .saturating_add(T::DbWeight::get().reads(4_u64))
            .saturating_add(T::DbWeight::get().writes(3_u64))
    }
}

// For backwards compatibility and tests.
impl WeightInfo for () {
    fn deploy() -> Weight {
        Weight::from_parts(12_000_000, 1_500)
            .saturating_add(RocksDbWeight::get().reads(1_u64))
            .saturating_add(RocksDbWeight::get().writes(5_u64))
    }
    fn transfer() -> Weight {
        Weight::from_parts(18_000_000, 6_196)
            .saturating_add(RocksDbWeight::get().reads(3_u64))
            .saturating_add(RocksDbWeight::get().writes(2_u64))
    }
    fn approve() -> Weight {
        Weight::from_parts(10_000_000, 0).saturating_add(RocksDbWeight::get().writes(1_u64))
    }
    fn transfer_from() -> Weight {
        Weight::from_parts(24_000_000, 8_760)
            .saturating_add(RocksDbWeight::get().reads(4_u64))
            .saturating_add(RocksDbWeight::get().writes(3_u64))
    }
}
