//! Benchmarking setup for pallet-token-ledger

use super::*;

#[allow(unused)]
use crate::Pallet as TokenLedger;
use frame_benchmarking::v2::*;
use frame_system::RawOrigin;
use sp_std::vec;

const SEED: u32 = 0;

/// Give `who` a balance without going through `deploy`, keeping the supply consistent.
fn fund<T: Config>(who: &T::AccountId, amount: u128) {
    Balances::<T>::mutate(who, |balance| *balance += amount);
    TotalSupply::<T>::mutate(|supply| *supply += amount);
}

#[benchmarks]
mod benchmarks {
    use super::*;

    #[benchmark]
    fn deploy() {
        let caller: T::AccountId = whitelisted_caller();
        // Longest metadata the ledger accepts
        let name = vec![b'n'; MAX_NAME_LENGTH as usize];
        let symbol = vec![b's'; MAX_SYMBOL_LENGTH as usize];
        // Start from an undeployed ledger
        Deployer::<T>::kill();
        TotalSupply::<T>::kill();
        let _ = Balances::<T>::clear(u32::MAX, None);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), name, symbol, 1_000_000);

        assert_eq!(Deployer::<T>::get(), Some(caller.clone()));
        assert_eq!(Balances::<T>::get(&caller), TotalSupply::<T>::get());
        assert_eq!(Balances::<T>::iter_values().sum::<u128>(), TotalSupply::<T>::get());
    }

    #[benchmark]
    fn transfer() {
        let caller: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 0, SEED);
        let amount: u128 = 1_000_000;
        fund::<T>(&caller, 10_000_000);

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
    }

    #[benchmark]
    fn approve() {
        let caller: T::AccountId = whitelisted_caller();
        let spender: T::AccountId = account("spender", 0, SEED);
        let amount: u128 = 1_000_000;

        #[extrinsic_call]
        _(RawOrigin::Signed(caller.clone()), spender.clone(), amount);

        assert_eq!(Allowances::<T>::get(&caller, &spender), amount);
    }

    #[benchmark]
    fn transfer_from() {
        let owner: T::AccountId = account("owner", 0, SEED);
        let spender: T::AccountId = whitelisted_caller();
        let recipient: T::AccountId = account("recipient", 1, SEED);
        let amount: u128 = 1_000_000;

        fund::<T>(&owner, 10_000_000);
        Allowances::<T>::insert(&owner, &spender, 2 * amount);

        #[extrinsic_call]
        _(RawOrigin::Signed(spender.clone()), owner.clone(), recipient.clone(), amount);

        assert_eq!(Balances::<T>::get(&recipient), amount);
        assert_eq!(Allowances::<T>::get(&owner, &spender), amount);
    }

    impl_benchmark_test_suite!(TokenLedger, crate::mock::new_test_ext(), crate::mock::Test);
}
