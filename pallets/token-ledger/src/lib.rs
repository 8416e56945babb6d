#![cfg_attr(not(feature = "std"), no_std)]
// Storage getters are kept for the read-only ledger API
#![allow(deprecated)]
#![allow(clippy::let_unit_value)]

use codec::Decode;
use frame_support::{dispatch::DispatchResult, ensure, pallet_prelude::*};
use frame_system::{ensure_signed, pallet_prelude::*};
use sp_runtime::traits::TrailingZeroInput;
use sp_std::prelude::*;

pub use pallet::*;
pub use weights::WeightInfo;

#[cfg(test)]
mod mock;


#[cfg(feature = "runtime-benchmarks")]
mod benchmarking;

pub mod weights;

/// The current storage version.
const STORAGE_VERSION: StorageVersion = StorageVersion::new(1);

/// Log target for this pallet.
pub const LOG_TARGET: &str = "runtime::token-ledger";

/// Fixed number of decimals; one whole token is `10^DECIMALS` base units.
pub const DECIMALS: u8 = 18;

/// Maximum length of the token name, in bytes.
pub const MAX_NAME_LENGTH: u32 = 64;

/// Maximum length of the token symbol, in bytes.
pub const MAX_SYMBOL_LENGTH: u32 = 16;

pub type TokenNameOf = BoundedVec<u8, ConstU32<MAX_NAME_LENGTH>>;
pub type TokenSymbolOf = BoundedVec<u8, ConstU32<MAX_SYMBOL_LENGTH>>;

#[frame_support::pallet]
pub mod pallet {
    use super::*;

    #[pallet::config]
    pub trait Config: frame_system::Config {
        type RuntimeEvent: From<Event<Self>> + IsType<<Self as frame_system::Config>::RuntimeEvent>;
        type WeightInfo: WeightInfo;
    }

    #[pallet::pallet]
    #[pallet::storage_version(STORAGE_VERSION)]
    pub struct Pallet<T>(_);

    /// Token name (e.g., "Sage Coin")
    #[pallet::storage]
    #[pallet::getter(fn token_name)]
    pub type TokenName<T> = StorageValue<_, TokenNameOf, ValueQuery>;

    /// Token symbol (e.g., "SAGE")
    #[pallet::storage]
    #[pallet::getter(fn token_symbol)]
    pub type TokenSymbol<T> = StorageValue<_, TokenSymbolOf, ValueQuery>;

    /// Total token supply in base units. Fixed once the ledger is deployed.
    #[pallet::storage]
    #[pallet::getter(fn total_supply)]
    pub type TotalSupply<T> = StorageValue<_, u128, ValueQuery>;

    /// Account that deployed the ledger and received the initial supply
    #[pallet::storage]
    #[pallet::getter(fn deployer)]
    pub type Deployer<T: Config> = StorageValue<_, T::AccountId, OptionQuery>;

    /// Account balances
    #[pallet::storage]
    #[pallet::getter(fn balance_of)]
    pub type Balances<T: Config> = StorageMap<_, Blake2_128Concat, T::AccountId, u128, ValueQuery>;

    /// Amount a spender may still move out of an owner's balance, keyed by (owner, spender)
    #[pallet::storage]
    #[pallet::getter(fn allowance)]
    pub type Allowances<T: Config> = StorageDoubleMap<
        _,
        Blake2_128Concat,
        T::AccountId,
        Blake2_128Concat,
        T::AccountId,
        u128,
        ValueQuery,
    >;

    #[pallet::event]
    #[pallet::generate_deposit(pub(super) fn deposit_event)]
    pub enum Event<T: Config> {
        /// Tokens moved from one account to another. Issuance at deployment is reported
        /// with the null account as `from`.
        Transfer { from: T::AccountId, to: T::AccountId, value: u128 },
        /// Allowance of `spender` over `owner`'s balance set to `value`
        Approval { owner: T::AccountId, spender: T::AccountId, value: u128 },
    }

    #[pallet::error]
    pub enum Error<T> {
        /// Recipient is the null account
        InvalidRecipient,
        /// Spender is the null account
        InvalidSpender,
        /// Sender or balance owner is the null account
        InvalidSender,
        /// Debit exceeds the account balance
        InsufficientBalance,
        /// Delegated debit exceeds the remaining allowance
        InsufficientAllowance,
        /// Ledger has already been deployed
        AlreadyDeployed,
        EmptyName,
        NameTooLong,
        EmptySymbol,
        SymbolTooLong,
        /// Total supply scaled by `10^DECIMALS` does not fit in a `u128`
        SupplyOverflow,
        Overflow,
    }

    #[pallet::hooks]
    impl<T: Config> Hooks<BlockNumberFor<T>> for Pallet<T> {
        #[cfg(feature = "try-runtime")]
        fn try_state(_n: BlockNumberFor<T>) -> Result<(), sp_runtime::TryRuntimeError> {
            Self::do_try_state()
        }
    }

    #[pallet::extra_constants]
    impl<T: Config> Pallet<T> {
        /// Number of decimals used by the token
        pub fn decimals() -> u8 {
            DECIMALS
        }
    }

    #[pallet::call]
    impl<T: Config> Pallet<T> {
        /// Deploy the ledger, crediting `total_supply_whole * 10^18` to the caller.
        ///
        /// Can only succeed once.
        #[pallet::call_index(0)]
        #[pallet::weight(T::WeightInfo::deploy())]
        pub fn deploy(
            origin: OriginFor<T>,
            name: Vec<u8>,
            symbol: Vec<u8>,
            total_supply_whole: u128,
        ) -> DispatchResult {
            let deployer = ensure_signed(origin)?;
            Self::do_deploy(deployer, name, symbol, total_supply_whole)
        }

        #[pallet::call_index(1)]
        #[pallet::weight(T::WeightInfo::transfer())]
        pub fn transfer(origin: OriginFor<T>, to: T::AccountId, value: u128) -> DispatchResult {
            let from = ensure_signed(origin)?;
            ensure!(to != Self::null_account(), Error::<T>::InvalidRecipient);
            ensure!(Balances::<T>::get(&from) >= value, Error::<T>::InsufficientBalance);
            ensure!(from != Self::null_account(), Error::<T>::InvalidSender);

            Self::move_balance(&from, &to, value)?;
            Self::deposit_event(Event::Transfer { from, to, value });
            Ok(())
        }

        /// Set (not add to) the allowance of `spender` over the caller's balance.
        ///
        /// The caller's balance is not checked.
        #[pallet::call_index(2)]
        #[pallet::weight(T::WeightInfo::approve())]
        pub fn approve(origin: OriginFor<T>, spender: T::AccountId, value: u128) -> DispatchResult {
            let owner = ensure_signed(origin)?;
            ensure!(spender != Self::null_account(), Error::<T>::InvalidSpender);
            ensure!(owner != Self::null_account(), Error::<T>::InvalidSender);

            if value == 0 {
                Allowances::<T>::remove(&owner, &spender);
            } else {
                Allowances::<T>::insert(&owner, &spender, value);
            }
            log::debug!(
                target: LOG_TARGET,
                "allowance of {spender:?} over {owner:?} set to {value}"
            );
            Self::deposit_event(Event::Approval { owner, spender, value });
            Ok(())
        }

        /// Move `value` out of `from`'s balance on behalf of the caller, consuming allowance.
        ///
        /// Checks run in order: allowance, balance, recipient, then the null-account checks on
        /// `from` and the caller.
        #[pallet::call_index(3)]
        #[pallet::weight(T::WeightInfo::transfer_from())]
        pub fn transfer_from(
            origin: OriginFor<T>,
            from: T::AccountId,
            to: T::AccountId,
            value: u128,
        ) -> DispatchResult {
            let spender = ensure_signed(origin)?;
            let remaining = Allowances::<T>::get(&from, &spender)
                .checked_sub(value)
                .ok_or(Error::<T>::InsufficientAllowance)?;
            ensure!(Balances::<T>::get(&from) >= value, Error::<T>::InsufficientBalance);
            ensure!(to != Self::null_account(), Error::<T>::InvalidRecipient);
            ensure!(from != Self::null_account(), Error::<T>::InvalidSender);
            ensure!(spender != Self::null_account(), Error::<T>::InvalidSpender);

            if remaining == 0 {
                Allowances::<T>::remove(&from, &spender);
            } else {
                Allowances::<T>::insert(&from, &spender, remaining);
            }
            Self::move_balance(&from, &to, value)?;
            Self::deposit_event(Event::Transfer { from, to, value });
            Ok(())
        }
    }

    #[pallet::genesis_config]
    #[derive(frame_support::DefaultNoBound)]
    pub struct GenesisConfig<T: Config> {
        /// Account receiving the whole supply. `None` leaves the ledger undeployed.
        pub deployer: Option<T::AccountId>,
        /// Token name
        pub name: Vec<u8>,
        /// Token symbol
        pub symbol: Vec<u8>,
        /// Total supply in whole tokens
        pub total_supply_whole: u128,
    }

    #[pallet::genesis_build]
    impl<T: Config> BuildGenesisConfig for GenesisConfig<T> {
        fn build(&self) {
            if let Some(ref deployer) = self.deployer {
                Pallet::<T>::do_deploy(
                    deployer.clone(),
                    self.name.clone(),
                    self.symbol.clone(),
                    self.total_supply_whole,
                )
                .expect("Invalid token ledger genesis config");
            }
        }
    }
}

impl<T: Config> Pallet<T> {
    /// The reserved all-zero account. It never holds a balance and can never be a recipient
    /// or spender.
    pub fn null_account() -> T::AccountId {
        T::AccountId::decode(&mut TrailingZeroInput::zeroes())
            .expect("infinite length input; no invalid inputs for type; qed")
    }

    /// Validate metadata, fix the total supply and credit all of it to `deployer`.
    pub fn do_deploy(
        deployer: T::AccountId,
        name: Vec<u8>,
        symbol: Vec<u8>,
        total_supply_whole: u128,
    ) -> DispatchResult {
        ensure!(!Deployer::<T>::exists(), Error::<T>::AlreadyDeployed);
        ensure!(deployer != Self::null_account(), Error::<T>::InvalidRecipient);

        ensure!(!name.is_empty(), Error::<T>::EmptyName);
        let name: TokenNameOf = name.try_into().map_err(|_| Error::<T>::NameTooLong)?;

        ensure!(!symbol.is_empty(), Error::<T>::EmptySymbol);
        let symbol: TokenSymbolOf = symbol.try_into().map_err(|_| Error::<T>::SymbolTooLong)?;

        let total_supply = 10u128
            .checked_pow(DECIMALS.into())
            .and_then(|unit| total_supply_whole.checked_mul(unit))
            .ok_or(Error::<T>::SupplyOverflow)?;

        TokenName::<T>::put(name);
        TokenSymbol::<T>::put(symbol);
        TotalSupply::<T>::put(total_supply);
        Deployer::<T>::put(&deployer);
        Balances::<T>::insert(&deployer, total_supply);

        log::info!(
            target: LOG_TARGET,
            "token ledger deployed by {deployer:?} with total supply {total_supply}"
        );
        Self::deposit_event(Event::Transfer {
            from: Self::null_account(),
            to: deployer,
            value: total_supply,
        });
        Ok(())
    }

    /// Debit `from` and credit `to`. Callers check the balance first; the checked arithmetic
    /// here only guards the conservation invariant.
    fn move_balance(from: &T::AccountId, to: &T::AccountId, value: u128) -> DispatchResult {
        Balances::<T>::try_mutate(from, |balance| -> DispatchResult {
            *balance = balance.checked_sub(value).ok_or(Error::<T>::InsufficientBalance)?;
            Ok(())
        })?;
        Balances::<T>::try_mutate(to, |balance| -> DispatchResult {
            *balance = balance.checked_add(value).ok_or(Error::<T>::Overflow)?;
            Ok(())
        })?;

        log::debug!(target: LOG_TARGET, "moved {value} from {from:?} to {to:?}");
        Ok(())
    }

    /// Sum of all balances must equal the total supply.
    #[cfg(any(feature = "try-runtime", test))]
    pub fn do_try_state() -> Result<(), DispatchError> {
        let sum = Balances::<T>::iter_values()
            .try_fold(0u128, |acc, balance| acc.checked_add(balance))
            .ok_or(DispatchError::Other("balance sum overflows u128"))?;
        let total_supply = TotalSupply::<T>::get();

        if sum != total_supply {
            log::warn!(
                target: LOG_TARGET,
                "balances sum to {sum} but total supply is {total_supply}"
            );
            return Err(DispatchError::Other("sum of balances does not match total supply"));
        }

        ensure!(
            Balances::<T>::get(Self::null_account()) == 0,
            DispatchError::Other("null account holds a balance")
        );
        Ok(())
    }
}
