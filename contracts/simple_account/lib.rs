#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub use self::simple_account::{SimpleAccount, SimpleAccountRef};

#[ink::contract(env = ink_aa_wallet::core::env::AAEnvironment)]
mod simple_account {
    use ink::{
        codegen::TraitCallBuilder,
        prelude::{format, vec::Vec},
    };
    use scale::Encode;

    use ink_aa_wallet::{
        core::{
            account::Account,
            env::AAEnvironment,
            error::{Error, Result},
            exec::Call,
            helpers::ValidationData,
            host::EnvHost,
            user_operation::UserOperation,
        },
        traits::{
            account::IAccount,
            entry_point::{NonceManagerRef, StakeManagerRef},
            nonce_manager::INonceManager,
            stake_manager::IStakeManager,
        },
    };

    /// 账户部署完成。
    #[ink(event)]
    pub struct AccountInitialized {
        #[ink(topic)]
        entry_point: AccountId,
        #[ink(topic)]
        owner: AccountId,
    }

    /// owner 被替换。
    #[ink(event)]
    pub struct OwnerChanged {
        #[ink(topic)]
        previous_owner: AccountId,
        #[ink(topic)]
        new_owner: AccountId,
    }

    #[ink(storage)]
    pub struct SimpleAccount {
        account: Account,
    }

    impl SimpleAccount {
        /// `entry_point` 此后不可更改；`owner` 不能是全零账户。
        #[ink(constructor)]
        pub fn new(entry_point: AccountId, owner: AccountId) -> Result<Self> {
            let account = Account::new(entry_point, owner)?;
            Self::env().emit_event(AccountInitialized { entry_point, owner });
            Ok(Self { account })
        }

        #[ink(message)]
        pub fn owner(&self) -> AccountId {
            self.account.owner()
        }

        #[ink(message)]
        pub fn entry_point(&self) -> AccountId {
            self.account.entry_point()
        }

        #[ink(message)]
        pub fn require_from_entry_point(&self) -> Result<()> {
            self.account.require_dispatcher(&self.env().caller())
        }

        #[ink(message)]
        pub fn only_owner(&self) -> Result<()> {
            self.account.require_owner(&self.env().caller())
        }

        /// 以账户身份调用 `target`。只有 entry point 和 owner 可以调用。
        #[ink(message)]
        pub fn execute(&mut self, target: AccountId, value: Balance, payload: Vec<u8>) -> Result<()> {
            let call = Call {
                target,
                value,
                payload,
            };
            self.account
                .execute(&mut EnvHost, self.env().caller(), &call)
                .map_err(|e| self.log_rejection("execute", e))
        }

        #[ink(message)]
        pub fn execute_batch(&mut self, calls: Vec<Call>) -> Result<()> {
            self.account
                .execute_batch(&mut EnvHost, self.env().caller(), &calls)
                .map_err(|e| self.log_rejection("execute_batch", e))
        }

        #[ink(message)]
        pub fn set_owner(&mut self, new_owner: AccountId) -> Result<()> {
            let previous_owner = self
                .account
                .set_owner(self.env().caller(), new_owner)
                .map_err(|e| self.log_rejection("set_owner", e))?;
            self.env().emit_event(OwnerChanged {
                previous_owner,
                new_owner,
            });
            Ok(())
        }

        /// 接收转账，不做其他处理。
        #[ink(message, payable)]
        pub fn receive(&self) {
            ink::env::debug_println!("received {}", self.env().transferred_value());
        }

        /// 账户在 entry point 中 key 为 0 的 nonce。
        #[ink(message)]
        pub fn get_nonce(&self) -> [u8; 32] {
            self.nonce_manager_ref()
                .get_nonce(self.env().account_id(), [0; 24])
        }

        /// 账户在 entry point 中的 gas 存款。
        #[ink(message)]
        pub fn get_deposit(&self) -> Balance {
            self.stake_manager_ref()
                .balance_of(self.env().account_id())
        }

        /// 把随调用转入的金额存入 entry point。
        #[ink(message, payable)]
        pub fn add_deposit(&mut self) -> Result<()> {
            let value = self.env().transferred_value();
            let account_id = self.env().account_id();
            let mut stake_manager = self.stake_manager_ref();
            forwarded(
                stake_manager
                    .call_mut()
                    .deposit_to(account_id)
                    .transferred_value(value)
                    .try_invoke(),
            )
        }

        /// 从 entry point 取回存款。只有 owner 可以调用。
        #[ink(message)]
        pub fn withdraw_deposit_to(
            &mut self,
            withdraw_address: AccountId,
            amount: Balance,
        ) -> Result<()> {
            self.account
                .require_owner(&self.env().caller())
                .map_err(|e| self.log_rejection("withdraw_deposit_to", e))?;
            let mut stake_manager = self.stake_manager_ref();
            forwarded(
                stake_manager
                    .call_mut()
                    .withdraw_to(withdraw_address, amount)
                    .try_invoke(),
            )
        }
    }

    #[ink(impl)]
    impl SimpleAccount {
        pub fn stake_manager_ref(&self) -> StakeManagerRef<AAEnvironment> {
            self.account.entry_point().into()
        }

        pub fn nonce_manager_ref(&self) -> NonceManagerRef<AAEnvironment> {
            self.account.entry_point().into()
        }

        fn log_rejection(&self, message: &str, error: Error) -> Error {
            ink::env::debug_println!(
                "{} rejected: caller {:?} error {:?}",
                message,
                self.env().caller(),
                error
            );
            error
        }
    }

    /// 把跨合约调用的两层错误都折叠成 `CallFailed`。
    fn forwarded<R>(
        result: core::result::Result<ink::MessageResult<R>, ink::env::Error>,
    ) -> Result<R> {
        match result {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(lang_error)) => Err(Error::CallFailed(lang_error.encode())),
            Err(e) => Err(Error::CallFailed(format!("{:?}", e).into_bytes())),
        }
    }

    impl IAccount for SimpleAccount {
        #[ink(message)]
        fn validate_user_op(
            &self,
            user_op: UserOperation,
            user_op_hash: Hash,
            missing_account_funds: Balance,
        ) -> Result<ValidationData> {
            let caller = self.env().caller();
            let validation_data = self
                .account
                .validate_user_op(
                    &mut EnvHost,
                    caller,
                    &user_op,
                    &user_op_hash,
                    missing_account_funds,
                )
                .map_err(|e| self.log_rejection("validate_user_op", e))?;
            if missing_account_funds != 0 {
                ink::env::debug_println!("prefund {} paid to {:?}", missing_account_funds, caller);
            }
            Ok(validation_data)
        }
    }


}
