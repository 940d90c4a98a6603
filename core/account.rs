use ink::prelude::vec::Vec;
use num_traits::identities::Zero;

use super::{
    env::{is_zero_account, AABalance, AAAccountId, AAHash},
    error::{Error, Result},
    exec::Call,
    helpers::ValidationData,
    host::AccountHost,
    signature::{recover_signer, to_eth_signed_message_hash},
    user_operation::UserOperation,
};

/// 账户的全部状态：一个 owner 和一个构造后不可变的 entry point。
///
/// 调用者身份总是显式传入，所有操作在最后一步可失败的检查之前不修改任何东西。
#[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(
    feature = "std",
    derive(scale_info::TypeInfo, ink::storage::traits::StorageLayout)
)]
pub struct Account {
    owner: AAAccountId,
    entry_point: AAAccountId,
}

impl Account {
    pub fn new(entry_point: AAAccountId, owner: AAAccountId) -> Result<Self> {
        if is_zero_account(&owner) {
            return Err(Error::InvalidOwner);
        }
        Ok(Self { owner, entry_point })
    }

    pub fn owner(&self) -> AAAccountId {
        self.owner
    }

    pub fn entry_point(&self) -> AAAccountId {
        self.entry_point
    }

    #[inline]
    pub fn require_dispatcher(&self, caller: &AAAccountId) -> Result<()> {
        if *caller != self.entry_point {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    #[inline]
    pub fn require_owner(&self, caller: &AAAccountId) -> Result<()> {
        if *caller != self.owner {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    #[inline]
    pub fn require_dispatcher_or_owner(&self, caller: &AAAccountId) -> Result<()> {
        if *caller != self.entry_point && *caller != self.owner {
            return Err(Error::Unauthorized);
        }
        Ok(())
    }

    /// 校验签名并向调用者补偿 `missing_account_funds`。
    ///
    /// 签名不匹配只体现在返回的 [`ValidationData`] 上；补偿无论签名结果如何都会支付，
    /// 支付失败则整次调用失败。
    pub fn validate_user_op<H: AccountHost + ?Sized>(
        &self,
        host: &mut H,
        caller: AAAccountId,
        user_op: &UserOperation,
        user_op_hash: &AAHash,
        missing_account_funds: AABalance,
    ) -> Result<ValidationData> {
        let validation_data = self.validate_signature(&*host, user_op, user_op_hash);
        self.pay_prefund(host, caller, missing_account_funds)?;
        Ok(validation_data)
    }

    pub fn validate_signature<H: AccountHost + ?Sized>(
        &self,
        host: &H,
        user_op: &UserOperation,
        user_op_hash: &AAHash,
    ) -> ValidationData {
        let mut hash = [0u8; 32];
        hash.copy_from_slice(user_op_hash.as_ref());
        let digest = to_eth_signed_message_hash(&hash);
        match recover_signer(host, &digest, &user_op.signature) {
            Some(signer) if signer == self.owner => ValidationData::success(),
            _ => ValidationData::sig_failed(),
        }
    }

    fn pay_prefund<H: AccountHost + ?Sized>(
        &self,
        host: &mut H,
        caller: AAAccountId,
        missing_account_funds: AABalance,
    ) -> Result<()> {
        if missing_account_funds.is_zero() {
            return Ok(());
        }
        if host.balance() < missing_account_funds {
            return Err(Error::PrefundTransferFailed);
        }
        host.transfer(caller, missing_account_funds)
            .map_err(|_| Error::PrefundTransferFailed)
    }

    pub fn execute<H: AccountHost + ?Sized>(
        &self,
        host: &mut H,
        caller: AAAccountId,
        call: &Call,
    ) -> Result<()> {
        self.require_dispatcher_or_owner(&caller)?;
        Self::dispatch(host, call)
    }

    /// 依次执行；第一个失败的调用终止整个批次。
    pub fn execute_batch<H: AccountHost + ?Sized>(
        &self,
        host: &mut H,
        caller: AAAccountId,
        calls: &[Call],
    ) -> Result<()> {
        self.require_dispatcher_or_owner(&caller)?;
        calls.iter().try_for_each(|call| Self::dispatch(host, call))
    }

    fn dispatch<H: AccountHost + ?Sized>(host: &mut H, call: &Call) -> Result<()> {
        if host.balance() < call.value {
            return Err(Error::CallFailed(Vec::new()));
        }
        let outcome = host.invoke(call);
        if !outcome.success {
            return Err(Error::CallFailed(outcome.return_data));
        }
        Ok(())
    }

    /// 只有 owner 可以转移所有权，新 owner 不能是空身份。返回之前的 owner。
    pub fn set_owner(&mut self, caller: AAAccountId, new_owner: AAAccountId) -> Result<AAAccountId> {
        self.require_owner(&caller)?;
        if is_zero_account(&new_owner) {
            return Err(Error::InvalidOwner);
        }
        Ok(core::mem::replace(&mut self.owner, new_owner))
    }
}
