use ink::prelude::{format, vec::Vec};
use scale::Encode;

use super::{
    env::{AABalance, AAAccountId, AAEnvironment},
    exec::{Call, CallOutcome, OpaqueTypes},
};

/// 账户核心与执行环境之间的接缝。
///
/// 合约里由 [`EnvHost`] 直接落到 `ink::env`；测试里用内存账本代替。
pub trait AccountHost {
    /// 账户自己的余额。
    fn balance(&self) -> AABalance;

    /// 从账户向 `to` 转账。
    fn transfer(&mut self, to: AAAccountId, value: AABalance) -> Result<(), ink::env::Error>;

    /// 以账户身份发出一次调用，返回成功标记和原始返回数据。
    fn invoke(&mut self, call: &Call) -> CallOutcome;

    /// 恢复出 33 字节压缩公钥。
    fn ecdsa_recover(
        &self,
        signature: &[u8; 65],
        message_hash: &[u8; 32],
    ) -> Result<[u8; 33], ink::env::Error> {
        let mut output = [0u8; 33];
        ink::env::ecdsa_recover(signature, message_hash, &mut output)?;
        Ok(output)
    }
}

/// 当前合约执行上下文。
#[derive(Debug, Default, Clone, Copy)]
pub struct EnvHost;

impl AccountHost for EnvHost {
    fn balance(&self) -> AABalance {
        ink::env::balance::<AAEnvironment>()
    }

    fn transfer(&mut self, to: AAAccountId, value: AABalance) -> Result<(), ink::env::Error> {
        if self.balance() < value {
            return Err(ink::env::Error::TransferFailed);
        }
        ink::env::transfer::<AAEnvironment>(to, value)
    }

    fn invoke(&mut self, call: &Call) -> CallOutcome {
        if call.is_transfer() {
            if call.value == 0 {
                return CallOutcome::succeeded(Vec::new());
            }
            return match self.transfer(call.target, call.value) {
                Ok(()) => CallOutcome::succeeded(Vec::new()),
                Err(e) => CallOutcome::failed(format!("{:?}", e).into_bytes()),
            };
        }

        let Some(params) = call.params() else {
            return CallOutcome::failed(Vec::new());
        };
        match params.try_invoke() {
            Ok(Ok(OpaqueTypes(output))) => {
                let outcome = CallOutcome::from_message_output(output);
                if !outcome.success {
                    ink::env::debug_println!("callee reverted: {:?}", outcome.return_data);
                }
                outcome
            }
            Ok(Err(lang_error)) => {
                ink::env::debug_println!("call dispatch error: {:?}", lang_error);
                CallOutcome::failed(lang_error.encode())
            }
            Err(e) => {
                ink::env::debug_println!("call error: {:?}", e);
                CallOutcome::failed(format!("{:?}", e).into_bytes())
            }
        }
    }
}
