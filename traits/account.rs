use crate::core::{
    env::{AABalance, AAHash},
    error::Result,
    helpers::ValidationData,
    user_operation::UserOperation,
};

#[ink::trait_definition]
pub trait IAccount {
    /// 校验 owner 对 `user_op_hash` 的签名，并向调用者补偿 `missing_account_funds`。
    ///
    /// 签名不匹配不是错误，而是返回 `Aggregator::FailedVerification`；
    /// 只有补偿失败才会让调用失败。
    ///
    /// - `user_op` 要校验的操作，只读取其中的 `signature`
    /// - `user_op_hash` entry point 计算的规范哈希，原样信任
    /// - `missing_account_funds` 需要立即补偿给调用者的金额，可以为零
    #[ink(message)]
    fn validate_user_op(
        &self,
        user_op: UserOperation,
        user_op_hash: AAHash,
        missing_account_funds: AABalance,
    ) -> Result<ValidationData>;
}
