use crate::core::env::{AAAccountId, AABalance};

/// entry point 中与存款相关的部分。账户只用它来管理自己的 gas 存款。
#[ink::trait_definition]
pub trait IStakeManager {
    /// 返回给定账户的余额，用于支付燃气费。
    ///
    /// # Arguments
    ///
    /// * `account`：要获取余额的账户 ID。
    #[ink(message)]
    fn balance_of(&self, account: AAAccountId) -> AABalance;

    /// 向给定账户添加存款。
    ///
    /// # Arguments
    ///
    /// * `account`：要添加存款的账户 ID。
    #[ink(message, payable)]
    fn deposit_to(&mut self, account: AAAccountId);

    /// 从存款中取回金额。
    ///
    /// # Arguments
    ///
    /// * `withdraw_address`：要发送取回金额的地址。
    /// * `withdraw_amount`：要取回的金额。
    #[ink(message, payable)]
    fn withdraw_to(&mut self, withdraw_address: AAAccountId, withdraw_amount: AABalance);
}
