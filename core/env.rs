use ink::env::{DefaultEnvironment, Environment};

/// AccountAbstractionEnvironment
pub type AAEnvironment = DefaultEnvironment;

pub type AABalance = <AAEnvironment as Environment>::Balance;
pub type AAAccountId = <AAEnvironment as Environment>::AccountId;
pub type AAHash = <AAEnvironment as Environment>::Hash;
pub type AATimestamp = <AAEnvironment as Environment>::Timestamp;

/// 空身份：全零账户。
pub fn zero_account() -> AAAccountId {
    AAAccountId::from([0; 32])
}

/// 判断账户是否为全零的空身份。
pub fn is_zero_account(account: &AAAccountId) -> bool {
    *account == zero_account()
}
