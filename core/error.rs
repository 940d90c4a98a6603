use ink::prelude::vec::Vec;

/// 账户合约对外暴露的全部错误。
///
/// 任何一个错误都会让整次调用回滚；签名校验失败不在此列，
/// 它通过 [`ValidationData`](super::helpers::ValidationData) 中的失败标记返回。
#[derive(Debug, Clone, PartialEq, Eq, scale::Encode, scale::Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Error {
    /// 调用者既不是 entry point 也不是 owner（或者 owner 专属操作的调用者不是 owner）。
    Unauthorized,
    /// 转发的调用失败，携带被调用方返回的原始数据。
    CallFailed(Vec<u8>),
    /// 向调用者补偿 prefund 的转账失败。
    PrefundTransferFailed,
    /// 试图把 owner 设置为空身份。
    InvalidOwner,
}

pub type Result<T> = core::result::Result<T, Error>;
