use ink::env::hash::{Blake2x256, CryptoHash, Keccak256};
use scale::{Decode, Encode};

use super::env::{AAAccountId, AATimestamp};

/// `validate_user_op` 的返回值。
///
/// # Arguments
///
/// * `aggregator` - 签名的验证方式，见 [`Aggregator`]。
/// * `valid_after` - 此 UserOp 的有效开始时间戳，`0` 表示不限制。
/// * `valid_until` - 此 UserOp 的有效截止时间戳，`0` 表示不限制。
#[derive(Debug, Clone, PartialEq, Eq, Encode, Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct ValidationData {
    pub aggregator: Aggregator,
    pub valid_after: AATimestamp,
    pub valid_until: AATimestamp,
}

impl ValidationData {
    /// 签名者就是 owner。
    pub fn success() -> Self {
        Self {
            aggregator: Aggregator::VerifiedBySelf,
            valid_after: 0,
            valid_until: 0,
        }
    }

    /// 签名者不是 owner，或者签名无法恢复。
    pub fn sig_failed() -> Self {
        Self {
            aggregator: Aggregator::FailedVerification,
            valid_after: 0,
            valid_until: 0,
        }
    }

    pub fn is_sig_failed(&self) -> bool {
        self.aggregator == Aggregator::FailedVerification
    }
}

impl Default for ValidationData {
    fn default() -> Self {
        Self::success()
    }
}

/// `VerifiedBySelf` 表示账户自己验证了签名；`FailedVerification` 表示账户未能验证签名；
/// `VerifiedBy` 留给签名聚合器，本账户从不返回。
#[derive(Debug, Clone, Eq, PartialEq, Encode, Decode)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub enum Aggregator {
    VerifiedBySelf,
    VerifiedBy(AAAccountId),
    FailedVerification,
}

impl Default for Aggregator {
    fn default() -> Self {
        Self::VerifiedBySelf
    }
}

/// 计算一个字节数组的 Keccak256 哈希值。
#[inline]
pub fn keccak256(input: &[u8]) -> [u8; 32] {
    let mut hash = [0u8; 32];
    Keccak256::hash(input, &mut hash);
    hash
}

/// 计算一个字节数组的 Blake2x256 哈希值。
#[inline]
pub fn blake2x256(input: &[u8]) -> [u8; 32] {
    let mut hash = [0u8; 32];
    Blake2x256::hash(input, &mut hash);
    hash
}
