use ink::prelude::vec::Vec;
use scale::Encode;

use super::{
    env::{AAAccountId, AABalance},
    helpers::keccak256,
};

/// `UserOperation` 结构体定义了一个用户操作。
///
/// 账户只读取 `signature`，其余字段由 entry point 打包并哈希，
/// 哈希值作为 `user_op_hash` 单独传给账户。
#[derive(scale::Encode, scale::Decode, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
pub struct UserOperation {
    /// 发送人的账户 ID，必须是实现了 `IAccount` 的合约。
    pub sender: AAAccountId,
    /// 用户操作的随机数（高 24 字节为 key，低 8 字节为序号）。
    pub nonce: [u8; 32],
    /// 工厂地址和创建账户所需的数据，账户已存在时为空。
    pub init_code: Vec<u8>,
    /// 账户执行阶段要用的调用数据。
    pub call_data: Vec<u8>,
    /// 高 16 字节为 verification gas limit，低 16 字节为 call gas limit。
    pub account_gas_limits: [u8; 32],
    /// 在验证之前执行的燃料量。
    pub pre_verification_gas: u64,
    /// 高 16 字节为 max priority fee per gas，低 16 字节为 max fee per gas。
    pub gas_fees: [u8; 32],
    /// 前 32 字节为 paymaster 账户，其余为 paymaster 自己的数据。
    pub paymaster_and_data: Vec<u8>,
    /// owner 对 `user_op_hash` 的签名。
    pub signature: Vec<u8>,
}

impl Default for UserOperation {
    fn default() -> Self {
        Self {
            sender: AAAccountId::from([0; 32]),
            nonce: Default::default(),
            init_code: Default::default(),
            call_data: Default::default(),
            account_gas_limits: Default::default(),
            pre_verification_gas: Default::default(),
            gas_fees: Default::default(),
            paymaster_and_data: Default::default(),
            signature: Default::default(),
        }
    }
}

/// 把两个 128 位数值打包成一个 32 字节字段（`high` 在前）。
pub fn pack_pair(high: u128, low: u128) -> [u8; 32] {
    let mut packed = [0u8; 32];
    packed[..16].copy_from_slice(&high.to_be_bytes());
    packed[16..].copy_from_slice(&low.to_be_bytes());
    packed
}

/// [`pack_pair`] 的逆操作，返回 `(high, low)`。
pub fn unpack_pair(packed: &[u8; 32]) -> (u128, u128) {
    let mut high = [0u8; 16];
    let mut low = [0u8; 16];
    high.copy_from_slice(&packed[..16]);
    low.copy_from_slice(&packed[16..]);
    (u128::from_be_bytes(high), u128::from_be_bytes(low))
}

impl UserOperation {
    pub fn verification_gas_limit(&self) -> u128 {
        unpack_pair(&self.account_gas_limits).0
    }

    pub fn call_gas_limit(&self) -> u128 {
        unpack_pair(&self.account_gas_limits).1
    }

    pub fn max_priority_fee_per_gas(&self) -> AABalance {
        unpack_pair(&self.gas_fees).0
    }

    pub fn max_fee_per_gas(&self) -> AABalance {
        unpack_pair(&self.gas_fees).1
    }

    /// `paymaster_and_data` 中的 paymaster，数据不足 32 字节时为 `None`。
    pub fn paymaster(&self) -> Option<AAAccountId> {
        const LEN: usize = core::mem::size_of::<AAAccountId>();
        if self.paymaster_and_data.len() < LEN {
            return None;
        }
        let mut paymaster = [0u8; LEN];
        paymaster.copy_from_slice(&self.paymaster_and_data[..LEN]);
        Some(AAAccountId::from(paymaster))
    }

    /// 打包除签名以外的全部字段，变长字段以其哈希代替。
    pub fn pack(&self) -> Vec<u8> {
        UserOperationPack {
            sender: self.sender,
            nonce: self.nonce,
            init_code: keccak256(&self.init_code),
            call_data: keccak256(&self.call_data),
            account_gas_limits: self.account_gas_limits,
            pre_verification_gas: self.pre_verification_gas,
            gas_fees: self.gas_fees,
            paymaster_and_data: keccak256(&self.paymaster_and_data),
        }
        .encode()
    }

    /// entry point 计算的规范哈希：`keccak256(keccak256(pack) ‖ entry_point ‖ chain_id)`。
    ///
    /// 账户在验证时从不调用它，而是直接信任 entry point 传入的哈希。
    pub fn hash(&self, entry_point: &AAAccountId, chain_id: u64) -> [u8; 32] {
        keccak256(&(keccak256(&self.pack()), entry_point, chain_id).encode())
    }
}

/// `UserOperationPack` 结构体定义了一个打包了用户操作的结构体。
#[derive(scale::Encode)]
struct UserOperationPack {
    sender: AAAccountId,
    nonce: [u8; 32],
    init_code: [u8; 32],
    call_data: [u8; 32],
    account_gas_limits: [u8; 32],
    pre_verification_gas: u64,
    gas_fees: [u8; 32],
    paymaster_and_data: [u8; 32],
}
