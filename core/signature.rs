//! owner 签名的解析与恢复。
//!
//! 签名是 65 字节的 `r ‖ s ‖ v`，签在 `user_op_hash` 的 personal message 摘要上。
//! 恢复出的压缩公钥经 `blake2x256` 映射为 `AccountId`，再与 owner 比较。

use super::{
    env::AAAccountId,
    helpers::{blake2x256, keccak256},
    host::AccountHost,
};

pub const SIGNATURE_LEN: usize = 65;

const MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// secp256k1 曲线阶 `n`。
const SECP256K1_ORDER: [u8; 32] = [
    0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xfe,
    0xba, 0xae, 0xdc, 0xe6, 0xaf, 0x48, 0xa0, 0x3b, 0xbf, 0xd2, 0x5e, 0x8c, 0xd0, 0x36, 0x41, 0x41,
];

/// `n / 2`，低 s 形式的上界。
const SECP256K1_HALF_ORDER: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b, 0x20, 0xa0,
];

/// `keccak256("\x19Ethereum Signed Message:\n32" ‖ hash)`
pub fn to_eth_signed_message_hash(hash: &[u8; 32]) -> [u8; 32] {
    let mut message = [0u8; MESSAGE_PREFIX.len() + 32];
    message[..MESSAGE_PREFIX.len()].copy_from_slice(MESSAGE_PREFIX);
    message[MESSAGE_PREFIX.len()..].copy_from_slice(hash);
    keccak256(&message)
}

/// 压缩公钥对应的账户：`blake2x256(pubkey)`。
pub fn ecdsa_account_id(compressed_public_key: &[u8; 33]) -> AAAccountId {
    AAAccountId::from(blake2x256(compressed_public_key))
}

/// 通过了格式检查的签名，`v` 已规范化为 `0` 或 `1`。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdsaSignature([u8; SIGNATURE_LEN]);

impl EcdsaSignature {
    /// 长度必须是 65，`0 < r < n`，`0 < s <= n/2`，`v` 为 `0`、`1`、`27` 或 `28`。
    pub fn parse(bytes: &[u8]) -> Option<Self> {
        if bytes.len() != SIGNATURE_LEN {
            return None;
        }
        let mut signature = [0u8; SIGNATURE_LEN];
        signature.copy_from_slice(bytes);

        let (r, s) = (&signature[..32], &signature[32..64]);
        if is_zero(r) || r >= &SECP256K1_ORDER[..] {
            return None;
        }
        if is_zero(s) || s > &SECP256K1_HALF_ORDER[..] {
            return None;
        }
        signature[64] = match signature[64] {
            v @ (0 | 1) => v,
            v @ (27 | 28) => v - 27,
            _ => return None,
        };
        Some(Self(signature))
    }

    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }
}

fn is_zero(bytes: &[u8]) -> bool {
    bytes.iter().all(|b| *b == 0)
}

/// 从摘要和签名中恢复签名者；签名格式错误或恢复失败都返回 `None`。
pub fn recover_signer<H: AccountHost + ?Sized>(
    host: &H,
    message_hash: &[u8; 32],
    signature: &[u8],
) -> Option<AAAccountId> {
    let signature = EcdsaSignature::parse(signature)?;
    host.ecdsa_recover(signature.as_bytes(), message_hash)
        .ok()
        .map(|public_key| ecdsa_account_id(&public_key))
}
