use crate::core::env::AAAccountId;

#[ink::trait_definition]
pub trait INonceManager {
    /// 返回 `sender` 在 `key` 下的下一个 nonce（高 24 字节为 key）。
    #[ink(message)]
    fn get_nonce(&self, sender: AAAccountId, key: [u8; 24]) -> [u8; 32];

    /// 手动递增调用者在 `key` 下的 nonce。
    #[ink(message)]
    fn increment_nonce(&mut self, key: [u8; 24]);
}
