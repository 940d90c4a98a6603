use ink::prelude::{collections::BTreeMap, vec, vec::Vec};

use super::{
    env::{AABalance, AAAccountId},
    exec::{Call, CallOutcome},
    host::AccountHost,
    signature::{ecdsa_account_id, to_eth_signed_message_hash},
};

/// 内存账本：记录余额、每个目标收到的调用次数，以及预设会回滚的目标。
pub(crate) struct MockHost {
    account: AAAccountId,
    balances: BTreeMap<AAAccountId, AABalance>,
    reverts: BTreeMap<AAAccountId, Vec<u8>>,
    counters: BTreeMap<AAAccountId, u32>,
    pub invoked: Vec<Call>,
}

impl Default for MockHost {
    fn default() -> Self {
        Self::new(AAAccountId::from([0xaa; 32]))
    }
}

impl MockHost {
    pub fn new(account: AAAccountId) -> Self {
        Self {
            account,
            balances: BTreeMap::new(),
            reverts: BTreeMap::new(),
            counters: BTreeMap::new(),
            invoked: Vec::new(),
        }
    }

    pub fn set_balance(&mut self, account: AAAccountId, balance: AABalance) {
        self.balances.insert(account, balance);
    }

    pub fn balance_of(&self, account: AAAccountId) -> AABalance {
        self.balances.get(&account).copied().unwrap_or_default()
    }

    pub fn counter_of(&self, target: AAAccountId) -> u32 {
        self.counters.get(&target).copied().unwrap_or_default()
    }

    /// `target` 的消息以 `Err` 结束；`error` 是错误值的编码，不含变体下标。
    pub fn revert_with(&mut self, target: AAAccountId, error: Vec<u8>) {
        let mut output = vec![1];
        output.extend_from_slice(&error);
        self.reverts.insert(target, output);
    }

    fn move_balance(&mut self, to: AAAccountId, value: AABalance) -> Result<(), ink::env::Error> {
        let from = self.balance_of(self.account);
        if from < value {
            return Err(ink::env::Error::TransferFailed);
        }
        let to_balance = self.balance_of(to);
        self.balances.insert(self.account, from - value);
        self.balances.insert(to, to_balance + value);
        Ok(())
    }
}

impl AccountHost for MockHost {
    fn balance(&self) -> AABalance {
        self.balance_of(self.account)
    }

    fn transfer(&mut self, to: AAAccountId, value: AABalance) -> Result<(), ink::env::Error> {
        self.move_balance(to, value)
    }

    fn invoke(&mut self, call: &Call) -> CallOutcome {
        self.invoked.push(call.clone());
        if let Some(output) = self.reverts.get(&call.target) {
            return CallOutcome::from_message_output(output.clone());
        }
        if self.move_balance(call.target, call.value).is_err() {
            return CallOutcome::failed(Vec::new());
        }
        if !call.is_transfer() {
            *self.counters.entry(call.target).or_default() += 1;
        }
        CallOutcome::succeeded(Vec::new())
    }
}

/// 测试用的 secp256k1 密钥。
pub(crate) struct TestSigner {
    secret: libsecp256k1::SecretKey,
}

impl TestSigner {
    pub fn new(seed: u8) -> Self {
        let secret = libsecp256k1::SecretKey::parse(&[seed; 32]).expect("seed is a valid key");
        Self { secret }
    }

    pub fn account_id(&self) -> AAAccountId {
        let public = libsecp256k1::PublicKey::from_secret_key(&self.secret);
        ecdsa_account_id(&public.serialize_compressed())
    }

    /// 对原始摘要签名，`v` 使用 27/28。
    pub fn sign_digest(&self, digest: &[u8; 32]) -> Vec<u8> {
        let message = libsecp256k1::Message::parse(digest);
        let (signature, recovery_id) = libsecp256k1::sign(&message, &self.secret);
        let mut bytes = signature.serialize().to_vec();
        bytes.push(recovery_id.serialize() + 27);
        bytes
    }

    /// 按 owner 的方式对 `user_op_hash` 签名。
    pub fn sign_hash(&self, hash: &[u8; 32]) -> Vec<u8> {
        self.sign_digest(&to_eth_signed_message_hash(hash))
    }
}
