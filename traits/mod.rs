pub mod account;
pub mod entry_point;
pub mod nonce_manager;
pub mod stake_manager;
