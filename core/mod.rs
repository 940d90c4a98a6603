pub mod account;
pub mod env;
pub mod error;
pub mod exec;
pub mod helpers;
pub mod host;
pub mod signature;
pub mod user_operation;

#[cfg(test)]
pub(crate) mod testing;
