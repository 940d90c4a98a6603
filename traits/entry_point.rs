use ink::codegen::TraitCallForwarder;

use super::{nonce_manager::INonceManager, stake_manager::IStakeManager};

pub type StakeManagerRef<E> = <<ink::reflect::TraitDefinitionRegistry<E> as IStakeManager> ::__ink_TraitInfo as TraitCallForwarder>::Forwarder;
pub type NonceManagerRef<E> = <<ink::reflect::TraitDefinitionRegistry<E> as INonceManager> ::__ink_TraitInfo as TraitCallForwarder>::Forwarder;
