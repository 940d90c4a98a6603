#![cfg_attr(not(feature = "std"), no_std, no_main)]

pub use self::flip::{Error, FlipRef};

/// 端到端测试里账户调用的目标合约。
#[ink::contract]
mod flip {
    #[derive(Debug, PartialEq, Eq, scale::Encode, scale::Decode)]
    #[cfg_attr(feature = "std", derive(scale_info::TypeInfo))]
    pub enum Error {
        Refused,
    }

    #[ink(storage)]
    pub struct Flip {
        value: bool,
        tipped: Balance,
    }

    impl Flip {
        #[ink(constructor)]
        pub fn new(init_value: bool) -> Self {
            Self {
                value: init_value,
                tipped: 0,
            }
        }

        /// selector `0x633aa551`
        #[ink(message)]
        pub fn flip(&mut self) {
            self.value = !self.value;
        }

        #[ink(message)]
        pub fn get(&self) -> bool {
            self.value
        }

        /// 总是回滚，随调用转入的金额一并退回。
        #[ink(message, payable, selector = 0xCAFEBABE)]
        pub fn refuse(&mut self) -> Result<(), Error> {
            Err(Error::Refused)
        }

        #[ink(message, payable, selector = 0xDEADBEEF)]
        pub fn tip(&mut self) {
            self.tipped += self.env().transferred_value();
        }

        #[ink(message)]
        pub fn tipped(&self) -> Balance {
            self.tipped
        }
    }

}
