use super::env::{AABalance, AAAccountId, AAEnvironment};
use ink::env::{
    call::{
        build_call,
        utils::{Argument, ArgumentList, EmptyArgumentList},
        Call as CallType, CallParams, ExecutionInput, Selector,
    },
    CallFlags,
};
use ink::prelude::vec;
use ink::prelude::vec::Vec;

/// 账户代表 owner 发出的一次调用。
///
/// `payload` 为空时是一笔普通转账；否则前 4 字节是被调用消息的 selector，
/// 其余字节是原样转发的 SCALE 编码参数。
#[derive(scale::Decode, scale::Encode, Clone, Hash)]
#[cfg_attr(feature = "std", derive(Debug, PartialEq, Eq, scale_info::TypeInfo))]
pub struct Call {
    /// The `AccountId` of the account or contract that is called.
    pub target: AAAccountId,
    /// The amount of chain balance that is transferred to the target.
    pub value: AABalance,
    /// Selector followed by the encoded arguments, or empty for a plain transfer.
    pub payload: Vec<u8>,
}

type Args = ArgumentList<Argument<OpaqueTypes>, EmptyArgumentList>;

/// 以账户身份发出的合约调用参数。
pub type CallParamsOf = CallParams<AAEnvironment, CallType<AAEnvironment>, Args, OpaqueTypes>;

impl Call {
    pub fn new(target: AAAccountId, payload: Vec<u8>) -> Self {
        use num_traits::identities::Zero;
        Self {
            target,
            value: AABalance::zero(),
            payload,
        }
    }

    pub fn with_value(mut self, value: AABalance) -> Self {
        self.value = value;
        self
    }

    pub fn is_transfer(&self) -> bool {
        self.payload.is_empty()
    }

    pub fn selector(&self) -> Option<[u8; 4]> {
        let mut selector = [0u8; 4];
        selector.copy_from_slice(self.payload.get(..4)?);
        Some(selector)
    }

    /// 构造合约调用；`payload` 不足一个 selector 时返回 `None`。
    ///
    /// 使用全部剩余 gas，并允许被调用方重入账户。
    pub fn params(&self) -> Option<CallParamsOf> {
        let selector = self.selector()?;
        Some(
            build_call::<AAEnvironment>()
                .call(self.target)
                .gas_limit(0)
                .transferred_value(self.value)
                .call_flags(CallFlags::default().set_allow_reentry(true))
                .exec_input(
                    ExecutionInput::new(Selector::new(selector))
                        .push_arg(OpaqueTypes(self.payload[4..].to_vec())),
                )
                .returns::<OpaqueTypes>()
                .params(),
        )
    }
}

/// 一次调用的结果：是否成功以及被调用方返回的原始字节。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallOutcome {
    pub success: bool,
    pub return_data: Vec<u8>,
}

impl CallOutcome {
    pub fn succeeded(return_data: Vec<u8>) -> Self {
        Self {
            success: true,
            return_data,
        }
    }

    pub fn failed(return_data: Vec<u8>) -> Self {
        Self {
            success: false,
            return_data,
        }
    }

    /// 按 ink! 消息约定解释被调用方在 `MessageResult::Ok` 之后写出的字节。
    ///
    /// 返回 `Result` 的消息以 `Err` 结束时会回滚，但宿主仍把输出当作成功解码，
    /// 所以以 `Err` 变体开头的输出视为回滚。失败时的返回数据是被调用方写出的完整输出。
    pub fn from_message_output(output: Vec<u8>) -> Self {
        if output.first() != Some(&RESULT_ERR) {
            return Self::succeeded(output);
        }
        let written: ink::MessageResult<OpaqueTypes> = Ok(OpaqueTypes(output));
        Self::failed(scale::Encode::encode(&written))
    }
}

/// `Result::Err` 的 SCALE 变体下标。
const RESULT_ERR: u8 = 1;

/// 不经解码、原样编码的字节。
#[cfg_attr(feature = "std", derive(PartialEq, Eq, scale_info::TypeInfo))]
#[derive(Clone, Debug)]
pub struct OpaqueTypes(pub Vec<u8>);

impl scale::Encode for OpaqueTypes {
    #[inline]
    fn size_hint(&self) -> usize {
        self.0.len()
    }

    #[inline]
    fn encode_to<O: scale::Output + ?Sized>(&self, output: &mut O) {
        output.write(&self.0);
    }
}

impl scale::Decode for OpaqueTypes {
    #[inline]
    fn decode<I: scale::Input>(input: &mut I) -> Result<Self, scale::Error> {
        let len = input.remaining_len()?;

        let mut bytes;

        if let Some(len) = len {
            bytes = vec![0; len];
            input.read(&mut bytes[..len])?;
        } else {
            bytes = Vec::new();
            while let Ok(b) = input.read_byte() {
                bytes.push(b);
            }
        };

        Ok(OpaqueTypes(bytes))
    }
}
