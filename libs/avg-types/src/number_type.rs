use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// 数字类型，每种类型对应一个独立的滑动窗口
/// number type, each one owns an independent sliding window
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberType {
    Prime,
    Fibonacci,
    Even,
    Random,
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unrecognized number type: {0}")]
pub struct ParseNumberTypeError(pub String);

impl NumberType {
    pub const ALL: [NumberType; 4] = [NumberType::Prime, NumberType::Fibonacci, NumberType::Even, NumberType::Random];

    // 路径参数中使用的短标识
    pub fn id(&self) -> &'static str {
        match self {
            NumberType::Prime => "p",
            NumberType::Fibonacci => "f",
            NumberType::Even => "e",
            NumberType::Random => "r",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            NumberType::Prime => "prime",
            NumberType::Fibonacci => "fibonacci",
            NumberType::Even => "even",
            NumberType::Random => "random",
        }
    }
}

impl FromStr for NumberType {
    type Err = ParseNumberTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "p" => Ok(NumberType::Prime),
            "f" => Ok(NumberType::Fibonacci),
            "e" => Ok(NumberType::Even),
            "r" => Ok(NumberType::Random),
            _ => Err(ParseNumberTypeError(s.to_string())),
        }
    }
}

impl fmt::Display for NumberType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
