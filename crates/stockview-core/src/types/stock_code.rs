//! 한국거래소(KRX) 종목코드.
//!
//! 종목코드는 숫자로만 이루어진 6자리 문자열입니다. 사용자는 앞자리 0을
//! 생략해 입력할 수 있으므로(`5930` → `005930`) 정규화 후 보관합니다.
//! 문자가 섞인 코드(예: `AAPL`)는 해외 시세 경로로 새지 않도록 fetch 이전에 거부합니다.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{ViewerError, ViewerResult};

/// 종목코드 자릿수.
pub const STOCK_CODE_LEN: usize = 6;

/// 검증된 6자리 종목코드.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct StockCode(String);

impl StockCode {
    /// 종목코드를 검증하고 6자리로 정규화합니다.
    ///
    /// 앞뒤 공백은 무시합니다.
    ///
    /// # Errors
    ///
    /// - 빈 문자열이거나 숫자 이외의 문자가 포함된 경우
    /// - 6자리를 초과하는 경우
    pub fn parse(input: &str) -> ViewerResult<Self> {
        let trimmed = input.trim();

        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(ViewerError::InvalidCode {
                code: trimmed.to_string(),
                reason: "문자/기호가 포함된 종목코드는 지원하지 않습니다",
            });
        }

        if trimmed.len() > STOCK_CODE_LEN {
            return Err(ViewerError::InvalidCode {
                code: trimmed.to_string(),
                reason: "종목코드 길이가 6자리를 초과합니다",
            });
        }

        Ok(Self(format!("{:0>width$}", trimmed, width = STOCK_CODE_LEN)))
    }

    /// 정규화된 코드 문자열.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StockCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for StockCode {
    type Err = ViewerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for StockCode {
    type Error = ViewerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<StockCode> for String {
    fn from(code: StockCode) -> Self {
        code.0
    }
}

impl AsRef<str> for StockCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
