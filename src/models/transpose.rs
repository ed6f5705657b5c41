//! 移调参数
//!
//! 参数只在这里做格式校验，具体的移调由引擎完成。
//!
//! ```json
//! {
//!     "mode": "to_key",
//!     "direction": "up",
//!     "targetKey": 2,
//!     "transposeKeySignatures": true
//! }
//! ```

use crate::error::{ConvertError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// 调号范围（降号为负）
const KEY_RANGE: std::ops::RangeInclusive<i32> = -7..=7;
/// 音程编号范围
const INTERVAL_RANGE: std::ops::RangeInclusive<i32> = 0..=25;

/// 移调方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransposeMode {
    /// 移到指定调
    ToKey,
    /// 按音程移调
    ByInterval,
    /// 自然音级移调
    Diatonically,
}

/// 移调方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransposeDirection {
    Up,
    Down,
    Closest,
}

fn default_true() -> bool {
    true
}

/// 移调参数
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransposeOptions {
    pub mode: TransposeMode,
    pub direction: TransposeDirection,
    #[serde(default)]
    pub target_key: i32,
    #[serde(default)]
    pub transpose_interval: i32,
    #[serde(default = "default_true")]
    pub transpose_key_signatures: bool,
    #[serde(default = "default_true")]
    pub transpose_chord_names: bool,
    #[serde(default)]
    pub use_double_sharps_flats: bool,
}

impl TransposeOptions {
    fn validate(self) -> Result<Self> {
        if !KEY_RANGE.contains(&self.target_key) {
            return Err(invalid(format!(
                "targetKey {} 超出范围 [{}, {}]",
                self.target_key,
                KEY_RANGE.start(),
                KEY_RANGE.end()
            )));
        }
        if !INTERVAL_RANGE.contains(&self.transpose_interval) {
            return Err(invalid(format!(
                "transposeInterval {} 超出范围 [{}, {}]",
                self.transpose_interval,
                INTERVAL_RANGE.start(),
                INTERVAL_RANGE.end()
            )));
        }
        Ok(self)
    }
}

/// 从 JSON 文本解析移调参数
pub fn parse_transpose_options(json: &str) -> Result<TransposeOptions> {
    let value: JsonValue = serde_json::from_str(json).map_err(|e| invalid(e.to_string()))?;
    parse_transpose_value(&value)
}

/// 从 JSON 对象解析移调参数
pub fn parse_transpose_value(value: &JsonValue) -> Result<TransposeOptions> {
    if !value.is_object() {
        return Err(invalid("移调参数必须是 JSON 对象"));
    }
    let options: TransposeOptions =
        serde_json::from_value(value.clone()).map_err(|e| invalid(e.to_string()))?;
    options.validate()
}

fn invalid(message: impl Into<String>) -> ConvertError {
    ConvertError::InvalidTransposeOptions {
        message: message.into(),
    }
}
