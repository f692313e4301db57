use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, SecondsFormat, Utc};
use serde_json::{Map, Value};

use crate::utils::error::{FolioError, Result};

/// 查詢文件內嵌的字面值節點。與綁定傳入的 wire 值是兩條獨立的轉換路徑，
/// 各自有不同的錯誤合約。
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    Enum(String),
    List(Vec<Literal>),
    Object(Vec<(String, Literal)>),
}

/// API 邊界上註冊的 wire 純量：wire 表示與原生值之間的雙向轉換。
///
/// `parse_value` 處理綁定傳入的值，可能失敗；`parse_literal` 處理文件字面值，
/// 節點種類不符時回傳 `Ok(None)`，由呼叫端拒絕該字面值，不在這裡拋錯。
pub trait WireScalar {
    type Wire;
    type Native;

    fn parse_value(wire: Self::Wire) -> Result<Self::Native>;
    fn serialize(native: &Self::Native) -> Self::Wire;
    fn parse_literal(literal: &Literal) -> Result<Option<Self::Native>>;
}

/// `DateTime` 純量：wire 形式為 ISO-8601 字串，原生值為 UTC 絕對時間點。
pub struct DateTimeScalar;

impl DateTimeScalar {
    fn parse_timestamp(wire: &str) -> Result<DateTime<Utc>> {
        if let Ok(dt) = DateTime::parse_from_rfc3339(wire) {
            return Ok(dt.with_timezone(&Utc));
        }

        if let Ok(dt) = DateTime::parse_from_rfc2822(wire) {
            return Ok(dt.with_timezone(&Utc));
        }

        // 無時區的日期時間視為 UTC
        if let Ok(naive) = NaiveDateTime::parse_from_str(wire, "%Y-%m-%dT%H:%M:%S%.f") {
            return Ok(naive.and_utc());
        }

        // 純日期視為 UTC 零點
        if let Ok(date) = NaiveDate::parse_from_str(wire, "%Y-%m-%d") {
            return Ok(date.and_time(NaiveTime::MIN).and_utc());
        }

        Err(FolioError::InvalidTemporalLiteral {
            value: wire.to_string(),
        })
    }
}

impl WireScalar for DateTimeScalar {
    type Wire = String;
    type Native = DateTime<Utc>;

    fn parse_value(wire: String) -> Result<DateTime<Utc>> {
        Self::parse_timestamp(&wire)
    }

    /// 標準輸出形式：零補齊、UTC（`Z` 結尾）、固定毫秒精度。
    fn serialize(native: &DateTime<Utc>) -> String {
        native.to_rfc3339_opts(SecondsFormat::Millis, true)
    }

    fn parse_literal(literal: &Literal) -> Result<Option<DateTime<Utc>>> {
        match literal {
            Literal::Str(s) => Self::parse_timestamp(s).map(Some),
            _ => Ok(None),
        }
    }
}

/// `JSON` 純量：wire 形式與原生值同為任意結構值。
///
/// `parse_value` 與 `serialize` 刻意為恆等轉換，讓半結構化內容
/// 原樣通過 schema。內容驗證由下游使用者負責。
pub struct JsonScalar;

impl WireScalar for JsonScalar {
    type Wire = Value;
    type Native = Value;

    fn parse_value(wire: Value) -> Result<Value> {
        Ok(wire)
    }

    fn serialize(native: &Value) -> Value {
        native.clone()
    }

    fn parse_literal(literal: &Literal) -> Result<Option<Value>> {
        match literal {
            // 物件字面值目前一律轉成空物件，不帶入欄位內容。
            // TODO: 待確認行內 JSON 引數的預期行為後改為轉出字面值本身的欄位
            Literal::Object(_) => Ok(Some(Value::Object(Map::new()))),
            _ => Ok(None),
        }
    }
}
