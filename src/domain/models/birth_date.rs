use serde::Deserialize;
use serde_json::{Map, Value};

use super::ZodiacSign;

/// A birthdate as submitted by a caller.
///
/// Only a JSON object with `day`, `month` and `year` keys is accepted. Each
/// field may be a JSON integer or a string holding one. The year is carried
/// along but plays no part in sign resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct BirthDate {
    day: i64,
    month: i64,
    year: i64,
}

impl BirthDate {
    pub fn new(day: i64, month: i64, year: i64) -> Self {
        Self { day, month, year }
    }

    pub fn day(&self) -> i64 {
        self.day
    }

    pub fn month(&self) -> i64 {
        self.month
    }

    pub fn year(&self) -> i64 {
        self.year
    }

    pub fn zodiac_sign(&self) -> Option<ZodiacSign> {
        ZodiacSign::resolve(self.day, self.month)
    }
}

impl TryFrom<Map<String, Value>> for BirthDate {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        Ok(Self {
            day: int_field(&fields, "day")?,
            month: int_field(&fields, "month")?,
            year: int_field(&fields, "year")?,
        })
    }
}

fn int_field(fields: &Map<String, Value>, key: &str) -> Result<i64, String> {
    match fields.get(key) {
        None => Err(format!("missing field `{key}`")),
        Some(Value::Number(n)) => n
            .as_i64()
            .ok_or_else(|| format!("invalid integer for `{key}`: {n}")),
        Some(Value::String(s)) => s
            .trim()
            .parse()
            .map_err(|_| format!("invalid integer for `{key}`: {s:?}")),
        Some(other) => Err(format!(
            "invalid type for `{key}`: expected an integer, found {other}"
        )),
    }
}
