use anyhow::{bail, Result};

use crate::domain::{ZodiacSign, INVALID_DATE_OF_BIRTH};

/// Offline sign lookup; needs no provider credential.
pub struct SignController;

impl SignController {
    pub fn new() -> Self {
        Self
    }

    pub fn resolve(&self, day: i64, month: i64) -> Result<String> {
        match ZodiacSign::resolve(day, month) {
            Some(sign) => Ok(sign.to_string()),
            None => bail!("{} (day {}, month {})", INVALID_DATE_OF_BIRTH, day, month),
        }
    }
}

impl Default for SignController {
    fn default() -> Self {
        Self::new()
    }
}
