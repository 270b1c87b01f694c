use serde::Serialize;

use super::ZodiacSign;

/// A generated horoscope paired with the sign it was written for.
///
/// The text is whatever the text generator returned, untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Horoscope {
    zodiac_sign: ZodiacSign,
    horoscope: String,
}

impl Horoscope {
    pub fn new(zodiac_sign: ZodiacSign, text: impl Into<String>) -> Self {
        Self {
            zodiac_sign,
            horoscope: text.into(),
        }
    }

    pub fn zodiac_sign(&self) -> ZodiacSign {
        self.zodiac_sign
    }

    pub fn text(&self) -> &str {
        &self.horoscope
    }
}
