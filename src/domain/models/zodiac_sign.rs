use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ZodiacSign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl ZodiacSign {
    pub const ALL: [ZodiacSign; 12] = [
        ZodiacSign::Aries,
        ZodiacSign::Taurus,
        ZodiacSign::Gemini,
        ZodiacSign::Cancer,
        ZodiacSign::Leo,
        ZodiacSign::Virgo,
        ZodiacSign::Libra,
        ZodiacSign::Scorpio,
        ZodiacSign::Sagittarius,
        ZodiacSign::Capricorn,
        ZodiacSign::Aquarius,
        ZodiacSign::Pisces,
    ];

    /// Resolve the tropical zodiac sign for a day of a month.
    ///
    /// Each sign spans the tail of one month and the head of the next. No
    /// calendar validation happens here: a month outside `1..=12` matches
    /// nothing, and an impossible day such as February 31 falls into whichever
    /// half of the month it compares into.
    pub fn resolve(day: i64, month: i64) -> Option<Self> {
        let sign = match (month, day) {
            (3, d) if d >= 21 => ZodiacSign::Aries,
            (4, d) if d <= 19 => ZodiacSign::Aries,
            (4, _) => ZodiacSign::Taurus,
            (5, d) if d <= 20 => ZodiacSign::Taurus,
            (5, _) => ZodiacSign::Gemini,
            (6, d) if d <= 20 => ZodiacSign::Gemini,
            (6, _) => ZodiacSign::Cancer,
            (7, d) if d <= 22 => ZodiacSign::Cancer,
            (7, _) => ZodiacSign::Leo,
            (8, d) if d <= 22 => ZodiacSign::Leo,
            (8, _) => ZodiacSign::Virgo,
            (9, d) if d <= 22 => ZodiacSign::Virgo,
            (9, _) => ZodiacSign::Libra,
            (10, d) if d <= 22 => ZodiacSign::Libra,
            (10, _) => ZodiacSign::Scorpio,
            (11, d) if d <= 21 => ZodiacSign::Scorpio,
            (11, _) => ZodiacSign::Sagittarius,
            (12, d) if d <= 21 => ZodiacSign::Sagittarius,
            (12, _) => ZodiacSign::Capricorn,
            (1, d) if d <= 19 => ZodiacSign::Capricorn,
            (1, _) => ZodiacSign::Aquarius,
            (2, d) if d <= 18 => ZodiacSign::Aquarius,
            (2, _) => ZodiacSign::Pisces,
            (3, _) => ZodiacSign::Pisces,
            _ => return None,
        };
        Some(sign)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ZodiacSign::Aries => "Aries",
            ZodiacSign::Taurus => "Taurus",
            ZodiacSign::Gemini => "Gemini",
            ZodiacSign::Cancer => "Cancer",
            ZodiacSign::Leo => "Leo",
            ZodiacSign::Virgo => "Virgo",
            ZodiacSign::Libra => "Libra",
            ZodiacSign::Scorpio => "Scorpio",
            ZodiacSign::Sagittarius => "Sagittarius",
            ZodiacSign::Capricorn => "Capricorn",
            ZodiacSign::Aquarius => "Aquarius",
            ZodiacSign::Pisces => "Pisces",
        }
    }
}

impl std::fmt::Display for ZodiacSign {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
