mod birth_date;
mod horoscope;
mod zodiac_sign;

pub use birth_date::*;
pub use horoscope::*;
pub use zodiac_sign::*;
