mod request_horoscope;
mod zodiac_horoscope;

pub use request_horoscope::*;
pub use zodiac_horoscope::*;
