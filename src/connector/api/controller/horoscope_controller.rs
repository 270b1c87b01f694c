use anyhow::Result;

use crate::domain::{BirthDate, Horoscope};

use super::super::Container;

pub struct HoroscopeController<'a> {
    container: &'a Container,
}

impl<'a> HoroscopeController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn horoscope(&self, day: i64, month: i64, year: i64) -> Result<String> {
        let use_case = self.container.zodiac_horoscope_use_case();
        let horoscope = use_case.execute(BirthDate::new(day, month, year)).await?;

        Ok(self.format_horoscope(&horoscope))
    }

    fn format_horoscope(&self, horoscope: &Horoscope) -> String {
        format!(
            "Zodiac sign: {}\n\n{}",
            horoscope.zodiac_sign(),
            horoscope.text().trim()
        )
    }
}
