use std::sync::Arc;

use tracing::{debug, info};

use crate::application::{RequestHoroscopeUseCase, TextGenerator};
use crate::domain::{BirthDate, DomainError, Horoscope, INVALID_DATE_OF_BIRTH};

/// Resolves a birthdate to its sign and fetches the horoscope for it.
pub struct ZodiacHoroscopeUseCase {
    request_horoscope: RequestHoroscopeUseCase,
}

impl ZodiacHoroscopeUseCase {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self {
            request_horoscope: RequestHoroscopeUseCase::new(generator),
        }
    }

    /// Fails with [`DomainError::InvalidInput`] when no sign matches, in which
    /// case the text generator is never called.
    pub async fn execute(&self, birth_date: BirthDate) -> Result<Horoscope, DomainError> {
        debug!(
            "Resolving sign for {}/{}/{}",
            birth_date.day(),
            birth_date.month(),
            birth_date.year()
        );
        let sign = birth_date
            .zodiac_sign()
            .ok_or_else(|| DomainError::invalid_input(INVALID_DATE_OF_BIRTH))?;

        info!(
            "Resolved {}/{} to {}",
            birth_date.day(),
            birth_date.month(),
            sign
        );

        self.request_horoscope.execute(sign).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connector::MockTextGenerator;
    use crate::domain::ZodiacSign;

    #[tokio::test]
    async fn test_resolves_and_generates() {
        let generator = Arc::new(MockTextGenerator::new("A fine week ahead."));
        let use_case = ZodiacHoroscopeUseCase::new(generator.clone());

        let horoscope = use_case.execute(BirthDate::new(25, 4, 1990)).await.unwrap();

        assert_eq!(horoscope.zodiac_sign(), ZodiacSign::Taurus);
        assert_eq!(horoscope.text(), "A fine week ahead.");
        let calls = generator.calls();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].0.contains("Taurus"));
    }

    #[tokio::test]
    async fn test_unresolved_date_skips_generator() {
        let generator = Arc::new(MockTextGenerator::new("unused"));
        let use_case = ZodiacHoroscopeUseCase::new(generator.clone());

        let err = use_case.execute(BirthDate::new(1, 13, 1990)).await.unwrap_err();

        assert!(err.is_invalid_input());
        assert_eq!(err.message(), INVALID_DATE_OF_BIRTH);
        assert!(generator.calls().is_empty());
    }
}
