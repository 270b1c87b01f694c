pub mod application;
pub mod cli;
pub mod connector;
pub mod domain;

pub use application::{
    render_prompt, RequestHoroscopeUseCase, TextGenerator, ZodiacHoroscopeUseCase,
    HOROSCOPE_PROMPT_TEMPLATE, HOROSCOPE_TEMPERATURE,
};

pub use cli::Commands;

pub use connector::api::{app, serve, ApiError, ConfigError, Container, ContainerConfig, Router};
pub use connector::{MockTextGenerator, OpenAiClient};

pub use domain::{BirthDate, DomainError, Horoscope, ZodiacSign, INVALID_DATE_OF_BIRTH};
