pub mod horoscope_controller;
pub mod sign_controller;

pub use horoscope_controller::HoroscopeController;
pub use sign_controller::SignController;
