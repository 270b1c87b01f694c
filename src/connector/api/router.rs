use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::HoroscopeController;

/// Routes commands that need the container to their controllers.
pub struct Router<'a> {
    horoscope_controller: HoroscopeController<'a>,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            horoscope_controller: HoroscopeController::new(container),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Horoscope { day, month, year } => {
                self.horoscope_controller.horoscope(day, month, year).await
            }
            Commands::Sign { .. } | Commands::Serve { .. } => {
                unreachable!("Sign and Serve commands are handled separately in main")
            }
        }
    }
}
