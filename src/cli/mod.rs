use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the horoscope HTTP API
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(short, long, default_value = "5000")]
        port: u16,
    },

    /// Print the zodiac sign for a birthday without calling the model
    Sign {
        #[arg(allow_negative_numbers = true)]
        day: i64,

        #[arg(allow_negative_numbers = true)]
        month: i64,
    },

    /// Resolve a birthdate and print a generated horoscope
    Horoscope {
        #[arg(allow_negative_numbers = true)]
        day: i64,

        #[arg(allow_negative_numbers = true)]
        month: i64,

        #[arg(allow_negative_numbers = true)]
        year: i64,
    },
}
