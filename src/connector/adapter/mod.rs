mod mock_text_generator;
mod openai_client;

pub use mock_text_generator::*;
pub use openai_client::*;
