pub mod container;
pub mod controller;
pub mod error;
pub mod router;
pub mod server;

pub use container::{ConfigError, Container, ContainerConfig};
pub use error::ApiError;
pub use router::Router;
pub use server::{app, serve};
