pub mod app;
pub mod config;
pub mod console;
pub mod error;
pub mod logging;
pub mod ops;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod ui;
pub mod util;

#[cfg(test)]
mod test_support;

pub use app::App;
pub use config::Config;
pub use error::{DomainError, NoValue, OperationResult};
pub use state::Memory;
