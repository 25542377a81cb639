pub mod context;
pub mod handlers;
pub mod resolver;

pub use context::CalcContext;
pub use handlers::Category;
pub use resolver::resolve;
