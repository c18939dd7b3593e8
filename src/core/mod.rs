pub mod export;
pub mod import;
pub mod log;
pub mod query;
pub mod store;
pub mod validate;

pub use query::{Scope, VisitFilter};
pub use store::{Store, StoreSettings};
