//! Client-side session: the bearer token and the viewer it belongs to.

pub mod context;
pub mod model;
pub mod token_store;

pub use context::SessionContext;
pub use model::Session;
pub use token_store::TokenStore;
