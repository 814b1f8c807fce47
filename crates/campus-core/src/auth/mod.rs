//! Authentication requests and the auth-failure hook.

pub mod hook;
pub mod model;

pub use hook::{AuthFailureHook, NoopAuthFailureHook};
pub use model::{LoginRequest, LoginResponse, RegisterRequest};
