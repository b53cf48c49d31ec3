//! fieldform validation core
//!
//! Side-effect free validators shared by the form aggregator and the WASM
//! bindings. Every validator takes the raw input and its [`LengthBounds`] and
//! answers a single question: is this value acceptable for the input kind?

pub mod bounds;
pub mod email;
pub mod kind;
pub mod phone;
pub mod state;
pub mod url;

// Re-export all validators
pub use bounds::*;
pub use email::*;
pub use kind::*;
pub use phone::*;
pub use state::*;
pub use url::*;
