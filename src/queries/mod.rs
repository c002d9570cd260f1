//! Query modules for the Brickset SDK.
//!
//! Each module provides a query struct that borrows the [`Gateway`](crate::gateway::Gateway)
//! and exposes one remote endpoint family as typed methods returning `Result<T>`.

pub mod auth;
pub mod media;
pub mod reviews;
pub mod sets;

pub use auth::AuthQuery;
pub use media::MediaQuery;
pub use reviews::ReviewQuery;
pub use sets::{SearchSetsParams, SetQuery};
