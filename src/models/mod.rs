pub mod review;
pub mod session;
pub mod set;

pub use review::*;
pub use session::*;
pub use set::*;
