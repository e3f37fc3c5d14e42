pub mod task;
pub mod user;

pub use task::*;
pub use user::*;
