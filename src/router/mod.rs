pub mod decision;
pub mod handler;
pub mod relocate;

pub use handler::{RouterState, handler};
