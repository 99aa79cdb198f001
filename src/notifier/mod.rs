pub mod card;
pub mod handler;
pub mod thumbnail;

pub use handler::{NotifierState, handler};
