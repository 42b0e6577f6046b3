//!
//! Domain records shared by repositories and services
//!

mod event;
mod ticket;

pub use event::*;
pub use ticket::*;
