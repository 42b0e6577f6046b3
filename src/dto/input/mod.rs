mod booking;
mod credentials;
mod event;

pub use booking::*;
pub use credentials::*;
pub use event::*;
