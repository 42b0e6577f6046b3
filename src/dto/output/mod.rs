mod access_token;
mod error_message;
mod event;
mod ticket;

pub use access_token::*;
pub use error_message::*;
pub use event::*;
pub use ticket::*;
