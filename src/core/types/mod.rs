//! Core type definition module
//!
//! Message, request and response types shared by the handler and providers.

pub mod message;
pub mod requests;
pub mod responses;

pub use message::*;
pub use requests::*;
pub use responses::*;
