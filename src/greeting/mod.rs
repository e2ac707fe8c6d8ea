/// Greeting domain layer: building the message and its error type.
pub mod errors;
pub mod message;

pub use errors::GreetError;
pub use message::Greeting;
