/// Command entry points.
pub mod greet;

pub use greet::run;
