//! Audio output: the handle/backend traits and their `rodio` implementation.

mod probe;
mod sink;
mod types;

pub use sink::RodioBackend;
pub use types::{AudioBackend, AudioHandle};

#[cfg(test)]
pub(crate) mod fake;
#[cfg(test)]
mod tests;
