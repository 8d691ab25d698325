//! Configuration loader and schema types.
//!
//! Settings cover where the catalog and media live, the screen layout, and
//! how the transport buttons behave.

mod load;
mod schema;

pub use schema::*;

#[cfg(test)]
mod tests;
