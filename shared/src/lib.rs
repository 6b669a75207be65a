pub mod models;
pub mod validation;
pub mod tally;

pub use models::*;
pub use validation::*;
pub use tally::Tally;

#[cfg(test)]
mod tests;
