//! Request validation and startup seeding.

mod seed;
mod validation;
pub use seed::{seed_greetings, SEED_GREETINGS};
pub use validation::RequestValidator;
