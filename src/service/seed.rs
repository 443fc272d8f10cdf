//! Initial greetings inserted on an empty table.

use crate::error::AppError;
use crate::schema::InsertGreeting;
use crate::store::Storage;

/// `(name, message)` pairs inserted by [`seed_greetings`].
pub const SEED_GREETINGS: [(&str, &str); 3] = [
    ("World", "Hello, World! Welcome to the demo app."),
    ("Python", "Python is a great programming language!"),
    ("Developer", "Keep coding and building awesome things!"),
];

/// Insert [`SEED_GREETINGS`] when there are no greetings yet. Returns the number of rows
/// inserted.
pub async fn seed_greetings(store: &dyn Storage) -> Result<usize, AppError> {
    if !store.get_greetings().await?.is_empty() {
        tracing::debug!("greetings present, skipping seed");
        return Ok(0);
    }
    for (name, message) in SEED_GREETINGS {
        store
            .create_greeting(&InsertGreeting::new(name, message))
            .await?;
    }
    tracing::info!(count = SEED_GREETINGS.len(), "seeded greetings");
    Ok(SEED_GREETINGS.len())
}
