//! Contract handlers for animal records.

use animal_core::{keys, Animal, LedgerError, LedgerResult, QueryResult};
use animal_state::WorldState;

/// Smart contract providing the animal record operations.
///
/// Stateless: every method borrows the transaction context for the duration
/// of one invocation and holds nothing between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnimalContract;

impl AnimalContract {
    /// Create a new contract handle.
    pub fn new() -> Self {
        Self
    }

    /// Seed the ledger with the base set of animal records.
    ///
    /// Writes three records under `ANIMAL0..=ANIMAL2`, overwriting whatever
    /// those keys currently hold. Re-running it rewrites the same bytes.
    pub fn init_ledger(&self, ctx: &dyn WorldState) -> LedgerResult<()> {
        let seed = [
            Animal::new("Africa", "African Elephant", "grey"),
            Animal::new("Europe", "Cow", "brown"),
            Animal::new("Asia", "Asian Elephant", "grey"),
        ];

        for (i, animal) in seed.iter().enumerate() {
            let key = keys::seed_key(i);
            ctx.put(&key, animal.to_bytes()?)?;
            tracing::debug!(key = %key, name = %animal.name, "seeded animal record");
        }

        Ok(())
    }

    /// Store a new animal record under `key`.
    ///
    /// An existing record under the same key is overwritten; key uniqueness
    /// is whatever the external store enforces.
    pub fn create_animal(
        &self,
        ctx: &dyn WorldState,
        key: &str,
        origin: &str,
        name: &str,
        colour: &str,
    ) -> LedgerResult<()> {
        keys::validate_key(key)?;
        let animal = Animal::new(origin, name, colour);
        ctx.put(key, animal.to_bytes()?)?;
        tracing::debug!(key = %key, "stored animal record");
        Ok(())
    }

    /// Read the animal record stored under `key`.
    ///
    /// A key with no stored value is an error naming the key; a stored value
    /// that fails to decode surfaces as a codec error.
    pub fn query_animal(&self, ctx: &dyn WorldState, key: &str) -> LedgerResult<Animal> {
        keys::validate_key(key)?;
        let bytes = ctx
            .get(key)?
            .ok_or_else(|| LedgerError::not_found(key))?;
        Animal::from_bytes(&bytes)
    }

    /// Scan the full animal window and return every record with its key.
    ///
    /// Entries arrive in ascending key order. An empty window yields an
    /// empty vector, not an error.
    pub fn query_all_animals(&self, ctx: &dyn WorldState) -> LedgerResult<Vec<QueryResult>> {
        let mut results = Vec::new();

        for entry in ctx.range(keys::SCAN_START_KEY, keys::SCAN_END_KEY)? {
            let (key, bytes) = entry?;
            let record = Animal::from_bytes(&bytes)?;
            results.push(QueryResult { key, record });
        }

        Ok(results)
    }
}
