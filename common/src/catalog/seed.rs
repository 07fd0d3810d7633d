//! First-run population of an empty store.

use super::store::{PenguinStore, StoreError};
use crate::model::penguin::PenguinFields;

/// What [`seed_if_empty`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    /// The store was empty and this many records were created.
    Seeded(usize),
    /// The store already held records; nothing was written.
    AlreadyPopulated,
}

fn fields(
    species: &str,
    habitat: &str,
    height: &str,
    diet: &str,
    fun_fact: &str,
    image_url: &str,
) -> PenguinFields {
    PenguinFields {
        species: species.to_string(),
        habitat: habitat.to_string(),
        height: height.to_string(),
        diet: diet.to_string(),
        fun_fact: fun_fact.to_string(),
        image_url: Some(image_url.to_string()),
        is_favorite: false,
    }
}

/// The three canonical records written into an empty store, in creation order.
pub fn default_penguins() -> [PenguinFields; 3] {
    [
        fields(
            "Emperor Penguin",
            "Antarctica",
            "100-130 cm",
            "Fish, squid, and krill",
            "Emperor penguins can dive deeper than any other bird, reaching depths of over 500 meters!",
            "🐧",
        ),
        fields(
            "King Penguin",
            "Subantarctic islands",
            "85-95 cm",
            "Fish and squid",
            "King penguins have the longest breeding cycle of any penguin species, taking 14-16 months!",
            "👑🐧",
        ),
        fields(
            "Adelie Penguin",
            "Antarctica",
            "60-70 cm",
            "Krill and fish",
            "Adelie penguins build nests out of stones and can steal stones from their neighbors!",
            "🐧",
        ),
    ]
}

/// Creates the default records if, and only if, `store` lists nothing.
///
/// Creates are issued one at a time, each awaited before the next, so the
/// records land in a deterministic order. The first failing create aborts the
/// run; records created before it stay in the store.
///
/// The emptiness check and the creates are not atomic: a concurrent writer
/// between the two can still end up next to a freshly seeded set.
pub async fn seed_if_empty<S>(store: &S) -> Result<SeedOutcome, StoreError>
where
    S: PenguinStore + ?Sized,
{
    if !store.list().await?.is_empty() {
        return Ok(SeedOutcome::AlreadyPopulated);
    }

    let defaults = default_penguins();
    let count = defaults.len();
    for fields in defaults {
        store.create(fields).await?;
    }
    Ok(SeedOutcome::Seeded(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::MemoryStore;

    #[tokio::test]
    async fn test_seeds_empty_store_in_order() {
        let store = MemoryStore::new();
        assert_eq!(seed_if_empty(&store).await, Ok(SeedOutcome::Seeded(3)));

        let species: Vec<_> = store.records().into_iter().map(|p| p.species).collect();
        assert_eq!(
            species,
            vec!["Emperor Penguin", "King Penguin", "Adelie Penguin"]
        );
    }

    #[tokio::test]
    async fn test_populated_store_is_left_alone() {
        let store = MemoryStore::new();
        let [first, ..] = default_penguins();
        store.create(first).await.unwrap();

        assert_eq!(seed_if_empty(&store).await, Ok(SeedOutcome::AlreadyPopulated));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_emperor_defaults() {
        let [emperor, king, _] = default_penguins();
        assert_eq!(emperor.habitat, "Antarctica");
        assert_eq!(emperor.height, "100-130 cm");
        assert_eq!(emperor.diet, "Fish, squid, and krill");
        assert!(emperor.fun_fact.contains("500 meters"));
        assert_eq!(emperor.image_url.as_deref(), Some("🐧"));
        assert_eq!(king.image_url.as_deref(), Some("👑🐧"));
        assert!(default_penguins().iter().all(|p| !p.is_favorite));
    }
}
