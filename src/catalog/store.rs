use tracing::{debug, warn};

use crate::catalog::{default_image_set, now_iso, WorkDraft, WorkItem, DEFAULT_IMAGES};
use crate::error::Result;
use crate::storage::{KeyValueStorage, DATA_KEY, ITEMS_KEY};

/// The canonical catalog list plus its persisted mirror.
///
/// Every mutation re-serializes the full list once and writes it under both
/// well-known keys, so the admin and public read paths never diverge. The
/// storage backend is injected; tests run against `MemoryStorage`.
pub struct CatalogStore<S: KeyValueStorage> {
    storage: S,
}

impl<S: KeyValueStorage> CatalogStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Read the persisted catalog.
    ///
    /// Returns `None` when nothing has been persisted yet. A value that is
    /// present but unparseable is a hard error, never silently replaced:
    /// overwriting a corrupted store with defaults would lose the data a
    /// later hand-repair could still recover.
    pub fn load(&self) -> Result<Option<Vec<WorkItem>>> {
        let raw = match self.storage.get(ITEMS_KEY)? {
            Some(raw) => Some(raw),
            // Compatibility read path for stores written under the legacy key only.
            None => self.storage.get(DATA_KEY)?,
        };

        match raw {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(items) => Ok(Some(items)),
                Err(e) => {
                    warn!("failed to parse stored catalog: {e}");
                    Err(e.into())
                }
            },
            None => Ok(None),
        }
    }

    /// Read the catalog, seeding and persisting `defaults` if absent.
    pub fn load_or_seed(&self, defaults: &[WorkItem]) -> Result<Vec<WorkItem>> {
        if let Some(items) = self.load()? {
            return Ok(items);
        }
        debug!(count = defaults.len(), "seeding empty catalog");
        self.persist(defaults)?;
        Ok(defaults.to_vec())
    }

    /// Append a new work built from `draft`.
    ///
    /// Returns `None` without touching the store when a required field is
    /// missing. Ids are current-time millis, bumped past any collision so
    /// they stay unique even for same-instant creates.
    pub fn create(&self, draft: WorkDraft) -> Result<Option<WorkItem>> {
        if !draft.is_complete() {
            debug!("create skipped: incomplete draft");
            return Ok(None);
        }

        let mut items = self.load()?.unwrap_or_default();

        let mut id = chrono::Utc::now().timestamp_millis();
        while items.iter().any(|item| item.id == id) {
            id += 1;
        }

        let item = WorkItem {
            id,
            title: draft.title,
            category: draft.category,
            description: draft.description,
            image: if draft.image.is_empty() {
                DEFAULT_IMAGES[0].to_string()
            } else {
                draft.image
            },
            images: if draft.images.is_empty() {
                default_image_set()
            } else {
                draft.images
            },
            created_at: now_iso(),
        };

        items.push(item.clone());
        self.persist(&items)?;
        debug!(id = item.id, "created work");

        Ok(Some(item))
    }

    /// Replace the mutable fields of the work with the given id.
    ///
    /// Empty `image`/`images` in the draft keep the item's existing values,
    /// not the global defaults. Returns `None` when the id is unknown or the
    /// draft is incomplete.
    pub fn update(&self, id: i64, draft: WorkDraft) -> Result<Option<WorkItem>> {
        if !draft.is_complete() {
            debug!("update skipped: incomplete draft");
            return Ok(None);
        }

        let mut items = self.load()?.unwrap_or_default();

        let Some(item) = items.iter_mut().find(|item| item.id == id) else {
            debug!(id, "update skipped: no such work");
            return Ok(None);
        };

        item.title = draft.title;
        item.category = draft.category;
        item.description = draft.description;
        if !draft.image.is_empty() {
            item.image = draft.image;
        }
        if !draft.images.is_empty() {
            item.images = draft.images;
        }
        let updated = item.clone();

        self.persist(&items)?;
        debug!(id, "updated work");

        Ok(Some(updated))
    }

    /// Remove the work with the given id. Idempotent; returns whether a
    /// work was actually removed.
    pub fn delete(&self, id: i64) -> Result<bool> {
        let mut items = self.load()?.unwrap_or_default();
        let before = items.len();
        items.retain(|item| item.id != id);
        let removed = items.len() != before;

        self.persist(&items)?;
        if removed {
            debug!(id, "deleted work");
        }

        Ok(removed)
    }

    /// Write the full list under both keys.
    ///
    /// One serialization fans out to both writes; if the second write fails
    /// the whole persist fails and no recovery is attempted.
    pub fn persist(&self, items: &[WorkItem]) -> Result<()> {
        let json = serde_json::to_string(items)?;
        self.storage.set(ITEMS_KEY, &json)?;
        self.storage.set(DATA_KEY, &json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::seed_items;
    use crate::error::AtelierError;
    use crate::storage::MemoryStorage;

    fn store() -> CatalogStore<MemoryStorage> {
        CatalogStore::new(MemoryStorage::new())
    }

    fn draft(title: &str) -> WorkDraft {
        WorkDraft {
            title: title.to_string(),
            category: "Брендинг".to_string(),
            description: "d".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn load_or_seed_persists_defaults_once() {
        let store = store();
        let seeds = seed_items();

        let items = store.load_or_seed(&seeds).unwrap();
        assert_eq!(items, seeds);

        // Second load reads the persisted copy, not the defaults.
        assert_eq!(store.load().unwrap(), Some(seeds));
    }

    #[test]
    fn create_round_trip_applies_default_images_and_fresh_id() {
        let store = store();
        let seeds = store.load_or_seed(&seed_items()).unwrap();
        let prior_ids: Vec<i64> = seeds.iter().map(|i| i.id).collect();

        let created = store.create(draft("A")).unwrap().expect("valid draft");
        assert_eq!(created.image, DEFAULT_IMAGES[0]);
        assert_eq!(created.images, default_image_set());
        assert!(!prior_ids.contains(&created.id));

        let items = store.load().unwrap().unwrap();
        assert_eq!(items.len(), seeds.len() + 1);
        assert_eq!(items.last(), Some(&created));
    }

    #[test]
    fn create_ids_unique_within_one_instant() {
        let store = store();
        let a = store.create(draft("A")).unwrap().unwrap();
        let b = store.create(draft("B")).unwrap().unwrap();
        let c = store.create(draft("C")).unwrap().unwrap();
        assert_ne!(a.id, b.id);
        assert_ne!(b.id, c.id);
        assert_ne!(a.id, c.id);
    }

    #[test]
    fn create_incomplete_draft_is_a_no_op() {
        let store = store();
        store.load_or_seed(&seed_items()).unwrap();

        let result = store.create(WorkDraft::default()).unwrap();
        assert!(result.is_none());
        assert_eq!(store.load().unwrap().unwrap().len(), 3);
    }

    #[test]
    fn update_preserves_existing_images_on_empty_draft_images() {
        let store = store();
        let mut d = draft("A");
        d.image = "x".to_string();
        d.images = vec!["x".to_string(), "y".to_string()];
        let created = store.create(d).unwrap().unwrap();

        let updated = store
            .update(created.id, draft("A2"))
            .unwrap()
            .expect("known id");
        assert_eq!(updated.title, "A2");
        assert_eq!(updated.image, "x");
        assert_eq!(updated.images, vec!["x".to_string(), "y".to_string()]);
    }

    #[test]
    fn update_unknown_id_is_a_no_op() {
        let store = store();
        let seeds = store.load_or_seed(&seed_items()).unwrap();

        let result = store.update(999, draft("A")).unwrap();
        assert!(result.is_none());
        assert_eq!(store.load().unwrap().unwrap(), seeds);
    }

    #[test]
    fn delete_is_idempotent() {
        let store = store();
        let seeds = store.load_or_seed(&seed_items()).unwrap();

        assert!(!store.delete(999).unwrap());
        assert_eq!(store.load().unwrap().unwrap(), seeds);

        assert!(store.delete(seeds[0].id).unwrap());
        assert!(!store.delete(seeds[0].id).unwrap());
        assert_eq!(store.load().unwrap().unwrap().len(), seeds.len() - 1);
    }

    #[test]
    fn every_mutation_keeps_both_keys_identical() {
        let store = store();
        store.load_or_seed(&seed_items()).unwrap();
        let created = store.create(draft("A")).unwrap().unwrap();
        store.update(created.id, draft("A2")).unwrap();
        store.delete(1).unwrap();

        let items_raw = store.storage.get(ITEMS_KEY).unwrap().unwrap();
        let data_raw = store.storage.get(DATA_KEY).unwrap().unwrap();
        let items: Vec<WorkItem> = serde_json::from_str(&items_raw).unwrap();
        let data: Vec<WorkItem> = serde_json::from_str(&data_raw).unwrap();
        assert_eq!(items, data);
    }

    #[test]
    fn load_reads_legacy_key_when_canonical_absent() {
        let storage = MemoryStorage::new();
        let seeds = seed_items();
        storage
            .set(DATA_KEY, &serde_json::to_string(&seeds).unwrap())
            .unwrap();

        let store = CatalogStore::new(storage);
        assert_eq!(store.load().unwrap(), Some(seeds));
    }

    #[test]
    fn unparseable_stored_value_is_an_error() {
        let storage = MemoryStorage::new();
        storage.set(ITEMS_KEY, "not json").unwrap();

        let store = CatalogStore::new(storage);
        assert!(matches!(store.load(), Err(AtelierError::Json(_))));
    }
}
