// SPDX-License-Identifier: PMPL-1.0-or-later

//! Process-wide catalog reference with atomic replacement.
//!
//! Catalogs are never mutated. Reloading translations means building a new
//! [`MessageCatalog`] and swapping it in; readers holding an earlier
//! snapshot keep seeing the old tables until they take a new one.

use super::catalog::MessageCatalog;
use crate::error::Result;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::info;

#[derive(Debug)]
pub struct CatalogHandle {
    current: RwLock<Arc<MessageCatalog>>,
}

impl CatalogHandle {
    pub fn new(catalog: MessageCatalog) -> Self {
        Self {
            current: RwLock::new(Arc::new(catalog)),
        }
    }

    /// Snapshot of the catalog currently served.
    pub fn current(&self) -> Arc<MessageCatalog> {
        // The lock only guards an Arc swap, so a poisoned guard still holds
        // a complete catalog.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in `catalog`, returning the snapshot it replaces.
    pub fn replace(&self, catalog: MessageCatalog) -> Arc<MessageCatalog> {
        let next = Arc::new(catalog);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        info!(
            from = %guard.fingerprint(),
            to = %next.fingerprint(),
            "message catalog replaced"
        );
        std::mem::replace(&mut *guard, next)
    }

    /// Resolve against the current snapshot. Owned because the snapshot may
    /// be replaced as soon as this returns.
    pub fn resolve(&self, locale: &str, key: &str) -> Result<String> {
        let catalog = self.current();
        let text = catalog.resolve(locale, key)?;
        Ok(text.to_string())
    }
}

impl From<MessageCatalog> for CatalogHandle {
    fn from(catalog: MessageCatalog) -> Self {
        Self::new(catalog)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{Locale, MessageTable};
    use std::collections::BTreeMap;
    use std::thread;

    fn catalog_with(title: &str) -> MessageCatalog {
        let mut tables = BTreeMap::new();
        tables.insert(
            Locale::parse("en").unwrap(),
            MessageTable::from_pairs(&[("title", title)]),
        );
        MessageCatalog::new(tables, Locale::parse("en").unwrap()).unwrap()
    }

    #[test]
    fn replace_is_visible_to_new_reads_only() {
        let handle = CatalogHandle::new(catalog_with("Serial Vault"));
        let before = handle.current();

        let previous = handle.replace(catalog_with("Identity Vault"));
        assert_eq!(previous.resolve("en", "title").unwrap(), "Serial Vault");
        assert_eq!(before.resolve("en", "title").unwrap(), "Serial Vault");
        assert_eq!(handle.resolve("en", "title").unwrap(), "Identity Vault");
    }

    #[test]
    fn concurrent_readers() {
        let handle = Arc::new(CatalogHandle::new(catalog_with("Serial Vault")));
        let readers: Vec<_> = (0..4)
            .map(|_| {
                let handle = Arc::clone(&handle);
                thread::spawn(move || {
                    for _ in 0..100 {
                        let text = handle.resolve("zh", "title").unwrap();
                        assert!(text == "Serial Vault" || text == "Identity Vault");
                    }
                })
            })
            .collect();
        handle.replace(catalog_with("Identity Vault"));
        for reader in readers {
            reader.join().unwrap();
        }
        assert_eq!(handle.resolve("en", "title").unwrap(), "Identity Vault");
    }
}
