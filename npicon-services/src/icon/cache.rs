//! Icon cache for in-memory storage of finished bitmaps.
//!
//! Entries live until they are explicitly removed. There is no eviction:
//! the key space is the icon catalog, which is small and closed.

use std::collections::HashMap;

use npicon_raster::canvas::Bitmap;

use crate::icon::id::IconId;

/// Lookup counters, for diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Lookups answered from the cache.
    pub hits: u64,
    /// Lookups that required a generation.
    pub misses: u64,
}

/// In-memory icon cache.
///
/// A plain map without internal locking. Share it across threads only behind
/// an external mutex.
#[derive(Debug, Default)]
pub struct IconCache {
    /// Cache mapping icon id -> finished bitmap.
    entries: HashMap<IconId, Bitmap>,
    stats: CacheStats,
}

impl IconCache {
    /// Create an empty icon cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a bitmap, counting the hit or miss.
    pub fn lookup(&mut self, id: IconId) -> Option<Bitmap> {
        match self.entries.get(&id) {
            Some(bitmap) => {
                self.stats.hits += 1;
                Some(bitmap.clone())
            },
            None => {
                self.stats.misses += 1;
                None
            },
        }
    }

    /// Get a cached bitmap without touching the counters.
    pub fn get(&self, id: IconId) -> Option<&Bitmap> {
        self.entries.get(&id)
    }

    /// Store a bitmap, returning the one it replaces.
    pub fn insert(&mut self, id: IconId, bitmap: Bitmap) -> Option<Bitmap> {
        self.entries.insert(id, bitmap)
    }

    /// Remove one entry.
    pub fn remove(&mut self, id: IconId) -> Option<Bitmap> {
        self.entries.remove(&id)
    }

    /// Check if an icon is cached.
    pub fn contains(&self, id: IconId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Get cache size (number of cached icons).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every entry. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Hit and miss counters since creation.
    pub fn stats(&self) -> CacheStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use npicon_raster::canvas::PixelCanvas;

    fn bitmap() -> Bitmap {
        PixelCanvas::new(4).into_bitmap()
    }

    #[test]
    fn test_lookup_counts_hits_and_misses() {
        let mut cache = IconCache::new();
        assert!(cache.lookup(IconId::Play).is_none());
        cache.insert(IconId::Play, bitmap());
        assert!(cache.lookup(IconId::Play).is_some());
        assert!(cache.lookup(IconId::Play).is_some());

        assert_eq!(cache.stats(), CacheStats { hits: 2, misses: 1 });
    }

    #[test]
    fn test_remove_and_clear() {
        let mut cache = IconCache::new();
        cache.insert(IconId::Play, bitmap());
        cache.insert(IconId::Stop, bitmap());
        assert_eq!(cache.len(), 2);

        assert!(cache.remove(IconId::Play).is_some());
        assert!(!cache.contains(IconId::Play));
        assert!(cache.contains(IconId::Stop));

        cache.clear();
        assert!(cache.is_empty());
        assert!(cache.get(IconId::Stop).is_none());
    }
}
