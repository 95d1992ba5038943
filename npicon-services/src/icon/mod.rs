//! Procedural Icon System
//!
//! Icons are not shipped as image assets. Each identifier in the catalog maps
//! to a small draw routine that is rasterized on first use and memoized.
//!
//! ```rust
//! use npicon_services::icon::{IconId, IconService};
//!
//! let mut icons = IconService::builtin(32);
//! icons.pregenerate_all();
//!
//! let check = icons.get(IconId::Check);
//! assert_eq!(check.size(), 32);
//! assert_eq!(icons.get(IconId::Check), check);
//! ```

mod cache;
pub mod catalog;
mod error;
pub mod export;
mod id;
mod registry;

pub use cache::{CacheStats, IconCache};
pub use error::IconError;
pub use id::IconId;
pub use registry::{DrawFn, IconDescriptor, ShapeRegistry, FALLBACK_ID, FALLBACK_NAME};

use npicon_raster::canvas::{Bitmap, PixelCanvas};
use npicon_raster::color::Color;

use crate::settings::Config;

/// Default canvas side length.
pub const DEFAULT_ICON_SIZE: u32 = 32;

/// Cache state of one identifier.
///
/// Generation runs to completion inside [IconService::get], so a request is
/// never observed half-way between the two states.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IconState {
    /// No bitmap is cached; the next request generates one.
    Uncached,
    /// A finished bitmap is cached.
    Cached,
}

/// Icon service - main public API for the icon system.
///
/// Owns the shape registry and the bitmap cache. Construct one at startup and
/// pass it by reference to the consumers that need icons.
///
/// The service has no internal locking. It is `Send`, but callers that share
/// it between threads must wrap it in a mutex themselves.
#[derive(Debug)]
pub struct IconService {
    /// Shape registry resolving ids to draw routines.
    registry: ShapeRegistry,
    /// Finished bitmaps.
    cache: IconCache,
    /// Canvas side length for every icon.
    size: u32,
}

impl IconService {
    /// Create a service over an existing registry.
    pub fn new(registry: ShapeRegistry, size: u32) -> Self {
        Self {
            registry,
            cache: IconCache::new(),
            size,
        }
    }

    /// Create a service over the builtin catalog.
    pub fn builtin(size: u32) -> Self {
        Self::new(ShapeRegistry::builtin(), size)
    }

    /// Create a service from loaded settings.
    ///
    /// Applies palette overrides and, if enabled, warms the whole catalog.
    pub fn from_settings(config: &Config) -> Self {
        let icons = &config.icons;
        let registry = ShapeRegistry::builtin().with_warn_unknown(icons.warn_unknown());
        let mut service = Self::new(registry, icons.size());

        for (name, color) in &config.palette {
            match IconId::from_name(name) {
                Some(id) => {
                    service.set_base_color(id, *color);
                },
                None => log::warn!("IconService: ignoring palette entry for unknown icon '{}'", name),
            }
        }

        if icons.pregenerate() {
            service.pregenerate_all();
        }
        service
    }

    /// Canvas side length of every bitmap this service produces.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// The shape registry.
    pub fn registry(&self) -> &ShapeRegistry {
        &self.registry
    }

    /// Get the bitmap of an icon, generating it on first use.
    pub fn get(&mut self, id: IconId) -> Bitmap {
        if let Some(bitmap) = self.cache.lookup(id) {
            return bitmap;
        }
        let bitmap = self.generate(id);
        self.cache.insert(id, bitmap.clone());
        bitmap
    }

    /// Get an icon by its string name.
    ///
    /// Names outside the registry yield the fallback glyph.
    pub fn get_by_name(&mut self, name: &str) -> Bitmap {
        match self.registry.key_for_name(name) {
            Some(id) => self.get(id),
            None => {
                self.registry.report_unknown(name);
                self.get(FALLBACK_ID)
            },
        }
    }

    /// Resolve a string name without generating anything.
    pub fn resolve_name(&self, name: &str) -> &IconDescriptor {
        self.registry.resolve_name(name)
    }

    /// Rasterize one icon from scratch. Never touches the cache.
    fn generate(&self, id: IconId) -> Bitmap {
        let descriptor = self.registry.resolve(id);
        let mut canvas = PixelCanvas::new(self.size);
        descriptor.paint(&mut canvas);
        log::trace!(
            "IconService: generated '{}' ({} painted pixels)",
            id,
            canvas.painted_count()
        );
        canvas.into_bitmap()
    }

    /// Generate every listed icon that is not cached yet.
    ///
    /// Returns the number of bitmaps that were generated.
    pub fn pregenerate(&mut self, ids: &[IconId]) -> usize {
        let mut generated = 0;
        for &id in ids {
            if self.cache.contains(id) {
                continue;
            }
            let bitmap = self.generate(id);
            self.cache.insert(id, bitmap);
            generated += 1;
        }
        log::debug!(
            "IconService: pregenerated {} of {} icons at {}px",
            generated,
            ids.len(),
            self.size
        );
        generated
    }

    /// Generate every registered icon that is not cached yet.
    pub fn pregenerate_all(&mut self) -> usize {
        let ids: Vec<IconId> = self.registry.ids().collect();
        self.pregenerate(&ids)
    }

    /// Drop the cached bitmap of one icon. Returns `true` if one was cached.
    pub fn invalidate(&mut self, id: IconId) -> bool {
        self.cache.remove(id).is_some()
    }

    /// Drop every cached bitmap.
    pub fn invalidate_all(&mut self) {
        log::debug!("IconService: invalidating {} cached icons", self.cache.len());
        self.cache.clear();
    }

    /// Cache state of `id`.
    pub fn state(&self, id: IconId) -> IconState {
        if self.cache.contains(id) {
            IconState::Cached
        } else {
            IconState::Uncached
        }
    }

    /// Register or replace a descriptor and invalidate its cached bitmap.
    pub fn register(&mut self, descriptor: IconDescriptor) -> Option<IconDescriptor> {
        let id = descriptor.id;
        let previous = self.registry.register(descriptor);
        self.invalidate(id);
        previous
    }

    /// Override the base color of an icon and invalidate its cached bitmap.
    pub fn set_base_color(&mut self, id: IconId, color: Color) -> bool {
        let changed = self.registry.set_base_color(id, color);
        if changed {
            self.invalidate(id);
        }
        changed
    }

    /// Number of cached bitmaps.
    pub fn cached_len(&self) -> usize {
        self.cache.len()
    }

    /// Cache hit and miss counters.
    pub fn cache_stats(&self) -> CacheStats {
        self.cache.stats()
    }
}

impl Default for IconService {
    fn default() -> Self {
        Self::builtin(DEFAULT_ICON_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_transitions() {
        let mut service = IconService::default();
        assert_eq!(service.state(IconId::Play), IconState::Uncached);

        service.get(IconId::Play);
        assert_eq!(service.state(IconId::Play), IconState::Cached);

        assert!(service.invalidate(IconId::Play));
        assert_eq!(service.state(IconId::Play), IconState::Uncached);
        assert!(!service.invalidate(IconId::Play));
    }

    #[test]
    fn test_get_is_memoized() {
        let mut service = IconService::default();
        let first = service.get(IconId::Check);
        let second = service.get(IconId::Check);

        assert!(first.ptr_eq(&second));
        assert_eq!(service.cache_stats(), CacheStats { hits: 1, misses: 1 });
    }

    #[test]
    fn test_pregenerate_skips_cached_icons() {
        let mut service = IconService::default();
        service.get(IconId::Stop);

        let generated = service.pregenerate(&[IconId::Stop, IconId::Play, IconId::Play]);
        assert_eq!(generated, 1);
        assert_eq!(service.cached_len(), 2);
        assert_eq!(service.cache_stats().misses, 1);
    }

    #[test]
    fn test_set_base_color_regenerates() {
        let mut service = IconService::default();
        let before = service.get(IconId::Stop);
        assert!(service.set_base_color(IconId::Stop, Color::rgb(1, 2, 3)));
        assert_eq!(service.state(IconId::Stop), IconState::Uncached);

        let after = service.get(IconId::Stop);
        assert_ne!(before, after);
        assert_eq!(after.pixel(16, 16), Color::rgb(1, 2, 3));
    }

    #[test]
    fn test_size_is_honored() {
        let mut service = IconService::builtin(16);
        assert_eq!(service.get(IconId::Record).size(), 16);
        assert_eq!(service.get_by_name("nope").size(), 16);
    }
}
