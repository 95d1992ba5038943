//! Shape registry: the dispatch table from [IconId] to draw routine.

use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use npicon_raster::canvas::PixelCanvas;
use npicon_raster::color::Color;

use crate::icon::catalog;
use crate::icon::id::IconId;

/// Name under which the fallback glyph is cached and reported.
pub const FALLBACK_NAME: &str = "npicon-missing";

/// Identifier of the fallback descriptor.
pub const FALLBACK_ID: IconId = IconId::Custom(FALLBACK_NAME);

/// A draw routine: paints one icon onto a canvas with the given base color.
pub type DrawFn = Arc<dyn Fn(&mut PixelCanvas, Color) + Send + Sync>;

/// Everything needed to rasterize one icon.
#[derive(Clone)]
pub struct IconDescriptor {
    /// Key the descriptor is registered under.
    pub id: IconId,
    /// Base color handed to the draw routine.
    pub base_color: Color,
    draw: DrawFn,
}

impl IconDescriptor {
    /// Create a descriptor from a draw routine.
    pub fn new<F>(id: IconId, base_color: Color, draw: F) -> Self
    where
        F: Fn(&mut PixelCanvas, Color) + Send + Sync + 'static,
    {
        Self {
            id,
            base_color,
            draw: Arc::new(draw),
        }
    }

    /// Create a descriptor sharing an existing draw routine.
    pub fn from_draw_fn(id: IconId, base_color: Color, draw: DrawFn) -> Self {
        Self {
            id,
            base_color,
            draw,
        }
    }

    /// The draw routine.
    pub fn draw_fn(&self) -> &DrawFn {
        &self.draw
    }

    /// Run the draw routine with this descriptor's base color.
    pub fn paint(&self, canvas: &mut PixelCanvas) {
        (self.draw)(canvas, self.base_color);
    }

    /// Returns `true` if this is the fallback descriptor.
    pub fn is_fallback(&self) -> bool {
        self.id == FALLBACK_ID
    }
}

impl fmt::Debug for IconDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IconDescriptor")
            .field("id", &self.id)
            .field("base_color", &self.base_color)
            .finish_non_exhaustive()
    }
}

/// Read-mostly lookup table of icon descriptors.
///
/// Built once at startup. Resolution never fails: identifiers without an
/// entry resolve to the fallback descriptor.
pub struct ShapeRegistry {
    entries: IndexMap<IconId, IconDescriptor>,
    fallback: IconDescriptor,
    warn_unknown: bool,
}

impl ShapeRegistry {
    /// A registry holding only the fallback descriptor.
    pub fn empty() -> Self {
        Self {
            entries: IndexMap::new(),
            fallback: catalog::fallback_descriptor(),
            warn_unknown: true,
        }
    }

    /// A registry holding the whole builtin catalog.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        for descriptor in catalog::builtin_descriptors() {
            registry.entries.insert(descriptor.id, descriptor);
        }
        log::debug!("ShapeRegistry: {} builtin icons registered", registry.len());
        registry
    }

    /// Log unknown identifiers at `warn` (default) or only at `debug`.
    pub fn with_warn_unknown(mut self, warn: bool) -> Self {
        self.warn_unknown = warn;
        self
    }

    /// Resolve an identifier, falling back to the default glyph.
    pub fn resolve(&self, id: IconId) -> &IconDescriptor {
        if id == FALLBACK_ID {
            return &self.fallback;
        }
        match self.entries.get(&id) {
            Some(descriptor) => descriptor,
            None => {
                self.report_unknown(id.name());
                &self.fallback
            },
        }
    }

    /// Resolve a string name, falling back to the default glyph.
    pub fn resolve_name(&self, name: &str) -> &IconDescriptor {
        match self.key_for_name(name) {
            Some(id) => self.resolve(id),
            None => {
                self.report_unknown(name);
                &self.fallback
            },
        }
    }

    /// Map a name to a registered key, builtin or custom.
    ///
    /// A registered builtin wins over a custom icon of the same name.
    pub fn key_for_name(&self, name: &str) -> Option<IconId> {
        if let Some(id) = IconId::from_name(name) {
            if self.entries.contains_key(&id) {
                return Some(id);
            }
        }
        self.entries
            .keys()
            .copied()
            .find(|id| id.is_custom() && id.name() == name)
    }

    pub(crate) fn report_unknown(&self, name: &str) {
        if self.warn_unknown {
            log::warn!("ShapeRegistry: unknown icon '{}', using fallback glyph", name);
        } else {
            log::debug!("ShapeRegistry: unknown icon '{}', using fallback glyph", name);
        }
    }

    /// The fallback descriptor.
    pub fn fallback(&self) -> &IconDescriptor {
        &self.fallback
    }

    /// Register a descriptor, replacing and returning any previous entry.
    ///
    /// The fallback descriptor itself cannot be replaced this way.
    pub fn register(&mut self, descriptor: IconDescriptor) -> Option<IconDescriptor> {
        if descriptor.is_fallback() {
            log::warn!("ShapeRegistry: refusing to register over the fallback glyph");
            return None;
        }
        self.entries.insert(descriptor.id, descriptor)
    }

    /// Override the base color of a registered icon.
    ///
    /// Returns `false` if the identifier is not registered.
    pub fn set_base_color(&mut self, id: IconId, color: Color) -> bool {
        match self.entries.get_mut(&id) {
            Some(descriptor) => {
                descriptor.base_color = color;
                true
            },
            None => false,
        }
    }

    /// Registered identifiers, in registration order.
    pub fn ids(&self) -> impl Iterator<Item = IconId> + '_ {
        self.entries.keys().copied()
    }

    /// Returns `true` if `id` has its own entry.
    pub fn contains(&self, id: IconId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of registered descriptors, not counting the fallback.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if only the fallback is available.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for ShapeRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

impl fmt::Debug for ShapeRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ShapeRegistry")
            .field("entries", &self.entries.len())
            .field("warn_unknown", &self.warn_unknown)
            .finish()
    }
}
