// SPDX-License-Identifier: LGPL-3.0-only
pub mod icon;
pub mod settings;

// Re-export commonly used types from icon and settings
pub use icon::{IconDescriptor, IconId, IconService, IconState, ShapeRegistry};
pub use settings::{Config, SettingsRegistry};
