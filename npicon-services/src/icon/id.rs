//! Icon identifier catalog.
//!
//! [IconId] is the only thing UI code, the documentation renderer and the
//! monitoring dashboards share with the rasterizer. Each builtin identifier
//! has a stable kebab-case name for string-keyed consumers.

use std::fmt;
use std::str::FromStr;

use crate::icon::error::IconError;

macro_rules! icon_catalog {
    ($($(#[$doc:meta])* $variant:ident => $name:literal,)*) => {
        /// Opaque key of an icon.
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum IconId {
            $($(#[$doc])* $variant,)*
            /// An icon registered at runtime under its own name.
            Custom(&'static str),
        }

        impl IconId {
            /// Every builtin identifier, in catalog order.
            pub const BUILTIN: &'static [IconId] = &[$(IconId::$variant,)*];

            /// Stable string name of this identifier.
            pub fn name(&self) -> &'static str {
                match self {
                    $(IconId::$variant => $name,)*
                    IconId::Custom(name) => *name,
                }
            }

            /// Look up a builtin identifier by name.
            ///
            /// Custom identifiers are not known here; see
            /// [ShapeRegistry::key_for_name](crate::icon::ShapeRegistry::key_for_name).
            pub fn from_name(name: &str) -> Option<IconId> {
                match name {
                    $($name => Some(IconId::$variant),)*
                    _ => None,
                }
            }
        }
    };
}

icon_catalog! {
    // Editor and toolbar actions
    /// Check mark.
    Check => "check",
    /// Diagonal cross.
    Close => "close",
    /// Plus sign.
    Plus => "plus",
    /// Minus sign.
    Minus => "minus",
    /// Floppy disk.
    Save => "save",
    /// Closed folder.
    Folder => "folder",
    /// Document with folded corner.
    File => "file",
    /// Circular arrow.
    Refresh => "refresh",
    /// Gear.
    Settings => "settings",
    /// Magnifying glass.
    Search => "search",
    /// Trash can.
    Trash => "trash",
    /// Padlock.
    Lock => "lock",
    /// Two chain links.
    Link => "link",
    /// House.
    Home => "home",
    /// Five-pointed star.
    Star => "star",
    /// Eye, used for visibility toggles.
    Eye => "eye",
    /// Arrow pointing up.
    ArrowUp => "arrow-up",
    /// Arrow pointing down.
    ArrowDown => "arrow-down",
    /// Arrow pointing left.
    ArrowLeft => "arrow-left",
    /// Arrow pointing right.
    ArrowRight => "arrow-right",
    /// Expanded disclosure marker.
    ChevronDown => "chevron-down",
    /// Collapsed disclosure marker.
    ChevronRight => "chevron-right",

    // Documentation viewer and dialogs
    /// Open book.
    Book => "book",
    /// Information badge.
    Info => "info",
    /// Question badge.
    Question => "question",
    /// Warning triangle.
    Warning => "warning",
    /// Error badge.
    Error => "error",

    // Audio monitoring dashboard
    /// Play triangle.
    Play => "play",
    /// Two pause bars.
    Pause => "pause",
    /// Stop square.
    Stop => "stop",
    /// Record dot.
    Record => "record",
    /// Loudspeaker with sound waves.
    Speaker => "speaker",
    /// Loudspeaker with a cross.
    Mute => "mute",
    /// Microphone on a stand.
    Microphone => "microphone",
    /// Rising level bars.
    LevelMeter => "level-meter",
}

impl IconId {
    /// Returns `true` for [IconId::Custom] identifiers.
    pub fn is_custom(&self) -> bool {
        matches!(self, IconId::Custom(_))
    }
}

impl fmt::Display for IconId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IconId {
    type Err = IconError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        IconId::from_name(s).ok_or_else(|| IconError::UnknownIcon(s.to_string()))
    }
}
