//! The bundled icon set.
//!
//! Icons are Feather icon names mapped to single-cell terminal glyphs. The
//! table is turned into an [`IconSet`] once per process and shared read-only
//! between every picker.

use std::collections::HashMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Identifier of an icon in an [`IconSet`] (its name).
pub type IconId = String;

/// A selectable icon.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Icon {
    pub name: IconId,
    pub glyph: String,
}

/// Ordered, read-only collection of icons with a name index.
#[derive(Debug, Clone, Default)]
pub struct IconSet {
    icons: Vec<Icon>,
    index: HashMap<IconId, usize>,
}

impl IconSet {
    /// Entry name that never denotes a real icon.
    pub const RESERVED_NAME: &'static str = "default";

    /// Build a set from `(name, glyph)` pairs, keeping their order.
    ///
    /// The reserved `"default"` entry is skipped, and for repeated names the
    /// first entry wins.
    pub fn from_entries<I, N, G>(entries: I) -> Self
    where
        I: IntoIterator<Item = (N, G)>,
        N: Into<String>,
        G: Into<String>,
    {
        let mut set = Self::default();

        for (name, glyph) in entries {
            let name = name.into();
            if name == Self::RESERVED_NAME || set.index.contains_key(&name) {
                continue;
            }
            set.index.insert(name.clone(), set.icons.len());
            set.icons.push(Icon {
                name,
                glyph: glyph.into(),
            });
        }

        set
    }

    /// The process-wide bundled set.
    pub fn builtin() -> Arc<IconSet> {
        Arc::clone(&BUILTIN)
    }

    pub fn icons(&self) -> &[Icon] {
        &self.icons
    }

    pub fn len(&self) -> usize {
        self.icons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.icons.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Icon> {
        self.index.get(name).map(|&i| &self.icons[i])
    }

    pub fn glyph(&self, name: &str) -> Option<&str> {
        self.get(name).map(|icon| icon.glyph.as_str())
    }
}

static BUILTIN: Lazy<Arc<IconSet>> =
    Lazy::new(|| Arc::new(IconSet::from_entries(FEATHER_GLYPHS.iter().copied())));

// Mirrors the export list of the Feather glyph library, sentinel included.
const FEATHER_GLYPHS: &[(&str, &str)] = &[
    ("default", "?"),
    ("Activity", "∿"),
    ("AlertCircle", "◉"),
    ("AlertTriangle", "⚠"),
    ("Anchor", "⚓"),
    ("Archive", "▤"),
    ("ArrowDown", "↓"),
    ("ArrowLeft", "←"),
    ("ArrowRight", "→"),
    ("ArrowUp", "↑"),
    ("AtSign", "@"),
    ("Award", "✪"),
    ("BarChart", "▆"),
    ("Bell", "⍾"),
    ("Bluetooth", "ᛒ"),
    ("Book", "❐"),
    ("Box", "▣"),
    ("Calendar", "☷"),
    ("Camera", "◘"),
    ("Check", "✓"),
    ("CheckCircle", "✔"),
    ("ChevronDown", "⌄"),
    ("ChevronLeft", "‹"),
    ("ChevronRight", "›"),
    ("ChevronUp", "⌃"),
    ("Circle", "○"),
    ("Clipboard", "⎘"),
    ("Clock", "◷"),
    ("Cloud", "☁"),
    ("Code", "⟨⟩"),
    ("Coffee", "♨"),
    ("Command", "⌘"),
    ("Compass", "✵"),
    ("Copy", "⧉"),
    ("Cpu", "▥"),
    ("Database", "⛁"),
    ("Delete", "⌫"),
    ("Disc", "◎"),
    ("Download", "⤓"),
    ("Droplet", "◍"),
    ("Edit", "✎"),
    ("Eye", "⊙"),
    ("Feather", "❦"),
    ("File", "⎗"),
    ("Filter", "⧩"),
    ("Flag", "⚑"),
    ("Folder", "▰"),
    ("Gift", "❖"),
    ("GitBranch", "⎇"),
    ("Globe", "♁"),
    ("Grid", "▦"),
    ("Hash", "#"),
    ("Heart", "♥"),
    ("HelpCircle", "?"),
    ("Home", "⌂"),
    ("Image", "▨"),
    ("Inbox", "⊔"),
    ("Info", "ℹ"),
    ("Key", "⚿"),
    ("Layers", "≣"),
    ("Link", "⚭"),
    ("List", "☰"),
    ("Lock", "⊡"),
    ("LogIn", "⇥"),
    ("LogOut", "⇤"),
    ("Mail", "✉"),
    ("Map", "⛶"),
    ("MapPin", "⌖"),
    ("Menu", "≡"),
    ("Minus", "−"),
    ("Moon", "☾"),
    ("Music", "♫"),
    ("Pause", "‖"),
    ("Phone", "☎"),
    ("Play", "▶"),
    ("Plus", "+"),
    ("Power", "⏻"),
    ("Printer", "⎙"),
    ("Radio", "⊚"),
    ("RefreshCw", "↻"),
    ("Repeat", "⟳"),
    ("Save", "⊟"),
    ("Scissors", "✂"),
    ("Search", "⌕"),
    ("Send", "➤"),
    ("Settings", "⚙"),
    ("Share", "⇪"),
    ("Shield", "⛨"),
    ("Shuffle", "⤮"),
    ("Slash", "∅"),
    ("Star", "★"),
    ("Sun", "☀"),
    ("Tag", "⌗"),
    ("Terminal", "❯"),
    ("Trash", "⊠"),
    ("Truck", "⛟"),
    ("Tv", "⎚"),
    ("Umbrella", "☂"),
    ("Upload", "⤒"),
    ("User", "☺"),
    ("Users", "⚇"),
    ("Volume", "♪"),
    ("Wifi", "≋"),
    ("Wind", "≈"),
    ("X", "✕"),
    ("Zap", "ϟ"),
    ("ZoomIn", "⊕"),
    ("ZoomOut", "⊖"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_excludes_reserved_name() {
        let set = IconSet::builtin();
        assert!(!set.contains(IconSet::RESERVED_NAME));
        assert_eq!(set.len(), FEATHER_GLYPHS.len() - 1);
    }

    #[test]
    fn test_builtin_is_shared() {
        let a = IconSet::builtin();
        let b = IconSet::builtin();
        assert!(Arc::ptr_eq(&a, &b));
    }

    #[test]
    fn test_builtin_keeps_table_order() {
        let set = IconSet::builtin();
        assert_eq!(set.icons()[0].name, "Activity");
        assert_eq!(set.icons().last().map(|i| i.name.as_str()), Some("ZoomOut"));
        assert_eq!(set.glyph("Home"), Some("⌂"));
    }

    #[test]
    fn test_builtin_names_are_unique() {
        let set = IconSet::builtin();
        for (i, icon) in set.icons().iter().enumerate() {
            assert_eq!(set.get(&icon.name), Some(&set.icons()[i]), "duplicate name {}", icon.name);
        }
    }

    #[test]
    fn test_from_entries_skips_duplicates_and_reserved() {
        let set = IconSet::from_entries([("a", "1"), ("default", "?"), ("b", "2"), ("a", "3")]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.glyph("a"), Some("1"));
        assert_eq!(set.icons()[1].name, "b");
        assert!(set.get("missing").is_none());
    }

    #[test]
    fn test_empty_set() {
        let set = IconSet::from_entries(Vec::<(String, String)>::new());
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
    }
}
