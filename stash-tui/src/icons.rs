//! The icon table: ordered, named glyphs that item records index into.
//!
//! Payload `iconIndex` values are positions in this table. Lookup is
//! bounds-checked; a record pointing past the end fails startup.

use stash::{IconError, IconLookup};

/// One renderable icon: a stable name and the glyph drawn for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconGlyph {
    pub name: &'static str,
    pub symbol: &'static str,
}

/// The built-in table. Order is part of the payload contract.
const BUILTIN_ICONS: &[IconGlyph] = &[
    IconGlyph { name: "sword", symbol: "⚔" },
    IconGlyph { name: "shield", symbol: "⛨" },
    IconGlyph { name: "potion", symbol: "⚗" },
    IconGlyph { name: "gem", symbol: "✦" },
    IconGlyph { name: "ring", symbol: "◎" },
    IconGlyph { name: "hammer", symbol: "⚒" },
    IconGlyph { name: "helm", symbol: "⛑" },
    IconGlyph { name: "scroll", symbol: "✎" },
];

/// Ordered icon collection with bounds-checked index lookup.
pub struct IconTable {
    glyphs: &'static [IconGlyph],
}

impl IconTable {
    pub fn builtin() -> Self {
        Self {
            glyphs: BUILTIN_ICONS,
        }
    }

    pub fn len(&self) -> usize {
        self.glyphs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }
}

impl IconLookup for IconTable {
    type Icon = IconGlyph;

    fn resolve(&self, index: usize) -> Result<IconGlyph, IconError> {
        self.glyphs
            .get(index)
            .copied()
            .ok_or(IconError::IndexOutOfRange {
                index,
                len: self.glyphs.len(),
            })
    }
}
