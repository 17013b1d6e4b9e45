//! The fixed application catalog.
//!
//! Every application the desktop can host is listed here. The id space is a
//! closed enum, so registry operations are total by construction: there is
//! no "unknown application" to guard against at runtime.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AppId {
    Console,
    Files,
    Mail,
    Bank,
    Browser,
    Settings,
    Task,
    Store,
    Cracker,
}

impl AppId {
    pub const ALL: [AppId; 9] = [
        AppId::Console,
        AppId::Files,
        AppId::Mail,
        AppId::Bank,
        AppId::Browser,
        AppId::Settings,
        AppId::Task,
        AppId::Store,
        AppId::Cracker,
    ];

    pub fn title(self) -> &'static str {
        entry(self).title
    }
}

impl fmt::Display for AppId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Static dock/launcher configuration for one application.
///
/// `required` entries always appear in the dock; the rest show up only once
/// the matching product (keyed by `title`) has been purchased in the Store.
#[derive(Debug, Clone, Copy)]
pub struct CatalogEntry {
    pub id: AppId,
    pub title: &'static str,
    pub glyph: char,
    pub required: bool,
}

pub const CATALOG: [CatalogEntry; 9] = [
    CatalogEntry {
        id: AppId::Console,
        title: "Console",
        glyph: '>',
        required: true,
    },
    CatalogEntry {
        id: AppId::Files,
        title: "Files",
        glyph: '/',
        required: true,
    },
    CatalogEntry {
        id: AppId::Mail,
        title: "Mail",
        glyph: '@',
        required: true,
    },
    CatalogEntry {
        id: AppId::Bank,
        title: "Bank",
        glyph: '$',
        required: true,
    },
    CatalogEntry {
        id: AppId::Browser,
        title: "Browser",
        glyph: 'w',
        required: true,
    },
    CatalogEntry {
        id: AppId::Settings,
        title: "Settings",
        glyph: '%',
        required: true,
    },
    CatalogEntry {
        id: AppId::Task,
        title: "Task",
        glyph: '+',
        required: true,
    },
    CatalogEntry {
        id: AppId::Store,
        title: "Store",
        glyph: '^',
        required: true,
    },
    CatalogEntry {
        id: AppId::Cracker,
        title: "Cracker",
        glyph: '#',
        required: false,
    },
];

/// Catalog rows are declared in `AppId` order, so lookup is a direct index.
pub fn entry(id: AppId) -> &'static CatalogEntry {
    &CATALOG[id as usize]
}
