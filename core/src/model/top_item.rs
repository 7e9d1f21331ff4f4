use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Song,
    Album,
}

/// Catalog entry listed under "Top earning".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogItem {
    pub title: &'static str,
    pub artist: &'static str,
    pub kind: ItemKind,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TopEarning {
    pub title: String,
    pub artist: String,
    pub kind: ItemKind,
    pub amount: u64,
}

pub const CATALOG: [CatalogItem; 10] = [
    CatalogItem { title: "Lover", artist: "Taylor Swift", kind: ItemKind::Song },
    CatalogItem { title: "Feather", artist: "Sabrina Carpenter", kind: ItemKind::Song },
    CatalogItem { title: "Sky", artist: "Playboi Carti", kind: ItemKind::Song },
    CatalogItem { title: "Vampire", artist: "Olivia Rodrigo", kind: ItemKind::Song },
    CatalogItem { title: "Paint the Town Red", artist: "Doja Cat", kind: ItemKind::Song },
    CatalogItem { title: "1989 (Taylor's Version)", artist: "Taylor Swift", kind: ItemKind::Album },
    CatalogItem { title: "Emails I Can't Send", artist: "Sabrina Carpenter", kind: ItemKind::Album },
    CatalogItem { title: "Whole Lotta Red", artist: "Playboi Carti", kind: ItemKind::Album },
    CatalogItem { title: "Scarlet", artist: "Doja Cat", kind: ItemKind::Album },
    CatalogItem { title: "GUTS", artist: "Olivia Rodrigo", kind: ItemKind::Album },
];
