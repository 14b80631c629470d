use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! id_newtype {
    ($name:ident) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        pub struct $name(pub i64);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

id_newtype!(ArtworkId);

pub const PLACE_OF_ORIGIN_FALLBACK: &str = "Place of origin is not available";
pub const INSCRIPTIONS_FALLBACK: &str = "Inscription is not available";

/// 1-indexed catalog page. There is no upper bound; pages past the end of the
/// catalog are valid and simply come back empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PageNumber(u32);

impl PageNumber {
    pub const FIRST: PageNumber = PageNumber(1);

    /// Returns `None` for zero.
    pub fn new(value: u32) -> Option<Self> {
        (value >= 1).then_some(Self(value))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_first(self) -> bool {
        self.0 == 1
    }

    pub fn previous(self) -> Option<Self> {
        Self::new(self.0 - 1)
    }

    pub fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One normalized catalog record as displayed in the grid.
///
/// `place_of_origin` and `inscriptions` are always populated (see
/// [`PLACE_OF_ORIGIN_FALLBACK`] and [`INSCRIPTIONS_FALLBACK`]); every other
/// field is carried over from the wire record untouched, including absence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub id: Option<ArtworkId>,
    pub title: Option<String>,
    pub place_of_origin: String,
    pub artist_display: Option<String>,
    pub inscriptions: String,
    pub date_start: Option<i64>,
    pub date_end: Option<i64>,
}

impl Row {
    /// Row key used for selection. Rows without an id cannot be selected.
    pub fn key(&self) -> Option<ArtworkId> {
        self.id
    }
}

/// Fields the grid exposes as plain-text columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowField {
    Title,
    PlaceOfOrigin,
    ArtistDisplay,
    Inscriptions,
    DateStart,
    DateEnd,
}

impl RowField {
    pub const ALL: [RowField; 6] = [
        RowField::Title,
        RowField::PlaceOfOrigin,
        RowField::ArtistDisplay,
        RowField::Inscriptions,
        RowField::DateStart,
        RowField::DateEnd,
    ];

    pub fn field_name(self) -> &'static str {
        match self {
            RowField::Title => "title",
            RowField::PlaceOfOrigin => "place_of_origin",
            RowField::ArtistDisplay => "artist_display",
            RowField::Inscriptions => "inscriptions",
            RowField::DateStart => "date_start",
            RowField::DateEnd => "date_end",
        }
    }

    pub fn header(self) -> &'static str {
        match self {
            RowField::Title => "Title",
            RowField::PlaceOfOrigin => "Place of Origin",
            RowField::ArtistDisplay => "Artist Display",
            RowField::Inscriptions => "Inscriptions",
            RowField::DateStart => "Date Start",
            RowField::DateEnd => "Date End",
        }
    }

    /// Display text for this field of `row`; absent values render empty.
    pub fn display(self, row: &Row) -> String {
        match self {
            RowField::Title => row.title.clone().unwrap_or_default(),
            RowField::PlaceOfOrigin => row.place_of_origin.clone(),
            RowField::ArtistDisplay => row.artist_display.clone().unwrap_or_default(),
            RowField::Inscriptions => row.inscriptions.clone(),
            RowField::DateStart => row.date_start.map(|y| y.to_string()).unwrap_or_default(),
            RowField::DateEnd => row.date_end.map(|y| y.to_string()).unwrap_or_default(),
        }
    }
}
