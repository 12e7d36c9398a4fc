//! Table kinds and their merged record schemas
//!
//! Each table kind maps rows of one source sheet into one exported record
//! type. The mappings select fields only; all control flow lives in the
//! merge engine.

use crate::error::Error;
use crate::lang::{Language, LocalizedText};
use crate::row::SheetRow;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The table kinds this tool exports. Closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableKind {
    Item,
    Achievement,
    ClassJob,
    Deity,
    GrandCompany,
    Minion,
    Mount,
    Race,
    Reputation,
    Title,
    Town,
    Tribe,
}

impl TableKind {
    /// Every table kind, in the order they are exported by default
    pub const ALL: [TableKind; 12] = [
        TableKind::Item,
        TableKind::Achievement,
        TableKind::ClassJob,
        TableKind::Deity,
        TableKind::GrandCompany,
        TableKind::Minion,
        TableKind::Mount,
        TableKind::Race,
        TableKind::Reputation,
        TableKind::Title,
        TableKind::Town,
        TableKind::Tribe,
    ];

    /// Name of the source sheet this table is read from
    pub const fn sheet(self) -> &'static str {
        match self {
            TableKind::Item => "Item",
            TableKind::Achievement => "Achievement",
            TableKind::ClassJob => "ClassJob",
            TableKind::Deity => "GuardianDeity",
            TableKind::GrandCompany => "GrandCompany",
            TableKind::Minion => "Companion",
            TableKind::Mount => "Mount",
            TableKind::Race => "Race",
            TableKind::Reputation => "BeastReputationRank",
            TableKind::Title => "Title",
            TableKind::Town => "Town",
            TableKind::Tribe => "Tribe",
        }
    }

    /// Stem of the output file name (`<stem>_table.bin`)
    pub const fn file_stem(self) -> &'static str {
        match self {
            TableKind::Item => "item",
            TableKind::Achievement => "achievement",
            TableKind::ClassJob => "classjob",
            TableKind::Deity => "deity",
            TableKind::GrandCompany => "gc",
            TableKind::Minion => "minion",
            TableKind::Mount => "mount",
            TableKind::Race => "race",
            TableKind::Reputation => "reputation",
            TableKind::Title => "title",
            TableKind::Town => "town",
            TableKind::Tribe => "tribe",
        }
    }
}

impl fmt::Display for TableKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_stem())
    }
}

impl FromStr for TableKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        TableKind::ALL
            .into_iter()
            .find(|kind| kind.file_stem() == s)
            .ok_or_else(|| Error::UnknownTable(s.to_string()))
    }
}

/// Field mapping from source rows into one table kind's merged record.
///
/// `from_row` runs once per distinct row id, on the first row observed with
/// that id; it copies the id and any language-independent flags.
/// `apply_language` runs once per (id, language) pair and populates that
/// language's fields.
pub trait TableRecord: Serialize + DeserializeOwned + Send {
    /// The table kind this record belongs to
    const TABLE: TableKind;

    /// Create the record for a newly observed row id
    fn from_row(row: &SheetRow) -> Self;

    /// Populate this record's fields for one language
    fn apply_language(&mut self, language: Language, row: &SheetRow);

    /// Row identifier this record was created from
    fn id(&self) -> u32;
}

macro_rules! named_record {
    ($(#[$meta:meta])* $name:ident, $kind:expr, $field:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub id: u32,
            pub name: LocalizedText,
        }

        impl TableRecord for $name {
            const TABLE: TableKind = $kind;

            fn from_row(row: &SheetRow) -> Self {
                Self {
                    id: row.id,
                    ..Self::default()
                }
            }

            fn apply_language(&mut self, language: Language, row: &SheetRow) {
                self.name.set(language, row.text($field));
            }

            fn id(&self) -> u32 {
                self.id
            }
        }
    };
}

macro_rules! gendered_record {
    ($(#[$meta:meta])* $name:ident, $kind:expr) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct $name {
            pub id: u32,
            pub masculine: LocalizedText,
            pub feminine: LocalizedText,
        }

        impl TableRecord for $name {
            const TABLE: TableKind = $kind;

            fn from_row(row: &SheetRow) -> Self {
                Self {
                    id: row.id,
                    ..Self::default()
                }
            }

            fn apply_language(&mut self, language: Language, row: &SheetRow) {
                self.masculine.set(language, row.text("Masculine"));
                self.feminine.set(language, row.text("Feminine"));
            }

            fn id(&self) -> u32 {
                self.id
            }
        }
    };
}

named_record!(
    /// An inventory item
    Item,
    TableKind::Item,
    "Name"
);

named_record!(Achievement, TableKind::Achievement, "Name");

named_record!(ClassJob, TableKind::ClassJob, "Name");

named_record!(
    /// A guardian deity
    Deity,
    TableKind::Deity,
    "Name"
);

named_record!(GrandCompany, TableKind::GrandCompany, "Name");

named_record!(
    /// A companion; the sheet stores its name in the Singular column
    Minion,
    TableKind::Minion,
    "Singular"
);

named_record!(Mount, TableKind::Mount, "Singular");

named_record!(Reputation, TableKind::Reputation, "Name");

named_record!(Town, TableKind::Town, "Name");

gendered_record!(
    /// A playable race, with masculine and feminine name forms
    Race,
    TableKind::Race
);

gendered_record!(Tribe, TableKind::Tribe);

/// A player title. Carries masculine and feminine forms plus a flag for
/// whether the title precedes the character name; the flag is copied from
/// the first row observed for an id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Title {
    pub id: u32,
    pub is_prefix: bool,
    pub masculine: LocalizedText,
    pub feminine: LocalizedText,
}

impl TableRecord for Title {
    const TABLE: TableKind = TableKind::Title;

    fn from_row(row: &SheetRow) -> Self {
        Self {
            id: row.id,
            is_prefix: row.flag("IsPrefix"),
            ..Self::default()
        }
    }

    fn apply_language(&mut self, language: Language, row: &SheetRow) {
        self.masculine.set(language, row.text("Masculine"));
        self.feminine.set(language, row.text("Feminine"));
    }

    fn id(&self) -> u32 {
        self.id
    }
}
