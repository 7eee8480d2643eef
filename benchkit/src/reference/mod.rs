//! Read-only reference tables: IC pinouts, datasheets and tutorials.

pub mod ic;
pub mod library;

pub use ic::{IcDatabase, IcLookup, IcRecord, PinInfo, IC_CATEGORIES};
pub use library::{
    Datasheet, DatasheetCatalog, LibraryFilter, LibraryTab, Tutorial, TutorialCatalog,
    TutorialKind, DATASHEET_CATEGORIES, DIFFICULTY_LEVELS, TUTORIAL_CATEGORIES,
};
