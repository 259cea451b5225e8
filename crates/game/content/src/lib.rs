//! Dataset loading for the boss catalog.
//!
//! Bosses are maintained in a spreadsheet. This crate turns the spreadsheet's
//! `values` payload (header row followed by data rows) into a validated
//! [`game_core::Dataset`], either from the Google Sheets API or from a local
//! JSON file with the same shape.
//!
//! Content is loaded once at startup and never changes afterwards.

pub mod loaders;

pub use loaders::{
    DatasetSource, FileLoader, LoadResult, SheetLoader, SheetValues, SheetsClient, load_dataset,
};
