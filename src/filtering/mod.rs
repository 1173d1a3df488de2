/*! Filtering utilities

Filters operate on single review entries.

- [Length] implements [Filter] and rejects comments that are too short to be useful.
- [EntryFilter] chains rating parsing, comment checks and label matching,
  and reports why an entry was rejected through [EntryOutcome].
! */
mod entry;
mod filter;
mod length;

pub use entry::{EntryFilter, EntryOutcome, Tally};
pub use filter::Filter;
pub use length::Length;
