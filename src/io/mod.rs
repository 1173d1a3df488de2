/*!
# IO utilities

Saving of collected reviews.
!*/
mod csvwriter;

pub use csvwriter::{CsvWriter, HEADER};
