//! Date helpers and a library late fees report generator.
//!
//! The [`dates`] module formats dates and generates ranges of consecutive days.
//! The fees report is produced by [`processors::fees_report`], which puts together
//! the CSV readers and writers from [`io`] with the domain logic in [`fees`].

pub mod dates;
pub mod fees;
pub mod io;
pub mod processors;
