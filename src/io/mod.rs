//! This module contains all the components needed to read and write data from files (specifically CSV)
//!
//! The [`reader`] module contains a reader of checkout records from CSV and [`writer`] module contains a fees report writer into CSV.
//! It would be possible to add new file formats by implementing the traits [`CheckoutLogReader`] and [`FeesReportWriter`] respectively.
//!
//! The [`record`] and [`report`] modules contain structs needed to serialize/deserialize data.
//! They are intentionally duplicated from the domain model to decouple the IO details from the domain logic and allow their evolution independently.
//!

mod reader;
mod record;
mod report;
mod writer;

pub use reader::{CheckoutLogReader, CsvCheckoutLogReader};
pub use record::{RecordError, COLUMNS, LOG_DATE_FORMAT};
pub use writer::{CsvFeesReportWriter, FeesReportWriter};
