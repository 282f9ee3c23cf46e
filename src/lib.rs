//! # intacct-rs
//!
//! Typed builders for Intacct XML API function requests.
//!
//! Every API operation is a [`Function`](functions::Function): a value object
//! that is populated through setters, validates its required fields and
//! then writes itself as a `<function controlid="...">` block into a shared
//! [`XmlWriter`].
//!
//! ```
//! use intacct_rs::XmlWriter;
//! use intacct_rs::functions::{Function, projects::TimesheetDelete};
//!
//! let mut delete = TimesheetDelete::new(Some("unittest"))?;
//! delete.set_record_no(1234);
//!
//! let mut xml = XmlWriter::new();
//! xml.start_document()?;
//! delete.write_xml(&mut xml)?;
//! assert!(xml.flush()?.contains("<keys>1234</keys>"));
//! # Ok::<(), intacct_rs::Error>(())
//! ```
//!
//! ## Errors
//!
//! Missing required fields are reported as [`Error::InvalidArgument`] whose
//! display form is the exact message the Intacct API documents, e.g.
//! `Employee ID is required for create`. The error carries a
//! [`SpanTrace`](tracing_error::SpanTrace); install
//! `tracing_error::ErrorLayer` in your subscriber to have it populated.

#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

#[macro_use]
extern crate tracing;

pub mod error;
pub mod field_types;
pub mod functions;
pub mod xml;

pub use error::{Error, Result};
pub use field_types::{CustomFieldValue, CustomFields, DateType};
pub use xml::{WriterConfig, XmlWriter};
