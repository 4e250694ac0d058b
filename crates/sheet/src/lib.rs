//! Book/Sheet/Cell model for billgen
//!
//! Provides the in-memory workbook model used by the bill template
//! assembler: untyped cell values (text, number, bool, or an opaque formula
//! string), sheets with sheet-level styling (column widths, a default
//! alignment, thin-bordered regions, merged ranges), and an
//! insertion-ordered book of uniquely named sheets. Reading and writing
//! xlsx files is handled by `calamine` and `rust_xlsxwriter`.
//!
//! # Examples
//!
//! ```
//! use billgen_sheet::{Book, CellAlign, Sheet};
//!
//! let mut sheet = Sheet::new();
//! sheet.set_alignment(CellAlign::left_center());
//! sheet.set_a1("A8", "Contract Bill Summary").unwrap();
//! sheet.set_formula("A9", "=Data!B5").unwrap();
//!
//! let mut book = Book::new();
//! book.add_sheet("IPC Summary", sheet).unwrap();
//! assert_eq!(book.sheet_names(), vec!["IPC Summary"]);
//! ```
//!
//! Formula strings are never evaluated here; they are written verbatim and
//! left for the consuming spreadsheet application.

mod a1_notation;
mod book;
mod cell;
mod error;
mod sheet;
mod xlsx;

/// Re-export A1 notation helpers.
pub use a1_notation::{column_letters, parse_a1, parse_a1_range, parse_column_letters};
/// Re-export book type.
pub use book::Book;
/// Re-export cell value type.
pub use cell::CellValue;
/// Re-export sheet error types.
pub use error::{Result, SheetError};
/// Re-export sheet types.
pub use sheet::{CellAlign, HorizontalAlign, Region, Sheet, VerticalAlign};
