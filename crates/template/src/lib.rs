//! Assembly of the interim-payment-certificate billing workbook.
//!
//! Given the contractor's "Data" and "BOQ" (bill of quantities) sheets, this
//! crate produces an eighteen-sheet workbook: verbatim copies of both inputs,
//! a cover page, an IPC summary, and thirteen measurement sheets. Every
//! derived figure is a spreadsheet formula referencing the copied inputs, so
//! the generated file recalculates itself when edited.

mod copy;
mod cover;
mod items;
mod measurement;
mod summary;

pub use items::{HeaderLayout, MeasurementItem, SummaryRows, MEASUREMENT_ITEMS};

use billgen_sheet::{Book, Result, Sheet};

/// Assemble the full billing workbook from the two input sheets.
///
/// Sheet order is fixed: Data, BOQ, cover page, IPC Summary, then the
/// thirteen measurement sheets in bill order. Input sheets are copied as-is;
/// their shape is not validated, since the formulas simply resolve to empty
/// cells when a referenced row is missing.
pub fn assemble(data: &Sheet, boq: &Sheet) -> Result<Book> {
    let mut book = Book::with_name("generated_bill");

    book.add_sheet("Data", copy::data_sheet(data)?)?;
    book.add_sheet("BOQ", copy::boq_sheet(boq)?)?;
    book.add_sheet("cover page", cover::build()?)?;
    book.add_sheet("IPC Summary", summary::build()?)?;

    for item in &MEASUREMENT_ITEMS {
        tracing::debug!(sheet = item.name, boq_row = item.boq_row, "building measurement sheet");
        book.add_sheet(item.name, measurement::build(item)?)?;
    }

    tracing::debug!(sheets = book.sheet_count(), "workbook assembled");
    Ok(book)
}
