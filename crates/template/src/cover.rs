use billgen_sheet::{CellAlign, Result, Sheet};

/// Organizational hierarchy labels stamped down column A starting at row 4.
/// Written as formula references so the consuming workbook can resolve them
/// against its defined names.
const HIERARCHY: [&str; 6] = [
    "Government",
    "Ministry",
    "Department",
    "FRSMO",
    "Office",
    "District",
];

/// Build the cover page: fixed-position labels plus formula references into
/// the Data sheet. Positions are constants; nothing here depends on input
/// size.
pub(crate) fn build() -> Result<Sheet> {
    let mut ws = Sheet::with_name("cover page");

    for (i, label) in HIERARCHY.iter().enumerate() {
        ws.set_formula(&format!("A{}", i + 4), &format!("={label}"))?;
    }

    ws.set_formula("A28", "=Data!B5")?; // Name of Project
    ws.set_formula("A29", "=Data!B8")?; // Contract Identification No
    ws.set_formula("A42", "=Data!B4")?; // Bill No.

    ws.set_a1("A54", "Submitted By:")?;
    ws.set_a1("C54", "Submitted to:")?;
    ws.set_formula("A55", "=Data!B10")?; // Name of Contractor
    ws.set_formula("C55", "=Data!F9")?; // Client

    ws.set_column_width("A", 30.0)?;
    ws.set_column_width("C", 30.0)?;
    ws.set_alignment(CellAlign::left_center());

    Ok(ws)
}
