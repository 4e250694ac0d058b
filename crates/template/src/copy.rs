use billgen_sheet::{column_letters, CellAlign, Result, Sheet};

/// Copy the input Data sheet cell-for-cell into a sheet named "Data".
///
/// Values, including formulas, land at the same positions they came from;
/// only the presentation (widths, alignment) is imposed.
pub(crate) fn data_sheet(source: &Sheet) -> Result<Sheet> {
    let mut ws = Sheet::from_data(source.data().to_vec());
    ws.set_name("Data");

    ws.set_column_width("A", 5.0)?;
    ws.set_column_width("B", 40.0)?;
    ws.set_column_width("F", 30.0)?;
    ws.set_alignment(CellAlign::left_center());

    Ok(ws)
}

/// Column widths of the BOQ sheet, A through S.
const BOQ_WIDTHS: [f64; 19] = [
    5.0, 60.0, 8.0, 10.0, 10.0, 12.0, 10.0, 10.0, 12.0, 10.0, 12.0, 10.0, 12.0, 10.0, 12.0, 10.0,
    12.0, 10.0, 15.0,
];

/// Copy the input BOQ sheet cell-for-cell into a sheet named "BOQ", with
/// the fixed width profile and the bordered item-table region.
pub(crate) fn boq_sheet(source: &Sheet) -> Result<Sheet> {
    let mut ws = Sheet::from_data(source.data().to_vec());
    ws.set_name("BOQ");

    for (col, width) in BOQ_WIDTHS.iter().enumerate() {
        ws.set_column_width(&column_letters(col), *width)?;
    }
    ws.set_alignment(CellAlign::left_center());
    ws.add_border_region("A18:S43")?;

    Ok(ws)
}
