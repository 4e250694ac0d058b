use crate::items::{HeaderLayout, MeasurementItem, SummaryRows};
use billgen_sheet::{column_letters, CellAlign, Result, Sheet};

/// Build one measurement sheet from its static configuration entry.
///
/// Every measurement sheet mirrors the letterhead of sheet "1-1" through
/// formula references, so editing the letterhead once propagates to all of
/// them. The table header, data row, and summary block come from the item's
/// layout variant and summary spec; no quantity is computed locally.
pub(crate) fn build(item: &MeasurementItem) -> Result<Sheet> {
    let mut ws = Sheet::with_name(item.name);

    write_letterhead(&mut ws)?;

    match item.layout {
        HeaderLayout::Reinforcement => write_reinforcement_table(&mut ws, item)?,
        _ => write_standard_table(&mut ws, item)?,
    }

    write_summary(&mut ws, item)?;
    apply_styling(&mut ws, item)?;

    Ok(ws)
}

/// Rows 1-7 and 9-10 mirror sheet "1-1"; row 8 titles the sheet.
fn write_letterhead(ws: &mut Sheet) -> Result<()> {
    for i in 1..=7u32 {
        ws.set_formula(&format!("A{i}"), &format!("='1-1'!A{i}:I{i}"))?;
    }
    ws.set_a1("A8", "Measurement Sheet")?;
    for i in 9..=10u32 {
        ws.set_formula(&format!("A{i}"), &format!("='1-1'!A{i}:I{i}"))?;
    }
    Ok(())
}

/// Single-row header at row 12 plus the BOQ-referencing data row at 13.
fn write_standard_table(ws: &mut Sheet, item: &MeasurementItem) -> Result<()> {
    for (col, header) in item.layout.columns().iter().enumerate() {
        ws.set(11, col, *header);
    }

    ws.set_formula("A13", &format!("=BOQ!A{}", item.boq_row))?;
    ws.set_formula("B13", &format!("=BOQ!B{}", item.boq_row))?;
    ws.set_a1("C13", item.unit)?;

    Ok(())
}

/// Two-row header at rows 13-14 with four repeated bar-type blocks, the
/// data row at 15, and the merges that tie the stacked header cells
/// together.
fn write_reinforcement_table(ws: &mut Sheet, item: &MeasurementItem) -> Result<()> {
    for (col, header) in HeaderLayout::REINFORCEMENT_TOP.iter().enumerate() {
        ws.set(12, col, *header);
    }
    for (col, header) in HeaderLayout::REINFORCEMENT_SUB.iter().enumerate() {
        ws.set(13, col, *header);
    }

    ws.set_formula("A15", &format!("=BOQ!A{}", item.boq_row))?;
    ws.set_formula("B15", &format!("=BOQ!B{}", item.boq_row))?;
    ws.set_a1("C15", "m3")?;

    for range in ["A13:A14", "B13:B14", "C13:C14", "V13:W13", "V14:W14"] {
        ws.merge_range(range)?;
    }

    Ok(())
}

fn write_summary(ws: &mut Sheet, item: &MeasurementItem) -> Result<()> {
    match item.summary {
        SummaryRows::Block {
            label_col,
            value_col,
            first_row,
            total,
            previous_label,
            previous,
            this_bill,
        } => {
            ws.set_a1(&format!("{label_col}{first_row}"), "Total Quantity")?;
            ws.set_formula(&format!("{value_col}{first_row}"), total)?;

            ws.set_a1(&format!("{label_col}{}", first_row + 1), previous_label)?;
            ws.set_formula(&format!("{value_col}{}", first_row + 1), previous)?;

            ws.set_a1(&format!("{label_col}{}", first_row + 2), "This Bill Quantity")?;
            ws.set_formula(&format!("{value_col}{}", first_row + 2), this_bill)?;
        }
        SummaryRows::ReinforcementKg {
            total,
            total_mt,
            previous,
            this_bill,
        } => {
            ws.set_a1("T16", "Total Quantity in KG")?;
            ws.set_formula("X16", total)?;

            ws.set_a1("T17", "Total Quantity MT")?;
            ws.set_formula("X17", total_mt)?;

            ws.set_a1("T18", "Pervious Bill Quantity")?;
            ws.set_formula("X18", previous)?;

            ws.set_a1("T19", "This Bill Quantity")?;
            ws.set_formula("X19", this_bill)?;
        }
    }
    Ok(())
}

fn apply_styling(ws: &mut Sheet, item: &MeasurementItem) -> Result<()> {
    ws.set_alignment(CellAlign::left_center());

    if item.layout == HeaderLayout::Reinforcement {
        for col in 0..24 {
            ws.set_column_width(&column_letters(col), 8.0)?;
        }
        return Ok(());
    }

    ws.set_column_width("A", 5.0)?;
    ws.set_column_width("B", 40.0)?;
    ws.set_column_width("C", 8.0)?;
    ws.set_column_width("D", 5.0)?;
    for column in ["E", "F", "G", "H"] {
        ws.set_column_width(column, 10.0)?;
    }
    if item.layout.has_extra_columns() {
        for column in ["I", "J", "K", "L"] {
            ws.set_column_width(column, 10.0)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::MEASUREMENT_ITEMS;
    use billgen_sheet::CellValue;

    fn item(name: &str) -> &'static MeasurementItem {
        MEASUREMENT_ITEMS.iter().find(|i| i.name == name).unwrap()
    }

    fn cell(ws: &Sheet, notation: &str) -> CellValue {
        ws.get_a1(notation).unwrap().cloned().unwrap_or(CellValue::Null)
    }

    #[test]
    fn test_letterhead_mirrors_sheet_1_1() {
        let ws = build(item("3-3")).unwrap();
        assert_eq!(cell(&ws, "A1"), CellValue::Formula("='1-1'!A1:I1".to_string()));
        assert_eq!(cell(&ws, "A7"), CellValue::Formula("='1-1'!A7:I7".to_string()));
        assert_eq!(
            cell(&ws, "A8"),
            CellValue::String("Measurement Sheet".to_string())
        );
        assert_eq!(cell(&ws, "A10"), CellValue::Formula("='1-1'!A10:I10".to_string()));
    }

    #[test]
    fn test_standard_sheet_data_row() {
        let ws = build(item("1-2")).unwrap();
        assert_eq!(cell(&ws, "A13"), CellValue::Formula("=BOQ!A20".to_string()));
        assert_eq!(cell(&ws, "B13"), CellValue::Formula("=BOQ!B20".to_string()));
        assert_eq!(cell(&ws, "C13"), CellValue::String("m3".to_string()));
        // Standard nine-column header at row 12
        assert_eq!(cell(&ws, "A12"), CellValue::String("S.N.".to_string()));
        assert_eq!(cell(&ws, "I12"), CellValue::String("Remarks".to_string()));
    }

    #[test]
    fn test_provisional_sum_unit() {
        let ws = build(item("1-1")).unwrap();
        assert_eq!(cell(&ws, "C13"), CellValue::String("PS".to_string()));
    }

    #[test]
    fn test_summary_blocks_vary_by_sheet() {
        let ws = build(item("3-1")).unwrap();
        assert_eq!(cell(&ws, "E34"), CellValue::String("Total Quantity".to_string()));
        assert_eq!(cell(&ws, "H34"), CellValue::Formula("=SUM(H15:H33)".to_string()));
        assert_eq!(cell(&ws, "H35"), CellValue::Formula("=BOQ!L26".to_string()));
        assert_eq!(cell(&ws, "H36"), CellValue::Formula("=H34-H35".to_string()));

        let ws = build(item("2-1")).unwrap();
        assert_eq!(
            cell(&ws, "E18"),
            CellValue::String("Previous bill Quantity".to_string())
        );
        assert_eq!(cell(&ws, "H17"), CellValue::Formula("=SUM(H14:H15)".to_string()));

        let ws = build(item("4-1")).unwrap();
        assert_eq!(cell(&ws, "G28"), CellValue::String("Total Quantity".to_string()));
        assert_eq!(cell(&ws, "J29"), CellValue::Formula("=BOQ!L36".to_string()));
    }

    #[test]
    fn test_reinforcement_sheet() {
        let ws = build(item("4-2")).unwrap();

        // Two-row header block at rows 13-14, 24 columns wide
        assert_eq!(cell(&ws, "A13"), CellValue::String("S.N.".to_string()));
        assert_eq!(cell(&ws, "D13"), CellValue::String("Main bar".to_string()));
        assert_eq!(cell(&ws, "P13"), CellValue::String("Tie Bar".to_string()));
        assert_eq!(cell(&ws, "C14"), CellValue::String("Unit".to_string()));
        assert_eq!(cell(&ws, "W14"), CellValue::String("Quantity (Q4)".to_string()));
        assert_eq!(ws.data()[13].len(), 24);

        // Data row moves to 15
        assert_eq!(cell(&ws, "A15"), CellValue::Formula("=BOQ!A37".to_string()));
        assert_eq!(cell(&ws, "C15"), CellValue::String("m3".to_string()));

        // KG/MT summary block
        assert_eq!(
            cell(&ws, "T16"),
            CellValue::String("Total Quantity in KG".to_string())
        );
        assert_eq!(cell(&ws, "X16"), CellValue::Formula("=SUM(X15:X15)".to_string()));
        assert_eq!(
            cell(&ws, "X17"),
            CellValue::Formula("=TRUNC(X16/1000,2)".to_string())
        );
        assert_eq!(cell(&ws, "X19"), CellValue::Formula("=X17".to_string()));

        // Header merges
        assert_eq!(ws.merged_ranges().len(), 5);
        assert!(ws.merge_covering(12, 0).is_some()); // A13:A14
        assert!(ws.merge_covering(13, 22).is_some()); // V14:W14

        // 24 uniform column widths
        assert_eq!(ws.column_widths().len(), 24);
        assert!(ws.column_widths().values().all(|w| (*w - 8.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_extra_width_columns() {
        let ws = build(item("3-2")).unwrap();
        assert_eq!(ws.column_widths().get(&11), Some(&10.0)); // column L

        let ws = build(item("3-3")).unwrap();
        assert_eq!(ws.column_widths().get(&11), None);
        assert_eq!(ws.column_widths().get(&7), Some(&10.0)); // column H
    }
}
