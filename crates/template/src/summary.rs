use billgen_sheet::{CellAlign, CellValue, Result, Sheet};

/// Nine-column table header written at row 15.
const TABLE_HEADERS: [&str; 9] = [
    "S.N.",
    "Works Description",
    "Total Amount Provision in Original Contract (NRs.)",
    "Total Amount Provision in Revised Contract (NRs.)",
    "Upto Date Bill Amount (NRs.)",
    "Previous Bill Amount (NRs.)",
    "Present Bill Amount (NRs.)",
    "Remaining Amount",
    "Progress W.R.T Revised Amount",
];

/// A fixed cell of a bill-category row.
enum Entry {
    Text(&'static str),
    Formula(&'static str),
    Blank,
}

use Entry::{Blank, Formula, Text};

/// Bill categories A-D at rows 16-19. The BOQ row spans summed per column
/// are hand-curated against the deployed BOQ layout and must be reproduced
/// verbatim, including the blanks and the literal "0" previous-bill cells.
const CATEGORY_ROWS: [[Entry; 9]; 4] = [
    [
        Text("A"),
        Text("General works"),
        Formula("=SUM(BOQ!F19:F20)"),
        Formula("=SUM(BOQ!K19:K20)"),
        Formula("=SUM(BOQ!K19:K20)"),
        Formula("=BOQ!M23"),
        Formula("=SUM(BOQ!O19:O20)"),
        Formula("=C16-E16"),
        Formula("=E16/C16"),
    ],
    [
        Text("B"),
        Formula("=BOQ!B22"),
        Formula("=BOQ!F23"),
        Blank,
        Formula("=BOQ!K23"),
        Text("0"),
        Formula("=SUM(BOQ!O23)"),
        Formula("=C17-E17"),
        Formula("=E17/C17"),
    ],
    [
        Text("C"),
        Formula("=BOQ!B25"),
        Formula("=SUM(BOQ!F26:F37)"),
        Blank,
        Formula("=SUM(BOQ!K26:K37)"),
        Text("0"),
        Formula("=SUM(BOQ!O26:O37)"),
        Formula("=C18-E18"),
        Formula("=E18/C18"),
    ],
    [
        Text("D"),
        Formula("=BOQ!B35"),
        Formula("=SUM(BOQ!F36:F37)"),
        Formula("=SUM(BOQ!O23:O37)"),
        Formula("=SUM(BOQ!K36:K37)"),
        Text("0"),
        Formula("=SUM(BOQ!O36:O37)"),
        Formula("=C19-E19"),
        Formula("=E19/C19"),
    ],
];

/// Build the IPC Summary sheet: metadata header, the category table, and
/// the totals, VAT, and grand-total rows. Every amount is a formula over
/// the BOQ sheet; nothing is computed here.
pub(crate) fn build() -> Result<Sheet> {
    let mut ws = Sheet::with_name("IPC Summary");

    ws.set_a1("A8", "Contract Bill Summary")?;
    ws.set_formula("A9", "=Data!B5")?; // Name of Project
    ws.set_formula("A10", "=Data!B10")?; // Name of Contractor
    ws.set_formula("A11", "=Data!B8")?; // Contract Identification No
    ws.set_formula("A12", "=Data!B7")?; // Project Implement place
    ws.set_a1("A13", "IPC No.: First")?;

    for (col, header) in TABLE_HEADERS.iter().enumerate() {
        ws.set(14, col, *header);
    }

    for (offset, row) in CATEGORY_ROWS.iter().enumerate() {
        for (col, entry) in row.iter().enumerate() {
            match entry {
                Text(s) => ws.set(15 + offset, col, *s),
                Formula(source) => ws.set(15 + offset, col, CellValue::formula(*source)),
                Blank => {}
            }
        }
    }

    // Totals over the four category rows, per column.
    ws.set_a1("A20", "Total (A+B+C+D)")?;
    ws.set_formula("C20", "=SUM(C16:C19)")?;
    ws.set_formula("D20", "=SUM(D16:D19)")?;
    ws.set_formula("E20", "=SUM(E16:E19)")?;
    ws.set_formula("F20", "=SUM(F16:F19)")?;
    ws.set_formula("G20", "=SUM(G16:G19)")?;
    ws.set_formula("H20", "=C20-E20")?;
    ws.set_formula("I20", "=E20/C20")?;

    // VAT at 13% of (total - baseline), truncated to 2 decimals. Column F
    // applies the flat percentage with no baseline subtraction; the
    // template carries that asymmetry and it is reproduced as-is.
    ws.set_a1("A21", "VAT@13%")?;
    ws.set_formula("C21", "=TRUNC((C20-BOQ!F19)*0.13,2)")?;
    ws.set_formula("D21", "=TRUNC((D20-BOQ!I19)*0.13,2)")?;
    ws.set_formula("E21", "=TRUNC((E20-BOQ!K19)*0.13,2)")?;
    ws.set_formula("F21", "=TRUNC(F20*0.13,2)")?;
    ws.set_formula("G21", "=TRUNC((G20-BOQ!O19)*0.13,2)")?;
    ws.set_formula("H21", "=C21-E21")?;
    ws.set_formula("I21", "=E21/C21")?;

    ws.set_a1("A22", "Grand Total")?;
    ws.set_formula("C22", "=C20+C21")?;
    ws.set_formula("D22", "=D20+D21")?;
    ws.set_formula("E22", "=E20+E21")?;
    ws.set_formula("F22", "=F20+F21")?;
    ws.set_formula("G22", "=G20+G21")?;
    ws.set_formula("H22", "=C22-E22")?;
    ws.set_formula("I22", "=E22/C22")?;

    ws.set_column_width("A", 5.0)?;
    ws.set_column_width("B", 40.0)?;
    for column in ["C", "D", "E", "F", "G", "H", "I"] {
        ws.set_column_width(column, 15.0)?;
    }
    ws.set_alignment(CellAlign::left_center());
    ws.add_border_region("A15:I22")?;

    Ok(ws)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(ws: &Sheet, notation: &str) -> CellValue {
        ws.get_a1(notation).unwrap().cloned().unwrap_or(CellValue::Null)
    }

    #[test]
    fn test_metadata_rows() {
        let ws = build().unwrap();
        assert_eq!(
            cell(&ws, "A8"),
            CellValue::String("Contract Bill Summary".to_string())
        );
        assert_eq!(cell(&ws, "A9"), CellValue::Formula("=Data!B5".to_string()));
        assert_eq!(cell(&ws, "A13"), CellValue::String("IPC No.: First".to_string()));
    }

    #[test]
    fn test_category_a_row() {
        let ws = build().unwrap();
        assert_eq!(cell(&ws, "A16"), CellValue::String("A".to_string()));
        assert_eq!(cell(&ws, "B16"), CellValue::String("General works".to_string()));
        assert_eq!(
            cell(&ws, "C16"),
            CellValue::Formula("=SUM(BOQ!F19:F20)".to_string())
        );
        assert_eq!(cell(&ws, "F16"), CellValue::Formula("=BOQ!M23".to_string()));
        assert_eq!(cell(&ws, "I16"), CellValue::Formula("=E16/C16".to_string()));
    }

    #[test]
    fn test_category_blanks_and_zero_cells() {
        let ws = build().unwrap();
        // Revised-amount column is blank for categories B and C
        assert_eq!(cell(&ws, "D17"), CellValue::Null);
        assert_eq!(cell(&ws, "D18"), CellValue::Null);
        // Previous-bill column carries the literal text "0"
        assert_eq!(cell(&ws, "F17"), CellValue::String("0".to_string()));
        assert_eq!(cell(&ws, "F19"), CellValue::String("0".to_string()));
    }

    #[test]
    fn test_vat_row_truncates_with_baselines() {
        let ws = build().unwrap();
        assert_eq!(
            cell(&ws, "C21"),
            CellValue::Formula("=TRUNC((C20-BOQ!F19)*0.13,2)".to_string())
        );
        assert_eq!(
            cell(&ws, "E21"),
            CellValue::Formula("=TRUNC((E20-BOQ!K19)*0.13,2)".to_string())
        );
        // Previous-bill column: flat 13%, no baseline subtraction
        assert_eq!(
            cell(&ws, "F21"),
            CellValue::Formula("=TRUNC(F20*0.13,2)".to_string())
        );
    }

    #[test]
    fn test_totals_and_grand_total() {
        let ws = build().unwrap();
        assert_eq!(
            cell(&ws, "A20"),
            CellValue::String("Total (A+B+C+D)".to_string())
        );
        assert_eq!(cell(&ws, "G20"), CellValue::Formula("=SUM(G16:G19)".to_string()));
        assert_eq!(cell(&ws, "C22"), CellValue::Formula("=C20+C21".to_string()));
        assert_eq!(cell(&ws, "I22"), CellValue::Formula("=E22/C22".to_string()));
    }

    #[test]
    fn test_styling() {
        let ws = build().unwrap();
        assert_eq!(ws.column_widths().get(&1), Some(&40.0));
        assert_eq!(ws.column_widths().get(&8), Some(&15.0));
        assert!(ws.is_bordered(14, 0));
        assert!(ws.is_bordered(21, 8));
        assert!(!ws.is_bordered(22, 0));
        assert!(ws.alignment().is_some());
    }
}
