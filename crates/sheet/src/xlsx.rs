use crate::book::Book;
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use crate::sheet::{CellAlign, HorizontalAlign, Sheet, VerticalAlign};
use calamine::{open_workbook, Data, Reader, Xlsx, XlsxError};
use rust_xlsxwriter::{Format, FormatAlign, FormatBorder, Formula, Workbook, Worksheet};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Convert calamine Data to CellValue
fn data_to_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Empty => CellValue::Null,
        Data::Bool(b) => CellValue::Bool(*b),
        Data::Int(i) => CellValue::Int(*i),
        Data::Float(f) => CellValue::Float(*f),
        Data::String(s) => CellValue::String(s.clone()),
        Data::DateTime(dt) => {
            // Excel stores dates as serial days since 1899-12-30
            CellValue::Float(dt.as_f64())
        }
        Data::DateTimeIso(s) => CellValue::String(s.clone()),
        Data::DurationIso(s) => CellValue::String(s.clone()),
        Data::Error(e) => CellValue::String(format!("#ERROR: {e:?}")),
    }
}

impl Sheet {
    /// Load a specific sheet from an Excel file by name.
    ///
    /// Cells are read untyped with no header row assumed; a missing sheet
    /// name is an error.
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be opened, sheet not found, or read fails.
    pub fn from_xlsx_sheet<P: AsRef<Path>>(path: P, sheet_name: &str) -> Result<Self> {
        let mut workbook: Xlsx<BufReader<File>> = open_workbook(path.as_ref())
            .map_err(|e: XlsxError| SheetError::Xlsx(e.to_string()))?;

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|e: XlsxError| SheetError::Xlsx(e.to_string()))?;

        let mut data: Vec<Vec<CellValue>> = Vec::new();
        for row in range.rows() {
            let row_data: Vec<CellValue> = row.iter().map(data_to_cell_value).collect();
            data.push(row_data);
        }

        let mut sheet = Sheet::with_name(sheet_name);
        *sheet.data_mut() = data;
        Ok(sheet)
    }
}

impl Book {
    /// Save the book to an Excel file.
    ///
    /// Writes every sheet in insertion order with its literal values and
    /// formula strings, column widths, default alignment, thin-bordered
    /// regions (blanks are written so borders cover unpopulated cells), and
    /// merged ranges (only the top-left value survives, matching the
    /// consuming application's merge semantics).
    ///
    /// # Errors
    ///
    /// Returns error if file cannot be created or written.
    pub fn save_as_xlsx<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let mut workbook = Workbook::new();

        for (name, sheet) in self.sheets() {
            let worksheet = workbook.add_worksheet();
            worksheet
                .set_name(name)
                .map_err(|e| SheetError::Xlsx(e.to_string()))?;

            write_sheet(worksheet, sheet)?;
        }

        workbook
            .save(path.as_ref())
            .map_err(|e| SheetError::Xlsx(e.to_string()))?;

        Ok(())
    }
}

fn write_sheet(worksheet: &mut Worksheet, sheet: &Sheet) -> Result<()> {
    let base_format = sheet.alignment().map(alignment_format);
    let border_format = base_format
        .clone()
        .unwrap_or_else(Format::new)
        .set_border(FormatBorder::Thin);

    for (col, width) in sheet.column_widths() {
        let col_num = col_num(*col)?;
        worksheet
            .set_column_width(col_num, *width)
            .map_err(|e| SheetError::Xlsx(e.to_string()))?;
    }

    // Merged ranges first: merge with a blank, then overwrite the top-left
    // cell with its value using the same format.
    for region in sheet.merged_ranges() {
        let (top_row, top_col) = region.top_left();
        let format = if sheet.is_bordered(top_row, top_col) {
            border_format.clone()
        } else {
            base_format.clone().unwrap_or_else(Format::new)
        };

        worksheet
            .merge_range(
                row_num(region.first_row)?,
                col_num(region.first_col)?,
                row_num(region.last_row)?,
                col_num(region.last_col)?,
                "",
                &format,
            )
            .map_err(|e| SheetError::Xlsx(e.to_string()))?;

        if let Some(value) = sheet.get(top_row, top_col) {
            write_cell(worksheet, top_row, top_col, value, Some(&format))?;
        }
    }

    // Cell values; cells covered by a merge were handled above.
    for (row_idx, row) in sheet.data().iter().enumerate() {
        for (col_idx, cell) in row.iter().enumerate() {
            if sheet.merge_covering(row_idx, col_idx).is_some() {
                continue;
            }

            let format = if sheet.is_bordered(row_idx, col_idx) {
                Some(&border_format)
            } else {
                base_format.as_ref()
            };

            write_cell(worksheet, row_idx, col_idx, cell, format)?;
        }
    }

    // Bordered regions extend over unpopulated cells; write blanks there so
    // the border is visible.
    for region in sheet.border_regions() {
        for row_idx in region.first_row..=region.last_row {
            for col_idx in region.first_col..=region.last_col {
                let populated = sheet
                    .get(row_idx, col_idx)
                    .is_some_and(|cell| !cell.is_null());
                if populated || sheet.merge_covering(row_idx, col_idx).is_some() {
                    continue;
                }

                worksheet
                    .write_blank(row_num(row_idx)?, col_num(col_idx)?, &border_format)
                    .map_err(|e| SheetError::Xlsx(e.to_string()))?;
            }
        }
    }

    Ok(())
}

fn write_cell(
    worksheet: &mut Worksheet,
    row: usize,
    col: usize,
    cell: &CellValue,
    format: Option<&Format>,
) -> Result<()> {
    let row_num = row_num(row)?;
    let col_num = col_num(col)?;

    let result = match (cell, format) {
        (CellValue::Null, _) => Ok(worksheet),
        (CellValue::Bool(b), None) => worksheet.write_boolean(row_num, col_num, *b),
        (CellValue::Bool(b), Some(f)) => {
            worksheet.write_boolean_with_format(row_num, col_num, *b, f)
        }
        // Excel stores all numbers as f64, so integers > 2^53 may lose
        // precision
        (CellValue::Int(i), None) => worksheet.write_number(row_num, col_num, *i as f64),
        (CellValue::Int(i), Some(f)) => {
            worksheet.write_number_with_format(row_num, col_num, *i as f64, f)
        }
        (CellValue::Float(value), None) => worksheet.write_number(row_num, col_num, *value),
        (CellValue::Float(value), Some(f)) => {
            worksheet.write_number_with_format(row_num, col_num, *value, f)
        }
        (CellValue::String(s), None) => worksheet.write_string(row_num, col_num, s),
        (CellValue::String(s), Some(f)) => {
            worksheet.write_string_with_format(row_num, col_num, s, f)
        }
        (CellValue::Formula(source), None) => {
            worksheet.write_formula(row_num, col_num, Formula::new(source))
        }
        (CellValue::Formula(source), Some(f)) => {
            worksheet.write_formula_with_format(row_num, col_num, Formula::new(source), f)
        }
    };

    result.map_err(|e| SheetError::Xlsx(e.to_string()))?;
    Ok(())
}

fn alignment_format(align: CellAlign) -> Format {
    let format = Format::new().set_align(match align.horizontal {
        HorizontalAlign::Left => FormatAlign::Left,
        HorizontalAlign::Center => FormatAlign::Center,
        HorizontalAlign::Right => FormatAlign::Right,
    });
    format.set_align(match align.vertical {
        VerticalAlign::Top => FormatAlign::Top,
        VerticalAlign::Center => FormatAlign::VerticalCenter,
        VerticalAlign::Bottom => FormatAlign::Bottom,
    })
}

fn row_num(row: usize) -> Result<u32> {
    u32::try_from(row).map_err(|_| SheetError::Xlsx("Row index overflow".to_string()))
}

fn col_num(col: usize) -> Result<u16> {
    u16::try_from(col).map_err(|_| SheetError::Xlsx("Column index overflow".to_string()))
}
