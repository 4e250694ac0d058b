use crate::a1_notation::{parse_a1, parse_a1_range, parse_column_letters};
use crate::cell::CellValue;
use crate::error::{Result, SheetError};
use std::collections::BTreeMap;

/// Horizontal cell alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

/// Vertical cell alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

/// Default alignment applied to every populated cell of a sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellAlign {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl CellAlign {
    /// Left/center alignment, the convention used across billing sheets.
    #[must_use]
    pub fn left_center() -> Self {
        CellAlign {
            horizontal: HorizontalAlign::Left,
            vertical: VerticalAlign::Center,
        }
    }
}

/// A rectangular cell region, 0-based inclusive corners
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub first_row: usize,
    pub first_col: usize,
    pub last_row: usize,
    pub last_col: usize,
}

impl Region {
    /// Check whether the region contains a cell
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row >= self.first_row && row <= self.last_row && col >= self.first_col && col <= self.last_col
    }

    /// The top-left corner of the region
    #[must_use]
    pub fn top_left(&self) -> (usize, usize) {
        (self.first_row, self.first_col)
    }
}

/// A sheet representing a 2D grid of cells (row-major storage) plus
/// sheet-level styling: column widths, a default alignment, thin-bordered
/// regions, and merged cell ranges.
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    name: String,
    data: Vec<Vec<CellValue>>,
    column_widths: BTreeMap<usize, f64>,
    alignment: Option<CellAlign>,
    borders: Vec<Region>,
    merges: Vec<Region>,
}

impl Sheet {
    /// Create a new empty sheet
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Sheet1")
    }

    /// Create a new empty sheet with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Sheet {
            name: name.to_string(),
            ..Sheet::default()
        }
    }

    /// Create a sheet from a 2D vector of values
    #[must_use]
    pub fn from_data<T: Into<CellValue> + Clone>(data: Vec<Vec<T>>) -> Self {
        let converted: Vec<Vec<CellValue>> = data
            .into_iter()
            .map(|row| row.into_iter().map(Into::into).collect())
            .collect();

        Sheet {
            name: "Sheet1".to_string(),
            data: converted,
            ..Sheet::default()
        }
    }

    /// Get the sheet name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Set the sheet name
    pub fn set_name(&mut self, name: &str) {
        self.name = name.to_string();
    }

    /// Get the number of rows
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.data.len()
    }

    /// Get the number of columns (widest row)
    #[must_use]
    pub fn col_count(&self) -> usize {
        self.data.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Check if the sheet has no cells
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Get a cell value by 0-based (row, col)
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<&CellValue> {
        self.data.get(row).and_then(|r| r.get(col))
    }

    /// Set a cell value by 0-based (row, col), growing the grid as needed
    pub fn set<T: Into<CellValue>>(&mut self, row: usize, col: usize, value: T) {
        if self.data.len() <= row {
            self.data.resize_with(row + 1, Vec::new);
        }
        let row_data = &mut self.data[row];
        if row_data.len() <= col {
            row_data.resize(col + 1, CellValue::Null);
        }
        row_data[col] = value.into();
    }

    /// Set a cell value by A1 notation (e.g., "B5")
    pub fn set_a1<T: Into<CellValue>>(&mut self, notation: &str, value: T) -> Result<()> {
        let (row, col) = parse_a1(notation)?;
        self.set(row, col, value);
        Ok(())
    }

    /// Set a formula cell by A1 notation; the source must start with '='
    pub fn set_formula(&mut self, notation: &str, source: &str) -> Result<()> {
        if !source.starts_with('=') {
            return Err(SheetError::InvalidFormula(source.to_string()));
        }
        self.set_a1(notation, CellValue::formula(source))
    }

    /// Get a cell value by A1 notation
    pub fn get_a1(&self, notation: &str) -> Result<Option<&CellValue>> {
        let (row, col) = parse_a1(notation)?;
        Ok(self.get(row, col))
    }

    // ===== Styling =====

    /// Set a column width by column letters (e.g., "B")
    pub fn set_column_width(&mut self, column: &str, width: f64) -> Result<()> {
        let col = parse_column_letters(column)?;
        self.column_widths.insert(col, width);
        Ok(())
    }

    /// Set the default alignment applied to every populated cell
    pub fn set_alignment(&mut self, align: CellAlign) {
        self.alignment = Some(align);
    }

    /// Add a thin-bordered region by A1 range notation (e.g., "A15:I22")
    pub fn add_border_region(&mut self, range: &str) -> Result<()> {
        self.borders.push(Self::parse_region(range)?);
        Ok(())
    }

    /// Merge a cell range by A1 range notation (e.g., "A13:A14").
    ///
    /// Only the top-left cell's value survives serialization, matching the
    /// merge semantics of the consuming spreadsheet application.
    pub fn merge_range(&mut self, range: &str) -> Result<()> {
        self.merges.push(Self::parse_region(range)?);
        Ok(())
    }

    /// Column widths as (0-based column, width) pairs in column order
    #[must_use]
    pub fn column_widths(&self) -> &BTreeMap<usize, f64> {
        &self.column_widths
    }

    /// The default cell alignment, if set
    #[must_use]
    pub fn alignment(&self) -> Option<CellAlign> {
        self.alignment
    }

    /// Thin-bordered regions
    #[must_use]
    pub fn border_regions(&self) -> &[Region] {
        &self.borders
    }

    /// Merged cell ranges
    #[must_use]
    pub fn merged_ranges(&self) -> &[Region] {
        &self.merges
    }

    /// Check whether a cell lies inside any bordered region
    #[must_use]
    pub fn is_bordered(&self, row: usize, col: usize) -> bool {
        self.borders.iter().any(|r| r.contains(row, col))
    }

    /// The merged range covering a cell, if any
    #[must_use]
    pub fn merge_covering(&self, row: usize, col: usize) -> Option<&Region> {
        self.merges.iter().find(|r| r.contains(row, col))
    }

    // ===== Data access =====

    /// Get the underlying data grid
    #[must_use]
    pub fn data(&self) -> &Vec<Vec<CellValue>> {
        &self.data
    }

    /// Get the underlying data grid mutably
    pub fn data_mut(&mut self) -> &mut Vec<Vec<CellValue>> {
        &mut self.data
    }

    fn parse_region(range: &str) -> Result<Region> {
        let ((first_row, first_col), (last_row, last_col)) = parse_a1_range(range)?;
        Ok(Region {
            first_row,
            first_col,
            last_row,
            last_col,
        })
    }
}
