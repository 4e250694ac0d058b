use crate::error::{Result, SheetError};

/// Parse A1-style cell notation (e.g., "A1", "Z99", "AA1")
/// Returns (row, column) as 0-based indices
pub fn parse_a1(notation: &str) -> Result<(usize, usize)> {
    if notation.is_empty() {
        return Err(SheetError::InvalidCellNotation(notation.to_string()));
    }

    let notation = notation.to_uppercase();
    let bytes = notation.as_bytes();

    // Find where letters end and numbers begin
    let mut split_pos = 0;
    for (i, &b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            split_pos = i;
            break;
        }
    }

    if split_pos == 0 {
        return Err(SheetError::InvalidCellNotation(notation));
    }

    let col_part = &notation[..split_pos];
    let row_part = &notation[split_pos..];

    let col = parse_column_letters(col_part)?;
    let row = row_part
        .parse::<usize>()
        .map_err(|_| SheetError::InvalidCellNotation(notation.clone()))?;

    // Convert to 0-based indexing (A1 = 0,0)
    if row == 0 {
        return Err(SheetError::InvalidCellNotation(notation));
    }

    Ok((row - 1, col))
}

/// Parse A1-style range notation (e.g., "A1:C3")
/// Returns ((start_row, start_col), (end_row, end_col)) as 0-based indices
pub fn parse_a1_range(notation: &str) -> Result<((usize, usize), (usize, usize))> {
    let parts: Vec<&str> = notation.split(':').collect();

    if parts.len() != 2 {
        // If no colon, treat as single cell
        let cell = parse_a1(notation)?;
        return Ok((cell, cell));
    }

    let start = parse_a1(parts[0])?;
    let end = parse_a1(parts[1])?;

    let (start_row, start_col) = start;
    let (end_row, end_col) = end;

    let actual_start = (start_row.min(end_row), start_col.min(end_col));
    let actual_end = (start_row.max(end_row), start_col.max(end_col));

    Ok((actual_start, actual_end))
}

/// Convert column letters to 0-based column index
/// A=0, B=1, ... Z=25, AA=26, AB=27, ...
pub fn parse_column_letters(col_str: &str) -> Result<usize> {
    if col_str.is_empty() {
        return Err(SheetError::InvalidCellNotation(col_str.to_string()));
    }

    let mut col = 0usize;
    for &b in col_str.to_uppercase().as_bytes() {
        if !b.is_ascii_uppercase() {
            return Err(SheetError::InvalidCellNotation(col_str.to_string()));
        }
        col = col * 26 + (b - b'A') as usize + 1;
    }

    Ok(col - 1)
}

/// Convert a 0-based column index to column letters
/// 0=A, 1=B, ... 25=Z, 26=AA, ...
#[must_use]
pub fn column_letters(mut col: usize) -> String {
    let mut letters = Vec::new();
    loop {
        letters.push(b'A' + (col % 26) as u8);
        if col < 26 {
            break;
        }
        col = col / 26 - 1;
    }
    letters.reverse();
    String::from_utf8(letters).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_a1() {
        assert_eq!(parse_a1("A1").unwrap(), (0, 0));
        assert_eq!(parse_a1("B5").unwrap(), (4, 1));
        assert_eq!(parse_a1("Z99").unwrap(), (98, 25));
        assert_eq!(parse_a1("AA1").unwrap(), (0, 26));
        assert_eq!(parse_a1("X17").unwrap(), (16, 23));
    }

    #[test]
    fn test_parse_a1_lowercase() {
        assert_eq!(parse_a1("b5").unwrap(), (4, 1));
    }

    #[test]
    fn test_parse_a1_invalid() {
        assert!(parse_a1("").is_err());
        assert!(parse_a1("123").is_err());
        assert!(parse_a1("ABC").is_err());
        assert!(parse_a1("A0").is_err());
    }

    #[test]
    fn test_parse_a1_range() {
        assert_eq!(parse_a1_range("A1:C3").unwrap(), ((0, 0), (2, 2)));
        assert_eq!(parse_a1_range("A15:I22").unwrap(), ((14, 0), (21, 8)));
        // Single cell ranges
        assert_eq!(parse_a1_range("B2").unwrap(), ((1, 1), (1, 1)));
        // Reversed corners are normalized
        assert_eq!(parse_a1_range("C3:A1").unwrap(), ((0, 0), (2, 2)));
    }

    #[test]
    fn test_column_letters_roundtrip() {
        for col in [0usize, 1, 25, 26, 27, 51, 52, 701, 702] {
            let letters = column_letters(col);
            assert_eq!(parse_column_letters(&letters).unwrap(), col);
        }
        assert_eq!(column_letters(0), "A");
        assert_eq!(column_letters(23), "X");
        assert_eq!(column_letters(26), "AA");
    }
}
