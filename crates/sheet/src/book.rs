use crate::error::{Result, SheetError};
use crate::sheet::Sheet;
use indexmap::IndexMap;

/// A book containing multiple sheets (preserves insertion order)
///
/// Sheet names are unique; a book never holds a default or blank sheet that
/// the caller did not add.
#[derive(Debug, Clone)]
pub struct Book {
    name: String,
    sheets: IndexMap<String, Sheet>,
}

impl Book {
    /// Create a new empty book
    #[must_use]
    pub fn new() -> Self {
        Self::with_name("Book1")
    }

    /// Create a new empty book with a name
    #[must_use]
    pub fn with_name(name: &str) -> Self {
        Book {
            name: name.to_string(),
            sheets: IndexMap::new(),
        }
    }

    /// Get the book name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the number of sheets
    #[must_use]
    pub fn sheet_count(&self) -> usize {
        self.sheets.len()
    }

    /// Check if the book is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.sheets.is_empty()
    }

    /// Get all sheet names in insertion order
    #[must_use]
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.keys().map(String::as_str).collect()
    }

    /// Check if a sheet exists
    #[must_use]
    pub fn has_sheet(&self, name: &str) -> bool {
        self.sheets.contains_key(name)
    }

    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Result<&Sheet> {
        self.sheets
            .get(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Get a mutable sheet by name
    pub fn get_sheet_mut(&mut self, name: &str) -> Result<&mut Sheet> {
        self.sheets
            .get_mut(name)
            .ok_or_else(|| SheetError::SheetNotFound {
                name: name.to_string(),
            })
    }

    /// Add a sheet to the book; duplicate names are rejected
    pub fn add_sheet(&mut self, name: &str, sheet: Sheet) -> Result<()> {
        if self.sheets.contains_key(name) {
            return Err(SheetError::SheetAlreadyExists {
                name: name.to_string(),
            });
        }

        let mut sheet = sheet;
        sheet.set_name(name);
        self.sheets.insert(name.to_string(), sheet);
        Ok(())
    }

    /// Iterate over sheets in insertion order
    pub fn sheets(&self) -> impl Iterator<Item = (&str, &Sheet)> {
        self.sheets.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Default for Book {
    fn default() -> Self {
        Self::new()
    }
}

impl IntoIterator for Book {
    type Item = (String, Sheet);
    type IntoIter = indexmap::map::IntoIter<String, Sheet>;

    fn into_iter(self) -> Self::IntoIter {
        self.sheets.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_book() {
        let book = Book::new();
        assert_eq!(book.name(), "Book1");
        assert!(book.is_empty());
        assert_eq!(book.sheet_count(), 0);
    }

    #[test]
    fn test_add_sheet() {
        let mut book = Book::new();
        let sheet = Sheet::from_data(vec![vec![1, 2], vec![3, 4]]);

        book.add_sheet("Data", sheet).unwrap();

        assert_eq!(book.sheet_count(), 1);
        assert!(book.has_sheet("Data"));
        assert_eq!(book.sheet_names(), vec!["Data"]);
        assert_eq!(book.get_sheet("Data").unwrap().name(), "Data");
    }

    #[test]
    fn test_sheet_already_exists() {
        let mut book = Book::new();
        book.add_sheet("Data", Sheet::new()).unwrap();

        let result = book.add_sheet("Data", Sheet::new());
        assert!(result.is_err());
        assert_eq!(book.sheet_count(), 1);
    }

    #[test]
    fn test_sheet_not_found() {
        let book = Book::new();
        assert!(book.get_sheet("missing").is_err());
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut book = Book::new();
        for name in ["Data", "BOQ", "cover page", "IPC Summary", "1-1"] {
            book.add_sheet(name, Sheet::new()).unwrap();
        }
        assert_eq!(
            book.sheet_names(),
            vec!["Data", "BOQ", "cover page", "IPC Summary", "1-1"]
        );
    }
}
