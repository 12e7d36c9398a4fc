//! Rows read from one language's sheet

use std::collections::BTreeMap;

/// A scalar field value from a sheet cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Display text
    Text(String),
    /// Boolean flag
    Bool(bool),
    /// Empty/null cell
    Empty,
}

impl FieldValue {
    /// Parse raw cell text into a FieldValue, detecting booleans and blanks
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();

        if trimmed.is_empty() {
            return FieldValue::Empty;
        }
        if trimmed.eq_ignore_ascii_case("true") {
            return FieldValue::Bool(true);
        }
        if trimmed.eq_ignore_ascii_case("false") {
            return FieldValue::Bool(false);
        }

        FieldValue::Text(trimmed.to_string())
    }

    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, FieldValue::Empty)
    }
}

/// A read-only record from one language pass of one sheet. The id is unique
/// within that pass; fields are the row's named scalar values.
#[derive(Debug, Clone)]
pub struct SheetRow {
    /// Row identifier
    pub id: u32,
    fields: BTreeMap<String, FieldValue>,
}

impl SheetRow {
    /// Create a row with no fields
    pub fn new(id: u32) -> Self {
        Self {
            id,
            fields: BTreeMap::new(),
        }
    }

    /// Builder-style field insertion
    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.insert(name, value);
        self
    }

    /// Insert or replace a field
    pub fn insert(&mut self, name: impl Into<String>, value: FieldValue) {
        self.fields.insert(name.into(), value);
    }

    /// Text content of a named field; empty when the field is absent or not text
    pub fn text(&self, name: &str) -> &str {
        match self.fields.get(name) {
            Some(FieldValue::Text(s)) => s,
            _ => "",
        }
    }

    /// Boolean field; false when absent
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.fields.get(name), Some(FieldValue::Bool(true)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_parse_text() {
        assert_eq!(
            FieldValue::parse("Wind-up Cursor"),
            FieldValue::Text("Wind-up Cursor".to_string())
        );
    }

    #[test]
    fn test_field_value_parse_bool() {
        assert_eq!(FieldValue::parse("True"), FieldValue::Bool(true));
        assert_eq!(FieldValue::parse("false"), FieldValue::Bool(false));
    }

    #[test]
    fn test_field_value_parse_empty() {
        assert_eq!(FieldValue::parse(""), FieldValue::Empty);
        assert_eq!(FieldValue::parse("   "), FieldValue::Empty);
        assert!(FieldValue::parse(" ").is_empty());
    }

    #[test]
    fn test_row_accessors() {
        let row = SheetRow::new(7)
            .with_field("Name", FieldValue::Text("Fat Chocobo".to_string()))
            .with_field("IsPrefix", FieldValue::Bool(true));

        assert_eq!(row.id, 7);
        assert_eq!(row.text("Name"), "Fat Chocobo");
        assert_eq!(row.text("Missing"), "");
        assert!(row.flag("IsPrefix"));
        assert!(!row.flag("Missing"));
    }
}
