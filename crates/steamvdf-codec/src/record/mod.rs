//! Records: ordered field lists.
//!
//! - [`parser`]: bytes of one record → [`Record`]
//! - [`serializer`]: [`Record`] → bytes, the exact inverse

pub mod parser;
pub mod serializer;

pub use parser::{MAX_IDENTIFIER, MAX_IDENTIFIER_DIGITS, parse_record};
pub use serializer::{encode_field, encode_record};

use crate::field::Field;

/// One logical entry of a document.
///
/// The first field is the unnamed [`Field::Identifier`]; named fields follow
/// in the order they were read or added. Order is preserved as-is because
/// re-serialization must reproduce the original bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    fields: Vec<Field>,
}

impl Record {
    /// Create a record holding only its identifier.
    #[must_use]
    pub fn new(id: u64) -> Self {
        Self {
            fields: vec![Field::Identifier(id)],
        }
    }

    /// Wrap an existing field list without validation.
    #[must_use]
    pub fn from_fields(fields: Vec<Field>) -> Self {
        Self { fields }
    }

    /// Identifier of this record, if the first field is one.
    #[must_use]
    pub fn id(&self) -> Option<u64> {
        match self.fields.first() {
            Some(Field::Identifier(id)) => Some(*id),
            _ => None,
        }
    }

    /// Replace the identifier, inserting one at the front if missing.
    pub fn set_id(&mut self, id: u64) {
        match self.fields.first_mut() {
            Some(Field::Identifier(current)) => *current = id,
            _ => self.fields.insert(0, Field::Identifier(id)),
        }
    }

    #[must_use]
    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    #[must_use]
    pub fn into_fields(self) -> Vec<Field> {
        self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Number of fields, identifier included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn push(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// First named field called `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Field> {
        self.fields.iter().find(|field| field.name() == Some(name))
    }

    /// Append a text field.
    #[must_use]
    pub fn with_text(mut self, name: impl Into<String>, value: impl Into<Vec<u8>>) -> Self {
        self.push(Field::text(name, value));
        self
    }

    /// Append a number field.
    #[must_use]
    pub fn with_number(mut self, name: impl Into<String>, value: i32) -> Self {
        self.push(Field::number(name, value));
        self
    }

    /// Append a boolean field.
    #[must_use]
    pub fn with_bool(mut self, name: impl Into<String>, value: bool) -> Self {
        self.push(Field::boolean(name, value));
        self
    }

    /// Append a list field.
    #[must_use]
    pub fn with_list<I, S>(mut self, name: impl Into<String>, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Vec<u8>>,
    {
        self.push(Field::list(name, items));
        self
    }

    /// Serialize to the record's byte form.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::new();
        encode_record(self, &mut out);
        out
    }
}

impl<'a> IntoIterator for &'a Record {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_keeps_order() {
        let record = Record::new(2)
            .with_text("AppName", "Chess")
            .with_bool("IsHidden", false)
            .with_list("tags", ["a"]);

        assert_eq!(record.id(), Some(2));
        assert_eq!(record.len(), 4);
        let names: Vec<_> = record.iter().filter_map(Field::name).collect();
        assert_eq!(names, ["AppName", "IsHidden", "tags"]);
        assert_eq!(record.get("IsHidden").and_then(Field::as_bool), Some(false));
        assert!(record.get("Exe").is_none());
    }

    #[test]
    fn test_set_id() {
        let mut record = Record::new(0);
        record.set_id(9);
        assert_eq!(record.id(), Some(9));

        let mut bare = Record::from_fields(vec![Field::text("AppName", "x")]);
        assert_eq!(bare.id(), None);
        bare.set_id(1);
        assert_eq!(bare.id(), Some(1));
        assert_eq!(bare.len(), 2);
    }
}
