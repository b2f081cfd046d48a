//! In-memory model of the generated repository
//!
//! [`InMemoryRepository`] behaves like the repository class emitted for the
//! same schema: add, find, remove and update by identity key, a plain list,
//! and the query-by-example list that returns display projections.
//!
//! Records store values positionally, aligned with
//! [`EntitySchema::ordered_fields`].

use std::fmt;

use crate::error::{Result, ScaffoldError};
use crate::schema::{EntitySchema, FieldCategory};

/// A field value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Integer value
    Integer(i64),
    /// Text value
    Text(String),
    /// Decimal value
    Decimal(f64),
}

impl Value {
    /// Category this value belongs to
    #[must_use]
    pub const fn category(&self) -> FieldCategory {
        match self {
            Self::Integer(_) => FieldCategory::Integer,
            Self::Text(_) => FieldCategory::Text,
            Self::Decimal(_) => FieldCategory::Decimal,
        }
    }

    /// Whether this is the category's zero value (`0` or the empty string)
    #[must_use]
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Integer(n) => *n == 0,
            Self::Text(s) => s.is_empty(),
            Self::Decimal(d) => *d == 0.0,
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Text(s) => write!(f, "{s:?}"),
            Self::Decimal(d) => write!(f, "{d}"),
        }
    }
}

/// One stored entity, or a filter item
///
/// Values are only reachable through [`Record::new`] and [`Record::set`], so
/// a record always has one slot per schema field.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// Identity key; `0` in a filter item means "any"
    pub id: i64,
    values: Vec<Option<Value>>,
}

impl Record {
    /// All-null record shaped for `schema`
    #[must_use]
    pub fn new(schema: &EntitySchema, id: i64) -> Self {
        Self {
            id,
            values: vec![None; schema.field_count()],
        }
    }

    /// Values in emission order; `None` is null
    #[must_use]
    pub fn values(&self) -> &[Option<Value>] {
        &self.values
    }

    /// Set the field called `name`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnknownField`] if the schema has no such field
    /// and [`ScaffoldError::ValueMismatch`] if the value's category differs
    /// from the field's.
    pub fn set(
        &mut self,
        schema: &EntitySchema,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<&mut Self> {
        let index = schema
            .position(name)
            .ok_or_else(|| ScaffoldError::UnknownField(name.to_string()))?;
        let value = value.into();

        let expected = schema
            .ordered_fields()
            .nth(index)
            .map(|field| field.category)
            .ok_or_else(|| ScaffoldError::UnknownField(name.to_string()))?;
        if value.category() != expected {
            return Err(ScaffoldError::ValueMismatch {
                field: name.to_string(),
                expected,
                actual: value.category(),
            });
        }

        let slot = self
            .values
            .get_mut(index)
            .ok_or_else(|| ScaffoldError::UnknownField(name.to_string()))?;
        *slot = Some(value);
        Ok(self)
    }

    /// Value of the field called `name`
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::UnknownField`] if the schema has no such field.
    pub fn get(&self, schema: &EntitySchema, name: &str) -> Result<Option<&Value>> {
        let index = schema
            .position(name)
            .ok_or_else(|| ScaffoldError::UnknownField(name.to_string()))?;
        Ok(self.values.get(index).and_then(Option::as_ref))
    }
}

/// Display shape of a record: every field, no identity key
#[derive(Debug, Clone, PartialEq)]
pub struct Projection {
    /// Values in emission order
    pub values: Vec<Option<Value>>,
}

impl From<&Record> for Projection {
    fn from(record: &Record) -> Self {
        Self {
            values: record.values.clone(),
        }
    }
}

/// Repository with the semantics of the generated one
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    schema: EntitySchema,
    records: Vec<Record>,
    commits: usize,
}

impl InMemoryRepository {
    /// Empty repository for `schema`
    #[must_use]
    pub const fn new(schema: EntitySchema) -> Self {
        Self {
            schema,
            records: Vec::new(),
            commits: 0,
        }
    }

    /// Schema the records follow
    #[must_use]
    pub const fn schema(&self) -> &EntitySchema {
        &self.schema
    }

    /// Number of committed changes
    #[must_use]
    pub const fn commits(&self) -> usize {
        self.commits
    }

    fn check_shape(&self, record: &Record) -> Result<()> {
        let expected = self.schema.field_count();
        if record.values.len() == expected {
            Ok(())
        } else {
            Err(ScaffoldError::RecordShape {
                expected,
                actual: record.values.len(),
            })
        }
    }

    /// Store `record` and commit
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::RecordShape`] if `record` was built for a
    /// schema with a different number of fields.
    pub fn add(&mut self, record: Record) -> Result<()> {
        self.check_shape(&record)?;
        self.records.push(record);
        self.commits += 1;
        Ok(())
    }

    /// Every stored record, unfiltered
    #[must_use]
    pub fn get_all(&self) -> &[Record] {
        &self.records
    }

    /// Query by example
    ///
    /// A non-zero filter id must equal the stored id. A filter field takes
    /// part only when it holds a non-zero value. An excluded field with a
    /// value rejects every record. Any other field requires the stored value
    /// to be present and equal. Hits keep their stored order. A `None` filter
    /// yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::RecordShape`] if `filter` was built for a
    /// schema with a different number of fields.
    pub fn get_all_filtered(&self, filter: Option<&Record>) -> Result<Vec<Projection>> {
        let Some(filter) = filter else {
            return Ok(Vec::new());
        };
        self.check_shape(filter)?;

        Ok(self
            .records
            .iter()
            .filter(|entry| self.matches(entry, filter))
            .map(Projection::from)
            .collect())
    }

    fn matches(&self, entry: &Record, filter: &Record) -> bool {
        if filter.id != 0 && entry.id != filter.id {
            return false;
        }

        self.schema
            .ordered_fields()
            .zip(entry.values.iter().zip(&filter.values))
            .all(|(field, (stored, wanted))| match wanted {
                Some(wanted) if !wanted.is_zero() => {
                    !field.excluded && stored.as_ref() == Some(wanted)
                }
                _ => true,
            })
    }

    /// First record with identity `id`
    #[must_use]
    pub fn find(&self, id: i64) -> Option<&Record> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Delete the record with identity `id`; absent ids are a no-op
    pub fn remove(&mut self, id: i64) -> bool {
        let Some(index) = self.records.iter().position(|r| r.id == id) else {
            return false;
        };
        self.records.remove(index);
        self.commits += 1;
        true
    }

    /// Copy every field of `record` onto the stored record with the same id
    ///
    /// Returns `Ok(false)` without committing when no record has that id.
    ///
    /// # Errors
    ///
    /// Returns [`ScaffoldError::RecordShape`] if `record` was built for a
    /// schema with a different number of fields.
    pub fn update(&mut self, record: &Record) -> Result<bool> {
        self.check_shape(record)?;
        let Some(stored) = self.records.iter_mut().find(|r| r.id == record.id) else {
            return Ok(false);
        };
        stored.values.clone_from(&record.values);
        self.commits += 1;
        Ok(true)
    }
}
