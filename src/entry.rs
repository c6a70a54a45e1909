//! The entry value model.
//!
//! An [`Entry`] is one node of renderable input: either a primitive value
//! (string, number, boolean, big integer, date, null), an ordered sequence,
//! or a keyed record. Records carry a discriminator key (`"bold"`, `"table"`,
//! ...) naming the Markdown construct they represent, alongside optional
//! modifier keys (`"indicator"`, `"id"`, `"append"`, ...).
//!
//! Records preserve key insertion order, and the whole model deserializes
//! directly from JSON, so a decoded document walks in source order.

use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::de::{Deserializer, MapAccess, SeqAccess, Visitor};
use serde::Deserialize;

/// One node of input data representing a renderable construct or plain value.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// Absent or null content. Renders as an empty string.
    Null,
    Bool(bool),
    Int(i64),
    /// Integer content beyond the signed 64-bit range. JSON integers up
    /// to `u64::MAX` decode into this variant; anything larger decodes as
    /// a float.
    BigInt(i128),
    Float(f64),
    Str(String),
    /// A timestamp, rendered ISO-8601 with millisecond precision.
    Date(DateTime<Utc>),
    /// An ordered sequence. In inline positions a sequence is rich text,
    /// concatenated segment by segment; list items use sequences for
    /// nested sub-entries.
    Seq(Vec<Entry>),
    /// A keyed record, usually carrying exactly one discriminator key.
    Record(IndexMap<String, Entry>),
}

impl Entry {
    /// Build a record entry with a single key.
    pub fn tagged(key: impl Into<String>, value: Entry) -> Entry {
        let mut record = IndexMap::new();
        record.insert(key.into(), value);
        Entry::Record(record)
    }

    /// Look up a key, if this entry is a record.
    pub fn get(&self, key: &str) -> Option<&Entry> {
        match self {
            Entry::Record(record) => record.get(key),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Entry::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Entry::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Entry]> {
        match self {
            Entry::Seq(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&IndexMap<String, Entry>> {
        match self {
            Entry::Record(record) => Some(record),
            _ => None,
        }
    }

    /// A single-character string value, used for indicator modifiers.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Entry::Str(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Entry::Null)
    }

    /// Record builder: set a modifier key, consuming and returning the entry.
    ///
    /// ```
    /// use mdcompose::builders::bold;
    /// let entry = bold("x").with("indicator", "_".into());
    /// assert_eq!(entry.get("indicator").and_then(|e| e.as_char()), Some('_'));
    /// ```
    ///
    /// Non-record entries are returned unchanged.
    pub fn with(mut self, key: impl Into<String>, value: Entry) -> Entry {
        if let Entry::Record(record) = &mut self {
            record.insert(key.into(), value);
        }
        self
    }
}

impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        Entry::Str(value.to_string())
    }
}

impl From<String> for Entry {
    fn from(value: String) -> Self {
        Entry::Str(value)
    }
}

impl From<bool> for Entry {
    fn from(value: bool) -> Self {
        Entry::Bool(value)
    }
}

impl From<i32> for Entry {
    fn from(value: i32) -> Self {
        Entry::Int(value.into())
    }
}

impl From<i64> for Entry {
    fn from(value: i64) -> Self {
        Entry::Int(value)
    }
}

impl From<i128> for Entry {
    fn from(value: i128) -> Self {
        Entry::BigInt(value)
    }
}

impl From<f64> for Entry {
    fn from(value: f64) -> Self {
        Entry::Float(value)
    }
}

impl From<DateTime<Utc>> for Entry {
    fn from(value: DateTime<Utc>) -> Self {
        Entry::Date(value)
    }
}

impl From<Vec<Entry>> for Entry {
    fn from(value: Vec<Entry>) -> Self {
        Entry::Seq(value)
    }
}

impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EntryVisitor;

        impl<'de> Visitor<'de> for EntryVisitor {
            type Value = Entry;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a JSON-compatible entry value")
            }

            fn visit_bool<E>(self, v: bool) -> Result<Entry, E> {
                Ok(Entry::Bool(v))
            }

            fn visit_i64<E>(self, v: i64) -> Result<Entry, E> {
                Ok(Entry::Int(v))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Entry, E> {
                match i64::try_from(v) {
                    Ok(n) => Ok(Entry::Int(n)),
                    Err(_) => Ok(Entry::BigInt(v.into())),
                }
            }

            fn visit_i128<E>(self, v: i128) -> Result<Entry, E> {
                Ok(Entry::BigInt(v))
            }

            fn visit_u128<E>(self, v: u128) -> Result<Entry, E>
            where
                E: serde::de::Error,
            {
                i128::try_from(v)
                    .map(Entry::BigInt)
                    .map_err(|_| E::custom("integer out of range"))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Entry, E> {
                Ok(Entry::Float(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Entry, E> {
                Ok(Entry::Str(v.to_string()))
            }

            fn visit_string<E>(self, v: String) -> Result<Entry, E> {
                Ok(Entry::Str(v))
            }

            fn visit_unit<E>(self) -> Result<Entry, E> {
                Ok(Entry::Null)
            }

            fn visit_none<E>(self) -> Result<Entry, E> {
                Ok(Entry::Null)
            }

            fn visit_some<D>(self, deserializer: D) -> Result<Entry, D::Error>
            where
                D: Deserializer<'de>,
            {
                Entry::deserialize(deserializer)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Entry, A::Error>
            where
                A: SeqAccess<'de>,
            {
                let mut items = Vec::new();
                while let Some(item) = seq.next_element()? {
                    items.push(item);
                }
                Ok(Entry::Seq(items))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Entry, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut record = IndexMap::new();
                while let Some((key, value)) = map.next_entry::<String, Entry>()? {
                    record.insert(key, value);
                }
                Ok(Entry::Record(record))
            }
        }

        deserializer.deserialize_any(EntryVisitor)
    }
}
