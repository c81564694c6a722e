//! Table-only deserialization for theme structs.
//!
//! Derived struct impls also accept sequences as positional fields, so
//! `["#f00", "#0f0", "#00f"]` would fill three colours. Theme structs route
//! through [`deserialize_table`] instead, which only accepts maps and lets the
//! derived field logic of a `#[serde(remote)]` mirror do the rest.

use std::fmt;
use std::marker::PhantomData;

use serde::Deserializer;
use serde::de::value::MapAccessDeserializer;
use serde::de::{MapAccess, Visitor};

/// A struct that deserializes from a map of named fields only.
pub(crate) trait FromTable<'de>: Sized {
    /// Shown in "invalid type" errors.
    const EXPECTING: &'static str;

    fn from_table<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error>;
}

struct TableVisitor<T>(PhantomData<T>);

impl<'de, T: FromTable<'de>> Visitor<'de> for TableVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(T::EXPECTING)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<T, A::Error> {
        T::from_table(MapAccessDeserializer::new(map))
    }
}

/// Deserialize `T` from a map; any other shape is an invalid-type error.
pub(crate) fn deserialize_table<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: FromTable<'de>,
{
    deserializer.deserialize_map(TableVisitor(PhantomData))
}

/// Implements `Deserialize` for `$ty` through its remote mirror `$def`.
macro_rules! table_deserialize {
    ($ty:ty => $def:ident, $expecting:literal) => {
        impl<'de> $crate::de::FromTable<'de> for $ty {
            const EXPECTING: &'static str = $expecting;

            fn from_table<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                $def::deserialize(deserializer)
            }
        }

        impl<'de> serde::Deserialize<'de> for $ty {
            fn deserialize<D: serde::Deserializer<'de>>(
                deserializer: D,
            ) -> std::result::Result<Self, D::Error> {
                $crate::de::deserialize_table(deserializer)
            }
        }
    };
}

pub(crate) use table_deserialize;
