//! Serde glue for spelled enums.
//!
//! Generated types serialize as their spelling. The two functions also work as a
//! `#[serde(with = "enum_spelling::serde_support")]` module for fields whose type
//! implements [`Spelled`].

use std::{fmt, marker::PhantomData};

use serde::{
    de::{self, Visitor},
    Deserializer, Serializer,
};

use crate::Spelled;

pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: Spelled,
    S: Serializer,
{
    serializer.serialize_str(value.name())
}

pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
where
    T: Spelled,
    D: Deserializer<'de>,
{
    deserializer.deserialize_str(SpellingVisitor(PhantomData))
}

struct SpellingVisitor<T>(PhantomData<T>);

impl<T: Spelled> Visitor<'_> for SpellingVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a {} spelling", T::TYPE_NAME)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<T, E> {
        T::from_name(v).map_err(|_| E::unknown_variant(v, T::NAMES))
    }
}
