/// Standard conversion traits shared by `spelled_enum!` and `#[derive(Spelled)]`.
///
/// Expects `$name` to implement [`Spelled`](crate::Spelled).
#[doc(hidden)]
#[macro_export]
macro_rules! impl_spelled_traits {
    ($name:ident) => {
        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.pad($crate::Spelled::name(*self))
            }
        }

        impl ::core::str::FromStr for $name {
            type Err = $crate::SpellingError;

            fn from_str(s: &str) -> ::core::result::Result<Self, $crate::SpellingError> {
                <Self as $crate::Spelled>::from_name(s)
            }
        }

        impl<'a> ::core::convert::TryFrom<&'a str> for $name {
            type Error = $crate::SpellingError;

            fn try_from(value: &'a str) -> ::core::result::Result<Self, $crate::SpellingError> {
                <Self as $crate::Spelled>::from_name(value)
            }
        }

        impl ::core::convert::TryFrom<usize> for $name {
            type Error = $crate::SpellingError;

            fn try_from(value: usize) -> ::core::result::Result<Self, $crate::SpellingError> {
                <Self as $crate::Spelled>::try_from_ordinal(value)
            }
        }

        impl ::core::convert::From<$name> for &'static str {
            fn from(value: $name) -> Self {
                $crate::Spelled::name(value)
            }
        }

        $crate::impl_spelled_serde!($name);
    };
}

#[cfg(feature = "serde")]
#[doc(hidden)]
#[macro_export]
macro_rules! impl_spelled_serde {
    ($name:ident) => {
        impl $crate::__private::serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> ::core::result::Result<S::Ok, S::Error>
            where
                S: $crate::__private::serde::Serializer,
            {
                $crate::serde_support::serialize(self, serializer)
            }
        }

        impl<'de> $crate::__private::serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
            where
                D: $crate::__private::serde::Deserializer<'de>,
            {
                $crate::serde_support::deserialize(deserializer)
            }
        }
    };
}

#[cfg(not(feature = "serde"))]
#[doc(hidden)]
#[macro_export]
macro_rules! impl_spelled_serde {
    ($name:ident) => {};
}
