/// Declares a fieldless enum together with its name table.
///
/// Each variant is spelled as its identifier unless a `=> "spelling"` override
/// follows it. Ordinals are assigned `0..N` in declaration order.
///
/// ```
/// use enum_spelling::{spelled_enum, Spelled};
///
/// spelled_enum! {
///     /// Primary colours.
///     pub enum Colour {
///         Red => "red",
///         Green => "green",
///         Blue => "blue",
///     }
/// }
///
/// assert_eq!(Colour::Green.name(), "green");
/// assert_eq!(Colour::from_name("blue"), Ok(Colour::Blue));
/// assert!(Colour::from_name("purple").is_err());
/// assert_eq!(Colour::count(), 3);
/// ```
///
/// The generated enum derives `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`,
/// `PartialOrd`, `Ord` and `Hash`; do not derive those again.
#[macro_export]
macro_rules! spelled_enum {
    // Helper to get the spelling
    (@spelling $variant:ident) => { $crate::table::unraw(stringify!($variant)) };
    (@spelling $variant:ident, $spelling:literal) => { $spelling };

    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident $(=> $spelling:literal)?
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                $variant,
            )+
        }

        impl $crate::Spelled for $name {
            const TYPE_NAME: &'static str = $crate::table::unraw(stringify!($name));

            const NAMES: &'static [&'static str] = &[
                $(
                    $crate::spelled_enum!(@spelling $variant $(, $spelling)?),
                )+
            ];

            const VARIANTS: &'static [Self] = &[
                $(
                    Self::$variant,
                )+
            ];

            #[inline]
            fn ordinal(self) -> usize {
                self as usize
            }
        }

        const _: () = {
            assert!(
                !$crate::table::has_duplicates(<$name as $crate::Spelled>::NAMES),
                concat!("duplicate spelling in ", stringify!($name))
            );
            assert!(
                !$crate::table::has_empty(<$name as $crate::Spelled>::NAMES),
                concat!("empty spelling in ", stringify!($name))
            );
        };

        $crate::impl_spelled_traits!($name);
    };
}
