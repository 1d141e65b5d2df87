use std::collections::HashSet;

use crate::{
    macros::test_gen::variant_tests, spelled_enum, Spelled, SpellingError, MAX_REPORTED_INPUT,
};


spelled_enum! {
    pub enum Colour {
        Red => "red",
        Green => "green",
        Blue => "blue",
    }
}

spelled_enum! {
    /// Log levels, spelled as written.
    pub(crate) enum Level {
        Trace,
        Debug,
        Info,
        Warn,
        Error,
    }
}

// Variant names that collide with the std conversion traits' associated types.
spelled_enum! {
    pub enum Outcome {
        Ok,
        Err,
        Error,
        Pending,
    }
}

fn round_trip<T: Spelled + std::fmt::Debug>(value: T) {
    assert_eq!(T::from_name(value.name()), Ok(value));
    assert_eq!(T::from_ordinal(value.ordinal()), Some(value));
}

variant_tests!(round_trip, Colour => [Red, Green, Blue]);
variant_tests!(round_trip, Level => [Trace, Debug, Info, Warn, Error]);
variant_tests!(round_trip, Outcome => [Ok, Err, Error, Pending]);

fn check_table<T: Spelled>() {
    assert_eq!(T::NAMES.len(), T::COUNT);
    assert_eq!(T::VARIANTS.len(), T::COUNT);

    let distinct: HashSet<&str> = T::NAMES.iter().copied().collect();
    assert_eq!(distinct.len(), T::COUNT, "{} has repeated spellings", T::TYPE_NAME);

    for (i, variant) in T::iter().enumerate() {
        assert_eq!(variant.ordinal(), i);
        assert_eq!(variant.name(), T::NAMES[i]);
    }
}

#[test]
fn test_tables() {
    check_table::<Colour>();
    check_table::<Level>();
    check_table::<Outcome>();
}

#[test]
fn test_conversion_traits_with_err_variants() {
    assert_eq!("Err".parse::<Outcome>(), Ok(Outcome::Err));
    assert_eq!(Outcome::try_from("Error"), Ok(Outcome::Error));
    assert_eq!(Outcome::try_from(3usize), Ok(Outcome::Pending));
    assert!("Failed".parse::<Outcome>().is_err());
    assert_eq!("Error".parse::<Level>(), Ok(Level::Error));
    assert_eq!(Outcome::Ok.to_string(), "Ok");
}

#[test]
fn test_colour_scenario() {
    assert_eq!(Colour::Green.name(), "green");
    assert_eq!(Colour::from_name("blue"), Ok(Colour::Blue));
    assert!(Colour::from_name("purple").is_err());
    assert_eq!(Colour::count(), 3);
    assert_eq!(Colour::COUNT, 3);
    assert_eq!(Colour::TYPE_NAME, "Colour");
}

#[test]
fn test_default_spelling_is_identifier() {
    assert_eq!(Level::NAMES, &["Trace", "Debug", "Info", "Warn", "Error"]);
    assert_eq!(Level::Warn.name(), "Warn");
}

#[test]
fn test_lookup_is_exact() {
    for text in ["Red", "RED", " red", "red ", "re", "redd", "", "__not_a_member__"] {
        let err = Colour::from_name(text).unwrap_err();
        assert_eq!(
            err,
            SpellingError::UnknownSpelling {
                type_name: "Colour",
                input: text.to_owned(),
                input_len: text.len(),
                expected: Colour::NAMES,
            }
        );
        assert!(!Colour::is_spelling(text));
    }
}

#[test]
fn test_ordinals() {
    assert_eq!(Colour::Red.ordinal(), 0);
    assert_eq!(Colour::Blue.ordinal(), 2);
    assert_eq!(Colour::from_ordinal(3), None);
    assert_eq!(Colour::try_from(1usize), Ok(Colour::Green));
    assert_eq!(
        Colour::try_from(3usize),
        Err(SpellingError::OrdinalOutOfRange {
            type_name: "Colour",
            ordinal: 3,
            count: 3,
        })
    );
}

#[test]
fn test_std_conversions() {
    assert_eq!(Colour::Red.to_string(), "red");
    assert_eq!(format!("[{:>6}]", Colour::Red), "[   red]");
    assert_eq!(format!("[{:<6}]", Level::Info), "[Info  ]");

    let s: &'static str = Colour::Blue.into();
    assert_eq!(s, "blue");
    assert_eq!(Colour::try_from("green"), Ok(Colour::Green));
    assert!(Colour::try_from("Green").is_err());
}

#[test]
fn test_render() {
    let mut out = String::from("colour=");
    Colour::Green.render(&mut out).unwrap();
    assert_eq!(out, "colour=green");

    let mut bytes = Vec::new();
    Level::Error.write_to(&mut bytes).unwrap();
    assert_eq!(bytes, b"Error");
}

#[test]
fn test_error_display() {
    let err = Colour::from_name("purple").unwrap_err();
    assert!(err.is_unknown_spelling());
    assert_eq!(err.type_name(), "Colour");
    assert_eq!(
        err.to_string(),
        "unknown Colour spelling \"purple\", expected one of: red, green, blue"
    );

    let err = Level::try_from_ordinal(9).unwrap_err();
    assert!(!err.is_unknown_spelling());
    assert_eq!(err.to_string(), "ordinal 9 out of range for Level (count is 5)");
}

#[test]
fn test_rejected_input_is_capped() {
    let payload = "x".repeat(10 * MAX_REPORTED_INPUT);
    let err = Colour::from_name(&payload).unwrap_err();
    let SpellingError::UnknownSpelling { input, input_len, .. } = &err else {
        panic!("expected an unknown spelling, got {err:?}");
    };
    assert_eq!(input.len(), MAX_REPORTED_INPUT);
    assert_eq!(*input_len, payload.len());

    let message = err.to_string();
    assert!(message.len() < 2 * MAX_REPORTED_INPUT + 64);
    assert!(message.contains("(truncated from 640 bytes)"));
    assert!(message.ends_with("expected one of: red, green, blue"));
}

#[test]
fn test_capped_input_keeps_char_boundary() {
    // Two-byte characters put the cap in the middle of one.
    let payload = format!("a{}", "é".repeat(MAX_REPORTED_INPUT));
    let SpellingError::UnknownSpelling { input, input_len, .. } =
        Colour::from_name(&payload).unwrap_err()
    else {
        panic!("expected an unknown spelling");
    };
    assert_eq!(input.len(), MAX_REPORTED_INPUT - 1);
    assert!(payload.starts_with(&input));
    assert_eq!(input_len, payload.len());
}
