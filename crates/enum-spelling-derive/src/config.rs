use proc_macro2::Span;
use syn::{Attribute, Error as SynError, LitStr, Result as SynResult};

/// Converts an [String] input from pascal case [PascalCase] to snake case [snake_case]
fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, c) in s.chars().enumerate() {
        if c.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }
    result
}

/// Case conversion applied to variant identifiers by `rename_all`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RenameRule {
    /// Identifier as written.
    #[default]
    Verbatim,
    LowerCase,
    UpperCase,
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
    ScreamingKebabCase,
}

const RULES: &[(&str, RenameRule)] = &[
    ("lowercase", RenameRule::LowerCase),
    ("UPPERCASE", RenameRule::UpperCase),
    ("PascalCase", RenameRule::PascalCase),
    ("camelCase", RenameRule::CamelCase),
    ("snake_case", RenameRule::SnakeCase),
    ("SCREAMING_SNAKE_CASE", RenameRule::ScreamingSnakeCase),
    ("kebab-case", RenameRule::KebabCase),
    ("SCREAMING-KEBAB-CASE", RenameRule::ScreamingKebabCase),
];

impl RenameRule {
    pub fn parse(lit: &LitStr) -> SynResult<Self> {
        let value = lit.value();
        RULES
            .iter()
            .find(|(name, _)| *name == value)
            .map(|(_, rule)| *rule)
            .ok_or_else(|| {
                let expected: Vec<&str> = RULES.iter().map(|(name, _)| *name).collect();
                SynError::new(
                    lit.span(),
                    format!(
                        "unknown rename rule `{}`, expected one of: {}",
                        value,
                        expected.join(", ")
                    ),
                )
            })
    }

    /// Applies the rule to a PascalCase variant identifier.
    pub fn apply(self, variant: &str) -> String {
        match self {
            Self::Verbatim | Self::PascalCase => variant.to_owned(),
            Self::LowerCase => variant.to_ascii_lowercase(),
            Self::UpperCase => variant.to_ascii_uppercase(),
            Self::CamelCase => {
                let mut chars = variant.chars();
                match chars.next() {
                    Some(first) => first.to_lowercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
            Self::SnakeCase => to_snake_case(variant),
            Self::ScreamingSnakeCase => to_snake_case(variant).to_ascii_uppercase(),
            Self::KebabCase => to_snake_case(variant).replace('_', "-"),
            Self::ScreamingKebabCase => to_snake_case(variant)
                .to_ascii_uppercase()
                .replace('_', "-"),
        }
    }
}

/// Contents of the `#[spelled(...)]` attributes found on one item.
#[derive(Debug, Default)]
pub struct SpelledConfig {
    /// Explicit spelling of a variant.
    pub rename: Option<LitStr>,
    /// Case rule for every variant of an enum, with the span of its literal.
    pub rename_all: Option<(RenameRule, Span)>,
}

impl SpelledConfig {
    pub fn parse(attrs: &[Attribute]) -> SynResult<Self> {
        let mut config = Self::default();

        for attr in attrs.iter().filter(|a| a.path().is_ident("spelled")) {
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename") {
                    let v: LitStr = meta.value()?.parse()?;
                    config.rename = Some(v);
                } else if meta.path.is_ident("rename_all") {
                    let v: LitStr = meta.value()?.parse()?;
                    config.rename_all = Some((RenameRule::parse(&v)?, v.span()));
                } else {
                    return Err(meta.error("expected `rename` or `rename_all`"));
                }
                Ok(())
            })?;
        }

        Ok(config)
    }
}
