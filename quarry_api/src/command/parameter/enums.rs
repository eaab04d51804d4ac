//! Enum Parameters
//!
//! Matches one argument against the named variants of an enum,
//! case-insensitively. The crate's own enums ([`Weather`](crate::world::weather::Weather),
//! [`EntityFlag`](crate::data::EntityFlag), ...) implement [`NamedVariants`];
//! plugins implement it for their own types to get a parser for free.
use std::marker::PhantomData;

use crate::command::ParseError;
use crate::command::args::ArgReader;
use crate::command::context::CommandContext;
use crate::command::parameter::ValueParser;

/// An enum whose variants can be listed and named.
///
/// `VARIANTS` holds every variant in declaration order; `name` returns the
/// form users type (conventionally the variant name in `snake_case`).
pub trait NamedVariants: Copy + Send + Sync + 'static {
    const VARIANTS: &'static [Self];

    fn name(&self) -> &'static str;
}

/// Parses one argument into a variant of `T` by case-insensitive name match.
///
/// Built directly by [`parameter::enum_choices`](crate::command::parameter::enum_choices);
/// there is nothing to configure, so no builder exists for this family.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumParser<T> {
    _variants: PhantomData<fn() -> T>,
}

impl<T: NamedVariants> EnumParser<T> {
    pub(crate) fn new() -> EnumParser<T> {
        EnumParser { _variants: PhantomData }
    }
}

impl<T: NamedVariants> ValueParser<T> for EnumParser<T> {
    fn parse_value(&self, reader: &mut ArgReader<'_>, _context: &CommandContext) -> Result<T, ParseError> {
        let position = reader.position();
        let token = reader.next()?;
        T::VARIANTS
            .iter()
            .find(|variant| variant.name().eq_ignore_ascii_case(token))
            .copied()
            .ok_or_else(|| {
                let names: Vec<&str> = T::VARIANTS.iter().map(NamedVariants::name).collect();
                ParseError::no_match(
                    position,
                    format!("'{token}' is not one of: {}", names.join(", ")),
                )
            })
    }

    /// Variant names starting with the partial input, in declaration order.
    fn complete(&self, partial: &str, _context: &CommandContext) -> Vec<String> {
        let partial = partial.to_lowercase();
        T::VARIANTS
            .iter()
            .map(NamedVariants::name)
            .filter(|name| name.to_lowercase().starts_with(&partial))
            .map(ToString::to_string)
            .collect()
    }
}
