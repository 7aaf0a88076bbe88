//! Enumerated capability - a closed value set with declared names

/// A closed set of values with a stable declaration order and a declared name
/// per value.
///
/// Usually implemented through [`enumerated!`](crate::enumerated) for fieldless
/// enums. The declared name is what [`IdentifierRegistry::by_name`] uses as the
/// identifier.
///
/// [`IdentifierRegistry::by_name`]: super::IdentifierRegistry::by_name
pub trait Enumerated: Sized + 'static {
    /// All values in declaration order
    fn values() -> &'static [Self];

    /// Declared name of this value
    fn name(&self) -> &'static str;
}

/// Implements [`Enumerated`] for a fieldless enum.
///
/// Names default to the variant identifier; `=> "NAME"` overrides it.
///
/// ```rust
/// use typebridge_core::enumerated;
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// enum Level {
///     Low,
///     High,
/// }
///
/// enumerated!(Level { Low => "LOW", High => "HIGH" });
///
/// use typebridge_core::features::identifier_registry::Enumerated;
/// assert_eq!(Level::values(), &[Level::Low, Level::High]);
/// assert_eq!(Level::High.name(), "HIGH");
/// ```
#[macro_export]
macro_rules! enumerated {
    ($ty:ident { $($variant:ident $(=> $name:literal)?),+ $(,)? }) => {
        impl $crate::features::identifier_registry::Enumerated for $ty {
            fn values() -> &'static [Self] {
                &[$(Self::$variant),+]
            }

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $crate::enumerated!(@name $variant $(, $name)?),)+
                }
            }
        }
    };
    (@name $variant:ident) => {
        stringify!($variant)
    };
    (@name $variant:ident, $name:literal) => {
        $name
    };
}
