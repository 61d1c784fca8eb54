//! Accessor generation macros
//!
//! These macros eliminate repetitive match code on the crate's sum types.
//! All macros use `paste` internally for identifier concatenation.

/// Generate is_xxx, as_xxx, as_xxx_mut for enums with typed variants
///
/// Uses paste's `:camel` modifier to convert method name to variant name.
/// # Generated methods per variant:
/// - `is_xxx(&self) -> bool`
/// - `as_xxx(&self) -> Option<&Type>`
/// - `as_xxx_mut(&mut self) -> Option<&mut Type>`
///
/// # Example
/// ```ignore
/// impl Node {
///     // element -> Element, text -> Text
///     impl_enum_accessors!(element, text);
/// }
/// ```
#[macro_export]
macro_rules! impl_enum_accessors {
    ($($variant:ident),* $(,)?) => {
        ::paste::paste! {
            $(
                #[doc = "Check if this is a " [<$variant:camel>] " node"]
                #[inline]
                pub fn [<is_ $variant>](&self) -> bool {
                    matches!(self, Self::[<$variant:camel>](_))
                }

                #[doc = "Try to get as " $variant " reference"]
                #[inline]
                pub fn [<as_ $variant>](&self) -> Option<&[<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }

                #[doc = "Try to get as mutable " $variant " reference"]
                #[inline]
                pub fn [<as_ $variant _mut>](&mut self) -> Option<&mut [<$variant:camel>]> {
                    match self { Self::[<$variant:camel>](v) => Some(v), _ => None }
                }
            )*
        }
    };
}

/// Generate a `name()` method mapping fieldless enum variants to string names
///
/// # Example
/// ```ignore
/// impl ComponentType {
///     impl_variant_names!(Heading => "heading", Paragraph => "paragraph");
/// }
/// ```
#[macro_export]
macro_rules! impl_variant_names {
    ($($variant:ident => $name:literal),* $(,)?) => {
        /// Stable lowercase name of this variant
        pub const fn name(&self) -> &'static str {
            match self {
                $(Self::$variant => $name,)*
            }
        }

        /// All variants in declaration order
        pub const fn all() -> &'static [Self] {
            &[$(Self::$variant,)*]
        }
    };
}
