//! Newtype IDs for type-safe entity references.
//!
//! Catalog documents identify products, categories, services, technologies
//! and stores by string slugs, and FAQs, testimonials and team members by
//! small integers. The `define_id!` and `define_numeric_id!` macros wrap both
//! so IDs from different sections cannot be mixed up.

/// Macro to define a type-safe string ID wrapper.
///
/// Creates a newtype wrapper around `String` with:
/// - `Serialize`/`Deserialize` with `#[serde(transparent)]`
/// - `Debug`, `Clone`, `PartialEq`, `Eq`, `Hash`, `PartialOrd`, `Ord`
/// - `new()`, `as_str()` and `Display`
/// - `From<&str>` and `From<String>`
///
/// # Example
///
/// ```rust
/// # use showroom_core::define_id;
/// define_id!(ProductId);
/// define_id!(CategoryId);
///
/// let product = ProductId::new("w-001");
/// let category = CategoryId::new("w-001");
///
/// // These are different types, so this won't compile:
/// // let _: ProductId = category;
/// assert_eq!(product.as_str(), category.as_str());
/// ```
#[macro_export]
macro_rules! define_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new ID from any string-like value.
            #[must_use]
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Borrow the underlying string.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

/// Macro to define a type-safe numeric ID wrapper.
///
/// Creates a `Copy` newtype wrapper around `i64` with transparent serde,
/// `new()`/`get()` and `Display`.
#[macro_export]
macro_rules! define_numeric_id {
    ($name:ident) => {
        #[derive(
            Debug,
            Clone,
            Copy,
            PartialEq,
            Eq,
            Hash,
            PartialOrd,
            Ord,
            ::serde::Serialize,
            ::serde::Deserialize
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Create a new ID from an i64 value.
            #[must_use]
            pub const fn new(id: i64) -> Self {
                Self(id)
            }

            /// Get the underlying i64 value.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }
        }

        impl ::core::fmt::Display for $name {
            fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<i64> for $name {
            fn from(id: i64) -> Self {
                Self(id)
            }
        }
    };
}

define_id!(ProductId);
define_id!(CategoryId);
define_id!(ServiceId);
define_id!(TechnologyId);
define_id!(StoreId);

define_numeric_id!(FaqId);
define_numeric_id!(TestimonialId);
define_numeric_id!(TeamMemberId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_string_id_is_transparent() {
        let id: ProductId = serde_json::from_str("\"w-001\"").expect("valid json");
        assert_eq!(id.as_str(), "w-001");
        assert_eq!(serde_json::to_string(&id).expect("serializable"), "\"w-001\"");
    }

    #[test]
    fn test_string_id_display() {
        let id = CategoryId::new("luxury");
        assert_eq!(id, CategoryId::from("luxury"));
        assert_eq!(id.to_string(), "luxury");
    }

    #[test]
    fn test_numeric_id_roundtrip() {
        let id: FaqId = serde_json::from_str("7").expect("valid json");
        assert_eq!(id.get(), 7);
        assert_eq!(id, FaqId::new(7));
    }
}
