//! Short type names for diagnostics

/// Last path segment of `T`'s type name, generic arguments stripped.
///
/// `alloc::vec::Vec<u8>` becomes `Vec`, `my_app::domain::Item` becomes `Item`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Item;

    #[test]
    fn test_plain_type() {
        assert_eq!(short_type_name::<Item>(), "Item");
        assert_eq!(short_type_name::<i64>(), "i64");
    }

    #[test]
    fn test_generic_type() {
        assert_eq!(short_type_name::<Vec<u8>>(), "Vec");
        assert_eq!(short_type_name::<std::collections::HashMap<String, Item>>(), "HashMap");
    }
}
