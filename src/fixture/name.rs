use crate::shared::errors::FixtureError;

/// Unqualified name of `T`: module path and generic arguments are dropped,
/// so `my_crate::tests::FooTest<u8>` becomes `FooTest`.
pub fn short_type_name<T: ?Sized>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}

/// Fixture names end up inside a file name, so they must not be able to
/// point anywhere but the allocation root.
pub fn validate_fixture_name(name: &str) -> Result<(), FixtureError> {
    let reason = if name.is_empty() {
        Some("must be non-empty")
    } else if name.contains(['/', '\\']) {
        Some("must not contain path separators")
    } else if name.contains('\0') {
        Some("must not contain NUL bytes")
    } else if name == "." || name == ".." {
        Some("must not be a relative directory reference")
    } else {
        None
    };

    match reason {
        Some(reason) => Err(FixtureError::InvalidName {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
