//! # Optional
//!
//! [`Optional<T>`] tells "this field was not mentioned" apart from "this field
//! was set", which is what partial updates need. Unlike `std::option::Option`
//! it refuses to hold a half-built value: a present payload is either fully
//! complete, or exactly `T::default()`, which callers use to mean "clear this
//! field". Anything in between is rejected when the wrapper is built, so a
//! partially filled compound value (a city without its postcode) never travels
//! further than the request parser.
//!
//! The type has no mutating accessors. It is built once and read once.

use crate::complete::Complete;
use crate::error::IncompleteValue;
use std::fmt::Debug;

/// A value that is either absent, or present and never partially complete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Optional<T> {
    value: Option<T>,
}

impl<T> Optional<T> {
    /// The absent state. Always valid, whatever `T` is.
    pub fn empty() -> Self {
        Self { value: None }
    }

    pub fn is_present(&self) -> bool {
        self.value.is_some()
    }

    /// Borrows the present value, if any.
    pub fn as_present(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Consumes the wrapper, yielding the present value, if any.
    pub fn into_present(self) -> Option<T> {
        self.value
    }
}

impl<T> Optional<T>
where
    T: Complete + Default + PartialEq + Debug,
{
    /// Wraps a present value.
    ///
    /// Accepts a complete value and the zero value. Fails with
    /// [`IncompleteValue`] for anything partially filled in.
    pub fn present(value: T) -> Result<Self, IncompleteValue> {
        if !value.is_complete() && value != T::default() {
            return Err(IncompleteValue::of(&value));
        }
        Ok(Self { value: Some(value) })
    }
}

impl<T: Default> Optional<T> {
    /// Returns the held value, or `T::default()` when absent, together with
    /// the presence flag. Never fails.
    pub fn into_parts(self) -> (T, bool) {
        match self.value {
            Some(value) => (value, true),
            None => (T::default(), false),
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self {
        Self::empty()
    }
}

/// An empty wrapper is complete, and so is a present one: construction already
/// rejected partial payloads, and a zero payload is a valid "clear" request.
impl<T> Complete for Optional<T>
where
    T: Complete + Default + PartialEq,
{
    fn is_complete(&self) -> bool {
        match &self.value {
            None => true,
            Some(value) => value.is_complete() || *value == T::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Complete;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Code(String);

    impl Complete for Code {
        fn is_complete(&self) -> bool {
            !self.0.is_empty()
        }
    }

    #[derive(Debug, Default, Clone, PartialEq, Complete)]
    struct Address {
        city: Code,
        postcode: Code,
    }

    fn address(city: &str, postcode: &str) -> Address {
        Address {
            city: Code(city.into()),
            postcode: Code(postcode.into()),
        }
    }

    #[test]
    fn test_present_accepts_complete_value() {
        let opt = Optional::present(address("Berlin", "10115")).unwrap();
        assert!(opt.is_present());
        assert!(opt.is_complete());
        assert_eq!(opt.into_parts(), (address("Berlin", "10115"), true));
    }

    #[test]
    fn test_present_accepts_zero_value_as_clear() {
        let opt = Optional::present(Address::default()).unwrap();
        assert!(opt.is_complete());
        assert_eq!(opt.into_parts(), (Address::default(), true));
    }

    #[test]
    fn test_present_rejects_partial_value() {
        let err = Optional::present(address("Berlin", "")).unwrap_err();
        assert!(err.type_name().ends_with("Address"));
        assert!(err.value().contains("Berlin"));
    }

    #[test]
    fn test_empty_yields_zero_and_absent() {
        let opt = Optional::<Address>::empty();
        assert!(!opt.is_present());
        assert!(opt.is_complete());
        assert_eq!(opt.as_present(), None);
        assert_eq!(opt.into_parts(), (Address::default(), false));
        assert_eq!(Optional::<Address>::default(), Optional::empty());
    }

    #[test]
    fn test_into_present_maps_to_std_option() {
        let opt = Optional::present(Code("x".into())).unwrap();
        assert_eq!(opt.as_present(), Some(&Code("x".into())));
        assert_eq!(opt.into_present(), Some(Code("x".into())));
    }
}
