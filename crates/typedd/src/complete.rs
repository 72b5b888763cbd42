//! # The Completeness Protocol
//!
//! [`Complete`] is the single question every "must-be-valid" type answers:
//! *am I fully populated?*
//!
//! - **Leaf types** (an id, an email address, a digest) answer it by comparing
//!   themselves with their zero value.
//! - **Composite types** answer it by asking each of their fields. Write that
//!   delegation with `#[derive(Complete)]` instead of by hand; fields that are
//!   plain data are opted out with `#[complete(skip)]`.
//! - **Containers** are walked: every element of a `Vec`, slice, array or
//!   `VecDeque`, and the referent of `&T`, `Box`, `Rc` and `Arc`. A `None`
//!   imposes no constraint, a `Some` is checked.
//!
//! The predicate is pure. It never mutates the value, so asking twice gives
//! the same answer.

use crate::error::IncompleteValue;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::rc::Rc;
use std::sync::Arc;

/// A type that can report whether every required constituent is populated.
///
/// # Contract
///
/// `is_complete` MUST return `false` when:
/// - for a leaf type, the value is the type's zero value and zero is not a
///   valid value; or
/// - for a composite type, any completeness-capable constituent reports
///   `false`.
///
/// It must not consult anything beyond the value itself.
pub trait Complete {
    fn is_complete(&self) -> bool;
}

/// Returns [`IncompleteValue`] carrying `value` if it is incomplete.
pub fn ensure_complete<T>(value: &T) -> Result<(), IncompleteValue>
where
    T: Complete + Debug + ?Sized,
{
    if value.is_complete() {
        Ok(())
    } else {
        Err(IncompleteValue::of(value))
    }
}

impl Complete for () {
    fn is_complete(&self) -> bool {
        true
    }
}

impl<T: Complete + ?Sized> Complete for &T {
    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }
}

impl<T: Complete + ?Sized> Complete for Box<T> {
    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }
}

impl<T: Complete + ?Sized> Complete for Rc<T> {
    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }
}

impl<T: Complete + ?Sized> Complete for Arc<T> {
    fn is_complete(&self) -> bool {
        (**self).is_complete()
    }
}

impl<T: Complete> Complete for Option<T> {
    fn is_complete(&self) -> bool {
        self.as_ref().map_or(true, Complete::is_complete)
    }
}

impl<T: Complete> Complete for [T] {
    fn is_complete(&self) -> bool {
        self.iter().all(Complete::is_complete)
    }
}

impl<T: Complete, const N: usize> Complete for [T; N] {
    fn is_complete(&self) -> bool {
        self.iter().all(Complete::is_complete)
    }
}

impl<T: Complete> Complete for Vec<T> {
    fn is_complete(&self) -> bool {
        self.iter().all(Complete::is_complete)
    }
}

impl<T: Complete> Complete for VecDeque<T> {
    fn is_complete(&self) -> bool {
        self.iter().all(Complete::is_complete)
    }
}
