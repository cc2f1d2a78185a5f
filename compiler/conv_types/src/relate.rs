//! Assignability and convertibility between types.
//!
//! Follows the Go rules closely enough for copy generation:
//!
//! - identical types are assignable
//! - identical underlying types are assignable when at least one side is
//!   unnamed
//! - a type with an `Error() string` method is assignable to `error`
//! - convertibility additionally allows identical underlying types,
//!   unnamed pointers to identical underlying bases, numeric-to-numeric,
//!   and `string` to and from byte/rune slices
//!
//! Integer-to-string conversion is deliberately not convertible: it yields a
//! one-rune string, which is never what a field copy means.

use crate::{BasicKind, Idx, Pool, TypeData};

impl Pool {
    /// Whether a value of type `from` can be assigned to a location of type `to`.
    pub fn assignable(&self, from: Idx, to: Idx) -> bool {
        if !self.contains(from) || !self.contains(to) {
            return false;
        }
        if from == to {
            return true;
        }

        let from_under = self.underlying(from);
        let to_under = self.underlying(to);
        if !from_under.is_none()
            && from_under == to_under
            && (!self.is_named(from) || !self.is_named(to))
        {
            return true;
        }

        to == Idx::ERROR && self.has_error_method(from)
    }

    /// Whether a value of type `from` can be explicitly converted to `to`.
    pub fn convertible(&self, from: Idx, to: Idx) -> bool {
        if self.assignable(from, to) {
            return true;
        }
        if !self.contains(from) || !self.contains(to) {
            return false;
        }

        let from_under = self.underlying(from);
        let to_under = self.underlying(to);
        if from_under.is_none() || to_under.is_none() {
            return false;
        }
        if from_under == to_under {
            return true;
        }

        // Unnamed pointers whose base types share an underlying type.
        if let (Some(TypeData::Pointer(from_elem)), Some(TypeData::Pointer(to_elem))) =
            (self.get(from), self.get(to))
        {
            let from_base = self.underlying(*from_elem);
            if !from_base.is_none() && from_base == self.underlying(*to_elem) {
                return true;
            }
        }

        match (self.basic_kind(from_under), self.basic_kind(to_under)) {
            (Some(a), Some(b)) if a.is_numeric() && b.is_numeric() => true,
            (Some(BasicKind::String), None) => self.is_byte_or_rune_slice(to_under),
            (None, Some(BasicKind::String)) => self.is_byte_or_rune_slice(from_under),
            _ => false,
        }
    }

    fn is_byte_or_rune_slice(&self, idx: Idx) -> bool {
        match self.get(idx) {
            Some(TypeData::Slice(elem)) => matches!(
                self.basic_kind(*elem),
                Some(BasicKind::Uint8 | BasicKind::Int32)
            ),
            _ => false,
        }
    }

    fn has_error_method(&self, idx: Idx) -> bool {
        self.method_set(idx)
            .iter()
            .any(|m| m.name == "Error" && m.params.is_empty() && m.results == [Idx::STRING])
    }
}

#[cfg(test)]
mod tests;
