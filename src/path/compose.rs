//! Path composition.
//!
//! The join chosen at a composition point decides what happens when the
//! lookup cannot continue past that point:
//!
//! | left              | join       | right             | result            | boundary segment          |
//! |-------------------|------------|-------------------|-------------------|---------------------------|
//! | `KeyPath`         | `concat`   | `KeyPath`         | `KeyPath`         | required                  |
//! | `OptionalKeyPath` | required   | `OptionalKeyPath` | `OptionalKeyPath` | forced required           |
//! | `OptionalKeyPath` | required   | `KeyPath`         | `OptionalKeyPath` | required (all of right)   |
//! | `OptionalKeyPath` | optional   | `OptionalKeyPath` | `OptionalKeyPath` | kept as is                |
//! | `KeyPath`         | optional   | `OptionalKeyPath` | `OptionalKeyPath` | kept as is                |
//!
//! Only the first segment of the right operand is ever rewritten. Segments
//! deeper in either operand keep the flags they were given when their own
//! path was built.

use super::{KeyPath, OptionalKey, OptionalKeyPath};

/// A path that can appear on the right of [`OptionalKeyPath::join_required`]
pub trait Joinable {
    /// This path's segments as optional-path segments
    fn to_optional_keys(&self) -> Vec<OptionalKey>;
}

impl Joinable for KeyPath {
    fn to_optional_keys(&self) -> Vec<OptionalKey> {
        self.keys.iter().cloned().map(OptionalKey::required).collect()
    }
}

impl Joinable for OptionalKeyPath {
    fn to_optional_keys(&self) -> Vec<OptionalKey> {
        self.keys.clone()
    }
}

impl KeyPath {
    /// `self` followed by `rhs`
    pub fn concat(&self, rhs: &KeyPath) -> KeyPath {
        let mut keys = Vec::with_capacity(self.keys.len() + rhs.keys.len());
        keys.extend_from_slice(&self.keys);
        keys.extend_from_slice(&rhs.keys);
        KeyPath { keys }
    }

    /// Every key of `self` becomes a required segment, followed by `rhs`
    /// unchanged
    pub fn join_optional(&self, rhs: &OptionalKeyPath) -> OptionalKeyPath {
        let mut keys = self.to_optional_keys();
        keys.extend_from_slice(&rhs.keys);
        OptionalKeyPath { keys }
    }
}

impl OptionalKeyPath {
    /// `self` followed by `rhs`, with the first segment of `rhs` forced to
    /// required
    pub fn join_required<R: Joinable + ?Sized>(&self, rhs: &R) -> OptionalKeyPath {
        let mut tail = rhs.to_optional_keys();
        if let Some(first) = tail.first_mut() {
            first.is_required = true;
        }
        let mut keys = self.keys.clone();
        keys.extend(tail);
        OptionalKeyPath { keys }
    }

    /// `self` followed by `rhs`, no flag altered
    pub fn join_optional(&self, rhs: &OptionalKeyPath) -> OptionalKeyPath {
        let mut keys = self.keys.clone();
        keys.extend_from_slice(&rhs.keys);
        OptionalKeyPath { keys }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(path: &OptionalKeyPath) -> Vec<bool> {
        path.keys().iter().map(|k| k.is_required).collect()
    }

    #[test]
    fn concat_preserves_order() {
        let ab = KeyPath::from(["a", "b"]);
        let c = KeyPath::from("c");
        assert_eq!(ab.concat(&c).keys(), ["a", "b", "c"]);
        assert_eq!(c.concat(&ab).keys(), ["c", "a", "b"]);
    }

    #[test]
    fn empty_path_is_identity() {
        let ab = KeyPath::from(["a", "b"]);
        assert_eq!(KeyPath::new().concat(&ab), ab);
        assert_eq!(ab.concat(&KeyPath::new()), ab);

        let opt = OptionalKeyPath::new().optional("a");
        assert_eq!(opt.join_required(&OptionalKeyPath::new()), opt);
        assert_eq!(OptionalKeyPath::new().join_optional(&opt), opt);
    }

    #[test]
    fn required_join_forces_boundary_only() {
        let lhs = OptionalKeyPath::new().optional("a");
        let rhs = OptionalKeyPath::new().optional("b").optional("c");
        let joined = lhs.join_required(&rhs);
        assert_eq!(joined.key_names(), ["a", "b", "c"]);
        assert_eq!(flags(&joined), [false, true, false]);
    }

    #[test]
    fn required_join_with_plain_path_marks_all_required() {
        let lhs = OptionalKeyPath::optional_key("a");
        let joined = lhs.join_required(&KeyPath::from(["b", "c"]));
        assert_eq!(flags(&joined), [false, true, true]);
    }

    #[test]
    fn optional_join_keeps_flags() {
        let lhs = OptionalKeyPath::new().required("a").optional("b");
        let rhs = OptionalKeyPath::new().optional("c").required("d");
        let joined = lhs.join_optional(&rhs);
        assert_eq!(flags(&joined), [true, false, false, true]);
    }

    #[test]
    fn plain_path_joined_optionally_is_required_prefix() {
        let joined = KeyPath::from(["a", "b"]).join_optional(&OptionalKeyPath::optional_key("c"));
        assert_eq!(joined.to_string(), "a.b.c?");
    }

    #[test]
    fn operands_are_not_mutated() {
        let lhs = OptionalKeyPath::optional_key("a");
        let rhs = OptionalKeyPath::optional_key("b");
        let _ = lhs.join_required(&rhs);
        assert!(!rhs.keys()[0].is_required);
        assert_eq!(lhs.len(), 1);
    }
}
