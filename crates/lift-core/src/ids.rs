//! Strongly typed identifiers.
//!
//! `CabinId` is the registration index of a cabin inside the registry.  The
//! human-readable label ("A", "B", …) lives on the cabin itself.

use std::fmt;

/// A floor index.  Signed so that out-of-range input can be represented and
/// rejected at the boundary; every validated floor is `>= 0`.
pub type Floor = i32;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// Index of a cabin in `CabinRegistry`, assigned in registration order.
    pub struct CabinId(u32);
}
