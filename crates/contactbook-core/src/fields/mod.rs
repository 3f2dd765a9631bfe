//! Field constructors — validated domain values built from raw text
//!
//! Every field type is immutable and can only be obtained through `parse`,
//! so holding one proves every rule for that field held. The canonical
//! string of a field is what gets persisted; deserializing goes back through
//! `parse`, which makes the parser the gate for loaded data too.

mod address;
mod email;
mod meeting;
mod name;
mod phone;

pub use address::Address;
pub use email::Email;
pub use meeting::{MeetingName, Venue, When};
pub use name::Name;
pub use phone::{OtherPhones, Phone};

/// String conversions shared by every text-backed field
///
/// The type must provide `parse(&str) -> Result<Self>` and `as_str(&self)`.
macro_rules! text_field {
    ($ty:ident) => {
        impl std::str::FromStr for $ty {
            type Err = crate::error::ValidationError;

            fn from_str(s: &str) -> crate::error::Result<Self> {
                $ty::parse(s)
            }
        }

        impl TryFrom<String> for $ty {
            type Error = crate::error::ValidationError;

            fn try_from(s: String) -> crate::error::Result<Self> {
                $ty::parse(&s)
            }
        }

        impl From<$ty> for String {
            fn from(value: $ty) -> String {
                value.as_str().to_string()
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

pub(crate) use text_field;
