pub mod address;
pub mod contact;
pub mod user;

pub use address::*;
pub use contact::*;
pub use user::*;

use serde::{Deserialize, Deserializer};

/// `""` and an absent field mean the same thing for optional string fields.
pub(crate) fn empty_string_as_none<'de, D>(de: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(de)?;
    Ok(value.filter(|s| !s.is_empty()))
}
