//! JSON wire form: a valid container encodes exactly like its value, an
//! invalid one as `null`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Nullable;

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.as_option() {
            Some(value) => value.serialize(serializer),
            None => serializer.serialize_none(),
        }
    }
}

/// Always yields an initialized container. Used as a struct field together
/// with `#[serde(default)]`, a missing key leaves the field untouched
/// ([`Nullable::is_initialized`] is false) while an explicit `null` clears it.
impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Nullable::from_option)
    }
}

impl<T> Nullable<T> {
    /// Decodes a single JSON token into `self`.
    ///
    /// `null` makes the container invalid, anything else must decode as `T`.
    /// A decode error is returned as is and leaves `self` unchanged.
    pub fn unmarshal_json<'de>(&mut self, data: &'de [u8]) -> serde_json::Result<()>
    where
        T: Deserialize<'de>,
    {
        match serde_json::from_slice::<Nullable<T>>(data) {
            Ok(decoded) => {
                if !decoded.is_valid() {
                    log::trace!("decoded JSON null into Nullable");
                }
                *self = decoded;
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected JSON token for Nullable: {}", err);
                Err(err)
            }
        }
    }

    pub fn marshal_json(&self) -> serde_json::Result<Vec<u8>>
    where
        T: Serialize,
    {
        serde_json::to_vec(self)
    }
}
