//! serde support for public keys
//!
//! A public key serializes as its 64-byte encoding. Deserialization checks
//! the length only; validation stays an explicit step.

use core::fmt;

use serde::de::{self, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::Csidh512PublicKey;
use isocrypt_algorithms::csidh::{Fp, CSIDH_PUBLIC_KEY_SIZE};

impl Serialize for Csidh512PublicKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bytes(&self.to_array())
    }
}

struct PublicKeyVisitor;

impl<'de> Visitor<'de> for PublicKeyVisitor {
    type Value = Csidh512PublicKey;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bytes of CSIDH-512 public key", CSIDH_PUBLIC_KEY_SIZE)
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<Self::Value, E> {
        let array: &[u8; CSIDH_PUBLIC_KEY_SIZE] = v
            .try_into()
            .map_err(|_| E::invalid_length(v.len(), &self))?;
        Ok(Csidh512PublicKey(Fp::from_le_bytes(array)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut array = [0u8; CSIDH_PUBLIC_KEY_SIZE];
        for (i, byte) in array.iter_mut().enumerate() {
            *byte = seq
                .next_element()?
                .ok_or_else(|| de::Error::invalid_length(i, &self))?;
        }
        if seq.next_element::<u8>()?.is_some() {
            return Err(de::Error::invalid_length(CSIDH_PUBLIC_KEY_SIZE + 1, &self));
        }
        Ok(Csidh512PublicKey(Fp::from_le_bytes(&array)))
    }
}

impl<'de> Deserialize<'de> for Csidh512PublicKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_bytes(PublicKeyVisitor)
    }
}
