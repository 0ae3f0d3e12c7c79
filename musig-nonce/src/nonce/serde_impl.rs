//! Public nonce is serialized as bytes string containing its canonical encoding

use core::{fmt, marker::PhantomData};

use crate::Ciphersuite;

use super::PubNonce;

impl<C: Ciphersuite> serde::Serialize for PubNonce<C> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_bytes(&self.to_bytes())
    }
}

impl<'de, C: Ciphersuite> serde::Deserialize<'de> for PubNonce<C> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_bytes(Visitor(PhantomData))
    }
}

struct Visitor<C>(PhantomData<C>);

impl<'de, C: Ciphersuite> serde::de::Visitor<'de> for Visitor<C> {
    type Value = PubNonce<C>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "public nonce ({} bytes)",
            PubNonce::<C>::SERIALIZED_LEN
        )
    }

    fn visit_bytes<E>(self, v: &[u8]) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        PubNonce::from_bytes(v).map_err(E::custom)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        use serde::de::Error;

        let mut bytes = [0u8; 66];
        let mut len = 0;
        while let Some(byte) = seq.next_element::<u8>()? {
            let Some(slot) = bytes.get_mut(len) else {
                return Err(A::Error::invalid_length(len + 1, &self));
            };
            *slot = byte;
            len += 1;
        }
        if len != bytes.len() {
            return Err(A::Error::invalid_length(len, &self));
        }
        PubNonce::from_bytes(&bytes).map_err(A::Error::custom)
    }
}
