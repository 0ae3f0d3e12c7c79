//! Public nonce
//!
//! [`PubNonce`] is a pair of nonce commitments $(K_1, K_2)$. It's either published by
//! a single signer, or obtained by [aggregating](aggregate) nonces of all signers.
//!
//! ## Encoding
//! Public nonce is encoded as 66 bytes: compressed $K_1$ followed by compressed $K_2$. Point at
//! infinity doesn't have a compressed form, so it's encoded as 33 zero bytes. Only aggregated
//! nonce can have components equal to point at infinity, but parsing doesn't distinguish
//! whether bytes encode aggregated nonce or not.

use core::fmt;

use generic_ec::{NonZero, Point};

use crate::ciphersuite::{Ciphersuite, POINT_SIZE};

pub mod aggregate;
#[cfg(feature = "serde")]
mod serde_impl;

/// Encoding of point at infinity
const ZERO_POINT_ENCODING: [u8; POINT_SIZE] = [0u8; POINT_SIZE];

/// Public nonce
///
/// Holds two components $K_1$ and $K_2$, each of them is either a valid point or a point
/// at infinity.
pub struct PubNonce<C: Ciphersuite> {
    k1: Point<C::Curve>,
    k2: Point<C::Curve>,
}

/// Component of [`PubNonce`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Component {
    /// First component $K_1$
    K1,
    /// Second component $K_2$
    K2,
}

impl<C: Ciphersuite> PubNonce<C> {
    /// Size of serialized public nonce in bytes
    pub const SERIALIZED_LEN: usize = 2 * POINT_SIZE;

    /// Constructs a public nonce of a single signer
    ///
    /// Nonce commitments generated by the signer are never zero.
    pub fn new(k1: NonZero<Point<C::Curve>>, k2: NonZero<Point<C::Curve>>) -> Self {
        Self::from_points(*k1, *k2)
    }

    /// Constructs a public nonce from two arbitrary points
    ///
    /// Any of the points can be zero (point at infinity).
    pub fn from_points(k1: Point<C::Curve>, k2: Point<C::Curve>) -> Self {
        Self { k1, k2 }
    }

    /// Aggregates public nonces of all signers
    ///
    /// Alias to [`aggregate::aggregate`]
    pub fn aggregate(nonces: &[Self]) -> Result<Self, aggregate::AggregateError> {
        aggregate::aggregate(nonces)
    }

    /// Returns $K_1$
    pub fn k1(&self) -> Point<C::Curve> {
        self.k1
    }

    /// Returns $K_2$
    pub fn k2(&self) -> Point<C::Curve> {
        self.k2
    }

    /// Returns specified component
    pub fn get(&self, component: Component) -> Point<C::Curve> {
        match component {
            Component::K1 => self.k1,
            Component::K2 => self.k2,
        }
    }

    /// Checks whether specified component is point at infinity
    ///
    /// Can only happen for aggregated nonce: components of aggregated nonce sum up to
    /// zero if signers cancelled out each other's commitments. Signing session must
    /// detect that and replace the component with a fallback value.
    pub fn is_infinity(&self, component: Component) -> bool {
        self.get(component).is_zero()
    }

    /// Checks whether any of the components is point at infinity
    pub fn has_infinity(&self) -> bool {
        self.is_infinity(Component::K1) || self.is_infinity(Component::K2)
    }

    /// Parses public nonce from its 66 bytes encoding
    ///
    /// Each 33 bytes half must be either a compressed point, or 33 zero bytes which
    /// encode point at infinity.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, InvalidPubNonce> {
        if bytes.len() != Self::SERIALIZED_LEN {
            return Err(InvalidPubNonce::InvalidLength {
                actual: bytes.len(),
            });
        }
        let (k1, k2) = bytes.split_at(POINT_SIZE);
        Ok(Self {
            k1: parse_component::<C>(k1, Component::K1)?,
            k2: parse_component::<C>(k2, Component::K2)?,
        })
    }

    /// Serializes public nonce into 66 bytes
    pub fn to_bytes(&self) -> [u8; 66] {
        let mut out = [0u8; 66];
        self.write_to_slice(&mut out);
        out
    }

    /// Writes serialized public nonce into the first [`SERIALIZED_LEN`](Self::SERIALIZED_LEN)
    /// bytes of `out`
    ///
    /// Bytes of `out` after [`SERIALIZED_LEN`](Self::SERIALIZED_LEN) are not modified.
    ///
    /// # Panics
    /// Panics if `out` is shorter than [`SERIALIZED_LEN`](Self::SERIALIZED_LEN)
    pub fn write_to_slice(&self, out: &mut [u8]) {
        let (k1_out, rest) = out[..Self::SERIALIZED_LEN].split_at_mut(POINT_SIZE);
        k1_out.copy_from_slice(&encode_component::<C>(self.k1));
        rest.copy_from_slice(&encode_component::<C>(self.k2));
    }
}

fn parse_component<C: Ciphersuite>(
    bytes: &[u8],
    component: Component,
) -> Result<Point<C::Curve>, InvalidPubNonce> {
    let bytes: &[u8; POINT_SIZE] = bytes
        .try_into()
        .map_err(|_| InvalidPubNonce::MalformedEncoding(component))?;
    if let Some(point) = C::deserialize_point(bytes) {
        Ok(*point)
    } else if *bytes == ZERO_POINT_ENCODING {
        Ok(Point::zero())
    } else {
        Err(InvalidPubNonce::MalformedEncoding(component))
    }
}

fn encode_component<C: Ciphersuite>(point: Point<C::Curve>) -> [u8; POINT_SIZE] {
    match NonZero::from_point(point) {
        Some(point) => C::serialize_point(&point),
        None => ZERO_POINT_ENCODING,
    }
}

static_assertions::const_assert_eq!(2 * POINT_SIZE, 66);

impl<C: Ciphersuite> Clone for PubNonce<C> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<C: Ciphersuite> Copy for PubNonce<C> {}

impl<C: Ciphersuite> PartialEq for PubNonce<C> {
    fn eq(&self, other: &Self) -> bool {
        self.k1 == other.k1 && self.k2 == other.k2
    }
}
impl<C: Ciphersuite> Eq for PubNonce<C> {}

impl<C: Ciphersuite> core::hash::Hash for PubNonce<C> {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        // Encoding is canonical, so equal nonces produce equal hashes
        self.to_bytes().hash(state)
    }
}

impl<C: Ciphersuite> fmt::Debug for PubNonce<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PubNonce")
            .field("ciphersuite", &C::NAME)
            .field("k1", &self.k1)
            .field("k2", &self.k2)
            .finish()
    }
}

impl<C: Ciphersuite> TryFrom<&[u8]> for PubNonce<C> {
    type Error = InvalidPubNonce;
    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        Self::from_bytes(bytes)
    }
}

impl<C: Ciphersuite> TryFrom<[u8; 66]> for PubNonce<C> {
    type Error = InvalidPubNonce;
    fn try_from(bytes: [u8; 66]) -> Result<Self, Self::Error> {
        Self::from_bytes(&bytes)
    }
}

impl<C: Ciphersuite> From<PubNonce<C>> for [u8; 66] {
    fn from(nonce: PubNonce<C>) -> Self {
        nonce.to_bytes()
    }
}

/// Bytes do not encode a valid public nonce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidPubNonce {
    /// Encoding must be exactly 66 bytes long
    InvalidLength {
        /// Length of the input
        actual: usize,
    },
    /// Component is neither a compressed point nor an encoding of point at infinity
    MalformedEncoding(Component),
}

impl fmt::Display for InvalidPubNonce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidPubNonce::InvalidLength { actual } => write!(
                f,
                "invalid length of public nonce: expected 66 bytes, got {actual}"
            ),
            InvalidPubNonce::MalformedEncoding(Component::K1) => {
                f.write_str("malformed encoding of K1 component of public nonce")
            }
            InvalidPubNonce::MalformedEncoding(Component::K2) => {
                f.write_str("malformed encoding of K2 component of public nonce")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidPubNonce {}
