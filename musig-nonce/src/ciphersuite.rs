//! Ciphersuite
//!
//! Ciphersuite specifies the curve on which nonces are generated, and how a single nonce
//! commitment is encoded on the wire.
//!
//! Out of the box, we provide:
//! * [Secp256k1], requires `ciphersuite-secp256k1` feature (enabled by default)
//! * [Secp256r1], requires `ciphersuite-secp256r1` feature

use generic_ec::{Curve, NonZero, Point};

#[cfg(feature = "ciphersuite-secp256k1")]
mod secp256k1;
#[cfg(feature = "ciphersuite-secp256r1")]
mod secp256r1;

#[cfg(feature = "ciphersuite-secp256k1")]
pub use secp256k1::Secp256k1;
#[cfg(feature = "ciphersuite-secp256r1")]
pub use secp256r1::Secp256r1;

/// Size of compressed point in bytes
pub const POINT_SIZE: usize = 33;

/// Ciphersuite determines an underlying curve and encoding of the points
///
/// Public nonce encoding is defined in terms of compressed points, so the curve must have
/// a [`POINT_SIZE`]-bytes compressed form: 1 byte that indicates parity of Y coordinate,
/// followed by X coordinate. Default methods implement SEC1 compressed encoding provided
/// by [`generic_ec`], which is correct for any short Weierstrass curve with 256 bits field.
pub trait Ciphersuite: Sized + Clone + Copy + core::fmt::Debug {
    /// Name of the ciphersuite
    const NAME: &'static str;

    /// Underlying curve
    type Curve: Curve;

    /// Serializes non-zero point in compressed form
    #[allow(clippy::expect_used)]
    fn serialize_point(point: &NonZero<Point<Self::Curve>>) -> [u8; POINT_SIZE] {
        let bytes = (**point).to_bytes(true);
        // Curve of the ciphersuite must have POINT_SIZE-bytes compressed points
        bytes
            .as_bytes()
            .try_into()
            .expect("compressed point size doesn't match")
    }

    /// Deserializes point in compressed form
    ///
    /// Returns `None` if bytes do not encode a valid point. Point at infinity doesn't have
    /// a compressed form, so it's never returned by this function.
    fn deserialize_point(bytes: &[u8; POINT_SIZE]) -> Option<NonZero<Point<Self::Curve>>> {
        let point = Point::from_bytes(bytes).ok()?;
        NonZero::from_point(point)
    }
}
