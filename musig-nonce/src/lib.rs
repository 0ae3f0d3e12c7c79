//! Public nonce aggregation for MuSig2-style multi-party Schnorr signatures
//!
//! In MuSig2, every signer publishes a pair of nonce commitments $(K_1, K_2)$ before signing.
//! The group then sums the commitments component-wise into a single aggregate pair, which is
//! fed into the signing session of each signer.
//!
//! This crate provides:
//! * [`PubNonce`]: a pair of nonce commitments, either published by a single signer or aggregated
//! * [Aggregation](nonce::aggregate) of any non-empty list of public nonces
//! * Canonical 66 bytes encoding: two compressed points, where point at infinity is
//!   encoded as 33 zero bytes
//!
//! Note that aggregated nonce components may legitimately be equal to the point at infinity
//! (e.g. when malicious signers cancel out each other's commitments). Such nonce is not considered
//! invalid: it's represented, serialized and parsed faithfully. Signing session must check
//! [`PubNonce::has_infinity`] and apply its substitution rule.
//!
//! This crate doesn't provide (and won't):
//! * Nonce generation
//! * Key aggregation
//! * Signing and verification
//!
//! ## Example
//! ```rust
//! use musig_nonce::{
//!     ciphersuite::Secp256k1,
//!     generic_ec::{curves, Point, Scalar},
//!     PubNonce,
//! };
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let k = |x: u16| Point::<curves::Secp256k1>::generator() * Scalar::from(x);
//! let alice = PubNonce::<Secp256k1>::from_points(k(3), k(5));
//! let bob = PubNonce::<Secp256k1>::from_points(k(7), k(11));
//!
//! let agg_nonce = PubNonce::aggregate(&[alice, bob])?;
//! assert_eq!(agg_nonce.k1(), k(10));
//!
//! // Aggregated nonce is sent to signers in its canonical encoding
//! let bytes = agg_nonce.to_bytes();
//! assert_eq!(PubNonce::<Secp256k1>::from_bytes(&bytes)?, agg_nonce);
//! # Ok(()) }
//! ```

#![no_std]
#![forbid(unsafe_code, unused_crate_dependencies)]
#![deny(clippy::expect_used, clippy::unwrap_used, clippy::panic)]
#![deny(missing_docs)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

#[cfg(feature = "std")]
extern crate std;

pub use generic_ec;

pub mod ciphersuite;
pub mod nonce;

pub use self::{
    ciphersuite::Ciphersuite,
    nonce::{aggregate::AggregateError, Component, InvalidPubNonce, PubNonce},
};
