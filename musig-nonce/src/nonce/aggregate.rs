//! Public nonces aggregation
//!
//! Coordinator collects public nonces from all signers and sums them up component-wise:
//! $K_1 = \sum_i K_{1,i}$, $K_2 = \sum_i K_{2,i}$. Aggregated nonce is then sent to each signer.
//!
//! Point addition is commutative and associative, so aggregated nonce doesn't depend on the order
//! in which nonces were collected. Partial aggregates can be combined via `+`, for instance
//! `aggregate(&[a, b, c]) == Ok(a + aggregate(&[b, c])?)`.

use core::{fmt, ops};

use generic_ec::Point;

use crate::Ciphersuite;

use super::PubNonce;

/// Aggregates public nonces of all signers
///
/// Returns error if `nonces` is empty.
///
/// Components of resulting nonce may be equal to point at infinity. It's not an error: signing
/// session is responsible for handling that, see [`PubNonce::has_infinity`].
pub fn aggregate<C: Ciphersuite>(nonces: &[PubNonce<C>]) -> Result<PubNonce<C>, AggregateError> {
    if nonces.is_empty() {
        return Err(Reason::NoNonces.into());
    }

    let (k1, k2) = sum_nonces(nonces);
    Ok(PubNonce::from_points(k1, k2))
}

/// Sums up nonces component-wise
///
/// Returns `(zero, zero)` if list is empty.
fn sum_nonces<C: Ciphersuite>(nonces: &[PubNonce<C>]) -> (Point<C::Curve>, Point<C::Curve>) {
    nonces
        .iter()
        .fold((Point::zero(), Point::zero()), |(k1, k2), nonce| {
            (k1 + nonce.k1, k2 + nonce.k2)
        })
}

impl<C: Ciphersuite> ops::Add for PubNonce<C> {
    type Output = PubNonce<C>;
    fn add(self, rhs: Self) -> Self::Output {
        PubNonce::from_points(self.k1 + rhs.k1, self.k2 + rhs.k2)
    }
}

impl<C: Ciphersuite> ops::Add<&PubNonce<C>> for &PubNonce<C> {
    type Output = PubNonce<C>;
    fn add(self, rhs: &PubNonce<C>) -> Self::Output {
        *self + *rhs
    }
}

/// Aggregation error
#[derive(Debug)]
pub struct AggregateError(Reason);

#[derive(Debug)]
enum Reason {
    NoNonces,
}

impl From<Reason> for AggregateError {
    fn from(err: Reason) -> Self {
        Self(err)
    }
}

impl fmt::Display for AggregateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.0 {
            Reason::NoNonces => f.write_str(
                "invalid argument: list of nonces is empty, \
                at least one nonce is required",
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AggregateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &self.0 {
            Reason::NoNonces => None,
        }
    }
}
