use crate::Ciphersuite;

/// Secp256r1 (aka NIST P-256) ciphersuite
#[derive(Debug, Clone, Copy)]
pub struct Secp256r1;

impl Ciphersuite for Secp256r1 {
    const NAME: &'static str = "MuSig2-secp256r1";

    type Curve = generic_ec::curves::Secp256r1;
}
