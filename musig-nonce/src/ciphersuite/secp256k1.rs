use crate::Ciphersuite;

/// Secp256k1 ciphersuite, as used in Bitcoin MuSig2 ([BIP-327])
///
/// [BIP-327]: https://github.com/bitcoin/bips/blob/master/bip-0327.mediawiki
#[derive(Debug, Clone, Copy)]
pub struct Secp256k1;

impl Ciphersuite for Secp256k1 {
    const NAME: &'static str = "MuSig2-secp256k1";

    type Curve = generic_ec::curves::Secp256k1;
}
