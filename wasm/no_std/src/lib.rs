#![no_std]

pub use musig_nonce;
