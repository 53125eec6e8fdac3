//! Anti-bot attestation check.
//!
//! Every trade carries a secp256k1 signature, produced off-chain by the
//! configured authority. Buys sign `sha256(ATTESTATION_MESSAGE)` and sells sign
//! `sha256(sell_message(last_received_time))`. The authority is identified by
//! `sha256` of its uncompressed 64-byte public key.

use anchor_lang::prelude::*;
use anchor_lang::solana_program::hash::hash;
use anchor_lang::solana_program::secp256k1_recover::secp256k1_recover;

use crate::errors::LaunchError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub struct Attestation {
    pub signature: [u8; 64],
    pub recovery_id: u8,
}

/// Message a sell attestation signs: the seller's last receive time as 8
/// little-endian bytes, so the authority vouches for the holding period.
pub fn sell_message(last_received_time: i64) -> [u8; 8] {
    last_received_time.to_le_bytes()
}

pub fn attestation_digest(message: &[u8]) -> [u8; 32] {
    hash(message).to_bytes()
}

/// Identity stored in `GlobalConfig::verify_signer` for a raw secp256k1 key.
pub fn signer_identity(public_key: &[u8; 64]) -> Pubkey {
    Pubkey::new_from_array(hash(public_key).to_bytes())
}

pub fn verify(
    signature: &[u8; 64],
    recovery_id: u8,
    expected_signer: &Pubkey,
    message: &[u8],
) -> Result<()> {
    let digest = attestation_digest(message);
    let recovered = secp256k1_recover(&digest, recovery_id, signature)
        .map_err(|_| LaunchError::InvalidSignature)?;
    require_keys_eq!(
        signer_identity(&recovered.to_bytes()),
        *expected_signer,
        LaunchError::InvalidSignature
    );
    Ok(())
}

pub fn verify_attestation(attestation: &Attestation, expected_signer: &Pubkey, message: &[u8]) -> Result<()> {
    verify(
        &attestation.signature,
        attestation.recovery_id,
        expected_signer,
        message,
    )
}
