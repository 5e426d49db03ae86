/// ASCII domain tag prefixed to every seed derivation.
pub const SEED_DOMAIN_TAG: &[u8; 11] = b"bns.seed.v1";

/// SEED = `truncate_u32`( BLAKE3( `SEED_DOMAIN_TAG` || LE64(height) || `merkle_root` ) )
///
/// The downstream audio generator takes this alongside the prompt so the same
/// block always renders the same pack.
#[must_use]
pub fn derive_generation_seed(merkle_root: &[u8], height: u64) -> u32 {
    let mut h = blake3::Hasher::new();
    h.update(SEED_DOMAIN_TAG);
    h.update(&height.to_le_bytes());
    h.update(merkle_root);
    let digest = h.finalize();
    let mut out = [0u8; 4];
    out.copy_from_slice(&digest.as_bytes()[..4]);
    u32::from_le_bytes(out)
}
