use anyhow::Result;
use rand::rngs::{OsRng, StdRng};
use rand::{Rng, SeedableRng, TryRngCore};

// no 0/O or 1/I, the courier reads this aloud at the door
const RIDER_CODE_CHARACTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";

pub const RIDER_CODE_LEN: usize = 6;

/// Short delivery-proof code shown to the courier at handoff.
pub fn generate_rider_code() -> Result<String> {
    let mut seed = [0u8; 32];
    OsRng.try_fill_bytes(&mut seed)?;
    let mut rng = StdRng::from_seed(seed);

    let code = (0..RIDER_CODE_LEN)
        .map(|_| {
            let idx = rng.random_range(0..RIDER_CODE_CHARACTERS.len());
            RIDER_CODE_CHARACTERS[idx] as char
        })
        .collect();

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rider_code_uses_unambiguous_charset() {
        let code = generate_rider_code().unwrap();

        assert_eq!(code.len(), RIDER_CODE_LEN);
        for c in code.bytes() {
            assert!(RIDER_CODE_CHARACTERS.contains(&c), "unexpected char {c}");
        }
    }
}
