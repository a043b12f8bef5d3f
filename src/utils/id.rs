//! Identifier generation
//!
//! Ids are 24 lowercase hex characters: an 8-character Unix timestamp in
//! seconds followed by 16 random hex digits. No collision check is made.

use rand::Rng;

use super::time::current_timestamp;

const RANDOM_DIGITS: usize = 16;
const HEX_DIGITS: &[u8] = b"0123456789abcdef";

/// Generate a new object id
pub fn generate_object_id() -> String {
    let mut rng = rand::thread_rng();
    let mut id = format!("{:08x}", current_timestamp());
    id.extend((0..RANDOM_DIGITS).map(|_| {
        let digit = rng.gen_range(0..HEX_DIGITS.len());
        HEX_DIGITS[digit] as char
    }));
    id
}
