const MULTIPLIER: i32 = 31;

/// Polynomial string hash: `acc = acc * 31 + c` over the key's chars.
///
/// The accumulator is an `i32` with wrapping arithmetic. The digest is its
/// unsigned absolute value, so an accumulator of `i32::MIN` yields
/// `2_147_483_648` rather than overflowing. Each char contributes its Unicode
/// scalar value, so keys outside the Basic Multilingual Plane hash differently
/// than they would over UTF-16 code units.
pub fn hash(key: &str) -> u32 {
    key.chars()
        .fold(0i32, |acc, c| {
            acc.wrapping_mul(MULTIPLIER).wrapping_add(c as u32 as i32)
        })
        .unsigned_abs()
}

/// Bucket index of `key` in an array of `capacity` slots.
pub fn bucket_index(key: &str, capacity: usize) -> usize {
    hash(key) as usize % capacity
}
