//! Short code generation from the link counter.
//!
//! Codes are the base62 representation of the counter value, so they are
//! collision-free by construction and grow by one character every time the
//! counter crosses a power of 62.

/// Base62 alphabet: digits, then uppercase, then lowercase.
///
/// The alphabet is in ascending ASCII order, so for codes of equal length the
/// lexicographic order matches the numeric order of the encoded values.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Codes that cannot be issued because the router owns these paths.
pub const RESERVED_CODES: &[&str] = &["new", "list", "help"];

/// Encodes `n` as base62, most significant digit first.
///
/// `0` encodes to `"0"`.
///
/// # Examples
///
/// ```
/// use linkfile::utils::code_generator::encode_base62;
///
/// assert_eq!(encode_base62(0), "0");
/// assert_eq!(encode_base62(61), "z");
/// assert_eq!(encode_base62(1001), "G9");
/// ```
pub fn encode_base62(mut n: u64) -> String {
    if n == 0 {
        return (ALPHABET[0] as char).to_string();
    }

    // 62^11 > u64::MAX, so eleven digits always suffice.
    let mut digits = Vec::with_capacity(11);
    while n > 0 {
        digits.push(ALPHABET[(n % 62) as usize]);
        n /= 62;
    }

    digits.iter().rev().map(|&b| b as char).collect()
}

/// Returns true if `code` collides with a router-owned path.
pub fn is_reserved(code: &str) -> bool {
    RESERVED_CODES.contains(&code)
}

/// Advances `counter` to the next issuable value and returns it with its code.
///
/// Values whose encoding is reserved are consumed and skipped, so the
/// returned counter is always strictly greater than the input.
pub fn next_code(counter: u64) -> (u64, String) {
    let mut value = counter + 1;
    loop {
        let code = encode_base62(value);
        if !is_reserved(&code) {
            return (value, code);
        }
        value += 1;
    }
}
