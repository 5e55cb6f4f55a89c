//! Constants for the Digital Signature Algorithm (DSA)

/// DSA with 1024-bit modulus and 160-bit subgroup
pub const DSA_1024_160: (usize, usize) = (1024, 160);

/// DSA with 2048-bit modulus and 224-bit subgroup
pub const DSA_2048_224: (usize, usize) = (2048, 224);

/// DSA with 2048-bit modulus and 256-bit subgroup
pub const DSA_2048_256: (usize, usize) = (2048, 256);

/// DSA with 3072-bit modulus and 256-bit subgroup
pub const DSA_3072_256: (usize, usize) = (3072, 256);

/// Every `(primePLen, subprimeQLen)` pair accepted for parameter generation
pub const DSA_LENGTH_PAIRS: [(usize, usize); 4] =
    [DSA_1024_160, DSA_2048_224, DSA_2048_256, DSA_3072_256];

/// Legal subprime lengths for a given prime length, or `None` if the prime
/// length itself is not supported
pub const fn dsa_subprime_lengths(prime_p_len: usize) -> Option<&'static [usize]> {
    match prime_p_len {
        1024 => Some(&[160]),
        2048 => Some(&[224, 256]),
        3072 => Some(&[256]),
        _ => None,
    }
}
