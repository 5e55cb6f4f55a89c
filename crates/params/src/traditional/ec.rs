//! Standard Weierstrass domain parameters (SEC 2), as big-endian hex

/// Name of the NIST P-256 curve
pub const SECP256R1: &str = "secp256r1";

/// Name of the Koblitz curve over GF(2^283)
pub const SECT283K1: &str = "sect283k1";

/// secp256r1 field prime
pub const SECP256R1_P: &str = "ffffffff00000001000000000000000000000000ffffffffffffffffffffffff";

/// secp256r1 coefficient a (p - 3)
pub const SECP256R1_A: &str = "ffffffff00000001000000000000000000000000fffffffffffffffffffffffc";

/// secp256r1 coefficient b
pub const SECP256R1_B: &str = "5ac635d8aa3a93e7b3ebbd55769886bc651d06b0cc53b0f63bce3c3e27d2604b";

/// secp256r1 base point x-coordinate
pub const SECP256R1_GX: &str = "6b17d1f2e12c4247f8bce6e563a440f277037d812deb33a0f4a13945d898c296";

/// secp256r1 base point y-coordinate
pub const SECP256R1_GY: &str = "4fe342e2fe1a7f9b8ee7eb4a7c0f9e162bce33576b315ececbb6406837bf51f5";

/// secp256r1 base point order
pub const SECP256R1_N: &str = "ffffffff00000000ffffffffffffffffbce6faada7179e84f3b9cac2fc632551";

/// secp256r1 cofactor
pub const SECP256R1_H: u32 = 1;

/// secp256r1 generation seed
pub const SECP256R1_SEED: &str = "c49d360886e704936a6678e1139d26b7819f7e90";

/// Degree of the sect283k1 field
pub const SECT283K1_M: usize = 283;

/// Middle exponents of the sect283k1 reduction pentanomial x^283 + x^12 + x^7 + x^5 + 1
pub const SECT283K1_KS: [usize; 3] = [12, 7, 5];

/// sect283k1 coefficient a
pub const SECT283K1_A: u32 = 0;

/// sect283k1 coefficient b
pub const SECT283K1_B: u32 = 1;

/// sect283k1 base point x-coordinate
pub const SECT283K1_GX: &str =
    "0503213f78ca44883f1a3b8162f188e553cd265f23c1567a16876913b0c2ac2458492836";

/// sect283k1 base point y-coordinate
pub const SECT283K1_GY: &str =
    "01ccda380f1c9e318d90f95d07e5426fe87e45c0e8184698e45962364e34116177dd2259";

/// sect283k1 base point order
pub const SECT283K1_N: &str =
    "01ffffffffffffffffffffffffffffffffffe9ae2ed07577265dff7f94451e061e163c61";

/// sect283k1 cofactor
pub const SECT283K1_H: u32 = 4;
