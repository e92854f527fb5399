//! Constants for CSIDH-512
//!
//! The prime is p = 4 * (l_1 * l_2 * ... * l_74) - 1 where the l_i are the
//! small odd primes listed in [`CSIDH_PRIMES`]. Multi-precision values are
//! stored as eight little-endian 64-bit words.

/// Bit length of the prime p
pub const CSIDH_P_BITS: usize = 511;

/// Number of small odd primes l_i dividing (p + 1) / 4
pub const CSIDH_PRIME_COUNT: usize = 74;

/// Bound on the absolute value of a private exponent; (2 * 5 + 1)^74 is roughly 2^256
pub const CSIDH_EXPONENT_BOUND: i8 = 5;

/// Size of a limb in bits
pub const CSIDH_LIMB_BITS: usize = 64;

/// Size of a limb in bytes
pub const CSIDH_LIMB_BYTES: usize = CSIDH_LIMB_BITS / 8;

/// Number of limbs in a field element
pub const CSIDH_NUM_WORDS: usize = 8;

/// Size of an encoded field element in bytes
pub const CSIDH_FIELD_ELEMENT_SIZE: usize = CSIDH_NUM_WORDS * CSIDH_LIMB_BYTES;

/// Size of a CSIDH-512 private key in bytes (two signed nibbles per byte)
pub const CSIDH_PRIVATE_KEY_SIZE: usize = (CSIDH_PRIME_COUNT + 1) / 2;

/// Size of a CSIDH-512 public key in bytes
pub const CSIDH_PUBLIC_KEY_SIZE: usize = CSIDH_FIELD_ELEMENT_SIZE;

/// Size of a CSIDH-512 shared secret in bytes
pub const CSIDH_SHARED_SECRET_SIZE: usize = CSIDH_FIELD_ELEMENT_SIZE;

/// Elkies primes up to 373, plus 587
pub const CSIDH_PRIMES: [u64; CSIDH_PRIME_COUNT] = [
    0x0003, 0x0005, 0x0007, 0x000B, 0x000D, 0x0011, 0x0013, 0x0017, 0x001D, 0x001F, 0x0025,
    0x0029, 0x002B, 0x002F, 0x0035, 0x003B, 0x003D, 0x0043, 0x0047, 0x0049, 0x004F, 0x0053,
    0x0059, 0x0061, 0x0065, 0x0067, 0x006B, 0x006D, 0x0071, 0x007F, 0x0083, 0x0089, 0x008B,
    0x0095, 0x0097, 0x009D, 0x00A3, 0x00A7, 0x00AD, 0x00B3, 0x00B5, 0x00BF, 0x00C1, 0x00C5,
    0x00C7, 0x00D3, 0x00DF, 0x00E3, 0x00E5, 0x00E9, 0x00EF, 0x00F1, 0x00FB, 0x0101, 0x0107,
    0x010D, 0x010F, 0x0115, 0x0119, 0x011B, 0x0125, 0x0133, 0x0137, 0x0139, 0x013D, 0x014B,
    0x0151, 0x015B, 0x015D, 0x0161, 0x0167, 0x016F, 0x0175, 0x024B,
];

/// The prime p
pub const CSIDH_P: [u64; CSIDH_NUM_WORDS] = [
    0x1B81B90533C6C87B, 0xC2721BF457ACA835,
    0x516730CC1F0B4F25, 0xA7AAC6C567F35507,
    0x5AFBFCC69322C9CD, 0xB42D083AEDC88C42,
    0xFC8AB0D15E3E4C4A, 0x65B48E8F740F89BF,
];

/// -p^-1 mod 2^64
pub const CSIDH_P_NEG_INV: u64 = 0x66C1301F632E294D;

/// Montgomery R = 2^512 mod p, i.e. 1 in Montgomery form
pub const CSIDH_MONT_ONE: [u64; CSIDH_NUM_WORDS] = [
    0xC8FC8DF598726F0A, 0x7B1BC81750A6AF95,
    0x5D319E67C1E961B4, 0xB0AA7275301955F1,
    0x4A080672D9BA6C64, 0x97A5EF8A246EE77B,
    0x06EA9E5D4383676A, 0x3496E2E117E0EC80,
];

/// R^2 mod p, used to move plain integers into Montgomery form
pub const CSIDH_MONT_R2: [u64; CSIDH_NUM_WORDS] = [
    0x36905B572FFC1724, 0x67086F4525F1F27D,
    0x4FAF3FBFD22370CA, 0x192EA214BCC584B1,
    0x5DAE03EE2F5DE3D0, 0x1E9248731776B371,
    0xAD5F166E20E4F52D, 0x4ED759AEA6F3917E,
];

/// 2 in Montgomery form
pub const CSIDH_MONT_TWO: [u64; CSIDH_NUM_WORDS] = [
    0x767762E5FD1E1599, 0x33C5743A49A0B6F6,
    0x68FC0C0364C77443, 0xB9AA1E24F83F56DB,
    0x3914101F20520EFB, 0x7B1ED6D95B1542B4,
    0x114A8BE928C8828A, 0x03793732BBB24F40,
];

/// -2 in Montgomery form
pub const CSIDH_MONT_MINUS_TWO: [u64; CSIDH_NUM_WORDS] = [
    0xA50A561F36A8B2E2, 0x8EACA7BA0E0BF13E,
    0xE86B24C8BA43DAE2, 0xEE00A8A06FB3FE2B,
    0x21E7ECA772D0BAD1, 0x390E316192B3498E,
    0xEB4024E83575C9C0, 0x623B575CB85D3A7F,
];

/// 4 in Montgomery form
pub const CSIDH_MONT_FOUR: [u64; CSIDH_NUM_WORDS] = [
    0xECEEC5CBFA3C2B32, 0x678AE87493416DEC,
    0xD1F81806C98EE886, 0x73543C49F07EADB6,
    0x7228203E40A41DF7, 0xF63DADB2B62A8568,
    0x229517D251910514, 0x06F26E6577649E80,
];

/// floor(4 * sqrt(p)) as a plain integer
pub const CSIDH_FOUR_SQRT_P: [u64; CSIDH_NUM_WORDS] = [
    0x17895E71E1A20B3F, 0x38D0CD95F8636A56,
    0x142B9541E59682CD, 0x856F1399D91D6592,
    0x0000000000000002, 0x0000000000000000,
    0x0000000000000000, 0x0000000000000000,
];

/// (p - 1) / 2 as a plain integer (exponent for Euler's criterion)
pub const CSIDH_P_MINUS_1_HALF: [u64; CSIDH_NUM_WORDS] = [
    0x8DC0DC8299E3643D, 0xE1390DFA2BD6541A,
    0xA8B398660F85A792, 0xD3D56362B3F9AA83,
    0x2D7DFE63499164E6, 0x5A16841D76E44621,
    0xFE455868AF1F2625, 0x32DA4747BA07C4DF,
];

/// p - 2 as a plain integer (exponent for Fermat inversion)
pub const CSIDH_P_MINUS_2: [u64; CSIDH_NUM_WORDS] = [
    0x1B81B90533C6C879, 0xC2721BF457ACA835,
    0x516730CC1F0B4F25, 0xA7AAC6C567F35507,
    0x5AFBFCC69322C9CD, 0xB42D083AEDC88C42,
    0xFC8AB0D15E3E4C4A, 0x65B48E8F740F89BF,
];
