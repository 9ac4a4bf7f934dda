use num_bigint::BigUint;

/*
RFC 8017 - PKCS #1: RSA Cryptography Specifications

RSAPublicKey ::= SEQUENCE {
    modulus           INTEGER,  -- n
    publicExponent    INTEGER   -- e
}
*/

/// RSA public key material.
///
/// No range checks are applied here. A key with a tiny modulus or an even
/// exponent is still representable; rejecting it is a policy decision that
/// belongs to the signature layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RSAPublicKey {
    modulus: BigUint,         // n
    public_exponent: BigUint, // e
}

impl RSAPublicKey {
    pub fn new(modulus: BigUint, public_exponent: BigUint) -> Self {
        RSAPublicKey {
            modulus,
            public_exponent,
        }
    }

    pub fn modulus(&self) -> &BigUint {
        &self.modulus
    }

    pub fn public_exponent(&self) -> &BigUint {
        &self.public_exponent
    }

    /// Key size in bits, i.e. the modulus bit length.
    pub fn key_size(&self) -> u64 {
        self.modulus.bits()
    }
}

#[cfg(test)]
mod tests {
    use num_bigint::BigUint;
    use rstest::rstest;

    use super::RSAPublicKey;

    #[rstest(modulus_bytes, expected_bits,
        case(vec![0x01, 0x00], 9),
        case(vec![0xff; 256], 2048),
        case(vec![0x80; 384], 3072),
    )]
    fn test_key_size(modulus_bytes: Vec<u8>, expected_bits: u64) {
        let key = RSAPublicKey::new(
            BigUint::from_bytes_be(&modulus_bytes),
            BigUint::from(65537u32),
        );
        assert_eq!(expected_bits, key.key_size());
    }
}
