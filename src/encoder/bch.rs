//! BCH encoding for QR code format and version info

/// BCH(15,5) generator: x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
const FORMAT_GENERATOR: u32 = 0x537;
/// XOR mask keeping format info from being all light
const FORMAT_MASK: u16 = 0x5412;
/// BCH(18,6) generator: x^12 + x^11 + x^10 + x^9 + x^8 + x^5 + x^2 + 1
const VERSION_GENERATOR: u32 = 0x1F25;

/// Encode 5 data bits (2-bit EC indicator, 3-bit mask id) into the masked
/// 15-bit format word
pub fn format_info_bits(data: u8) -> u16 {
    let data = u32::from(data & 0x1F);
    let remainder = remainder(data, 10, FORMAT_GENERATOR);
    ((data << 10 | remainder) as u16) ^ FORMAT_MASK
}

/// Encode a 6-bit version number into the 18-bit version word
pub fn version_info_bits(version: u8) -> u32 {
    let data = u32::from(version & 0x3F);
    data << 12 | remainder(data, 12, VERSION_GENERATOR)
}

/// Polynomial remainder of `data * x^degree` modulo `generator`
fn remainder(data: u32, degree: u32, generator: u32) -> u32 {
    let mut rem = data;
    for _ in 0..degree {
        rem = (rem << 1) ^ ((rem >> (degree - 1)) * generator);
    }
    rem
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syndrome(codeword: u32, total_bits: u32, degree: u32, generator: u32) -> u32 {
        let mut rem = codeword;
        for bit in (degree..total_bits).rev() {
            if (rem >> bit) & 1 == 1 {
                rem ^= generator << (bit - degree);
            }
        }
        rem
    }

    #[test]
    fn test_format_codewords_are_valid() {
        for data in 0..32u8 {
            let bits = format_info_bits(data);
            let unmasked = u32::from(bits ^ FORMAT_MASK);
            assert_eq!(unmasked >> 10, u32::from(data));
            assert_eq!(syndrome(unmasked, 15, 10, FORMAT_GENERATOR), 0);
        }
    }

    #[test]
    fn test_version_codewords_are_valid() {
        for version in 7..=40u8 {
            let bits = version_info_bits(version);
            assert_eq!(bits >> 12, u32::from(version));
            assert_eq!(syndrome(bits, 18, 12, VERSION_GENERATOR), 0);
        }
    }

    #[test]
    fn test_known_values() {
        assert_eq!(format_info_bits(0b01_000), 0x77C4);
        assert_eq!(version_info_bits(7), 0x07C94);
        assert_eq!(version_info_bits(8), 0x085BC);
        assert_eq!(version_info_bits(40), 0x28C69);
    }
}
