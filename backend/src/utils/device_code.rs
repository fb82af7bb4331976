use rand::RngCore;
use rand::rngs::OsRng;

/// Length of a device pairing code.
pub const DEVICE_CODE_LENGTH: usize = 8;

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a one-time device pairing code.
///
/// The code is `DEVICE_CODE_LENGTH` characters drawn uniformly from lowercase
/// letters and digits, using the operating system's CSPRNG. Bytes that would
/// bias the distribution are rejected and redrawn.
///
/// # Errors
///
/// Returns the underlying `rand::Error` if the OS random source fails.
///
/// # Examples
///
/// ```ignore
/// let code = generate_device_code()?;
/// assert_eq!(code.len(), DEVICE_CODE_LENGTH);
/// ```
pub fn generate_device_code() -> Result<String, rand::Error> {
    // Largest multiple of the alphabet size that fits in a byte.
    let limit = (u8::MAX as usize + 1) / ALPHABET.len() * ALPHABET.len();

    let mut code = String::with_capacity(DEVICE_CODE_LENGTH);
    let mut buf = [0u8; DEVICE_CODE_LENGTH * 2];

    while code.len() < DEVICE_CODE_LENGTH {
        OsRng.try_fill_bytes(&mut buf)?;
        for byte in buf.iter().map(|b| *b as usize).filter(|b| *b < limit) {
            if code.len() == DEVICE_CODE_LENGTH {
                break;
            }
            code.push(ALPHABET[byte % ALPHABET.len()] as char);
        }
    }

    Ok(code)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_shape() {
        let code = generate_device_code().unwrap();
        assert_eq!(code.len(), DEVICE_CODE_LENGTH);
        assert!(
            code.chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_codes_differ() {
        let a = generate_device_code().unwrap();
        let b = generate_device_code().unwrap();
        assert_ne!(a, b);
    }
}
