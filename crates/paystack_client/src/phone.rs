use thiserror::Error;

/// Kenyan M-Pesa MSISDNs: the 254 country prefix plus nine digits
pub const MSISDN_LENGTH: usize = 12;

const COUNTRY_PREFIX: &str = "254";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MsisdnError {
    #[error("invalid phone number, use the format 0712345678 or 254712345678")]
    InvalidPrefix,
    #[error("invalid phone number length, expected {MSISDN_LENGTH} digits, got {0}")]
    InvalidLength(usize),
}

/// Normalize a user-supplied phone number to a 254XXXXXXXXX MSISDN before
/// any network call. Strips whitespace, hyphens and plus signs; a leading
/// "0" is swapped for the country prefix, numbers already carrying it pass
/// through, and bare local numbers starting with 7 or 1 get it prepended.
pub fn format_msisdn(raw: &str) -> Result<String, MsisdnError> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-' && *c != '+')
        .collect();

    let formatted = if let Some(rest) = cleaned.strip_prefix('0') {
        format!("{COUNTRY_PREFIX}{rest}")
    } else if cleaned.starts_with(COUNTRY_PREFIX) {
        cleaned
    } else if cleaned.starts_with('7') || cleaned.starts_with('1') {
        format!("{COUNTRY_PREFIX}{cleaned}")
    } else {
        return Err(MsisdnError::InvalidPrefix);
    };

    if formatted.len() != MSISDN_LENGTH || !formatted.bytes().all(|b| b.is_ascii_digit()) {
        return Err(MsisdnError::InvalidLength(formatted.len()));
    }

    Ok(formatted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zero_is_replaced_with_country_prefix() {
        assert_eq!(format_msisdn("0712345678").unwrap(), "254712345678");
    }

    #[test]
    fn full_msisdn_passes_through() {
        assert_eq!(format_msisdn("254712345678").unwrap(), "254712345678");
    }

    #[test]
    fn bare_local_number_gets_prefix() {
        assert_eq!(format_msisdn("712345678").unwrap(), "254712345678");
        assert_eq!(format_msisdn("110345678").unwrap(), "254110345678");
    }

    #[test]
    fn separators_and_plus_are_stripped() {
        assert_eq!(format_msisdn("+254 712-345 678").unwrap(), "254712345678");
        assert_eq!(format_msisdn("07 1234 5678").unwrap(), "254712345678");
    }

    #[test]
    fn short_numbers_are_rejected() {
        assert_eq!(format_msisdn("12345"), Err(MsisdnError::InvalidLength(8)));
    }

    #[test]
    fn foreign_prefixes_are_rejected() {
        assert_eq!(format_msisdn("44712345678"), Err(MsisdnError::InvalidPrefix));
        assert_eq!(format_msisdn(""), Err(MsisdnError::InvalidPrefix));
    }

    #[test]
    fn non_digit_payload_is_rejected() {
        assert!(format_msisdn("07abc456789").is_err());
    }
}
