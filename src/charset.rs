use serde::{Deserialize, Serialize};

pub const UPPERCASE: &[u8; 26] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &[u8; 10] = b"0123456789";
pub const SYMBOLS: &[u8; 29] = b"!@#$%^&*()_+~`|}{[]:;?><,./-=";

/// The four independently selectable character classes of a generation
/// request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CharacterClasses {
    pub uppercase: bool,
    pub lowercase: bool,
    pub digits: bool,
    pub symbols: bool,
}

impl CharacterClasses {
    pub fn all() -> Self {
        Self {
            uppercase: true,
            lowercase: true,
            digits: true,
            symbols: true,
        }
    }

    pub fn is_empty(&self) -> bool {
        !(self.uppercase || self.lowercase || self.digits || self.symbols)
    }

    /// Concatenates the alphabets of every enabled class, always in the
    /// order uppercase, lowercase, digits, symbols. The four alphabets are
    /// disjoint, so no deduplication happens.
    pub fn effective_charset(&self) -> Vec<u8> {
        let mut charset = Vec::new();
        if self.uppercase {
            charset.extend_from_slice(UPPERCASE);
        }
        if self.lowercase {
            charset.extend_from_slice(LOWERCASE);
        }
        if self.digits {
            charset.extend_from_slice(DIGITS);
        }
        if self.symbols {
            charset.extend_from_slice(SYMBOLS);
        }
        charset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphabet_sizes() {
        assert_eq!(UPPERCASE.len(), 26);
        assert_eq!(LOWERCASE.len(), 26);
        assert_eq!(DIGITS.len(), 10);
        assert_eq!(SYMBOLS.len(), 29);
    }

    #[test]
    fn test_alphabets_are_disjoint() {
        let sets: [&[u8]; 4] = [UPPERCASE, LOWERCASE, DIGITS, SYMBOLS];
        for (i, a) in sets.iter().enumerate() {
            for b in sets.iter().skip(i + 1) {
                for byte in a.iter() {
                    assert!(!b.contains(byte), "{} appears twice", *byte as char);
                }
            }
        }
    }

    #[test]
    fn test_effective_charset_order_and_length() {
        let classes = CharacterClasses::all();
        let charset = classes.effective_charset();

        assert_eq!(charset.len(), 26 + 26 + 10 + 29);
        assert_eq!(&charset[..26], UPPERCASE);
        assert_eq!(&charset[26..52], LOWERCASE);
        assert_eq!(&charset[52..62], DIGITS);
        assert_eq!(&charset[62..], SYMBOLS);
    }

    #[test]
    fn test_effective_charset_skips_disabled_classes() {
        let classes = CharacterClasses {
            uppercase: true,
            lowercase: false,
            digits: true,
            symbols: false,
        };
        let charset = classes.effective_charset();

        assert_eq!(charset.len(), 36);
        assert_eq!(&charset[..26], UPPERCASE);
        assert_eq!(&charset[26..], DIGITS);
    }

    #[test]
    fn test_no_classes_is_empty() {
        let classes = CharacterClasses::default();
        assert!(classes.is_empty());
        assert!(classes.effective_charset().is_empty());
        assert!(!CharacterClasses::all().is_empty());
    }
}
