//! Name transliteration
//!
//! Prepares a raw name for phonetic encoding: uppercase, accents folded
//! to plain ASCII letters, everything that is not a letter dropped.

use smallvec::SmallVec;
use unicode_normalization::UnicodeNormalization;

/// Transliterated name buffer. Most names fit without a heap allocation.
pub type NameChars = SmallVec<[char; 32]>;

/// Transliterate a name into the letter set understood by the encoder.
///
/// - Letters are uppercased and NFKD-folded (`é` becomes `E`).
/// - `Ç` and `Ñ` are kept as-is, the encoder has dedicated rules for them.
/// - Runs of inner whitespace collapse to a single space so that
///   multi-word prefixes such as `VAN ` or `SAN ` stay recognizable.
/// - Digits, punctuation and combining marks are dropped.
///
/// # Examples
/// ```
/// use namesake::algorithms::normalize::transliterate;
///
/// let chars: String = transliterate("  José  de la Cruz-2 ").into_iter().collect();
/// assert_eq!(chars, "JOSE DE LA CRUZ");
/// ```
#[must_use]
pub fn transliterate(s: &str) -> NameChars {
    let mut out = NameChars::new();
    let mut pending_space = false;

    for c in s.trim().chars().flat_map(char::to_uppercase) {
        if c.is_whitespace() {
            pending_space = !out.is_empty();
            continue;
        }

        let mut push = |ch: char, out: &mut NameChars| {
            if pending_space {
                out.push(' ');
                pending_space = false;
            }
            out.push(ch);
        };

        match c {
            'Ç' | 'Ñ' => push(c, &mut out),
            _ => {
                for folded in std::iter::once(c).nfkd() {
                    if folded.is_ascii_alphabetic() {
                        push(folded.to_ascii_uppercase(), &mut out);
                    }
                }
            }
        }
    }

    out
}

/// Trim a raw name, returning `None` when nothing but whitespace is left.
#[must_use]
pub fn trimmed_name(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn folded(s: &str) -> String {
        transliterate(s).into_iter().collect()
    }

    #[test]
    fn test_uppercase() {
        assert_eq!(folded("smith"), "SMITH");
    }

    #[test]
    fn test_accents_folded() {
        assert_eq!(folded("Zoë Müller"), "ZOE MULLER");
        assert_eq!(folded("Renée"), "RENEE");
    }

    #[test]
    fn test_cedilla_and_tilde_kept() {
        assert_eq!(folded("françois"), "FRANÇOIS");
        assert_eq!(folded("Muñoz"), "MUÑOZ");
    }

    #[test]
    fn test_non_letters_dropped() {
        assert_eq!(folded("O'Brien-42"), "OBRIEN");
        assert_eq!(folded("1234"), "");
    }

    #[test]
    fn test_whitespace_collapsed() {
        assert_eq!(folded("  van \t der   Berg "), "VAN DER BERG");
    }

    #[test]
    fn test_separator_not_emitted_before_first_letter() {
        assert_eq!(folded("42 Smith"), "SMITH");
    }

    #[test]
    fn test_trimmed_name() {
        assert_eq!(trimmed_name("  Ahmad "), Some("Ahmad"));
        assert_eq!(trimmed_name("   "), None);
        assert_eq!(trimmed_name(""), None);
    }
}
