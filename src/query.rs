//! Parsing of flag-character queries into a taint status value.
//!
//! A query is a string of flag mnemonics (`taint=pmeol`). Matching is
//! case-insensitive and table-ordered: the first entry whose set or unset
//! mnemonic equals the character wins. Problems are reported as warnings,
//! never as errors; a query always yields a value.

use crate::flags::{SPACER, TAINT_FLAGS};

/// A non-fatal problem found while parsing a flag query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryWarning {
    /// The character matches no set or unset mnemonic in the table.
    UnknownFlag(char),
    /// The query names both mnemonics of one flag; the set form wins.
    Conflict {
        /// Mnemonic of the set state, which takes precedence.
        set_char: char,
        /// Mnemonic of the unset state named alongside it.
        unset_char: char,
    },
}

impl std::fmt::Display for QueryWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownFlag(flag_char) => {
                write!(f, "Unknown taint flag '{flag_char}' ignored.")
            }
            Self::Conflict {
                set_char,
                unset_char,
            } => write!(
                f,
                "Conflicting taint flags '{set_char}' and '{unset_char}'; \
                 using taint-enabling flag '{set_char}'"
            ),
        }
    }
}

/// Translate a flag-character query into a taint status value.
///
/// Returns the accumulated value and the warnings collected along the way,
/// in the order they should be reported: unknown characters first (as
/// encountered), then set/unset conflicts.
pub fn parse_flags(input: &str) -> (u64, Vec<QueryWarning>) {
    let mut status = 0u64;
    let mut warnings = Vec::new();

    for query_char in input.chars() {
        let flag_char = query_char.to_ascii_uppercase();
        let mut known = false;
        for flag in &TAINT_FLAGS {
            if flag_char == flag.set_char {
                status |= flag.value();
                known = true;
                break;
            }
            // A bare unset mnemonic is a valid no-op.
            if flag.unset_char != SPACER && flag_char == flag.unset_char {
                known = true;
                break;
            }
        }
        if !known {
            warnings.push(QueryWarning::UnknownFlag(flag_char));
        }
    }

    // Second pass: an unset mnemonic whose flag ended up set means the
    // query named both sides of the same flag.
    for query_char in input.chars() {
        let flag_char = query_char.to_ascii_uppercase();
        for flag in &TAINT_FLAGS {
            if flag.unset_char != SPACER
                && flag_char == flag.unset_char
                && flag.is_set(status)
            {
                warnings.push(QueryWarning::Conflict {
                    set_char: flag.set_char,
                    unset_char: flag.unset_char,
                });
            }
        }
    }

    (status, warnings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_and_duplicates_are_idempotent() {
        for input in ["P", "p", "pp", "pP"] {
            let (status, warnings) = parse_flags(input);
            assert_eq!(status, 1, "input {input:?}");
            assert!(warnings.is_empty(), "input {input:?}");
        }
    }

    #[test]
    fn multi_flag_query_accumulates_bits() {
        let (status, warnings) = parse_flags("pmeol");
        assert_eq!(status, 28689);
        assert_eq!(status, 0x7011);
        assert!(warnings.is_empty());
    }

    #[test]
    fn empty_query_yields_zero() {
        let (status, warnings) = parse_flags("");
        assert_eq!(status, 0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn unknown_flag_warns_once_and_leaves_value_untouched() {
        let (status, warnings) = parse_flags("pZ");
        assert_eq!(status, 1);
        assert_eq!(warnings, vec![QueryWarning::UnknownFlag('Z')]);
    }

    #[test]
    fn unknown_flag_is_reported_uppercased() {
        let (status, warnings) = parse_flags("z");
        assert_eq!(status, 0);
        assert_eq!(warnings, vec![QueryWarning::UnknownFlag('Z')]);
    }

    #[test]
    fn bare_unset_mnemonic_is_accepted_silently() {
        let (status, warnings) = parse_flags("G");
        assert_eq!(status, 0);
        assert!(warnings.is_empty());
    }

    #[test]
    fn conflict_prefers_the_set_flag() {
        for input in ["Gp", "gP"] {
            let (status, warnings) = parse_flags(input);
            assert_eq!(status, 1, "input {input:?}");
            assert_eq!(
                warnings,
                vec![QueryWarning::Conflict {
                    set_char: 'P',
                    unset_char: 'G',
                }],
                "input {input:?}"
            );
        }
    }

    #[test]
    fn conflict_is_reported_per_occurrence() {
        let (status, warnings) = parse_flags("GgP");
        assert_eq!(status, 1);
        assert_eq!(warnings.len(), 2);
    }

    #[test]
    fn warnings_render_readable_messages() {
        assert_eq!(
            QueryWarning::UnknownFlag('Z').to_string(),
            "Unknown taint flag 'Z' ignored."
        );
        assert_eq!(
            QueryWarning::Conflict {
                set_char: 'P',
                unset_char: 'G',
            }
            .to_string(),
            "Conflicting taint flags 'P' and 'G'; using taint-enabling flag 'P'"
        );
    }

    #[test]
    fn unknown_warnings_precede_conflicts() {
        let (_, warnings) = parse_flags("zGp");
        assert_eq!(
            warnings,
            vec![
                QueryWarning::UnknownFlag('Z'),
                QueryWarning::Conflict {
                    set_char: 'P',
                    unset_char: 'G',
                },
            ]
        );
    }
}
