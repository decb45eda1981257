//! Field rules for every member kind.
//!
//! Patterns are case-sensitive and must match the whole draft. Digits are
//! spelled `[0-9]` so only ASCII digits are accepted.

use core::str::FromStr;

use clubhouse_core::{DomainError, FieldPattern, FieldSpec};

pub static ID: FieldSpec = FieldSpec {
    key: "id",
    label: "ID",
    pattern: FieldPattern::new(r"[0-9]-[0-9]{7}\|[1-9]"),
};

pub static NAME: FieldSpec = FieldSpec {
    key: "name",
    label: "Name",
    pattern: FieldPattern::new(r"[A-Z][a-z]+"),
};

pub static SURNAME: FieldSpec = FieldSpec {
    key: "surname",
    label: "Surname",
    pattern: FieldPattern::new(r"([A-Z][a-z]*['-]?)+"),
};

pub static PHONE: FieldSpec = FieldSpec {
    key: "phone",
    label: "Tel",
    pattern: FieldPattern::new(r"\+\([1-9][0-9]{0,2}\)[1-9][0-9]{0,2}-[1-9][0-9]{6}"),
};

pub static PERSONAL_NUMBER: FieldSpec = FieldSpec {
    key: "personal_number",
    label: "Personal No.",
    pattern: FieldPattern::new(r"[ROC]/[1-9][0-9]{6}"),
};

pub static STUDENT_ID: FieldSpec = FieldSpec {
    key: "student_id",
    label: "Student ID",
    pattern: FieldPattern::new(r"[A-Z]{3}/[1-9][0-9]{4}"),
};

/// Name of an editable field, as typed by an operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum FieldName {
    Id,
    Name,
    Surname,
    Phone,
    PersonalNumber,
    StudentId,
}

impl FieldName {
    pub const ALL: [FieldName; 6] = [
        FieldName::Id,
        FieldName::Name,
        FieldName::Surname,
        FieldName::Phone,
        FieldName::PersonalNumber,
        FieldName::StudentId,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        match self {
            FieldName::Id => &ID,
            FieldName::Name => &NAME,
            FieldName::Surname => &SURNAME,
            FieldName::Phone => &PHONE,
            FieldName::PersonalNumber => &PERSONAL_NUMBER,
            FieldName::StudentId => &STUDENT_ID,
        }
    }

    pub fn key(self) -> &'static str {
        self.spec().key
    }

    /// The field name owning a storage key (`"phone"`, `"student_id"`, ...).
    pub fn from_key(key: &str) -> Option<FieldName> {
        FieldName::ALL.into_iter().find(|name| name.key() == key)
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }
}

impl core::fmt::Display for FieldName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FieldName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "id" => Ok(FieldName::Id),
            "name" => Ok(FieldName::Name),
            "surname" => Ok(FieldName::Surname),
            "tel" | "phone" => Ok(FieldName::Phone),
            "personal" | "personal-number" | "personal_number" => Ok(FieldName::PersonalNumber),
            "student-id" | "student_id" | "studentid" => Ok(FieldName::StudentId),
            other => Err(DomainError::unknown_field(other)),
        }
    }
}

/// Whether the part of `value` after its first `offset` characters equals
/// `key`. An empty `value` never matches.
pub(crate) fn suffix_matches(value: &str, offset: usize, key: &str) -> bool {
    !value.is_empty() && value.get(offset..).is_some_and(|suffix| suffix == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_pattern_compiles() {
        for name in FieldName::ALL {
            // Any call forces compilation.
            let _ = name.spec().pattern.is_full_match("");
        }
    }

    #[test]
    fn id_pattern() {
        assert!(ID.pattern.is_full_match("1-2345678|9"));
        assert!(ID.pattern.is_full_match("0-0000000|1"));
        assert!(!ID.pattern.is_full_match("1-2345678|0"));
        assert!(!ID.pattern.is_full_match("1-234567|9"));
        assert!(!ID.pattern.is_full_match("12345678|9"));
        assert!(!ID.pattern.is_full_match("1-2345678|9 "));
    }

    #[test]
    fn id_pattern_rejects_non_ascii_digits() {
        assert!(!ID.pattern.is_full_match("١-2345678|9"));
    }

    #[test]
    fn name_pattern() {
        assert!(NAME.pattern.is_full_match("John"));
        assert!(!NAME.pattern.is_full_match("J"));
        assert!(!NAME.pattern.is_full_match("john"));
        assert!(!NAME.pattern.is_full_match("JOhn"));
    }

    #[test]
    fn surname_pattern() {
        assert!(SURNAME.pattern.is_full_match("O'Brien-Smith"));
        assert!(SURNAME.pattern.is_full_match("D"));
        assert!(SURNAME.pattern.is_full_match("McDonald"));
        assert!(SURNAME.pattern.is_full_match("Smith-"));
        assert!(!SURNAME.pattern.is_full_match("smith"));
        assert!(!SURNAME.pattern.is_full_match("O''Brien"));
        assert!(!SURNAME.pattern.is_full_match(""));
    }

    #[test]
    fn phone_pattern() {
        assert!(PHONE.pattern.is_full_match("+(1)234-5678901"));
        assert!(PHONE.pattern.is_full_match("+(972)52-1234567"));
        assert!(!PHONE.pattern.is_full_match("+(0)234-5678901"));
        assert!(!PHONE.pattern.is_full_match("+(1234)234-5678901"));
        assert!(!PHONE.pattern.is_full_match("+(1)234-0678901"));
        assert!(!PHONE.pattern.is_full_match("(1)234-5678901"));
    }

    #[test]
    fn personal_number_pattern() {
        assert!(PERSONAL_NUMBER.pattern.is_full_match("R/1234567"));
        assert!(PERSONAL_NUMBER.pattern.is_full_match("O/1000000"));
        assert!(PERSONAL_NUMBER.pattern.is_full_match("C/9999999"));
        assert!(!PERSONAL_NUMBER.pattern.is_full_match("|/1234567"));
        assert!(!PERSONAL_NUMBER.pattern.is_full_match("X/1234567"));
        assert!(!PERSONAL_NUMBER.pattern.is_full_match("R/0234567"));
    }

    #[test]
    fn student_id_pattern() {
        assert!(STUDENT_ID.pattern.is_full_match("ABC/12345"));
        assert!(!STUDENT_ID.pattern.is_full_match("AB/12345"));
        assert!(!STUDENT_ID.pattern.is_full_match("abc/12345"));
        assert!(!STUDENT_ID.pattern.is_full_match("ABC/02345"));
    }

    #[test]
    fn field_names_parse_with_aliases() {
        assert_eq!("tel".parse::<FieldName>().unwrap(), FieldName::Phone);
        assert_eq!("Phone".parse::<FieldName>().unwrap(), FieldName::Phone);
        assert_eq!(
            "personal".parse::<FieldName>().unwrap(),
            FieldName::PersonalNumber
        );
        assert_eq!(
            "student-id".parse::<FieldName>().unwrap(),
            FieldName::StudentId
        );
        assert!(matches!(
            "email".parse::<FieldName>(),
            Err(DomainError::UnknownField(_))
        ));
    }

    #[test]
    fn keys_map_back_to_names() {
        for name in FieldName::ALL {
            assert_eq!(FieldName::from_key(name.key()), Some(name));
        }
        assert_eq!(FieldName::from_key("tel"), None);
    }

    #[test]
    fn suffix_matching() {
        assert!(suffix_matches("R/1234567", 2, "1234567"));
        assert!(!suffix_matches("R/1234567", 2, "7654321"));
        assert!(!suffix_matches("", 2, ""));
        assert!(!suffix_matches("R", 2, ""));
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn generated_ids_are_accepted(id in "[0-9]-[0-9]{7}\\|[1-9]") {
                prop_assert!(ID.pattern.is_full_match(&id));
            }

            #[test]
            fn generated_phones_are_accepted(
                phone in "\\+\\([1-9][0-9]{0,2}\\)[1-9][0-9]{0,2}-[1-9][0-9]{6}"
            ) {
                prop_assert!(PHONE.pattern.is_full_match(&phone));
            }

            #[test]
            fn lowercase_initial_names_are_rejected(name in "[a-z][a-zA-Z]{0,12}") {
                prop_assert!(!NAME.pattern.is_full_match(&name));
            }

            #[test]
            fn surrounding_whitespace_is_rejected(
                id in "[0-9]-[0-9]{7}\\|[1-9]",
                pad in "[ \t]{1,3}"
            ) {
                let padded_front = format!("{pad}{id}");
                let padded_back = format!("{id}{pad}");
                prop_assert!(!ID.pattern.is_full_match(&padded_front));
                prop_assert!(!ID.pattern.is_full_match(&padded_back));
            }
        }
    }
}
