//! Guest profile field rules: national ID format and nationality parsing.

use std::sync::LazyLock;

use crate::error::{CoreError, CoreResult};

/// Regex accepting 6 to 12 alphanumeric characters, nothing else.
static NATIONAL_ID_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"^[a-zA-Z0-9]{6,12}$").expect("valid regex"));

/// Validate a national identity document number.
///
/// Accepts 6-12 alphanumeric characters. The error message is user-facing.
pub fn validate_national_id(national_id: &str) -> CoreResult<()> {
    if NATIONAL_ID_RE.is_match(national_id) {
        Ok(())
    } else {
        Err(CoreError::Validation(
            "Please provide a valid national ID".into(),
        ))
    }
}

/// Parsed nationality selection: country name plus flag image URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Nationality {
    pub nationality: String,
    pub country_flag: String,
}

/// Split the combined `<country>%<flag>` select value submitted by the
/// profile form.
///
/// Exactly one `%` separator is expected; the first segment is the country
/// name, the second the flag URL.
pub fn parse_nationality_field(value: &str) -> CoreResult<Nationality> {
    let mut parts = value.splitn(2, '%');
    let nationality = parts.next().unwrap_or_default();
    let country_flag = parts.next().ok_or_else(|| {
        CoreError::Validation("Nationality selection is malformed".into())
    })?;

    if nationality.is_empty() {
        return Err(CoreError::Validation(
            "Nationality selection is malformed".into(),
        ));
    }

    Ok(Nationality {
        nationality: nationality.to_string(),
        country_flag: country_flag.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- National ID -------------------------------------------------------

    #[test]
    fn national_id_accepts_6_to_12_alphanumerics() {
        assert!(validate_national_id("abc123").is_ok());
        assert!(validate_national_id("ABC123xyz987").is_ok());
    }

    #[test]
    fn national_id_rejects_too_short() {
        assert!(validate_national_id("ab").is_err());
        assert!(validate_national_id("abc12").is_err());
    }

    #[test]
    fn national_id_rejects_too_long() {
        assert!(validate_national_id("ABC123xyz9876").is_err());
    }

    #[test]
    fn national_id_rejects_non_alphanumeric() {
        assert!(validate_national_id("abc 123").is_err());
        assert!(validate_national_id("abc-1234").is_err());
        assert!(validate_national_id("").is_err());
    }

    #[test]
    fn national_id_error_message_is_user_facing() {
        let err = validate_national_id("ab").unwrap_err();
        assert_eq!(err.to_string(), "Please provide a valid national ID");
    }

    // -- Nationality field -------------------------------------------------

    #[test]
    fn nationality_field_splits_on_percent() {
        let parsed = parse_nationality_field("Portugal%https://flags.test/pt.svg").unwrap();
        assert_eq!(parsed.nationality, "Portugal");
        assert_eq!(parsed.country_flag, "https://flags.test/pt.svg");
    }

    #[test]
    fn nationality_field_without_separator_is_rejected() {
        assert!(parse_nationality_field("Portugal").is_err());
    }

    #[test]
    fn nationality_field_with_empty_country_is_rejected() {
        assert!(parse_nationality_field("%flag.svg").is_err());
    }

    #[test]
    fn nationality_field_keeps_percent_in_flag_segment() {
        // Only the first separator splits; later ones belong to the flag URL.
        let parsed = parse_nationality_field("Spain%https://flags.test/es%20flag.svg").unwrap();
        assert_eq!(parsed.nationality, "Spain");
        assert_eq!(parsed.country_flag, "https://flags.test/es%20flag.svg");
    }
}
