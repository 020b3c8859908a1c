use once_cell::sync::Lazy;
use regex::Regex;

use super::error::ValidationError;

pub const FULL_NAME: &str = "fullName";
pub const EMAIL: &str = "email";
pub const PHONE: &str = "phone";
pub const MESSAGE: &str = "message";
pub const REPLY_TO: &str = "replyto";

pub const REQUIRED_FIELDS: [&str; 4] = [FULL_NAME, EMAIL, PHONE, MESSAGE];

static EMAIL_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9\s\-+()]+$").expect("phone pattern compiles"));

/// Values typed into the contact form. A `None` field was never filled.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactSubmission {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl ContactSubmission {
    /// Builds a submission from `(field name, value)` pairs as a form would
    /// post them. Unknown names are ignored.
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut submission = Self::default();
        for (name, value) in pairs {
            let slot = match name {
                FULL_NAME => &mut submission.full_name,
                EMAIL => &mut submission.email,
                PHONE => &mut submission.phone,
                MESSAGE => &mut submission.message,
                _ => continue,
            };
            *slot = Some(value.to_string());
        }
        submission
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        match name {
            FULL_NAME => self.full_name.as_deref(),
            EMAIL => self.email.as_deref(),
            PHONE => self.phone.as_deref(),
            MESSAGE => self.message.as_deref(),
            _ => None,
        }
    }

    pub fn missing_fields(&self) -> Vec<&'static str> {
        REQUIRED_FIELDS
            .into_iter()
            .filter(|name| self.field(name).map_or(true, |v| v.trim().is_empty()))
            .collect()
    }

    /// Checks required fields, then email shape, then phone shape.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ValidationError::MissingFields(missing));
        }
        if !EMAIL_PATTERN.is_match(self.field(EMAIL).unwrap_or_default()) {
            return Err(ValidationError::InvalidEmail);
        }
        if !PHONE_PATTERN.is_match(self.field(PHONE).unwrap_or_default()) {
            return Err(ValidationError::InvalidPhone);
        }
        Ok(())
    }

    /// Fields in posting order, with `replyto` mirroring the email.
    pub fn to_form_body(&self) -> FormBody {
        let mut fields: Vec<(&'static str, String)> = REQUIRED_FIELDS
            .into_iter()
            .map(|name| (name, self.field(name).unwrap_or_default().to_string()))
            .collect();
        fields.push((REPLY_TO, self.field(EMAIL).unwrap_or_default().to_string()));
        FormBody { fields }
    }
}

/// An `application/x-www-form-urlencoded` request body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormBody {
    pub fields: Vec<(&'static str, String)>,
}

impl FormBody {
    pub const CONTENT_TYPE: &'static str = "application/x-www-form-urlencoded";

    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn encode(&self) -> String {
        self.fields
            .iter()
            .map(|(name, value)| {
                // Form encoding writes spaces as '+'.
                format!("{}={}", urlencoding::encode(name), urlencoding::encode(value).replace("%20", "+"))
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> ContactSubmission {
        ContactSubmission::from_pairs([
            (FULL_NAME, "Ada Okafor"),
            (EMAIL, "ada@example.com"),
            (PHONE, "+234 (0) 801-234-5678"),
            (MESSAGE, "Interested in a site survey."),
        ])
    }

    #[test]
    fn accepts_a_complete_submission() {
        assert_eq!(valid().validate(), Ok(()));
    }

    #[test]
    fn missing_phone_is_reported() {
        let mut submission = valid();
        submission.phone = None;
        assert_eq!(
            submission.validate(),
            Err(ValidationError::MissingFields(vec![PHONE]))
        );
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let mut submission = valid();
        submission.full_name = Some("   \t".into());
        submission.message = Some("\n".into());
        assert_eq!(
            submission.missing_fields(),
            vec![FULL_NAME, MESSAGE]
        );
    }

    #[test]
    fn missing_fields_win_over_bad_email() {
        let mut submission = valid();
        submission.email = Some("not-an-email".into());
        submission.phone = Some(String::new());
        assert!(matches!(submission.validate(), Err(ValidationError::MissingFields(_))));
    }

    #[test]
    fn rejects_malformed_email() {
        for bad in ["not-an-email", "a@b", "a b@c.d", "@c.d", "a@@b.c"] {
            let mut submission = valid();
            submission.email = Some(bad.into());
            assert_eq!(submission.validate(), Err(ValidationError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn accepts_email_with_subdomains() {
        let mut submission = valid();
        submission.email = Some("ops@mail.blackterra.energy".into());
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn phone_allows_only_dial_characters() {
        let mut submission = valid();
        submission.phone = Some("0801 234 5678 ext 2".into());
        assert_eq!(submission.validate(), Err(ValidationError::InvalidPhone));

        submission.phone = Some("(0801)-234+5678".into());
        assert_eq!(submission.validate(), Ok(()));
    }

    #[test]
    fn unknown_pairs_are_ignored() {
        let submission = ContactSubmission::from_pairs([("company", "ACME"), (EMAIL, "x@y.z")]);
        assert_eq!(submission.email.as_deref(), Some("x@y.z"));
        assert_eq!(submission.field("company"), None);
    }

    #[test]
    fn form_body_mirrors_email_into_replyto() {
        let body = valid().to_form_body();
        assert_eq!(body.get(REPLY_TO), Some("ada@example.com"));
        let names: Vec<_> = body.fields.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec![FULL_NAME, EMAIL, PHONE, MESSAGE, REPLY_TO]);
    }

    #[test]
    fn form_body_is_url_encoded() {
        let body = ContactSubmission::from_pairs([
            (FULL_NAME, "Ada O"),
            (EMAIL, "a+b@c.io"),
            (PHONE, "1"),
            (MESSAGE, "hi & bye"),
        ])
        .to_form_body();
        assert_eq!(
            body.encode(),
            "fullName=Ada+O&email=a%2Bb%40c.io&phone=1&message=hi+%26+bye&replyto=a%2Bb%40c.io"
        );
    }
}
