use crate::models::{ContactErrors, ContactForm};
use regex_lite::Regex;
use std::sync::OnceLock;

pub const MIN_MESSAGE_LEN: usize = 10;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap())
}

/// Checks every field and collects one message per failing field.
pub fn validate(form: &ContactForm) -> Result<(), ContactErrors> {
    let mut errors = ContactErrors::default();

    if form.name.trim().is_empty() {
        errors.name = Some("Please enter your name");
    }

    if form.email.trim().is_empty() {
        errors.email = Some("Please enter your email");
    } else if !email_regex().is_match(&form.email) {
        errors.email = Some("Please enter a valid email address");
    }

    if form.subject.is_none() {
        errors.subject = Some("Please select a subject");
    }

    let message = form.message.trim();
    if message.is_empty() {
        errors.message = Some("Please enter your message");
    } else if message.chars().count() < MIN_MESSAGE_LEN {
        errors.message = Some("Message must be at least 10 characters");
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Subject;

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ravi Kumar".into(),
            email: "ravi@farm.example".into(),
            subject: Some(Subject::TechnicalSupport),
            message: "Sensors stopped reporting moisture.".into(),
        }
    }

    #[test]
    fn accepts_complete_form() {
        assert_eq!(validate(&valid_form()), Ok(()));
    }

    #[test]
    fn empty_form_reports_every_field() {
        let errors = validate(&ContactForm::default()).unwrap_err();
        assert_eq!(errors.name, Some("Please enter your name"));
        assert_eq!(errors.email, Some("Please enter your email"));
        assert_eq!(errors.subject, Some("Please select a subject"));
        assert_eq!(errors.message, Some("Please enter your message"));
        assert_eq!(errors.count(), 4);
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let form = ContactForm {
            name: "   ".into(),
            message: "\t\n".into(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.name, Some("Please enter your name"));
        assert_eq!(errors.message, Some("Please enter your message"));
        assert_eq!(errors.email, None);
    }

    #[test]
    fn rejects_malformed_email() {
        for email in ["ravi", "ravi@farm", "@farm.example", "ravi farm@x.io", "a@b@c.d"] {
            let form = ContactForm {
                email: email.into(),
                ..valid_form()
            };
            let errors = validate(&form).unwrap_err();
            assert_eq!(
                errors.email,
                Some("Please enter a valid email address"),
                "{email}"
            );
        }
    }

    #[test]
    fn email_with_surrounding_spaces_is_malformed() {
        let form = ContactForm {
            email: " ravi@farm.example".into(),
            ..valid_form()
        };
        assert!(validate(&form).is_err());
    }

    #[test]
    fn short_message_is_rejected() {
        let form = ContactForm {
            message: "  long enough ".into(),
            ..valid_form()
        };
        assert_eq!(validate(&form), Ok(()));

        let form = ContactForm {
            message: "  hi there ".into(),
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(
            errors.message,
            Some("Message must be at least 10 characters")
        );
    }

    #[test]
    fn missing_subject_only() {
        let form = ContactForm {
            subject: None,
            ..valid_form()
        };
        let errors = validate(&form).unwrap_err();
        assert_eq!(errors.count(), 1);
        assert_eq!(errors.subject, Some("Please select a subject"));
    }
}
