use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Subject {
    GeneralInquiry,
    TechnicalSupport,
    Partnership,
    Feedback,
}

impl Subject {
    pub fn all() -> &'static [Subject] {
        &[
            Subject::GeneralInquiry,
            Subject::TechnicalSupport,
            Subject::Partnership,
            Subject::Feedback,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Subject::GeneralInquiry => "General Inquiry",
            Subject::TechnicalSupport => "Technical Support",
            Subject::Partnership => "Partnership",
            Subject::Feedback => "Feedback",
        }
    }
}

impl std::fmt::Display for Subject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Subject,
    Message,
}

impl ContactField {
    pub fn all() -> &'static [ContactField] {
        &[
            ContactField::Name,
            ContactField::Email,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ContactField::Name => ContactField::Email,
            ContactField::Email => ContactField::Subject,
            ContactField::Subject => ContactField::Message,
            ContactField::Message => ContactField::Name,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            ContactField::Name => ContactField::Message,
            ContactField::Email => ContactField::Name,
            ContactField::Subject => ContactField::Email,
            ContactField::Message => ContactField::Subject,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: Option<Subject>,
    pub message: String,
}

impl ContactForm {
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Validation failures, at most one message per field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<&'static str>,
    pub email: Option<&'static str>,
    pub subject: Option<&'static str>,
    pub message: Option<&'static str>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }

    pub fn get(&self, field: ContactField) -> Option<&'static str> {
        match field {
            ContactField::Name => self.name,
            ContactField::Email => self.email,
            ContactField::Subject => self.subject,
            ContactField::Message => self.message,
        }
    }

    pub fn count(&self) -> usize {
        ContactField::all()
            .iter()
            .filter(|f| self.get(**f).is_some())
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_cycle_wraps() {
        let mut field = ContactField::Name;
        for _ in 0..ContactField::all().len() {
            field = field.next();
        }
        assert_eq!(field, ContactField::Name);
        assert_eq!(ContactField::Name.prev(), ContactField::Message);
    }

    #[test]
    fn reset_clears_form() {
        let mut form = ContactForm {
            name: "Asha".into(),
            email: "asha@example.com".into(),
            subject: Some(Subject::Feedback),
            message: "Great service overall".into(),
        };
        form.reset();
        assert_eq!(form, ContactForm::default());
    }

    #[test]
    fn errors_count_and_lookup() {
        let errors = ContactErrors {
            email: Some("bad"),
            message: Some("short"),
            ..Default::default()
        };
        assert_eq!(errors.count(), 2);
        assert_eq!(errors.get(ContactField::Email), Some("bad"));
        assert_eq!(errors.get(ContactField::Name), None);
        assert!(!errors.is_empty());
        assert!(ContactErrors::default().is_empty());
    }
}
