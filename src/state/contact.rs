/// The contact form's captured fields, trimmed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactDraft {
    pub fn new(name: &str, email: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    pub fn is_blank(&self) -> bool {
        self.name.is_empty() && self.email.is_empty() && self.message.is_empty()
    }
}

/// What became of a submitted form. There is no delivery backend, so a
/// non-blank draft is never sent anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Blank,
    Undelivered(ContactDraft),
}

impl Submission {
    pub fn notice(&self) -> &'static str {
        match self {
            Self::Blank => "The form is empty, nothing to send.",
            Self::Undelivered(_) => {
                "Message delivery isn't set up yet. Please reach out by email instead."
            }
        }
    }
}

impl From<ContactDraft> for Submission {
    fn from(draft: ContactDraft) -> Self {
        if draft.is_blank() {
            Self::Blank
        } else {
            Self::Undelivered(draft)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fields_are_trimmed() {
        let draft = ContactDraft::new("  Ada ", "ada@example.com\n", " hi ");
        assert_eq!(draft.name, "Ada");
        assert_eq!(draft.email, "ada@example.com");
        assert_eq!(draft.message, "hi");
    }

    #[test]
    fn test_blank_submission() {
        let draft = ContactDraft::new(" ", "", "\t");
        assert!(draft.is_blank());
        assert_eq!(Submission::from(draft), Submission::Blank);
    }

    #[test]
    fn test_partial_draft_is_not_blank() {
        // no field validation: any content counts
        let draft = ContactDraft::new("", "", "hello");
        let submission = Submission::from(draft.clone());
        assert_eq!(submission, Submission::Undelivered(draft));
        assert!(submission.notice().contains("email"));
    }
}
