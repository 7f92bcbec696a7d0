//! Registration form fields and input normalization

/// Identifier for every input on the registration form.
///
/// A closed enum instead of field-name strings so that normalization and
/// record access are exhaustively matched at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
    ContactNumber,
    Pan,
    Postcode,
    Address1,
    Address2,
    State,
    City,
}

impl FieldId {
    /// All fields in on-screen order.
    pub const ALL: [FieldId; 10] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Email,
        FieldId::ContactNumber,
        FieldId::Pan,
        FieldId::Postcode,
        FieldId::Address1,
        FieldId::Address2,
        FieldId::State,
        FieldId::City,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            FieldId::FirstName => "First Name",
            FieldId::LastName => "Last Name",
            FieldId::Email => "Email",
            FieldId::ContactNumber => "Contact Number (+91)",
            FieldId::Pan => "PAN",
            FieldId::Postcode => "Postcode",
            FieldId::Address1 => "Address Line 1 (Correspondence)",
            FieldId::Address2 => "Address Line 2 (Permanent)",
            FieldId::State => "State",
            FieldId::City => "City",
        }
    }

    /// Sanitize raw input according to this field's masking rule.
    ///
    /// Pure and idempotent: normalizing an already-normalized value is a
    /// no-op. Length is never truncated here; length rules are enforced by
    /// validation only.
    pub fn normalize(&self, raw: &str) -> String {
        match self {
            // Digits only; postcode and contact number share the rule.
            FieldId::ContactNumber | FieldId::Postcode => {
                raw.chars().filter(|c| c.is_ascii_digit()).collect()
            }
            FieldId::Pan => raw
                .chars()
                .map(|c| c.to_ascii_uppercase())
                .filter(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
                .collect(),
            FieldId::Address1 | FieldId::Address2 => raw
                .chars()
                .filter(|c| {
                    c.is_ascii_alphanumeric() || c.is_whitespace() || matches!(c, ',' | '.' | '-')
                })
                .collect(),
            // Email is validated, not masked.
            FieldId::Email => raw.to_string(),
            FieldId::FirstName | FieldId::LastName | FieldId::State | FieldId::City => raw
                .chars()
                .filter(|c| c.is_ascii_alphabetic() || c.is_whitespace())
                .collect(),
        }
    }
}

/// Length at which the postcode lookup fires.
pub const POSTCODE_LEN: usize = 6;

/// Length at which the PAN verification fires.
pub const PAN_LEN: usize = 10;

/// Flat record of everything the form collects.
///
/// Created empty, mutated on every keystroke and on every successful
/// enrichment response, never persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub contact_number: String,
    pub pan: String,
    pub postcode: String,
    pub address1: String,
    pub address2: String,
    pub state: String,
    pub city: String,
}

impl FormRecord {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::ContactNumber => &self.contact_number,
            FieldId::Pan => &self.pan,
            FieldId::Postcode => &self.postcode,
            FieldId::Address1 => &self.address1,
            FieldId::Address2 => &self.address2,
            FieldId::State => &self.state,
            FieldId::City => &self.city,
        }
    }

    pub fn set(&mut self, field: FieldId, value: String) {
        match field {
            FieldId::FirstName => self.first_name = value,
            FieldId::LastName => self.last_name = value,
            FieldId::Email => self.email = value,
            FieldId::ContactNumber => self.contact_number = value,
            FieldId::Pan => self.pan = value,
            FieldId::Postcode => self.postcode = value,
            FieldId::Address1 => self.address1 = value,
            FieldId::Address2 => self.address2 = value,
            FieldId::State => self.state = value,
            FieldId::City => self.city = value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_contact_number_keeps_digits_only() {
        let out = FieldId::ContactNumber.normalize("+91 98x76-543a21");
        assert_eq!(out, "91987654321");
        assert!(out.chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_contact_number_never_truncates() {
        let out = FieldId::ContactNumber.normalize("123456789012345");
        assert_eq!(out, "123456789012345");
    }

    #[test]
    fn test_pan_uppercases_and_strips() {
        assert_eq!(FieldId::Pan.normalize("abcde1234f"), "ABCDE1234F");
        assert_eq!(FieldId::Pan.normalize("ab-cd e12!"), "ABCDE12");
    }

    #[test]
    fn test_postcode_shares_digit_rule() {
        assert_eq!(FieldId::Postcode.normalize("12a3456"), "123456");
        assert_eq!(FieldId::Postcode.normalize("12a3456").len(), POSTCODE_LEN);
    }

    #[test]
    fn test_address_allows_punctuation_subset() {
        assert_eq!(
            FieldId::Address1.normalize("12-B, M.G. Road #4 (rear)"),
            "12-B, M.G. Road 4 rear"
        );
    }

    #[test]
    fn test_name_fields_letters_and_spaces_only() {
        assert_eq!(FieldId::FirstName.normalize("Jo4hn!"), "John");
        assert_eq!(FieldId::State.normalize("Tamil Nadu 600001"), "Tamil Nadu ");
        assert_eq!(FieldId::City.normalize("Pune-411001"), "Pune");
    }

    #[test]
    fn test_email_passes_through() {
        assert_eq!(
            FieldId::Email.normalize("Weird Input!@Example.COM"),
            "Weird Input!@Example.COM"
        );
    }

    #[test]
    fn test_normalize_is_idempotent_for_every_field() {
        let raw = "aB1 ,.-_%+@zZ9\t!";
        for field in FieldId::ALL {
            let once = field.normalize(raw);
            assert_eq!(field.normalize(&once), once, "{field:?}");
        }
    }

    #[test]
    fn test_record_get_set_roundtrip() {
        let mut record = FormRecord::default();
        for field in FieldId::ALL {
            assert_eq!(record.get(field), "");
        }
        record.set(FieldId::City, "Pune".to_string());
        record.set(FieldId::Pan, "ABCDE1234F".to_string());
        assert_eq!(record.get(FieldId::City), "Pune");
        assert_eq!(record.get(FieldId::Pan), "ABCDE1234F");
        assert_eq!(record.get(FieldId::State), "");
    }
}
