//! Billing form state and validation.

/// The closed set of billing fields the checkout form collects.
///
/// Keeping this an enum rather than a free-form map makes the
/// "every field is required" rule statically checkable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillingField {
    FirstName,
    LastName,
    Address,
    City,
    ZipCode,
    Phone,
    Email,
}

impl BillingField {
    pub const ALL: [Self; 7] = [
        Self::FirstName,
        Self::LastName,
        Self::Address,
        Self::City,
        Self::ZipCode,
        Self::Phone,
        Self::Email,
    ];

    /// Stable camelCase id, matching the storefront's form field ids.
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::FirstName => "firstName",
            Self::LastName => "lastName",
            Self::Address => "address",
            Self::City => "city",
            Self::ZipCode => "zipCode",
            Self::Phone => "phone",
            Self::Email => "email",
        }
    }

    /// Display label for the input.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First Name",
            Self::LastName => "Last Name",
            Self::Address => "Address",
            Self::City => "City",
            Self::ZipCode => "Zip Code",
            Self::Phone => "Phone",
            Self::Email => "Email",
        }
    }

    /// Inline error copy shown under an empty field after validation.
    #[must_use]
    pub fn required_message(self) -> String {
        format!("{} is required.", self.label())
    }

    const fn index(self) -> usize {
        match self {
            Self::FirstName => 0,
            Self::LastName => 1,
            Self::Address => 2,
            Self::City => 3,
            Self::ZipCode => 4,
            Self::Phone => 5,
            Self::Email => 6,
        }
    }
}

/// Billing form values plus the per-field missing flags set by the last
/// validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BillingForm {
    values: [String; BillingField::ALL.len()],
    missing: [bool; BillingField::ALL.len()],
}

impl BillingForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a field's value. No per-keystroke validation; flags only
    /// change on the next `validate` pass.
    pub fn set(&mut self, field: BillingField, value: impl Into<String>) {
        self.values[field.index()] = value.into();
    }

    #[must_use]
    pub fn value(&self, field: BillingField) -> &str {
        &self.values[field.index()]
    }

    /// Whether the field was empty at the last `validate` pass.
    #[must_use]
    pub const fn is_missing(&self, field: BillingField) -> bool {
        self.missing[field.index()]
    }

    /// Re-derive every missing flag. Returns true iff no field is missing.
    pub fn validate(&mut self) -> bool {
        for field in BillingField::ALL {
            self.missing[field.index()] = self.values[field.index()].trim().is_empty();
        }
        self.missing.iter().all(|missing| !missing)
    }

    /// Fields flagged missing by the last validation pass.
    #[must_use]
    pub fn missing_fields(&self) -> Vec<BillingField> {
        BillingField::ALL
            .into_iter()
            .filter(|field| self.is_missing(*field))
            .collect()
    }

    /// Reset values and flags to the initial empty state.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{BillingField, BillingForm};

    fn filled_form() -> BillingForm {
        let mut form = BillingForm::new();
        form.set(BillingField::FirstName, "Ada");
        form.set(BillingField::LastName, "Lovelace");
        form.set(BillingField::Address, "12 Analytical Way");
        form.set(BillingField::City, "London");
        form.set(BillingField::ZipCode, "E1 6AN");
        form.set(BillingField::Phone, "020 7946 0000");
        form.set(BillingField::Email, "ada@example.com");
        form
    }

    #[test]
    fn validate_passes_when_all_fields_filled() {
        let mut form = filled_form();
        assert!(form.validate());
        assert!(form.missing_fields().is_empty());
    }

    #[test]
    fn validate_flags_every_empty_field() {
        let mut form = BillingForm::new();
        assert!(!form.validate());
        assert_eq!(form.missing_fields().len(), BillingField::ALL.len());
    }

    #[test]
    fn validate_flags_only_the_empty_fields() {
        let mut form = filled_form();
        form.set(BillingField::City, "");
        form.set(BillingField::Email, "   ");
        assert!(!form.validate());
        assert_eq!(
            form.missing_fields(),
            vec![BillingField::City, BillingField::Email]
        );
        assert_eq!(form.value(BillingField::FirstName), "Ada");
    }

    #[test]
    fn whitespace_only_counts_as_empty() {
        let mut form = filled_form();
        form.set(BillingField::Phone, " \t ");
        assert!(!form.validate());
        assert!(form.is_missing(BillingField::Phone));
    }

    #[test]
    fn set_overwrites_without_touching_flags() {
        let mut form = BillingForm::new();
        let _ = form.validate();
        assert!(form.is_missing(BillingField::FirstName));
        form.set(BillingField::FirstName, "Ada");
        assert!(form.is_missing(BillingField::FirstName));
        assert!(!form.validate());
        assert!(!form.is_missing(BillingField::FirstName));
    }

    #[test]
    fn clear_resets_values_and_flags() {
        let mut form = filled_form();
        let _ = form.validate();
        form.clear();
        assert_eq!(form.value(BillingField::FirstName), "");
        assert!(!form.is_missing(BillingField::FirstName));
    }

    #[test]
    fn keys_match_storefront_ids() {
        assert_eq!(BillingField::FirstName.key(), "firstName");
        assert_eq!(BillingField::ZipCode.key(), "zipCode");
        assert_eq!(BillingField::Email.key(), "email");
    }
}
