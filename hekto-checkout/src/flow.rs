//! Order submission state machine.
//!
//! Idle -> Confirming -> Notice(outcome) -> Idle. Confirmation and the
//! terminal notice are presented by the host as modal dialogs; the machine
//! advances on their dismissal callbacks.

use crate::billing::BillingForm;
use crate::storage::{KeyValueStore, clear_cart, clear_discount};

/// Terminal result of a confirmed submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// All fields present; the order went through.
    Placed,
    /// At least one field was empty; nothing was placed.
    MissingFields,
}

/// Where the submission currently stands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmitState {
    #[default]
    Idle,
    /// The yes/no confirmation dialog is open.
    Confirming,
    /// A terminal success/error notice is open.
    Notice(SubmitOutcome),
}

/// The submission flow for one checkout page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckoutFlow {
    state: SubmitState,
}

impl CheckoutFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn state(&self) -> SubmitState {
        self.state
    }

    /// Whether a dialog is open. The submit trigger is disabled while true,
    /// so a second press cannot start a concurrent submission.
    #[must_use]
    pub const fn in_flight(&self) -> bool {
        !matches!(self.state, SubmitState::Idle)
    }

    /// Begin a submission. Returns false without transitioning when a
    /// dialog is already open.
    pub fn request_order(&mut self) -> bool {
        if self.in_flight() {
            return false;
        }
        self.state = SubmitState::Confirming;
        true
    }

    /// The user declined the confirmation. No side effects.
    pub fn cancel_confirmation(&mut self) {
        if matches!(self.state, SubmitState::Confirming) {
            self.state = SubmitState::Idle;
        }
    }

    /// The user confirmed: validate the form and settle the submission.
    ///
    /// On success the persisted discount and cart snapshot are removed and
    /// the form is reset. On failure everything except the missing flags is
    /// left untouched so the user can fix the fields in place. Returns
    /// `None` when no confirmation dialog is open.
    pub fn confirm(
        &mut self,
        form: &mut BillingForm,
        store: &mut impl KeyValueStore,
    ) -> Option<SubmitOutcome> {
        if !matches!(self.state, SubmitState::Confirming) {
            return None;
        }
        let outcome = if form.validate() {
            clear_discount(store);
            clear_cart(store);
            form.clear();
            log::info!("order placed");
            SubmitOutcome::Placed
        } else {
            log::debug!("submission rejected: {} field(s) empty", form.missing_fields().len());
            SubmitOutcome::MissingFields
        };
        self.state = SubmitState::Notice(outcome);
        Some(outcome)
    }

    /// The user dismissed the terminal notice.
    pub fn acknowledge_notice(&mut self) {
        if matches!(self.state, SubmitState::Notice(_)) {
            self.state = SubmitState::Idle;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{CheckoutFlow, SubmitOutcome, SubmitState};
    use crate::billing::{BillingField, BillingForm};
    use crate::storage::{DISCOUNT_KEY, KeyValueStore, MemoryStore};

    fn filled_form() -> BillingForm {
        let mut form = BillingForm::new();
        for field in BillingField::ALL {
            form.set(field, "x");
        }
        form
    }

    #[test]
    fn request_order_opens_confirmation_once() {
        let mut flow = CheckoutFlow::new();
        assert!(flow.request_order());
        assert_eq!(flow.state(), SubmitState::Confirming);
        assert!(!flow.request_order());
    }

    #[test]
    fn declining_returns_to_idle_without_side_effects() {
        let mut store = MemoryStore::new();
        store.set(DISCOUNT_KEY, "5");
        let mut flow = CheckoutFlow::new();
        let _ = flow.request_order();
        flow.cancel_confirmation();
        assert_eq!(flow.state(), SubmitState::Idle);
        assert_eq!(store.get(DISCOUNT_KEY).as_deref(), Some("5"));
    }

    #[test]
    fn confirm_outside_confirming_is_a_no_op() {
        let mut flow = CheckoutFlow::new();
        let mut form = filled_form();
        let mut store = MemoryStore::new();
        assert_eq!(flow.confirm(&mut form, &mut store), None);
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[test]
    fn confirmed_valid_form_places_the_order() {
        let mut flow = CheckoutFlow::new();
        let mut form = filled_form();
        let mut store = MemoryStore::new();
        store.set(DISCOUNT_KEY, "5");
        let _ = flow.request_order();
        let outcome = flow.confirm(&mut form, &mut store);
        assert_eq!(outcome, Some(SubmitOutcome::Placed));
        assert_eq!(flow.state(), SubmitState::Notice(SubmitOutcome::Placed));
        assert!(store.get(DISCOUNT_KEY).is_none());
        assert_eq!(form.value(BillingField::FirstName), "");
        flow.acknowledge_notice();
        assert_eq!(flow.state(), SubmitState::Idle);
    }

    #[test]
    fn confirmed_invalid_form_is_rejected_and_preserves_input() {
        let mut flow = CheckoutFlow::new();
        let mut form = filled_form();
        form.set(BillingField::Email, "");
        let mut store = MemoryStore::new();
        store.set(DISCOUNT_KEY, "5");
        let _ = flow.request_order();
        let outcome = flow.confirm(&mut form, &mut store);
        assert_eq!(outcome, Some(SubmitOutcome::MissingFields));
        assert_eq!(store.get(DISCOUNT_KEY).as_deref(), Some("5"));
        assert_eq!(form.value(BillingField::FirstName), "x");
        assert!(form.is_missing(BillingField::Email));
        assert!(!form.is_missing(BillingField::FirstName));
    }
}
