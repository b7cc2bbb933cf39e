use std::collections::BTreeSet;

use crate::{
    domain::{
        error::{DomainError, FieldFault},
        models::{
            account::{ContactNumber, EmailAddress, Username},
            credential::Password,
            traveler::{Cnic, Preference, TravelerName, TravelerSignup},
        },
    },
    presentation::notification::Notification,
    usecase::field_validation_usecase::UniquenessVerdict,
};

/// Combo-box placeholder shown at index 0 of the preference list.
pub const PREFERENCE_PLACEHOLDER: &str = "Select Traveler Preference";

/// Combo-box display list: the placeholder followed by every category.
pub fn preference_options() -> Vec<&'static str> {
    std::iter::once(PREFERENCE_PLACEHOLDER)
        .chain(Preference::ALL.iter().map(|p| p.as_str()))
        .collect()
}

/// The eight inputs of the sign-up screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum SignupField {
    TravelerName,
    Cnic,
    Username,
    Email,
    ContactNumber,
    Password,
    ConfirmPassword,
    Preference,
}

impl SignupField {
    /// Submit-time evaluation order; the first failing field aborts the
    /// submission with its own message.
    pub const SUBMIT_ORDER: [Self; 8] = [
        Self::TravelerName,
        Self::Cnic,
        Self::Username,
        Self::Email,
        Self::ContactNumber,
        Self::Password,
        Self::ConfirmPassword,
        Self::Preference,
    ];

    /// Keystroke filter: a character that fails this predicate never
    /// enters the field content.
    pub fn accepts_char(self, ch: char) -> bool {
        match self {
            Self::TravelerName => TravelerName::accepts(ch),
            Self::Cnic => Cnic::accepts(ch),
            Self::Username => Username::accepts(ch),
            Self::Email => EmailAddress::accepts(ch),
            Self::ContactNumber => ContactNumber::accepts(ch),
            Self::Password | Self::ConfirmPassword => Password::accepts(ch),
            Self::Preference => false,
        }
    }
}

/// Validity of a single field, replacing the background-color flag of
/// the original screen.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldStatus {
    /// Nothing evaluated yet.
    #[default]
    Unvalidated,
    /// Format passed; a uniqueness check is in flight.
    Checking,
    Valid,
    Invalid(FieldFault),
}

impl FieldStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Token for an in-flight uniqueness check. It pins the generation of
/// the field content it was issued for; resolving it after the field
/// changed again is a no-op, which is how an outdated check is
/// cancelled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingCheck {
    field: SignupField,
    generation: u64,
    value: String,
}

impl PendingCheck {
    pub fn field(&self) -> SignupField {
        self.field
    }

    /// Trimmed field content the check should query for.
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// Result of feeding one keystroke to the form.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Keystroke {
    /// Whether the character entered the field content.
    pub accepted: bool,
    /// Uniqueness probe the host should run against the store.
    pub check: Option<PendingCheck>,
}

/// What the host should do with the screen after an interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenAction {
    StayOpen,
    /// Close the sign-up screen and show the parent screen again.
    CloseToParent,
}

/// Answer to a Yes/No confirmation dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogChoice {
    Yes,
    No,
}

/// Outcome of the cancel flow.
#[derive(Debug, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The form holds data; show this Yes/No dialog and feed the answer
    /// to [`SignupForm::confirm_cancel`].
    Confirm(Notification),
    Done(ScreenAction),
}

/// Snapshot produced by a passing submit gate.
#[derive(Debug, Clone)]
pub struct SignupDraft {
    pub signup: TravelerSignup,
    pub password: Password,
}

#[derive(Debug, Default)]
struct FieldEntry {
    text: String,
    status: FieldStatus,
    generation: u64,
}

impl FieldEntry {
    fn set_format_status(&mut self, parsed: Result<(), FieldFault>) {
        self.status = match parsed {
            Ok(()) => FieldStatus::Valid,
            Err(fault) => FieldStatus::Invalid(fault),
        };
    }
}

/// State of the Traveler Sign-Up screen: field contents, per-field
/// validity, the dirty set, and the preference selection. Pure state
/// machine; everything that talks to the store goes through
/// [`PendingCheck`] tokens and the submit gate.
#[derive(Debug, Default)]
pub struct SignupForm {
    traveler_name: FieldEntry,
    cnic: FieldEntry,
    username: FieldEntry,
    email: FieldEntry,
    contact: FieldEntry,
    password: FieldEntry,
    confirm_password: FieldEntry,
    preference: Option<Preference>,
    dirty: BTreeSet<SignupField>,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: SignupField) -> &str {
        self.entry(field).map(|e| e.text.as_str()).unwrap_or("")
    }

    pub fn status(&self, field: SignupField) -> FieldStatus {
        match field {
            SignupField::Preference => {
                if self.preference.is_some() {
                    FieldStatus::Valid
                } else {
                    FieldStatus::Unvalidated
                }
            }
            _ => self
                .entry(field)
                .map(|e| e.status.clone())
                .unwrap_or_default(),
        }
    }

    pub fn preference(&self) -> Option<Preference> {
        self.preference
    }

    /// Feed one typed character to a field. Characters outside the
    /// field's class are rejected outright and never enter the content.
    pub fn push_char(&mut self, field: SignupField, ch: char) -> Keystroke {
        if !field.accepts_char(ch) {
            return Keystroke::default();
        }
        let Some(entry) = self.entry_mut(field) else {
            return Keystroke::default();
        };
        entry.text.push(ch);
        let check = self.after_change(field);
        Keystroke {
            accepted: true,
            check,
        }
    }

    /// Backspace: control characters always pass the filter.
    pub fn pop_char(&mut self, field: SignupField) -> Keystroke {
        let popped = self
            .entry_mut(field)
            .map(|e| e.text.pop().is_some())
            .unwrap_or(false);
        if !popped {
            return Keystroke::default();
        }
        let check = self.after_change(field);
        Keystroke {
            accepted: true,
            check,
        }
    }

    /// Select a combo-box row by display index; index 0 is the
    /// placeholder and clears the selection.
    pub fn select_preference(&mut self, index: usize) {
        self.preference = index
            .checked_sub(1)
            .and_then(|i| Preference::ALL.get(i).copied());
        self.update_dirty(SignupField::Preference);
    }

    /// Apply a resolved uniqueness check. Returns the duplicate
    /// notification to show, if any. A stale token is ignored.
    pub fn resolve_check(
        &mut self,
        check: &PendingCheck,
        verdict: UniquenessVerdict,
    ) -> Option<Notification> {
        let entry = self.entry_mut(check.field)?;
        if entry.generation != check.generation {
            return None;
        }
        match verdict {
            UniquenessVerdict::Unique => {
                entry.status = FieldStatus::Valid;
                None
            }
            UniquenessVerdict::Duplicate => {
                entry.status = FieldStatus::Invalid(FieldFault::Duplicate);
                duplicate_notification(check.field)
            }
        }
    }

    /// Apply a failed uniqueness check: the store could not be queried,
    /// so the field is blocked rather than silently passed.
    pub fn fail_check(&mut self, check: &PendingCheck, error: &DomainError) -> Option<Notification> {
        let entry = self.entry_mut(check.field)?;
        if entry.generation != check.generation {
            return None;
        }
        entry.status = FieldStatus::Invalid(FieldFault::Integration(error.to_string()));
        Some(Notification::error(
            "ERROR",
            format!("OPERATION FAILED:\n{error}"),
        ))
    }

    /// Whether any field left its default, tracked directly instead of
    /// scanning a control tree.
    pub fn has_data(&self) -> bool {
        !self.dirty.is_empty()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Cancel button. A pristine form closes immediately; a dirty form
    /// asks for confirmation first.
    pub fn request_cancel(&mut self) -> CancelOutcome {
        if self.has_data() {
            CancelOutcome::Confirm(Notification::confirmation(
                "CONFIRM CLEAR",
                "THIS WILL CLEAR THE FORM.DO YOU WANT TO CONTINUE ? ",
            ))
        } else {
            self.clear();
            CancelOutcome::Done(ScreenAction::CloseToParent)
        }
    }

    /// Answer to the clear-form confirmation dialog.
    pub fn confirm_cancel(&mut self, choice: DialogChoice) -> CancelOutcome {
        match choice {
            DialogChoice::Yes => {
                self.clear();
                CancelOutcome::Done(ScreenAction::CloseToParent)
            }
            DialogChoice::No => CancelOutcome::Done(ScreenAction::StayOpen),
        }
    }

    /// Final gate before persistence: every field is re-checked in the
    /// fixed submit order and the first failure aborts with its own
    /// message. On success the validated snapshot is handed back for the
    /// registration usecase.
    pub fn submit_gate(&self) -> Result<SignupDraft, Notification> {
        for field in SignupField::SUBMIT_ORDER {
            if !self.field_passes(field) {
                return Err(gate_failure(field));
            }
        }

        let signup = TravelerSignup {
            traveler_name: TravelerName::parse(&self.traveler_name.text)
                .map_err(|_| gate_failure(SignupField::TravelerName))?,
            cnic: Cnic::parse(&self.cnic.text).map_err(|_| gate_failure(SignupField::Cnic))?,
            username: Username::parse(&self.username.text)
                .map_err(|_| gate_failure(SignupField::Username))?,
            email: EmailAddress::parse(&self.email.text)
                .map_err(|_| gate_failure(SignupField::Email))?,
            contact: ContactNumber::parse(&self.contact.text)
                .map_err(|_| gate_failure(SignupField::ContactNumber))?,
            preference: self
                .preference
                .ok_or_else(|| gate_failure(SignupField::Preference))?,
        };
        let password = Password::parse(&self.password.text)
            .map_err(|_| gate_failure(SignupField::Password))?;

        Ok(SignupDraft { signup, password })
    }

    fn field_passes(&self, field: SignupField) -> bool {
        match field {
            SignupField::Preference => self.preference.is_some(),
            // The email value is parsed again at gate time.
            SignupField::Email => {
                self.email.status.is_valid() && EmailAddress::parse(&self.email.text).is_ok()
            }
            _ => self
                .entry(field)
                .map(|e| !e.text.trim().is_empty() && e.status.is_valid())
                .unwrap_or(false),
        }
    }

    fn after_change(&mut self, field: SignupField) -> Option<PendingCheck> {
        self.update_dirty(field);
        match field {
            SignupField::TravelerName => {
                let parsed = TravelerName::parse(&self.traveler_name.text).map(|_| ());
                self.traveler_name.set_format_status(parsed);
                None
            }
            SignupField::Cnic => {
                let parsed = Cnic::parse(&self.cnic.text).map(|_| ());
                self.cnic.set_format_status(parsed);
                None
            }
            // Either password field re-validates both.
            SignupField::Password | SignupField::ConfirmPassword => {
                let parsed = Password::parse(&self.password.text).map(|_| ());
                self.password.set_format_status(parsed);
                self.confirm_password.status = if self.confirm_password.text == self.password.text {
                    FieldStatus::Valid
                } else {
                    FieldStatus::Invalid(FieldFault::Mismatch)
                };
                None
            }
            SignupField::Username => Self::begin_check(&mut self.username, field, |t| {
                Username::parse(t).map(|_| ())
            }),
            SignupField::Email => Self::begin_check(&mut self.email, field, |t| {
                EmailAddress::parse(t).map(|_| ())
            }),
            SignupField::ContactNumber => Self::begin_check(&mut self.contact, field, |t| {
                ContactNumber::parse(t).map(|_| ())
            }),
            SignupField::Preference => None,
        }
    }

    /// Every edit of a uniqueness-checked field bumps its generation so
    /// checks issued for older content can no longer resolve.
    fn begin_check(
        entry: &mut FieldEntry,
        field: SignupField,
        parse: fn(&str) -> Result<(), FieldFault>,
    ) -> Option<PendingCheck> {
        entry.generation += 1;
        match parse(&entry.text) {
            Ok(()) => {
                entry.status = FieldStatus::Checking;
                Some(PendingCheck {
                    field,
                    generation: entry.generation,
                    value: entry.text.trim().to_string(),
                })
            }
            Err(fault) => {
                entry.status = FieldStatus::Invalid(fault);
                None
            }
        }
    }

    fn update_dirty(&mut self, field: SignupField) {
        let non_default = match field {
            SignupField::Preference => self.preference.is_some(),
            _ => self.entry(field).map(|e| !e.text.is_empty()).unwrap_or(false),
        };
        if non_default {
            self.dirty.insert(field);
        } else {
            self.dirty.remove(&field);
        }
    }

    fn entry(&self, field: SignupField) -> Option<&FieldEntry> {
        match field {
            SignupField::TravelerName => Some(&self.traveler_name),
            SignupField::Cnic => Some(&self.cnic),
            SignupField::Username => Some(&self.username),
            SignupField::Email => Some(&self.email),
            SignupField::ContactNumber => Some(&self.contact),
            SignupField::Password => Some(&self.password),
            SignupField::ConfirmPassword => Some(&self.confirm_password),
            SignupField::Preference => None,
        }
    }

    fn entry_mut(&mut self, field: SignupField) -> Option<&mut FieldEntry> {
        match field {
            SignupField::TravelerName => Some(&mut self.traveler_name),
            SignupField::Cnic => Some(&mut self.cnic),
            SignupField::Username => Some(&mut self.username),
            SignupField::Email => Some(&mut self.email),
            SignupField::ContactNumber => Some(&mut self.contact),
            SignupField::Password => Some(&mut self.password),
            SignupField::ConfirmPassword => Some(&mut self.confirm_password),
            SignupField::Preference => None,
        }
    }
}

/// Submit-gate failure message for a field, shown verbatim.
fn gate_failure(field: SignupField) -> Notification {
    match field {
        SignupField::TravelerName => Notification::warning(
            "INVALID INPUT",
            "TRAVELER NAME IS INVALID. IT SHOULD BE 8-20 CHARACTERS LONG AND CONTAIN ONLY ALPHABETS AND SPACES.",
        ),
        SignupField::Cnic => Notification::warning(
            "INVALID CNIC",
            "CNIC NUMBER IS INVALID. IT SHOULD BE EXACT 15 CHARACTERS.",
        ),
        SignupField::Username => Notification::warning(
            "INVALID INPUT",
            "USERNAME IS INVALID. PLEASE ENSURE IT'S BETWEEN 8-20 CHARACTERS AND ONLY CONTAINS ALPHABETS.",
        ),
        SignupField::Email => Notification::warning(
            "INVALID EMAIL",
            "EMAIL IS INVALID. PLEASE USE A VALID EMAIL FORMAT LIKE USER@EXAMPLE.COM.",
        ),
        SignupField::ContactNumber => Notification::warning(
            "INVALID INPUT",
            "CONTACT NUMBER IS INVALID. IT SHOULD BE 11 DIGITS LONG.",
        ),
        SignupField::Password => Notification::warning(
            "INVALID INPUT",
            "PASSWORD IS INVALID. IT SHOULD BE AT LEAST 8 CHARACTERS.",
        ),
        SignupField::ConfirmPassword => Notification::warning(
            "INVALID INPUT",
            "CONFIRM PASSWORD IS INVALID. IT SHOULD MATCH THE PASSWORD.",
        ),
        SignupField::Preference => {
            Notification::warning("MISSING PREFERENCE", "PLEASE SELECT A PREFERENCE.")
        }
    }
}

/// Blocking notification naming a uniqueness conflict.
fn duplicate_notification(field: SignupField) -> Option<Notification> {
    match field {
        SignupField::Username => Some(Notification::error(
            "DUPLICATE USERNAME",
            "USERNAME ALREADY EXISTS FOR ROLE TRAVELER",
        )),
        SignupField::Email => Some(Notification::error(
            "DUPLICATE EMAIL",
            "EMAIL IS ALREADY REGISTERED FOR ROLE TRAVELER.",
        )),
        SignupField::ContactNumber => Some(Notification::error(
            "DUPLICATE CONTACT",
            "CONTACT NUMBER IS ALREADY IN USE FOR ROLE TRAVELER.",
        )),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(form: &mut SignupForm, field: SignupField, text: &str) -> Option<PendingCheck> {
        let mut check = None;
        for ch in text.chars() {
            check = form.push_char(field, ch).check;
        }
        check
    }

    #[test]
    fn username_filter_rejects_symbols_and_accepts_digits() {
        let mut form = SignupForm::new();
        let rejected = form.push_char(SignupField::Username, '!');
        assert!(!rejected.accepted);
        assert_eq!(form.text(SignupField::Username), "");

        let accepted = form.push_char(SignupField::Username, '5');
        assert!(accepted.accepted);
        assert_eq!(form.text(SignupField::Username), "5");
    }

    #[test]
    fn short_username_is_invalid_without_issuing_a_check() {
        let mut form = SignupForm::new();
        let check = type_str(&mut form, SignupField::Username, "johndoe");
        assert_eq!(check, None);
        assert_eq!(
            form.status(SignupField::Username),
            FieldStatus::Invalid(FieldFault::Format)
        );
    }

    #[test]
    fn valid_username_goes_to_checking_until_resolved() {
        let mut form = SignupForm::new();
        let check = type_str(&mut form, SignupField::Username, "johndoe1").unwrap();
        assert_eq!(form.status(SignupField::Username), FieldStatus::Checking);
        assert_eq!(check.value(), "johndoe1");

        let notification = form.resolve_check(&check, UniquenessVerdict::Unique);
        assert_eq!(notification, None);
        assert_eq!(form.status(SignupField::Username), FieldStatus::Valid);
    }

    #[test]
    fn duplicate_username_marks_invalid_and_notifies() {
        let mut form = SignupForm::new();
        let check = type_str(&mut form, SignupField::Username, "johndoe1").unwrap();
        let notification = form
            .resolve_check(&check, UniquenessVerdict::Duplicate)
            .unwrap();
        assert_eq!(notification.title(), "DUPLICATE USERNAME");
        assert_eq!(
            form.status(SignupField::Username),
            FieldStatus::Invalid(FieldFault::Duplicate)
        );
    }

    #[test]
    fn stale_check_resolution_is_ignored() {
        let mut form = SignupForm::new();
        let stale = type_str(&mut form, SignupField::Username, "johndoe1").unwrap();
        let fresh = form.push_char(SignupField::Username, '2').check.unwrap();

        assert_eq!(form.resolve_check(&stale, UniquenessVerdict::Duplicate), None);
        assert_eq!(form.status(SignupField::Username), FieldStatus::Checking);

        form.resolve_check(&fresh, UniquenessVerdict::Unique);
        assert_eq!(form.status(SignupField::Username), FieldStatus::Valid);
    }

    #[test]
    fn mismatched_confirmation_is_flagged_until_it_matches() {
        let mut form = SignupForm::new();
        type_str(&mut form, SignupField::Password, "Password1");
        type_str(&mut form, SignupField::ConfirmPassword, "Password");
        assert_eq!(
            form.status(SignupField::ConfirmPassword),
            FieldStatus::Invalid(FieldFault::Mismatch)
        );

        form.push_char(SignupField::ConfirmPassword, '1');
        assert!(form.status(SignupField::ConfirmPassword).is_valid());
    }

    #[test]
    fn editing_password_revalidates_the_confirmation() {
        let mut form = SignupForm::new();
        type_str(&mut form, SignupField::Password, "Password1");
        type_str(&mut form, SignupField::ConfirmPassword, "Password1");
        assert!(form.status(SignupField::ConfirmPassword).is_valid());

        form.push_char(SignupField::Password, '2');
        assert_eq!(
            form.status(SignupField::ConfirmPassword),
            FieldStatus::Invalid(FieldFault::Mismatch)
        );
    }

    #[test]
    fn empty_form_gate_fails_on_traveler_name_first() {
        let form = SignupForm::new();
        let notification = form.submit_gate().unwrap_err();
        assert_eq!(notification.title(), "INVALID INPUT");
        assert!(notification.message().starts_with("TRAVELER NAME IS INVALID"));
    }

    #[test]
    fn preference_selection_maps_display_index_to_category() {
        let mut form = SignupForm::new();
        assert_eq!(preference_options()[0], PREFERENCE_PLACEHOLDER);
        assert_eq!(preference_options()[6], "Hiking");

        form.select_preference(6);
        assert_eq!(form.preference(), Some(Preference::Hiking));

        form.select_preference(0);
        assert_eq!(form.preference(), None);
    }

    #[test]
    fn cancel_on_pristine_form_closes_without_asking() {
        let mut form = SignupForm::new();
        assert_eq!(
            form.request_cancel(),
            CancelOutcome::Done(ScreenAction::CloseToParent)
        );
    }

    #[test]
    fn cancel_on_dirty_form_asks_first() {
        let mut form = SignupForm::new();
        form.push_char(SignupField::TravelerName, 'J');
        let CancelOutcome::Confirm(notification) = form.request_cancel() else {
            panic!("expected a confirmation dialog");
        };
        assert_eq!(notification.title(), "CONFIRM CLEAR");

        // Declining keeps the screen open with contents intact.
        assert_eq!(
            form.confirm_cancel(DialogChoice::No),
            CancelOutcome::Done(ScreenAction::StayOpen)
        );
        assert_eq!(form.text(SignupField::TravelerName), "J");

        // Accepting clears and closes.
        assert_eq!(
            form.confirm_cancel(DialogChoice::Yes),
            CancelOutcome::Done(ScreenAction::CloseToParent)
        );
        assert_eq!(form.text(SignupField::TravelerName), "");
        assert!(!form.has_data());
    }

    #[test]
    fn deleting_all_input_makes_the_form_pristine_again() {
        let mut form = SignupForm::new();
        form.push_char(SignupField::Cnic, '1');
        assert!(form.has_data());
        form.pop_char(SignupField::Cnic);
        assert!(!form.has_data());
    }
}
