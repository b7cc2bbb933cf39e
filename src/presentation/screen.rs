use crate::{
    domain::{
        error::DomainError,
        repositories::{
            account_lookup_repository::AccountLookupRepository,
            traveler_registration_repository::TravelerRegistrationRepository,
        },
        services::password_service::PasswordHasher,
    },
    presentation::{
        form::{
            CancelOutcome, DialogChoice, Keystroke, PendingCheck, ScreenAction, SignupField,
            SignupForm,
        },
        notification::Notification,
    },
    usecase::{
        field_validation_usecase::FieldValidationUsecase,
        register_traveler_usecase::RegisterTravelerUsecase,
    },
};

/// Result of pressing the sign-up button.
#[derive(Debug, PartialEq, Eq)]
pub struct SubmitOutcome {
    pub notification: Notification,
    pub action: ScreenAction,
}

/// Controller for the Traveler Sign-Up screen. The rendering layer
/// forwards keystrokes, combo selections, button presses and dialog
/// answers; the controller owns the form state and drives the two
/// usecases behind it.
pub struct SignupScreen<L, R, P>
where
    L: AccountLookupRepository,
    R: TravelerRegistrationRepository,
    P: PasswordHasher,
{
    form: SignupForm,
    field_validation: FieldValidationUsecase<L>,
    registration: RegisterTravelerUsecase<R, P>,
}

impl<L, R, P> SignupScreen<L, R, P>
where
    L: AccountLookupRepository + Send + Sync,
    R: TravelerRegistrationRepository + Send + Sync,
    P: PasswordHasher + Send + Sync,
{
    pub fn new(
        field_validation: FieldValidationUsecase<L>,
        registration: RegisterTravelerUsecase<R, P>,
    ) -> Self {
        Self {
            form: SignupForm::new(),
            field_validation,
            registration,
        }
    }

    pub fn form(&self) -> &SignupForm {
        &self.form
    }

    pub fn push_char(&mut self, field: SignupField, ch: char) -> Keystroke {
        self.form.push_char(field, ch)
    }

    pub fn pop_char(&mut self, field: SignupField) -> Keystroke {
        self.form.pop_char(field)
    }

    pub fn select_preference(&mut self, index: usize) {
        self.form.select_preference(index);
    }

    /// Run a uniqueness probe issued by the form and apply its result.
    /// A store failure blocks the field instead of passing it.
    pub async fn run_check(&mut self, check: PendingCheck) -> Option<Notification> {
        let result = match check.field() {
            SignupField::Username => self.field_validation.check_username(check.value()).await,
            SignupField::Email => self.field_validation.check_email(check.value()).await,
            SignupField::ContactNumber => self.field_validation.check_contact(check.value()).await,
            _ => return None,
        };

        match result {
            Ok(verdict) => self.form.resolve_check(&check, verdict),
            Err(error) => {
                tracing::warn!(field = ?check.field(), error = %error, "uniqueness check failed");
                self.form.fail_check(&check, &error)
            }
        }
    }

    /// Sign-up button: gate the form, then persist the account/profile
    /// pair. On failure the screen stays open and nothing is persisted.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let draft = match self.form.submit_gate() {
            Ok(draft) => draft,
            Err(notification) => {
                return SubmitOutcome {
                    notification,
                    action: ScreenAction::StayOpen,
                };
            }
        };

        match self
            .registration
            .register(&draft.signup, &draft.password)
            .await
        {
            Ok(_account) => SubmitOutcome {
                notification: Notification::information(
                    "SUCCESS",
                    "TRAVELER REGISTERED SUCCESSFULLY! PENDING FOR APPROAL",
                ),
                action: ScreenAction::CloseToParent,
            },
            Err(error) => {
                let message = match &error {
                    DomainError::Repository(inner) => inner.to_string(),
                    other => other.to_string(),
                };
                SubmitOutcome {
                    notification: Notification::error(
                        "ERROR",
                        format!("OPERATION FAILED:\n{message}"),
                    ),
                    action: ScreenAction::StayOpen,
                }
            }
        }
    }

    pub fn request_cancel(&mut self) -> CancelOutcome {
        self.form.request_cancel()
    }

    pub fn confirm_cancel(&mut self, choice: DialogChoice) -> CancelOutcome {
        self.form.confirm_cancel(choice)
    }
}
