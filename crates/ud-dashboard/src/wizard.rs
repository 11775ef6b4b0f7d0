use crate::{Clock, DashboardError, DashboardResult};

use ud_core::{FormField, User, UserDraft, UserId, ValidationErrors, validation};

use log::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum WizardStep {
    #[default]
    Contact,
    Address,
    Review,
}

impl WizardStep {
    /// 1-based position shown as "Step n of 3".
    pub fn number(&self) -> u8 {
        match self {
            Self::Contact => 1,
            Self::Address => 2,
            Self::Review => 3,
        }
    }

    /// Fields validated before leaving this step.
    pub fn fields(&self) -> &'static [FormField] {
        match self {
            Self::Contact => &FormField::CONTACT,
            Self::Address => &FormField::ADDRESS,
            Self::Review => &[],
        }
    }

    fn next(self) -> Self {
        match self {
            Self::Contact => Self::Address,
            Self::Address | Self::Review => Self::Review,
        }
    }

    fn previous(self) -> Self {
        match self {
            Self::Contact | Self::Address => Self::Contact,
            Self::Review => Self::Address,
        }
    }
}

/// Three-step add-user form: contact, address, review.
#[derive(Debug, Clone, Default)]
pub struct AddUserWizard {
    step: WizardStep,
    draft: UserDraft,
    errors: ValidationErrors,
}

impl AddUserWizard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn draft(&self) -> &UserDraft {
        &self.draft
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Update one input. A field already showing an error is re-checked.
    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.draft.set_field(field, value);
        if self.errors.get(field).is_some() {
            match validation::validate_field(field, self.draft.field(field)) {
                Some(message) => self.errors.insert(field, message),
                None => self.errors.remove(field),
            }
        }
    }

    /// Advance if the current step's fields are valid. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if self.step == WizardStep::Review {
            return false;
        }
        self.errors = validation::validate_fields(&self.draft, self.step.fields());
        if !self.errors.is_empty() {
            debug!("Step {} blocked: {}", self.step.number(), self.errors);
            return false;
        }
        self.step = self.step.next();
        true
    }

    /// Go back one step without validating.
    pub fn back(&mut self) {
        self.step = self.step.previous();
    }

    /// All six draft values as shown on the review step.
    pub fn review(&self) -> Vec<(FormField, &str)> {
        FormField::ALL
            .into_iter()
            .map(|field| (field, self.draft.field(field)))
            .collect()
    }

    /// Build the new user from the completed draft.
    ///
    /// The id is the current epoch milliseconds, bumped past `last_local_id`
    /// so ids stay strictly increasing.
    pub fn submit(
        &mut self,
        clock: &dyn Clock,
        last_local_id: Option<UserId>,
    ) -> DashboardResult<User> {
        if self.step != WizardStep::Review {
            return Err(DashboardError::invalid_state(format!(
                "Cannot submit from step {}",
                self.step.number()
            )));
        }
        if let Err(e) = self.draft.validate(&FormField::ALL) {
            if let Some(errors) = e.validation_errors() {
                self.errors = errors.clone();
            }
            return Err(e.into());
        }

        let now = clock.now_millis();
        let id = match last_local_id {
            Some(last) if last >= now => last.checked_add(1).ok_or_else(|| {
                DashboardError::invalid_state(format!("No user id left after {last}"))
            })?,
            _ => now,
        };
        Ok(User::from_draft(id, &self.draft))
    }
}
