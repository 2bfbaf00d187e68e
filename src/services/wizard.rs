use chrono::{NaiveDate, Utc};

use crate::models::{BookingDraft, CatalogItem, TimeSlot, User};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    PatientInfo,
    Schedule,
    Review,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum WizardError {
    #[error("please fill in all patient details")]
    MissingPatientInfo,
    #[error("please choose a collection date and time slot")]
    MissingSchedule,
    #[error("collection date cannot be in the past")]
    DateInPast,
    #[error("booking details are only final on the review step")]
    NotAtReview,
}

/// Three-step booking form: patient info, schedule, review. Transitions are
/// strictly linear and reversible, and going back never loses entered
/// values. The selected item's price is captured at construction so later
/// catalog changes cannot leak into the draft.
pub struct BookingWizard {
    item: CatalogItem,
    step: WizardStep,
    user_id: Option<String>,
    pub patient_name: String,
    pub patient_email: String,
    pub patient_phone: String,
    pub patient_address: String,
    pub collection_date: Option<NaiveDate>,
    pub collection_time: Option<TimeSlot>,
}

impl BookingWizard {
    /// A signed-in user prefills the contact fields; the address is always
    /// entered fresh per booking.
    pub fn new(item: CatalogItem, user: Option<&User>) -> Self {
        let mut wizard = Self {
            item,
            step: WizardStep::PatientInfo,
            user_id: None,
            patient_name: String::new(),
            patient_email: String::new(),
            patient_phone: String::new(),
            patient_address: String::new(),
            collection_date: None,
            collection_time: None,
        };
        if let Some(user) = user {
            wizard.user_id = Some(user.id.clone());
            wizard.patient_name = user.name.clone();
            wizard.patient_email = user.email.clone();
            wizard.patient_phone = user.phone.clone();
        }
        wizard
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    /// Advances one step if the current step's guard passes.
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        match self.step {
            WizardStep::PatientInfo => {
                let fields = [
                    &self.patient_name,
                    &self.patient_email,
                    &self.patient_phone,
                    &self.patient_address,
                ];
                if fields.iter().any(|f| f.trim().is_empty()) {
                    return Err(WizardError::MissingPatientInfo);
                }
                self.step = WizardStep::Schedule;
            }
            WizardStep::Schedule => {
                let date = match (self.collection_date, self.collection_time) {
                    (Some(date), Some(_)) => date,
                    _ => return Err(WizardError::MissingSchedule),
                };
                if date < Utc::now().date_naive() {
                    return Err(WizardError::DateInPast);
                }
                self.step = WizardStep::Review;
            }
            WizardStep::Review => {}
        }
        Ok(self.step)
    }

    /// Steps back one screen. `None` means the wizard was already on the
    /// first step and should close instead.
    pub fn previous(&mut self) -> Option<WizardStep> {
        match self.step {
            WizardStep::PatientInfo => None,
            WizardStep::Schedule => {
                self.step = WizardStep::PatientInfo;
                Some(self.step)
            }
            WizardStep::Review => {
                self.step = WizardStep::Schedule;
                Some(self.step)
            }
        }
    }

    /// The immutable snapshot handed to the payment step. Only available at
    /// review, after every guard has passed.
    pub fn draft(&self) -> Result<BookingDraft, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::NotAtReview);
        }
        let (date, slot) = match (self.collection_date, self.collection_time) {
            (Some(date), Some(slot)) => (date, slot),
            _ => return Err(WizardError::MissingSchedule),
        };

        Ok(BookingDraft {
            user_id: self.user_id.clone(),
            test_type: self.item.test_type(),
            test_id: self.item.id().to_string(),
            test_name: self.item.name().to_string(),
            price: self.item.price(),
            patient_name: self.patient_name.trim().to_string(),
            patient_email: self.patient_email.trim().to_string(),
            patient_phone: self.patient_phone.trim().to_string(),
            patient_address: self.patient_address.trim().to_string(),
            collection_date: date,
            collection_time: slot,
        })
    }

    /// Restores the blank form (with prefill reapplied), as when the modal
    /// closes and reopens.
    pub fn reset(&mut self, user: Option<&User>) {
        *self = BookingWizard::new(self.item.clone(), user);
    }
}
