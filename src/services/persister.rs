use std::sync::Arc;

use crate::models::{Booking, BookingDraft, BookingStatus, NewBooking, PaymentStatus};
use crate::services::notify::Notifier;
use crate::services::payment::{verify_receipt, PaymentReceipt};
use crate::services::repository::BookingRepository;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PersistError {
    #[error("payment receipt failed verification")]
    BadReceipt,
    #[error("could not save the booking")]
    StorageFailed,
}

/// Turns a paid draft into a stored, confirmed booking. The receipt is
/// verified before anything is written; if the primary repository fails the
/// booking goes to the fallback instead, so a successful payment is never
/// silently lost. Confirmations go out after the booking is saved and are
/// best-effort.
pub struct BookingPersister {
    repository: Arc<dyn BookingRepository>,
    fallback: Arc<dyn BookingRepository>,
    sms: Arc<dyn Notifier>,
    email: Arc<dyn Notifier>,
    payment_secret: String,
}

impl BookingPersister {
    pub fn new(
        repository: Arc<dyn BookingRepository>,
        fallback: Arc<dyn BookingRepository>,
        sms: Arc<dyn Notifier>,
        email: Arc<dyn Notifier>,
        payment_secret: String,
    ) -> Self {
        Self {
            repository,
            fallback,
            sms,
            email,
            payment_secret,
        }
    }

    pub async fn create(
        &self,
        draft: &BookingDraft,
        receipt: &PaymentReceipt,
    ) -> Result<Booking, PersistError> {
        if !verify_receipt(&self.payment_secret, receipt) {
            tracing::warn!(payment_id = %receipt.payment_id, "rejecting booking with bad receipt");
            return Err(PersistError::BadReceipt);
        }

        let new = NewBooking {
            user_id: draft.user_id.clone(),
            test_type: draft.test_type,
            test_id: draft.test_id.clone(),
            test_name: draft.test_name.clone(),
            price: draft.price,
            patient_name: draft.patient_name.clone(),
            patient_email: draft.patient_email.clone(),
            patient_phone: draft.patient_phone.clone(),
            patient_address: draft.patient_address.clone(),
            collection_date: draft.collection_date,
            collection_time: draft.collection_time.as_str().to_string(),
            status: BookingStatus::Confirmed,
            payment_id: Some(receipt.payment_id.clone()),
            payment_status: PaymentStatus::Completed,
        };

        let booking = match self.repository.create(new.clone()).await {
            Ok(booking) => booking,
            Err(e) => {
                tracing::warn!(error = %e, "primary booking storage failed, using fallback");
                match self.fallback.create(new).await {
                    Ok(booking) => booking,
                    Err(e) => {
                        tracing::error!(error = %e, "fallback booking storage failed");
                        return Err(PersistError::StorageFailed);
                    }
                }
            }
        };

        self.notify(&booking).await;
        Ok(booking)
    }

    async fn notify(&self, booking: &Booking) {
        if let Err(e) = self
            .sms
            .send(&booking.patient_phone, &confirmation_sms(booking))
            .await
        {
            tracing::warn!(error = %e, booking_id = %booking.id, "SMS confirmation failed");
        }
        if let Err(e) = self
            .email
            .send(&booking.patient_email, &confirmation_email(booking))
            .await
        {
            tracing::warn!(error = %e, booking_id = %booking.id, "email confirmation failed");
        }
    }
}

fn confirmation_sms(booking: &Booking) -> String {
    format!(
        "Dear {}, your test booking for {} has been confirmed for {} at {}. Booking ID: {}. Thank you for choosing The LABs!",
        booking.patient_name,
        booking.test_name,
        booking.collection_date,
        booking.collection_time,
        booking.id
    )
}

fn confirmation_email(booking: &Booking) -> String {
    format!(
        "Test Booking Confirmation - {}\n\n\
         Dear {},\n\n\
         Your test booking has been confirmed!\n\n\
         Booking Details:\n\
         - Test: {}\n\
         - Date: {}\n\
         - Time: {}\n\
         - Amount: \u{20b9}{}\n\
         - Booking ID: {}\n\n\
         Our team will visit your location for sample collection.\n\n\
         Thank you for choosing The LABs!\n\n\
         Best regards,\n\
         The LABs Team",
        booking.test_name,
        booking.patient_name,
        booking.test_name,
        booking.collection_date,
        booking.collection_time,
        booking.price,
        booking.id
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::TimeSlot;
    use crate::services::local_store::LocalStore;
    use crate::services::payment::sign_receipt;
    use crate::services::repository::local::LocalRepository;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::Mutex;

    struct MockNotifier {
        sent: Arc<Mutex<Vec<(String, String)>>>,
    }

    #[async_trait]
    impl Notifier for MockNotifier {
        async fn send(&self, to: &str, body: &str) -> anyhow::Result<()> {
            self.sent
                .lock()
                .unwrap()
                .push((to.to_string(), body.to_string()));
            Ok(())
        }
    }

    struct FailingNotifier;

    #[async_trait]
    impl Notifier for FailingNotifier {
        async fn send(&self, _to: &str, _body: &str) -> anyhow::Result<()> {
            anyhow::bail!("provider down")
        }
    }

    struct FailingRepository;

    #[async_trait]
    impl BookingRepository for FailingRepository {
        async fn create(&self, _new: NewBooking) -> anyhow::Result<Booking> {
            anyhow::bail!("backend unreachable")
        }

        async fn list_for_patient(&self, _email: &str) -> anyhow::Result<Vec<Booking>> {
            anyhow::bail!("backend unreachable")
        }

        async fn get(&self, _id: &str) -> anyhow::Result<Option<Booking>> {
            anyhow::bail!("backend unreachable")
        }
    }

    fn local_repo() -> Arc<dyn BookingRepository> {
        let path =
            std::env::temp_dir().join(format!("labdesk-persist-{}.json", uuid::Uuid::new_v4()));
        Arc::new(LocalRepository::new(Arc::new(LocalStore::open(path))))
    }

    fn sample_draft() -> BookingDraft {
        BookingDraft {
            user_id: None,
            test_type: crate::models::TestType::Individual,
            test_id: "test-1".to_string(),
            test_name: "Complete Blood Count (CBC)".to_string(),
            price: 299,
            patient_name: "Asha Verma".to_string(),
            patient_email: "asha@example.com".to_string(),
            patient_phone: "+919800000001".to_string(),
            patient_address: "42 Lake View Road, Mumbai".to_string(),
            collection_date: NaiveDate::from_ymd_opt(2026, 9, 21).unwrap(),
            collection_time: TimeSlot::EightAm,
        }
    }

    fn good_receipt(secret: &str, amount: i64) -> PaymentReceipt {
        PaymentReceipt {
            payment_id: "pi_test_1".to_string(),
            amount,
            signature: sign_receipt(secret, "pi_test_1", amount),
        }
    }

    fn capturing_notifier() -> (Arc<dyn Notifier>, Arc<Mutex<Vec<(String, String)>>>) {
        let sent = Arc::new(Mutex::new(Vec::new()));
        let notifier = Arc::new(MockNotifier { sent: sent.clone() });
        (notifier, sent)
    }

    #[tokio::test]
    async fn test_create_confirms_and_notifies() {
        let (sms, sms_sent) = capturing_notifier();
        let (email, email_sent) = capturing_notifier();
        let persister = BookingPersister::new(
            local_repo(),
            local_repo(),
            sms,
            email,
            "secret".to_string(),
        );

        let booking = persister
            .create(&sample_draft(), &good_receipt("secret", 299))
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(booking.payment_status, PaymentStatus::Completed);
        assert_eq!(booking.payment_id.as_deref(), Some("pi_test_1"));
        assert_eq!(booking.collection_time, "08:00 AM - 10:00 AM");
        assert_eq!(booking.price, 299);

        let sms_sent = sms_sent.lock().unwrap();
        assert_eq!(sms_sent.len(), 1);
        assert_eq!(sms_sent[0].0, "+919800000001");
        assert!(sms_sent[0].1.contains("your test booking for Complete Blood Count (CBC)"));
        assert!(sms_sent[0].1.contains(&format!("Booking ID: {}", booking.id)));

        let email_sent = email_sent.lock().unwrap();
        assert_eq!(email_sent.len(), 1);
        assert_eq!(email_sent[0].0, "asha@example.com");
        assert!(email_sent[0]
            .1
            .starts_with("Test Booking Confirmation - Complete Blood Count (CBC)"));
        assert!(email_sent[0].1.contains("- Amount: \u{20b9}299"));
        assert!(email_sent[0].1.contains("The LABs Team"));
    }

    #[tokio::test]
    async fn test_bad_receipt_rejected_before_storage() {
        let (sms, sms_sent) = capturing_notifier();
        let (email, _) = capturing_notifier();
        let persister = BookingPersister::new(
            Arc::new(FailingRepository),
            Arc::new(FailingRepository),
            sms,
            email,
            "secret".to_string(),
        );

        let mut receipt = good_receipt("secret", 299);
        receipt.amount = 1;
        let err = persister.create(&sample_draft(), &receipt).await.unwrap_err();

        // Verification runs first, so the failing repositories were never hit
        assert_eq!(err, PersistError::BadReceipt);
        assert!(sms_sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_falls_back_when_primary_fails() {
        let (sms, _) = capturing_notifier();
        let (email, _) = capturing_notifier();
        let persister = BookingPersister::new(
            Arc::new(FailingRepository),
            local_repo(),
            sms,
            email,
            "secret".to_string(),
        );

        let booking = persister
            .create(&sample_draft(), &good_receipt("secret", 299))
            .await
            .unwrap();

        assert!(booking.id.starts_with("booking_"));
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_storage_failed_when_both_fail() {
        let (sms, sms_sent) = capturing_notifier();
        let (email, _) = capturing_notifier();
        let persister = BookingPersister::new(
            Arc::new(FailingRepository),
            Arc::new(FailingRepository),
            sms,
            email,
            "secret".to_string(),
        );

        let err = persister
            .create(&sample_draft(), &good_receipt("secret", 299))
            .await
            .unwrap_err();

        assert_eq!(err, PersistError::StorageFailed);
        assert!(sms_sent.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_notifier_failure_does_not_fail_booking() {
        let persister = BookingPersister::new(
            local_repo(),
            local_repo(),
            Arc::new(FailingNotifier),
            Arc::new(FailingNotifier),
            "secret".to_string(),
        );

        let booking = persister
            .create(&sample_draft(), &good_receipt("secret", 299))
            .await
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
    }
}
