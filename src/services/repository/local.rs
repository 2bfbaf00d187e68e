use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use super::BookingRepository;
use crate::models::{Booking, NewBooking};
use crate::services::local_store::LocalStore;

pub struct LocalRepository {
    store: Arc<LocalStore>,
}

impl LocalRepository {
    pub fn new(store: Arc<LocalStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl BookingRepository for LocalRepository {
    async fn create(&self, new: NewBooking) -> anyhow::Result<Booking> {
        let now = Utc::now().naive_utc();
        let booking = Booking {
            id: format!("booking_{}", Utc::now().timestamp_millis()),
            user_id: new.user_id,
            test_type: new.test_type,
            test_id: new.test_id,
            test_name: new.test_name,
            price: new.price,
            patient_name: new.patient_name,
            patient_email: new.patient_email,
            patient_phone: new.patient_phone,
            patient_address: new.patient_address,
            collection_date: new.collection_date,
            collection_time: new.collection_time,
            status: new.status,
            payment_id: new.payment_id,
            payment_status: new.payment_status,
            created_at: now,
            updated_at: now,
        };
        self.store.push_booking(booking.clone());
        Ok(booking)
    }

    async fn list_for_patient(&self, email: &str) -> anyhow::Result<Vec<Booking>> {
        Ok(self
            .store
            .bookings()
            .into_iter()
            .filter(|b| b.patient_email == email)
            .collect())
    }

    async fn get(&self, id: &str) -> anyhow::Result<Option<Booking>> {
        Ok(self.store.bookings().into_iter().find(|b| b.id == id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, PaymentStatus, TestType};
    use chrono::NaiveDate;

    fn temp_store() -> Arc<LocalStore> {
        let path =
            std::env::temp_dir().join(format!("labdesk-repo-{}.json", uuid::Uuid::new_v4()));
        Arc::new(LocalStore::open(path))
    }

    fn new_booking(email: &str) -> NewBooking {
        NewBooking {
            user_id: None,
            test_type: TestType::Package,
            test_id: "pkg-1".to_string(),
            test_name: "Complete Health Checkup".to_string(),
            price: 1499,
            patient_name: "Asha Verma".to_string(),
            patient_email: email.to_string(),
            patient_phone: "+919800000001".to_string(),
            patient_address: "42 Lake View Road, Mumbai".to_string(),
            collection_date: NaiveDate::from_ymd_opt(2026, 9, 21).unwrap(),
            collection_time: "06:00 AM - 08:00 AM".to_string(),
            status: BookingStatus::Confirmed,
            payment_id: Some("pi_1".to_string()),
            payment_status: PaymentStatus::Completed,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_local_id() {
        let repo = LocalRepository::new(temp_store());
        let booking = repo.create(new_booking("asha@example.com")).await.unwrap();

        assert!(booking.id.starts_with("booking_"));
        assert_eq!(booking.status, BookingStatus::Confirmed);
        assert_eq!(repo.get(&booking.id).await.unwrap().unwrap().price, 1499);
    }

    #[tokio::test]
    async fn test_list_filters_by_patient_email() {
        let repo = LocalRepository::new(temp_store());
        repo.create(new_booking("asha@example.com")).await.unwrap();
        repo.create(new_booking("ravi@example.com")).await.unwrap();

        let mine = repo.list_for_patient("asha@example.com").await.unwrap();
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].patient_email, "asha@example.com");

        assert!(repo
            .list_for_patient("nobody@example.com")
            .await
            .unwrap()
            .is_empty());
    }
}
