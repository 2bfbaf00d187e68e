use std::fs;
use std::path::PathBuf;
use std::sync::Mutex;

use serde::{Deserialize, Serialize};

use crate::models::{Booking, User};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StoreData {
    user: Option<User>,
    #[serde(default)]
    bookings: Vec<Booking>,
}

/// Single-file JSON store backing offline mode: the signed-in user plus
/// every booking made while no backend was reachable. All reads come from
/// the in-memory copy; writes go through and are flushed to disk.
pub struct LocalStore {
    path: PathBuf,
    data: Mutex<StoreData>,
}

impl LocalStore {
    /// Loads the store from disk. A missing file starts empty; an unreadable
    /// or corrupt one is logged and treated as empty rather than blocking
    /// startup.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(data) => data,
                Err(e) => {
                    tracing::warn!(error = %e, path = %path.display(), "local store corrupt, starting empty");
                    StoreData::default()
                }
            },
            Err(_) => StoreData::default(),
        };
        Self {
            path,
            data: Mutex::new(data),
        }
    }

    pub fn user(&self) -> Option<User> {
        self.data.lock().unwrap().user.clone()
    }

    pub fn set_user(&self, user: Option<User>) {
        {
            let mut data = self.data.lock().unwrap();
            data.user = user;
        }
        self.persist();
    }

    pub fn bookings(&self) -> Vec<Booking> {
        self.data.lock().unwrap().bookings.clone()
    }

    pub fn push_booking(&self, booking: Booking) {
        {
            let mut data = self.data.lock().unwrap();
            data.bookings.push(booking);
        }
        self.persist();
    }

    fn persist(&self) {
        let serialized = {
            let data = self.data.lock().unwrap();
            serde_json::to_string_pretty(&*data)
        };
        let result = match serialized {
            Ok(json) => fs::write(&self.path, json),
            Err(e) => {
                tracing::warn!(error = %e, "failed to serialize local store");
                return;
            }
        };
        if let Err(e) = result {
            tracing::warn!(error = %e, path = %self.path.display(), "failed to write local store");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{BookingStatus, PaymentStatus, TestType};
    use chrono::{NaiveDate, Utc};

    fn temp_store_path() -> PathBuf {
        std::env::temp_dir().join(format!("labdesk-store-{}.json", uuid::Uuid::new_v4()))
    }

    fn sample_user() -> User {
        User {
            id: "user-1".to_string(),
            name: "Asha Verma".to_string(),
            email: "asha@example.com".to_string(),
            phone: "+919800000001".to_string(),
            created_at: Utc::now().naive_utc(),
        }
    }

    fn sample_booking(id: &str) -> Booking {
        Booking {
            id: id.to_string(),
            user_id: Some("user-1".to_string()),
            test_type: TestType::Individual,
            test_id: "test-1".to_string(),
            test_name: "Complete Blood Count (CBC)".to_string(),
            patient_name: "Asha Verma".to_string(),
            patient_email: "asha@example.com".to_string(),
            patient_phone: "+919800000001".to_string(),
            patient_address: "42 Lake View Road, Mumbai".to_string(),
            collection_date: NaiveDate::from_ymd_opt(2026, 9, 21).unwrap(),
            collection_time: "08:00 AM - 10:00 AM".to_string(),
            status: BookingStatus::Confirmed,
            price: 299,
            payment_id: Some("pi_1".to_string()),
            payment_status: PaymentStatus::Completed,
            created_at: Utc::now().naive_utc(),
            updated_at: Utc::now().naive_utc(),
        }
    }

    #[test]
    fn test_round_trip_across_reopen() {
        let path = temp_store_path();

        let store = LocalStore::open(&path);
        store.set_user(Some(sample_user()));
        store.push_booking(sample_booking("booking_1"));
        drop(store);

        let reopened = LocalStore::open(&path);
        assert_eq!(reopened.user().unwrap().email, "asha@example.com");
        let bookings = reopened.bookings();
        assert_eq!(bookings.len(), 1);
        assert_eq!(bookings[0].id, "booking_1");
        assert_eq!(bookings[0].status, BookingStatus::Confirmed);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_corrupt_file_starts_empty() {
        let path = temp_store_path();
        fs::write(&path, "{not json").unwrap();

        let store = LocalStore::open(&path);
        assert!(store.user().is_none());
        assert!(store.bookings().is_empty());

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_missing_file_starts_empty() {
        let store = LocalStore::open(temp_store_path());
        assert!(store.user().is_none());
        assert!(store.bookings().is_empty());
    }

    #[test]
    fn test_bookings_append_in_order() {
        let path = temp_store_path();
        let store = LocalStore::open(&path);

        store.push_booking(sample_booking("booking_1"));
        store.push_booking(sample_booking("booking_2"));

        let ids: Vec<String> = store.bookings().into_iter().map(|b| b.id).collect();
        assert_eq!(ids, vec!["booking_1", "booking_2"]);

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_logout_clears_user_but_keeps_bookings() {
        let path = temp_store_path();
        let store = LocalStore::open(&path);
        store.set_user(Some(sample_user()));
        store.push_booking(sample_booking("booking_1"));

        store.set_user(None);
        assert!(store.user().is_none());
        assert_eq!(store.bookings().len(), 1);

        let _ = fs::remove_file(&path);
    }
}
