use anyhow::Context;
use async_trait::async_trait;

use super::BookingRepository;
use crate::models::{Booking, NewBooking};

pub struct RemoteRepository {
    base_url: String,
    client: reqwest::Client,
}

impl RemoteRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl BookingRepository for RemoteRepository {
    async fn create(&self, new: NewBooking) -> anyhow::Result<Booking> {
        let url = format!("{}/api/bookings", self.base_url);
        let booking = self
            .client
            .post(&url)
            .json(&new)
            .send()
            .await
            .context("failed to reach booking API")?
            .error_for_status()
            .context("booking API rejected the booking")?
            .json()
            .await
            .context("invalid booking API response")?;
        Ok(booking)
    }

    async fn list_for_patient(&self, email: &str) -> anyhow::Result<Vec<Booking>> {
        let url = format!("{}/api/bookings", self.base_url);
        let bookings: Vec<Booking> = self
            .client
            .get(&url)
            .send()
            .await
            .context("failed to reach booking API")?
            .error_for_status()
            .context("booking API returned error")?
            .json()
            .await
            .context("invalid booking API response")?;

        Ok(bookings
            .into_iter()
            .filter(|b| b.patient_email == email)
            .collect())
    }

    async fn get(&self, id: &str) -> anyhow::Result<Option<Booking>> {
        let url = format!("{}/api/bookings/{}", self.base_url, id);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .context("failed to reach booking API")?;

        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }

        let booking = response
            .error_for_status()
            .context("booking API returned error")?
            .json()
            .await
            .context("invalid booking API response")?;
        Ok(Some(booking))
    }
}
