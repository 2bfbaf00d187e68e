pub mod local;
pub mod remote;

use async_trait::async_trait;

use crate::models::{Booking, NewBooking};

/// Where confirmed bookings live. The remote implementation talks to the
/// REST backend; the local one writes to the on-disk store when no backend
/// is configured or reachable.
#[async_trait]
pub trait BookingRepository: Send + Sync {
    async fn create(&self, new: NewBooking) -> anyhow::Result<Booking>;
    async fn list_for_patient(&self, email: &str) -> anyhow::Result<Vec<Booking>>;
    async fn get(&self, id: &str) -> anyhow::Result<Option<Booking>>;
}
