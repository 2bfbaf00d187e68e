use std::sync::Arc;

use crate::config::AppConfig;
use crate::models::{Booking, CatalogItem};
use crate::services::catalog::CatalogProvider;
use crate::services::local_store::LocalStore;
use crate::services::notify::{EmailNotifier, SmsNotifier};
use crate::services::payment::mock::MockGateway;
use crate::services::payment::{PaymentGateway, PaymentStep};
use crate::services::persister::BookingPersister;
use crate::services::repository::local::LocalRepository;
use crate::services::repository::remote::RemoteRepository;
use crate::services::repository::BookingRepository;
use crate::services::session::{AdminGate, SessionContext, SessionError};
use crate::services::wizard::BookingWizard;

/// Everything the booking flow needs, wired once from configuration. With a
/// backend URL configured the primary repository is remote and the local
/// store is the fallback; without one, bookings only ever touch the local
/// store.
pub struct BookingFunnel {
    catalog: CatalogProvider,
    session: SessionContext,
    admin: AdminGate,
    gateway: Arc<dyn PaymentGateway>,
    repository: Arc<dyn BookingRepository>,
    fallback: Arc<dyn BookingRepository>,
    persister: BookingPersister,
}

impl BookingFunnel {
    pub fn from_config(config: &AppConfig) -> Self {
        let store = Arc::new(LocalStore::open(config.local_store_path.clone()));
        let local: Arc<dyn BookingRepository> = Arc::new(LocalRepository::new(store.clone()));

        let repository: Arc<dyn BookingRepository> = if config.api_base_url.trim().is_empty() {
            tracing::info!("no booking API configured, storing bookings locally");
            local.clone()
        } else {
            tracing::info!(url = %config.api_base_url, "using remote booking API");
            Arc::new(RemoteRepository::new(config.api_base_url.clone()))
        };

        let gateway: Arc<dyn PaymentGateway> = Arc::new(MockGateway::new(
            config.payment_delay_ms,
            config.payment_secret.clone(),
        ));

        let persister = BookingPersister::new(
            repository.clone(),
            local.clone(),
            Arc::new(SmsNotifier),
            Arc::new(EmailNotifier),
            config.payment_secret.clone(),
        );

        Self {
            catalog: CatalogProvider::new(Some(config.api_base_url.clone())),
            session: SessionContext::new(store),
            admin: AdminGate::new(config.admin_email.clone(), config.admin_password.clone()),
            gateway,
            repository,
            fallback: local,
            persister,
        }
    }

    pub fn catalog(&self) -> &CatalogProvider {
        &self.catalog
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn admin(&self) -> &AdminGate {
        &self.admin
    }

    pub fn persister(&self) -> &BookingPersister {
        &self.persister
    }

    /// Opens the booking form for one catalog item, prefilled from the
    /// current session if someone is signed in.
    pub fn wizard(&self, item: CatalogItem) -> BookingWizard {
        BookingWizard::new(item, self.session.current_user().as_ref())
    }

    /// One step per checkout, so the in-flight guard is scoped to a single
    /// wizard instance.
    pub fn payment_step(&self) -> PaymentStep {
        PaymentStep::new(self.gateway.clone())
    }

    /// Bookings belonging to the signed-in patient, for the dashboard.
    pub async fn dashboard_bookings(&self) -> Result<Vec<Booking>, SessionError> {
        let user = self.session.require_user()?;
        match self.repository.list_for_patient(&user.email).await {
            Ok(bookings) => Ok(bookings),
            Err(e) => {
                tracing::warn!(error = %e, "booking list failed, reading local store");
                Ok(self
                    .fallback
                    .list_for_patient(&user.email)
                    .await
                    .unwrap_or_default())
            }
        }
    }
}
