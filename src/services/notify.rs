use async_trait::async_trait;

/// Outbound confirmation channel. Both built-in implementations only log
/// what would be sent; a real SMS or email provider slots in behind the
/// same trait.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, to: &str, body: &str) -> anyhow::Result<()>;
}

pub struct SmsNotifier;

#[async_trait]
impl Notifier for SmsNotifier {
    async fn send(&self, to: &str, body: &str) -> anyhow::Result<()> {
        tracing::info!(to = %to, body = %body, "SMS confirmation");
        Ok(())
    }
}

pub struct EmailNotifier;

#[async_trait]
impl Notifier for EmailNotifier {
    async fn send(&self, to: &str, body: &str) -> anyhow::Result<()> {
        tracing::info!(to = %to, body = %body, "email confirmation");
        Ok(())
    }
}
