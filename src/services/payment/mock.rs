use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use super::{sign_receipt, PaymentGateway, PaymentMethod, PaymentReceipt};

/// Simulated gateway for development and demos. Every charge succeeds after
/// a fixed delay and comes back with a properly signed receipt.
pub struct MockGateway {
    delay_ms: u64,
    secret: String,
}

impl MockGateway {
    pub fn new(delay_ms: u64, secret: String) -> Self {
        Self { delay_ms, secret }
    }
}

#[async_trait]
impl PaymentGateway for MockGateway {
    async fn charge(&self, amount: i64, _method: &PaymentMethod) -> anyhow::Result<PaymentReceipt> {
        tokio::time::sleep(Duration::from_millis(self.delay_ms)).await;

        let suffix: String = uuid::Uuid::new_v4().simple().to_string();
        let payment_id = format!(
            "pi_{}_{}",
            Utc::now().timestamp_millis(),
            &suffix[..9]
        );
        let signature = sign_receipt(&self.secret, &payment_id, amount);

        tracing::info!(payment_id = %payment_id, amount, "mock charge approved");
        Ok(PaymentReceipt {
            payment_id,
            amount,
            signature,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::payment::verify_receipt;

    fn upi() -> PaymentMethod {
        PaymentMethod::Upi {
            vpa: "asha@okbank".to_string(),
        }
    }

    #[tokio::test]
    async fn test_charge_produces_signed_receipt() {
        let gateway = MockGateway::new(1, "secret".to_string());
        let receipt = gateway.charge(1499, &upi()).await.unwrap();

        assert!(receipt.payment_id.starts_with("pi_"));
        assert_eq!(receipt.amount, 1499);
        assert!(verify_receipt("secret", &receipt));
    }

    #[tokio::test]
    async fn test_charge_ids_are_unique() {
        let gateway = MockGateway::new(1, "secret".to_string());
        let first = gateway.charge(100, &upi()).await.unwrap();
        let second = gateway.charge(100, &upi()).await.unwrap();
        assert_ne!(first.payment_id, second.payment_id);
    }
}
