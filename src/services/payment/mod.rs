pub mod mock;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use base64::Engine;
use hmac::{Hmac, Mac};
use serde::{Deserialize, Serialize};
use sha1::Sha1;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentMethod {
    Card {
        number: String,
        expiry: String,
        cvv: String,
    },
    Upi {
        vpa: String,
    },
}

impl PaymentMethod {
    pub fn validate(&self) -> Result<(), PaymentError> {
        match self {
            PaymentMethod::Card {
                number,
                expiry,
                cvv,
            } => {
                let digits = number.replace(' ', "");
                if digits.len() < 13
                    || digits.len() > 16
                    || !digits.chars().all(|c| c.is_ascii_digit())
                {
                    return Err(PaymentError::InvalidDetails(
                        "Please enter a valid card number",
                    ));
                }
                if !expiry_is_valid(expiry) {
                    return Err(PaymentError::InvalidDetails(
                        "Please enter a valid expiry date",
                    ));
                }
                if cvv.len() < 3 || cvv.len() > 4 || !cvv.chars().all(|c| c.is_ascii_digit()) {
                    return Err(PaymentError::InvalidDetails("Please enter a valid CVV"));
                }
                Ok(())
            }
            PaymentMethod::Upi { vpa } => {
                if !vpa.contains('@') {
                    return Err(PaymentError::InvalidDetails("Please enter a valid UPI ID"));
                }
                Ok(())
            }
        }
    }
}

fn expiry_is_valid(expiry: &str) -> bool {
    let parts: Vec<&str> = expiry.split('/').collect();
    if parts.len() != 2 || parts[0].len() != 2 || parts[1].len() != 2 {
        return false;
    }
    if !parts[1].chars().all(|c| c.is_ascii_digit()) {
        return false;
    }
    matches!(parts[0].parse::<u32>(), Ok(month) if (1..=12).contains(&month))
}

/// Groups the digits of a card number into blocks of four as the user types.
/// Non-digits are dropped and anything past 16 digits is ignored.
pub fn format_card_number(input: &str) -> String {
    let digits: Vec<char> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(16)
        .collect();
    digits
        .chunks(4)
        .map(|chunk| chunk.iter().collect::<String>())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Inserts the `/` separator into an expiry as the user types, e.g. "1226"
/// becomes "12/26".
pub fn format_expiry(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(4)
        .collect();
    if digits.len() >= 2 {
        format!("{}/{}", &digits[..2], &digits[2..])
    } else {
        digits
    }
}

/// Proof of a completed charge. The signature binds the payment id to the
/// amount so a receipt cannot be replayed against a different booking total.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentReceipt {
    pub payment_id: String,
    pub amount: i64,
    pub signature: String,
}

pub fn sign_receipt(secret: &str, payment_id: &str, amount: i64) -> String {
    let mut mac = match Hmac::<Sha1>::new_from_slice(secret.as_bytes()) {
        Ok(m) => m,
        Err(_) => return String::new(),
    };
    mac.update(format!("{payment_id}|{amount}").as_bytes());
    base64::engine::general_purpose::STANDARD.encode(mac.finalize().into_bytes())
}

pub fn verify_receipt(secret: &str, receipt: &PaymentReceipt) -> bool {
    let expected = sign_receipt(secret, &receipt.payment_id, receipt.amount);
    !expected.is_empty() && expected == receipt.signature
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum PaymentError {
    #[error("{0}")]
    InvalidDetails(&'static str),
    #[error("a payment is already being processed")]
    AlreadyProcessing,
    #[error("payment failed: {0}")]
    Gateway(String),
}

/// A real processor integration implements this and replaces the mock
/// without touching the wizard or the persister.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn charge(&self, amount: i64, method: &PaymentMethod) -> anyhow::Result<PaymentReceipt>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentPhase {
    Idle,
    Processing,
    Success,
    Error,
}

/// Drives a single charge attempt against the gateway. At most one charge
/// runs at a time; a second `pay` while one is in flight is rejected rather
/// than double-charging. After a failure the step returns to a payable state
/// so the user can retry.
pub struct PaymentStep {
    gateway: Arc<dyn PaymentGateway>,
    in_flight: AtomicBool,
    phase: Mutex<PaymentPhase>,
}

impl PaymentStep {
    pub fn new(gateway: Arc<dyn PaymentGateway>) -> Self {
        Self {
            gateway,
            in_flight: AtomicBool::new(false),
            phase: Mutex::new(PaymentPhase::Idle),
        }
    }

    pub fn phase(&self) -> PaymentPhase {
        *self.phase.lock().unwrap()
    }

    pub async fn pay(
        &self,
        method: &PaymentMethod,
        amount: i64,
    ) -> Result<PaymentReceipt, PaymentError> {
        method.validate()?;

        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(PaymentError::AlreadyProcessing);
        }
        *self.phase.lock().unwrap() = PaymentPhase::Processing;

        let outcome = match self.gateway.charge(amount, method).await {
            Ok(receipt) => {
                *self.phase.lock().unwrap() = PaymentPhase::Success;
                Ok(receipt)
            }
            Err(e) => {
                tracing::warn!(error = %e, "payment charge failed");
                *self.phase.lock().unwrap() = PaymentPhase::Error;
                Err(PaymentError::Gateway(e.to_string()))
            }
        };

        self.in_flight.store(false, Ordering::SeqCst);
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::payment::mock::MockGateway;

    struct FailingGateway;

    #[async_trait]
    impl PaymentGateway for FailingGateway {
        async fn charge(
            &self,
            _amount: i64,
            _method: &PaymentMethod,
        ) -> anyhow::Result<PaymentReceipt> {
            anyhow::bail!("card declined")
        }
    }

    fn valid_card() -> PaymentMethod {
        PaymentMethod::Card {
            number: "4111 1111 1111 1111".to_string(),
            expiry: "12/26".to_string(),
            cvv: "123".to_string(),
        }
    }

    #[test]
    fn test_card_number_formatting() {
        assert_eq!(format_card_number("4111111111111111"), "4111 1111 1111 1111");
        assert_eq!(format_card_number("4111-1111 11"), "4111 1111 11");
        assert_eq!(format_card_number("41111111111111112222"), "4111 1111 1111 1111");
        assert_eq!(format_card_number(""), "");
    }

    #[test]
    fn test_expiry_formatting() {
        assert_eq!(format_expiry("1226"), "12/26");
        assert_eq!(format_expiry("12"), "12/");
        assert_eq!(format_expiry("1"), "1");
        assert_eq!(format_expiry("12/26"), "12/26");
        assert_eq!(format_expiry("122699"), "12/26");
    }

    #[test]
    fn test_card_validation() {
        assert!(valid_card().validate().is_ok());

        let short = PaymentMethod::Card {
            number: "4111 1111".to_string(),
            expiry: "12/26".to_string(),
            cvv: "123".to_string(),
        };
        assert_eq!(
            short.validate(),
            Err(PaymentError::InvalidDetails("Please enter a valid card number"))
        );

        let bad_expiry = PaymentMethod::Card {
            number: "4111 1111 1111 1111".to_string(),
            expiry: "13/26".to_string(),
            cvv: "123".to_string(),
        };
        assert_eq!(
            bad_expiry.validate(),
            Err(PaymentError::InvalidDetails("Please enter a valid expiry date"))
        );

        let bad_cvv = PaymentMethod::Card {
            number: "4111 1111 1111 1111".to_string(),
            expiry: "12/26".to_string(),
            cvv: "12".to_string(),
        };
        assert_eq!(
            bad_cvv.validate(),
            Err(PaymentError::InvalidDetails("Please enter a valid CVV"))
        );
    }

    #[test]
    fn test_upi_validation() {
        let good = PaymentMethod::Upi {
            vpa: "asha@okbank".to_string(),
        };
        assert!(good.validate().is_ok());

        let bad = PaymentMethod::Upi {
            vpa: "asha.okbank".to_string(),
        };
        assert_eq!(
            bad.validate(),
            Err(PaymentError::InvalidDetails("Please enter a valid UPI ID"))
        );
    }

    #[test]
    fn test_receipt_signature_round_trip() {
        let signature = sign_receipt("secret", "pi_123", 1499);
        let receipt = PaymentReceipt {
            payment_id: "pi_123".to_string(),
            amount: 1499,
            signature,
        };
        assert!(verify_receipt("secret", &receipt));

        let mut tampered = receipt.clone();
        tampered.amount = 1;
        assert!(!verify_receipt("secret", &tampered));

        assert!(!verify_receipt("other-secret", &receipt));
    }

    #[tokio::test]
    async fn test_pay_success_phases() {
        let step = PaymentStep::new(Arc::new(MockGateway::new(5, "secret".to_string())));
        assert_eq!(step.phase(), PaymentPhase::Idle);

        let receipt = step.pay(&valid_card(), 299).await.unwrap();
        assert_eq!(step.phase(), PaymentPhase::Success);
        assert!(receipt.payment_id.starts_with("pi_"));
        assert_eq!(receipt.amount, 299);
        assert!(verify_receipt("secret", &receipt));
    }

    #[tokio::test]
    async fn test_pay_failure_allows_retry() {
        let step = PaymentStep::new(Arc::new(FailingGateway));
        let err = step.pay(&valid_card(), 299).await.unwrap_err();
        assert!(matches!(err, PaymentError::Gateway(_)));
        assert_eq!(step.phase(), PaymentPhase::Error);

        // The in-flight guard is released, so a retry reaches the gateway
        let err = step.pay(&valid_card(), 299).await.unwrap_err();
        assert!(matches!(err, PaymentError::Gateway(_)));
    }

    #[tokio::test]
    async fn test_concurrent_pay_charges_once() {
        let step = Arc::new(PaymentStep::new(Arc::new(MockGateway::new(
            50,
            "secret".to_string(),
        ))));

        let (first, second) = tokio::join!(
            step.pay(&valid_card(), 299),
            step.pay(&valid_card(), 299)
        );

        let outcomes = [first, second];
        let successes = outcomes.iter().filter(|r| r.is_ok()).count();
        let rejected = outcomes
            .iter()
            .filter(|r| matches!(r, Err(PaymentError::AlreadyProcessing)))
            .count();
        assert_eq!(successes, 1);
        assert_eq!(rejected, 1);
        assert_eq!(step.phase(), PaymentPhase::Success);
    }

    #[tokio::test]
    async fn test_invalid_method_never_reaches_gateway() {
        let step = PaymentStep::new(Arc::new(FailingGateway));
        let bad = PaymentMethod::Upi {
            vpa: "no-at-sign".to_string(),
        };
        let err = step.pay(&bad, 299).await.unwrap_err();
        assert!(matches!(err, PaymentError::InvalidDetails(_)));
        assert_eq!(step.phase(), PaymentPhase::Idle);
    }
}
