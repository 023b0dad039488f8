use cardcheckout::application::checkout::{Checkout, PAYING_STATUS, VALIDATING_STATUS};
use cardcheckout::domain::credentials::{CredentialForm, ValidationResponse};
use cardcheckout::domain::payment::{PaymentForm, PaymentResult};
use cardcheckout::domain::ports::GatewayReply;
use cardcheckout::error::CheckoutError;
use cardcheckout::infrastructure::in_memory::{InMemoryDocument, InMemoryGateway, RecordingStatus};
use std::sync::Arc;
use url::Url;

struct Harness {
    checkout: Checkout,
    gateway: InMemoryGateway,
    document: InMemoryDocument,
    credential_status: RecordingStatus,
    payment_status: RecordingStatus,
}

fn harness() -> Harness {
    let gateway = InMemoryGateway::new();
    let document = InMemoryDocument::new();
    let credential_status = RecordingStatus::new();
    let payment_status = RecordingStatus::new();
    let checkout = Checkout::new(
        Arc::new(gateway.clone()),
        Box::new(document.clone()),
        Url::parse("https://www.paypal.com/sdk/js").unwrap(),
        Box::new(credential_status.clone()),
        Box::new(payment_status.clone()),
    );
    Harness {
        checkout,
        gateway,
        document,
        credential_status,
        payment_status,
    }
}

fn credentials(client_id: &str) -> CredentialForm {
    CredentialForm {
        client_id: client_id.into(),
        client_secret: "xyz".into(),
        environment: "sandbox".into(),
    }
}

fn accepted(token: &str) -> GatewayReply<ValidationResponse> {
    GatewayReply::Accepted(ValidationResponse {
        valid: true,
        credential_token: Some(token.into()),
        environment: Some("sandbox".into()),
        message: None,
    })
}

fn card_form() -> PaymentForm {
    PaymentForm {
        amount: "10.00".into(),
        cardholder_name: "A B".into(),
        card_number: "4111111111111111".into(),
        expiry: "12/30".into(),
        security_code: "123".into(),
        ..Default::default()
    }
}

#[tokio::test]
async fn test_validation_end_to_end() {
    let mut h = harness();
    h.gateway.push_validation(accepted("tok123")).await;

    h.checkout.submit_credentials(credentials("abc")).await.unwrap();

    let status = h.credential_status.current().unwrap();
    assert!(status.contains("sandbox"));
    assert!(status.contains("12h"));
    assert_eq!(h.credential_status.history()[0], VALIDATING_STATUS);

    assert_eq!(h.checkout.session().credential_token(), Some("tok123"));
    assert_eq!(h.checkout.session().client_id(), Some("abc"));

    let scripts = h.document.scripts();
    assert_eq!(scripts.len(), 1);
    assert!(scripts[0].src.as_str().contains("client-id=abc"));
    assert_eq!(h.document.injection_count(), 1);

    let sent = h.gateway.validation_requests().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].client_secret, "xyz");
    assert_eq!(sent[0].environment, "sandbox");
}

#[tokio::test]
async fn test_unrecognized_environment_shown_as_echoed() {
    let mut h = harness();
    h.gateway
        .push_validation(GatewayReply::Accepted(ValidationResponse {
            valid: true,
            credential_token: Some("tok123".into()),
            environment: Some("Production".into()),
            message: None,
        }))
        .await;

    h.checkout.submit_credentials(credentials("abc")).await.unwrap();

    let status = h.credential_status.current().unwrap();
    assert!(status.contains("production"));
    assert!(!status.contains("sandbox"));
}

#[tokio::test]
async fn test_payment_end_to_end() {
    let mut h = harness();
    h.gateway.push_validation(accepted("tok123")).await;
    h.gateway
        .push_payment(GatewayReply::Accepted(PaymentResult {
            status: "COMPLETED".into(),
            order_id: "ORD1".into(),
        }))
        .await;

    h.checkout.submit_credentials(credentials("abc")).await.unwrap();
    h.checkout.submit_payment(card_form()).await.unwrap();

    assert_eq!(
        h.payment_status.history(),
        vec![PAYING_STATUS, "Payment status: COMPLETED (Order ORD1)"]
    );
    let sent = h.gateway.payment_requests().await;
    assert_eq!(sent.len(), 1);
    assert_eq!(sent[0].credential_token, "tok123");
    assert_eq!(sent[0].billing_address, None);
    assert_eq!(
        serde_json::to_value(&sent[0]).unwrap()["billingAddress"],
        serde_json::Value::Null
    );
}

#[tokio::test]
async fn test_rejected_validation_leaves_no_trace() {
    let mut h = harness();
    h.gateway
        .push_validation(GatewayReply::Rejected {
            status: 401,
            message: Some("Client Authentication failed".into()),
        })
        .await;

    let err = h
        .checkout
        .submit_credentials(credentials("abc"))
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Validation(_)));
    assert!(!h.checkout.session().is_validated());
    assert_eq!(h.checkout.session().client_id(), None);
    assert!(h.document.scripts().is_empty());
    assert_eq!(h.document.injection_count(), 0);
    assert_eq!(
        h.credential_status.current().as_deref(),
        Some("Validation error: Client Authentication failed")
    );
}

#[tokio::test]
async fn test_payment_before_validation_makes_no_call() {
    let mut h = harness();

    let err = h.checkout.submit_payment(card_form()).await.unwrap_err();

    assert!(matches!(err, CheckoutError::Precondition(_)));
    assert_eq!(h.gateway.payment_call_count().await, 0);
    assert_eq!(
        h.payment_status.current().as_deref(),
        Some("Validate credentials first.")
    );
}

#[tokio::test]
async fn test_payment_after_failed_validation_still_gated() {
    let mut h = harness();
    h.gateway.push_validation_failure("connection reset").await;

    assert!(h.checkout.submit_credentials(credentials("abc")).await.is_err());
    let err = h.checkout.submit_payment(card_form()).await.unwrap_err();

    assert_eq!(err, CheckoutError::missing_credentials());
    assert_eq!(h.gateway.payment_call_count().await, 0);
}

#[tokio::test]
async fn test_revalidation_switches_sdk_client() {
    let mut h = harness();
    h.gateway.push_validation(accepted("tok-a")).await;
    h.gateway.push_validation(accepted("tok-b")).await;

    h.checkout.submit_credentials(credentials("first")).await.unwrap();
    h.checkout.submit_credentials(credentials("second")).await.unwrap();

    let scripts = h.document.scripts();
    assert_eq!(scripts.len(), 1);
    assert!(scripts[0].src.as_str().contains("client-id=second"));
    assert_eq!(h.checkout.session().credential_token(), Some("tok-b"));
    assert_eq!(h.checkout.session().client_id(), Some("second"));
    assert_eq!(h.checkout.scripts().current().map(|handle| handle.0), Some(2));
}

#[tokio::test]
async fn test_failed_revalidation_keeps_previous_credentials() {
    let mut h = harness();
    h.gateway.push_validation(accepted("tok-a")).await;
    h.gateway
        .push_validation(GatewayReply::Accepted(ValidationResponse {
            valid: false,
            ..Default::default()
        }))
        .await;

    h.checkout.submit_credentials(credentials("first")).await.unwrap();
    let err = h
        .checkout
        .submit_credentials(credentials("second"))
        .await
        .unwrap_err();

    assert_eq!(err, CheckoutError::Validation("Validation failed".into()));
    assert_eq!(h.checkout.session().credential_token(), Some("tok-a"));
    assert_eq!(h.checkout.session().client_id(), Some("first"));
    assert!(h.document.scripts()[0].src.as_str().contains("client-id=first"));
}

#[tokio::test]
async fn test_billing_and_currency_assembly() {
    let mut h = harness();
    h.gateway.push_validation(accepted("tok123")).await;
    h.gateway
        .push_payment(GatewayReply::Accepted(PaymentResult {
            status: "COMPLETED".into(),
            order_id: "ORD2".into(),
        }))
        .await;
    h.checkout.submit_credentials(credentials("abc")).await.unwrap();

    let form = PaymentForm {
        currency_code: "gbp".into(),
        postal_code: "SW1A 1AA".into(),
        country_code: "gb".into(),
        ..card_form()
    };
    h.checkout.submit_payment(form).await.unwrap();

    let sent = h.gateway.payment_requests().await;
    assert_eq!(sent[0].currency_code, "GBP");
    let billing = sent[0].billing_address.clone().unwrap();
    assert_eq!(billing.postal_code, "SW1A 1AA");
    assert_eq!(billing.country_code, "GB");
    assert_eq!(billing.address_line1, "");
    assert_eq!(billing.admin_area2, "");
}
