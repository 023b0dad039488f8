//! Application layer containing the checkout workflow orchestration.
//!
//! `Checkout` is the entry point: it owns the session and the status regions,
//! and drives the `CredentialValidator`, the `PaymentSubmitter` and the
//! `SdkScriptLoader` through the domain ports.

pub mod checkout;
pub mod script_loader;
pub mod submitter;
pub mod validator;
