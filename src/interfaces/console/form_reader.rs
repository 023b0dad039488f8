use crate::domain::payment::PaymentForm;
use std::io::Read;

/// Reads a payment form from a JSON document.
///
/// Keys are the camelCase form field names; missing keys read as empty fields
/// and unknown keys are ignored.
pub struct PaymentFormReader<R: Read> {
    source: R,
}

impl<R: Read> PaymentFormReader<R> {
    /// Creates a reader over `source`.
    pub fn new(source: R) -> Self {
        Self { source }
    }

    /// Parses the whole source as a single form.
    pub fn read(self) -> serde_json::Result<PaymentForm> {
        serde_json::from_reader(self.source)
    }
}
