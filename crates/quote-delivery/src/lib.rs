//! Actions a user can take on a finished quote besides reading it.
//!
//! Each action is a capability trait so the presentation layer can offer it
//! without knowing whether a working backend exists. The implementations
//! shipped here report `DeliveryError::NotYetAvailable` instead of silently
//! doing nothing.

use core_types::Currency;
use pricing::PricingResult;
use serde::Serialize;

pub mod error;

pub use error::DeliveryError;

/// A rendered quote document, ready to be written to disk or attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedDocument {
    pub file_name: String,
    pub content_type: &'static str,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

/// Turns a quote into a downloadable document.
pub trait DocumentExporter {
    fn export(
        &self,
        quote: &PricingResult,
        currency: Currency,
    ) -> Result<ExportedDocument, DeliveryError>;
}

/// Sends a quote to someone by email.
pub trait QuoteMailer {
    fn send(
        &self,
        quote: &PricingResult,
        currency: Currency,
        recipient: &str,
    ) -> Result<(), DeliveryError>;
}

/// PDF export of a quote. Not built yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfExporter;

impl PdfExporter {
    pub const FEATURE: &'static str = "PDF export";
}

impl DocumentExporter for PdfExporter {
    fn export(
        &self,
        quote: &PricingResult,
        currency: Currency,
    ) -> Result<ExportedDocument, DeliveryError> {
        tracing::warn!(
            file_name = %quote_file_name(quote, "pdf"),
            currency = currency.code(),
            "PDF export requested but not yet available."
        );
        Err(DeliveryError::NotYetAvailable(Self::FEATURE))
    }
}

/// Email delivery of a quote. Not built yet.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailQuoteMailer;

impl EmailQuoteMailer {
    pub const FEATURE: &'static str = "Email delivery";
}

impl QuoteMailer for EmailQuoteMailer {
    fn send(
        &self,
        quote: &PricingResult,
        currency: Currency,
        recipient: &str,
    ) -> Result<(), DeliveryError> {
        validate_recipient(recipient)?;
        tracing::warn!(
            trade_term = %quote.trade_term,
            currency = currency.code(),
            recipient,
            "Email delivery requested but not yet available."
        );
        Err(DeliveryError::NotYetAvailable(Self::FEATURE))
    }
}

/// The file name a quote document is saved under, e.g. `quote-CIF.pdf`.
pub fn quote_file_name(quote: &PricingResult, extension: &str) -> String {
    format!("quote-{}.{}", quote.trade_term, extension)
}

/// A cheap shape check: one `@`, a non-empty local part and a dotted domain.
pub fn validate_recipient(recipient: &str) -> Result<(), DeliveryError> {
    let invalid = || DeliveryError::InvalidRecipient(recipient.to_string());
    let (local, domain) = recipient.split_once('@').ok_or_else(invalid)?;

    let domain_ok = !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.');
    if local.is_empty() || !domain_ok || recipient.chars().any(char::is_whitespace) {
        return Err(invalid());
    }
    Ok(())
}
