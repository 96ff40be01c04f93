//! Document export: hands a rendered invoice to an external collaborator.
//!
//! The collaborator rasterizes the rendered document and packages it as a
//! file (render target in, byte blob out); everything about how it does
//! that is its own business. This module owns what surrounds the call:
//! the options, the suggested filename, the one-at-a-time guard, and the
//! failure handling. Export runs strictly after checkout has committed,
//! so a failure here can never corrupt the persisted invoice or the
//! counter; it is logged and reported as retryable.

use std::sync::atomic::{AtomicBool, Ordering};

use thiserror::Error;

use uvpos_core::InvoiceNumber;

use crate::invoice::Invoice;

/// Raster scale applied when the document is converted to an image.
pub const RASTER_SCALE: f32 = 2.0;

/// Target page size for the packaged document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PageSize {
    #[default]
    A4,
}

/// Options handed to the export collaborator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExportOptions {
    pub scale: f32,
    pub page: PageSize,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            scale: RASTER_SCALE,
            page: PageSize::A4,
        }
    }
}

/// Filename offered for the downloaded document, e.g. `UV-Invoice-1001.pdf`.
pub fn suggested_filename(number: InvoiceNumber) -> String {
    format!("UV-Invoice-{number}.pdf")
}

/// Export failure. Retryable; committed state is never affected.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ExportError {
    /// Another export is still in flight.
    #[error("an export is already in progress")]
    Busy,

    /// The external collaborator failed.
    #[error("export failed: {0}")]
    Failed(String),
}

/// External rasterize-and-package collaborator.
pub trait DocumentExporter: Send + Sync {
    /// Convert the rendered invoice into an opaque document blob.
    fn export(&self, invoice: &Invoice, options: &ExportOptions) -> Result<Vec<u8>, ExportError>;
}

/// An exported document blob plus its suggested filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedDocument {
    pub filename: String,
    pub bytes: Vec<u8>,
}

/// Guards the export collaborator with a busy flag: one export at a time,
/// no queue.
pub struct ExportService<E> {
    exporter: E,
    in_flight: AtomicBool,
}

impl<E: DocumentExporter> ExportService<E> {
    pub fn new(exporter: E) -> Self {
        Self {
            exporter,
            in_flight: AtomicBool::new(false),
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Export the invoice with default options.
    ///
    /// Rejects with [`ExportError::Busy`] while a previous export is still
    /// running. Collaborator failures are logged and surfaced as retryable.
    pub fn export(&self, invoice: &Invoice) -> Result<ExportedDocument, ExportError> {
        if self.in_flight.swap(true, Ordering::SeqCst) {
            return Err(ExportError::Busy);
        }

        let result = self.exporter.export(invoice, &ExportOptions::default());
        self.in_flight.store(false, Ordering::SeqCst);

        match result {
            Ok(bytes) => Ok(ExportedDocument {
                filename: suggested_filename(invoice.invoice_number()),
                bytes,
            }),
            Err(err) => {
                tracing::error!(invoice = %invoice.display_number(), "invoice export failed: {err}");
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use uvpos_billing::{CartLine, Customer};
    use uvpos_core::ProductId;

    fn test_invoice() -> Invoice {
        let line = CartLine {
            product_id: ProductId::new(1),
            name: "Cold Pressed Coconut Oil".to_string(),
            price: 320,
            category: "Oil".to_string(),
            unit: "500ml".to_string(),
            image: None,
            qty: 2,
        };
        Invoice::issue(
            InvoiceNumber::new(1001),
            NaiveDate::from_ymd_opt(2026, 8, 5).unwrap(),
            Customer::walk_in(),
            vec![line],
        )
        .unwrap()
    }

    struct FixedExporter(Result<Vec<u8>, ExportError>);

    impl DocumentExporter for FixedExporter {
        fn export(&self, _: &Invoice, _: &ExportOptions) -> Result<Vec<u8>, ExportError> {
            self.0.clone()
        }
    }

    #[test]
    fn export_returns_blob_and_suggested_filename() {
        let service = ExportService::new(FixedExporter(Ok(vec![0x25, 0x50, 0x44, 0x46])));
        let doc = service.export(&test_invoice()).unwrap();
        assert_eq!(doc.filename, "UV-Invoice-1001.pdf");
        assert_eq!(doc.bytes.len(), 4);
    }

    #[test]
    fn collaborator_failure_is_surfaced_and_clears_the_guard() {
        let service = ExportService::new(FixedExporter(Err(ExportError::Failed(
            "canvas unavailable".to_string(),
        ))));

        let err = service.export(&test_invoice()).unwrap_err();
        match err {
            ExportError::Failed(_) => {}
            _ => panic!("Expected Failed error"),
        }

        // The busy flag resets so the user can try again.
        assert!(!service.is_busy());
        assert!(service.export(&test_invoice()).is_err());
    }

    #[test]
    fn concurrent_export_is_rejected_while_one_is_in_flight() {
        use std::sync::{Arc, Mutex, mpsc};

        struct BlockingExporter {
            release: Mutex<mpsc::Receiver<()>>,
        }

        impl DocumentExporter for BlockingExporter {
            fn export(&self, _: &Invoice, _: &ExportOptions) -> Result<Vec<u8>, ExportError> {
                self.release.lock().unwrap().recv().unwrap();
                Ok(Vec::new())
            }
        }

        let (release, blocked) = mpsc::channel();
        let service = Arc::new(ExportService::new(BlockingExporter {
            release: Mutex::new(blocked),
        }));

        let worker = {
            let service = Arc::clone(&service);
            let invoice = test_invoice();
            std::thread::spawn(move || service.export(&invoice))
        };

        for _ in 0..5_000 {
            if service.is_busy() {
                break;
            }
            std::thread::sleep(std::time::Duration::from_millis(1));
        }
        assert!(service.is_busy(), "first export never started");

        // Second request while the first is still running.
        assert_eq!(service.export(&test_invoice()).unwrap_err(), ExportError::Busy);

        release.send(()).unwrap();
        assert!(worker.join().unwrap().is_ok());
        assert!(!service.is_busy());
    }

    #[test]
    fn default_options_match_the_document_pipeline() {
        let options = ExportOptions::default();
        assert_eq!(options.scale, 2.0);
        assert_eq!(options.page, PageSize::A4);
    }
}
