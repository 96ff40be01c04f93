//! Fixed seller identity printed on invoice documents.
//!
//! Data contract only; renderers decide layout.

/// The business block a renderer places in the document header and footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessIdentity {
    pub name: &'static str,
    pub tagline: &'static str,
    pub address_lines: [&'static str; 3],
    pub gstin: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub footer: &'static str,
}

pub const BUSINESS: BusinessIdentity = BusinessIdentity {
    name: "Ungal Vivasaayi",
    tagline: "Premium Agricultural Works",
    address_lines: [
        "Ungal Vivasaayi HQ",
        "12/48 Green Valley, Pollachi",
        "Tamil Nadu — 642001",
    ],
    gstin: "33AABCV1234F1Z5",
    email: "support@ungalvivasaayi.com",
    phone: "+91 98765 43210",
    footer: "Tradition Meets Excellence",
};
