pub mod redact;

pub use redact::Redacted;
