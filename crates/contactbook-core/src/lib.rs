//! Contactbook Core - structured field parsing and validation
//!
//! Turns free-form text typed into a contact book into validated domain
//! values. Multi-valued fields carry optional bracketed labels:
//!
//! ```text
//! Blk 30 Geylang St (Home) Blk 11 AMK (Work)
//! ```
//!
//! # Architecture
//!
//! ```text
//! raw text → length cap → Tokenizer (+ spacing) → Shape → Verifier → LabeledValues
//!                                                                         ↓
//!                                                  Address, Email, OtherPhones, Venue
//!
//! raw text → DateTime matcher → When
//! ```
//!
//! # Guarantees
//!
//! - **Total**: a field value exists only if every rule for its kind holds
//! - **Deterministic**: the first violation in scan order is always the one reported
//! - **Stateless**: grammar and format tables are immutable and shared; any
//!   number of validations may run concurrently

pub mod error;
pub mod fields;
pub mod grammar;
pub mod parser;
pub mod record;
pub mod verifier;

pub use error::{Result, ValidationError};
pub use fields::{Address, Email, MeetingName, Name, OtherPhones, Phone, Venue, When};
pub use parser::ast::{Entry, LabeledValues};
pub use record::{load_contacts, Contact, LoadError, Meeting};
