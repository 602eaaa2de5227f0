//! inputtype - classify untrusted analysis targets and decide if they are admissible.
//!
//! Operators submit free-form strings to the analysis pipeline. Before any
//! of them reach a network-facing analyzer this crate decides what the string
//! is and whether it is safe to act on.
//!
//! # Detection
//!
//! Interpreters are tried in a fixed order and the first match wins:
//! 1. IP literal (IPv4 dotted quad, IPv6 colon-hex)
//! 2. CIDR network (`<ip>/<prefix>`)
//! 3. Domain name (contains a dot and is well-formed)
//! 4. Email address (`local@domain` or `Name <local@domain>`)
//! 5. File name inside the scratch directory
//!
//! # Validation
//!
//! - **IP**: loopback, unspecified and non-public ranges are rejected
//! - **Domain**: must be well-formed with a registered TLD
//! - **Email**: the domain part must be multi-label, well-formed, with a registered TLD
//! - **File**: must exist and be readable
//! - **IP network**: accepted as detected
//!
//! # Quick Start
//!
//! ```no_run
//! use inputtype::{Engine, EngineConfig};
//!
//! let engine = Engine::from_config(&EngineConfig::new("/etc/holmes/tlds-alpha-by-domain.txt"))?;
//!
//! let (detected, verdict) = engine.check("www.example.com")?;
//! if verdict.is_accepted() {
//!     println!("dispatching {:?}", detected);
//! }
//! # Ok::<(), inputtype::Error>(())
//! ```
//!
//! All shared state (TLD registry, range tables) is built once and read-only
//! afterwards, so one [`Engine`] can serve any number of threads.

mod error;
mod kind;
mod reason;
mod verdict;

pub mod config;
pub mod detect;
pub mod engine;
pub mod ranges;
pub mod registry;
pub mod validate;

// Re-export core types
pub use error::{Error, Result};
pub use kind::Kind;
pub use reason::Reason;
pub use verdict::Verdict;

// Re-export detection
pub use detect::{
    is_confined, is_well_formed_domain, resolve_in_scratch, Detected, Detector, EmailAddress, Interpreter,
    IpNetwork,
};

// Re-export validation
pub use ranges::RangeTable;
pub use registry::TldRegistry;
pub use validate::{validate_file, validate_public_ip, Validator};

// Re-export configuration
pub use config::{load_json, EngineConfig};
pub use engine::Engine;
