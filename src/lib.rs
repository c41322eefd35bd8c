//! # CSP Builder
//!
//! A sane interface for building HTTP `Content-Security-Policy` header
//! values.
//!
//! ## Features
//!
//! - ✅ **Validated accumulation** - `set`/`add` reject names outside the
//!   fixed directive set
//! - ✅ **Deterministic rendering** - directives always serialize in
//!   canonical order, independent of call order
//! - ✅ **Exact format** - single spaces, `"; "` between directives, no
//!   trailing delimiter, empty policy renders empty
//! - ✅ **String constants** - directive names, resource keywords, and both
//!   header names, quotes included where CSP requires them
//! - ✅ **Config friendly** - policies (de)serialize with `serde`
//!
//! ## Quick Start
//!
//! ```rust
//! use csp_builder::{Policy, CONNECT_SRC, DEFAULT_SRC, HEADER, SELF};
//!
//! let mut policy = Policy::new();
//! policy.set(DEFAULT_SRC, vec![SELF]).unwrap();
//! policy
//!     .add(CONNECT_SRC, vec![SELF, "https://www.google-analytics.com"])
//!     .unwrap();
//!
//! // Write the rendered value under the HEADER (or HEADER_REPORT_ONLY)
//! // response header.
//! let value = policy.to_header_value();
//! assert_eq!(
//!     value,
//!     "default-src 'self'; connect-src 'self' https://www.google-analytics.com"
//! );
//! assert_eq!(HEADER, "Content-Security-Policy");
//! ```
//!
//! ## Recommendations
//!
//! - Build the policy once at boot and keep the rendered `String` around for
//!   every response, instead of recomputing it per request. The rendered
//!   value is immutable and freely shareable across handlers; the [`Policy`]
//!   itself carries no locking, so concurrent mutation is on the caller to
//!   serialize.
//! - Start from an empty policy, deploy to a test environment, and watch
//!   which requests the browser blocks. Then add resources to directives one
//!   by one until nothing breaks.

pub mod constants;
pub mod directive;
pub mod error;
pub mod policy;

pub use constants::*;
pub use directive::Directive;
pub use error::{CspError, Result};
pub use policy::{DirectivesMap, Policy};
