//! Exact strings for assembling Content-Security-Policy headers.
//!
//! Directive names, resource keywords, the two header names, and the
//! delimiter between directives. Callers reference these instead of
//! hand-typing strings.

// Directive names.

pub const DEFAULT_SRC: &str = "default-src";
pub const SCRIPT_SRC: &str = "script-src";
pub const OBJECT_SRC: &str = "object-src";
pub const STYLE_SRC: &str = "style-src";
pub const IMG_SRC: &str = "img-src";
pub const MEDIA_SRC: &str = "media-src";
pub const FRAME_SRC: &str = "frame-src";
pub const FONT_SRC: &str = "font-src";
pub const CONNECT_SRC: &str = "connect-src";
pub const FORM_ACTION: &str = "form-action";
pub const SANDBOX: &str = "sandbox";
pub const SCRIPT_NONCE: &str = "script-nonce";
pub const PLUGIN_TYPES: &str = "plugin-types";
pub const REFLECTED_XSS: &str = "reflected-xss";
pub const REPORT_URI: &str = "report-uri";

// Resource keywords. CSP requires the single quotes on the first four.

pub const NONE: &str = "'none'";
pub const SELF: &str = "'self'";
pub const UNSAFE_INLINE: &str = "'unsafe-inline'";
pub const UNSAFE_EVAL: &str = "'unsafe-eval'";
pub const DATA: &str = "data:";
pub const HTTP: &str = "http:";
pub const HTTPS: &str = "https:";

/// The enforcing header name.
pub const HEADER: &str = "Content-Security-Policy";

/// The report-only header name: violations are reported to the `report-uri`
/// directive's endpoint instead of being blocked.
pub const HEADER_REPORT_ONLY: &str = "Content-Security-Policy-Report-Only";

/// Separator between directives in a rendered policy.
pub const DELIMITER: &str = "; ";
