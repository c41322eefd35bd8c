//! The closed set of policy directives.

use std::fmt;

use crate::constants::{
    CONNECT_SRC, DEFAULT_SRC, FONT_SRC, FORM_ACTION, FRAME_SRC, IMG_SRC, MEDIA_SRC, OBJECT_SRC,
    PLUGIN_TYPES, REFLECTED_XSS, REPORT_URI, SANDBOX, SCRIPT_NONCE, SCRIPT_SRC, STYLE_SRC,
};

/// A valid Content-Security-Policy directive.
///
/// The variant order here is the canonical render order: rendered policies
/// list their directives in this order no matter the order they were built
/// in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    DefaultSrc,
    ScriptSrc,
    ObjectSrc,
    StyleSrc,
    ImgSrc,
    MediaSrc,
    FrameSrc,
    FontSrc,
    ConnectSrc,
    FormAction,
    Sandbox,
    ScriptNonce,
    PluginTypes,
    ReflectedXss,
    ReportUri,
}

impl Directive {
    /// Every directive, in canonical render order.
    pub const ALL: [Directive; 15] = [
        Directive::DefaultSrc,
        Directive::ScriptSrc,
        Directive::ObjectSrc,
        Directive::StyleSrc,
        Directive::ImgSrc,
        Directive::MediaSrc,
        Directive::FrameSrc,
        Directive::FontSrc,
        Directive::ConnectSrc,
        Directive::FormAction,
        Directive::Sandbox,
        Directive::ScriptNonce,
        Directive::PluginTypes,
        Directive::ReflectedXss,
        Directive::ReportUri,
    ];

    /// The directive's name as it appears in the header.
    pub fn name(&self) -> &'static str {
        match self {
            Self::DefaultSrc => DEFAULT_SRC,
            Self::ScriptSrc => SCRIPT_SRC,
            Self::ObjectSrc => OBJECT_SRC,
            Self::StyleSrc => STYLE_SRC,
            Self::ImgSrc => IMG_SRC,
            Self::MediaSrc => MEDIA_SRC,
            Self::FrameSrc => FRAME_SRC,
            Self::FontSrc => FONT_SRC,
            Self::ConnectSrc => CONNECT_SRC,
            Self::FormAction => FORM_ACTION,
            Self::Sandbox => SANDBOX,
            Self::ScriptNonce => SCRIPT_NONCE,
            Self::PluginTypes => PLUGIN_TYPES,
            Self::ReflectedXss => REFLECTED_XSS,
            Self::ReportUri => REPORT_URI,
        }
    }

    /// Look up a directive by name. Matching is exact: names are lowercase
    /// and hyphenated.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            DEFAULT_SRC => Some(Self::DefaultSrc),
            SCRIPT_SRC => Some(Self::ScriptSrc),
            OBJECT_SRC => Some(Self::ObjectSrc),
            STYLE_SRC => Some(Self::StyleSrc),
            IMG_SRC => Some(Self::ImgSrc),
            MEDIA_SRC => Some(Self::MediaSrc),
            FRAME_SRC => Some(Self::FrameSrc),
            FONT_SRC => Some(Self::FontSrc),
            CONNECT_SRC => Some(Self::ConnectSrc),
            FORM_ACTION => Some(Self::FormAction),
            SANDBOX => Some(Self::Sandbox),
            SCRIPT_NONCE => Some(Self::ScriptNonce),
            PLUGIN_TYPES => Some(Self::PluginTypes),
            REFLECTED_XSS => Some(Self::ReflectedXss),
            REPORT_URI => Some(Self::ReportUri),
            _ => None,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_order() {
        let names: Vec<&str> = Directive::ALL.iter().map(|d| d.name()).collect();
        assert_eq!(
            names,
            [
                "default-src",
                "script-src",
                "object-src",
                "style-src",
                "img-src",
                "media-src",
                "frame-src",
                "font-src",
                "connect-src",
                "form-action",
                "sandbox",
                "script-nonce",
                "plugin-types",
                "reflected-xss",
                "report-uri",
            ]
        );
    }

    #[test]
    fn test_name_round_trip() {
        for directive in Directive::ALL {
            assert_eq!(Directive::from_name(directive.name()), Some(directive));
        }
    }

    #[test]
    fn test_from_name_rejects_unknown() {
        assert_eq!(Directive::from_name("bogus-src"), None);
        assert_eq!(Directive::from_name(""), None);
        // Exact match only.
        assert_eq!(Directive::from_name("DEFAULT-SRC"), None);
        assert_eq!(Directive::from_name("default-src "), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Directive::DefaultSrc.to_string(), "default-src");
        assert_eq!(Directive::ReflectedXss.to_string(), "reflected-xss");
    }
}
