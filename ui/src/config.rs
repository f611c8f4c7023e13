//! Site configuration, fixed at build time through environment variables.
//!
//! | Variable | Meaning |
//! |---|---|
//! | `EMAILJS_SERVICE_ID` / `EMAILJS_TEMPLATE_ID` / `EMAILJS_PUBLIC_KEY` | contact form credentials |
//! | `EMAILJS_ENDPOINT` | optional REST endpoint override |
//! | `SITE_DEFAULT_THEME` | `dark` (default) or `light` |
//! | `SITE_DEFAULT_LANGUAGE` | `en` (default) or `es` |

use crate::i18n::Language;

pub const EMAILJS_DEFAULT_ENDPOINT: &str = "https://api.emailjs.com/api/v1.0/email/send";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailJsConfig {
    pub service_id: String,
    pub template_id: String,
    pub public_key: String,
    pub endpoint: String,
}

impl EmailJsConfig {
    /// All three credentials must be present and non-blank.
    pub fn from_parts(
        service_id: Option<&str>,
        template_id: Option<&str>,
        public_key: Option<&str>,
        endpoint: Option<&str>,
    ) -> Option<Self> {
        let present = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(String::from);
        Some(Self {
            service_id: present(service_id)?,
            template_id: present(template_id)?,
            public_key: present(public_key)?,
            endpoint: present(endpoint).unwrap_or_else(|| EMAILJS_DEFAULT_ENDPOINT.to_string()),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub default_dark_mode: bool,
    pub default_language: Language,
    pub email: Option<EmailJsConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_dark_mode: true,
            default_language: Language::FALLBACK,
            email: None,
        }
    }
}

impl SiteConfig {
    pub fn from_build_env() -> Self {
        Self {
            default_dark_mode: parse_default_theme(option_env!("SITE_DEFAULT_THEME")),
            default_language: option_env!("SITE_DEFAULT_LANGUAGE")
                .and_then(Language::from_code)
                .unwrap_or(Language::FALLBACK),
            email: EmailJsConfig::from_parts(
                option_env!("EMAILJS_SERVICE_ID"),
                option_env!("EMAILJS_TEMPLATE_ID"),
                option_env!("EMAILJS_PUBLIC_KEY"),
                option_env!("EMAILJS_ENDPOINT"),
            ),
        }
    }
}

/// `light` selects the light theme; anything else is dark.
fn parse_default_theme(raw: Option<&str>) -> bool {
    !matches!(raw.map(str::trim), Some(v) if v.eq_ignore_ascii_case("light"))
}
