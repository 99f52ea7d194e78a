// ============================================================================
// Warranty Core - Theme Application
// File: crates/warranty-core/src/theme.rs
// Description: Hex -> HSL conversion and tenant theme application
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::TenantConfig;
use warranty_shared::constants::PLATFORM_NAME;

/// Hue in degrees (0-360), saturation and lightness as whole percentages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hsl {
    pub h: u16,
    pub s: u8,
    pub l: u8,
}

impl fmt::Display for Hsl {
    /// CSS custom-property value form, e.g. `146 100% 39%`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}% {}%", self.h, self.s, self.l)
    }
}

/// Standard RGB -> HSL conversion.
///
/// Channels are normalized to [0, 1]; lightness is `(max + min) / 2`;
/// saturation uses the piecewise formula conditioned on lightness; hue is
/// the six-case max-channel switch, expressed in degrees. Each component
/// is rounded to the nearest integer. Returns `None` for anything that is
/// not a six-digit hex color.
pub fn hex_to_hsl(hex: &str) -> Option<Hsl> {
    let hex = hex.strip_prefix('#').unwrap_or(hex);
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let r = u8::from_str_radix(&hex[0..2], 16).ok()? as f64 / 255.0;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()? as f64 / 255.0;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()? as f64 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let l = (max + min) / 2.0;

    let (h, s) = if max == min {
        (0.0, 0.0)
    } else {
        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let h = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        (h / 6.0, s)
    };

    Some(Hsl {
        h: (h * 360.0).round() as u16,
        s: (s * 100.0).round() as u8,
        l: (l * 100.0).round() as u8,
    })
}

/// Receiver for theme writes.
///
/// Stands in for the document the presentation layer owns: the primary
/// color custom property and the page title.
pub trait ThemeSink {
    fn set_primary_color(&mut self, hsl: Hsl);
    fn set_page_title(&mut self, title: &str);
}

/// Captured theme state, also the default [`ThemeSink`] implementation.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Theme {
    pub primary_hsl: Option<String>,
    pub page_title: Option<String>,
}

impl ThemeSink for Theme {
    fn set_primary_color(&mut self, hsl: Hsl) {
        self.primary_hsl = Some(hsl.to_string());
    }

    fn set_page_title(&mut self, title: &str) {
        self.page_title = Some(title.to_string());
    }
}

/// Apply a tenant's branding to the sink. Idempotent: applying the same
/// tenant twice leaves the sink in the same state as applying it once.
pub fn apply_theme(tenant: &TenantConfig, sink: &mut dyn ThemeSink) {
    if let Some(hsl) = hex_to_hsl(&tenant.primary_color) {
        sink.set_primary_color(hsl);
    }
    sink.set_page_title(&format!("{} - {}", tenant.display_name, PLATFORM_NAME));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ThemeMode;

    fn acme() -> TenantConfig {
        TenantConfig {
            id: "acme".into(),
            subdomain: "acme".into(),
            company_name: "Acme Appliances Ltd".into(),
            display_name: "Acme Appliances".into(),
            primary_color: "#00C853".into(),
            industry: "appliances".into(),
            feature_flags: vec![],
            theme_mode: ThemeMode::Light,
        }
    }

    #[test]
    fn test_green_reference_color() {
        let hsl = hex_to_hsl("#00C853").unwrap();
        assert!((hsl.h as i32 - 146).abs() <= 1, "hue was {}", hsl.h);
        assert_eq!(hsl.s, 100);
        assert_eq!(hsl.l, 39);
    }

    #[test]
    fn test_achromatic_and_primary_channels() {
        assert_eq!(hex_to_hsl("#FFFFFF").unwrap(), Hsl { h: 0, s: 0, l: 100 });
        assert_eq!(hex_to_hsl("#000000").unwrap(), Hsl { h: 0, s: 0, l: 0 });
        assert_eq!(hex_to_hsl("#FF0000").unwrap(), Hsl { h: 0, s: 100, l: 50 });
        assert_eq!(hex_to_hsl("#00FF00").unwrap(), Hsl { h: 120, s: 100, l: 50 });
        assert_eq!(hex_to_hsl("#0000FF").unwrap(), Hsl { h: 240, s: 100, l: 50 });
    }

    #[test]
    fn test_rejects_malformed_hex() {
        assert!(hex_to_hsl("#FFF").is_none());
        assert!(hex_to_hsl("00C85").is_none());
        assert!(hex_to_hsl("#GGGGGG").is_none());
    }

    #[test]
    fn test_conversion_is_pure() {
        assert_eq!(hex_to_hsl("#1565C0"), hex_to_hsl("#1565C0"));
    }

    #[test]
    fn test_apply_theme_idempotent() {
        let tenant = acme();
        let mut once = Theme::default();
        apply_theme(&tenant, &mut once);

        let mut twice = Theme::default();
        apply_theme(&tenant, &mut twice);
        apply_theme(&tenant, &mut twice);

        assert_eq!(once, twice);
        assert_eq!(twice.page_title.as_deref(), Some("Acme Appliances - WarrantyHub"));
        assert!(twice.primary_hsl.is_some());
    }
}
