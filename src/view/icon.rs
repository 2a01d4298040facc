//! Icon glyphs.
//!
//! Icons are opaque decorative glyphs keyed by name. Lookup never fails the
//! render: an unknown name just draws nothing.

/// Named icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    Mail,
    Phone,
    MapPin,
    ExternalLink,
    GraduationCap,
    Code,
    Globe,
    Briefcase,
    ChevronRight,
    Github,
    Linkedin,
    Message,
}

const TABLE: &[(&str, Icon, &str)] = &[
    ("mail", Icon::Mail, "✉"),
    ("phone", Icon::Phone, "☎"),
    ("map-pin", Icon::MapPin, "⌖"),
    ("external-link", Icon::ExternalLink, "↗"),
    ("graduation-cap", Icon::GraduationCap, "◆"),
    ("code", Icon::Code, "❮❯"),
    ("globe", Icon::Globe, "◍"),
    ("briefcase", Icon::Briefcase, "▣"),
    ("chevron-right", Icon::ChevronRight, "›"),
    ("github", Icon::Github, "⌥"),
    ("linkedin", Icon::Linkedin, "in"),
    ("message", Icon::Message, "✎"),
];

impl Icon {
    pub fn from_name(name: &str) -> Option<Self> {
        TABLE.iter().find(|(n, _, _)| *n == name).map(|(_, icon, _)| *icon)
    }

    pub fn name(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, icon, _)| *icon == self)
            .map(|(n, _, _)| *n)
            .unwrap_or_default()
    }

    pub fn glyph(self) -> &'static str {
        TABLE
            .iter()
            .find(|(_, icon, _)| *icon == self)
            .map(|(_, _, g)| *g)
            .unwrap_or_default()
    }
}

/// Glyph for an icon name.
pub fn glyph(name: &str) -> Option<&'static str> {
    Icon::from_name(name).map(Icon::glyph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_icon_has_a_glyph() {
        for (name, icon, _) in TABLE {
            assert_eq!(icon.name(), *name);
            assert!(!icon.glyph().is_empty());
        }
    }

    #[test]
    fn test_lookup() {
        assert_eq!(Icon::from_name("map-pin"), Some(Icon::MapPin));
        assert_eq!(glyph("external-link"), Some("↗"));
        assert_eq!(glyph("rocket"), None);
    }
}
