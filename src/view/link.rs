//! Links and their opening policy.

/// How an outbound link is opened.
///
/// Outbound links always get a fresh browsing context with no way back to
/// the page that opened it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LinkPolicy {
    pub new_context: bool,
    pub no_opener: bool,
    pub no_referrer: bool,
}

impl LinkPolicy {
    /// `target="_blank" rel="noopener noreferrer"`.
    pub const ISOLATED: Self = Self {
        new_context: true,
        no_opener: true,
        no_referrer: true,
    };

    /// The `rel` tokens this policy implies.
    pub fn rel(&self) -> Vec<&'static str> {
        let mut rel = Vec::new();
        if self.no_opener {
            rel.push("noopener");
        }
        if self.no_referrer {
            rel.push("noreferrer");
        }
        rel
    }
}

/// Where a link goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinkTarget {
    /// In-page jump to the node with this anchor id.
    Anchor(String),
    /// Outbound URL.
    External { url: String, policy: LinkPolicy },
    /// `mailto:` address.
    Mail(String),
    /// Rendered but goes nowhere.
    Placeholder,
}

impl LinkTarget {
    pub fn external(url: impl Into<String>) -> Self {
        Self::External {
            url: url.into(),
            policy: LinkPolicy::ISOLATED,
        }
    }

    /// The `href` form of this target.
    pub fn href(&self) -> String {
        match self {
            Self::Anchor(id) => format!("#{id}"),
            Self::External { url, .. } => url.clone(),
            Self::Mail(address) => format!("mailto:{address}"),
            Self::Placeholder => "#".to_string(),
        }
    }

    /// URI to hand to the terminal as an OSC 8 hyperlink, if any.
    ///
    /// In-page anchors and placeholders are handled by the page itself.
    pub fn hyperlink(&self) -> Option<String> {
        match self {
            Self::External { .. } | Self::Mail(_) => Some(self.href()),
            Self::Anchor(_) | Self::Placeholder => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub label: String,
    pub target: LinkTarget,
}

impl Link {
    pub fn new(label: impl Into<String>, target: LinkTarget) -> Self {
        Self {
            label: label.into(),
            target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_href_forms() {
        assert_eq!(LinkTarget::Anchor("projects".into()).href(), "#projects");
        assert_eq!(LinkTarget::Mail("a@b.c".into()).href(), "mailto:a@b.c");
        assert_eq!(LinkTarget::Placeholder.href(), "#");
        assert_eq!(LinkTarget::external("https://x.dev").href(), "https://x.dev");
    }

    #[test]
    fn test_external_links_are_isolated() {
        let LinkTarget::External { policy, .. } = LinkTarget::external("https://x.dev") else {
            panic!("expected external target");
        };
        assert!(policy.new_context);
        assert_eq!(policy.rel(), ["noopener", "noreferrer"]);
    }

    #[test]
    fn test_only_outbound_targets_become_hyperlinks() {
        assert!(LinkTarget::Anchor("about".into()).hyperlink().is_none());
        assert!(LinkTarget::Placeholder.hyperlink().is_none());
        assert_eq!(
            LinkTarget::Mail("a@b.c".into()).hyperlink().as_deref(),
            Some("mailto:a@b.c")
        );
    }
}
