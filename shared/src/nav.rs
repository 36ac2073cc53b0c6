//! Active navigation link bookkeeping and header-offset math.

/// Class marking the highlighted nav link.
pub const ACTIVE_CLASS: &str = "active";
/// CSS custom property holding the fixed header height.
pub const HEADER_HEIGHT_PROPERTY: &str = "--nav-height";
/// Header height used when the property is missing or unparseable.
pub const DEFAULT_HEADER_HEIGHT: i64 = 68;
/// Extra pixels added back after subtracting the header.
pub const SCROLL_BUFFER: i64 = 8;
/// Fraction of a section that must be visible for it to become active.
pub const SECTION_THRESHOLD: f64 = 0.45;

/// Single owner of "which nav link is active".
///
/// Clicks and the scroll-spy both report here; the last caller wins, and
/// since only one target is ever stored at most one link can be active.
#[derive(Debug, Clone, Default)]
pub struct ActiveNav {
    targets: Vec<String>,
    active: Option<usize>,
}

impl ActiveNav {
    /// Registers the `data-target` of every nav link, in document order.
    pub fn new<I, S>(targets: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            targets: targets.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// Targets in registration order.
    pub fn targets(&self) -> &[String] {
        &self.targets
    }

    /// Target of the active link, if any.
    pub fn active(&self) -> Option<&str> {
        self.active.map(|idx| self.targets[idx].as_str())
    }

    /// Whether the link at `index` should carry [`ACTIVE_CLASS`].
    pub fn is_active_index(&self, index: usize) -> bool {
        self.active == Some(index)
    }

    /// Makes `target` the only active link.
    ///
    /// Returns `true` when the active link changed and the DOM needs
    /// updating. Unknown or empty targets leave the state untouched, so a
    /// link without `data-target` never matches a section without an id.
    pub fn set_active(&mut self, target: &str) -> bool {
        if target.is_empty() {
            return false;
        }
        let Some(idx) = self.position(target) else {
            return false;
        };
        if self.active == Some(idx) {
            return false;
        }
        tracing::debug!(section = target, "active nav link changed");
        self.active = Some(idx);
        true
    }

    /// Makes the link at `index` the only active one; used for clicks, where
    /// the clicked element is known even if several links share a target.
    pub fn set_active_index(&mut self, index: usize) -> bool {
        if index >= self.targets.len() || self.active == Some(index) {
            return false;
        }
        tracing::debug!(index, "active nav link clicked");
        self.active = Some(index);
        true
    }

    // Later links win when targets repeat.
    fn position(&self, target: &str) -> Option<usize> {
        self.targets.iter().rposition(|t| t == target)
    }
}

/// Reads the header height the way `parseInt` does: leading integer prefix,
/// anything else (including `0`) falls back to [`DEFAULT_HEADER_HEIGHT`].
pub fn parse_header_height(raw: &str) -> i64 {
    let s = raw.trim_start();
    let (sign, digits) = match s.as_bytes().first() {
        Some(b'-') => (-1, &s[1..]),
        Some(b'+') => (1, &s[1..]),
        _ => (1, s),
    };
    let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
    match digits[..end].parse::<i64>() {
        Ok(0) | Err(_) => DEFAULT_HEADER_HEIGHT,
        Ok(value) => sign * value,
    }
}

/// Absolute scroll position that puts a section just below the fixed header.
pub fn scroll_target(scroll_y: f64, rect_top: f64, header_height: i64) -> f64 {
    scroll_y + rect_top - header_height as f64 + SCROLL_BUFFER as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nav() -> ActiveNav {
        ActiveNav::new(["home", "about", "skills", "contact"])
    }

    fn active_count(nav: &ActiveNav) -> usize {
        (0..nav.targets().len()).filter(|&i| nav.is_active_index(i)).count()
    }

    #[test]
    fn starts_with_nothing_active() {
        let nav = nav();
        assert_eq!(nav.active(), None);
        assert_eq!(active_count(&nav), 0);
    }

    #[test]
    fn at_most_one_active_after_any_sequence() {
        let mut nav = nav();
        for target in ["about", "contact", "missing", "home", "home", "skills"] {
            nav.set_active(target);
            assert!(active_count(&nav) <= 1);
        }
        assert_eq!(nav.active(), Some("skills"));
    }

    #[test]
    fn reports_only_real_changes() {
        let mut nav = nav();
        assert!(nav.set_active("about"));
        assert!(!nav.set_active("about"));
        assert!(!nav.set_active("nowhere"));
        assert_eq!(nav.active(), Some("about"));
    }

    #[test]
    fn click_then_spy_converges_on_last_writer() {
        let mut nav = nav();
        nav.set_active("contact");
        nav.set_active("about");
        nav.set_active("skills");
        assert_eq!(nav.active(), Some("skills"));
    }

    #[test]
    fn empty_target_never_activates() {
        let mut nav = ActiveNav::new(["home", ""]);
        assert!(!nav.set_active(""));
        assert_eq!(nav.active(), None);
        assert!(nav.set_active_index(1));
        assert!(!nav.set_active(""));
        assert!(nav.is_active_index(1));
    }

    #[test]
    fn index_activation() {
        let mut nav = ActiveNav::new(["home", "about", "about"]);
        assert!(nav.set_active_index(1));
        assert!(nav.is_active_index(1));
        assert!(!nav.set_active_index(7));
        assert!(nav.set_active("about"));
        assert!(nav.is_active_index(2));
        assert!(!nav.is_active_index(1));
    }

    #[test]
    fn header_height_parsing() {
        assert_eq!(parse_header_height("72px"), 72);
        assert_eq!(parse_header_height("  80"), 80);
        assert_eq!(parse_header_height(""), DEFAULT_HEADER_HEIGHT);
        assert_eq!(parse_header_height("auto"), DEFAULT_HEADER_HEIGHT);
        assert_eq!(parse_header_height("0px"), DEFAULT_HEADER_HEIGHT);
        assert_eq!(parse_header_height("-4"), -4);
    }

    #[test]
    fn scroll_target_compensates_header() {
        assert_eq!(scroll_target(100.0, 500.0, 68), 540.0);
        assert_eq!(scroll_target(0.0, 68.0, 68), 8.0);
    }
}
