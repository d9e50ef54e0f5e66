//! Page addresses and navigation labels.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    About,
    Services,
    Work,
    Book,
    Contact,
    Terms,
}

impl Page {
    pub const ALL: [Page; 7] = [
        Page::Home,
        Page::About,
        Page::Services,
        Page::Work,
        Page::Book,
        Page::Contact,
        Page::Terms,
    ];

    /// Primary navigation, in display order.
    pub const NAV: [Page; 6] = [
        Page::Home,
        Page::Services,
        Page::About,
        Page::Work,
        Page::Book,
        Page::Contact,
    ];

    pub fn path(self) -> &'static str {
        match self {
            Page::Home => "/",
            Page::About => "/about",
            Page::Services => "/services",
            Page::Work => "/work",
            Page::Book => "/book",
            Page::Contact => "/contact",
            Page::Terms => "/terms",
        }
    }

    pub fn nav_label(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::About => "About Us",
            Page::Services => "Services",
            Page::Work => "Our Work",
            Page::Book => "Book a Consult",
            Page::Contact => "Contact Us",
            Page::Terms => "Terms and Conditions",
        }
    }

    /// Document title for the page.
    pub fn title(self) -> String {
        match self {
            Page::Home => "Stage Ready".to_string(),
            other => format!("{} | Stage Ready", other.nav_label()),
        }
    }

    /// Exact path lookup; trailing slashes are ignored.
    pub fn from_path(path: &str) -> Option<Page> {
        let trimmed = path.trim_end_matches('/');
        let path = if trimmed.is_empty() { "/" } else { trimmed };
        Page::ALL.into_iter().find(|page| page.path() == path)
    }

    /// Whether a nav link for this page is highlighted at `pathname`.
    ///
    /// Home only matches itself; other pages also match their sub-paths.
    pub fn is_active(self, pathname: &str) -> bool {
        let href = self.path();
        if self == Page::Home {
            return pathname == href;
        }
        pathname == href
            || pathname
                .strip_prefix(href)
                .is_some_and(|rest| rest.starts_with('/'))
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_unique() {
        let mut paths: Vec<&str> = Page::ALL.iter().map(|p| p.path()).collect();
        paths.sort_unstable();
        paths.dedup();
        assert_eq!(paths.len(), Page::ALL.len());
    }

    #[test]
    fn from_path_round_trips() {
        for page in Page::ALL {
            assert_eq!(Page::from_path(page.path()), Some(page));
        }
        assert_eq!(Page::from_path("/work/"), Some(Page::Work));
        assert_eq!(Page::from_path(""), Some(Page::Home));
        assert_eq!(Page::from_path("/blog"), None);
    }

    #[test]
    fn home_is_only_active_on_root() {
        assert!(Page::Home.is_active("/"));
        assert!(!Page::Home.is_active("/about"));
    }

    #[test]
    fn sections_match_sub_paths() {
        assert!(Page::Work.is_active("/work"));
        assert!(Page::Work.is_active("/work/coastal-townhome"));
        assert!(!Page::Work.is_active("/workshop"));
        assert!(!Page::Book.is_active("/"));
    }

    #[test]
    fn titles() {
        assert_eq!(Page::Home.title(), "Stage Ready");
        assert_eq!(Page::Book.title(), "Book a Consult | Stage Ready");
        assert!(!Page::NAV.contains(&Page::Terms));
    }
}
