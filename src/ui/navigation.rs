//! Page navigation
//!
//! Exactly one page is active at a time. Switching pages only changes the
//! header; it does not refresh data or swap the content region.

use std::str::FromStr;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, strum::Display, strum::EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Page {
    #[default]
    Overview,
    Sessions,
    Heatmaps,
    Insights,
    Properties,
}

impl FromStr for Page {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "overview" => Ok(Page::Overview),
            "sessions" => Ok(Page::Sessions),
            "heatmaps" => Ok(Page::Heatmaps),
            "insights" => Ok(Page::Insights),
            "properties" => Ok(Page::Properties),
            _ => Err(()),
        }
    }
}

/// Title and subtitle shown in the header for a page.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PageHeader {
    pub title: &'static str,
    pub subtitle: &'static str,
}

const PAGE_HEADERS: [(Page, PageHeader); 5] = [
    (
        Page::Overview,
        PageHeader {
            title: "Overview",
            subtitle: "Real-time analytics for your VR property tours",
        },
    ),
    (
        Page::Sessions,
        PageHeader {
            title: "VR Sessions",
            subtitle: "Detailed view of all VR tour sessions",
        },
    ),
    (
        Page::Heatmaps,
        PageHeader {
            title: "Heatmaps",
            subtitle: "Visual representation of user engagement",
        },
    ),
    (
        Page::Insights,
        PageHeader {
            title: "AI Insights",
            subtitle: "AI-powered recommendations and predictions",
        },
    ),
    (
        Page::Properties,
        PageHeader {
            title: "Properties",
            subtitle: "Manage your property portfolio",
        },
    ),
];

impl Page {
    pub fn header(&self) -> PageHeader {
        PAGE_HEADERS
            .iter()
            .find(|(page, _)| page == self)
            .map(|(_, header)| *header)
            .unwrap_or(PAGE_HEADERS[0].1)
    }

    /// Name shown in the navigation bar.
    pub fn label(&self) -> &'static str {
        self.header().title
    }
}

#[derive(Debug, Default)]
pub struct Navigator {
    active: Page,
}

impl Navigator {
    pub fn active(&self) -> Page {
        self.active
    }

    pub fn is_active(&self, page: Page) -> bool {
        self.active == page
    }

    pub fn header(&self) -> PageHeader {
        self.active.header()
    }

    /// Activates the page named `key`. Unknown keys select the overview.
    pub fn select(&mut self, key: &str) -> PageHeader {
        self.activate(key.parse().unwrap_or_default())
    }

    pub fn activate(&mut self, page: Page) -> PageHeader {
        self.active = page;
        self.header()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_select_insights_updates_header() {
        let mut nav = Navigator::default();
        let header = nav.select("insights");
        assert_eq!(header.title, "AI Insights");
        assert_eq!(header.subtitle, "AI-powered recommendations and predictions");
        assert_eq!(nav.active(), Page::Insights);
    }

    #[test]
    fn test_unknown_page_falls_back_to_overview() {
        let mut nav = Navigator::default();
        nav.select("sessions");
        let header = nav.select("billing");
        assert_eq!(header, Page::Overview.header());
        assert_eq!(nav.active(), Page::Overview);
    }

    #[test]
    // Selecting any page leaves exactly that page active.
    fn test_exactly_one_page_active() {
        let mut nav = Navigator::default();
        for page in Page::iter() {
            nav.select(&page.to_string());
            let active: Vec<_> = Page::iter().filter(|p| nav.is_active(*p)).collect();
            assert_eq!(active, vec![page]);
        }
    }

    #[test]
    fn test_every_page_has_a_distinct_title() {
        let titles: std::collections::HashSet<_> = Page::iter().map(|p| p.header().title).collect();
        assert_eq!(titles.len(), 5);
    }
}
