use chrono::Datelike;

use crate::domain::PathPrefix;
use crate::typography::Typography;

/// Which header the page shell draws above the content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Header {
    /// Large two-line title on the landing page.
    Home,
    /// Compact single-line title on every other page.
    Page,
}

/// Site title, optionally split over two lines with the second highlighted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteTitle {
    pub first: String,
    pub second: Option<String>,
}

impl SiteTitle {
    pub fn from_lines(lines: &[String]) -> Self {
        let mut lines = lines.iter().filter(|l| !l.is_empty());
        Self {
            first: lines.next().cloned().unwrap_or_default(),
            second: lines.next().cloned(),
        }
    }

    pub fn single_line(&self) -> String {
        match &self.second {
            Some(second) => format!("{} {}", self.first, second),
            None => self.first.clone(),
        }
    }
}

/// Site-wide rendering settings shared by every page.
pub struct Site {
    pub title: SiteTitle,
    pub path_prefix: PathPrefix,
    pub typography: Typography,
    pub trust_provider_html: bool,
}

impl Site {
    pub fn shell(&self, header: Header) -> PageShell {
        PageShell::new(header, &self.title, &self.path_prefix, &self.typography)
    }
}

/// Everything the base template needs to render the page chrome.
pub struct PageShell {
    pub header: Header,
    pub title: SiteTitle,
    pub root_path: String,
    pub container_style: String,
    pub home_title_style: String,
    pub primary_color: String,
    pub header_font_family: String,
    pub year: i32,
}

impl PageShell {
    pub fn new(
        header: Header,
        title: &SiteTitle,
        path_prefix: &PathPrefix,
        typography: &Typography,
    ) -> Self {
        Self {
            header,
            title: title.clone(),
            root_path: path_prefix.root_path(),
            container_style: typography.container_style(),
            home_title_style: typography.scale(1.0).to_style(),
            primary_color: typography.primary_color.clone(),
            header_font_family: typography.header_font_family.clone(),
            year: chrono::Utc::now().year(),
        }
    }

    pub fn is_home(&self) -> bool {
        self.header == Header::Home
    }
}
