//! Static route table.
//!
//! Ten paths, each mapped to exactly one view. No parameters, redirects or guards.

use serde::Serialize;

use crate::errors::AppError;

/// Site name appended to every document title.
pub const SITE_NAME: &str = "engg.pk";

/// Characters of a record's body text used as its meta description.
pub const META_DESCRIPTION_LEN: usize = 155;

/// A top-level view of the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Route {
    Home,
    Forum,
    Universities,
    Careers,
    Jobs,
    Scholarships,
    Insights,
    Subjects,
    Startups,
    About,
}

/// Every route, in navigation order.
pub const ROUTES: [Route; 10] = [
    Route::Home,
    Route::Forum,
    Route::Universities,
    Route::Careers,
    Route::Jobs,
    Route::Scholarships,
    Route::Insights,
    Route::Subjects,
    Route::Startups,
    Route::About,
];

/// Heading and document metadata of a page.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageMeta {
    pub heading: &'static str,
    pub tagline: &'static str,
    pub meta_description: &'static str,
    /// Section name used in detail page titles.
    pub section: &'static str,
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::Forum => "/forum",
            Route::Universities => "/universities",
            Route::Careers => "/careers",
            Route::Jobs => "/jobs",
            Route::Scholarships => "/scholarships",
            Route::Insights => "/insights",
            Route::Subjects => "/subjects",
            Route::Startups => "/startups",
            Route::About => "/about",
        }
    }

    /// Label shown in the site navigation.
    pub fn nav_label(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::Forum => "Forum",
            Route::Universities => "Universities",
            Route::Careers => "Career Paths",
            Route::Jobs => "Jobs",
            Route::Scholarships => "Scholarships",
            Route::Insights => "Industry Insights",
            Route::Subjects => "Subject Connections",
            Route::Startups => "Startups",
            Route::About => "About",
        }
    }

    /// Match a path exactly. A single trailing slash is ignored.
    pub fn resolve(path: &str) -> Result<Self, AppError> {
        let normalized = match path.strip_suffix('/') {
            Some("") | None => path,
            Some(stripped) => stripped,
        };
        ROUTES
            .into_iter()
            .find(|route| route.path() == normalized)
            .ok_or_else(|| AppError::NotFound(format!("No page at '{}'", path)))
    }

    pub fn page(self) -> PageMeta {
        match self {
            Route::Home => PageMeta {
                heading: "Engineering Community of Pakistan",
                tagline: "Empowering Pakistani engineers with knowledge, opportunities, and community. Together, we can revive engineering excellence and build a stronger Pakistan.",
                meta_description: "Empowering Pakistani engineers with knowledge, opportunities, and community. Join us to connect, learn, and grow.",
                section: "Home",
            },
            Route::Forum => PageMeta {
                heading: "Community Forum",
                tagline: "Discuss technical questions, share experiences, and learn from fellow engineers",
                meta_description: "Discuss technical questions, share experiences, and learn from fellow Pakistani engineers.",
                section: "Forum",
            },
            Route::Universities => PageMeta {
                heading: "University Programs",
                tagline: "Honest reviews and comprehensive information about engineering programs across Pakistan",
                meta_description: "Honest reviews and comprehensive information about engineering programs across Pakistan.",
                section: "Universities",
            },
            Route::Careers => PageMeta {
                heading: "Career Paths",
                tagline: "Explore different engineering careers and learn from experienced professionals in Pakistan",
                meta_description: "Explore different engineering careers and learn from experienced professionals in Pakistan.",
                section: "Careers",
            },
            Route::Jobs => PageMeta {
                heading: "Job Opportunities",
                tagline: "Find engineering jobs across Pakistan in various industries",
                meta_description: "Find engineering job opportunities across Pakistan in various industries.",
                section: "Jobs",
            },
            Route::Scholarships => PageMeta {
                heading: "Scholarships",
                tagline: "Discover scholarship opportunities for engineering students",
                meta_description: "Discover scholarship opportunities for engineering students in Pakistan and abroad.",
                section: "Scholarships",
            },
            Route::Insights => PageMeta {
                heading: "Industry Insights",
                tagline: "Learn about real-world applications and industry trends from verified experts",
                meta_description: "Learn about real-world applications and industry trends from verified experts.",
                section: "Insights",
            },
            Route::Subjects => PageMeta {
                heading: "Subject Connections",
                tagline: "Understand how different engineering subjects connect and apply to real-world problems",
                meta_description: "Understand how different engineering subjects connect and apply to real-world problems and career paths.",
                section: "Subjects",
            },
            Route::Startups => PageMeta {
                heading: "Startup Resources",
                tagline: "Access resources, funding opportunities, and guidance for building tech startups in Pakistan",
                meta_description: "Access resources, funding opportunities, and guidance for building tech startups in Pakistan.",
                section: "Startups",
            },
            Route::About => PageMeta {
                heading: "About engg.pk",
                tagline: "Building a community to empower Pakistani engineers and revive engineering excellence",
                meta_description: "Learn about our mission to empower Pakistani engineers and combat brain drain through community and knowledge sharing.",
                section: "About",
            },
        }
    }
}

impl PageMeta {
    /// Title of the listing or static page.
    pub fn document_title(&self) -> String {
        if self.section == "Home" {
            return self.heading.to_string();
        }
        format!("{} - {}", self.heading, SITE_NAME)
    }

    /// Title of a single record's page within this section.
    pub fn detail_title(&self, record_title: &str) -> String {
        format!("{} - {} - {}", record_title, self.section, SITE_NAME)
    }
}

/// First [`META_DESCRIPTION_LEN`] characters of a record's body text.
pub fn meta_description(text: &str) -> String {
    text.chars().take(META_DESCRIPTION_LEN).collect()
}
