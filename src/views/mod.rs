//! Page views.
//!
//! Resolves a route and the user's query against the content store and produces a
//! [`Page`], which renders either as text or inside a JSON envelope.

mod text;

use serde::Serialize;

use crate::catalog;
use crate::errors::AppError;
use crate::models::{
    CareerPath, ContentStore, ForumPost, IndustryInsight, Job, Record, Scholarship,
    StartupResource, SubjectConnection, UniversityProgram,
};
use crate::query::{Listing, QueryState, ALL};
use crate::routes::{meta_description, Route};

/// How a page is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// What the user asked to see.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub route: Route,
    pub search: Option<String>,
    pub filters: Vec<(String, String)>,
    pub id: Option<String>,
    /// Reject selector values outside the axis options.
    pub strict: bool,
}

impl PageRequest {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            search: None,
            filters: Vec::new(),
            id: None,
            strict: false,
        }
    }

    pub fn search(mut self, text: impl Into<String>) -> Self {
        self.search = Some(text.into());
        self
    }

    pub fn filter(mut self, axis: impl Into<String>, value: impl Into<String>) -> Self {
        self.filters.push((axis.into(), value.into()));
        self
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    fn has_query(&self) -> bool {
        self.search.is_some() || !self.filters.is_empty()
    }
}

/// A fully resolved page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<'a> {
    pub path: &'static str,
    pub title: String,
    pub meta_description: String,
    pub heading: &'static str,
    pub tagline: &'static str,
    pub body: PageBody<'a>,
}

#[derive(Debug, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum PageBody<'a> {
    Home { features: Vec<Feature> },
    About { sections: &'static [AboutSection] },
    Listing(ListingBody<'a>),
    Detail { record: Entry<'a> },
}

/// One content vertical advertised on the home page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Feature {
    pub title: &'static str,
    pub description: &'static str,
    pub path: &'static str,
    pub records: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutSection {
    pub title: &'static str,
    pub text: &'static str,
}

/// A selector control and its current value.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selector {
    pub axis: &'static str,
    pub options: Vec<&'static str>,
    pub selected: String,
}

/// Filtered records of one listing page.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListingBody<'a> {
    pub search_enabled: bool,
    pub selectors: Vec<Selector>,
    pub query: QueryState,
    pub total: usize,
    pub results: Vec<Entry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

/// A borrowed record of any vertical.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum Entry<'a> {
    Forum(&'a ForumPost),
    University(&'a UniversityProgram),
    Career(&'a CareerPath),
    Job(&'a Job),
    Scholarship(&'a Scholarship),
    Insight(&'a IndustryInsight),
    Subject(&'a SubjectConnection),
    Startup(&'a StartupResource),
}

impl Entry<'_> {
    fn record(&self) -> &dyn Record {
        match self {
            Entry::Forum(r) => *r,
            Entry::University(r) => *r,
            Entry::Career(r) => *r,
            Entry::Job(r) => *r,
            Entry::Scholarship(r) => *r,
            Entry::Insight(r) => *r,
            Entry::Subject(r) => *r,
            Entry::Startup(r) => *r,
        }
    }

    pub fn id(&self) -> &str {
        self.record().id()
    }
}

/// Success output envelope.
#[derive(Debug, Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Build the page for a request.
pub fn build_page<'a>(
    store: &'a ContentStore,
    request: &PageRequest,
) -> Result<Page<'a>, AppError> {
    let route = request.route;
    let meta = route.page();
    tracing::debug!(path = route.path(), "Building page");

    if let Some(id) = &request.id {
        if request.has_query() {
            return Err(AppError::BadRequest(
                "--id cannot be combined with --search/--filter".to_string(),
            ));
        }
        let record = find_entry(store, route, id)?;
        return Ok(Page {
            path: route.path(),
            title: meta.detail_title(&record.record().display_title()),
            meta_description: meta_description(record.record().lead_text()),
            heading: meta.heading,
            tagline: meta.tagline,
            body: PageBody::Detail { record },
        });
    }

    let body = match route {
        Route::Home | Route::About if request.has_query() => {
            return Err(AppError::BadRequest(format!(
                "The {} page has no search or filters",
                route.path()
            )));
        }
        Route::Home => PageBody::Home {
            features: features(store),
        },
        Route::About => PageBody::About {
            sections: ABOUT_SECTIONS,
        },
        Route::Forum => PageBody::Listing(list(
            request,
            &catalog::forum_posts(),
            &store.forum_posts,
            Entry::Forum,
            catalog::FORUM_EMPTY,
        )?),
        Route::Universities => PageBody::Listing(list(
            request,
            &catalog::university_programs(),
            &store.university_programs,
            Entry::University,
            catalog::UNIVERSITIES_EMPTY,
        )?),
        Route::Careers => PageBody::Listing(list(
            request,
            &catalog::career_paths(),
            &store.career_paths,
            Entry::Career,
            catalog::GENERIC_EMPTY,
        )?),
        Route::Jobs => PageBody::Listing(list(
            request,
            &catalog::jobs(),
            &store.jobs,
            Entry::Job,
            catalog::JOBS_EMPTY,
        )?),
        Route::Scholarships => PageBody::Listing(list(
            request,
            &catalog::scholarships(),
            &store.scholarships,
            Entry::Scholarship,
            catalog::SCHOLARSHIPS_EMPTY,
        )?),
        Route::Insights => PageBody::Listing(list(
            request,
            &catalog::industry_insights(),
            &store.industry_insights,
            Entry::Insight,
            catalog::GENERIC_EMPTY,
        )?),
        Route::Subjects => PageBody::Listing(list(
            request,
            &catalog::subject_connections(),
            &store.subject_connections,
            Entry::Subject,
            catalog::GENERIC_EMPTY,
        )?),
        Route::Startups => PageBody::Listing(list(
            request,
            &catalog::startup_resources(),
            &store.startup_resources,
            Entry::Startup,
            catalog::STARTUPS_EMPTY,
        )?),
    };

    Ok(Page {
        path: route.path(),
        title: meta.document_title(),
        meta_description: meta.meta_description.to_string(),
        heading: meta.heading,
        tagline: meta.tagline,
        body,
    })
}

/// Render a page in the requested format.
pub fn render(page: &Page<'_>, format: OutputFormat) -> Result<String, AppError> {
    match format {
        OutputFormat::Text => Ok(page.to_string()),
        OutputFormat::Json => serde_json::to_string_pretty(&Envelope::new(page))
            .map_err(|e| AppError::Internal(format!("Failed to encode page: {}", e))),
    }
}

fn list<'a, T>(
    request: &PageRequest,
    listing: &Listing<T>,
    records: &'a [T],
    wrap: fn(&'a T) -> Entry<'a>,
    empty_message: &'static str,
) -> Result<ListingBody<'a>, AppError> {
    let path = request.route.path();
    let mut query = listing.query();

    if let Some(text) = &request.search {
        if !listing.supports_search() {
            return Err(AppError::BadRequest(format!(
                "The {} page has no search input",
                path
            )));
        }
        query.set_search_text(text.as_str());
    }

    for (axis, value) in &request.filters {
        if listing.axis_named(axis).is_none() {
            return Err(AppError::BadRequest(format!(
                "The {} page has no '{}' filter",
                path, axis
            )));
        }
        query.set_category(axis.as_str(), value.as_str());
    }

    if request.strict {
        listing.validate(&query)?;
    } else {
        for (axis, value) in listing.out_of_range(&query) {
            tracing::warn!(axis, value, "Selected value is not one of the axis options");
        }
    }

    let results: Vec<Entry<'a>> = listing.filter(records, &query).map(wrap).collect();
    tracing::debug!(
        path,
        matched = results.len(),
        total = records.len(),
        "Filtered view computed"
    );

    let selectors = listing
        .axes()
        .iter()
        .map(|axis| Selector {
            axis: axis.name(),
            options: std::iter::once(ALL)
                .chain(axis.options().iter().copied())
                .collect(),
            selected: query.selected(axis.name()).to_string(),
        })
        .collect();

    Ok(ListingBody {
        search_enabled: listing.supports_search(),
        selectors,
        empty_message: results.is_empty().then_some(empty_message),
        query,
        total: records.len(),
        results,
    })
}

fn find_entry<'a>(store: &'a ContentStore, route: Route, id: &str) -> Result<Entry<'a>, AppError> {
    let entry = match route {
        Route::Forum => find(&store.forum_posts, id).map(Entry::Forum),
        Route::Universities => find(&store.university_programs, id).map(Entry::University),
        Route::Careers => find(&store.career_paths, id).map(Entry::Career),
        Route::Jobs => find(&store.jobs, id).map(Entry::Job),
        Route::Scholarships => find(&store.scholarships, id).map(Entry::Scholarship),
        Route::Insights => find(&store.industry_insights, id).map(Entry::Insight),
        Route::Subjects => find(&store.subject_connections, id).map(Entry::Subject),
        Route::Startups => find(&store.startup_resources, id).map(Entry::Startup),
        Route::Home | Route::About => {
            return Err(AppError::BadRequest(format!(
                "The {} page has no records",
                route.path()
            )));
        }
    };

    entry.ok_or_else(|| {
        AppError::NotFound(format!("No record '{}' under {}", id, route.path()))
    })
}

fn find<'a, T: Record>(records: &'a [T], id: &str) -> Option<&'a T> {
    records.iter().find(|record| record.id() == id)
}

fn features(store: &ContentStore) -> Vec<Feature> {
    let stats = store.stats();
    vec![
        Feature {
            title: "Community Forum",
            description: "Discuss technical questions, career guidance, and industry insights with fellow engineers.",
            path: Route::Forum.path(),
            records: stats.forum_posts,
        },
        Feature {
            title: "University Reviews",
            description: "Read honest reviews and comparisons of engineering programs across Pakistan.",
            path: Route::Universities.path(),
            records: stats.university_programs,
        },
        Feature {
            title: "Career Paths",
            description: "Explore different engineering careers and learn from experienced professionals.",
            path: Route::Careers.path(),
            records: stats.career_paths,
        },
        Feature {
            title: "Job Board",
            description: "Find engineering job opportunities across Pakistan in various industries.",
            path: Route::Jobs.path(),
            records: stats.jobs,
        },
        Feature {
            title: "Scholarships",
            description: "Discover scholarship opportunities for undergraduate and graduate studies.",
            path: Route::Scholarships.path(),
            records: stats.scholarships,
        },
        Feature {
            title: "Industry Insights",
            description: "Learn about real-world applications and industry trends from experts.",
            path: Route::Insights.path(),
            records: stats.industry_insights,
        },
        Feature {
            title: "Subject Connections",
            description: "Understand how different subjects connect and apply to real-world problems.",
            path: Route::Subjects.path(),
            records: stats.subject_connections,
        },
        Feature {
            title: "Startup Resources",
            description: "Access resources, funding opportunities, and guidance for tech startups.",
            path: Route::Startups.path(),
            records: stats.startup_resources,
        },
    ]
}

static ABOUT_SECTIONS: &[AboutSection] = &[
    AboutSection {
        title: "Our Mission",
        text: "To create a thriving community where Pakistani engineers can access curated knowledge, connect with experienced professionals, discover opportunities, and develop fulfilling careers in Pakistan.",
    },
    AboutSection {
        title: "Our Vision",
        text: "We envision a Pakistan where engineers are empowered with knowledge, guided by experienced mentors, and equipped to build innovative solutions.",
    },
    AboutSection {
        title: "Community First",
        text: "We believe in the power of community. Engineers helping engineers, sharing knowledge, and supporting each other's growth.",
    },
    AboutSection {
        title: "Expert Knowledge",
        text: "All information is curated and verified by real experts - professionals who have walked the path and achieved success.",
    },
    AboutSection {
        title: "Honest & Transparent",
        text: "We provide honest reviews, realistic expectations, and transparent information about programs, careers, and opportunities.",
    },
    AboutSection {
        title: "Growth Mindset",
        text: "We encourage continuous learning, skill development, and adaptation to industry changes and emerging technologies.",
    },
];
