//! Integration tests for the portal: query semantics over real records and page building.

use serde_json::{json, Value};

use crate::catalog;
use crate::errors::AppError;
use crate::models::{ContentStore, Job, Scholarship};
use crate::query::{QueryState, ALL};
use crate::routes::{Route, ROUTES};
use crate::store;
use crate::views::{build_page, render, Entry, OutputFormat, PageBody, PageRequest};

/// Test fixture holding the embedded content store.
struct TestFixture {
    store: ContentStore,
}

impl TestFixture {
    fn new() -> Self {
        let store = store::from_json(store::EMBEDDED_FIXTURES).expect("Failed to load fixtures");
        TestFixture { store }
    }

    fn listing_ids(&self, request: &PageRequest) -> Vec<String> {
        let page = build_page(&self.store, request).expect("Failed to build page");
        match page.body {
            PageBody::Listing(listing) => listing
                .results
                .iter()
                .map(|entry| entry.id().to_string())
                .collect(),
            other => panic!("expected a listing, got {:?}", other),
        }
    }

    fn json(&self, request: &PageRequest) -> Value {
        let page = build_page(&self.store, request).expect("Failed to build page");
        let body = render(&page, OutputFormat::Json).expect("Failed to render page");
        serde_json::from_str(&body).expect("Rendered page is not JSON")
    }
}

fn job(id: &str, title: &str, company: &str, location: &str, job_type: &str) -> Job {
    serde_json::from_value(json!({
        "id": id,
        "title": title,
        "company": company,
        "location": location,
        "type": job_type,
        "discipline": "Electrical Engineering",
        "experienceLevel": "Entry",
        "description": "",
        "postedDate": "2024-11-01",
        "applicationUrl": "#"
    }))
    .unwrap()
}

fn scholarship(id: &str, name: &str, level: &str) -> Scholarship {
    serde_json::from_value(json!({
        "id": id,
        "name": name,
        "provider": "Provider",
        "country": "Pakistan",
        "level": level,
        "amount": "Full tuition",
        "deadline": "2025-01-31",
        "description": "",
        "applicationUrl": "https://example.com",
        "funded": "Fully Funded"
    }))
    .unwrap()
}

fn ids<'a, T: crate::models::Record + 'a>(view: impl Iterator<Item = &'a T>) -> Vec<String> {
    view.map(|record| record.id().to_string()).collect()
}

// ==================== QUERY PROPERTIES ====================

#[test]
fn test_scenario_search_is_case_insensitive_on_location() {
    let jobs = vec![
        job("1", "Maintenance Engineer", "Sahiwal Power", "Sahiwal, Punjab", "Full-time"),
        job("2", "Software Engineer", "Systems Limited", "Lahore, Punjab", "Full-time"),
        job("3", "Site Engineer", "Karachi Builders", "Karachi, Sindh", "Contract"),
    ];
    let listing = catalog::jobs();
    let query = listing.query().with_search_text("lahore").with_category("type", ALL);

    assert_eq!(ids(listing.filter(&jobs, &query)), vec!["2"]);
}

#[test]
fn test_scenario_level_filter_is_exact() {
    let scholarships = vec![
        scholarship("1", "HEC Indigenous PhD Fellowship", "Doctoral"),
        scholarship("2", "DAAD Master's Scholarships", "Graduate"),
        scholarship("3", "Fulbright PhD", "Doctoral"),
    ];
    let listing = catalog::scholarships();
    let query = listing.query().with_category("level", "Doctoral");

    assert_eq!(ids(listing.filter(&scholarships, &query)), vec!["1", "3"]);

    let query = listing.query().with_category("level", "doctoral");
    assert!(listing.filter(&scholarships, &query).next().is_none());
}

#[test]
fn test_scenario_unmatched_text_yields_empty_view() {
    let fixture = TestFixture::new();
    let listing = catalog::forum_posts();
    let query = listing.query().with_search_text("zzz-no-such-phrase");

    assert_eq!(listing.filter(&fixture.store.forum_posts, &query).count(), 0);
}

#[test]
fn test_empty_filter_is_identity_in_order() {
    let fixture = TestFixture::new();
    let listing = catalog::jobs();
    let query = listing.query();

    let view: Vec<&Job> = listing.filter(&fixture.store.jobs, &query).collect();
    let all: Vec<&Job> = fixture.store.jobs.iter().collect();
    assert_eq!(view, all);
}

#[test]
fn test_same_query_twice_is_idempotent() {
    let fixture = TestFixture::new();
    let listing = catalog::scholarships();
    let query = listing.query().with_search_text("a").with_category("level", "Graduate");

    let first = ids(listing.filter(&fixture.store.scholarships, &query));
    let second = ids(listing.filter(&fixture.store.scholarships, &query));
    assert_eq!(first, second);
    assert_eq!(first, vec!["2", "3"]);
}

#[test]
fn test_view_is_an_ordered_subsequence() {
    let fixture = TestFixture::new();
    let listing = catalog::forum_posts();
    let positions: Vec<usize> = listing
        .filter(&fixture.store.forum_posts, &listing.query().with_search_text("pakistan"))
        .map(|post| {
            fixture
                .store
                .forum_posts
                .iter()
                .position(|p| p.id == post.id)
                .unwrap()
        })
        .collect();

    assert!(!positions.is_empty());
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_text_and_category_are_conjunctive() {
    let jobs = vec![
        job("r1", "Lahore Intern", "Acme", "Multan", "Internship"),
        job("r2", "Plant Engineer", "Acme", "Multan", "Full-time"),
        job("r3", "Lahore Engineer", "Acme", "Multan", "Full-time"),
    ];
    let listing = catalog::jobs();
    let query = listing
        .query()
        .with_search_text("lahore")
        .with_category("type", "Full-time");

    assert_eq!(ids(listing.filter(&jobs, &query)), vec!["r3"]);
}

#[test]
fn test_filtering_leaves_store_untouched() {
    let fixture = TestFixture::new();
    let before = fixture.store.clone();
    let listing = catalog::startup_resources();
    let _ = listing
        .filter(
            &fixture.store.startup_resources,
            &listing.query().with_category("category", "Funding"),
        )
        .count();

    assert_eq!(fixture.store, before);
}

#[test]
fn test_startup_resource_without_link_still_lists() {
    let fixture = TestFixture::new();
    let listing = catalog::startup_resources();
    let query = QueryState::new().with_category("category", "Funding");

    let found: Vec<_> = listing.filter(&fixture.store.startup_resources, &query).collect();
    assert_eq!(found.len(), 1);
    assert!(found[0].link.is_none());
}

// ==================== PAGES ====================

#[test]
fn test_every_route_builds_a_page() {
    let fixture = TestFixture::new();
    for route in ROUTES {
        let page = build_page(&fixture.store, &PageRequest::new(route)).unwrap();
        assert_eq!(page.path, route.path());
        assert!(!render(&page, OutputFormat::Text).unwrap().is_empty());
    }
}

#[test]
fn test_jobs_page_search() {
    let fixture = TestFixture::new();
    let request = PageRequest::new(Route::Jobs).search("LAHORE");

    assert_eq!(fixture.listing_ids(&request), vec!["2"]);
}

#[test]
fn test_universities_page_filters_by_discipline() {
    let fixture = TestFixture::new();
    let request =
        PageRequest::new(Route::Universities).filter("discipline", "Computer Engineering");

    assert_eq!(fixture.listing_ids(&request), vec!["3"]);
}

#[test]
fn test_forum_page_searches_content() {
    let fixture = TestFixture::new();
    let request = PageRequest::new(Route::Forum).search("scada");

    assert_eq!(fixture.listing_ids(&request), vec!["1"]);
}

#[test]
fn test_empty_listing_shows_message() {
    let fixture = TestFixture::new();
    let request = PageRequest::new(Route::Jobs).filter("type", "Internship");
    let page = build_page(&fixture.store, &request).unwrap();
    let text = render(&page, OutputFormat::Text).unwrap();

    assert!(text.contains("Showing 0 of 3"));
    assert!(text.contains("No jobs found. Try adjusting your search."));
}

#[test]
fn test_listing_json_envelope() {
    let fixture = TestFixture::new();
    let body = fixture.json(&PageRequest::new(Route::Scholarships).filter("level", "Doctoral"));

    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["title"], "Scholarships - engg.pk");
    assert_eq!(body["data"]["body"]["kind"], "listing");
    assert_eq!(body["data"]["body"]["total"], 3);
    assert_eq!(body["data"]["body"]["query"]["selections"]["level"], "Doctoral");
    assert_eq!(body["data"]["body"]["selectors"][0]["options"][0], "All");
    assert_eq!(body["data"]["body"]["results"][0]["applicationUrl"], "https://hec.gov.pk");
    assert!(body["data"]["body"].get("emptyMessage").is_none());
}

#[test]
fn test_search_on_page_without_input_is_rejected() {
    let fixture = TestFixture::new();
    let err = build_page(&fixture.store, &PageRequest::new(Route::Startups).search("fund"))
        .unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(err.message(), "The /startups page has no search input");
}

#[test]
fn test_unknown_filter_axis_is_rejected() {
    let fixture = TestFixture::new();
    let err = build_page(&fixture.store, &PageRequest::new(Route::Jobs).filter("level", "Entry"))
        .unwrap_err();

    assert_eq!(err.message(), "The /jobs page has no 'level' filter");
}

#[test]
fn test_out_of_range_value_is_permissive_by_default() {
    let fixture = TestFixture::new();
    let request = PageRequest::new(Route::Jobs).filter("type", "Freelance");

    assert!(fixture.listing_ids(&request).is_empty());
}

#[test]
fn test_out_of_range_value_rejected_in_strict_mode() {
    let fixture = TestFixture::new();
    let mut request = PageRequest::new(Route::Jobs).filter("type", "Freelance");
    request.strict = true;

    let err = build_page(&fixture.store, &request).unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[test]
fn test_static_pages_reject_queries() {
    let fixture = TestFixture::new();
    let err = build_page(&fixture.store, &PageRequest::new(Route::About).search("mission"))
        .unwrap_err();

    assert_eq!(err.error_code(), "BAD_REQUEST");
}

#[test]
fn test_home_page_counts_records() {
    let fixture = TestFixture::new();
    let body = fixture.json(&PageRequest::new(Route::Home));

    assert_eq!(body["data"]["title"], "Engineering Community of Pakistan");
    let features = body["data"]["body"]["features"].as_array().unwrap();
    assert_eq!(features.len(), 8);
    assert_eq!(features[3]["path"], "/jobs");
    assert_eq!(features[3]["records"], 3);
}

// ==================== DETAIL VIEWS ====================

#[test]
fn test_job_detail_page() {
    let fixture = TestFixture::new();
    let page = build_page(&fixture.store, &PageRequest::new(Route::Jobs).id("2")).unwrap();

    assert_eq!(
        page.title,
        "Software Engineer - Full Stack at Systems Limited - Jobs - engg.pk"
    );
    match &page.body {
        PageBody::Detail { record: Entry::Job(job) } => assert_eq!(job.company, "Systems Limited"),
        other => panic!("expected a job detail, got {:?}", other),
    }
}

#[test]
fn test_detail_meta_description_is_truncated() {
    let fixture = TestFixture::new();
    let page = build_page(&fixture.store, &PageRequest::new(Route::Insights).id("1")).unwrap();

    assert_eq!(page.meta_description.chars().count(), 155);
    assert!(page.meta_description.starts_with("Pakistan is transitioning"));
}

#[test]
fn test_detail_unknown_id_is_not_found() {
    let fixture = TestFixture::new();
    let err = build_page(&fixture.store, &PageRequest::new(Route::Scholarships).id("99"))
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(_)));
    assert_eq!(err.exit_code(), 3);
}

#[test]
fn test_detail_on_static_page_is_rejected() {
    let fixture = TestFixture::new();
    let err = build_page(&fixture.store, &PageRequest::new(Route::Home).id("1")).unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
}

#[test]
fn test_detail_with_query_is_rejected() {
    let fixture = TestFixture::new();
    let request = PageRequest::new(Route::Jobs).id("1").search("zzz");
    let err = build_page(&fixture.store, &request).unwrap_err();

    assert!(matches!(err, AppError::BadRequest(_)));
    assert_eq!(err.message(), "--id cannot be combined with --search/--filter");

    let request = PageRequest::new(Route::Jobs).id("1").filter("type", "Full-time");
    assert!(build_page(&fixture.store, &request).is_err());
}
