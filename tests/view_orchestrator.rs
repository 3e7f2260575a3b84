//! View Orchestrator Tests
//!
//! End-to-end browsing sessions against an in-memory catalog:
//! - Initial load, reset and empty-submit reloads
//! - Search and filter narrow the working view cumulatively
//! - Sorting reorders without dropping records
//! - Page index follows the view as it shrinks
//! - Fetch failures never disturb what is displayed

use std::sync::Arc;

use catalog_browser::filter::FilterState;
use catalog_browser::search::SuggestOutcome;
use catalog_browser::sort::SortKey;
use catalog_browser::store::StaticCatalogSource;
use catalog_browser::{Record, ViewOrchestrator};

// =============================================================================
// Helper Functions
// =============================================================================

fn record(id: u64, name: &str, popularity: f64, price: &str, category: &str, ratings: f64) -> Record {
    Record::new(id, name, popularity, price, category, ratings)
}

/// Twelve records: enough for three pages of five
fn catalog() -> Vec<Record> {
    vec![
        record(1, "Laptop", 95.0, "$90", "Electronics", 5.0),
        record(2, "Lamp", 40.0, "$15", "Home", 3.0),
        record(3, "Headphones", 88.0, "$60", "Electronics", 4.0),
        record(4, "Jacket", 70.0, "$80", "Fashion", 4.0),
        record(5, "Laser Pointer", 10.0, "$8", "Electronics", 2.0),
        record(6, "Sneakers", 85.0, "$75", "Fashion", 5.0),
        record(7, "Ladder", 20.0, "$45", "Home", 3.0),
        record(8, "Tablet", 90.0, "$99", "Electronics", 4.0),
        record(9, "Scarf", 30.0, "$12", "Fashion", 3.0),
        record(10, "Lantern", 25.0, "$22", "Outdoor", 4.0),
        record(11, "Keyboard", 60.0, "$35", "Electronics", 4.0),
        record(12, "Hat", 15.0, "$18", "Fashion", 2.0),
    ]
}

async fn loaded_browser() -> (ViewOrchestrator, Arc<StaticCatalogSource>) {
    let source = Arc::new(StaticCatalogSource::new(catalog()));
    let mut browser = ViewOrchestrator::new(source.clone(), 5);
    browser.initial_load().await.unwrap();
    (browser, source)
}

fn view_names(browser: &ViewOrchestrator) -> Vec<&str> {
    browser.view().iter().map(|r| r.name.as_str()).collect()
}

// =============================================================================
// Loading
// =============================================================================

/// Initial load shows the whole catalog from page 1.
#[tokio::test]
async fn test_initial_load_shows_first_page() {
    let (browser, _) = loaded_browser().await;
    let page = browser.render();

    assert_eq!(page.total, 12);
    assert_eq!(page.page, 1);
    assert_eq!(page.page_count, 3);
    assert_eq!(page.names(), vec!["Laptop", "Lamp", "Headphones", "Jacket", "Laser Pointer"]);
    assert_eq!(page.rows[0].ordinal, 1);
}

/// A failed initial load leaves an empty, renderable view.
#[tokio::test]
async fn test_failed_initial_load_renders_empty() {
    let source = Arc::new(StaticCatalogSource::new(catalog()));
    source.set_failing(true);
    let mut browser = ViewOrchestrator::new(source, 5);

    assert!(browser.initial_load().await.is_err());

    let page = browser.render();
    assert!(page.is_empty());
    assert_eq!(page.page_count, 0);
    assert_eq!(page.page, 1);
    assert!(page.links.is_empty());
}

// =============================================================================
// Search
// =============================================================================

/// Submitting narrows to case-insensitive name prefixes, in order.
#[tokio::test]
async fn test_search_narrows_by_prefix() {
    let (mut browser, _) = loaded_browser().await;

    browser.input("LA").await;
    browser.submit_search().await.unwrap();

    assert_eq!(
        view_names(&browser),
        vec!["Laptop", "Lamp", "Laser Pointer", "Ladder", "Lantern"]
    );
}

/// A second search narrows the already-narrowed view.
#[tokio::test]
async fn test_searches_compound() {
    let (mut browser, _) = loaded_browser().await;

    browser.input("la").await;
    browser.submit_search().await.unwrap();
    browser.input("h").await;
    browser.submit_search().await.unwrap();

    // "Headphones" and "Hat" are in the snapshot but were narrowed away
    assert!(browser.view().is_empty());
}

/// An empty submit reloads the full snapshot.
#[tokio::test]
async fn test_empty_submit_restores_snapshot() {
    let (mut browser, source) = loaded_browser().await;

    browser.input("la").await;
    browser.submit_search().await.unwrap();
    browser.input("").await;
    browser.submit_search().await.unwrap();

    assert_eq!(browser.view().len(), 12);
    assert_eq!(source.fetch_count(), 3); // initial, suggestions for "la", reload
}

/// Suggestions come from the source, not from the working view.
#[tokio::test]
async fn test_suggestions_from_source() {
    let (mut browser, _) = loaded_browser().await;

    browser.input("ke").await;
    browser.submit_search().await.unwrap();
    assert_eq!(view_names(&browser), vec!["Keyboard"]);

    browser.input("la").await;
    let page = browser.render();
    assert_eq!(
        page.suggestions,
        vec!["Laptop", "Lamp", "Laser Pointer", "Ladder", "Lantern"]
    );
    // Typing never touches the view
    assert_eq!(view_names(&browser), vec!["Keyboard"]);
}

/// One character clears suggestions without a fetch.
#[tokio::test]
async fn test_short_input_clears_suggestions() {
    let (mut browser, source) = loaded_browser().await;

    browser.input("la").await;
    assert!(!browser.render().suggestions.is_empty());

    let fetches = source.fetch_count();
    browser.input("l").await;

    assert!(browser.render().suggestions.is_empty());
    assert_eq!(source.fetch_count(), fetches);
}

/// Responses for outdated input never overwrite a fresher list.
#[tokio::test]
async fn test_out_of_order_suggestions() {
    let (mut browser, _) = loaded_browser().await;

    let slow = browser.begin_suggest("la").unwrap();
    let fast = browser.begin_suggest("lan").unwrap();
    let source = browser.suggestion_source();

    let fast_response = catalog_browser::search::SearchEngine::suggest(source.as_ref(), fast).await;
    assert_eq!(browser.complete_suggest(fast_response), SuggestOutcome::Applied);

    let slow_response = catalog_browser::search::SearchEngine::suggest(source.as_ref(), slow).await;
    assert_eq!(browser.complete_suggest(slow_response), SuggestOutcome::Stale);

    assert_eq!(browser.render().suggestions, vec!["Lantern"]);
    assert_eq!(browser.render().query, "lan");
}

/// A failed suggestion fetch keeps the previous list.
#[tokio::test]
async fn test_failed_suggestions_keep_list() {
    let (mut browser, source) = loaded_browser().await;

    browser.input("la").await;
    let before = browser.render().suggestions;

    source.set_failing(true);
    browser.input("lan").await;

    assert_eq!(browser.render().suggestions, before);
    assert_eq!(browser.metrics().snapshot().suggestions_failed, 1);
}

// =============================================================================
// Filters
// =============================================================================

/// Edits are pending until applied.
#[tokio::test]
async fn test_filters_apply_on_demand() {
    let (mut browser, _) = loaded_browser().await;

    browser.edit_filters(FilterState::default().with_category("Fashion"));
    assert_eq!(browser.view().len(), 12);

    browser.apply_filters();
    assert_eq!(view_names(&browser), vec!["Jacket", "Sneakers", "Scarf", "Hat"]);
}

/// Loosening the filters cannot bring narrowed-away records back.
#[tokio::test]
async fn test_filters_compound_until_reset() {
    let (mut browser, _) = loaded_browser().await;

    browser.edit_filters(FilterState::default().with_price_range(50.0, 100.0));
    browser.apply_filters();
    assert_eq!(view_names(&browser), vec!["Laptop", "Headphones", "Jacket", "Sneakers", "Tablet"]);

    browser.edit_filters(FilterState::default());
    browser.apply_filters();
    assert_eq!(browser.view().len(), 5);

    browser.reset().await.unwrap();
    assert_eq!(browser.view().len(), 12);
}

/// Search and filter narrowings stack on each other.
#[tokio::test]
async fn test_search_then_filter() {
    let (mut browser, _) = loaded_browser().await;

    browser.input("la").await;
    browser.submit_search().await.unwrap();
    browser.edit_filters(FilterState::default().with_min_ratings(3.0));
    browser.apply_filters();

    assert_eq!(view_names(&browser), vec!["Laptop", "Lamp", "Ladder", "Lantern"]);
}

// =============================================================================
// Sorting
// =============================================================================

/// Sorting reorders the whole view and marks the key active.
#[tokio::test]
async fn test_sort_by_price() {
    let (mut browser, _) = loaded_browser().await;

    browser.sort_by(SortKey::Price);

    let page = browser.render();
    assert_eq!(page.active_sort, SortKey::Price);
    assert_eq!(page.names(), vec!["Laser Pointer", "Scarf", "Lamp", "Hat", "Lantern"]);
    assert_eq!(browser.view().len(), 12);
}

/// Clicking the same key twice changes nothing.
#[tokio::test]
async fn test_sort_twice_is_idempotent() {
    let (mut browser, _) = loaded_browser().await;

    browser.sort_by(SortKey::Popularity);
    let once = browser.view().to_vec();
    browser.sort_by(SortKey::Popularity);

    assert_eq!(browser.view(), once.as_slice());
}

/// Sorting survives narrowing; narrowing keeps the sorted order.
#[tokio::test]
async fn test_sort_then_search_keeps_order() {
    let (mut browser, _) = loaded_browser().await;

    browser.sort_by(SortKey::Popularity);
    browser.input("la").await;
    browser.submit_search().await.unwrap();

    assert_eq!(
        view_names(&browser),
        vec!["Laptop", "Lamp", "Lantern", "Ladder", "Laser Pointer"]
    );
}

// =============================================================================
// Pagination
// =============================================================================

/// The last page holds the remainder.
#[tokio::test]
async fn test_last_page() {
    let (mut browser, _) = loaded_browser().await;

    browser.goto_page(3);
    let page = browser.render();

    assert_eq!(page.names(), vec!["Keyboard", "Hat"]);
    assert_eq!(page.rows[0].ordinal, 11);
    assert!(page.links[2].active);
}

/// Narrowing the view pulls a now-invalid page back into range.
#[tokio::test]
async fn test_page_clamped_after_shrink() {
    let (mut browser, _) = loaded_browser().await;

    browser.goto_page(3);
    browser.edit_filters(FilterState::default().with_category("Electronics"));
    browser.apply_filters();

    assert_eq!(browser.state().pagination.current_page, 1);
    assert_eq!(browser.render().page_count, 1);
}

/// Any page number is accepted; rendering shows the nearest valid page.
#[tokio::test]
async fn test_out_of_range_page_request() {
    let (mut browser, _) = loaded_browser().await;

    browser.goto_page(40);
    assert_eq!(browser.state().pagination.current_page, 40);
    assert_eq!(browser.render().page, 3);
}

// =============================================================================
// Failure Handling
// =============================================================================

/// A failed reload leaves the narrowed view and the snapshot in place.
#[tokio::test]
async fn test_failed_reload_keeps_everything() {
    let (mut browser, source) = loaded_browser().await;

    browser.input("la").await;
    browser.submit_search().await.unwrap();
    browser.input("").await;

    source.set_failing(true);
    assert!(browser.submit_search().await.is_err());

    assert_eq!(browser.view().len(), 5);
    assert_eq!(browser.store().len(), 12);

    source.set_failing(false);
    browser.reset().await.unwrap();
    assert_eq!(browser.view().len(), 12);
}

/// Records with malformed prices are skipped by filters, kept by sorts.
#[tokio::test]
async fn test_malformed_prices_fail_soft() {
    let mut records = catalog();
    records.push(record(13, "Mystery Box", 99.0, "$?", "Misc", 5.0));
    let source = Arc::new(StaticCatalogSource::new(records));
    let mut browser = ViewOrchestrator::new(source, 5);
    browser.initial_load().await.unwrap();

    browser.sort_by(SortKey::Price);
    assert_eq!(browser.view().last().unwrap().name, "Mystery Box");
    assert_eq!(browser.view().len(), 13);

    browser.apply_filters();
    assert_eq!(browser.view().len(), 12);
    assert!(browser.view().iter().all(|r| r.name != "Mystery Box"));
    assert_eq!(browser.metrics().snapshot().price_parse_failures, 1);
}
