//! Academy sections: category selection, keyword and highlights.

mod common;

use common::*;
use directory_core::common::ViewPhase;
use directory_core::domains::academy::{
    compute_visible, AcademyBundle, AcademyCategory, AcademyPage, AcademyViewState, Resource,
};

fn bundle() -> AcademyBundle {
    let mut featured: Vec<Resource> = (0..6)
        .map(|i| resource(&format!("Featured {i}"), "learning"))
        .collect();
    for item in &mut featured {
        item.highlighted = true;
    }

    let mut resources = featured;
    resources.extend([
        resource("Cairo Book", "learning"),
        resource("Starknet by Example", "learning"),
        resource("Devnet", "tools"),
        resource("Braavos", "wallets"),
        resource("Good first issues", "contribute"),
        resource("Starknet Weekly", "news-feed"),
    ]);
    AcademyBundle::from_resources(resources)
}

#[test]
fn test_sentinel_shows_learning_with_capped_highlights() {
    let bundle = bundle();
    let state = AcademyViewState::default();
    let section = compute_visible(&bundle, &academy_taxonomy(), &state).unwrap();

    assert_eq!(section.category, AcademyCategory::Learning);
    assert_eq!(section.highlighted.len(), 4);
    let names: Vec<_> = section.listing.items.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["Cairo Book", "Starknet by Example"]);
}

#[test]
fn test_keyword_does_not_touch_highlights() {
    let bundle = bundle();
    let state = AcademyViewState::default().with_keyword("cairo");
    let section = compute_visible(&bundle, &academy_taxonomy(), &state).unwrap();

    assert_eq!(section.highlighted.len(), 4);
    assert_eq!(section.listing.total, 1);
    assert_eq!(section.listing.items[0].name, "Cairo Book");
}

#[test]
fn test_each_category_lists_its_resources() {
    let bundle = bundle();
    let taxonomy = academy_taxonomy();
    for (value, expected) in [
        ("tools", "Devnet"),
        ("wallets", "Braavos"),
        ("contribute", "Good first issues"),
        ("news-feed", "Starknet Weekly"),
    ] {
        let state = AcademyViewState::default().with_category(Some(value.to_string()));
        let section = compute_visible(&bundle, &taxonomy, &state).unwrap();
        assert!(section.highlighted.is_empty());
        assert_eq!(section.listing.items[0].name, expected, "category {}", value);
    }
}

#[test]
fn test_keyword_searches_description() {
    let bundle = bundle();
    let state = AcademyViewState::default()
        .with_category(Some("tools".into()))
        .with_keyword("about devnet");
    let section = compute_visible(&bundle, &academy_taxonomy(), &state).unwrap();
    assert_eq!(section.listing.total, 1);
}

#[test]
fn test_page_empty_when_keyword_misses() {
    let mut page = AcademyPage::new(academy_taxonomy());
    page.resolve(bundle());
    page.update(|state| state.with_keyword("zzz"));

    let rendered = page.render().unwrap();
    assert_eq!(rendered.view.phase(), ViewPhase::Empty);
    assert_eq!(rendered.highlighted.len(), 4);
}
