use brandgraph::{BrandCatalog, SocialNetwork};
use serde_json::json;

fn network() -> SocialNetwork {
    let mut catalog = BrandCatalog::with_brands(["brandZero", "brandOne", "brandTwo"]).unwrap();
    catalog.connect_similar_brands("brandZero", "brandTwo").unwrap();

    let mut net = SocialNetwork::new(catalog);
    for name in ["carl", "amy", "bob"] {
        net.create_user(name).unwrap();
    }
    net.add_friend("bob", "carl").unwrap();
    net.add_friend("bob", "amy").unwrap();
    net.follow_brand("bob", "brandTwo").unwrap();
    net.follow_brand("bob", "brandOne").unwrap();
    net
}

#[test]
fn user_view_serializes_ordered_lists() {
    let net = network();
    let view = net.user_view("bob").unwrap();
    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!({
            "name": "bob",
            "friends": ["amy", "carl"],
            "brands": ["brandOne", "brandTwo"],
        })
    );
}

#[test]
fn brand_view_serializes_index_and_similar_brands() {
    let net = network();
    let view = net.brand_view("brandTwo").unwrap();
    assert_eq!(
        serde_json::to_value(&view).unwrap(),
        json!({
            "name": "brandTwo",
            "index": 2,
            "similar": ["brandZero"],
        })
    );
}

#[test]
fn views_are_detached_snapshots() {
    let mut net = network();
    let before = net.user_view("amy").unwrap();
    net.delete_user("bob").unwrap();
    assert_eq!(before.friends, vec!["bob"]);
    assert!(net.user_view("amy").unwrap().friends.is_empty());
    assert!(net.user_view("bob").is_err());
}
