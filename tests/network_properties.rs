use brandgraph::{BrandCatalog, ErrorKind, SocialNetwork, User};

fn network(brands: &[&str], users: &[&str]) -> SocialNetwork {
    let catalog = BrandCatalog::with_brands(brands.iter().copied()).unwrap();
    let mut net = SocialNetwork::new(catalog);
    for name in users {
        net.create_user(name).unwrap();
    }
    net
}

fn friends(net: &SocialNetwork, name: &str) -> Vec<String> {
    net.user(name)
        .unwrap()
        .friends()
        .map(str::to_string)
        .collect()
}

fn is_sorted(names: &[String]) -> bool {
    names.windows(2).all(|w| w[0] < w[1])
}

#[test]
fn add_friend_links_both_sides_in_order() {
    let mut net = network(&["b0"], &["mo", "amy", "zed", "bob"]);
    for other in ["zed", "amy", "bob"] {
        net.add_friend("mo", other).unwrap();
    }

    let mo = friends(&net, "mo");
    assert_eq!(mo, vec!["amy", "bob", "zed"]);
    assert!(is_sorted(&mo));
    for other in ["zed", "amy", "bob"] {
        assert!(net.user(other).unwrap().is_friend("mo"));
    }
}

#[test]
fn second_add_friend_fails_and_changes_nothing() {
    let mut net = network(&["b0"], &["amy", "bob"]);
    net.add_friend("amy", "bob").unwrap();
    let err = net.add_friend("amy", "bob").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::AlreadyExists);
    assert_eq!(friends(&net, "amy"), vec!["bob"]);
    assert_eq!(friends(&net, "bob"), vec!["amy"]);
}

#[test]
fn degrees_of_connection_cases() {
    let mut net = network(&["b0"], &["a", "b", "c", "d"]);
    net.add_friend("a", "b").unwrap();
    net.add_friend("b", "c").unwrap();

    assert_eq!(net.degrees_of_connection("a", "a").unwrap(), Some(0));
    assert_eq!(net.degrees_of_connection("a", "c").unwrap(), Some(2));
    assert_eq!(net.degrees_of_connection("a", "d").unwrap(), None);
}

#[test]
fn mutual_friends_match_set_intersection() {
    let mut net = network(&["b0"], &["a", "b", "c", "d", "e", "f"]);
    for (x, y) in [("a", "c"), ("a", "d"), ("a", "e"), ("b", "d"), ("b", "e"), ("b", "f")] {
        net.add_friend(x, y).unwrap();
    }
    let a = friends(&net, "a");
    let b = friends(&net, "b");
    let expected = a.iter().filter(|n| b.contains(n)).count();

    assert_eq!(net.mutual_friends("a", "b").unwrap(), expected);
    assert_eq!(net.mutual_friends("b", "a").unwrap(), expected);
    assert_eq!(expected, 2);
}

#[test]
fn deleting_a_user_scrubs_every_edge() {
    let mut net = network(&["b0", "b1"], &["a", "b", "c"]);
    net.add_friend("a", "b").unwrap();
    net.add_friend("b", "c").unwrap();
    net.follow_brand("b", "b1").unwrap();

    net.delete_user("b").unwrap();

    assert!(net.user("b").is_none());
    assert!(friends(&net, "a").is_empty());
    assert!(friends(&net, "c").is_empty());
    assert_eq!(
        net.degrees_of_connection("a", "b").unwrap_err().kind(),
        ErrorKind::NotFound
    );
    assert_eq!(net.degrees_of_connection("a", "c").unwrap(), None);

    // The name is free again and starts with a clean slate.
    net.create_user("b").unwrap();
    assert_eq!(net.user_view("b").unwrap().brands, Vec::<String>::new());
}

#[test]
fn connect_similar_brands_is_symmetric() {
    let mut net = network(&["X", "Y", "Z"], &[]);
    net.connect_similar_brands("X", "Y").unwrap();

    let catalog = net.catalog();
    let (x, y) = (catalog.index_of("X").unwrap(), catalog.index_of("Y").unwrap());
    assert!(catalog.is_similar(x, y));
    assert!(catalog.is_similar(y, x));

    let err = net.connect_similar_brands("X", "nope").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    let z = net.catalog().index_of("Z").unwrap();
    assert!(!net.catalog().is_similar(x, z));
    assert_eq!(net.brand_view("X").unwrap().similar, vec!["Y"]);
}

#[test]
fn friend_suggestion_tie_picks_greatest_name() {
    let mut net = network(&["b0", "b1"], &["me", "Zed", "Amy"]);
    for user in ["me", "Zed", "Amy"] {
        net.follow_brand(user, "b1").unwrap();
    }
    let pick = net.suggested_friend("me").unwrap().map(User::name);
    assert_eq!(pick, Some("Zed"));
}

#[test]
fn add_suggested_friends_stops_when_candidates_run_out() {
    let mut net = network(&["b0"], &["me", "a", "b"]);
    assert_eq!(net.add_suggested_friends("me", 5).unwrap(), 2);
    assert_eq!(friends(&net, "me"), vec!["a", "b"]);
    assert!(net.suggested_friend("me").unwrap().is_none());
}

#[test]
fn follow_suggested_brands_never_repeats_and_is_bounded() {
    let mut net = network(&["alpha", "beta", "gamma", "delta", "omega"], &["me"]);
    net.connect_similar_brands("alpha", "delta").unwrap();
    net.follow_brand("me", "alpha").unwrap();
    net.follow_brand("me", "omega").unwrap();

    let before: Vec<String> = net.user_view("me").unwrap().brands;
    let followed = net.follow_suggested_brands("me", 2).unwrap();
    assert_eq!(followed, 2);

    let after = net.user_view("me").unwrap().brands;
    assert_eq!(after.len(), before.len() + followed);
    assert!(is_sorted(&after));
    // delta is similar to alpha, then gamma wins the zero-similarity tie over beta
    assert!(after.contains(&"delta".to_string()));
    assert!(after.contains(&"gamma".to_string()));

    // Only beta is left
    assert_eq!(net.follow_suggested_brands("me", 4).unwrap(), 1);
    assert_eq!(net.follow_suggested_brands("me", 4).unwrap(), 0);
}

#[test]
fn rejected_operations_report_their_kind() {
    let mut net = network(&["b0"], &["amy"]);
    assert_eq!(net.create_user("amy").unwrap_err().kind(), ErrorKind::AlreadyExists);
    assert_eq!(net.delete_user("ghost").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(net.remove_friend("amy", "ghost").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(net.follow_brand("amy", "nope").unwrap_err().kind(), ErrorKind::InvalidArgument);
    assert_eq!(net.unfollow_brand("amy", "b0").unwrap_err().kind(), ErrorKind::NotFound);
    assert_eq!(
        net.unfollow_brand("amy", "nope").unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(
        net.follow_suggested_brands("amy", 0).unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
    assert_eq!(net.mutual_friends("amy", "ghost").unwrap_err().kind(), ErrorKind::NotFound);
}

#[test]
fn connection_path_follows_friendships() {
    let mut net = network(&["b0"], &["a", "b", "c", "d"]);
    net.add_friend("a", "b").unwrap();
    net.add_friend("b", "c").unwrap();
    net.add_friend("c", "d").unwrap();

    let path = net.connection_path("a", "d").unwrap().unwrap();
    assert_eq!(path, vec!["a", "b", "c", "d"]);
    assert_eq!(path.len() - 1, net.degrees_of_connection("a", "d").unwrap().unwrap());
}
