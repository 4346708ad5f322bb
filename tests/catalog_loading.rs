use brandgraph::catalog::load_catalog;
use brandgraph::config::CatalogConfig;
use brandgraph::{Config, ErrorKind, SocialNetwork};
use std::io::Write;
use tempfile::NamedTempFile;

const CATALOG: &str = "\
brandZero,brandOne,brandTwo
0,1,0
1,0,0
0,0,0
";

fn catalog_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("temp file");
    write!(file, "{}", contents).expect("write catalog");
    file
}

#[test]
fn loads_catalog_from_disk() {
    let file = catalog_file(CATALOG);
    let catalog = load_catalog(file.path(), 3).unwrap();
    assert_eq!(catalog.names(), &["brandZero", "brandOne", "brandTwo"]);
    assert!(catalog.is_similar(0, 1));
    assert!(!catalog.is_similar(1, 2));
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_catalog(dir.path().join("absent.txt"), 3).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Io);
}

#[test]
fn size_mismatch_is_rejected() {
    let file = catalog_file(CATALOG);
    let err = load_catalog(file.path(), 4).unwrap_err();
    assert_eq!(err.error_code(), "CATALOG_FORMAT");
}

#[test]
fn network_from_config() {
    let file = catalog_file(CATALOG);
    let config = Config {
        catalog: CatalogConfig {
            path: Some(file.path().to_path_buf()),
            size: 3,
        },
        ..Config::default()
    };

    let mut net = SocialNetwork::from_config(&config).unwrap();
    net.create_user("amy").unwrap();
    net.follow_brand("amy", "brandZero").unwrap();
    assert_eq!(net.follow_suggested_brands("amy", 1).unwrap(), 1);
    assert!(net.user("amy").unwrap().follows("brandOne"));
}

#[test]
fn config_file_points_at_catalog() {
    let catalog = catalog_file(CATALOG);
    let mut config_file = NamedTempFile::new().unwrap();
    writeln!(config_file, "[catalog]").unwrap();
    writeln!(config_file, "path = {:?}", catalog.path().display().to_string()).unwrap();
    writeln!(config_file, "size = 3").unwrap();

    let config = Config::from_file(config_file.path()).unwrap();
    let net = SocialNetwork::from_config(&config).unwrap();
    assert_eq!(net.catalog().len(), 3);
}
