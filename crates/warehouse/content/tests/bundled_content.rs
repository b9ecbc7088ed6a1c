use std::fs;
use std::path::Path;

use warehouse_content::{ContentFactory, ItemLoader, TablesLoader, bundled_data_dir};
use warehouse_core::options::{Element, SocketDescription, decode_socket_options};
use warehouse_core::{
    ItemClass, ItemId, ItemOracle, LegacyLayout, MaskPolicy, SocketSlot, WarehouseConfig,
    decode_options,
};

#[test]
fn bundled_data_directory_loads() {
    let bundle = ContentFactory::new(bundled_data_dir())
        .load_all()
        .expect("bundled content should load");

    assert_eq!(bundle.config, WarehouseConfig::default());
    let wings = bundle
        .items
        .definition(ItemId::from_parts(12, 36))
        .expect("Wings of Storm in catalog");
    assert_eq!((wings.width, wings.height), (4, 3));

    let env = bundle.env();
    assert!(env.items().is_ok());
    assert!(env.tables().is_ok());
}

#[test]
fn bundled_tables_carry_dashboard_wording() {
    let tables = TablesLoader::load(&bundled_data_dir().join(ContentFactory::TABLES_FILE))
        .expect("tables should load");

    let weapon = decode_options(7, ItemClass::Weapon, &tables).expect("legal mask");
    assert_eq!(
        weapon,
        vec![
            "Obtains (Mana/8) when monster is killed",
            "Obtains (Life/8) when monster is killed",
            "Increase 7 Attack (Wizardy) speed",
        ]
    );

    let sockets = decode_socket_options(
        [
            SocketSlot::Seed(234),
            SocketSlot::Seed(215),
            SocketSlot::Empty,
            SocketSlot::NoSlot,
            SocketSlot::NoSlot,
        ],
        &tables,
    );
    assert_eq!(
        sockets[0],
        SocketDescription::Seed {
            element: Element::Earth,
            text: "Strength Increases +11"
        }
    );
    // 215 is not a known seed
    assert_eq!(sockets[1], SocketDescription::UnknownEffect(215));
}

#[test]
fn config_file_overrides_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    fs::write(
        dir.path().join(ContentFactory::CONFIG_FILE),
        "legacy_layout = \"luck_then_skill\"\n",
    )
    .expect("write config");

    let config = ContentFactory::new(dir.path())
        .load_config()
        .expect("config should parse");
    assert_eq!(config.legacy_layout, LegacyLayout::LuckThenSkill);
    assert_eq!(config.mask_policy, MaskPolicy::Normalize);
}

#[test]
fn missing_config_file_uses_defaults() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config = ContentFactory::new(dir.path())
        .load_config()
        .expect("defaults");
    assert_eq!(config, WarehouseConfig::default());
}

#[test]
fn catalog_rejects_duplicates_and_oversized_items() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("items.ron");

    fs::write(
        &path,
        r#"(items: [(id: 5, name: "Blade", width: 1, height: 3), (id: 5, name: "Copy", width: 1, height: 1)])"#,
    )
    .expect("write catalog");
    let error = ItemLoader::load(&path).expect_err("duplicate id");
    assert!(error.to_string().contains("duplicate item id"));

    fs::write(
        &path,
        r#"(items: [(id: 9, name: "Banner", width: 9, height: 1)])"#,
    )
    .expect("write catalog");
    assert!(ItemLoader::load(&path).is_err());

    fs::write(
        &path,
        r#"(items: [(id: 9, name: "Banner", width: 2, height: 4)])"#,
    )
    .expect("write catalog");
    let catalog = ItemLoader::load(&path).expect("valid catalog");
    assert_eq!(
        catalog.definition(ItemId(9)).map(|d| d.max_durability),
        Some(0)
    );
}

#[test]
fn tables_must_list_six_excellent_options_per_class() {
    let dir = tempfile::tempdir().expect("temp dir");
    let path = dir.path().join("option_tables.ron");
    fs::write(
        &path,
        r#"(
            excellent: (weapon: ["a"], armor: [], accessory: []),
            wing_effects: {},
            socket_effects: {},
            mastery_bonuses: {},
        )"#,
    )
    .expect("write tables");

    let error = TablesLoader::load(&path).expect_err("short excellent table");
    assert!(error.to_string().contains("excellent table"));
}

#[test]
fn missing_files_report_their_path() {
    let error = ItemLoader::load(Path::new("/nonexistent/items.ron")).expect_err("no file");
    assert!(error.to_string().contains("/nonexistent/items.ron"));
}
