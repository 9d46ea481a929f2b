use std::fs;
use std::path::Path;

use item_content::{CatalogLoader, ConfigLoader, ContentFactory, TemplateLoader};
use item_core::{
    BuilderConfig, DecorationState, ItemBuilder, ItemFlags, ItemPlatform, Material, MaterialShape,
    NamedColor, PlatformError, TextDecoration,
};
use tempfile::TempDir;
use uuid::Uuid;

const MATERIALS: &str = r#"
[[materials]]
key = "stone"

[[materials]]
key = "minecraft:diamond_sword"
max_stack = 1

[[materials]]
key = "player_head"
shape = "head"
"#;

const TEMPLATES: &str = r#"
(
    items: {
        "close_button": (
            kind: "barrier",
            name: Some("Close"),
            lore: Some(["Click to\nclose", "the menu"]),
        ),
        "owner_head": (
            kind: "player_head",
            name: Some("Owner"),
            skull_owner: Some((
                id: "069a79f4-44e9-4726-a5be-fca90e38aaf5",
                name: Some("Notch"),
            )),
            glowing: true,
        ),
        "stone_stack": (
            kind: "stone",
            amount: Some(32),
            custom_model_data: Some(7),
        ),
    },
)
"#;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn write(dir: &Path, name: &str, content: &str) {
    fs::write(dir.join(name), content).expect("write fixture");
}

fn data_dir() -> TempDir {
    let dir = tempfile::tempdir().expect("create temp dir");
    write(dir.path(), ContentFactory::CATALOG_FILE, MATERIALS);
    write(dir.path(), ContentFactory::TEMPLATES_FILE, TEMPLATES);
    dir
}

#[test]
fn catalog_loads_specs_from_toml() {
    init_tracing();
    let dir = data_dir();

    let catalog = CatalogLoader::load(&dir.path().join(ContentFactory::CATALOG_FILE))
        .expect("catalog should load");

    assert_eq!(catalog.len(), 3);
    let sword = catalog.get(&Material::new("diamond_sword")).unwrap();
    assert_eq!(sword.max_stack, 1);
    let stone = catalog.get(&Material::new("stone")).unwrap();
    assert_eq!(stone.max_stack, 64);
    assert_eq!(stone.shape, MaterialShape::Item);
    let head = catalog.get(&Material::new("player_head")).unwrap();
    assert_eq!(head.shape, MaterialShape::Head);
}

#[test]
fn catalog_rejects_zero_stack_size() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        "bad.toml",
        "[[materials]]\nkey = \"stone\"\nmax_stack = 0\n",
    );

    let err = CatalogLoader::load(&dir.path().join("bad.toml")).unwrap_err();
    assert!(err.to_string().contains("max_stack 0"));
}

#[test]
fn catalog_rejects_empty_file() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "empty.toml", "");

    let err = CatalogLoader::load(&dir.path().join("empty.toml")).unwrap_err();
    assert!(err.to_string().contains("empty"));
}

#[test]
fn catalog_reports_parse_errors_with_path() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write(dir.path(), "broken.toml", "[[materials]\nkey = ");

    let err = CatalogLoader::load(&dir.path().join("broken.toml")).unwrap_err();
    assert!(err.to_string().contains("broken.toml"));
}

#[test]
fn config_loads_italics_policy() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();
    write(
        dir.path(),
        ContentFactory::CONFIG_FILE,
        "remove_parent_italics = false\n",
    );

    let config = ConfigLoader::load(&dir.path().join(ContentFactory::CONFIG_FILE)).unwrap();
    assert_eq!(config, BuilderConfig::with_remove_parent_italics(false));

    write(dir.path(), "blank.toml", "");
    let config = ConfigLoader::load(&dir.path().join("blank.toml")).unwrap();
    assert_eq!(config, BuilderConfig::default());
}

#[test]
fn templates_load_from_ron() {
    init_tracing();
    let dir = data_dir();

    let templates = TemplateLoader::load(&dir.path().join(ContentFactory::TEMPLATES_FILE))
        .expect("templates should load");

    assert_eq!(templates.len(), 3);
    let close = templates.get("close_button").unwrap();
    assert_eq!(close.kind, Material::new("barrier"));
    assert!(!close.glowing);
}

#[test]
fn rich_template_text_keeps_explicit_italic() {
    init_tracing();
    let dir = data_dir();
    write(
        dir.path(),
        "rich.ron",
        r#"
(
    items: {
        "shop": (
            kind: "stone",
            name: Some((
                content: "Shop",
                style: (color: Some(red), decorations: { italic: true }),
            )),
            lore: Some([
                "Buy\nthings",
                (content: "Sale", style: (decorations: { bold: true })),
            ]),
        ),
    },
)
"#,
    );

    let templates = TemplateLoader::load(&dir.path().join("rich.ron")).expect("rich text parses");
    let platform = ContentFactory::new(dir.path()).load_platform().unwrap();
    let stack = templates
        .build("shop", &platform, &BuilderConfig::default())
        .unwrap()
        .unwrap();

    let meta = stack.clone_meta();
    let name = meta.display_name().unwrap();
    assert_eq!(name.plain_text(), "Shop");
    assert_eq!(name.style().color, Some(NamedColor::Red));
    assert_eq!(name.decoration(TextDecoration::Italic), DecorationState::True);

    let lore = meta.lore().unwrap();
    assert_eq!(lore[0].plain_text(), "Buythings");
    assert_eq!(lore[1].decoration(TextDecoration::Bold), DecorationState::True);
    assert_eq!(lore[1].decoration(TextDecoration::Italic), DecorationState::False);
}

#[test]
fn factory_builds_items_end_to_end() {
    init_tracing();
    let dir = data_dir();
    let factory = ContentFactory::new(dir.path());

    let config = factory.load_config().unwrap();
    let platform = factory.load_platform().unwrap();
    let templates = factory.load_templates().unwrap();

    let head = templates
        .build("owner_head", &platform, &config)
        .unwrap()
        .expect("player_head is in the catalog");
    let meta = platform.item_meta(&head);
    let owner = meta.skull().unwrap().owning_player().unwrap();
    assert_eq!(
        owner.id,
        Uuid::parse_str("069a79f4-44e9-4726-a5be-fca90e38aaf5").unwrap()
    );
    assert_eq!(meta.enchants().len(), 1);
    assert!(meta.has_flags(ItemFlags::HIDE_ENCHANTS));

    let stones = templates
        .build("stone_stack", &platform, &config)
        .unwrap()
        .unwrap();
    assert_eq!(stones.amount(), 32);
    assert_eq!(stones.clone_meta().custom_model_data(), 7);

    // barrier is not part of this catalog
    let close = templates.build("close_button", &platform, &config).unwrap();
    assert_eq!(
        close.unwrap_err(),
        PlatformError::InvalidKind(Material::new("barrier"))
    );
}

#[test]
fn loaded_platform_drives_builder() {
    init_tracing();
    let dir = data_dir();
    let platform = ContentFactory::new(dir.path()).load_platform().unwrap();

    let mut builder = ItemBuilder::new(&platform, "stone").unwrap();
    builder.set_name(Some("Cobble".into())).unwrap();
    builder.set_skull_owner(None).unwrap();

    let name = builder.name().unwrap();
    assert_eq!(name.plain_text(), "Cobble");
    assert_eq!(name.decoration(TextDecoration::Italic), DecorationState::False);
    assert!(builder.skull_owner().is_none());

    assert!(matches!(
        ItemBuilder::with_amount(&platform, "diamond_sword", 2),
        Err(PlatformError::AmountOutOfRange { max: 1, .. })
    ));
}
