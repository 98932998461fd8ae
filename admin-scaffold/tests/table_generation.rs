//! Integration tests for schema-driven table generation

use admin_scaffold::{ClassifierConfig, ResourceOptions, SchemaGraph, TableGenerator};
use std::fs;
use tempfile::TempDir;

const SHOP_SCHEMA: &str = r#"{
    "tables": [
        {
            "name": "users",
            "columns": [
                {"name": "id", "type": "bigint", "auto_increment": true},
                {"name": "name", "type": "varchar"},
                {"name": "email", "type": "varchar"},
                {"name": "password", "type": "varchar"},
                {"name": "remember_token", "type": "varchar", "nullable": true}
            ]
        },
        {
            "name": "products",
            "columns": [
                {"name": "id", "type": "bigint", "auto_increment": true},
                {"name": "sku", "type": "varchar"},
                {"name": "name", "type": "varchar"},
                {"name": "description", "type": "text"},
                {"name": "cover_image", "type": "varchar", "nullable": true},
                {"name": "price", "type": "decimal"},
                {"name": "stock", "type": "integer"},
                {"name": "is_active", "type": "boolean"},
                {"name": "user_id", "type": "bigint"},
                {"name": "metadata", "type": "jsonb", "nullable": true},
                {"name": "released_on", "type": "date", "nullable": true},
                {"name": "created_at", "type": "timestamp"},
                {"name": "deleted_at", "type": "timestamp", "nullable": true}
            ]
        }
    ]
}"#;

/// Write the fixture schema to disk and load it back, as the CLI does.
fn load_schema(dir: &TempDir) -> SchemaGraph {
    let path = dir.path().join("schema.json");
    fs::write(&path, SHOP_SCHEMA).unwrap();
    SchemaGraph::load(&path).unwrap()
}

#[test]
fn test_full_table_body_for_products() {
    let dir = TempDir::new().unwrap();
    let graph = load_schema(&dir);

    let options = ResourceOptions {
        soft_deletable: true,
        view_operation: true,
        ..ResourceOptions::default()
    };
    let mut generator = TableGenerator::new(&graph, options);
    let body = generator.table_body("products");

    let expected = "\
Table::builder()
    .columns([
        TextColumn::make(\"sku\")
            .label(\"SKU\")
            .searchable(),
        TextColumn::make(\"name\")
            .searchable(),
        ImageColumn::make(\"cover_image\"),
        TextColumn::make(\"price\")
            .money()
            .sortable(),
        TextColumn::make(\"stock\")
            .numeric()
            .sortable(),
        IconColumn::make(\"is_active\")
            .boolean(),
        TextColumn::make(\"user.name\")
            .numeric()
            .sortable(),
        TextColumn::make(\"released_on\")
            .date()
            .sortable(),
        TextColumn::make(\"created_at\")
            .date_time()
            .sortable()
            .toggleable(true),
        TextColumn::make(\"deleted_at\")
            .date_time()
            .sortable()
            .toggleable(true),
    ])
    .filters([
        TrashedFilter::make(),
    ])
    .record_actions([
        ViewAction::make(),
        EditAction::make(),
    ])
    .bulk_actions([
        BulkActionGroup::make([
            DeleteBulkAction::make(),
            ForceDeleteBulkAction::make(),
            RestoreBulkAction::make(),
        ]),
    ])";

    assert_eq!(body, expected);
}

#[test]
fn test_users_table_drops_credentials() {
    let dir = TempDir::new().unwrap();
    let graph = load_schema(&dir);

    let mut generator = TableGenerator::new(&graph, ResourceOptions::default());
    let columns = generator.table_columns("users");
    let paths: Vec<_> = columns
        .iter()
        .map(|column| column.display_path.as_str())
        .collect();

    assert_eq!(paths, vec!["name", "email"]);
}

#[test]
fn test_imports_match_rendered_body() {
    let dir = TempDir::new().unwrap();
    let graph = load_schema(&dir);

    let options = ResourceOptions {
        soft_deletable: true,
        ..ResourceOptions::default()
    };
    let mut generator = TableGenerator::new(&graph, options);
    let body = generator.table_body("products");

    for symbol in generator.imports().symbols() {
        assert!(body.contains(symbol), "unreferenced import: {symbol}");
    }
}

#[test]
fn test_policy_override_changes_title_guess() {
    let dir = TempDir::new().unwrap();
    let graph = load_schema(&dir);

    let config = ClassifierConfig {
        title_column_candidates: vec!["email".to_string()],
        ..ClassifierConfig::default()
    };
    let mut generator =
        TableGenerator::with_config(&graph, ResourceOptions::default(), config);
    let columns = generator.table_columns("products");

    assert!(columns
        .iter()
        .any(|column| column.display_path == "user.email"));
}

#[test]
fn test_unknown_table_renders_empty_sections() {
    let dir = TempDir::new().unwrap();
    let graph = load_schema(&dir);

    let mut generator = TableGenerator::new(&graph, ResourceOptions::default());
    let body = generator.table_body("orders");

    assert!(body.contains(".columns([\n        //\n    ])"));
    // actions are still emitted for a missing table
    assert!(body.contains("EditAction::make(),"));
}
