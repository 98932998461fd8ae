//! Schema-and-relationship graph for table scaffolding
//!
//! The generator never inspects a live database or model objects. Callers
//! hand it a plain-data snapshot of the schema, loaded from a JSON file:
//!
//! ```json
//! {
//!   "tables": [
//!     {
//!       "name": "posts",
//!       "columns": [
//!         {"name": "id", "type": "bigint", "auto_increment": true},
//!         {"name": "title", "type": "string"},
//!         {"name": "user_id", "type": "bigint"}
//!       ],
//!       "belongs_to": [
//!         {"column": "user_id", "table": "users"}
//!       ]
//!     }
//!   ]
//! }
//! ```
//!
//! `belongs_to` edges are optional; when absent, `*_id` columns are resolved
//! heuristically by pluralizing the column stem and looking the result up in
//! the graph.

use anyhow::{Context, Result};
use inflector::Inflector;
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::fs;
use std::path::Path;

/// Resolved column type, normalized from database-specific type names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnType {
    /// Boolean flag
    Boolean,
    /// Fixed-length character string
    Char,
    /// Variable-length character string
    String,
    /// Unbounded text
    Text,
    /// 32-bit integer
    Integer,
    /// 64-bit integer
    BigInt,
    /// Arbitrary-precision decimal
    Decimal,
    /// 32-bit float
    Float,
    /// 64-bit float
    Double,
    /// Monetary amount
    Money,
    /// Date without time
    Date,
    /// Date and time without timezone
    DateTime,
    /// Date and time with timezone
    Timestamp,
    /// JSON document
    Json,
    /// UUID
    Uuid,
    /// Anything the parser does not recognize
    Unknown,
}

impl ColumnType {
    /// Parse a type name as reported by a schema dump.
    ///
    /// Parsing is total: unrecognized names map to [`ColumnType::Unknown`]
    /// rather than failing, so a schema file with exotic column types still
    /// loads.
    ///
    /// # Examples
    ///
    /// ```
    /// # use admin_scaffold::schema::ColumnType;
    /// assert_eq!(ColumnType::parse("varchar"), ColumnType::String);
    /// assert_eq!(ColumnType::parse("jsonb"), ColumnType::Json);
    /// assert_eq!(ColumnType::parse("geometry"), ColumnType::Unknown);
    /// ```
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw.to_lowercase().as_str() {
            "boolean" | "bool" => Self::Boolean,
            "char" | "character" => Self::Char,
            "string" | "varchar" => Self::String,
            "text" | "mediumtext" | "longtext" => Self::Text,
            "integer" | "int" | "smallint" | "tinyint" => Self::Integer,
            "bigint" | "biginteger" => Self::BigInt,
            "decimal" | "numeric" => Self::Decimal,
            "float" | "real" => Self::Float,
            "double" => Self::Double,
            "money" => Self::Money,
            "date" => Self::Date,
            "datetime" => Self::DateTime,
            "timestamp" | "timestamptz" => Self::Timestamp,
            "json" | "jsonb" => Self::Json,
            "uuid" | "guid" => Self::Uuid,
            _ => Self::Unknown,
        }
    }

    /// Whether this type holds short human-readable text (string or char).
    #[must_use]
    pub const fn is_textual(self) -> bool {
        matches!(self, Self::Char | Self::String)
    }

    /// Whether this type belongs to the numeric family.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Integer | Self::BigInt | Self::Decimal | Self::Float | Self::Double | Self::Money
        )
    }
}

impl<'de> Deserialize<'de> for ColumnType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

impl fmt::Display for ColumnType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Boolean => "boolean",
            Self::Char => "char",
            Self::String => "string",
            Self::Text => "text",
            Self::Integer => "integer",
            Self::BigInt => "bigint",
            Self::Decimal => "decimal",
            Self::Float => "float",
            Self::Double => "double",
            Self::Money => "money",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Timestamp => "timestamp",
            Self::Json => "json",
            Self::Uuid => "uuid",
            Self::Unknown => "unknown",
        };
        write!(f, "{name}")
    }
}

/// Schema-level metadata for one table column.
#[derive(Debug, Clone, Deserialize)]
pub struct ColumnDescriptor {
    /// Column name
    pub name: String,
    /// Resolved column type
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    /// Whether the column accepts NULL
    #[serde(default)]
    pub nullable: bool,
    /// Whether the column is auto-incrementing
    #[serde(default)]
    pub auto_increment: bool,
}

/// An explicit owning-side relationship edge declared in the schema file.
#[derive(Debug, Clone, Deserialize)]
pub struct BelongsTo {
    /// Foreign key column on the owning table
    pub column: String,
    /// Referenced table name
    pub table: String,
    /// Relationship name; defaults to the column name without its `_id` suffix
    #[serde(default)]
    pub name: Option<String>,
}

impl BelongsTo {
    /// The name the relationship is addressed by in generated code.
    #[must_use]
    pub fn relationship_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| {
            self.column
                .strip_suffix("_id")
                .unwrap_or(&self.column)
                .to_string()
        })
    }
}

/// One table's columns and declared relationships.
#[derive(Debug, Clone, Deserialize)]
pub struct TableSchema {
    /// Table name
    pub name: String,
    /// Columns in schema order
    #[serde(default)]
    pub columns: Vec<ColumnDescriptor>,
    /// Explicit owning-side relationship edges
    #[serde(default)]
    pub belongs_to: Vec<BelongsTo>,
}

impl TableSchema {
    /// Guess the column that best labels a row of this table.
    ///
    /// Candidates are checked in order and must be textual columns; when
    /// none matches, the primary key name is used (the first auto-increment
    /// column, or `id`).
    #[must_use]
    pub fn title_column(&self, candidates: &[String]) -> &str {
        for candidate in candidates {
            let found = self
                .columns
                .iter()
                .find(|column| column.column_type.is_textual() && &column.name == candidate);
            if let Some(column) = found {
                return &column.name;
            }
        }

        self.columns
            .iter()
            .find(|column| column.auto_increment)
            .map_or("id", |column| column.name.as_str())
    }
}

/// A `*_id` column resolved to its owning-side relationship.
#[derive(Debug)]
pub struct ResolvedBelongsTo<'a> {
    /// Relationship name used in the display path
    pub name: String,
    /// Schema of the referenced table
    pub target: &'a TableSchema,
}

/// The full schema snapshot the generator works against.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemaGraph {
    /// All known tables
    #[serde(default)]
    pub tables: Vec<TableSchema>,
}

impl SchemaGraph {
    /// Load a schema graph from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or does not parse as a
    /// schema description.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read schema file: {}", path.display()))?;
        Self::from_json(&raw)
            .with_context(|| format!("Failed to parse schema file: {}", path.display()))
    }

    /// Parse a schema graph from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not a valid schema description.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Invalid schema JSON")
    }

    /// Look up a table by name.
    #[must_use]
    pub fn table(&self, name: &str) -> Option<&TableSchema> {
        self.tables.iter().find(|table| table.name == name)
    }

    /// Resolve a foreign key column to its owning-side relationship.
    ///
    /// An explicit `belongs_to` edge on the table wins; otherwise the column
    /// stem (name without `_id`) is pluralized and looked up as a table name.
    /// Returns `None` when neither resolves to a table in the graph.
    #[must_use]
    pub fn belongs_to(&self, table: &TableSchema, column: &str) -> Option<ResolvedBelongsTo<'_>> {
        if let Some(edge) = table.belongs_to.iter().find(|edge| edge.column == column) {
            let target = self.table(&edge.table)?;
            return Some(ResolvedBelongsTo {
                name: edge.relationship_name(),
                target,
            });
        }

        let stem = column.strip_suffix("_id")?;
        let target = self.table(&stem.to_plural())?;
        Some(ResolvedBelongsTo {
            name: stem.to_string(),
            target,
        })
    }
}
