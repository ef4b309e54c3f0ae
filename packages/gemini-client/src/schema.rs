//! Response schemas for Gemini structured output.
//!
//! Gemini constrains JSON output with an OpenAPI-style schema passed in
//! `generationConfig.responseSchema`. The dialect is a small subset: type
//! names are uppercase strings ("STRING", "OBJECT", ...), `required` lists
//! only the truly mandatory properties, and property order is significant
//! because the model sees it.
//!
//! # Example
//!
//! ```rust,ignore
//! use gemini_client::Schema;
//!
//! let schema = Schema::object()
//!     .property("name", Schema::string().describe("The person's name"))
//!     .property("age", Schema::integer())
//!     .required(["name"]);
//! ```

use indexmap::IndexMap;
use serde::Serialize;

/// Schema value type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    String,
    Number,
    Integer,
    Boolean,
    Array,
    Object,
}

/// A Gemini response schema node.
///
/// Property insertion order is preserved so the schema reads to the model in
/// the order fields were declared.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, Schema>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,

    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_values: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub nullable: Option<bool>,
}

impl Schema {
    fn new(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            description: None,
            properties: None,
            required: None,
            items: None,
            enum_values: None,
            nullable: None,
        }
    }

    /// A string schema.
    pub fn string() -> Self {
        Self::new(SchemaType::String)
    }

    /// A number schema.
    pub fn number() -> Self {
        Self::new(SchemaType::Number)
    }

    /// An integer schema.
    pub fn integer() -> Self {
        Self::new(SchemaType::Integer)
    }

    /// A boolean schema.
    pub fn boolean() -> Self {
        Self::new(SchemaType::Boolean)
    }

    /// An object schema with no properties yet.
    pub fn object() -> Self {
        Self::new(SchemaType::Object)
    }

    /// An array schema with the given item schema.
    pub fn array(items: Schema) -> Self {
        let mut schema = Self::new(SchemaType::Array);
        schema.items = Some(Box::new(items));
        schema
    }

    /// A string schema restricted to the given values.
    pub fn enumeration(values: impl IntoIterator<Item = impl Into<String>>) -> Self {
        let mut schema = Self::new(SchemaType::String);
        schema.enum_values = Some(values.into_iter().map(Into::into).collect());
        schema
    }

    /// Set the description shown to the model for this node.
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Add a named property (object schemas).
    pub fn property(mut self, name: impl Into<String>, schema: Schema) -> Self {
        self.properties
            .get_or_insert_with(IndexMap::new)
            .insert(name.into(), schema);
        self
    }

    /// Set the list of required property names.
    pub fn required(mut self, names: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.required = Some(names.into_iter().map(Into::into).collect());
        self
    }

    /// Mark this node as nullable.
    pub fn nullable(mut self) -> Self {
        self.nullable = Some(true);
        self
    }
}
