//! Response schema descriptors
//!
//! The output shape declared to the model for structured requests. Each
//! descriptor is built once and reused for every call.

use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use serde::Serialize;

/// Schema node type, in Gemini's upper-case spelling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum SchemaType {
    /// JSON string
    String,
    /// JSON number
    Number,
    /// JSON array
    Array,
    /// JSON object
    Object,
}

/// A (subset of an) OpenAPI schema as accepted by `responseSchema`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Schema {
    /// Node type
    #[serde(rename = "type")]
    pub kind: SchemaType,
    /// Hint for the model
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Element schema for arrays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<Schema>>,
    /// Object properties
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<String, Schema>,
    /// Mandatory object properties
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    /// Declaration order of the properties
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub property_ordering: Vec<String>,
}

impl Schema {
    fn leaf(kind: SchemaType, description: &str) -> Self {
        Self {
            kind,
            description: Some(description.to_string()),
            items: None,
            properties: BTreeMap::new(),
            required: Vec::new(),
            property_ordering: Vec::new(),
        }
    }

    /// String node
    pub fn string(description: &str) -> Self {
        Self::leaf(SchemaType::String, description)
    }

    /// Number node
    pub fn number(description: &str) -> Self {
        Self::leaf(SchemaType::Number, description)
    }

    /// Array of strings
    pub fn string_list(description: &str) -> Self {
        Self {
            items: Some(Box::new(Self {
                description: None,
                ..Self::leaf(SchemaType::String, "")
            })),
            ..Self::leaf(SchemaType::Array, description)
        }
    }

    /// Empty object node
    pub fn object() -> Self {
        Self {
            description: None,
            ..Self::leaf(SchemaType::Object, "")
        }
    }

    /// Add a required property, keeping declaration order
    pub fn required_property(mut self, name: &str, schema: Schema) -> Self {
        self.properties.insert(name.to_string(), schema);
        self.required.push(name.to_string());
        self.property_ordering.push(name.to_string());
        self
    }
}

/// Declared shape of `LunarDetails`: eight required fields
pub static LUNAR_DETAILS_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::object()
        .required_property(
            "lunarDate",
            Schema::string("Lunar day/month (e.g. 15/01)"),
        )
        .required_property(
            "lunarYear",
            Schema::string("Stem-branch year name (e.g. Giap Thin)"),
        )
        .required_property("element", Schema::string("Five-element classification of the day"))
        .required_property("luckyHours", Schema::string_list("Auspicious hours of the day"))
        .required_property("badHours", Schema::string_list("Inauspicious hours of the day"))
        .required_property("advice", Schema::string("General advice for the day"))
        .required_property("auspicious", Schema::string_list("3 recommended activities"))
        .required_property("inauspicious", Schema::string_list("3 activities to avoid"))
});

/// Declared shape of `CompatibilityResult`: four required fields
pub static COMPATIBILITY_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::object()
        .required_property("score", Schema::number("Compatibility score (0-100)"))
        .required_property("summary", Schema::string("Short conclusion (1 sentence)"))
        .required_property(
            "details",
            Schema::string("Detailed analysis of personality and harmony"),
        )
        .required_property(
            "elementAnalysis",
            Schema::string("Analysis of generating and overcoming five-element cycles"),
        )
});
