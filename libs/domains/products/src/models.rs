use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, IntoEnumIterator, IntoStaticStr};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

/// Product category
///
/// Each variant has a lowercase tag used on the wire and in `?type=` filters.
/// Tag matching is exact and case-sensitive.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    IntoStaticStr,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ProductType {
    Book,
    Food,
    Gadget,
    Other,
}

impl ProductType {
    /// Canonical lowercase tag, e.g. `"gadget"`.
    pub fn tag(self) -> &'static str {
        self.into()
    }

    /// Parse a tag. Anything other than an exact tag yields `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::iter().find(|candidate| candidate.tag() == tag)
    }
}

/// Product entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    /// Sequential identifier, starting at 1
    pub id: u64,
    pub name: String,
    #[serde(rename = "type")]
    pub product_type: ProductType,
    /// Units in stock
    pub inventory: i32,
    pub cost: f64,
}

impl Product {
    /// Build the entity for a request that already passed validation.
    ///
    /// Returns `None` when a required field is missing.
    pub fn from_request(id: u64, request: ProductRequest) -> Option<Self> {
        Some(Self {
            id,
            name: request.name?,
            product_type: request.product_type?,
            inventory: request.inventory?,
            cost: request.cost?,
        })
    }
}

/// DTO for creating a new product
///
/// Every field is optional at the serde level so that a missing or `null`
/// field is reported as a validation failure rather than a parse failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct ProductRequest {
    #[validate(required, custom(function = "not_blank"))]
    pub name: Option<String>,
    #[serde(rename = "type")]
    #[validate(required)]
    pub product_type: Option<ProductType>,
    #[validate(required)]
    pub inventory: Option<i32>,
    #[validate(required)]
    pub cost: Option<f64>,
}

impl ProductRequest {
    pub fn new(name: impl Into<String>, product_type: ProductType, inventory: i32, cost: f64) -> Self {
        Self {
            name: Some(name.into()),
            product_type: Some(product_type),
            inventory: Some(inventory),
            cost: Some(cost),
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Response body for a successful create
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProductId {
    pub id: u64,
}

/// Query parameters for listing products
///
/// `type` is kept as a raw string: an unknown tag is a distinct error from a
/// known tag with no matches.
#[derive(Debug, Clone, Default, Deserialize, ToSchema, IntoParams)]
pub struct ProductQuery {
    /// Product type tag (book, food, gadget, other)
    #[serde(rename = "type")]
    pub product_type: Option<String>,
}
