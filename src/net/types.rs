//! Wire schemas for the ingredient endpoints.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Which macro set a record displays: per-100g or per-serving.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitType {
    #[default]
    Grams,
    Servings,
}

/// One ingredient's nutrition profile as returned by the server.
///
/// Per-serving fields are meaningful only when `serving_size_grams > 0`;
/// [`IngredientRecord::display_macros`] applies the fallback rule.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IngredientRecord {
    pub id: i64,
    pub name: String,
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
    pub serving_size_grams: f64,
    pub serving_calories: f64,
    pub serving_protein: f64,
    pub serving_fat: f64,
    pub serving_carbohydrates: f64,
    pub added_by_image: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(default)]
    pub unit_type: UnitType,
}

/// The macro quantities a record should render with.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Macros {
    pub calories: f64,
    pub protein: f64,
    pub fat: f64,
    pub carbohydrates: f64,
}

impl IngredientRecord {
    /// Macro set selected by `unit_type`, falling back to the per-100g
    /// values when no valid serving size is present.
    pub fn display_macros(&self) -> Macros {
        if self.unit_type == UnitType::Servings && self.serving_size_grams > 0.0 {
            Macros {
                calories: self.serving_calories,
                protein: self.serving_protein,
                fat: self.serving_fat,
                carbohydrates: self.serving_carbohydrates,
            }
        } else {
            Macros {
                calories: self.calories,
                protein: self.protein,
                fat: self.fat,
                carbohydrates: self.carbohydrates,
            }
        }
    }
}

/// Body of `POST /ingredient/get_ingredient_list`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IngredientListRequest {
    pub name: String,
    pub with_image: bool,
    pub page: u32,
    pub page_size: u32,
}

/// Response of `POST /ingredient/get_ingredient_list`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct IngredientListResponse {
    pub ingredients: Vec<IngredientRecord>,
    pub total_count: u64,
    pub total_pages: u32,
    pub current_page: u32,
    pub page_size: u32,
}

/// Body of `POST /ingredient/add` (manual JSON path).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NewIngredient {
    pub unit_type: UnitType,
    pub name: String,
    pub calories: f64,
    pub fat: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub serving_size_grams: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
}

/// Body of `POST /ingredient/update` — whole-record replace keyed by `id`.
/// An empty `image_base64` clears any stored image.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct IngredientUpdate {
    pub id: i64,
    pub name: String,
    pub calories: f64,
    pub fat: f64,
    pub protein: f64,
    pub carbohydrates: f64,
    pub serving_size_grams: f64,
    pub image_base64: String,
}

/// Body of `POST /ingredient/delete`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct DeleteRequest {
    pub id: i64,
}

/// Confirmation payload of `POST /ingredient/delete`. The server echoes
/// loosely shaped fields; none are required.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DeleteResponse {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub message: Option<String>,
}
