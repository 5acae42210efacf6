use super::*;

fn sample_record_json() -> &'static str {
    r#"{
        "id": 7,
        "name": "毛豆",
        "calories": 125.0,
        "protein": 11.0,
        "fat": 5.0,
        "carbohydrates": 9.0,
        "serving_size_grams": 80.0,
        "serving_calories": 100.0,
        "serving_protein": 8.8,
        "serving_fat": 4.0,
        "serving_carbohydrates": 7.2,
        "added_by_image": false,
        "unit_type": "grams"
    }"#
}

// =============================================================
// IngredientRecord decoding
// =============================================================

#[test]
fn record_decodes_without_image() {
    let record: IngredientRecord = serde_json::from_str(sample_record_json()).unwrap();
    assert_eq!(record.id, 7);
    assert_eq!(record.name, "毛豆");
    assert_eq!(record.image_base64, None);
    assert_eq!(record.unit_type, UnitType::Grams);
}

#[test]
fn record_decode_fails_on_unknown_unit_type() {
    let json = sample_record_json().replace("\"grams\"", "\"cups\"");
    assert!(serde_json::from_str::<IngredientRecord>(&json).is_err());
}

#[test]
fn record_decode_fails_on_missing_required_field() {
    let json = sample_record_json().replace("\"calories\": 125.0,", "");
    assert!(serde_json::from_str::<IngredientRecord>(&json).is_err());
}

#[test]
fn record_unit_type_defaults_to_grams() {
    let json = sample_record_json().replace(",\n        \"unit_type\": \"grams\"", "");
    let record: IngredientRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(record.unit_type, UnitType::Grams);
}

// =============================================================
// display_macros fallback rule
// =============================================================

#[test]
fn display_macros_uses_per_100g_for_grams_records() {
    let record: IngredientRecord = serde_json::from_str(sample_record_json()).unwrap();
    let macros = record.display_macros();
    assert_eq!(macros.calories, 125.0);
    assert_eq!(macros.protein, 11.0);
}

#[test]
fn display_macros_uses_serving_values_for_servings_records() {
    let mut record: IngredientRecord = serde_json::from_str(sample_record_json()).unwrap();
    record.unit_type = UnitType::Servings;
    let macros = record.display_macros();
    assert_eq!(macros.calories, 100.0);
    assert_eq!(macros.carbohydrates, 7.2);
}

#[test]
fn display_macros_falls_back_when_serving_size_is_zero() {
    let mut record: IngredientRecord = serde_json::from_str(sample_record_json()).unwrap();
    record.unit_type = UnitType::Servings;
    record.serving_size_grams = 0.0;
    let macros = record.display_macros();
    assert_eq!(macros.calories, 125.0);
    assert_eq!(macros.fat, 5.0);
}

// =============================================================
// List request/response wire shape
// =============================================================

#[test]
fn list_request_serializes_documented_field_names() {
    let request = IngredientListRequest {
        name: "奶".to_owned(),
        with_image: false,
        page: 1,
        page_size: 10,
    };
    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(value["name"], "奶");
    assert_eq!(value["with_image"], false);
    assert_eq!(value["page"], 1);
    assert_eq!(value["page_size"], 10);
}

#[test]
fn list_response_decodes_pagination_fields() {
    let json = format!(
        r#"{{
            "ingredients": [{record}],
            "total_count": 15,
            "total_pages": 2,
            "current_page": 1,
            "page_size": 10
        }}"#,
        record = sample_record_json()
    );
    let response: IngredientListResponse = serde_json::from_str(&json).unwrap();
    assert_eq!(response.ingredients.len(), 1);
    assert_eq!(response.total_count, 15);
    assert_eq!(response.total_pages, 2);
    assert_eq!(response.current_page, 1);
}

#[test]
fn list_response_decode_fails_on_missing_totals() {
    let json = r#"{"ingredients": []}"#;
    assert!(serde_json::from_str::<IngredientListResponse>(json).is_err());
}

// =============================================================
// Mutation bodies
// =============================================================

#[test]
fn new_ingredient_omits_absent_image() {
    let body = NewIngredient {
        unit_type: UnitType::Grams,
        name: "鮮奶".to_owned(),
        calories: 63.0,
        fat: 3.6,
        protein: 3.1,
        carbohydrates: 4.8,
        serving_size_grams: Some(240.0),
        image_base64: None,
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["unit_type"], "grams");
    assert!(value.get("image_base64").is_none());
}

#[test]
fn update_keys_record_by_id_and_always_sends_image_field() {
    let body = IngredientUpdate {
        id: 42,
        name: "鮮奶".to_owned(),
        calories: 63.0,
        fat: 3.6,
        protein: 3.1,
        carbohydrates: 4.8,
        serving_size_grams: 240.0,
        image_base64: String::new(),
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["id"], 42);
    assert_eq!(value["image_base64"], "");
}

#[test]
fn delete_response_tolerates_loose_shapes() {
    let response: DeleteResponse = serde_json::from_str("{}").unwrap();
    assert_eq!(response, DeleteResponse::default());

    let response: DeleteResponse =
        serde_json::from_str(r#"{"id": 42, "message": "deleted"}"#).unwrap();
    assert_eq!(response.id, Some(42));
    assert_eq!(response.message.as_deref(), Some("deleted"));
}
