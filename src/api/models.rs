use serde::Deserialize;

// Authentication models
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token_type: String,
    pub access_token: String,
}

impl LoginResponse {
    /// Combined header value, e.g. `Bearer eyJ0...`
    pub fn authorization_header(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }
}

// Attribute catalog models
#[derive(Debug, Deserialize)]
pub struct AttributeList {
    #[serde(default)]
    pub entries: Vec<AttributeEntry>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AttributeEntry {
    pub backend_name: String,
    pub id: u32,
}

// Variation models
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VariationEntry {
    pub id: u64,
    #[serde(default)]
    pub number: Option<String>,
    #[serde(default)]
    pub is_main: bool,
    pub item_id: u64,
    #[serde(default)]
    pub variation_attribute_values: Option<Vec<VariationAttributeValue>>,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VariationAttributeValue {
    pub attribute_id: u32,
    pub attribute_value: AttributeValue,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AttributeValue {
    pub backend_name: String,
    pub id: u64,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct VariationPage {
    pub page: u32,
    pub totals_count: u64,
    pub last_page_number: u32,
    #[serde(default)]
    pub entries: Vec<VariationEntry>,
}

/// A single-variation request returns the bare entry without any pagination
/// metadata, while the list routes return a page envelope.
#[derive(Debug, Deserialize, Clone)]
#[serde(untagged)]
pub enum VariationResponse {
    Page(VariationPage),
    Single(VariationEntry),
}

impl VariationResponse {
    /// Normalize both response shapes into a page so the pagination logic
    /// stays uniform.
    pub fn into_page(self) -> VariationPage {
        match self {
            VariationResponse::Page(page) => page,
            VariationResponse::Single(entry) => VariationPage {
                page: 1,
                totals_count: 1,
                last_page_number: 1,
                entries: vec![entry],
            },
        }
    }
}

/// Lenient wrapper for paged routes where only the entry list matters.
#[derive(Debug, Deserialize)]
pub struct VariationEntries {
    #[serde(default)]
    pub entries: Vec<VariationEntry>,
}

// Market SKU models
#[derive(Debug, Deserialize, Clone)]
#[serde(rename_all = "camelCase")]
pub struct MarketSku {
    pub market_id: u64,
    #[serde(default)]
    pub parent_sku: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AttributeValueName {
    #[serde(default)]
    pub name: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_attribute_list_deserialization() {
        let json = r#"{
            "entries": [
                {"backendName": "color", "id": 1},
                {"backendName": "size_name", "id": 2}
            ]
        }"#;
        let list: AttributeList = serde_json::from_str(json).unwrap();
        assert_eq!(list.entries.len(), 2);
        assert_eq!(list.entries[0].backend_name, "color");
        assert_eq!(list.entries[1].id, 2);
    }

    #[test]
    fn test_variation_response_page_shape() {
        let json = r#"{
            "page": 1,
            "totalsCount": 3,
            "lastPageNumber": 2,
            "entries": [
                {"id": 10, "number": "S-10", "isMain": false, "itemId": 5}
            ]
        }"#;
        let response: VariationResponse = serde_json::from_str(json).unwrap();
        let page = response.into_page();
        assert_eq!(page.page, 1);
        assert_eq!(page.totals_count, 3);
        assert_eq!(page.last_page_number, 2);
        assert_eq!(page.entries[0].id, 10);
        assert!(page.entries[0].variation_attribute_values.is_none());
    }

    #[test]
    fn test_variation_response_single_shape_is_synthesized() {
        // No totalsCount: a single-variation response must become a
        // one-entry, one-page shape without raising.
        let json = r#"{
            "id": 42,
            "number": "S-42",
            "isMain": false,
            "itemId": 7,
            "variationAttributeValues": [
                {"attributeId": 1, "attributeValue": {"backendName": "red", "id": 100}}
            ]
        }"#;
        let response: VariationResponse = serde_json::from_str(json).unwrap();
        let page = response.into_page();
        assert_eq!(page.page, 1);
        assert_eq!(page.totals_count, 1);
        assert_eq!(page.last_page_number, 1);
        assert_eq!(page.entries.len(), 1);
        assert_eq!(page.entries[0].item_id, 7);
        let values = page.entries[0].variation_attribute_values.as_ref().unwrap();
        assert_eq!(values[0].attribute_value.backend_name, "red");
    }

    #[test]
    fn test_market_sku_with_null_parent() {
        let json = r#"[{"marketId": 4, "parentSku": null}, {"marketId": 104, "parentSku": "AB-1"}]"#;
        let skus: Vec<MarketSku> = serde_json::from_str(json).unwrap();
        assert_eq!(skus[0].market_id, 4);
        assert!(skus[0].parent_sku.is_none());
        assert_eq!(skus[1].parent_sku.as_deref(), Some("AB-1"));
    }

    #[test]
    fn test_attribute_value_name_missing_field() {
        let named: AttributeValueName = serde_json::from_str(r#"{"name": "rouge"}"#).unwrap();
        assert_eq!(named.name.as_deref(), Some("rouge"));

        let unnamed: AttributeValueName = serde_json::from_str(r#"{"error": "not found"}"#).unwrap();
        assert!(unnamed.name.is_none());
    }

    #[test]
    fn test_login_response_header() {
        let json = r#"{"token_type": "Bearer", "access_token": "abc123"}"#;
        let login: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(login.authorization_header(), "Bearer abc123");
    }
}
