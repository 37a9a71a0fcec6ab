//! Asset catalog bindings.

use crate::types::js_error;
use capsulekit_core::catalog::{
    library_assets, optional_assets, required_assets, store_assets, AssetDefinition,
    ASSET_DEFINITIONS,
};
use wasm_bindgen::prelude::*;

/// Assets in a named group. Unknown groups are empty.
fn group(name: &str) -> Vec<&'static AssetDefinition> {
    match name {
        "all" => ASSET_DEFINITIONS.iter().collect(),
        "required" => required_assets(),
        "optional" => optional_assets(),
        "store" => store_assets(),
        "library" => library_assets(),
        _ => Vec::new(),
    }
}

/// Ids of the assets in `group`: `"all"`, `"required"`, `"optional"`,
/// `"store"` or `"library"`.
#[wasm_bindgen]
pub fn asset_ids(group_name: &str) -> Vec<String> {
    group(group_name).into_iter().map(|a| a.id.to_string()).collect()
}

/// Asset definitions in `group` as an array of plain objects.
#[wasm_bindgen]
pub fn asset_definitions(group_name: &str) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(&group(group_name)).map_err(js_error)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_ids_groups() {
        assert_eq!(asset_ids("all").len(), 14);
        assert_eq!(asset_ids("required").len(), 8);
        assert_eq!(asset_ids("optional").len(), 6);
        assert_eq!(asset_ids("store")[0], "header-capsule");
        assert!(asset_ids("library").contains(&"library-hero".to_string()));
        assert!(asset_ids("everything").is_empty());
    }
}
