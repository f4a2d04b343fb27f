/// Breadth of a data pull: every variation, one item's variations, or a
/// single variation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Item(u64),
    Variation { item: u64, variation: u64 },
}

impl Scope {
    /// Variation listing route, attribute values included.
    pub fn route(&self) -> String {
        let base = match self {
            Scope::All => "/rest/items/variations".to_string(),
            Scope::Item(item) => format!("/rest/items/{}/variations", item),
            Scope::Variation { item, variation } => {
                format!("/rest/items/{}/variations/{}", item, variation)
            }
        };
        format!("{}?with=variationAttributeValues", base)
    }

    /// Short name used in log output and export file names.
    pub fn label(&self) -> &'static str {
        match self {
            Scope::All => "all",
            Scope::Item(_) => "item",
            Scope::Variation { .. } => "variation",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_for_all() {
        assert_eq!(
            Scope::All.route(),
            "/rest/items/variations?with=variationAttributeValues"
        );
    }

    #[test]
    fn test_route_for_item() {
        assert_eq!(
            Scope::Item(123).route(),
            "/rest/items/123/variations?with=variationAttributeValues"
        );
    }

    #[test]
    fn test_route_for_variation() {
        let scope = Scope::Variation {
            item: 123,
            variation: 4567,
        };
        assert_eq!(
            scope.route(),
            "/rest/items/123/variations/4567?with=variationAttributeValues"
        );
        assert_eq!(scope.label(), "variation");
    }
}
