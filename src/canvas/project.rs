use serde::{Deserialize, Serialize};

use crate::store::ElementStore;

use super::{ArtboardDimensions, Element};

/// On-disk project format shared by project files and the autosave blob:
/// `{ "elements": [...], "artboardDimensions": { "width", "height" } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedProject {
    pub elements: Vec<Element>,
    #[serde(default)]
    pub artboard_dimensions: ArtboardDimensions,
}

impl SavedProject {
    pub fn capture(store: &ElementStore, artboard: &ArtboardDimensions) -> Self {
        Self {
            elements: store.elements().to_vec(),
            artboard_dimensions: *artboard,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::ElementKind;

    #[test]
    fn test_capture_copies_store_and_artboard() {
        let artboard = ArtboardDimensions::new(1024.0, 768.0);
        let mut store = ElementStore::default();
        store.add_element(ElementKind::Rectangle, &artboard);
        store.add_element(ElementKind::Text, &artboard);

        let project = SavedProject::capture(&store, &artboard);
        assert_eq!(project.elements.as_slice(), store.elements());
        assert_eq!(project.artboard_dimensions, artboard);
    }

    #[test]
    fn test_serialized_shape() {
        let artboard = ArtboardDimensions::new(300.0, 200.0);
        let mut store = ElementStore::default();
        store.add_element(ElementKind::Text, &artboard);

        let json = serde_json::to_value(SavedProject::capture(&store, &artboard)).unwrap();
        assert_eq!(json["artboardDimensions"]["width"], 300.0);
        assert_eq!(json["artboardDimensions"]["height"], 200.0);
        assert_eq!(json["elements"][0]["type"], "text");
        assert_eq!(json["elements"][0]["content"], "New Text");
    }

    #[test]
    fn test_missing_artboard_defaults_on_deserialize() {
        let project: SavedProject = serde_json::from_str(r#"{ "elements": [] }"#).unwrap();
        assert!(project.elements.is_empty());
        assert_eq!(project.artboard_dimensions, ArtboardDimensions::default());
    }
}
