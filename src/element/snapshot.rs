use std::collections::BTreeMap;
use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::element::control_type::{ControlType, PropertyId};
use crate::element::element_model::{ElementId, PropertyValue, RuleResult};
use crate::element::tree::ElementTree;
use crate::error::{InspectError, Result};

/// Serialized form of an element subtree.
///
/// ```json
/// {
///   "controlType": 50033,
///   "properties": { "Name": "Main", "IsControlElement": true },
///   "patterns": [10000],
///   "children": []
/// }
/// ```
///
/// serde_json caps nesting, so trees deeper than a few dozen levels have to
/// use [`FlatSnapshot`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ElementSnapshot {
    #[serde(rename = "controlType")]
    pub control_type: i32,

    #[serde(default)]
    pub properties: BTreeMap<PropertyId, PropertyValue>,

    #[serde(default)]
    pub patterns: Vec<i32>,

    #[serde(default, rename = "scanResults")]
    pub scan_results: Vec<RuleResult>,

    #[serde(default)]
    pub children: Vec<ElementSnapshot>,
}

/// Depth-independent snapshot: elements in pre-order, each naming its parent.
///
/// ```json
/// {
///   "elements": [
///     { "id": 0, "controlType": 50032 },
///     { "id": 1, "parent": 0, "controlType": 50000, "properties": { "Name": "OK" } }
///   ]
/// }
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FlatSnapshot {
    pub elements: Vec<FlatElement>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlatElement {
    pub id: ElementId,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<ElementId>,

    #[serde(rename = "controlType")]
    pub control_type: i32,

    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub properties: BTreeMap<PropertyId, PropertyValue>,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub patterns: Vec<i32>,

    #[serde(default, rename = "scanResults", skip_serializing_if = "Vec::is_empty")]
    pub scan_results: Vec<RuleResult>,
}

impl ElementTree {
    /// Import a nested snapshot; ids are assigned in pre-order.
    pub fn from_snapshot(snapshot: &ElementSnapshot) -> Result<Self> {
        let mut tree = ElementTree::new();
        let root = tree.add_root(ControlType::from_id(snapshot.control_type)?);
        fill(&mut tree, root, &snapshot.properties, &snapshot.patterns, &snapshot.scan_results);

        let mut pending: Vec<(ElementId, &ElementSnapshot)> =
            snapshot.children.iter().rev().map(|c| (root, c)).collect();
        while let Some((parent, node)) = pending.pop() {
            let id = tree.add_child(parent, ControlType::from_id(node.control_type)?);
            fill(&mut tree, id, &node.properties, &node.patterns, &node.scan_results);
            pending.extend(node.children.iter().rev().map(|c| (id, c)));
        }

        debug!("imported snapshot with {} elements", tree.len());
        Ok(tree)
    }

    /// Import a flat snapshot. Element `i` must carry id `i`, and every
    /// element but the first must name an earlier element as its parent.
    pub fn from_flat_snapshot(snapshot: &FlatSnapshot) -> Result<Self> {
        let mut tree = ElementTree::new();

        for (index, node) in snapshot.elements.iter().enumerate() {
            if node.id != index {
                return Err(InspectError::MalformedSnapshot(format!(
                    "element at position {} has id {}",
                    index, node.id
                )));
            }
            let control_type = ControlType::from_id(node.control_type)?;
            let id = match (index, node.parent) {
                (0, None) => tree.add_root(control_type),
                (_, Some(parent)) if parent < index => tree.add_child(parent, control_type),
                (0, Some(parent)) => {
                    return Err(InspectError::MalformedSnapshot(format!(
                        "root element names parent {}",
                        parent
                    )));
                }
                (_, parent) => {
                    return Err(InspectError::MalformedSnapshot(format!(
                        "element {} has parent {:?}; parents must precede children",
                        index, parent
                    )));
                }
            };
            fill(&mut tree, id, &node.properties, &node.patterns, &node.scan_results);
        }

        debug!("imported flat snapshot with {} elements", tree.len());
        Ok(tree)
    }

    /// Accepts either snapshot form; an object with an `elements` array is flat.
    pub fn from_json(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json).map_err(snapshot_error)?;

        if value.get("elements").is_some() {
            let snapshot: FlatSnapshot = serde_json::from_value(value).map_err(snapshot_error)?;
            Self::from_flat_snapshot(&snapshot)
        } else {
            let snapshot: ElementSnapshot =
                serde_json::from_value(value).map_err(snapshot_error)?;
            Self::from_snapshot(&snapshot)
        }
    }

    pub fn load_snapshot(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| InspectError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Flat export carrying attached scan results; readable at any depth.
    pub fn to_snapshot(&self) -> FlatSnapshot {
        let elements = self
            .elements()
            .map(|element| {
                let data = element.data();
                FlatElement {
                    id: data.id,
                    parent: data.parent,
                    control_type: data.control_type.id(),
                    properties: data.properties.clone(),
                    patterns: data.patterns.clone(),
                    scan_results: data.scan_results.clone(),
                }
            })
            .collect();
        FlatSnapshot { elements }
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.to_snapshot()).map_err(snapshot_error)
    }
}

fn fill(
    tree: &mut ElementTree,
    id: ElementId,
    properties: &BTreeMap<PropertyId, PropertyValue>,
    patterns: &[i32],
    scan_results: &[RuleResult],
) {
    for (property, value) in properties {
        tree.set_property(id, *property, value.clone());
    }
    for pattern in patterns {
        tree.add_pattern(id, *pattern);
    }
    tree.set_scan_results(id, scan_results.to_vec());
}

fn snapshot_error(source: serde_json::Error) -> InspectError {
    InspectError::Json {
        context: "element snapshot".to_string(),
        source,
    }
}
