use std::fmt;

use serde::{Deserialize, Serialize};

use crate::element::element_model::ElementId;

/// Where one occurrence of an issue was observed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Location {
    /// An element of a saved results file
    OutputFile { file_name: String, element_id: ElementId },
    /// An element of a running application
    LiveSession { process_name: String, element_id: ElementId },
}

impl Location {
    pub fn output_file(file_name: &str, element_id: ElementId) -> Self {
        Location::OutputFile {
            file_name: file_name.to_string(),
            element_id,
        }
    }

    pub fn live_session(process_name: &str, element_id: ElementId) -> Self {
        Location::LiveSession {
            process_name: process_name.to_string(),
            element_id,
        }
    }

    pub fn element_id(&self) -> ElementId {
        match self {
            Location::OutputFile { element_id, .. } | Location::LiveSession { element_id, .. } => {
                *element_id
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::OutputFile { file_name, element_id } => {
                write!(f, "{} (element {})", file_name, element_id)
            }
            Location::LiveSession { process_name, element_id } => {
                write!(f, "process {} (element {})", process_name, element_id)
            }
        }
    }
}
