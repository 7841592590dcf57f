use std::{
    path::{Path, PathBuf},
    sync::OnceLock,
};

use crate::{
    builder::{read_instance, DimacsConfig},
    config::Config,
    structures::{expectation::Expectation, formula::Formula},
    types::err::{self},
};

/// An instance to evaluate, as given to a scheduler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WorkItem {
    /// The name of the instance in reports.
    pub name: String,

    pub path: PathBuf,

    pub expectation: Expectation,

    /// Labels carried through to each report on the instance.
    pub tags: Vec<String>,
}

impl WorkItem {
    /// An item with the path used as name, and nothing known of the instance.
    pub fn from_path(path: &Path) -> Self {
        WorkItem {
            name: path.to_string_lossy().into_owned(),
            path: path.to_path_buf(),
            expectation: Expectation::Unknown,
            tags: Vec::default(),
        }
    }

    /// An item for the named instance, with path and expectation from the config.
    pub fn from_name(name: &str, config: &Config) -> Self {
        WorkItem {
            name: name.to_owned(),
            path: config.instance_path(name),
            expectation: config.expectation,
            tags: Vec::default(),
        }
    }
}

/// An instance shared by each trial of a work item.
///
/// The formula of the instance is read at most once, and only when some trial claims the instance is satisfiable.
#[derive(Debug)]
pub struct Instance {
    pub item: WorkItem,
    formula: OnceLock<Result<Formula, err::ParseError>>,
}

impl Instance {
    pub fn new(item: WorkItem) -> Self {
        Instance {
            item,
            formula: OnceLock::default(),
        }
    }

    /// The formula of the instance, read on first use.
    pub fn formula(&self, config: &DimacsConfig) -> Result<&Formula, err::ParseError> {
        let read = self.formula.get_or_init(|| {
            read_instance(&self.item.path, config).map(|(formula, _info)| formula)
        });
        read.as_ref().map_err(|e| e.clone())
    }
}
