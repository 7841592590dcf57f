/*!
Sources of work items.

Work items come from either:
- Selection lists, one for each track, named `selection-<track>.txt`.
  Entries are filtered by level, and entries with an unknown answer are skipped unless asked for.
  Each item is tagged with its track and level.
- A glob pattern of instance files, about which nothing is known.
*/

mod list;
pub use list::{parse_selection, read_selection, Entry};

use std::{
    path::PathBuf,
    str::FromStr,
};

use crate::{
    misc::log::targets::{self},
    runner::WorkItem,
    structures::expectation::Expectation,
    types::err::{self},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Track {
    Random,
    Application,
    Crafted,
}

impl Track {
    pub const ALL: [Track; 3] = [Track::Random, Track::Application, Track::Crafted];
}

impl std::fmt::Display for Track {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Random => write!(f, "random"),
            Self::Application => write!(f, "application"),
            Self::Crafted => write!(f, "crafted"),
        }
    }
}

impl FromStr for Track {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "random" => Ok(Self::Random),
            "application" => Ok(Self::Application),
            "crafted" => Ok(Self::Crafted),
            _ => Err(()),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Level {
    Easy,
    Medium,
    Hard,
}

impl Level {
    pub const ALL: [Level; 3] = [Level::Easy, Level::Medium, Level::Hard];
}

impl std::fmt::Display for Level {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => write!(f, "easy"),
            Self::Medium => write!(f, "medium"),
            Self::Hard => write!(f, "hard"),
        }
    }
}

impl FromStr for Level {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(()),
        }
    }
}

/// A selection of instances from the selection lists of some tracks.
#[derive(Clone, Debug)]
pub struct Selection {
    /// The directory containing the selection lists.
    pub dir: PathBuf,

    pub tracks: Vec<Track>,

    pub levels: Vec<Level>,

    /// Include instances whose answer is unknown.
    pub include_unknown: bool,
}

impl Default for Selection {
    fn default() -> Self {
        Selection {
            dir: PathBuf::from("."),
            tracks: Track::ALL.to_vec(),
            levels: Level::ALL.to_vec(),
            include_unknown: false,
        }
    }
}

impl Selection {
    pub fn list_path(&self, track: Track) -> PathBuf {
        self.dir.join(format!("selection-{track}.txt"))
    }

    /// Whether the entry is part of the selection.
    pub fn admits(&self, entry: &Entry) -> bool {
        self.levels.contains(&entry.level)
            && (self.include_unknown || entry.expectation != Expectation::Unknown)
    }

    /// The selected items, track by track, in the order of each list.
    pub fn items(&self) -> Result<Vec<WorkItem>, err::SelectionError> {
        let mut items = Vec::default();

        for track in &self.tracks {
            let path = self.list_path(*track);
            let entries = read_selection(&path)?;
            let total = entries.len();

            let before = items.len();
            items.extend(entries.into_iter().filter(|entry| self.admits(entry)).map(
                |entry| WorkItem {
                    name: entry.path.to_string_lossy().into_owned(),
                    path: entry.path,
                    expectation: entry.expectation,
                    tags: vec![track.to_string(), entry.level.to_string()],
                },
            ));

            log::info!(target: targets::SELECTION, "Track {track}: {} of {total} instances", items.len() - before);
        }

        Ok(items)
    }
}

/// Items for the instances matching a glob pattern, in the order of the paths.
pub fn glob_items(pattern: &str) -> Result<Vec<WorkItem>, err::SelectionError> {
    let paths = match glob::glob(pattern) {
        Ok(paths) => paths,
        Err(e) => {
            log::error!(target: targets::SELECTION, "Invalid pattern {pattern}: {e}");
            return Err(err::SelectionError::Pattern(pattern.to_owned()));
        }
    };

    let mut items: Vec<WorkItem> = paths
        .filter_map(|entry| match entry {
            Ok(path) if path.is_file() => Some(WorkItem::from_path(&path)),
            Ok(_) => None,
            Err(e) => {
                log::warn!(target: targets::SELECTION, "Skipping {:?}: {e}", e.path());
                None
            }
        })
        .collect();
    items.sort_by(|a, b| a.path.cmp(&b.path));

    log::info!(target: targets::SELECTION, "{} instances match {pattern}", items.len());
    Ok(items)
}
