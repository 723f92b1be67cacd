//! Interactive state used to link the charts: the toggle-set of
//! bar-selected states and the dropdown filter for the lower charts.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Sentinel dropdown value meaning "do not filter by state".
pub const ALL_STATES: &str = "All States";

/// The set of states currently selected on the bar chart.
///
/// Clicking a bar toggles its state in and out of the set. An empty
/// set means the line chart shows *nothing* ("empty: none"), which is
/// deliberately not the conventional "no filter" default; see
/// [`SelectionState::admits`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionState {
    states: BTreeSet<String>,
}

impl SelectionState {
    /// An empty selection, the initial state of the dashboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies one bar-click event: selects the state if absent,
    /// deselects it if present. Toggling twice is the identity.
    pub fn toggle(&mut self, code: &str) {
        if !self.states.remove(code) {
            self.states.insert(code.to_string());
        }
    }

    /// Whether the state is currently selected.
    pub fn contains(&self, code: &str) -> bool {
        self.states.contains(code)
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// The line-chart gate: a row passes only when the selection is
    /// non-empty and includes its state. An empty selection admits no
    /// rows at all.
    pub fn admits(&self, code: &str) -> bool {
        !self.states.is_empty() && self.states.contains(code)
    }

    /// Selected codes in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.states.iter().map(String::as_str)
    }

    /// Parses the comma-separated form used in query strings, e.g.
    /// `"CA,TX"`. Empty input yields the empty selection.
    pub fn parse(raw: &str) -> Self {
        raw.split(',')
            .map(str::trim)
            .filter(|code| !code.is_empty())
            .collect()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectionState {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self {
            states: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl fmt::Display for SelectionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for code in &self.states {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{code}")?;
            first = false;
        }
        Ok(())
    }
}

/// The dropdown value gating the duration and size charts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum StateFilter {
    /// Include every state ("All States").
    #[default]
    All,
    /// Include only the named state.
    Only(String),
}

impl StateFilter {
    /// Parses a dropdown value; the [`ALL_STATES`] sentinel and the
    /// empty string both mean no filter.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() || raw == ALL_STATES {
            StateFilter::All
        } else {
            StateFilter::Only(raw.to_string())
        }
    }

    /// The label shown in chart titles, matching the dropdown text.
    pub fn label(&self) -> &str {
        match self {
            StateFilter::All => ALL_STATES,
            StateFilter::Only(code) => code,
        }
    }
}

impl fmt::Display for StateFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for StateFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for StateFilter {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(StateFilter::parse(&raw))
    }
}
