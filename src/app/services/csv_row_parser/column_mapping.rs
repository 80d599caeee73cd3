//! Column mapping for workout CSV headers
//!
//! Resolves the position of each recognized column once from the header record.
//! Unrecognized headers are ignored and recognized headers that are absent
//! simply have no position.

use crate::constants::columns;
use csv::StringRecord;

/// Columns the aggregation engine reads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Column {
    Date,
    Weight,
    Reps,
    Duration,
    ExerciseName,
    Distance,
    Rpe,
}

impl Column {
    /// Every recognized column, in slot order
    pub const ALL: [Column; 7] = [
        Column::Date,
        Column::Weight,
        Column::Reps,
        Column::Duration,
        Column::ExerciseName,
        Column::Distance,
        Column::Rpe,
    ];

    /// Exact header text for this column
    pub fn header_name(self) -> &'static str {
        match self {
            Column::Date => columns::DATE,
            Column::Weight => columns::WEIGHT,
            Column::Reps => columns::REPS,
            Column::Duration => columns::DURATION,
            Column::ExerciseName => columns::EXERCISE_NAME,
            Column::Distance => columns::DISTANCE,
            Column::Rpe => columns::RPE,
        }
    }

    /// Look up a column by exact header text
    pub fn from_header(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.header_name() == name)
    }

    pub(crate) fn slot(self) -> usize {
        self as usize
    }
}

/// Positions of the recognized columns within a CSV line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnMapping {
    positions: [Option<usize>; 7],

    /// Number of fields in the header line
    pub header_width: usize,
}

impl ColumnMapping {
    /// Analyze the header record and note where each recognized column lives
    ///
    /// Header names must match exactly (case-sensitive, untrimmed). When a
    /// name appears more than once the first occurrence wins.
    pub fn analyze(headers: &StringRecord) -> Self {
        let mut positions = [None; 7];

        for (index, name) in headers.iter().enumerate() {
            if let Some(column) = Column::from_header(name) {
                positions[column.slot()].get_or_insert(index);
            }
        }

        ColumnMapping {
            positions,
            header_width: headers.len(),
        }
    }

    /// Positions of every recognized column, indexed by slot
    pub(crate) fn positions(&self) -> [Option<usize>; 7] {
        self.positions
    }

    /// Get the index for a given column
    pub fn get_index(&self, column: Column) -> Option<usize> {
        self.positions[column.slot()]
    }

    /// Check if a column exists in the header
    pub fn has_column(&self, column: Column) -> bool {
        self.get_index(column).is_some()
    }

    /// Recognized columns missing from the header
    pub fn missing_columns(&self) -> Vec<Column> {
        Column::ALL
            .into_iter()
            .filter(|c| !self.has_column(*c))
            .collect()
    }

    /// Get statistics about the column mapping: (header fields, recognized columns)
    pub fn stats(&self) -> (usize, usize) {
        let recognized = self.positions.iter().filter(|p| p.is_some()).count();
        (self.header_width, recognized)
    }
}
