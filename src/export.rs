//! Flat tabular projections of a [Roster], ready for writing as CSV.

use std::io;
use std::io::Write;

use ordinalizer::Ordinal;
use strum::{EnumCount, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter};

use crate::csv::{CsvWriter, Record};
use crate::player::PlayerRecord;
use crate::roster::Roster;
use crate::team::PlayerSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Ordinal, EnumCount, EnumIter, Display)]
pub enum ExportColumn {
    #[strum(to_string = "name")]
    Name,
    #[strum(to_string = "points")]
    Points,
    #[strum(to_string = "assists")]
    Assists,
    #[strum(to_string = "rebounds")]
    Rebounds,
    #[strum(to_string = "turnovers")]
    Turnovers,
    #[strum(to_string = "PER")]
    Per,
    #[strum(to_string = "TS%")]
    TrueShooting,
    #[strum(to_string = "A/T")]
    AstToTov,
    #[strum(to_string = "Usage%")]
    Usage,
    #[strum(to_string = "BPM")]
    Bpm,
}

impl From<ExportColumn> for usize {
    fn from(column: ExportColumn) -> Self {
        column.ordinal()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Ordinal, EnumCount, EnumIter, Display)]
pub enum HistoryColumn {
    Event,
    Detail,
    Result,
}

impl From<HistoryColumn> for usize {
    fn from(column: HistoryColumn) -> Self {
        column.ordinal()
    }
}

impl From<&PlayerSnapshot<'_>> for Record {
    fn from(snapshot: &PlayerSnapshot<'_>) -> Self {
        let record = snapshot.record;
        let metrics = &snapshot.metrics;
        let mut row = Record::with_capacity(ExportColumn::COUNT);
        row.set(ExportColumn::Name, record.name());
        row.set(ExportColumn::Points, record.points());
        row.set(ExportColumn::Assists, record.assists());
        row.set(ExportColumn::Rebounds, record.rebounds());
        row.set(ExportColumn::Turnovers, record.turnovers());
        row.set(ExportColumn::Per, metrics.per);
        row.set(ExportColumn::TrueShooting, metrics.true_shooting);
        row.set(ExportColumn::AstToTov, metrics.ast_to_tov);
        row.set(ExportColumn::Usage, metrics.usage);
        row.set(ExportColumn::Bpm, metrics.bpm);
        row
    }
}

/// Rows of a player's event history, oldest first, preceded by a header row.
pub fn history_rows(player: &PlayerRecord) -> Vec<Record> {
    let mut rows = Vec::with_capacity(player.event_history().len() + 1);
    rows.push(Record::with_values(HistoryColumn::iter()));
    rows.extend(
        player
            .event_history()
            .iter()
            .map(|event| Record::with_values(event.columns())),
    );
    rows
}

/// Writes the rows to `writer` as CSV.
pub fn write_csv<W: Write>(writer: W, rows: Vec<Record>) -> Result<W, io::Error> {
    let mut csv = CsvWriter::new(writer);
    for row in rows {
        csv.append(row)?;
    }
    csv.flush()?;
    Ok(csv.into_inner())
}

impl Roster {
    /// One row per player in name order, preceded by a header row. An empty roster yields only
    /// the header.
    pub fn export(&self) -> Vec<Record> {
        let snapshots = self.snapshots();
        let mut rows = Vec::with_capacity(snapshots.len() + 1);
        rows.push(Record::with_values(ExportColumn::iter()));
        rows.extend(snapshots.iter().map(Record::from));
        rows
    }
}
