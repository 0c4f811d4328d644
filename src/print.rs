//! Console tables for reports, player breakdowns and event histories.

use stanza::style::{HAlign, Header, MinWidth, Separator, Styles};
use stanza::table::{Cell, Col, Row, Table};
use strum::IntoEnumIterator;

use crate::export::HistoryColumn;
use crate::player::PlayerRecord;
use crate::team::{PlayerSnapshot, TeamReport};

fn right(content: String) -> Cell {
    Cell::new(Styles::default().with(HAlign::Right), content.into())
}

pub fn tabulate_report(report: &TeamReport) -> Table {
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(16))),
            Col::new(Styles::default().with(MinWidth(7))),
            Col::new(Styles::default().with(MinWidth(7))),
            Col::new(Styles::default().with(MinWidth(7))),
            Col::new(Styles::default().with(MinWidth(7))),
            Col::new(Styles::default().with(MinWidth(8))),
            Col::new(Styles::default().with(MinWidth(7))),
            Col::new(Styles::default().with(MinWidth(7))),
            Col::new(Styles::default().with(MinWidth(8))),
            Col::new(Styles::default().with(MinWidth(8))),
            Col::new(Styles::default().with(MinWidth(7))),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![
                "Player".into(),
                "Points".into(),
                "FG%".into(),
                "Reb".into(),
                "Ast".into(),
                "PER".into(),
                "TS%".into(),
                "A/T".into(),
                "Usage%".into(),
                "BPM".into(),
                "Score".into(),
            ],
        ));
    table.push_rows(report.players.iter().map(|snapshot| {
        let metrics = &snapshot.metrics;
        Row::new(
            Styles::default(),
            vec![
                Cell::new(Styles::default(), snapshot.record.name().to_owned().into()),
                right(format!("{}", snapshot.record.points())),
                right(format!("{:.1}", snapshot.shooting_pct)),
                right(format!("{}", snapshot.record.rebounds())),
                right(format!("{}", snapshot.record.assists())),
                right(format!("{:.2}", metrics.per)),
                right(format!("{:.3}", metrics.true_shooting)),
                right(format!("{:.2}", metrics.ast_to_tov)),
                right(format!("{:.2}", metrics.usage)),
                right(format!("{:.2}", metrics.bpm)),
                right(format!("{:.3}", snapshot.normalised().score())),
            ],
        )
    }));
    let totals = &report.totals;
    table.push_row(Row::new(
        Styles::default().with(Header(true)).with(Separator(true)),
        vec![
            format!("Team ({})", totals.players).into(),
            right(format!("{}", totals.points)),
            right(format!("{}/{}", totals.shots_made, totals.shots_made + totals.shots_missed)),
            "".into(),
            right(format!("{}", totals.assists)),
            "".into(),
            "".into(),
            right(format!("{} TO", totals.turnovers)),
            right(format!("{} poss", report.possessions)),
            "".into(),
            right(format!("{:.1}%", report.team_percentage)),
        ],
    ));
    table
}

pub fn tabulate_player(snapshot: &PlayerSnapshot) -> Table {
    let record = snapshot.record;
    let metrics = &snapshot.metrics;
    let normalised = snapshot.normalised();
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(22))),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10)).with(HAlign::Right)),
        ])
        .with_row(Row::new(
            Styles::default().with(Header(true)),
            vec![record.name().to_owned().into(), "Value".into(), "Scaled".into()],
        ));

    for (label, value, scaled) in [
        ("PER", format!("{:.2}", metrics.per), normalised.per),
        ("TS%", format!("{:.3}", metrics.true_shooting), normalised.true_shooting),
        ("A/T", format!("{:.2}", metrics.ast_to_tov), normalised.ast_to_tov),
        ("Usage%", format!("{:.2}", metrics.usage), normalised.usage),
        ("BPM", format!("{:.2}", metrics.bpm), normalised.bpm),
    ] {
        table.push_row(Row::new(
            Styles::default(),
            vec![label.into(), value.into(), format!("{scaled:.3}").into()],
        ));
    }
    table.push_row(Row::new(
        Styles::default().with(Separator(true)),
        vec![
            "Score".into(),
            "".into(),
            format!("{:.3}", normalised.score()).into(),
        ],
    ));

    let mut counters = vec![
        ("Points", record.points()),
        ("Shots made", snapshot.shots_made),
        ("Shots missed", snapshot.shots_missed),
        ("Assists", record.assists()),
        ("Turnovers", record.turnovers()),
        ("Rebounds", record.rebounds()),
    ];
    for (shot_type, tally) in record.shots() {
        table.push_row(Row::new(
            Styles::default(),
            vec![
                format!("Shots: {shot_type}").into(),
                format!("{}/{}", tally.made, tally.attempts()).into(),
                format!("{} cont", tally.contested()).into(),
            ],
        ));
    }
    let strike_zone = record.strike_zone();
    counters.extend([
        ("Strike zone: balls", strike_zone.balls.total),
        ("Strike zone: strikes", strike_zone.strikes.total),
        ("Cuts", record.cuts().total),
        ("Paint touches", record.paint_touches().total),
        ("Contests", record.defense().total()),
    ]);
    for (label, count) in counters {
        table.push_row(Row::new(
            Styles::default(),
            vec![label.into(), format!("{count}").into(), "".into()],
        ));
    }
    table
}

pub fn tabulate_history(player: &PlayerRecord) -> Table {
    let mut header_cells: Vec<Cell> = vec!["#".into()];
    header_cells.extend(HistoryColumn::iter().map(|column| column.to_string().into()));
    let mut table = Table::default()
        .with_cols(vec![
            Col::new(Styles::default().with(MinWidth(5)).with(HAlign::Right)),
            Col::new(Styles::default().with(MinWidth(10))),
            Col::new(Styles::default().with(MinWidth(18))),
            Col::new(Styles::default().with(MinWidth(10))),
        ])
        .with_row(Row::new(Styles::default().with(Header(true)), header_cells));
    table.push_rows(player.event_history().iter().enumerate().map(|(index, event)| {
        let [kind, detail, result] = event.columns();
        Row::new(
            Styles::default(),
            vec![
                format!("{}", index + 1).into(),
                kind.into(),
                detail.into(),
                result.into(),
            ],
        )
    }));
    table
}
