//! Driving a session the way a front end would

mod common;

use common::init_tracing;
use effect_stats::{
    AnalysisConfig, ChartKind, Dataset, Error, ExportFormat, MetricKind, NullPlotRenderer,
    PlotData, PlotStyle, Session, SessionState, DEFAULT_PREVIEW_ROWS,
};
use std::path::Path;

fn survey() -> Dataset {
    Dataset::from_records(
        ["smoker", "region", "age", "charges"],
        [
            ["yes", "north", "19", "16884.9"],
            ["no", "south", "18", "1725.6"],
            ["no", "south", "28", "4449.5"],
            ["no", "north", "33", "21984.5"],
            ["yes", "east", "32", "3866.9"],
            ["no", "east", "31", "3756.6"],
            ["yes", "north", "46", "8240.6"],
            ["no", "south", "37", "7281.5"],
            ["yes", "east", "NA", "6406.4"],
            ["no", "north", "60", ""],
            ["yes", "south", "25", "2721.3"],
            ["no", "east", "62", "27808.7"],
        ],
    )
    .unwrap()
}

#[test]
fn test_full_session() -> anyhow::Result<()> {
    init_tracing();
    let mut session = Session::new();
    assert_eq!(session.state(), SessionState::NoFile);

    session.load(survey());
    let preview = session.preview(DEFAULT_PREVIEW_ROWS)?;
    assert_eq!(preview.rows.len(), 10);
    assert_eq!(preview.total_rows, 12);
    assert_eq!(preview.rows[8][2], "NA");

    // Categorical pairing with a stacked bar chart
    let config = AnalysisConfig::default()
        .with_plot_style(PlotStyle::Bar)
        .with_stacked_bars(true);
    session.configure("smoker", "region", config)?;
    let result = session.calculate()?;
    assert_eq!(result.metric, MetricKind::CramersV);
    assert!((0.0..=1.0).contains(&result.value));

    let spec = session.plot_spec(None)?;
    assert_eq!(spec.chart, ChartKind::StackedBar);
    assert_eq!(spec.y.label, "Count");
    assert!(matches!(spec.data, Some(PlotData::Contingency(_))));

    // Reconfigure for a correlation with a regression overlay
    let config = AnalysisConfig::default().with_regression_line(true);
    session.configure("age", "charges", config)?;
    assert_eq!(session.state(), SessionState::Configured);
    let result = session.calculate()?;
    assert_eq!(result.metric, MetricKind::PearsonR);
    assert_eq!(result.sample_size, 10);

    let spec = session.render_plot(&NullPlotRenderer, Some(PlotStyle::Scatter))?;
    assert!(spec.options.regression_line);
    assert!(matches!(
        spec.data,
        Some(PlotData::Pairs { fit: Some(_), .. })
    ));

    let format = session.save_plot(&NullPlotRenderer, None, Path::new("charges.jpeg"))?;
    assert_eq!(format, ExportFormat::Jpg);
    Ok(())
}

#[test]
fn test_gating() {
    let mut session = Session::new();
    session.load(survey());

    // Columns cannot be chosen before the data has been previewed
    assert!(matches!(
        session.configure("smoker", "age", AnalysisConfig::default()),
        Err(Error::InvalidState(_))
    ));

    session.preview(5).unwrap();
    assert!(matches!(
        session.configure("age", "age", AnalysisConfig::default()),
        Err(Error::InvalidInput(_))
    ));
    assert!(matches!(
        session.configure("smoker", "age", AnalysisConfig::default().with_alpha(-0.1)),
        Err(Error::InvalidParameter(_))
    ));
    assert_eq!(session.state(), SessionState::Previewed);
    assert!(matches!(session.calculate(), Err(Error::InvalidState(_))));
}
