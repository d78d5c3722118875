use thiserror::Error;

/// A request that was understood as a chart request but is missing a piece.
///
/// The display text is shown to the user as-is.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IntentError {
    #[error(
        "If you want to render some graph for term frequency, please specify which kind of graph is desired. \
         Line graph, pie graph, bar graph, and table are available."
    )]
    MissingChartKind,

    #[error(
        "If you want to render a line graph, please also tell me which attribute the x-axis will be around. \
         Note that for now only x for date or sex is available."
    )]
    MissingLineAxis,

    #[error(
        "If you want to render a bar graph, please also tell me which attribute you want to categorize on. \
         Note that for now only grouping by sex or age is available."
    )]
    MissingBarGrouping,
}
