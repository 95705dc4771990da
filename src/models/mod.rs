// Domain models shared across aggregation, rendering, and delivery

mod aggregate;
mod page;
mod source;
mod summary;

pub use aggregate::{CarryAggregate, ChannelAggregate, RunEvent, RunHourEntry, TotalizerDelta};
pub use page::{
    Block, ComposedDocument, Page, ReportMeta, RunHourRow, RunHourTable, SectionPages, StatsTable,
    TotalizerRow, TotalizerTable,
};
pub use source::{ResolvedChannel, ResolvedSource, ResolvedTable, SourceResult, TableResult};
pub use summary::RunSummary;
