// Static station catalog: which tables back each logical source, how many
// analog channels each table carries, which channels are totalizers, and
// the configured pump lists for the run-hour tables. Channels are fixed at
// deployment time, never discovered at runtime.

/// Section names, also the renderer invocation order.
pub const PUMP_STATIONS_SECTION: &str = "pump_stations";
pub const STORAGE_SITES_SECTION: &str = "storage_sites";
pub const TRANSMISSION_SECTION: &str = "transmission";

#[derive(Debug, Clone, Copy)]
pub enum TableKind {
    /// Analog readings in columns `A1..An`; `totalizers` names the
    /// monotonic cumulative-flow channels that get a carry-window pass.
    Analog {
        channel_count: usize,
        totalizers: &'static [&'static str],
    },
    /// Pump start/stop activity; `pumps` is the configured identity list
    /// the run-hour table must cover even for idle pumps.
    RunHours { pumps: &'static [&'static str] },
}

#[derive(Debug, Clone, Copy)]
pub struct TableSpec {
    pub name: &'static str,
    pub kind: TableKind,
}

impl TableSpec {
    /// Channel column names `A1..An` for analog tables, empty otherwise.
    pub fn channels(&self) -> Vec<String> {
        match self.kind {
            TableKind::Analog { channel_count, .. } => {
                (1..=channel_count).map(|i| format!("A{i}")).collect()
            }
            TableKind::RunHours { .. } => Vec::new(),
        }
    }

    pub fn totalizers(&self) -> &'static [&'static str] {
        match self.kind {
            TableKind::Analog { totalizers, .. } => totalizers,
            TableKind::RunHours { .. } => &[],
        }
    }
}

/// A named group of tables backed by one station database.
#[derive(Debug, Clone, Copy)]
pub struct SourceSpec {
    pub name: &'static str,
    pub tables: &'static [TableSpec],
}

// Clear-water transfer pumps are deliberately not part of the raw-water
// run-hour report.
const RWPH_PUMPS: &[&str] = &[
    "VTP_01", "VTP_02", "VTP_03", "VTP_04", "VTP_05", "VTP_06",
];
const CWPH_PUMPS: &[&str] = &[
    "VTP_01", "VTP_02", "VTP_03", "VTP_04", "VTP_05", "VTP_06",
];

/// Raw and clear water pump houses.
pub const PUMP_STATIONS: SourceSpec = SourceSpec {
    name: PUMP_STATIONS_SECTION,
    tables: &[
        TableSpec {
            name: "RWPH_ANALOG",
            kind: TableKind::Analog {
                channel_count: 34,
                totalizers: &["A23"],
            },
        },
        TableSpec {
            name: "CWPH_ANALOG",
            kind: TableKind::Analog {
                channel_count: 15,
                totalizers: &["A10"],
            },
        },
        TableSpec {
            name: "RWPH_RUN_HR",
            kind: TableKind::RunHours { pumps: RWPH_PUMPS },
        },
        TableSpec {
            name: "CWPH_RUN_HR",
            kind: TableKind::RunHours { pumps: CWPH_PUMPS },
        },
    ],
};

/// Master storage tank, master service reservoirs, and the MBRs.
pub const STORAGE_SITES: SourceSpec = SourceSpec {
    name: STORAGE_SITES_SECTION,
    tables: &[
        TableSpec {
            name: "MSS_ANALOG",
            kind: TableKind::Analog {
                channel_count: 12,
                totalizers: &["A7", "A8"],
            },
        },
        TableSpec {
            name: "MSR_ANALOG",
            kind: TableKind::Analog {
                channel_count: 12,
                totalizers: &["A6", "A12"],
            },
        },
        TableSpec {
            name: "MBR_ANALOG",
            kind: TableKind::Analog {
                channel_count: 24,
                totalizers: &["A13", "A14", "A15", "A16"],
            },
        },
    ],
};

/// Raw/clear transmission lines and the two feeder mains, one table.
pub const TRANSMISSION: SourceSpec = SourceSpec {
    name: TRANSMISSION_SECTION,
    tables: &[TableSpec {
        name: "TRANSMISSION_LINE",
        kind: TableKind::Analog {
            channel_count: 32,
            totalizers: &[],
        },
    }],
};

/// All configured sources in renderer invocation order.
pub const ALL_SOURCES: &[&SourceSpec] = &[&PUMP_STATIONS, &STORAGE_SITES, &TRANSMISSION];
