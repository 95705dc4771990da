// Transmission line section: a single page with four pressure tables
// (raw water line, clear water line, feeder mains I and II).

use crate::models::{Block, Page, ReportMeta, ResolvedSource};

use super::{TagSpec, page, stats_table};

const RAW_WATER_LINE: &[TagSpec] = &[
    TagSpec { tag: "A1", label: "RTL-01", unit: "(mH2O)" },
    TagSpec { tag: "A2", label: "RTL-02", unit: "(mH2O)" },
    TagSpec { tag: "A3", label: "RTL-03", unit: "(mH2O)" },
    TagSpec { tag: "A4", label: "RTL-04", unit: "(mH2O)" },
    TagSpec { tag: "A5", label: "RTL-05", unit: "(mH2O)" },
    TagSpec { tag: "A6", label: "RTL-06", unit: "(mH2O)" },
];

const CLEAR_WATER_LINE: &[TagSpec] = &[
    TagSpec { tag: "A7", label: "CTL-01", unit: "(mH2O)" },
    TagSpec { tag: "A8", label: "CTL-02", unit: "(mH2O)" },
    TagSpec { tag: "A9", label: "CTL-03", unit: "(mH2O)" },
    TagSpec { tag: "A10", label: "CTL-04", unit: "(mH2O)" },
    TagSpec { tag: "A11", label: "CTL-05", unit: "(mH2O)" },
    TagSpec { tag: "A12", label: "CTL-06", unit: "(mH2O)" },
];

const FEEDER_MAIN_I: &[TagSpec] = &[
    TagSpec { tag: "A21", label: "FMA-01", unit: "(mH2O)" },
    TagSpec { tag: "A22", label: "FMA-02", unit: "(mH2O)" },
    TagSpec { tag: "A23", label: "FMA-03", unit: "(mH2O)" },
    TagSpec { tag: "A24", label: "FMA-04", unit: "(mH2O)" },
    TagSpec { tag: "A25", label: "FMA-05", unit: "(mH2O)" },
    TagSpec { tag: "A26", label: "FMA-06", unit: "(mH2O)" },
    TagSpec { tag: "A27", label: "FMA-07", unit: "(mH2O)" },
    TagSpec { tag: "A28", label: "FMA-08", unit: "(mH2O)" },
    TagSpec { tag: "A29", label: "FMA-09", unit: "(mH2O)" },
    TagSpec { tag: "A30", label: "FMA-10", unit: "(mH2O)" },
    TagSpec { tag: "A31", label: "FMA-11", unit: "(mH2O)" },
    TagSpec { tag: "A32", label: "FMA-12", unit: "(mH2O)" },
];

const FEEDER_MAIN_II: &[TagSpec] = &[
    TagSpec { tag: "A13", label: "FMB-01", unit: "(mH2O)" },
    TagSpec { tag: "A14", label: "FMB-02", unit: "(mH2O)" },
    TagSpec { tag: "A15", label: "FMB-03", unit: "(mH2O)" },
    TagSpec { tag: "A16", label: "FMB-04", unit: "(mH2O)" },
    TagSpec { tag: "A17", label: "FMB-05", unit: "(mH2O)" },
    TagSpec { tag: "A18", label: "FMB-06", unit: "(mH2O)" },
    TagSpec { tag: "A19", label: "FMB-07", unit: "(mH2O)" },
    TagSpec { tag: "A20", label: "FMB-08", unit: "(mH2O)" },
];

pub fn render(source: &ResolvedSource, meta: &ReportMeta) -> Vec<Page> {
    let line = source.table("TRANSMISSION_LINE");
    vec![page(
        "TRANSMISSION LINES",
        meta,
        vec![
            Block::Caption {
                text: "RAW WATER TRANSMISSION LINE".to_string(),
            },
            Block::Stats {
                table: stats_table(RAW_WATER_LINE, &line),
            },
            Block::Caption {
                text: "CLEAR WATER TRANSMISSION LINE".to_string(),
            },
            Block::Stats {
                table: stats_table(CLEAR_WATER_LINE, &line),
            },
            Block::Caption {
                text: "FEEDER MAIN I TRANSMISSION LINE".to_string(),
            },
            Block::Stats {
                table: stats_table(FEEDER_MAIN_I, &line),
            },
            Block::Caption {
                text: "FEEDER MAIN II TRANSMISSION LINE".to_string(),
            },
            Block::Stats {
                table: stats_table(FEEDER_MAIN_II, &line),
            },
        ],
    )]
}
