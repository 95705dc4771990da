// Pump house section: page 1 raw water, page 2 clear water. Each page is
// site info, transmitter stats, water-quality stats, flow totalizer, and
// pump run hours.

use crate::models::{Block, Page, ReportMeta, ResolvedSource};

use super::{TagSpec, TotalizerSpec, page, run_hour_table, stats_table, totalizer_table};

const RWPH_TRANSMITTERS: &[TagSpec] = &[
    TagSpec { tag: "A1", label: "LEVEL TRANSMITTER 01", unit: "(m)" },
    TagSpec { tag: "A2", label: "LEVEL TRANSMITTER 02", unit: "(m)" },
    TagSpec { tag: "A3", label: "PRESSURE TRANSMITTER 01", unit: "(mH2O)" },
    TagSpec { tag: "A4", label: "PRESSURE TRANSMITTER 02", unit: "(mH2O)" },
    TagSpec { tag: "A5", label: "PRESSURE TRANSMITTER 03", unit: "(mH2O)" },
    TagSpec { tag: "A6", label: "PRESSURE TRANSMITTER 04", unit: "(mH2O)" },
    TagSpec { tag: "A7", label: "PRESSURE TRANSMITTER 05", unit: "(mH2O)" },
    TagSpec { tag: "A8", label: "PRESSURE TRANSMITTER 06", unit: "(mH2O)" },
    TagSpec { tag: "A15", label: "OUTLET PRESSURE TRANSMITTER", unit: "(mH2O)" },
    TagSpec { tag: "A16", label: "OUTLET FLOW TRANSMITTER", unit: "(m3/hr)" },
];

const RWPH_QUALITY: &[TagSpec] = &[
    TagSpec { tag: "A30", label: "pH", unit: "" },
    TagSpec { tag: "A31", label: "CONDUCTIVITY", unit: "(uS/m)" },
    TagSpec { tag: "A32", label: "ORP", unit: "(mV)" },
    TagSpec { tag: "A33", label: "FREE CHLORINE", unit: "(mg/L)" },
    TagSpec { tag: "A34", label: "TOTAL CHLORINE", unit: "(mg/L)" },
];

const RWPH_TOTALIZERS: &[TotalizerSpec] = &[TotalizerSpec {
    title: "OUTLET FLOW TOTALIZER",
    tag: "A23",
}];

const CWPH_TRANSMITTERS: &[TagSpec] = &[
    TagSpec { tag: "A1", label: "LEVEL TRANSMITTER", unit: "(m)" },
    TagSpec { tag: "A2", label: "PRESSURE TRANSMITTER 01", unit: "(mH2O)" },
    TagSpec { tag: "A3", label: "PRESSURE TRANSMITTER 02", unit: "(mH2O)" },
    TagSpec { tag: "A4", label: "PRESSURE TRANSMITTER 03", unit: "(mH2O)" },
    TagSpec { tag: "A5", label: "PRESSURE TRANSMITTER 04", unit: "(mH2O)" },
    TagSpec { tag: "A6", label: "PRESSURE TRANSMITTER 05", unit: "(mH2O)" },
    TagSpec { tag: "A7", label: "PRESSURE TRANSMITTER 06", unit: "(mH2O)" },
    TagSpec { tag: "A8", label: "OUTLET PRESSURE TRANSMITTER", unit: "(mH2O)" },
    TagSpec { tag: "A9", label: "OUTLET FLOW TRANSMITTER", unit: "(m3/hr)" },
];

const CWPH_QUALITY: &[TagSpec] = &[
    TagSpec { tag: "A11", label: "pH", unit: "" },
    TagSpec { tag: "A12", label: "CONDUCTIVITY", unit: "(uS/m)" },
    TagSpec { tag: "A13", label: "ORP", unit: "(mV)" },
    TagSpec { tag: "A14", label: "FREE CHLORINE", unit: "(mg/L)" },
    TagSpec { tag: "A15", label: "TOTAL CHLORINE", unit: "(mg/L)" },
];

const CWPH_TOTALIZERS: &[TotalizerSpec] = &[TotalizerSpec {
    title: "OUTLET FLOW TOTALIZER",
    tag: "A10",
}];

pub fn render(source: &ResolvedSource, meta: &ReportMeta) -> Vec<Page> {
    let rwph = source.table("RWPH_ANALOG");
    let cwph = source.table("CWPH_ANALOG");
    let rwph_run = source.table("RWPH_RUN_HR");
    let cwph_run = source.table("CWPH_RUN_HR");

    let raw_water = page(
        "RAW WATER PUMP HOUSE",
        meta,
        vec![
            Block::InfoBar {
                cells: vec![
                    "GL: 311.20m".to_string(),
                    "VTP SETS :32300 lpm x 121 m (4+2)".to_string(),
                ],
            },
            Block::Stats {
                table: stats_table(RWPH_TRANSMITTERS, &rwph),
            },
            Block::Caption {
                text: "RAW WATER PUMP HOUSE - WATER QUALITY ANALYZER".to_string(),
            },
            Block::Stats {
                table: stats_table(RWPH_QUALITY, &rwph),
            },
            Block::Caption {
                text: "RAW WATER PUMP HOUSE - FLOW TOTALIZERS".to_string(),
            },
            Block::Totalizer {
                table: totalizer_table(RWPH_TOTALIZERS, &rwph),
            },
            Block::Caption {
                text: "RAW WATER PUMP HOUSE - PUMP RUN HOURS".to_string(),
            },
            Block::RunHours {
                table: run_hour_table(&rwph_run.run_hours),
            },
        ],
    );

    let clear_water = page(
        "CLEAR WATER PUMP HOUSE",
        meta,
        vec![
            Block::InfoBar {
                cells: vec![
                    "GL: 407.50m".to_string(),
                    "VTP SETS :31360 lpm x 129 m (4+2)".to_string(),
                ],
            },
            Block::Stats {
                table: stats_table(CWPH_TRANSMITTERS, &cwph),
            },
            Block::Caption {
                text: "CLEAR WATER PUMP HOUSE - WATER QUALITY ANALYZER".to_string(),
            },
            Block::Stats {
                table: stats_table(CWPH_QUALITY, &cwph),
            },
            Block::Caption {
                text: "CLEAR WATER PUMP HOUSE - FLOW TOTALIZER".to_string(),
            },
            Block::Totalizer {
                table: totalizer_table(CWPH_TOTALIZERS, &cwph),
            },
            Block::Caption {
                text: "CLEAR WATER PUMP HOUSE - PUMP RUN HOURS".to_string(),
            },
            Block::RunHours {
                table: run_hour_table(&cwph_run.run_hours),
            },
        ],
    );

    vec![raw_water, clear_water]
}
