// Storage section: master storage tank (page 1), the four MBRs (pages 2-3,
// two sites per page), and the two MSRs (page 4). Every site follows the
// same sheet: caption, capacity info bar, stats table, flow totalizer.

use crate::models::{Block, Page, ReportMeta, ResolvedSource, ResolvedTable};

use super::{TagSpec, TotalizerSpec, page, stats_table, totalizer_table};

const MST_TRANSMITTERS: &[TagSpec] = &[
    TagSpec { tag: "A1", label: "LEVEL TRANSMITTER 01", unit: "(M)" },
    TagSpec { tag: "A2", label: "LEVEL TRANSMITTER 02", unit: "(M)" },
    TagSpec { tag: "A3", label: "PRESSURE TRANSMITTER", unit: "(mH2O)" },
    TagSpec { tag: "A5", label: "FLOW TRANSMITTER 01", unit: "(m3/HR) - FM1" },
    TagSpec { tag: "A6", label: "FLOW TRANSMITTER 02", unit: "(m3/HR) - FM2" },
];

const MST_QUALITY: &[TagSpec] = &[
    TagSpec { tag: "A9", label: "CHLORINE", unit: "(mg/L)" },
    TagSpec { tag: "A10", label: "CONDUCTIVITY", unit: "(uS/m)" },
    TagSpec { tag: "A11", label: "pH", unit: "" },
    TagSpec { tag: "A12", label: "ORP", unit: "(mV)" },
];

const MST_TOTALIZERS: &[TotalizerSpec] = &[
    TotalizerSpec { title: "FEEDER MAIN - I FLOW TOTALIZER", tag: "A7" },
    TotalizerSpec { title: "FEEDER MAIN - II FLOW TOTALIZER", tag: "A8" },
];

/// One reservoir sub-sheet (half a page).
struct SiteSheet {
    caption: &'static str,
    info: [&'static str; 3],
    tags: &'static [TagSpec],
    totalizer_caption: &'static str,
    totalizers: &'static [TotalizerSpec],
}

const MBR_PRESS_ENCLAVE: SiteSheet = SiteSheet {
    caption: "MBR (PRESS ENCLAVE)",
    info: ["CAP: 15 LL", "GL: 433.21m", "MWL: 453.21m"],
    tags: &[
        TagSpec { tag: "A3", label: "LEVEL TRANSMITTER", unit: "(M)" },
        TagSpec { tag: "A7", label: "PRESSURE TRANSMITTER", unit: "(mH2O)" },
        TagSpec { tag: "A11", label: "FLOW TRANSMITTER", unit: "(m3/HR)" },
        TagSpec { tag: "A19", label: "CHLORINE", unit: "(mg/L)" },
        TagSpec { tag: "A23", label: "CONDUCTIVITY", unit: "(uS/m)" },
    ],
    totalizer_caption: "MBR (PRESS ENCLAVE) - FLOW TOTALIZER",
    totalizers: &[TotalizerSpec { title: "OUTLET FLOW TOTALIZER", tag: "A15" }],
};

const MBR_PILLAYARPURAM: SiteSheet = SiteSheet {
    caption: "MBR (PILLAYARPURAM)",
    info: ["CAP: 20 LL", "GL: 455.79m", "MWL: 475.79m"],
    tags: &[
        TagSpec { tag: "A4", label: "LEVEL TRANSMITTER", unit: "(M)" },
        TagSpec { tag: "A8", label: "PRESSURE TRANSMITTER", unit: "(mH2O)" },
        TagSpec { tag: "A12", label: "FLOW TRANSMITTER", unit: "(m3/HR)" },
        TagSpec { tag: "A20", label: "CHLORINE", unit: "(mg/L)" },
        TagSpec { tag: "A24", label: "CONDUCTIVITY", unit: "(uS/m)" },
    ],
    totalizer_caption: "MBR (PILLAYARPURAM) - FLOW TOTALIZER",
    totalizers: &[TotalizerSpec { title: "OUTLET FLOW TOTALIZER", tag: "A16" }],
};

const MBR_VALARMATHI_NAGAR: SiteSheet = SiteSheet {
    caption: "MBR (VALARMATHI NAGAR)",
    info: ["CAP: 20 LL", "GL: 461.95m", "MWL: 481.95m"],
    tags: &[
        TagSpec { tag: "A1", label: "LEVEL TRANSMITTER", unit: "(M)" },
        TagSpec { tag: "A5", label: "PRESSURE TRANSMITTER", unit: "(mH2O)" },
        TagSpec { tag: "A9", label: "FLOW TRANSMITTER", unit: "(m3/HR)" },
        TagSpec { tag: "A17", label: "CHLORINE", unit: "(mg/L)" },
        TagSpec { tag: "A21", label: "CONDUCTIVITY", unit: "(uS/m)" },
    ],
    totalizer_caption: "MBR (VALARMATHI NAGAR) - FLOW TOTALIZER",
    totalizers: &[TotalizerSpec { title: "FLOW TOTALIZER", tag: "A13" }],
};

const MBR_BHARATHI_PARK: SiteSheet = SiteSheet {
    caption: "MBR (BHARATHI PARK)",
    info: ["CAP: 38.87 LL", "GL: 442.00m", "MWL: 458.00m"],
    tags: &[
        TagSpec { tag: "A2", label: "LEVEL TRANSMITTER", unit: "(M)" },
        TagSpec { tag: "A6", label: "PRESSURE TRANSMITTER", unit: "(mH2O)" },
        TagSpec { tag: "A10", label: "FLOW TRANSMITTER", unit: "(m3/HR)" },
        TagSpec { tag: "A18", label: "CHLORINE", unit: "(mg/L)" },
        TagSpec { tag: "A22", label: "CONDUCTIVITY", unit: "(uS/m)" },
    ],
    totalizer_caption: "MBR (BHARATHI PARK) - FLOW TOTALIZER",
    totalizers: &[TotalizerSpec { title: "FLOW TOTALIZER", tag: "A14" }],
};

const MSR_OLD: SiteSheet = SiteSheet {
    caption: "MSR (RAMAKRISHNAPURAM OLD)",
    info: ["CAP: 30 LL", "GL: 425.82m", "MWL: 448.37m"],
    tags: &[
        TagSpec { tag: "A1", label: "LEVEL TRANSMITTER", unit: "(M)" },
        TagSpec { tag: "A2", label: "PRESSURE TRANSMITTER", unit: "(mH2O)" },
        TagSpec { tag: "A5", label: "FLOW TRANSMITTER", unit: "(m3/HR)" },
        TagSpec { tag: "A3", label: "CHLORINE", unit: "(mg/L)" },
        TagSpec { tag: "A4", label: "CONDUCTIVITY", unit: "(uS/m)" },
    ],
    totalizer_caption: "MSR (RAMAKRISHNAPURAM OLD) - FLOW TOTALIZER",
    totalizers: &[TotalizerSpec { title: "OUTLET FLOW TOTALIZER", tag: "A6" }],
};

const MSR_NEW: SiteSheet = SiteSheet {
    caption: "MSR (RAMAKRISHNAPURAM NEW)",
    info: ["CAP: 30 LL", "GL: 429.50m", "MWL: 452.05m"],
    tags: &[
        TagSpec { tag: "A7", label: "LEVEL TRANSMITTER", unit: "(M)" },
        TagSpec { tag: "A8", label: "PRESSURE TRANSMITTER", unit: "(mH2O)" },
        TagSpec { tag: "A11", label: "FLOW TRANSMITTER", unit: "(m3/HR)" },
        TagSpec { tag: "A9", label: "CHLORINE", unit: "(mg/L)" },
        TagSpec { tag: "A10", label: "CONDUCTIVITY", unit: "(uS/m)" },
    ],
    totalizer_caption: "MSR (RAMAKRISHNAPURAM NEW) - FLOW TOTALIZER",
    totalizers: &[TotalizerSpec { title: "OUTLET FLOW TOTALIZER", tag: "A12" }],
};

fn site_blocks(sheet: &SiteSheet, table: &ResolvedTable) -> Vec<Block> {
    vec![
        Block::Caption {
            text: sheet.caption.to_string(),
        },
        Block::InfoBar {
            cells: sheet.info.iter().map(|s| s.to_string()).collect(),
        },
        Block::Stats {
            table: stats_table(sheet.tags, table),
        },
        Block::Caption {
            text: sheet.totalizer_caption.to_string(),
        },
        Block::Totalizer {
            table: totalizer_table(sheet.totalizers, table),
        },
    ]
}

fn two_site_page(
    title: &str,
    meta: &ReportMeta,
    upper: &SiteSheet,
    lower: &SiteSheet,
    table: &ResolvedTable,
) -> Page {
    let mut blocks = site_blocks(upper, table);
    blocks.extend(site_blocks(lower, table));
    page(title, meta, blocks)
}

pub fn render(source: &ResolvedSource, meta: &ReportMeta) -> Vec<Page> {
    let mst = source.table("MSS_ANALOG");
    let msr = source.table("MSR_ANALOG");
    let mbr = source.table("MBR_ANALOG");

    let master_tank = page(
        "MASTER STORAGE TANK (PANNIMADAI) - 2 NOs",
        meta,
        vec![
            Block::InfoBar {
                cells: vec![
                    "CAP: 73 LL (Each)".to_string(),
                    "TFL: 512.35m".to_string(),
                    "MWL: 516.00m".to_string(),
                ],
            },
            Block::Stats {
                table: stats_table(MST_TRANSMITTERS, &mst),
            },
            Block::Caption {
                text: "MASTER STORAGE TANK - WATER QUALITY ANALYZER".to_string(),
            },
            Block::Stats {
                table: stats_table(MST_QUALITY, &mst),
            },
            Block::Caption {
                text: "MASTER STORAGE TANK - FLOW TOTALIZERS".to_string(),
            },
            Block::Totalizer {
                table: totalizer_table(MST_TOTALIZERS, &mst),
            },
        ],
    );

    vec![
        master_tank,
        two_site_page(
            "MBR (PRESS ENCLAVE / PILLAYARPURAM)",
            meta,
            &MBR_PRESS_ENCLAVE,
            &MBR_PILLAYARPURAM,
            &mbr,
        ),
        two_site_page(
            "MBR (VALARMATHI NAGAR / BHARATHI PARK)",
            meta,
            &MBR_VALARMATHI_NAGAR,
            &MBR_BHARATHI_PARK,
            &mbr,
        ),
        two_site_page(
            "MSR (RAMAKRISHNAPURAM OLD / NEW)",
            meta,
            &MSR_OLD,
            &MSR_NEW,
            &msr,
        ),
    ]
}
