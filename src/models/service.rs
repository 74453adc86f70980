use serde::Serialize;

/// An entry in the static catalog of offered services. The `icon` names a
/// glyph in the frontend's icon set.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Service {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// Fixed catalog served by `GET /api/services`, in declaration order.
pub const CATALOG: &[Service] = &[
    Service {
        id: "emergency",
        title: "24/7 Emergency Plumbing",
        description: "Rapid response for leaks, bursts, and urgent repairs.",
        icon: "zap",
    },
    Service {
        id: "drain",
        title: "Drain Cleaning",
        description: "Clogged drains cleared fast with professional equipment.",
        icon: "pipe",
    },
    Service {
        id: "water-heater",
        title: "Water Heater Repair & Install",
        description: "Tank and tankless systems serviced and installed.",
        icon: "flame",
    },
    Service {
        id: "leak-detection",
        title: "Leak Detection",
        description: "Pinpoint hidden leaks with non-invasive diagnostics.",
        icon: "droplet",
    },
];
