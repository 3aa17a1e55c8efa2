use serde::Serialize;

/// A UK nation in which a profession may be practised. The set is fixed, so
/// nations are static values rather than repository-backed entities.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Nation {
    /// Translation key for the display name.
    pub name: &'static str,
    /// ISO 3166-2 style code, e.g. `GB-ENG`.
    pub code: &'static str,
}

// Equality is identity by code.
impl PartialEq for Nation {
    fn eq(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Eq for Nation {}

impl std::hash::Hash for Nation {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.code.hash(state);
    }
}

pub const NATIONS: [Nation; 4] = [
    Nation {
        name: "nations.england",
        code: "GB-ENG",
    },
    Nation {
        name: "nations.scotland",
        code: "GB-SCT",
    },
    Nation {
        name: "nations.wales",
        code: "GB-WLS",
    },
    Nation {
        name: "nations.northernIreland",
        code: "GB-NIR",
    },
];

impl Nation {
    pub const fn all() -> &'static [Nation] {
        &NATIONS
    }

    pub fn find_by_code(code: &str) -> Option<Nation> {
        NATIONS.iter().copied().find(|nation| nation.code == code)
    }
}
