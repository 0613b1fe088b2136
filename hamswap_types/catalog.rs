//! Static equipment vocabulary used by the autocomplete layer: popular
//! manufacturers, per-category model lists and the manufacturer→model-prefix
//! table. This is a fixed lookup, not a learned association.

use crate::listing::Category;

pub const MANUFACTURERS: &[&str] = &[
    "Yaesu",
    "Icom",
    "Kenwood",
    "Elecraft",
    "Xiegu",
    "FlexRadio",
    "Heathkit",
    "Alinco",
    "Anytone",
    "Baofeng",
    "MFJ",
    "Cushcraft",
    "Diamond",
    "Comet",
    "Hustler",
    "Heil",
    "Ameritron",
    "Alpha",
    "Ten-Tec",
    "Quansheng",
];

pub const HF_TRANSCEIVERS: &[&str] = &[
    // Yaesu
    "FT-991A",
    "FT-710",
    "FT-dx10",
    "FT-857D",
    "FT-891",
    "FT-450D",
    "FT-818",
    "FT-dx101D",
    "FT-dx101MP",
    "FT-1000MP",
    "FT-920",
    "FT-897D",
    // Icom
    "IC-7300",
    "IC-705",
    "IC-7610",
    "IC-746PRO",
    "IC-718",
    "IC-7851",
    "IC-7600",
    "IC-756PROIII",
    "IC-9700",
    "IC-7410",
    // Kenwood
    "TS-590SG",
    "TS-890S",
    "TS-480SAT",
    "TS-2000",
    "TS-990S",
    "TS-570D",
    "TS-450S",
    // Elecraft
    "K3",
    "KX3",
    "K4",
    "KX2",
    "K2",
    // Xiegu
    "G90",
    "X6100",
    "G106",
    "X5105",
    // FlexRadio
    "6400",
    "6600",
    "6700",
    // Ten-Tec
    "Omni VII",
    "Orion",
    "Argonaut V",
];

pub const VHF_UHF_TRANSCEIVERS: &[&str] = &[
    // Yaesu
    "FT-8800R",
    "FT-8900R",
    "FT-7900R",
    "FTM-400XDR",
    "FTM-300DR",
    // Icom
    "IC-2730A",
    "IC-7100",
    "ID-5100A",
    "IC-V86",
    // Kenwood
    "TM-D710G",
    "TM-V71A",
    "TM-281A",
];

pub const HANDHELD_TRANSCEIVERS: &[&str] = &[
    // Yaesu
    "FT-70DR",
    "FT-65R",
    "VX-6R",
    "FT-4XR",
    // Icom
    "ID-52A",
    "ID-51A",
    "IC-V80",
    // Kenwood
    "TH-D74A",
    "TH-D72A",
    "TH-K20A",
    // Baofeng
    "UV-5R",
    "UV-82",
    "BF-F8HP",
    // Anytone
    "AT-D878UV",
    "AT-D868UV",
    // Quansheng
    "UV-K5",
];

pub const ANTENNAS: &[&str] = &[
    "6BTV", "R7000", "R8", "A3S", "A4S", "X50", "X200", "GP-3", "GP-9", "1984", "G5RV",
    "OCF Dipole",
];

pub const AMPLIFIERS: &[&str] = &[
    "AL-811",
    "AL-1200",
    "AL-80B",
    "87A",
    "8410",
    "HL-1.2KFX",
    "Expert 1.3K-FA",
    "1000",
    "2000A",
];

pub const TUNERS: &[&str] = &["949E", "993B", "998", "AT-200Pro", "AT-Auto", "KAT500"];

/// Manufacturer → model prefixes. A manufacturer absent from this table
/// leaves the model list unrestricted.
pub const MANUFACTURER_MODEL_PREFIXES: &[(&str, &[&str])] = &[
    ("Yaesu", &["FT", "VX"]),
    ("Icom", &["IC", "ID"]),
    ("Kenwood", &["TS", "TM", "TH"]),
    ("Elecraft", &["K"]),
    ("Xiegu", &["G", "X"]),
    ("FlexRadio", &["6"]),
    ("Baofeng", &["UV", "BF"]),
    ("Anytone", &["AT"]),
    ("MFJ", &["MFJ"]),
    ("Cushcraft", &["A", "R"]),
    ("Diamond", &["X"]),
    ("Comet", &["GP"]),
    ("Hustler", &["6BTV"]),
    ("Ameritron", &["AL"]),
    ("Alpha", &["8", "87"]),
    ("LDG", &["AT"]),
];

/// Closed country list for the location autocomplete.
pub const COUNTRIES: &[&str] = &[
    "Serbia",
    "Croatia",
    "Bosnia and Herzegovina",
    "Slovenia",
    "North Macedonia",
    "Montenegro",
    "Germany",
    "Austria",
    "Switzerland",
    "Italy",
    "Hungary",
    "Romania",
    "Bulgaria",
    "Greece",
    "Poland",
    "Czech Republic",
    "Slovakia",
    "Ukraine",
    "France",
    "Spain",
    "United Kingdom",
    "Netherlands",
    "Belgium",
    "Denmark",
    "Sweden",
    "Norway",
    "Finland",
    "Portugal",
    "Ireland",
    "Turkey",
];

/// Every known model, sorted, for the category-less autocomplete.
pub fn all_models() -> Vec<&'static str> {
    let mut models: Vec<&'static str> = HF_TRANSCEIVERS
        .iter()
        .chain(VHF_UHF_TRANSCEIVERS)
        .chain(HANDHELD_TRANSCEIVERS)
        .chain(ANTENNAS)
        .chain(AMPLIFIERS)
        .chain(TUNERS)
        .copied()
        .collect();
    models.sort_unstable();
    models
}

/// Model vocabulary for one equipment category. Categories without a curated
/// list fall back to the full model set.
pub fn models_for_category(category: Category) -> Vec<&'static str> {
    match category {
        Category::TransceiverHf => HF_TRANSCEIVERS.to_vec(),
        Category::TransceiverVhfUhf => VHF_UHF_TRANSCEIVERS.to_vec(),
        Category::TransceiverHandheld => HANDHELD_TRANSCEIVERS.to_vec(),
        Category::AntennaHf | Category::AntennaVhfUhf | Category::AntennaAccessories => {
            ANTENNAS.to_vec()
        }
        Category::Amplifier => AMPLIFIERS.to_vec(),
        Category::Tuner => TUNERS.to_vec(),
        _ => all_models(),
    }
}

/// Prefixes mapped to a manufacturer, if any. Lookup is exact.
pub fn model_prefixes(manufacturer: &str) -> Option<&'static [&'static str]> {
    MANUFACTURER_MODEL_PREFIXES
        .iter()
        .find(|(name, _)| *name == manufacturer)
        .map(|(_, prefixes)| *prefixes)
}
