//! Display labels for the catalog's enum codes.
//!
//! Codes missing from a table are shown as-is.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LabelCategory {
    FormatType,
    Level,
    Role,
    SnowType,
}

const FORMAT_TYPE: &[(&str, &str)] = &[
    ("block_hot", "Bloc (fer)"),
    ("block_rub_roto", "Bloc (frottement/roto)"),
    ("block_rub", "Bloc (frottement)"),
    ("liquid", "Liquide"),
    ("liquid_spray", "Spray"),
    ("powder_hot", "Poudre (fer)"),
    ("powder", "Poudre"),
    ("paste_rub", "Pâte"),
];

const LEVEL: &[(&str, &str)] = &[
    ("beginner", "Débutant"),
    ("sport", "Sport"),
    ("expert", "Expert"),
];

const ROLE: &[(&str, &str)] = &[
    ("base_prep", "Préparation base"),
    ("base", "Base"),
    ("day_wax", "Fart du jour"),
    ("top_coat", "Couche finale"),
    ("universal", "Universel"),
    ("cleaner", "Nettoyant"),
    ("additive", "Additif"),
];

const SNOW_TYPE: &[(&str, &str)] = &[
    ("heavy_new", "Neige lourde neuve"),
    ("artificial", "Artificielle"),
    ("fresh_falling", "Neige tombante"),
    ("fine_fresh", "Fine fraîche"),
    ("mixed_new_dirty_base", "Mixte neuve/sale"),
    ("compact", "Compacte"),
    ("compact_glazed", "Compacte glacée"),
    ("compact_dirty", "Compacte sale"),
    ("transformed", "Transformée"),
    ("wet", "Mouillée"),
    ("dry_grain", "Grain sec"),
    ("wet_grain", "Grain humide"),
];

impl LabelCategory {
    pub fn table(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::FormatType => FORMAT_TYPE,
            Self::Level => LEVEL,
            Self::Role => ROLE,
            Self::SnowType => SNOW_TYPE,
        }
    }

    pub fn lookup(self, code: &str) -> Option<&'static str> {
        self.table()
            .iter()
            .find(|(k, _)| *k == code)
            .map(|(_, label)| *label)
    }

    /// Localized label for `code`, or `code` itself when unknown.
    pub fn label<'a>(self, code: &'a str) -> &'a str {
        self.lookup(code).unwrap_or(code)
    }
}

/// CSS class for a level badge; empty for unknown levels.
pub fn level_class(code: &str) -> &'static str {
    match code {
        "beginner" => "lvl-beg",
        "sport" => "lvl-spo",
        "expert" => "lvl-exp",
        _ => "",
    }
}
