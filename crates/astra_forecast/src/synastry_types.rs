//! Types for synastry scoring and interpretation lookup.

use serde::Serialize;

use astra_chart::{AspectKind, ChartBody};

/// Interpretation text language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Language {
    En,
    Tr,
}

impl Language {
    /// Two-letter language code.
    pub const fn code(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Tr => "tr",
        }
    }
}

/// Broad quality of an aspect in synastry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HarmonyCategory {
    /// Conjunction, Trine, Sextile.
    Harmony,
    /// Opposition.
    Tension,
    /// Square.
    Conflict,
}

impl HarmonyCategory {
    /// Category of an aspect type.
    pub const fn of(kind: AspectKind) -> Self {
        match kind {
            AspectKind::Conjunction | AspectKind::Trine | AspectKind::Sextile => Self::Harmony,
            AspectKind::Opposition => Self::Tension,
            AspectKind::Square => Self::Conflict,
        }
    }
}

/// Relational theme of a cross-chart aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AspectTheme {
    General,
    Attraction,
    Communication,
    KarmicLesson,
    Growth,
    Emotional,
}

impl AspectTheme {
    pub const fn name(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Attraction => "Attraction",
            Self::Communication => "Communication",
            Self::KarmicLesson => "Karmic Lesson",
            Self::Growth => "Growth",
            Self::Emotional => "Emotional",
        }
    }
}

/// A cross-chart aspect with scoring metadata.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CrossAspect {
    /// Body from the first chart.
    pub first: ChartBody,
    /// Body from the second chart.
    pub second: ChartBody,
    pub kind: AspectKind,
    /// Deviation from the exact angle, degrees, one decimal.
    pub orb_deg: f64,
    pub category: HarmonyCategory,
    pub theme: AspectTheme,
    /// Whether the pair is one of the designated romance pairs.
    pub is_romance: bool,
    pub interpretation: String,
}

/// Synastry outcome: clamped compatibility score plus the cross aspects
/// that produced it, in detection order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynastryResult {
    /// Compatibility score, always in [10, 99].
    pub score: i32,
    pub aspects: Vec<CrossAspect>,
}

/// External interpretation-text source.
///
/// `lookup` is keyed on the alphabetically-sorted pair of body names plus
/// the aspect type; a miss falls back to [`generic`](Self::generic),
/// which never fails.
pub trait InterpretationLookup {
    /// Specific interpretation text, if one exists for the pair/aspect.
    fn lookup(
        &self,
        first: ChartBody,
        second: ChartBody,
        kind: AspectKind,
        language: Language,
    ) -> Option<String>;

    /// Generic fallback text. Always produces something.
    fn generic(
        &self,
        first: ChartBody,
        second: ChartBody,
        kind: AspectKind,
        language: Language,
    ) -> String {
        match language {
            Language::En => {
                let phrase = match kind {
                    AspectKind::Conjunction => "merges with",
                    AspectKind::Trine => "flows easily with",
                    AspectKind::Sextile => "supports",
                    AspectKind::Opposition => "pulls against",
                    AspectKind::Square => "clashes with",
                };
                format!("{} {} {} in this pairing.", first.name(), phrase, second.name())
            }
            Language::Tr => {
                let aspect = match kind {
                    AspectKind::Conjunction => "kavuşum",
                    AspectKind::Trine => "üçgen",
                    AspectKind::Sextile => "altmışlık",
                    AspectKind::Opposition => "karşıt",
                    AspectKind::Square => "kare",
                };
                format!(
                    "Bu eşleşmede {} ile {} arasında {} açısı var.",
                    first.name(),
                    second.name(),
                    aspect
                )
            }
        }
    }
}

/// Lookup with no specific entries; everything falls back to the
/// generic generator. Useful for tests and headless deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoInterpretations;

impl InterpretationLookup for NoInterpretations {
    fn lookup(
        &self,
        _first: ChartBody,
        _second: ChartBody,
        _kind: AspectKind,
        _language: Language,
    ) -> Option<String> {
        None
    }
}
