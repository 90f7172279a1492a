//! Transit-driven career outlook.
//!
//! Checks the current positions of the two career significators (Jupiter
//! and Saturn) against the natal Midheaven and against natal Saturn, and
//! renders a short bilingual forecast from the strongest hit.

use chrono::{DateTime, Utc};
use serde::Serialize;

use astra_chart::{
    AspectKind, ChartBody, Element, NatalChart, ZodiacSign, angular_separation_deg,
};
use astra_ephem::{Body, EphemerisAdapter};

use crate::error::ForecastError;
use crate::synastry_types::Language;

/// Orb for transit contacts, degrees (exclusive).
const TRANSIT_ORB_DEG: f64 = 10.0;

/// What a transiting planet is contacting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TransitTarget {
    /// The natal Midheaven degree.
    Midheaven,
    /// The natal Saturn longitude.
    NatalSaturn,
}

/// One active transit contact.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransitImpact {
    pub planet: ChartBody,
    pub target: TransitTarget,
    pub kind: AspectKind,
}

/// Career analysis: Midheaven context, natal Saturn placement, and the
/// currently active transits with a rendered forecast.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CareerOutlook {
    /// Sign on the tenth house cusp.
    pub mc_sign: ZodiacSign,
    /// Natal Saturn's sign, if Saturn was computed.
    pub saturn_sign: Option<ZodiacSign>,
    /// Element of natal Saturn's sign. Earth when Saturn is missing.
    pub saturn_element: Element,
    /// Active contacts, in detection order.
    pub impacts: Vec<TransitImpact>,
    /// Short forecast text driven by the first impact.
    pub forecast: String,
}

/// Aspect bands checked against the Midheaven, in priority order.
const MC_ASPECTS: [AspectKind; 4] = [
    AspectKind::Conjunction,
    AspectKind::Trine,
    AspectKind::Square,
    AspectKind::Opposition,
];

fn within_orb(separation_deg: f64, kind: AspectKind) -> bool {
    (separation_deg - kind.angle_deg()).abs() < TRANSIT_ORB_DEG
}

/// Compute the career outlook for a natal chart at the adapter's current
/// instant.
pub fn career_outlook(
    adapter: &dyn EphemerisAdapter,
    chart: &NatalChart,
    language: Language,
) -> Result<CareerOutlook, ForecastError> {
    let now = adapter.now();
    let mc_deg = chart.angles.midheaven_deg;
    let natal_saturn = chart.body(ChartBody::Saturn);
    let natal_saturn_deg = natal_saturn.map(|p| p.lon_deg).unwrap_or(0.0);

    let mut impacts = Vec::new();
    for (chart_body, body) in [
        (ChartBody::Jupiter, Body::Jupiter),
        (ChartBody::Saturn, Body::Saturn),
    ] {
        let lon = transit_longitude(adapter, now, body)?;

        let mc_sep = angular_separation_deg(lon, mc_deg);
        if let Some(&kind) = MC_ASPECTS.iter().find(|&&k| within_orb(mc_sep, k)) {
            impacts.push(TransitImpact {
                planet: chart_body,
                target: TransitTarget::Midheaven,
                kind,
            });
        }

        let saturn_sep = angular_separation_deg(lon, natal_saturn_deg);
        if within_orb(saturn_sep, AspectKind::Conjunction) {
            impacts.push(TransitImpact {
                planet: chart_body,
                target: TransitTarget::NatalSaturn,
                kind: AspectKind::Conjunction,
            });
        }
    }

    let forecast = match impacts.first() {
        Some(impact) => forecast_text(*impact, language),
        None => neutral_text(language),
    };

    Ok(CareerOutlook {
        mc_sign: chart.houses[9].sign,
        saturn_sign: natal_saturn.map(|p| p.sign),
        saturn_element: natal_saturn
            .map(|p| p.sign.element())
            .unwrap_or(Element::Earth),
        impacts,
        forecast,
    })
}

fn transit_longitude(
    adapter: &dyn EphemerisAdapter,
    now: DateTime<Utc>,
    body: Body,
) -> Result<f64, ForecastError> {
    Ok(adapter.apparent_ecliptic_position(now, body)?.lon_deg)
}

fn is_flowing(kind: AspectKind) -> bool {
    matches!(kind, AspectKind::Conjunction | AspectKind::Trine)
}

fn forecast_text(impact: TransitImpact, language: Language) -> String {
    match (impact.planet, impact.target, language) {
        (ChartBody::Jupiter, TransitTarget::Midheaven, Language::En) => {
            if is_flowing(impact.kind) {
                "Jupiter is crossing your career axis: visibility grows and doors open. \
                 A promotion or expanded role is well supported now."
                    .to_string()
            } else {
                "Jupiter is pressuring your career axis: opportunities look bigger than \
                 they are. Guard against overcommitting."
                    .to_string()
            }
        }
        (ChartBody::Jupiter, TransitTarget::Midheaven, Language::Tr) => {
            if is_flowing(impact.kind) {
                "Jüpiter kariyer eksenini destekliyor: görünürlük artıyor ve kapılar \
                 açılıyor. Terfi veya daha geniş bir rol için uygun bir dönem."
                    .to_string()
            } else {
                "Jüpiter kariyer eksenini zorluyor: fırsatlar olduğundan büyük \
                 görünebilir. Aşırı yüklenmekten kaçının."
                    .to_string()
            }
        }
        (ChartBody::Saturn, TransitTarget::Midheaven, Language::En) => {
            if is_flowing(impact.kind) {
                "Saturn is consolidating your professional standing: sustained effort \
                 is turning into durable structure and authority."
                    .to_string()
            } else {
                "Saturn is testing your career foundations: expect heavier \
                 responsibility and slower progress. What survives this will last."
                    .to_string()
            }
        }
        (ChartBody::Saturn, TransitTarget::Midheaven, Language::Tr) => {
            if is_flowing(impact.kind) {
                "Satürn mesleki konumunu sağlamlaştırıyor: sürekli emek kalıcı yapıya \
                 ve otoriteye dönüşüyor."
                    .to_string()
            } else {
                "Satürn kariyer temellerini sınıyor: daha ağır sorumluluk ve yavaş \
                 ilerleme bekleyin. Bu dönemden geçen kalıcı olur."
                    .to_string()
            }
        }
        (_, TransitTarget::NatalSaturn, Language::En) => {
            if impact.planet == ChartBody::Saturn {
                "Saturn is returning to its natal place: a maturity threshold. \
                 Commitments made now define the next long cycle."
                    .to_string()
            } else {
                "Jupiter is meeting your natal Saturn: long-standing obligations \
                 ease, and disciplined work finally pays off."
                    .to_string()
            }
        }
        (_, TransitTarget::NatalSaturn, Language::Tr) => {
            if impact.planet == ChartBody::Saturn {
                "Satürn doğum haritasındaki yerine dönüyor: bir olgunluk eşiği. \
                 Şimdi verilen sözler uzun bir döngüyü belirler."
                    .to_string()
            } else {
                "Jüpiter natal Satürn ile buluşuyor: eski yükümlülükler hafifliyor, \
                 disiplinli emek karşılığını veriyor."
                    .to_string()
            }
        }
        // Only Jupiter and Saturn are ever used as transiting planets.
        (_, TransitTarget::Midheaven, _) => unreachable!(),
    }
}

fn neutral_text(language: Language) -> String {
    match language {
        Language::En => "No major career transits are active. Steady, incremental \
                         progress serves you best in this period."
            .to_string(),
        Language::Tr => "Şu anda önemli bir kariyer transiti yok. Bu dönemde istikrarlı \
                         ve adım adım ilerleme en iyi sonucu verir."
            .to_string(),
    }
}
