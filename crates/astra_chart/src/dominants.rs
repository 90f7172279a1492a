//! Weighted element distribution across a chart.
//!
//! Luminaries and the relationship planets count more: Sun and Moon
//! weigh 3, Venus and Mars 2, everything else 1; the ascendant sign, when
//! supplied, adds 3.

use serde::Serialize;

use crate::natal::{ChartBody, PlacedBody};
use crate::zodiac::{Element, ZodiacSign};

/// Weighted counts per element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ElementBalance {
    pub fire: u32,
    pub earth: u32,
    pub air: u32,
    pub water: u32,
}

impl ElementBalance {
    fn add(&mut self, element: Element, weight: u32) {
        match element {
            Element::Fire => self.fire += weight,
            Element::Earth => self.earth += weight,
            Element::Air => self.air += weight,
            Element::Water => self.water += weight,
        }
    }

    /// The element with the highest weighted count. Ties resolve in
    /// Fire, Earth, Air, Water order.
    pub fn dominant(&self) -> Element {
        let mut best = (Element::Fire, self.fire);
        for candidate in [
            (Element::Earth, self.earth),
            (Element::Air, self.air),
            (Element::Water, self.water),
        ] {
            if candidate.1 > best.1 {
                best = candidate;
            }
        }
        best.0
    }
}

fn weight_of(body: ChartBody) -> u32 {
    match body {
        ChartBody::Sun | ChartBody::Moon => 3,
        ChartBody::Venus | ChartBody::Mars => 2,
        _ => 1,
    }
}

/// Weighted element counts over a placed body set.
pub fn element_balance(bodies: &[PlacedBody], ascendant: Option<ZodiacSign>) -> ElementBalance {
    let mut balance = ElementBalance::default();
    for placed in bodies {
        balance.add(placed.sign.element(), weight_of(placed.body));
    }
    if let Some(sign) = ascendant {
        balance.add(sign.element(), 3);
    }
    balance
}
