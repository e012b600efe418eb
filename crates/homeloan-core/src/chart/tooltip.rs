//! Pointer hit-testing on the ring and the tooltip shown for a segment.

use serde::{Deserialize, Serialize};
use std::f64::consts::TAU;

use super::ring::{ring_circumference, ArcAllocation, RingSegment};
use crate::amortization::emi::AmortizationResult;
use crate::format::{format_inr, round_currency};
use crate::types::Money;

/// Ring radius and stroke width, in the same units as the pointer position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RingGeometry {
    pub radius: f64,
    pub stroke_width: f64,
}

impl RingGeometry {
    pub fn new(radius: f64, stroke_width: f64) -> Self {
        Self {
            radius,
            stroke_width,
        }
    }

    pub fn circumference(&self) -> f64 {
        ring_circumference(self.radius)
    }

    /// Segment under a pointer at `(dx, dy)` from the ring centre, y pointing down.
    ///
    /// Positions off the stroke band, or past the drawn arcs, hit nothing.
    pub fn hit_test(&self, alloc: &ArcAllocation, dx: f64, dy: f64) -> Option<RingSegment> {
        let distance = dx.hypot(dy);
        let half = self.stroke_width / 2.0;
        if distance < self.radius - half || distance > self.radius + half {
            return None;
        }

        // Clockwise from 12 o'clock.
        let angle = dx.atan2(-dy).rem_euclid(TAU);
        let along = angle / TAU * alloc.ring_circumference;
        if along < alloc.principal_arc_length {
            Some(RingSegment::Principal)
        } else if along < alloc.principal_arc_length + alloc.interest_arc_length {
            Some(RingSegment::Interest)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tooltip {
    pub segment: RingSegment,
    pub label: String,
    pub value: Money,
    pub formatted: String,
    pub x: f64,
    pub y: f64,
}

impl Tooltip {
    /// Tooltip for `segment` placed at the pointer position.
    pub fn for_segment(
        segment: RingSegment,
        amort: &AmortizationResult,
        principal: Money,
        x: f64,
        y: f64,
    ) -> Self {
        let raw = match segment {
            RingSegment::Principal => principal,
            RingSegment::Interest => amort.total_interest,
        };
        Self {
            segment,
            label: segment.label().to_string(),
            value: round_currency(raw),
            formatted: format_inr(raw),
            x,
            y,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn quarter_split() -> (RingGeometry, ArcAllocation) {
        let geometry = RingGeometry::new(80.0, 20.0);
        let c = geometry.circumference();
        let alloc = ArcAllocation {
            ring_circumference: c,
            principal_arc_length: c * 0.75,
            interest_arc_length: c * 0.25,
        };
        (geometry, alloc)
    }

    #[test]
    fn test_hit_principal_at_three_oclock() {
        let (g, a) = quarter_split();
        assert_eq!(g.hit_test(&a, 80.0, 0.0), Some(RingSegment::Principal));
    }

    #[test]
    fn test_hit_interest_at_ten_oclock() {
        let (g, a) = quarter_split();
        // 300 degrees clockwise from the top.
        let (dx, dy) = (-80.0 * 0.866, -80.0 * 0.5);
        assert_eq!(g.hit_test(&a, dx, dy), Some(RingSegment::Interest));
    }

    #[test]
    fn test_miss_inside_hole_and_outside_ring() {
        let (g, a) = quarter_split();
        assert_eq!(g.hit_test(&a, 0.0, 10.0), None);
        assert_eq!(g.hit_test(&a, 0.0, 95.0), None);
    }

    #[test]
    fn test_empty_allocation_hits_nothing() {
        let g = RingGeometry::new(80.0, 20.0);
        let a = ArcAllocation {
            ring_circumference: g.circumference(),
            ..ArcAllocation::default()
        };
        assert_eq!(g.hit_test(&a, 80.0, 0.0), None);
    }

    #[test]
    fn test_tooltip_rounds_value() {
        let amort = AmortizationResult {
            monthly_payment: dec!(76_069.99),
            total_payable: dec!(13_692_598.89),
            total_interest: dec!(6_192_598.89),
        };
        let t = Tooltip::for_segment(RingSegment::Interest, &amort, dec!(7_500_000), 12.0, 34.0);
        assert_eq!(t.label, "Total Interest");
        assert_eq!(t.value, dec!(6_192_599));
        assert_eq!(t.formatted, "₹61,92,599");
        assert_eq!((t.x, t.y), (12.0, 34.0));
    }
}
