//! Two-segment donut chart: principal vs. interest share of the total payable.
//!
//! Arc lengths are in vector-graphics units (`f64`). The principal segment
//! starts at the top of the ring; the interest segment starts where the
//! principal segment ends, via a negative dash offset.

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use crate::amortization::emi::AmortizationResult;
use crate::types::Money;

/// Radius of the reference chart.
pub const REFERENCE_RING_RADIUS: f64 = 80.0;

/// Rotation that moves the stroke origin from 3 o'clock to 12 o'clock.
pub const TOP_ROTATION_DEGREES: f64 = -90.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RingSegment {
    Principal,
    Interest,
}

impl RingSegment {
    pub fn label(&self) -> &'static str {
        match self {
            RingSegment::Principal => "Principal Amount",
            RingSegment::Interest => "Total Interest",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ArcAllocation {
    pub ring_circumference: f64,
    pub principal_arc_length: f64,
    pub interest_arc_length: f64,
}

impl ArcAllocation {
    pub fn is_empty(&self) -> bool {
        self.principal_arc_length == 0.0 && self.interest_arc_length == 0.0
    }

    pub fn arc_length(&self, segment: RingSegment) -> f64 {
        match segment {
            RingSegment::Principal => self.principal_arc_length,
            RingSegment::Interest => self.interest_arc_length,
        }
    }

    /// Stroke parameters for both segments, principal first.
    pub fn strokes(&self) -> [ArcStroke; 2] {
        [
            ArcStroke::new(RingSegment::Principal, self.principal_arc_length, 0.0, self),
            ArcStroke::new(
                RingSegment::Interest,
                self.interest_arc_length,
                -self.principal_arc_length,
                self,
            ),
        ]
    }
}

/// One partial-ring stroke, as a dash pattern on a full circle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcStroke {
    pub segment: RingSegment,
    pub dash_length: f64,
    pub gap_length: f64,
    pub dash_offset: f64,
    pub rotation_degrees: f64,
}

impl ArcStroke {
    fn new(segment: RingSegment, dash_length: f64, dash_offset: f64, alloc: &ArcAllocation) -> Self {
        Self {
            segment,
            dash_length,
            gap_length: (alloc.ring_circumference - dash_length).max(0.0),
            dash_offset,
            rotation_degrees: TOP_ROTATION_DEGREES,
        }
    }

    /// `stroke-dasharray` value.
    pub fn dash_array(&self) -> String {
        format!("{} {}", self.dash_length, self.gap_length)
    }
}

pub fn ring_circumference(ring_radius: f64) -> f64 {
    2.0 * PI * ring_radius
}

/// Split the ring proportionally to principal and interest.
///
/// When `total_payable <= 0` both arcs are zero; the circumference is still
/// reported so the background track can be drawn.
pub fn allocate_arcs(amort: &AmortizationResult, principal: Money, ring_radius: f64) -> ArcAllocation {
    let ring_circumference = ring_circumference(ring_radius);
    if amort.total_payable <= Decimal::ZERO {
        return ArcAllocation {
            ring_circumference,
            ..ArcAllocation::default()
        };
    }

    let share = |part: Money| -> f64 {
        (part / amort.total_payable).to_f64().unwrap_or(0.0) * ring_circumference
    };
    ArcAllocation {
        ring_circumference,
        principal_arc_length: share(principal),
        interest_arc_length: share(amort.total_interest),
    }
}
