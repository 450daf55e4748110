// The mock-up displays a fixed snapshot; nothing here is measured, derived
// or updated at runtime.

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VitalSigns {
    pub heart_rate_bpm: u16,
    pub spo2_percent: u8,
    pub systolic_mmhg: u16,
    pub diastolic_mmhg: u16,
    pub temperature_celsius: f32,
}

pub const CURRENT: VitalSigns = VitalSigns {
    heart_rate_bpm: 124,
    spo2_percent: 91,
    systolic_mmhg: 155,
    diastolic_mmhg: 95,
    temperature_celsius: 38.1,
};

// Displayed as given on the detail screens, not computed from the snapshot.
pub const MAP_MMHG: u16 = 115;
pub const PULSE_PRESSURE_MMHG: u16 = 60;
pub const QTC_MS: u16 = 440;

/**
 * SpO2 over the last 30 minutes, in chart coordinates: x 0..100 is -30m to
 * now, y 0 is 100% and y 100 is 90%. The dashed 95% gridline sits at y 50.
 */
pub const SPO2_TREND: [(f32, f32); 6] = [
    (0.0, 20.0),
    (20.0, 25.0),
    (40.0, 40.0),
    (60.0, 60.0),
    (80.0, 80.0),
    (100.0, 90.0),
];

#[derive(Debug, Clone, Copy)]
pub struct BloodPressureSample {
    pub label: &'static str,
    pub systolic_mmhg: u16,
    pub diastolic_mmhg: u16,
}

pub const BP_TREND: [BloodPressureSample; 4] = [
    BloodPressureSample { label: "-15m", systolic_mmhg: 130, diastolic_mmhg: 85 },
    BloodPressureSample { label: "-10m", systolic_mmhg: 135, diastolic_mmhg: 88 },
    BloodPressureSample { label: "-5m", systolic_mmhg: 142, diastolic_mmhg: 90 },
    BloodPressureSample { label: "Jetzt", systolic_mmhg: 155, diastolic_mmhg: 95 },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trend_ends_at_the_current_reading() {
        let now = BP_TREND[BP_TREND.len() - 1];
        assert_eq!(now.systolic_mmhg, CURRENT.systolic_mmhg);
        assert_eq!(now.diastolic_mmhg, CURRENT.diastolic_mmhg);
        assert_eq!(SPO2_TREND[SPO2_TREND.len() - 1], (100.0, 90.0));
    }
}
