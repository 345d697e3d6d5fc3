//! Motor current draw and battery capacity sizing.
//!
//! The electrical side of a sizing run converts the mechanical power budget
//! into a supply current and a battery pack. All figures are steady-state
//! estimates; transient inrush and controller losses beyond the motor
//! efficiency are out of scope.

use serde::Serialize;

/// Default nominal bus voltage in volts.
pub const DEFAULT_NOMINAL_VOLTAGE: f64 = 24.0;
/// Default combined efficiency of motor and drive electronics.
pub const DEFAULT_MOTOR_EFFICIENCY: f64 = 0.85;
/// Default sizing margin applied to battery energy.
pub const DEFAULT_SAFETY_FACTOR: f64 = 1.2;

/// Battery pack sized for a power budget and operating time.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct BatteryRequirements {
    /// Stored energy in watt-hours, including the sizing margin.
    pub energy: f64,
    /// Capacity in ampere-hours at the nominal bus voltage.
    pub capacity: f64,
}

/// Complete electrical sizing for an arm's power system.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PowerSystemAnalysis {
    /// Combined mechanical power of all joints in watts.
    pub total_power: f64,
    /// Supply current in amperes drawn at the nominal bus voltage.
    pub supply_current: f64,
    /// Battery pack sized for the run.
    pub battery: BatteryRequirements,
}

/// Sizes supply currents and battery packs for a power budget.
///
/// Negative powers are passed through unchanged so regenerative joints reduce
/// the budget; callers that want to treat them as faults should screen their
/// inputs first.
///
/// # Examples
///
/// ```
/// use armx::ElectricalAnalyzer;
///
/// let analyzer = ElectricalAnalyzer::default();
/// let current = analyzer.current(100.0, None);
/// assert!((current - 100.0 / (24.0 * 0.85)).abs() < 1.0e-9);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ElectricalAnalyzer {
    /// Nominal bus voltage in volts.
    pub nominal_voltage: f64,
    /// Combined efficiency of motor and drive electronics.
    pub motor_efficiency: f64,
}

impl Default for ElectricalAnalyzer {
    fn default() -> Self {
        Self {
            nominal_voltage: DEFAULT_NOMINAL_VOLTAGE,
            motor_efficiency: DEFAULT_MOTOR_EFFICIENCY,
        }
    }
}

impl ElectricalAnalyzer {
    /// Creates an analyzer with the default voltage and efficiency.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the supply current in amperes needed to deliver a mechanical
    /// power, accounting for the motor efficiency.
    ///
    /// `voltage` overrides the nominal bus voltage for this call only.
    #[must_use]
    pub fn current(&self, power: f64, voltage: Option<f64>) -> f64 {
        let voltage = voltage.unwrap_or(self.nominal_voltage);
        power / (voltage * self.motor_efficiency)
    }

    /// Returns the electrical power in watts drawn by a current at the bus
    /// voltage.
    ///
    /// `voltage` overrides the nominal bus voltage for this call only.
    #[must_use]
    pub fn power_consumption(&self, current: f64, voltage: Option<f64>) -> f64 {
        current * voltage.unwrap_or(self.nominal_voltage)
    }

    /// Sizes a battery pack for a power draw over an operating time in hours.
    ///
    /// `safety_factor` scales the stored energy and defaults to
    /// [`DEFAULT_SAFETY_FACTOR`]. The ampere-hour capacity is quoted at the
    /// nominal bus voltage.
    #[must_use]
    pub fn battery_requirements(
        &self,
        power: f64,
        operating_time: f64,
        safety_factor: Option<f64>,
    ) -> BatteryRequirements {
        let energy = power * operating_time * safety_factor.unwrap_or(DEFAULT_SAFETY_FACTOR);
        BatteryRequirements {
            energy,
            capacity: energy / self.nominal_voltage,
        }
    }

    /// Sizes the complete power system for a set of joint powers.
    ///
    /// Sums the joint powers, converts the total into a supply current at the
    /// nominal bus voltage and sizes a battery for the operating time in
    /// hours using the default safety factor.
    ///
    /// # Examples
    ///
    /// ```
    /// use armx::ElectricalAnalyzer;
    ///
    /// let analyzer = ElectricalAnalyzer::default();
    /// let system = analyzer.analyze_power_system(&[2.0, 1.5, 0.5], 2.0);
    /// assert!((system.total_power - 4.0).abs() < 1.0e-9);
    /// ```
    #[must_use]
    pub fn analyze_power_system(
        &self,
        joint_powers: &[f64],
        operating_time: f64,
    ) -> PowerSystemAnalysis {
        let total_power: f64 = joint_powers.iter().sum();
        PowerSystemAnalysis {
            total_power,
            supply_current: self.current(total_power, None),
            battery: self.battery_requirements(total_power, operating_time, None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn current_uses_nominal_voltage_by_default() {
        let analyzer = ElectricalAnalyzer::default();
        assert_relative_eq!(
            analyzer.current(100.0, None),
            100.0 / (24.0 * 0.85),
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn current_honours_a_per_call_voltage() {
        let analyzer = ElectricalAnalyzer::default();
        assert_relative_eq!(
            analyzer.current(100.0, Some(48.0)),
            100.0 / (48.0 * 0.85),
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn power_consumption_is_current_times_voltage() {
        let analyzer = ElectricalAnalyzer::default();
        assert_relative_eq!(analyzer.power_consumption(2.5, None), 60.0, max_relative = 1.0e-12);
        assert_relative_eq!(
            analyzer.power_consumption(2.5, Some(12.0)),
            30.0,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn battery_sizing_applies_the_default_margin() {
        let analyzer = ElectricalAnalyzer::default();
        let battery = analyzer.battery_requirements(100.0, 2.0, None);
        assert_relative_eq!(battery.energy, 240.0, max_relative = 1.0e-12);
        assert_relative_eq!(battery.capacity, 10.0, max_relative = 1.0e-12);
    }

    #[test]
    fn battery_sizing_honours_a_custom_margin() {
        let analyzer = ElectricalAnalyzer::default();
        let battery = analyzer.battery_requirements(100.0, 2.0, Some(1.5));
        assert_relative_eq!(battery.energy, 300.0, max_relative = 1.0e-12);
        assert_relative_eq!(battery.capacity, 12.5, max_relative = 1.0e-12);
    }

    #[test]
    fn power_system_combines_joint_budgets() {
        let analyzer = ElectricalAnalyzer::default();
        let system = analyzer.analyze_power_system(&[2.081_015_257_032_009_3, 0.7848, 0.0], 2.0);
        assert_relative_eq!(system.total_power, 2.865_815_257_032_009_5, max_relative = 1.0e-12);
        assert_relative_eq!(
            system.supply_current,
            0.140_481_140_050_588_7,
            max_relative = 1.0e-12
        );
        assert_relative_eq!(system.battery.energy, 6.877_956_616_876_823, max_relative = 1.0e-12);
        assert_relative_eq!(
            system.battery.capacity,
            0.286_581_525_703_200_95,
            max_relative = 1.0e-12
        );
    }

    #[test]
    fn regenerative_joints_reduce_the_budget() {
        let analyzer = ElectricalAnalyzer::default();
        let system = analyzer.analyze_power_system(&[5.0, -2.0], 1.0);
        assert_relative_eq!(system.total_power, 3.0, max_relative = 1.0e-12);
        assert!(system.battery.energy > 0.0);
    }

    #[test]
    fn empty_power_budget_sizes_an_empty_system() {
        let analyzer = ElectricalAnalyzer::default();
        let system = analyzer.analyze_power_system(&[], 2.0);
        assert_eq!(system.total_power, 0.0);
        assert_eq!(system.supply_current, 0.0);
        assert_eq!(system.battery.energy, 0.0);
    }

    mod proptests {
        use super::*;
        use approx::relative_eq;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn current_and_consumption_are_consistent(
                power in 0.1..10_000.0_f64,
                voltage in 6.0..96.0_f64,
            ) {
                let analyzer = ElectricalAnalyzer::default();
                let current = analyzer.current(power, Some(voltage));
                let electrical_power = analyzer.power_consumption(current, Some(voltage));
                prop_assert!(relative_eq!(
                    electrical_power,
                    power / analyzer.motor_efficiency,
                    max_relative = 1.0e-9
                ));
            }

            #[test]
            fn battery_capacity_scales_with_energy(
                power in 0.1..10_000.0_f64,
                operating_time in 0.1..24.0_f64,
            ) {
                let analyzer = ElectricalAnalyzer::default();
                let battery = analyzer.battery_requirements(power, operating_time, None);
                prop_assert!(relative_eq!(
                    battery.capacity * analyzer.nominal_voltage,
                    battery.energy,
                    max_relative = 1.0e-9
                ));
            }
        }
    }
}
