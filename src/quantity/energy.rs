use crate::quantity::{
    currency::{Cost, KilowattHourRate},
    mass::{EmissionFactor, Kilograms},
    power::Kilowatts,
    time::Hours,
};

quantity!(KilowattHours, suffix: "kWh", precision: 2);

implement_mul!(Kilowatts, Hours, KilowattHours);
implement_div!(KilowattHours, Kilowatts, Hours);
implement_div!(KilowattHours, Hours, Kilowatts);
implement_mul!(KilowattHours, KilowattHourRate, Cost);
implement_mul!(KilowattHours, EmissionFactor, Kilograms);

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_runtime() {
        let runtime = KilowattHours(50.0) / Kilowatts(4.0);
        assert_abs_diff_eq!(runtime.0, 12.5);
    }

    #[test]
    fn test_cost() {
        let cost = KilowattHours(7.2) * KilowattHourRate(8.5);
        assert_abs_diff_eq!(cost.0, 61.2, epsilon = 1e-9);
    }

    #[test]
    fn test_emissions() {
        let emissions = KilowattHours(25.0) * EmissionFactor(0.82);
        assert_abs_diff_eq!(emissions.0, 20.5, epsilon = 1e-9);
    }
}
