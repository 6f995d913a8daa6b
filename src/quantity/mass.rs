quantity!(Kilograms, suffix: "kg", precision: 2);

quantity!(
    /// Kilograms of CO₂ emitted per kilowatt-hour drawn from the grid.
    EmissionFactor, suffix: "kg/kWh", precision: 2
);
