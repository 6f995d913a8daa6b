quantity!(Kilowatts, suffix: "kW", precision: 2);

impl Kilowatts {
    pub const ONE_WATT: Self = Self(0.001);
}
