quantity!(Hours, suffix: "h", precision: 1);

impl Hours {
    pub const DAY: Self = Self(24.0);
}

quantity!(
    /// Only used for payback periods, hence the loose precision.
    Years, suffix: "yr", precision: 1
);
