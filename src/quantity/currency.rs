use crate::quantity::time::Years;

quantity!(
    /// Amount in the local currency, hence the generic currency sign.
    Cost, suffix: "¤", precision: 2
);

quantity!(KilowattHourRate, suffix: "¤/kWh", precision: 2);

impl Cost {
    /// Years needed for the savings to cover the investment.
    ///
    /// Zero means that the investment never pays back, not that it pays back instantly.
    pub fn payback_period(self, annual_savings: Self) -> Years {
        // Plain float comparison, so that NaN savings never pay back:
        if annual_savings.0 > 0.0 { Years(self / annual_savings) } else { Years::ZERO }
    }
}
