quantity!(Percentage, suffix: "%", precision: 0);

impl Percentage {
    pub const fn from_ratio(ratio: f64) -> Self {
        Self(ratio * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn test_ratio() {
        assert_abs_diff_eq!(Percentage::from_ratio(0.25).0, 25.0);
    }
}
