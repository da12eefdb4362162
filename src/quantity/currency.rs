use std::fmt::{Debug, Display, Formatter};

quantity!(
    /// Vietnamese đồng, the backend reports all amounts in whole VND.
    Dong, via: f64
);

impl Dong {
    /// Revenue per unit, `None` when there are no units.
    #[expect(clippy::cast_precision_loss)]
    pub fn per(self, units: u64) -> Option<Self> {
        if units == 0 { None } else { Some(Self(self.0 / units as f64)) }
    }
}

impl Display for Dong {
    /// Format the way `vi-VN` does: dot-separated thousands and the `₫` sign.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let rounded = format!("{:.0}", self.0.abs());
        let mut grouped = String::with_capacity(rounded.len() + rounded.len() / 3);
        for (index, digit) in rounded.chars().enumerate() {
            if index != 0 && (rounded.len() - index) % 3 == 0 {
                grouped.push('.');
            }
            grouped.push(digit);
        }
        let sign = if self.0 < 0.0 && rounded != "0" { "-" } else { "" };
        write!(f, "{sign}{grouped} ₫")
    }
}

impl Debug for Dong {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.0}₫", self.0)
    }
}
