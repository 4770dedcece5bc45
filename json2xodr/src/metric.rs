/// Distance along or across a road, in metres
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, serde::Serialize)]
pub struct Metre(f64);

impl Metre {
    pub const ZERO: Metre = Self(0.0_f64);

    #[must_use]
    pub const fn new(val: f64) -> Self {
        Self(val)
    }

    #[must_use]
    pub const fn val(&self) -> f64 {
        self.0
    }
}

impl std::ops::Add for Metre {
    type Output = Self;
    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}
impl std::ops::AddAssign for Metre {
    fn add_assign(&mut self, other: Self) {
        *self = Self(self.0 + other.0);
    }
}
impl std::iter::Sum for Metre {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = Metre>,
    {
        Self(iter.map(|m| m.0).sum())
    }
}
impl<'a> std::iter::Sum<&'a Metre> for Metre {
    fn sum<I>(iter: I) -> Self
    where
        I: Iterator<Item = &'a Metre>,
    {
        iter.copied().sum()
    }
}

impl std::fmt::Display for Metre {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}m", self.0)
    }
}
