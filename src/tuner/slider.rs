use crate::color::HsvRange;

/// Upper end of every slider; the lower end is 0.
pub const SLIDER_MAX: u8 = 255;

/// One of the six independent bounds the tuner exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    LowerH,
    LowerS,
    LowerV,
    UpperH,
    UpperS,
    UpperV,
}

impl Slider {
    pub const ALL: [Slider; 6] = [
        Slider::LowerH,
        Slider::LowerS,
        Slider::LowerV,
        Slider::UpperH,
        Slider::UpperS,
        Slider::UpperV,
    ];

    /// Form / query-string key, e.g. `lower_h`.
    pub fn key(self) -> &'static str {
        match self {
            Slider::LowerH => "lower_h",
            Slider::LowerS => "lower_s",
            Slider::LowerV => "lower_v",
            Slider::UpperH => "upper_h",
            Slider::UpperS => "upper_s",
            Slider::UpperV => "upper_v",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Slider::LowerH => "Lower H",
            Slider::LowerS => "Lower S",
            Slider::LowerV => "Lower V",
            Slider::UpperH => "Upper H",
            Slider::UpperS => "Upper S",
            Slider::UpperV => "Upper V",
        }
    }

    pub fn from_key(key: &str) -> Option<Slider> {
        Slider::ALL.into_iter().find(|s| s.key() == key)
    }

    /// (is upper bound, channel index)
    fn slot(self) -> (bool, usize) {
        match self {
            Slider::LowerH => (false, 0),
            Slider::LowerS => (false, 1),
            Slider::LowerV => (false, 2),
            Slider::UpperH => (true, 0),
            Slider::UpperS => (true, 1),
            Slider::UpperV => (true, 2),
        }
    }

    pub fn get(self, range: &HsvRange) -> u8 {
        match self.slot() {
            (false, c) => range.lower[c],
            (true, c) => range.upper[c],
        }
    }

    pub fn set(self, range: &mut HsvRange, value: u8) {
        match self.slot() {
            (false, c) => range.lower[c] = value,
            (true, c) => range.upper[c] = value,
        }
    }
}
