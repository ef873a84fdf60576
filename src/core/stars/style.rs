use crate::core::data::colour::Colour;

/// Selects both the colouring rule and the twist formula of a star.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum StarStyle {
    #[default]
    Classic,
    Swirl,
    Dense,
    Rainbow,
}

impl StarStyle {
    pub const ALL: &'static [Self] = &[Self::Classic, Self::Swirl, Self::Dense, Self::Rainbow];

    #[must_use]
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Classic => "classic",
            Self::Swirl => "swirl",
            Self::Dense => "dense",
            Self::Rainbow => "rainbow",
        }
    }

    /// Offset applied to the arm's centre for loop index `index`.
    ///
    /// Swirl scales by `twist_factor / 5`. Every other style divides by the
    /// twist factor, with zero treated as one, so a zero factor yields `index`.
    /// Arithmetic wraps on overflow like 32-bit two's complement.
    #[must_use]
    pub fn twist(self, index: u32, twist_factor: i32) -> i32 {
        let index = index as i32;

        match self {
            Self::Swirl => index.wrapping_mul(twist_factor) / 5,
            Self::Classic | Self::Dense | Self::Rainbow => {
                index.wrapping_div(if twist_factor == 0 { 1 } else { twist_factor })
            }
        }
    }

    #[must_use]
    pub fn colour(self, index: u32, line_count: u32) -> Colour {
        match self {
            Self::Rainbow => Colour::from_hsb(index as f32 / line_count as f32, 1.0, 1.0),
            Self::Dense => Colour::new(
                150 + (u64::from(index) * 3 % 100) as u8,
                100,
                255 - (u64::from(index) * 2 % 100) as u8,
            ),
            Self::Classic | Self::Swirl => Colour::MAGENTA,
        }
    }
}

impl std::fmt::Display for StarStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str((*self).display_name())
    }
}
