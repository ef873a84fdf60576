use std::error::Error;
use std::fmt;

const DEFAULT_PANEL_SIZE: u32 = 600;
const DEFAULT_LINE_COUNT: u32 = 30;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PanelConfigError {
    ZeroQuadrantSize,
    QuadrantNotHalfOfPanel { panel_size: u32, quadrant_size: u32 },
    ZeroLineCount,
}

impl fmt::Display for PanelConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroQuadrantSize => write!(f, "quadrant size must be greater than zero"),
            Self::QuadrantNotHalfOfPanel {
                panel_size,
                quadrant_size,
            } => write!(
                f,
                "quadrant size {} must be half of panel size {}",
                quadrant_size, panel_size
            ),
            Self::ZeroLineCount => write!(f, "line count must be greater than zero"),
        }
    }
}

impl Error for PanelConfigError {}

/// Fixed dimensions of the star panel, a square split into four quadrants.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PanelConfig {
    panel_size: u32,
    quadrant_size: u32,
    line_count: u32,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            panel_size: DEFAULT_PANEL_SIZE,
            quadrant_size: DEFAULT_PANEL_SIZE / 2,
            line_count: DEFAULT_LINE_COUNT,
        }
    }
}

impl PanelConfig {
    pub fn new(panel_size: u32, quadrant_size: u32, line_count: u32) -> Result<Self, PanelConfigError> {
        if quadrant_size == 0 {
            return Err(PanelConfigError::ZeroQuadrantSize);
        }

        if quadrant_size.checked_mul(2) != Some(panel_size) {
            return Err(PanelConfigError::QuadrantNotHalfOfPanel {
                panel_size,
                quadrant_size,
            });
        }

        if line_count == 0 {
            return Err(PanelConfigError::ZeroLineCount);
        }

        Ok(Self {
            panel_size,
            quadrant_size,
            line_count,
        })
    }

    #[must_use]
    pub fn panel_size(&self) -> u32 {
        self.panel_size
    }

    #[must_use]
    pub fn quadrant_size(&self) -> u32 {
        self.quadrant_size
    }

    /// Base number of lines per star; the dense quadrant doubles it.
    #[must_use]
    pub fn line_count(&self) -> u32 {
        self.line_count
    }

    /// Distance from a quadrant's edge to its centre.
    #[must_use]
    pub fn center(&self) -> i32 {
        (self.quadrant_size / 2) as i32
    }
}
