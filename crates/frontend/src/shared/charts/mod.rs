pub mod geometry;
pub mod palette;
pub mod tooltip;

pub use tooltip::{ChartTooltip, TooltipContent};
