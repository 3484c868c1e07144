/// Category colors for pie and bar charts, indexed by category position.
pub const CATEGORY_PALETTE: [&str; 8] = [
    "#10b981", "#3b82f6", "#f59e0b", "#ef4444", "#8b5cf6", "#06b6d4", "#ec4899", "#84cc16",
];

pub const SAVINGS_COLOR: &str = "#10b981";
pub const LOANS_COLOR: &str = "#3b82f6";

/// Wraps around once the palette is exhausted.
pub fn category_color(index: usize) -> &'static str {
    CATEGORY_PALETTE[index % CATEGORY_PALETTE.len()]
}
