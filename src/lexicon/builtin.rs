//! Built-in lookup table data.

pub(super) const COLORS: &[(&str, &str)] = &[
    ("primary", "#007bff"),
    ("secondary", "#6c757d"),
    ("background", "#f8f9fa"),
    ("text", "#212529"),
    ("white", "#ffffff"),
    ("black", "#000000"),
];

const SHADE_KEYS: [&str; 10] = [
    "50", "100", "200", "300", "400", "500", "600", "700", "800", "900",
];

pub(super) const PALETTE: &[(&str, [&str; 10])] = &[
    (
        "gray",
        [
            "#F9FAFB", "#F3F4F6", "#E5E7EB", "#D1D5DB", "#9CA3AF", "#6B7280", "#4B5563",
            "#374151", "#1F2937", "#111827",
        ],
    ),
    (
        "red",
        [
            "#FEF2F2", "#FEE2E2", "#FECACA", "#FCA5A5", "#F87171", "#EF4444", "#DC2626",
            "#B91C1C", "#991B1B", "#7F1D1D",
        ],
    ),
    (
        "yellow",
        [
            "#FEFCE8", "#FEF9C3", "#FEF08A", "#FDE047", "#FACC15", "#EAB308", "#CA8A04",
            "#A16207", "#854D0E", "#713F12",
        ],
    ),
    (
        "green",
        [
            "#F0FDF4", "#DCFCE7", "#BBF7D0", "#86EFAC", "#4ADE80", "#22C55E", "#16A34A",
            "#15803D", "#166534", "#14532D",
        ],
    ),
    (
        "blue",
        [
            "#EFF6FF", "#DBEAFE", "#BFDBFE", "#93C5FD", "#60A5FA", "#3B82F6", "#2563EB",
            "#1D4ED8", "#1E40AF", "#1E3A8A",
        ],
    ),
    (
        "indigo",
        [
            "#EEF2FF", "#E0E7FF", "#C7D2FE", "#A5B4FC", "#818CF8", "#6366F1", "#4F46E5",
            "#4338CA", "#3730A3", "#312E81",
        ],
    ),
    (
        "purple",
        [
            "#FAF5FF", "#F3E8FF", "#E9D5FF", "#D8B4FE", "#C084FC", "#A855F7", "#9333EA",
            "#7E22CE", "#6B21A8", "#581C87",
        ],
    ),
    (
        "pink",
        [
            "#FDF2F8", "#FCE7F3", "#FBCFE8", "#F9A8D4", "#F472B6", "#EC4899", "#DB2777",
            "#BE185D", "#9D174D", "#831843",
        ],
    ),
];

pub(super) fn shade_entries(
    values: &'static [&'static str; 10],
) -> impl Iterator<Item = (&'static str, &'static str)> {
    SHADE_KEYS.iter().copied().zip(values.iter().copied())
}

pub(super) const LIGHT_THEME: (&str, &str) = ("#ffffff", "#212529");
pub(super) const DARK_THEME: (&str, &str) = ("#212529", "#ffffff");

pub(super) const FONTS: &[(&str, &str)] = &[
    ("sans", "Helvetica, Arial, sans-serif"),
    ("serif", "Georgia, serif"),
    ("monospace", "Courier New, monospace"),
    ("custom", "sans-serif"),
];

pub(super) const FONT_SIZES: &[(&str, &str)] = &[("sm", "12px"), ("md", "16px"), ("lg", "24px")];

pub(super) const FONT_WEIGHTS: &[(&str, &str)] = &[
    ("light", "300"),
    ("normal", "400"),
    ("medium", "500"),
    ("bold", "700"),
];

pub(super) const SPACING: &[(&str, &str)] = &[
    ("0", "0px"),
    ("1", "4px"),
    ("2", "8px"),
    ("3", "16px"),
    ("4", "24px"),
    ("5", "32px"),
    ("6", "40px"),
    ("7", "48px"),
];

pub(super) const BREAKPOINTS: &[(&str, &str)] =
    &[("sm", "480px"), ("md", "768px"), ("lg", "1024px")];

pub(super) const FLEX_JUSTIFY: &[(&str, &str)] = &[
    ("start", "flex-start"),
    ("center", "center"),
    ("end", "flex-end"),
];

pub(super) const FLEX_ALIGN: &[(&str, &str)] = &[
    ("start", "flex-start"),
    ("center", "center"),
    ("end", "flex-end"),
];

pub(super) const RADII: &[(&str, f64)] = &[
    ("sm", 2.0),
    ("md", 4.0),
    ("lg", 8.0),
    ("xl", 12.0),
    ("full", 9999.0),
];
