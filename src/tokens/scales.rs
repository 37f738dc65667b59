//! Built-in token scales.

use super::table::TokenTable;

/// Padding, margin, flex gap and spacer sizes.
pub static SPACING: TokenTable = TokenTable::new(
    "spacing",
    &[
        ("none", "0"),
        ("small", "8px"),
        ("medium", "16px"),
        ("large", "32px"),
        ("xlarge", "64px"),
    ],
);

pub static BORDER_WIDTH: TokenTable = TokenTable::new(
    "border-width",
    &[
        ("none", "0"),
        ("thin", "1px"),
        ("medium", "2px"),
        ("thick", "4px"),
    ],
);

pub static BORDER_RADIUS: TokenTable = TokenTable::new(
    "border-radius",
    &[
        ("none", "0"),
        ("small", "4px"),
        ("medium", "8px"),
        ("large", "16px"),
        ("pill", "9999px"),
        ("circle", "50%"),
    ],
);

pub static SHADOW: TokenTable = TokenTable::new(
    "shadow",
    &[
        ("none", "none"),
        (
            "small",
            "0 1px 3px 0 rgba(0, 0, 0, 0.1), 0 1px 2px -1px rgba(0, 0, 0, 0.1)",
        ),
        (
            "medium",
            "0 4px 6px -1px rgba(0, 0, 0, 0.1), 0 2px 4px -2px rgba(0, 0, 0, 0.1)",
        ),
        (
            "large",
            "0 10px 15px -3px rgba(0, 0, 0, 0.1), 0 4px 6px -4px rgba(0, 0, 0, 0.1)",
        ),
        (
            "xlarge",
            "0 20px 25px -5px rgba(0, 0, 0, 0.1), 0 8px 10px -6px rgba(0, 0, 0, 0.1)",
        ),
    ],
);

/// Grid gap scale. Flex containers use [`SPACING`] for their gap instead.
pub static GAP: TokenTable = TokenTable::new(
    "gap",
    &[
        ("none", "0"),
        ("small", "8px"),
        ("medium", "16px"),
        ("large", "32px"),
    ],
);
