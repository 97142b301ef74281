use serde::{Deserialize, Serialize};

/// sRGB color triple, presentation data only.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb(pub u8, pub u8, pub u8);

/// Digit colors for revealed cells, indexed by `count - 1`.
const NUMBER_COLORS: [Rgb; 8] = [
    Rgb(0, 0, 255),     // 1: blue
    Rgb(0, 255, 0),     // 2: green
    Rgb(255, 0, 0),     // 3: red
    Rgb(102, 0, 153),   // 4: purple
    Rgb(153, 0, 0),     // 5: maroon
    Rgb(64, 224, 208),  // 6: turquoise
    Rgb(0, 0, 0),       // 7: black
    Rgb(192, 192, 192), // 8: light gray
];

/// Display color for a revealed cell's adjacent-mine digit.
///
/// Zero-count cells draw no digit, so they get no color.
pub const fn number_color(count: u8) -> Option<Rgb> {
    if matches!(count, 1..=8) {
        Some(NUMBER_COLORS[(count - 1) as usize])
    } else {
        None
    }
}
