//! Print the measurements of unit-edge regular polygons.
//!
//! Usage:
//!   cargo run -p regpoly --example polygon_table -- [max_sides]

use regpoly::prelude::*;

fn main() {
    let max_sides = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(12)
        .max(3);
    println!(
        "{:<14} {:>9} {:>9} {:>9} {:>9} {:>9}",
        "polygon", "interior", "exterior", "perimeter", "apothem", "area"
    );
    for n in 3..=max_sides {
        match compute_properties(n, 1.0) {
            Ok(p) => println!(
                "{:<14} {:>9.2} {:>9.2} {:>9.3} {:>9.3} {:>9.3}",
                display_name(n),
                p.interior_angle_degrees,
                p.exterior_angle_degrees,
                p.perimeter,
                p.apothem,
                p.area
            ),
            Err(err) => eprintln!("{n}: {err}"),
        }
    }
}
