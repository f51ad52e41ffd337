//! Common names of polygons by side count.

/// Name of a polygon with `sides` sides; `None` when there is no common name.
pub fn polygon_name(sides: u32) -> Option<&'static str> {
    Some(match sides {
        3 => "Triangle",
        4 => "Quadrilateral",
        5 => "Pentagon",
        6 => "Hexagon",
        7 => "Heptagon",
        8 => "Octagon",
        9 => "Nonagon",
        10 => "Decagon",
        12 => "Dodecagon",
        _ => return None,
    })
}

/// Common name, or the generic `n-gon` form.
pub fn display_name(sides: u32) -> String {
    polygon_name(sides)
        .map(str::to_string)
        .unwrap_or_else(|| format!("{sides}-gon"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names() {
        assert_eq!(polygon_name(5), Some("Pentagon"));
        assert_eq!(polygon_name(10), Some("Decagon"));
        assert_eq!(polygon_name(2), None);
        assert_eq!(display_name(11), "11-gon");
        assert_eq!(display_name(8), "Octagon");
    }
}
