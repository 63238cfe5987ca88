//! Rendering selected cubes into SOP/POS expression strings, canonical forms, and
//! K-map group annotations.

use crate::cube::Cube;

/// Render a single product term. `dualize` flips literal polarity (used when a
/// POS sum-term is produced by De Morgan-negating an SOP product-term of the
/// complement function).
///
/// Variable `i` (`variable_names[i]`) is bound to bit `n - 1 - i` of the minterm:
/// the first variable is the most significant bit, the last is the least
/// significant, matching the textbook convention minterm numbers are read in.
fn render_literals(cube: &Cube, n: usize, variable_names: &[String], dualize: bool) -> Vec<String> {
    let mut literals = Vec::new();
    for i in 0..n {
        let bit = n - 1 - i;
        if cube.mask & (1 << bit) != 0 {
            continue;
        }
        let asserted = cube.value & (1 << bit) != 0;
        let positive = if dualize { !asserted } else { asserted };
        let name = &variable_names[i];
        if positive {
            literals.push(name.clone());
        } else {
            literals.push(format!("{name}'"));
        }
    }
    literals
}

/// Render `selected` cubes as a sum of products. Empty selection is the constant
/// `"0"`; a single all-don't-care cube is the constant `"1"`.
pub fn render_sop(selected: &[Cube], n: usize, variable_names: &[String]) -> String {
    if selected.is_empty() {
        return "0".to_string();
    }
    if selected.iter().any(|c| c.is_tautology(n)) {
        return "1".to_string();
    }
    selected
        .iter()
        .map(|c| render_literals(c, n, variable_names, false).join(""))
        .collect::<Vec<_>>()
        .join(" + ")
}

/// Render `selected` cubes (from minimizing the complement function) as a product
/// of sums: each cube becomes one sum-term with every literal's polarity flipped.
/// Empty selection is the constant `"1"` (empty product); a single all-don't-care
/// cube means the function is identically false, i.e. `"0"`.
pub fn render_pos(selected: &[Cube], n: usize, variable_names: &[String]) -> String {
    if selected.is_empty() {
        return "1".to_string();
    }
    if selected.iter().any(|c| c.is_tautology(n)) {
        return "0".to_string();
    }
    selected
        .iter()
        .map(|c| {
            let literals = render_literals(c, n, variable_names, true);
            format!("({})", literals.join(" + "))
        })
        .collect::<Vec<_>>()
        .join("")
}

/// `Σm(m1, m2, ...)`, with a trailing `+ d(...)` term when don't-cares are present.
pub fn canonical_sop(ones: &[u16], dont_cares: &[u16]) -> String {
    let ones_str = ones.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(",");
    let mut s = format!("\u{03a3}m({ones_str})");
    if !dont_cares.is_empty() {
        let dcs_str = dont_cares
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(",");
        s.push_str(&format!(" + d({dcs_str})"));
    }
    s
}

/// `ΠM(z1, z2, ...)`, with a trailing `+ d(...)` term when don't-cares are present.
pub fn canonical_pos(zeros: &[u16], dont_cares: &[u16]) -> String {
    let zeros_str = zeros.iter().map(|m| m.to_string()).collect::<Vec<_>>().join(",");
    let mut s = format!("\u{03a0}M({zeros_str})");
    if !dont_cares.is_empty() {
        let dcs_str = dont_cares
            .iter()
            .map(|m| m.to_string())
            .collect::<Vec<_>>()
            .join(",");
        s.push_str(&format!(" + d({dcs_str})"));
    }
    s
}

/// A K-map group contributed by one selected cube, for the downstream visualizer.
#[derive(Debug, Clone, serde::Serialize)]
pub struct Group {
    pub cells: Vec<u32>,
    pub color_index: u8,
}

pub fn groups(selected: &[Cube]) -> Vec<Group> {
    selected
        .iter()
        .enumerate()
        .map(|(i, cube)| Group {
            cells: cube.covers.iter().map(|&m| m as u32).collect(),
            color_index: (i % 8) as u8,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| ((b'A' + i as u8) as char).to_string()).collect()
    }

    #[test]
    fn sop_empty_is_contradiction() {
        assert_eq!(render_sop(&[], 3, &names(3)), "0");
    }

    #[test]
    fn sop_tautology_cube_is_one() {
        let c = Cube {
            mask: 0b11,
            value: 0,
            covers: vec![],
        };
        assert_eq!(render_sop(&[c], 2, &names(2)), "1");
    }

    #[test]
    fn sop_renders_literals_with_complement() {
        let c = Cube {
            mask: 0b001,
            value: 0b000,
            covers: vec![0],
        };
        assert_eq!(render_sop(&[c], 3, &names(3)), "A'B'");
    }

    #[test]
    fn pos_empty_is_tautology() {
        assert_eq!(render_pos(&[], 3, &names(3)), "1");
    }

    #[test]
    fn pos_renders_dualized_literals() {
        let c = Cube {
            mask: 0b001,
            value: 0b000,
            covers: vec![0],
        };
        assert_eq!(render_pos(&[c], 3, &names(3)), "(A + B)");
    }

    #[test]
    fn canonical_sop_lists_dont_cares_separately() {
        assert_eq!(canonical_sop(&[1, 3], &[0]), "\u{03a3}m(1,3) + d(0)");
    }
}
