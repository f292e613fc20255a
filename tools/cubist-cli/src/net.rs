//! Flat-net rendering of a scanned cube.

use cubist_state_model::{CubeState, Face, OrientationCode};

/// Render the cube as a 2-D net, one color letter per facelet:
/// U on top, then L F R B across the middle, D below.
///
/// Returns `None` if any face has not been scanned.
pub fn render_net(state: &CubeState) -> Option<String> {
    let face = |code| state.face(code);
    let up = face(OrientationCode::U)?;
    let left = face(OrientationCode::L)?;
    let front = face(OrientationCode::F)?;
    let right = face(OrientationCode::R)?;
    let back = face(OrientationCode::B)?;
    let down = face(OrientationCode::D)?;

    let mut out = String::new();
    for row in 0..3 {
        out.push_str("      ");
        out.push_str(&row_letters(up, row));
        out.push('\n');
    }
    out.push('\n');
    for row in 0..3 {
        let mut line = String::new();
        for f in [left, front, right, back] {
            if !line.is_empty() {
                line.push(' ');
            }
            line.push_str(&row_letters(f, row));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out.push('\n');
    for row in 0..3 {
        out.push_str("      ");
        out.push_str(&row_letters(down, row));
        out.push('\n');
    }
    Some(out)
}

fn row_letters(face: &Face, row: usize) -> String {
    let mut s = String::with_capacity(5);
    for (i, label) in face.cells[row].iter().enumerate() {
        if i > 0 {
            s.push(' ');
        }
        s.push(label.letter());
    }
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use cubist_state_model::ColorLabel;

    #[test]
    fn test_net_of_solved_cube() {
        let mut state = CubeState::new();
        let scheme = [
            (OrientationCode::U, ColorLabel::White),
            (OrientationCode::R, ColorLabel::Red),
            (OrientationCode::F, ColorLabel::Green),
            (OrientationCode::D, ColorLabel::Yellow),
            (OrientationCode::L, ColorLabel::Orange),
            (OrientationCode::B, ColorLabel::Blue),
        ];
        for (code, color) in scheme {
            state.set_face_grid(code, Face::uniform(color));
        }

        let net = render_net(&state).unwrap();
        let lines: Vec<&str> = net.lines().collect();
        assert_eq!(lines[0], "      W W W");
        assert_eq!(lines[4], "O O O G G G R R R B B B");
        assert_eq!(lines[8], "      Y Y Y");
    }

    #[test]
    fn test_net_requires_all_faces() {
        let mut state = CubeState::new();
        state.set_face_grid(OrientationCode::U, Face::uniform(ColorLabel::White));
        assert!(render_net(&state).is_none());
    }
}
