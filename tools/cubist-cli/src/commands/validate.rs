//! Check a 54-character state string.

use cubist_state_model::{validate_facelets, OrientationCode, SOLVED_FACELETS};

pub fn run(state: String) -> anyhow::Result<()> {
    let trimmed = state.trim();
    println!("Validating state: {trimmed}");

    match validate_facelets(trimmed) {
        Ok(()) => {
            println!("State is well formed: 54 facelets, 9 per face.");
            if trimmed == SOLVED_FACELETS {
                println!("This is the solved state.");
            }
            Ok(())
        }
        Err(e) => {
            // Show per-letter counts so the broken invariant is visible.
            let mut counts = [0usize; 6];
            for c in trimmed.chars() {
                if let Some(code) = OrientationCode::from_letter(c) {
                    counts[code.index()] += 1;
                }
            }
            println!("Length: {}", trimmed.len());
            for code in OrientationCode::ALL {
                println!("  {code}: {}", counts[code.index()]);
            }
            Err(e.into())
        }
    }
}
