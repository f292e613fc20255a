//! Print the face scanning sequence.

use cubist_scan_engine::SCAN_SEQUENCE;

pub fn run() -> anyhow::Result<()> {
    println!("CUBE SCANNING GUIDE");
    println!("Scan the six faces in this exact sequence:\n");

    for (i, step) in SCAN_SEQUENCE.iter().enumerate() {
        println!(
            "{}. {} face ({} center)",
            i + 1,
            step.orientation,
            step.expected_center
        );
        println!("   {}", step.instruction);
        println!("   Tip: {}\n", step.tip);
    }

    println!("Important:");
    println!("  - Never rotate individual faces during scanning");
    println!("  - Only rotate the entire cube as a whole");
    println!("  - Make sure the camera sees the entire face clearly");
    println!("  - Keep lighting consistent between faces");

    Ok(())
}
