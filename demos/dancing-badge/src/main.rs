//! Dancing Badge: morphing fractal badge demo.
//!
//! Builds the stock 512-leaf badge, equalizes it against a two-triangle
//! quad, and samples morph frames across one animation cycle, printing what
//! a renderer would upload each tick.
//!
//! Run with: cargo run -p dancing-badge

use badge_session::{BadgeSession, FRAME_PERIOD};
use mesh_blend::Blend;
use mesh_equalize::{equalize_soups, EqualizeParams};
use mesh_soup::{Triangle, TriangleSoup};

fn unit_quad() -> TriangleSoup {
    TriangleSoup::from_triangles(vec![
        Triangle::from_arrays([-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.5, 0.5, 0.0]),
        Triangle::from_arrays([-0.5, -0.5, 0.0], [0.5, 0.5, 0.0], [-0.5, 0.5, 0.0]),
    ])
}

fn main() -> anyhow::Result<()> {
    println!("=== Dancing Badge ===");
    println!();

    let mut session = BadgeSession::new()?;
    println!(
        "Badge: {} leaf triangles, {} position floats cached",
        session.triangle_count(),
        session.positions().len()
    );

    let outcome = equalize_soups(session.soup().clone(), unit_quad(), &EqualizeParams::new())?;
    println!("{outcome}");

    let morph = Blend::new(outcome.src, outcome.dest)?;
    println!(
        "Morph ready: {} triangles, {} f32 coords per upload",
        morph.len(),
        morph.src().to_flat_f32().len()
    );
    println!();

    // Sample a handful of ticks spread over the cycle
    let mut frame = Vec::new();
    for _ in 0..6 {
        let tick = session.advance();
        let t = f64::from(tick) / f64::from(FRAME_PERIOD);
        morph.sample_into(t, &mut frame);
        println!(
            "tick {tick:>3}  t = {t:.3}  first vertex ({:+.4}, {:+.4}, {:+.4})",
            frame[0], frame[1], frame[2]
        );
        for _ in 0..59 {
            session.advance();
        }
    }

    println!();
    println!("Cycle wrapped back to frame {}", session.frame());

    Ok(())
}
