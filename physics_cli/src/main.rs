//! # Physics CLI
//!
//! Terminal front-end for the physics calculation engine. Prompts for a
//! handful of scenario inputs, runs the closed-form calculations, and
//! prints formatted results plus the raw JSON a service consumer would see.

use std::io::{self, BufRead, Write};

use physics_core::constants::PhysicsConstants;
use physics_core::scenarios::free_fall::{self, FreeFallInput};
use physics_core::scenarios::projectile::{self, ProjectileInput};

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return default;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return default;
    }

    input.trim().parse().unwrap_or(default)
}

fn main() {
    println!("Physics Calculator");
    println!("==================");
    println!();

    let height_m = prompt_f64("Free fall release height (m) [100.0]: ", 100.0);

    let fall = FreeFallInput {
        initial_height_m: height_m,
        total_time_s: None,
        points: 100,
        constants: PhysicsConstants::default(),
    };

    match free_fall::calculate(&fall) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  FREE FALL RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("  Release height: {:.2} m", height_m);
            println!("  Impact time:    {:.4} s", result.impact_time_s);
            println!("  Impact speed:   {:.4} m/s", result.impact_speed_ms);
            println!("  Samples:        {}", result.times_s.len());
            println!();
            println!("Equations:");
            for formula in &result.formulas {
                println!("  {}", formula);
            }
            match serde_json::to_string_pretty(&result) {
                Ok(json) => {
                    println!();
                    println!("JSON payload:");
                    println!("{}", json);
                }
                Err(e) => eprintln!("JSON serialization failed: {}", e),
            }
        }
        Err(e) => eprintln!("Calculation failed: {}", e),
    }

    println!();
    let speed_ms = prompt_f64("Projectile launch speed (m/s) [20.0]: ", 20.0);
    let angle_deg = prompt_f64("Launch angle (deg) [45.0]: ", 45.0);

    let launch = ProjectileInput {
        speed_ms,
        angle_deg,
        initial_height_m: 0.0,
        total_time_s: None,
        points: 100,
        constants: PhysicsConstants::default(),
    };

    match projectile::calculate(&launch) {
        Ok(result) => {
            println!();
            println!("═══════════════════════════════════════");
            println!("  PROJECTILE RESULTS");
            println!("═══════════════════════════════════════");
            println!();
            println!("  Flight time: {:.4} s", result.flight_time_s);
            println!("  Range:       {:.3} m", result.range_m);
            println!("  Peak height: {:.3} m", result.max_height_m);
        }
        Err(e) => eprintln!("Calculation failed: {}", e),
    }
}
