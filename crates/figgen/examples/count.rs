//! Minimal example: count pentominoes and print one figure.

use std::error::Error;

use figgen::{Connectivity, FigureGenerator, count_figures};

fn main() -> Result<(), Box<dyn Error>> {
    // Per-size counts of 4-connected figures up to size 5.
    let counts = count_figures(Connectivity::C40, 5)?;
    for (size, count) in (1..).zip(&counts) {
        println!("size {size}: {count} figures");
    }

    // The stepwise driver keeps the current figure inspectable.
    let mut generator = FigureGenerator::<4, 0>::new();
    for _ in 0..40 {
        generator.next_step(5);
    }
    println!("one of the figures visited:\n{}", generator.render());

    Ok(())
}
