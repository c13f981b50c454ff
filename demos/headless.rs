use std::time::Instant;

use color_eyre::{eyre::eyre, Result};
use particle_field::{Float, ParticleField, Recorder, Variant};
use rand::{rngs::StdRng, SeedableRng};

const WIDTH: Float = 1920.;
const HEIGHT: Float = 1080.;

fn main() -> Result<()> {
    color_eyre::install()?;

    let mut args = std::env::args().skip(1);
    let variant: Variant = args.next().as_deref().unwrap_or("pull").parse()?;
    let num_steps: usize = match args.next() {
        Some(n) => n.parse().map_err(|e| eyre!("invalid step count {n:?}: {e}"))?,
        None => 1_000,
    };

    let rng = StdRng::seed_from_u64(0);
    let mut field = ParticleField::with_rng(WIDTH, HEIGHT, variant.config(), variant, rng);
    let mut surface = Recorder::new();

    println!("{variant}: {} particles, {num_steps} time steps", field.len());

    if let Variant::Push(_) = variant {
        field.pointer_down(WIDTH / 2., HEIGHT / 2.);
    }

    let start = Instant::now();
    let mut time = Instant::now();
    for t in 0..num_steps {
        // sweep the cursor around the center of the field
        let angle = t as Float * 0.02;
        field.pointer_moved(
            WIDTH / 2. + 300. * angle.cos(),
            HEIGHT / 2. + 300. * angle.sin(),
        );

        field.frame(&mut surface);

        if t % 100 == 0 {
            println!(
                "{t} out of {num_steps} time steps done, {} lines, {:.1} fps",
                surface.lines().count(),
                1. / time.elapsed().as_secs_f64()
            );
        }
        surface.take();
        time = Instant::now();
    }

    println!(
        "finished in {:.2} s, all particles inside bounds: {}",
        start.elapsed().as_secs_f64(),
        field.particles().iter().all(|p| field.bounds().contains(p))
    );

    Ok(())
}
