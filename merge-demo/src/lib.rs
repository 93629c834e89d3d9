mod common;
pub mod config;

use crate::{common::*, config::Config};

/// Builds two random images, merges them and reports the outcome on
/// `output`.
///
/// Merge failures are printed rather than returned. Only configuration and
/// terminal I/O errors are propagated.
pub fn start<R, W>(config: &Config, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    info!("generating random images");
    let image_one = random_image(&mut rng, &config.image_one.shape);
    let image_two = random_image(&mut rng, &config.image_two().shape);

    let direction = match &config.direction {
        Some(direction) => direction.clone(),
        None => select_direction(input, &mut output)?.as_str().to_owned(),
    };

    info!("merging with direction '{}'", direction);
    match execute(&image_one, &image_two, &direction) {
        Ok((merged,)) => writeln!(
            output,
            "Merge successful. Merged image shape: {}",
            Shape::from(merged.shape())
        )?,
        Err(err) => writeln!(output, "Error during merge: {}", err)?,
    }

    Ok(())
}

fn random_image(rng: &mut StdRng, shape: &Shape) -> Image {
    Image::from_shape_fn(IxDyn(shape.dims()), |_| rng.gen_range(-1.0..1.0))
}
