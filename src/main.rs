use gridshow_rs::display_pipeline::{ColorMap, GridConfig, ImageData, display_image_grid};
use gridshow_rs::logger;

use rand::Rng;
use tracing::{error, info};

const SIZE: usize = 50;

fn white_square() -> anyhow::Result<ImageData> {
    let mut data = vec![0u8; SIZE * SIZE];
    for y in 10..40 {
        for x in 10..40 {
            data[y * SIZE + x] = 255;
        }
    }
    Ok(ImageData::gray8(SIZE, SIZE, data)?)
}

fn rgb_gradient() -> anyhow::Result<ImageData> {
    let mut data = vec![0u8; SIZE * SIZE * 3];
    for y in 0..SIZE {
        for x in 0..SIZE {
            let idx = (y * SIZE + x) * 3;
            data[idx] = (255 * y / SIZE) as u8;
            data[idx + 1] = (255 * x / SIZE) as u8;
        }
    }
    Ok(ImageData::rgb8(SIZE, SIZE, data)?)
}

fn diagonal_edge() -> anyhow::Result<ImageData> {
    let mut data = vec![0u8; SIZE * SIZE];
    for i in 0..SIZE {
        data[i * SIZE + i] = 200;
    }
    Ok(ImageData::gray8(SIZE, SIZE, data)?)
}

fn random_noise() -> anyhow::Result<ImageData> {
    let mut rng = rand::thread_rng();
    let data: Vec<u8> = (0..SIZE * SIZE).map(|_| rng.r#gen()).collect();
    Ok(ImageData::gray8(SIZE, SIZE, data)?)
}

fn depth_ramp() -> anyhow::Result<ImageData> {
    let data: Vec<u16> = (0..SIZE * SIZE).map(|v| v as u16).collect();
    Ok(ImageData::gray16(SIZE, SIZE, data)?)
}

fn blue_field_with_red_spot() -> anyhow::Result<ImageData> {
    let mut data = vec![0u8; SIZE * SIZE * 3];
    for px in data.chunks_exact_mut(3) {
        px[2] = 150;
    }
    for y in 20..30 {
        for x in 20..30 {
            data[(y * SIZE + x) * 3] = 255;
        }
    }
    Ok(ImageData::rgb8(SIZE, SIZE, data)?)
}

fn main() -> anyhow::Result<()> {
    logger::init();

    info!("Starting gridshow demo...");

    let images = vec![
        white_square()?,
        rgb_gradient()?,
        diagonal_edge()?,
        random_noise()?,
        depth_ramp()?,
        blue_field_with_red_spot()?,
    ];
    let titles: Vec<String> = [
        "White Square (Gray)",
        "RGB Gradient",
        "Diagonal Edge",
        "Random Noise",
        "Depth Map (viridis)",
        "Blue Field",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect();

    info!("Displaying 6 images in a 3x2 grid");
    let config = GridConfig::builder()
        .cols(3)
        .figsize(10.0, 7.0)
        .cmap(ColorMap::Viridis)
        .title_prefix("Fig ")
        .build();
    match display_image_grid(&images, Some(&titles), config) {
        Ok(_) => info!("Grid displayed"),
        Err(e) => error!("Display failed: {}", e),
    }

    info!("Displaying the first 4 images in a 2x2 grid");
    let config = GridConfig::builder()
        .cols(2)
        .figsize(8.0, 8.0)
        .cmap(ColorMap::Plasma)
        .build();
    match display_image_grid(&images[..4], Some(&titles[..4]), config) {
        Ok(_) => info!("Grid displayed"),
        Err(e) => error!("Display failed: {}", e),
    }

    Ok(())
}
