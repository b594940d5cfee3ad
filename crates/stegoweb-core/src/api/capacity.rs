use std::path::Path;

use log::error;

use crate::{Capacity, StegoError};

/// Capacity of an image file, only the image header is read
pub fn of_image(image: impl AsRef<Path>) -> Result<Capacity, StegoError> {
    let image = image.as_ref();
    let (width, height) = image::image_dimensions(image).map_err(|e| {
        error!("Error reading image dimensions of {image:?}: {e}");
        StegoError::InvalidImageMedia
    })?;

    Ok(Capacity::of(width, height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PixelBuffer;
    use tempfile::tempdir;

    #[test]
    fn should_read_the_capacity_of_a_png() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let file = temp_dir.path().join("carrier.png");
        PixelBuffer::filled(16, 16, [0, 0, 0, 255])
            .unwrap()
            .save_png(&file)
            .unwrap();

        let capacity = of_image(&file).unwrap();

        assert_eq!(capacity.max, 96);
        assert_eq!(capacity.available, 64);
    }

    #[test]
    fn should_fail_on_non_images() {
        let temp_dir = tempdir().expect("Failed to create temporary directory");
        let file = temp_dir.path().join("not-an-image.png");
        std::fs::write(&file, b"definitely not a png").unwrap();

        assert!(matches!(of_image(&file), Err(StegoError::InvalidImageMedia)));
    }
}
