//! Tests for PNG loading and atomic saving

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};
    use periodic_tiles::ErrorKind;
    use periodic_tiles::io::image::{load_png, save_png};
    use tempfile::TempDir;

    // Tests saving creates parent directories and loads back losslessly
    #[test]
    fn test_save_then_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("dir").join("tile.png");
        let img = RgbaImage::from_fn(5, 3, |x, y| Rgba([x as u8 * 40, y as u8 * 80, 7, 128]));

        save_png(&img, &path).unwrap();

        assert_eq!(load_png(&path).unwrap(), Some(img));
    }

    // Tests saving replaces existing files and leaves no temporary files behind
    #[test]
    fn test_save_overwrites() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out.png");

        save_png(&RgbaImage::new(2, 2), &path).unwrap();
        let replacement = RgbaImage::from_pixel(4, 4, Rgba([9, 9, 9, 255]));
        save_png(&replacement, &path).unwrap();

        assert_eq!(load_png(&path).unwrap(), Some(replacement));
        let entries = std::fs::read_dir(temp_dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }

    // Tests missing files load as None
    #[test]
    fn test_load_missing() {
        let temp_dir = TempDir::new().unwrap();
        assert_eq!(load_png(&temp_dir.path().join("none.png")).unwrap(), None);
    }

    // Tests undecodable files are render failures
    #[test]
    fn test_load_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.png");
        std::fs::write(&path, b"\x89PNG but not really").unwrap();

        let err = load_png(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::RenderFailure);
    }

    // Tests saving under a file fails without creating output
    #[test]
    fn test_save_under_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let blocker = temp_dir.path().join("blocker");
        std::fs::write(&blocker, "file").unwrap();

        let result = save_png(&RgbaImage::new(1, 1), &blocker.join("out.png"));
        assert!(result.is_err());
    }
}
