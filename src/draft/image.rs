use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use std::io;
use uuid::Uuid;

/// Where the picker should take the image from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Camera,
    PhotoLibrary,
}

/// Outcome of asking the platform for an image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickedImage {
    /// Encoded image bytes (JPEG)
    Picked(Vec<u8>),
    Cancelled,
}

/// The platform camera / photo library.
pub trait ImagePicker {
    fn pick_image(&mut self, source: ImageSource) -> PickedImage;
}

impl<F> ImagePicker for F
where
    F: FnMut(ImageSource) -> PickedImage,
{
    fn pick_image(&mut self, source: ImageSource) -> PickedImage {
        self(source)
    }
}

/// Application-private directory that picked images are written to.
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: Utf8PathBuf,
}

impl ImageStore {
    pub fn new(dir: impl Into<Utf8PathBuf>) -> Self {
        ImageStore { dir: dir.into() }
    }

    pub fn dir(&self) -> &Utf8Path {
        &self.dir
    }

    /// Writes `bytes` under a freshly generated `<uuid>.jpg` name and returns
    /// that file name.
    pub fn write(&self, bytes: &[u8]) -> io::Result<String> {
        fs::create_dir_all(&self.dir)?;
        let file_name = format!("{}.jpg", Uuid::new_v4());
        fs::write(self.dir.join(&file_name), bytes)?;
        Ok(file_name)
    }

    /// Resolves a stored file name to its full path.
    pub fn path_of(&self, file_name: &str) -> Utf8PathBuf {
        self.dir.join(file_name)
    }
}
