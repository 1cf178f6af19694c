#[derive(PartialEq)]
pub struct GalleryImage {
    pub src: &'static str,
    pub alt: &'static str,
}

pub const GALLERY: &[GalleryImage] = &[
    GalleryImage { src: "/D10.jpg", alt: "Disha 10" },
    GalleryImage { src: "/D5.jpg", alt: "Disha 5" },
    GalleryImage { src: "/D2.jpg", alt: "Disha 2" },
    GalleryImage { src: "/D6.jpg", alt: "Disha 6" },
    GalleryImage { src: "/D8.jpg", alt: "Disha 8" },
    GalleryImage { src: "/D12.jpg", alt: "Disha 12" },
];

/// Milliseconds between two carousel steps.
pub const AUTO_ADVANCE_MS: u32 = 3200;

#[cfg(debug_assertions)]
pub fn log_level() -> log::Level {
    log::Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> log::Level {
    log::Level::Info
}
