//! Print presets and page formats
//!
//! Fixed, process-wide tables of print-quality profiles and physical page
//! sizes. Lookups never fail: unknown or absent names resolve to the
//! "screen" preset and the "A4" format, keeping the fallback policy in one
//! place.

/// A named bundle of print-quality defaults
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrintPreset {
    pub name: &'static str,
    pub description: &'static str,
    /// Raster resolution in dots per inch
    pub dpi: u32,
    /// Default bleed on each edge in millimeters
    pub bleed_mm: f32,
    /// Draw crop marks at the trim corners
    pub crop_marks: bool,
    /// Paint element backgrounds in the print output
    pub print_background: bool,
    /// Declare the page size in the document's stylesheet
    pub prefer_css_page_size: bool,
}

/// A named physical page size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PageFormat {
    pub name: &'static str,
    pub width_mm: f32,
    pub height_mm: f32,
}

const SCREEN: PrintPreset = PrintPreset {
    name: "screen",
    description: "Screen viewing",
    dpi: 72,
    bleed_mm: 0.0,
    crop_marks: false,
    print_background: true,
    prefer_css_page_size: true,
};

const PRINT_STANDARD: PrintPreset = PrintPreset {
    name: "print-standard",
    description: "Standard office printing",
    dpi: 150,
    bleed_mm: 0.0,
    crop_marks: false,
    print_background: true,
    prefer_css_page_size: true,
};

const PRINT_PROFESSIONAL: PrintPreset = PrintPreset {
    name: "print-professional",
    description: "Professional printing",
    dpi: 300,
    bleed_mm: 3.0,
    crop_marks: true,
    print_background: true,
    prefer_css_page_size: true,
};

const PRINT_PREMIUM: PrintPreset = PrintPreset {
    name: "print-premium",
    description: "Premium printing with bleed",
    dpi: 300,
    bleed_mm: 5.0,
    crop_marks: true,
    print_background: true,
    prefer_css_page_size: true,
};

pub const PRESETS: &[PrintPreset] = &[SCREEN, PRINT_STANDARD, PRINT_PROFESSIONAL, PRINT_PREMIUM];

const A4: PageFormat = PageFormat {
    name: "A4",
    width_mm: 210.0,
    height_mm: 297.0,
};

pub const PAGE_FORMATS: &[PageFormat] = &[
    A4,
    PageFormat {
        name: "A5",
        width_mm: 148.0,
        height_mm: 210.0,
    },
    PageFormat {
        name: "A6",
        width_mm: 105.0,
        height_mm: 148.0,
    },
    PageFormat {
        name: "DL",
        width_mm: 99.0,
        height_mm: 210.0,
    },
    PageFormat {
        name: "square",
        width_mm: 210.0,
        height_mm: 210.0,
    },
    PageFormat {
        name: "letter",
        width_mm: 216.0,
        height_mm: 279.0,
    },
];

/// Look up a preset by name, falling back to "screen" for unknown or absent names
pub fn resolve_preset(name: Option<&str>) -> &'static PrintPreset {
    name.and_then(|n| PRESETS.iter().find(|p| p.name == n))
        .unwrap_or(&SCREEN)
}

/// Look up a page format by name, falling back to "A4" for unknown or absent names
pub fn resolve_page_format(name: Option<&str>) -> &'static PageFormat {
    name.and_then(|n| PAGE_FORMATS.iter().find(|f| f.name == n))
        .unwrap_or(&A4)
}
