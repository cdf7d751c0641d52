/// Nous logo, drawn in a 100×100 viewBox.
pub const LOGO_SVG: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 100 100">
    <style>
        text {
            font-family: Arial, sans-serif;
            font-weight: 300;
            font-size: 72px;
            fill: #5d6b86;
        }
    </style>
    <rect width="100" height="100" fill="#f8f9fb"/>
    <circle cx="50" cy="50" r="35" fill="none" stroke="#000000" stroke-width="3"/>
    <text x="50" y="72" text-anchor="middle" letter-spacing="1.5">n</text>
</svg>"##;

/// PWA icon sizes, in output order.
pub const ICON_SIZES: [u32; 8] = [72, 96, 128, 144, 152, 192, 384, 512];

/// Output directory, relative to the working directory.
pub const OUTPUT_DIR: &str = "icons";
