/// Opaque RGB color, written as `[r, g, b]`.
pub type Color = [u8; 3];

/// Fixed-size RGBA raster the certificate is drawn onto.
pub struct Canvas {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Canvas {
    pub fn new(width: u32, height: u32) -> Self {
        let mut pixels = vec![0u8; (width * height * 4) as usize];
        // Start fully opaque white
        for px in pixels.chunks_exact_mut(4) {
            px.copy_from_slice(&[255, 255, 255, 255]);
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    pub fn data(&self) -> &[u8] {
        &self.pixels
    }

    pub fn put_pixel(&mut self, x: i64, y: i64, color: Color) {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return;
        }
        let offset = ((y as u32 * self.width + x as u32) * 4) as usize;
        self.pixels[offset] = color[0];
        self.pixels[offset + 1] = color[1];
        self.pixels[offset + 2] = color[2];
        self.pixels[offset + 3] = 255;
    }

    pub fn pixel(&self, x: u32, y: u32) -> Color {
        let offset = ((y * self.width + x) * 4) as usize;
        [
            self.pixels[offset],
            self.pixels[offset + 1],
            self.pixels[offset + 2],
        ]
    }

    pub fn fill_rect(&mut self, x: i64, y: i64, w: u32, h: u32, color: Color) {
        for dy in 0..h as i64 {
            for dx in 0..w as i64 {
                self.put_pixel(x + dx, y + dy, color);
            }
        }
    }

    /// Rectangle outline centred on the given edges, matching canvas stroke
    /// semantics where the line straddles the path.
    pub fn stroke_rect(&mut self, x: i64, y: i64, w: u32, h: u32, line_width: u32, color: Color) {
        let half = (line_width / 2) as i64;
        let lw = line_width;
        // Top and bottom bands
        self.fill_rect(x - half, y - half, w + lw, lw, color);
        self.fill_rect(x - half, y + h as i64 - half, w + lw, lw, color);
        // Left and right bands
        self.fill_rect(x - half, y - half, lw, h + lw, color);
        self.fill_rect(x + w as i64 - half, y - half, lw, h + lw, color);
    }

    /// Fill the whole canvas with a linear gradient running corner to corner,
    /// interpolating between the given color stops.
    pub fn fill_diagonal_gradient(&mut self, stops: &[(f64, Color)]) {
        if stops.is_empty() {
            return;
        }
        let w = self.width as f64;
        let h = self.height as f64;
        let len_sq = w * w + h * h;
        for y in 0..self.height {
            for x in 0..self.width {
                // Projection of the point onto the (0,0)->(w,h) axis
                let t = (x as f64 * w + y as f64 * h) / len_sq;
                let color = sample_gradient(stops, t);
                self.put_pixel(x as i64, y as i64, color);
            }
        }
    }

    pub fn fill_circle(&mut self, cx: i64, cy: i64, radius: i64, color: Color) {
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                if dx * dx + dy * dy <= radius * radius {
                    self.put_pixel(cx + dx, cy + dy, color);
                }
            }
        }
    }
}

fn sample_gradient(stops: &[(f64, Color)], t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mut lower = stops[0];
    let mut upper = stops[stops.len() - 1];
    for window in stops.windows(2) {
        if t >= window[0].0 && t <= window[1].0 {
            lower = window[0];
            upper = window[1];
            break;
        }
    }
    let span = upper.0 - lower.0;
    let f = if span <= f64::EPSILON {
        0.0
    } else {
        (t - lower.0) / span
    };
    let mut out = [0u8; 3];
    for (i, channel) in out.iter_mut().enumerate() {
        let a = lower.1[i] as f64;
        let b = upper.1[i] as f64;
        *channel = (a + (b - a) * f).round() as u8;
    }
    out
}
