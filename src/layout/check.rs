use super::{Canvas, Rect};

/// Summary of how well a finished layout tiles its canvas.
#[derive(Debug, Clone, Default)]
pub struct LayoutReport {
    pub rect_count: usize,
    pub item_count: usize,
    pub total_area: f64,
    pub canvas_area: f64,
    /// Area the rects should cover: the canvas, or 0 when every weight is 0
    pub expected_area: f64,
    /// Indices of rects poking outside the canvas
    pub out_of_bounds: Vec<usize>,
    /// Index pairs whose interiors overlap
    pub overlapping: Vec<(usize, usize)>,
    pub zero_area: usize,
    tolerance: f64,
}

impl LayoutReport {
    /// Fraction of the canvas covered by the rects.
    pub fn coverage(&self) -> f64 {
        if self.canvas_area <= 0.0 {
            0.0
        } else {
            self.total_area / self.canvas_area
        }
    }

    /// Total rect area matches the expected area within tolerance.
    pub fn area_conserved(&self) -> bool {
        let slack = self.canvas_area * self.tolerance;
        (self.total_area - self.expected_area).abs() <= slack
    }

    pub fn is_clean(&self) -> bool {
        self.rect_count == self.item_count
            && self.out_of_bounds.is_empty()
            && self.overlapping.is_empty()
            && self.area_conserved()
    }
}

/// Check containment, overlap and area conservation of `rects`, laid out from
/// `weights` on `canvas`.
///
/// Zero coverage only counts as conserved when every weight is zero.
/// `eps` is absolute for edge positions and overlap area, relative for the
/// total area.
pub fn check_layout(rects: &[Rect], weights: &[f64], canvas: Canvas, eps: f64) -> LayoutReport {
    let bounds = canvas.bounds();
    let any_weight = weights.iter().any(|&w| w > 0.0);
    let mut report = LayoutReport {
        rect_count: rects.len(),
        item_count: weights.len(),
        canvas_area: canvas.area(),
        expected_area: if any_weight { canvas.area() } else { 0.0 },
        tolerance: eps,
        ..Default::default()
    };

    for (i, rect) in rects.iter().enumerate() {
        report.total_area += rect.area();
        if rect.area() <= eps {
            report.zero_area += 1;
        }
        if !bounds.contains(rect, eps) {
            report.out_of_bounds.push(i);
        }
        for (j, other) in rects.iter().enumerate().skip(i + 1) {
            if rect.overlap_area(other) > eps {
                report.overlapping.push((i, j));
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_overlap_and_escape() {
        let canvas = Canvas::new(10.0, 10.0);
        let rects = [
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Rect::new(5.0, 5.0, 10.0, 10.0),
        ];
        let report = check_layout(&rects, &[1.0, 1.0], canvas, 1e-6);
        assert_eq!(report.out_of_bounds, vec![1]);
        assert_eq!(report.overlapping, vec![(0, 1)]);
        assert!(!report.is_clean());
    }

    #[test]
    fn all_zero_layout_counts_as_conserved() {
        let canvas = Canvas::new(10.0, 10.0);
        let rects = [Rect::empty_at(0.0, 0.0); 3];
        let report = check_layout(&rects, &[0.0; 3], canvas, 1e-6);
        assert_eq!(report.zero_area, 3);
        assert!(report.is_clean());
        assert_eq!(report.coverage(), 0.0);
    }

    #[test]
    fn lost_area_with_positive_weights_is_flagged() {
        let canvas = Canvas::new(100.0, 100.0);
        let rects = [Rect::empty_at(0.0, 0.0); 2];
        let report = check_layout(&rects, &[1e308, 1e308], canvas, 1e-6);
        assert_eq!(report.expected_area, 10_000.0);
        assert!(!report.area_conserved());
        assert!(!report.is_clean());
    }

    #[test]
    fn missing_rects_are_flagged() {
        let canvas = Canvas::new(10.0, 10.0);
        let rects = [Rect::new(0.0, 0.0, 10.0, 10.0)];
        let report = check_layout(&rects, &[1.0, 0.0], canvas, 1e-6);
        assert!(report.area_conserved());
        assert!(!report.is_clean());
    }
}
