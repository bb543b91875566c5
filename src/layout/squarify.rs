use super::Rect;

/// Squarified treemap layout (Bruls, Huizing & van Wijk).
///
/// `areas` must already be normalized to the area of `bounds` and sorted
/// descending. Returns one rect per area, in input order.
///
/// Rows are built greedily along the shorter side of the free space: an item
/// joins the current row while that does not make the row's worst aspect ratio
/// worse (ties join). Otherwise the row is closed and the free space shrinks by
/// its thickness. The final row takes whatever free space is left, so the
/// result tiles `bounds` without rounding gaps.
pub fn squarify(areas: &[f64], bounds: Rect) -> Vec<Rect> {
    let mut result = Vec::with_capacity(areas.len());
    let mut free = bounds;
    let mut start = 0;

    while start < areas.len() {
        let remaining = &areas[start..];
        let remaining_sum: f64 = remaining.iter().sum();

        // Nothing left to distribute or nowhere to put it
        if free.is_degenerate() || remaining_sum <= 0.0 {
            tracing::debug!(
                "Squarify: {} items left in degenerate space ({:.3}x{:.3}, sum={})",
                remaining.len(),
                free.w,
                free.h,
                remaining_sum
            );
            result.extend(remaining.iter().map(|_| Rect::empty_at(free.x, free.y)));
            break;
        }

        let short = free.w.min(free.h);

        let mut row_len = 1;
        let mut row_sum = remaining[0];
        let mut worst = worst_aspect_ratio(&remaining[..1], row_sum, short);
        while row_len < remaining.len() {
            let next_sum = row_sum + remaining[row_len];
            let next = worst_aspect_ratio(&remaining[..=row_len], next_sum, short);
            if next > worst {
                break;
            }
            worst = next;
            row_sum = next_sum;
            row_len += 1;
        }

        let is_last_row = row_len == remaining.len();
        free = lay_out_row(&remaining[..row_len], row_sum, free, is_last_row, &mut result);
        start += row_len;
    }

    result
}

/// Place one row along the shorter side of `free` and return the space left over.
fn lay_out_row(
    row: &[f64],
    row_sum: f64,
    free: Rect,
    is_last_row: bool,
    out: &mut Vec<Rect>,
) -> Rect {
    // Wide space: the row is a column on the left edge. Tall space: a row along the top.
    let column = free.w >= free.h;
    let (length, depth) = if column { (free.h, free.w) } else { (free.w, free.h) };

    let thickness = if is_last_row {
        depth
    } else {
        (row_sum / length).min(depth)
    };

    let mut offset = 0.0;
    for (i, &area) in row.iter().enumerate() {
        let extent = if i + 1 == row.len() {
            (length - offset).max(0.0)
        } else {
            length * area / row_sum
        };

        let rect = if column {
            Rect::new(free.x, free.y + offset, thickness, extent)
        } else {
            Rect::new(free.x + offset, free.y, extent, thickness)
        };
        out.push(rect);
        offset += extent;
    }

    if column {
        Rect::new(free.x + thickness, free.y, (free.w - thickness).max(0.0), free.h)
    } else {
        Rect::new(free.x, free.y + thickness, free.w, (free.h - thickness).max(0.0))
    }
}

/// Worst aspect ratio of a row of `row` areas (summing to `sum`) laid along `side`.
///
/// A row holding a zero-area item is infinitely bad, so zeros never get merged
/// into a row with positive items.
pub fn worst_aspect_ratio(row: &[f64], sum: f64, side: f64) -> f64 {
    if row.is_empty() || sum <= 0.0 || side <= 0.0 {
        return f64::INFINITY;
    }
    let side_sq = side * side;
    let sum_sq = sum * sum;
    let max_r = row.iter().copied().fold(0.0, f64::max);
    let min_r = row.iter().copied().fold(f64::INFINITY, f64::min);
    if min_r <= 0.0 {
        return f64::INFINITY;
    }
    let a = (side_sq * max_r) / sum_sq;
    let b = sum_sq / (side_sq * min_r);
    a.max(b)
}
