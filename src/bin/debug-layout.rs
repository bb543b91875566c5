/// Diagnostic tool to verify profile → layout → draw command pipeline
use profmap::layout::{check_layout, LayoutConfig, Rect};
use profmap::profile::{self, WeightedItem};
use profmap::render::build_draw_commands;
use profmap::render::colors::{color_distance, ColorGenerator};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Stand-in profile when no file is given: a few heavy hitters and a long tail.
fn synthetic_items() -> Vec<WeightedItem> {
    let mut items: Vec<WeightedItem> = (0..40)
        .map(|i| WeightedItem::new(format!("fn_{i}"), 1000.0 / (i as f64 + 1.0).powf(1.3)))
        .collect();
    items.push(WeightedItem::new("idle", 0.0));
    items
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("profmap=debug".parse().unwrap()),
        )
        .init();

    let profile_path = std::env::args().nth(1).map(PathBuf::from);

    println!("=== DIAGNOSTIC: Profile → Layout Pipeline ===");

    let items = match &profile_path {
        Some(path) => {
            println!("Profile: {}", path.display());
            let entries = profile::load_profile(path)?;
            profile::into_weighted_items(&entries)
        }
        None => {
            println!("Profile: (synthetic)");
            synthetic_items()
        }
    };
    println!("\n[1] Items: {}", items.len());

    let total: f64 = items.iter().map(|i| i.weight).sum();
    println!("\n[2] Top 10 items by weight (total={:.4}):", total);
    for (i, item) in items.iter().take(10).enumerate() {
        let share = if total > 0.0 { item.weight / total * 100.0 } else { 0.0 };
        println!("    [{}] '{}' - {:.4} ({:.1}%)", i, item.name, item.weight, share);
    }

    let config = LayoutConfig::default();
    let canvas = config.canvas;
    let mut rng = StdRng::seed_from_u64(0);
    let commands = build_draw_commands(&items, canvas, &ColorGenerator::default(), &mut rng)?;
    println!(
        "\n[3] Layout computed: {} rectangles in {:.0}x{:.0}",
        commands.len(),
        canvas.width,
        canvas.height
    );

    println!("\n[4] Top 10 rectangles:");
    for (i, cmd) in commands.iter().take(10).enumerate() {
        let r = cmd.rect;
        let aspect = if r.w > 0.0 && r.h > 0.0 {
            (r.w / r.h).max(r.h / r.w)
        } else {
            f64::INFINITY
        };
        println!(
            "    [{}] '{}' - {:.1}x{:.1} ({:.0}px²) at ({:.1}, {:.1}) aspect {:.2} color {}",
            i,
            cmd.name,
            r.w,
            r.h,
            r.area(),
            r.x,
            r.y,
            aspect,
            cmd.color
        );
    }

    println!("\n[5] Checking for anomalies:");
    let rects: Vec<Rect> = commands.iter().map(|c| c.rect).collect();
    let weights: Vec<f64> = items.iter().map(|i| i.weight).collect();
    let report = check_layout(&rects, &weights, canvas, config.tolerance);
    println!("    Total rect area: {:.0}px²", report.total_area);
    println!("    Canvas area:     {:.0}px²", report.canvas_area);
    println!("    Expected area:   {:.0}px²", report.expected_area);
    println!("    Coverage: {:.4}%", report.coverage() * 100.0);
    println!("    Zero-area rects: {}", report.zero_area);
    println!("    Out of bounds:   {:?}", report.out_of_bounds);
    println!("    Overlapping:     {:?}", report.overlapping);

    let order_ok = commands
        .iter()
        .zip(&items)
        .all(|(cmd, item)| cmd.name == item.name);
    println!("    Order preserved: {}", order_ok);

    println!("\n[6] Palette spread:");
    let mut closest = u32::MAX;
    for (i, a) in commands.iter().enumerate() {
        for b in &commands[i + 1..] {
            closest = closest.min(color_distance(a.color, b.color));
        }
    }
    if commands.len() > 1 {
        println!("    Closest color pair distance (L1): {}", closest);
    } else {
        println!("    Fewer than two colors");
    }

    println!(
        "\n[7] Verdict: {}",
        if report.is_clean() && order_ok { "OK" } else { "ANOMALIES FOUND" }
    );

    Ok(())
}
