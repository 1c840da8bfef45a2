//! Planis demo: classifies a handful of query points against a polygon.
//!
//! Usage:
//! ```text
//! cargo run --example winding
//! RUST_LOG=planis=trace cargo run --example winding   # show degeneracy events
//! ```

use planis::{Point, Polygon, Result, Segment};
use tracing::info;

fn main() -> Result<()> {
    // Default: WARN for everything, INFO for planis and this demo.
    // Override with RUST_LOG env var.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("winding=info".parse().unwrap_or_default())
        .add_directive("planis=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let l_shape = Polygon::new(vec![
        Point::new(0.0, 0.0),
        Point::new(2.0, 0.0),
        Point::new(2.0, 1.0),
        Point::new(1.0, 1.0),
        Point::new(1.0, 2.0),
        Point::new(0.0, 2.0),
    ])?;
    info!(
        area = l_shape.area(),
        convex = l_shape.is_convex(false, false),
        "polygon"
    );

    for q in [
        Point::new(0.5, 1.5),
        Point::new(1.5, 1.5),
        Point::new(1.5, 1.0),
        Point::new(-1.0, 0.0),
    ] {
        let nearest = l_shape
            .edge_segments()
            .map(|e| e.dist(&q))
            .fold(f64::INFINITY, f64::min);
        info!(
            point = %q,
            inside = l_shape.contains(&q, false),
            on_edge = l_shape.has_point_on_edge(&q),
            nearest_edge = nearest,
            "query"
        );
    }

    let a = Segment::new(Point::new(-1.0, 3.0), Point::new(3.0, -1.0));
    let b = Segment::new(Point::new(0.0, 0.0), Point::new(0.0, 0.0));
    info!(
        intersects = a.intersects_with(&b, true),
        distance = a.dist_segment(&b),
        "segment against a degenerate segment"
    );

    if let Some(p) = Point::new(3.0, 3.0).projection_point(&a.p1, &a.p2, false)? {
        info!(foot = %p, "projection");
    }
    let mirrored = Point::new(3.0, 3.0).reflection_point(&a.p1, &a.p2)?;
    info!(mirrored = %mirrored, "reflection");

    Ok(())
}
