use serde::Serialize;

const MAX_ATTEMPTS: u32 = 200;
const COLLISION_PADDING: f64 = 1.0;

/// One placed point of the swarm.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BeeswarmPoint {
    pub price: f64,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
}

/// Places one point per price along the x axis, nudging each point away
/// from `center_y` in growing alternating steps until it stops colliding
/// with already-placed points (two points collide when their centers are
/// closer than the radii plus one unit of padding).
///
/// Points are processed in input order and there is no randomness, so the
/// same ordered input always reproduces the same layout. The search gives
/// up past `max_y_offset` or 200 attempts and leaves the point at its last
/// tried position, overlap allowed; a dense sample degrades instead of
/// looping forever.
pub fn layout_beeswarm(
    prices: &[f64],
    x_scale: impl Fn(f64) -> f64,
    center_y: f64,
    radius: f64,
    max_y_offset: f64,
) -> Vec<BeeswarmPoint> {
    let mut placed: Vec<BeeswarmPoint> = Vec::with_capacity(prices.len());
    for &price in prices {
        let x = x_scale(price);
        let mut y = center_y;
        let mut attempts: u32 = 0;
        while collides_any(&placed, x, y, radius) && attempts < MAX_ATTEMPTS {
            attempts += 1;
            let step = (attempts as f64 / 2.0).ceil();
            let offset = step * (2.0 * radius + 1.0);
            if offset > max_y_offset {
                break;
            }
            // odd attempts go up, even attempts mirror down
            y = if attempts % 2 == 1 {
                center_y - offset
            } else {
                center_y + offset
            };
        }
        placed.push(BeeswarmPoint {
            price,
            x,
            y,
            radius,
        });
    }
    placed
}

fn collides_any(placed: &[BeeswarmPoint], x: f64, y: f64, radius: f64) -> bool {
    placed.iter().any(|p| {
        let dx = p.x - x;
        let dy = p.y - y;
        (dx * dx + dy * dy).sqrt() < p.radius + radius + COLLISION_PADDING
    })
}
