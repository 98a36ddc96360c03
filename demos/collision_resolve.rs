use flat_collide::{Circle, OrientedRect, Penetrate};

// Boxes dropped at random in a small area, pushed apart until nothing overlaps.
fn main() {
    let mut boxes: Vec<OrientedRect> = (0..30)
        .map(|_| {
            let r = rand::random::<[f32; 3]>();
            OrientedRect::new(
                [40.0 * r[0] - 20.0, 40.0 * r[1] - 20.0],
                4.0,
                2.0,
                std::f32::consts::PI * r[2],
            )
        })
        .collect();

    for step in 0..100 {
        let overlapping = resolve_step(&mut boxes);
        println!("step {}: {} overlapping pairs", step, overlapping);
        if overlapping == 0 {
            break;
        }
    }

    // Circles use a metric test, no axes involved
    let a = Circle::new([0.0, 0.0], 5.0);
    let b = Circle::new([8.0, 0.0], 5.0);
    if let Some(mtv) = a.penetration(b) {
        println!("circle a has to move by {}", mtv);
    }
}

/// Moves each box of an overlapping pair half the way out. Returns the number of pairs
/// that were overlapping.
fn resolve_step(boxes: &mut [OrientedRect]) -> usize {
    let mut overlapping = 0;

    for i in 0..boxes.len() {
        for j in i + 1..boxes.len() {
            let Some(mtv) = boxes[i].penetration(boxes[j]) else {
                continue;
            };
            if mtv.length() < 1e-3 {
                continue;
            }

            overlapping += 1;
            boxes[i].center += mtv * 0.5;
            boxes[j].center -= mtv * 0.5;
        }
    }

    overlapping
}
