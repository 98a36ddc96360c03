use flat_collide::{AARect, Intersect, OrientedRect, Segment, Triangle, Vec2};

// Finds which shapes are under a few "clicks", and what a drag gesture crosses.
fn main() {
    let button = AARect::new([10.0, 10.0], [60.0, 30.0]);
    let card = OrientedRect::new([100.0, 50.0], 40.0, 60.0, 0.3);
    let arrow = Triangle::new([150.0, 10.0], [190.0, 30.0], [150.0, 50.0]);

    let clicks = [
        Vec2::new(10.0, 10.0),
        Vec2::new(100.0, 50.0),
        Vec2::new(160.0, 30.0),
        Vec2::new(300.0, 300.0),
    ];

    for p in clicks {
        let mut hits = vec![];
        if button.intersects(p) {
            hits.push("button");
        }
        if card.intersects(p) {
            hits.push("card");
        }
        if arrow.intersects(p) {
            hits.push("arrow");
        }
        println!("click at {}: {:?}", p, hits);
    }

    let drag = Segment::new([0.0, 50.0], [200.0, 50.0]);
    let crossings = flat_collide::intersect::segment_rect_intersections(&drag, &card);
    for (point, edge) in crossings.iter() {
        println!(
            "drag crosses the card at {} (edge {} -> {})",
            point, edge.start, edge.end
        );
    }
    println!("drag touches the button: {}", drag.intersects(button));
}
