use super::*;

#[test]
fn rect_dimensions_clamp_inverted_to_zero() {
    let r = Rect::new(5, 5, 2, 9);
    assert_eq!(r.width(), 0);
    assert_eq!(r.height(), 4);
    assert!(r.is_empty());
}

#[test]
fn intersect_of_disjoint_is_default_empty() {
    let a = Rect::new(0, 0, 4, 4);
    let b = Rect::new(4, 0, 8, 4);
    assert_eq!(a.intersect(b), Rect::default());
    assert!(!a.overlaps(b));
}

#[test]
fn intersect_partial_overlap() {
    let a = Rect::new(0, 0, 4, 4);
    let b = Rect::new(-2, 1, 2, 10);
    assert_eq!(a.intersect(b), Rect::new(0, 1, 2, 4));
    assert!(a.overlaps(b));
}

#[test]
fn translate_and_sub_point_are_inverse() {
    let r = Rect::new(1, 2, 3, 4);
    let d = Point::new(-7, 11);
    assert_eq!(r.translate(d).sub_point(d), r);
}

#[test]
fn from_origin_size_matches_corners() {
    let r = Rect::from_origin_size(Point::new(3, -1), Size::new(2, 5));
    assert_eq!(r, Rect::new(3, -1, 5, 4));
    assert_eq!(r.size(), Size::new(2, 5));
}

#[test]
fn point_arithmetic_saturates() {
    let p = Point::new(i32::MAX, 0) + Point::new(1, 1);
    assert_eq!(p, Point::new(i32::MAX, 1));
}

#[test]
fn geometry_serializes_as_plain_fields() {
    let json = serde_json::to_string(&Rect::new(0, 1, 2, 3)).unwrap();
    assert_eq!(json, r#"{"min":{"x":0,"y":1},"max":{"x":2,"y":3}}"#);
}
