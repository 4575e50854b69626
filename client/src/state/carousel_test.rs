use super::*;

#[test]
fn next_wraps_to_first_slide() {
    let mut carousel = CarouselState::new(3);
    carousel.next();
    carousel.next();
    assert_eq!(carousel.index, 2);
    carousel.next();
    assert_eq!(carousel.index, 0);
}

#[test]
fn prev_wraps_to_last_slide() {
    let mut carousel = CarouselState::new(4);
    carousel.prev();
    assert_eq!(carousel.index, 3);
}

#[test]
fn empty_carousel_never_moves() {
    let mut carousel = CarouselState::new(0);
    carousel.next();
    carousel.prev();
    carousel.select(0);
    assert_eq!(carousel.index, 0);
    assert!(!carousel.is_active(0));
}

#[test]
fn select_ignores_out_of_range() {
    let mut carousel = CarouselState::new(2);
    carousel.select(1);
    assert!(carousel.is_active(1));
    carousel.select(5);
    assert_eq!(carousel.index, 1);
}
