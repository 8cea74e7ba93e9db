use super::*;

#[test]
fn test_depth_empty() {
    let depth = Depth::new();
    assert_eq!(depth.samples(), 0);
    assert_eq!(depth.mean(), 0);
    assert!(depth.percentiles().is_empty());
    assert_eq!(
        depth.json(),
        "{ \"min\": 0, \"mean\": 0, \"max\": 0, \"percentiles\": {  } }"
    );
}

#[test]
fn test_depth_samples() {
    let mut depth = Depth::new();
    for d in [3, 4, 4, 5, 5, 5, 6, 6, 6, 6].iter() {
        depth.sample(*d);
    }
    assert_eq!(depth.samples(), 10);
    assert_eq!(depth.min(), 3);
    assert_eq!(depth.max(), 6);
    assert_eq!(depth.mean(), 5);
    // 6 of 10 samples are at or below depth 5, all 10 at depth 6.
    assert_eq!(depth.percentiles(), vec![(100, 6)]);
}

#[test]
fn test_depth_overflow() {
    let mut depth = Depth::new();
    depth.sample(1000);
    assert_eq!(depth.max(), 1000);
    assert_eq!(depth.percentiles(), vec![(100, MAX_DEPTH - 1)]);
}
