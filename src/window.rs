use num_traits::Float;

/// Test whether `mass` falls within `tolerance` of `target`, inclusive at
/// both boundaries.
pub fn in_window<T: Float>(mass: T, target: T, tolerance: T) -> bool {
    (mass - target).abs() <= tolerance
}

/// Find the position of the first target in `targets` whose tolerance
/// window contains `mass`.
///
/// Targets are tried in their original order, so when windows overlap the
/// earliest match wins even if a later target is closer. This matches the
/// historical assignment policy and must not be replaced with a
/// closest-match search.
pub fn first_match<T: Float>(mass: T, targets: &[T], tolerance: T) -> Option<usize> {
    targets
        .iter()
        .position(|t| in_window(mass, *t, tolerance))
}
